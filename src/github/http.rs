//! HTTP and time abstractions used by the API clients.
//!
//! Both are traits so the aggregation logic can be exercised with in-memory
//! responses and a clock that never actually sleeps.

use std::collections::HashMap;
use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT};

use crate::error::{GhlangError, Result};

pub const API_VERSION: &str = "2022-11-28";
const USER_AGENT_VALUE: &str = concat!("ghlang/", env!("CARGO_PKG_VERSION"));

/// A fully buffered HTTP response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    /// Header names are stored lowercased.
    pub headers: HashMap<String, String>,
    pub body: String,
}

impl HttpResponse {
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            headers: HashMap::new(),
            body: body.into(),
        }
    }

    #[must_use]
    pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.insert(name.to_ascii_lowercase(), value.into());
        self
    }

    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// Turn a non-2xx response into an `Http` error.
    ///
    /// # Errors
    /// Returns `GhlangError::Http` when the status is not a success.
    pub fn error_for_status(self, url: &str) -> Result<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(GhlangError::Http {
                url: url.to_string(),
                status: self.status,
            })
        }
    }
}

/// HTTP client abstraction for dependency injection.
pub trait HttpClient {
    /// Perform a GET request with query parameters.
    ///
    /// Non-2xx statuses are returned as responses, not errors; only transport
    /// failures are errors.
    ///
    /// # Errors
    /// Returns `GhlangError::Request` if the request could not be completed.
    fn get(&self, url: &str, query: &[(&str, String)]) -> Result<HttpResponse>;
}

/// Wall clock abstraction for rate-limit handling.
pub trait Clock {
    /// Current time as seconds since the Unix epoch.
    fn now_unix(&self) -> u64;

    /// Block the calling thread.
    fn sleep(&self, duration: Duration);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_unix(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| d.as_secs())
    }

    fn sleep(&self, duration: Duration) {
        thread::sleep(duration);
    }
}

/// Production HTTP client using reqwest's blocking API.
///
/// This implementation cannot be unit tested without a real HTTP server,
/// so it is excluded from coverage measurement.
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    inner: reqwest::blocking::Client,
}

#[cfg(not(tarpaulin_include))]
impl ReqwestClient {
    /// Plain client used for public resources.
    ///
    /// # Errors
    /// Returns an error if the TLS backend cannot be initialized.
    pub fn new(timeout: Duration) -> Result<Self> {
        Self::build(HeaderMap::new(), timeout)
    }

    /// Client preconfigured with GitHub API headers and a bearer token.
    ///
    /// # Errors
    /// Returns an error if the token contains characters not allowed in a
    /// header, or if the TLS backend cannot be initialized.
    pub fn github(token: &str, timeout: Duration) -> Result<Self> {
        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|_| GhlangError::Config("GitHub token contains invalid characters".into()))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "x-github-api-version",
            HeaderValue::from_static(API_VERSION),
        );
        Self::build(headers, timeout)
    }

    fn build(mut headers: HeaderMap, timeout: Duration) -> Result<Self> {
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));
        let inner = reqwest::blocking::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| GhlangError::Config(format!("Failed to create HTTP client: {e}")))?;
        Ok(Self { inner })
    }
}

#[cfg(not(tarpaulin_include))]
impl HttpClient for ReqwestClient {
    fn get(&self, url: &str, query: &[(&str, String)]) -> Result<HttpResponse> {
        let response = self.inner.get(url).query(query).send().map_err(|e| {
            let message = if e.is_timeout() {
                "request timed out".to_string()
            } else if e.is_connect() {
                "could not connect".to_string()
            } else {
                e.to_string()
            };
            GhlangError::Request {
                url: url.to_string(),
                message,
            }
        })?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_ascii_lowercase(), v.to_string()))
            })
            .collect();
        let body = response.text().map_err(|e| GhlangError::Request {
            url: url.to_string(),
            message: format!("failed to read response body: {e}"),
        })?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

#[cfg(test)]
#[path = "http_tests.rs"]
mod tests;
