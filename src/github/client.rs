use std::collections::HashSet;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::filter::{RepoFilter, validate_repo_name};
use super::http::{Clock, HttpClient, HttpResponse, ReqwestClient, SystemClock};
use crate::config::Visibility;
use crate::error::{GhlangError, Result};
use crate::language::LanguageTotals;
use crate::output::FetchProgress;

pub const GITHUB_API: &str = "https://api.github.com";
pub const PER_PAGE: u32 = 100;
const REQUEST_TIMEOUT_SECS: u64 = 30;
const RATE_LIMIT_GRACE_SECS: i64 = 2;

/// A repository as returned by `GET /user/repos`.
///
/// Only `full_name` is used; the remaining fields are kept so the listing can
/// be written out unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Repository {
    pub full_name: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Repository {
    #[must_use]
    pub fn named(full_name: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
            extra: serde_json::Map::new(),
        }
    }
}

/// Per-repository language breakdown: language name to bytes.
pub type LanguageBytes = LanguageTotals;

/// De-duplicated, filtered repository list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RepoListing {
    pub repositories: Vec<Repository>,
    pub ignored: usize,
}

/// Result of aggregating language bytes over every listed repository.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AggregationReport {
    pub listing: RepoListing,
    pub totals: LanguageTotals,
    pub processed: usize,
    pub skipped: usize,
}

/// Which repositories to ask GitHub for, and which to drop afterwards.
#[derive(Debug, Clone)]
pub struct RepoQuery {
    pub affiliation: String,
    pub visibility: Visibility,
    pub ignored_repos: Vec<String>,
}

pub struct GitHubClient<H: HttpClient = ReqwestClient, C: Clock = SystemClock> {
    http: H,
    clock: C,
    api: String,
    affiliation: String,
    visibility: Visibility,
    filter: RepoFilter,
    show_progress: bool,
}

#[cfg(not(tarpaulin_include))]
impl GitHubClient {
    /// Client talking to api.github.com with the given token.
    ///
    /// # Errors
    /// Returns an error if the token cannot be sent as a header, the HTTP
    /// client cannot be built, or an ignore pattern is too large to compile.
    pub fn new(token: &str, query: &RepoQuery) -> Result<Self> {
        let http = ReqwestClient::github(token, Duration::from_secs(REQUEST_TIMEOUT_SECS))?;
        Self::with_transport(http, SystemClock, query)
    }
}

impl<H: HttpClient, C: Clock> GitHubClient<H, C> {
    /// Build a client over an arbitrary transport and clock.
    ///
    /// # Errors
    /// Returns `InvalidPattern` if an ignore pattern is too large to compile.
    pub fn with_transport(http: H, clock: C, query: &RepoQuery) -> Result<Self> {
        Ok(Self {
            http,
            clock,
            api: GITHUB_API.to_string(),
            affiliation: query.affiliation.clone(),
            visibility: query.visibility,
            filter: RepoFilter::new(&query.ignored_repos)?,
            show_progress: false,
        })
    }

    #[must_use]
    pub fn with_api_base(mut self, api: impl Into<String>) -> Self {
        self.api = api.into().trim_end_matches('/').to_string();
        self
    }

    #[must_use]
    pub const fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// GET with a single retry after a rate-limit wait.
    ///
    /// A 403 carrying `X-RateLimit-Remaining: 0` sleeps until the reset time
    /// (plus a small grace period) and reissues the request once. Whatever the
    /// second response is, it is final.
    fn get(&self, url: &str, query: &[(&str, String)]) -> Result<HttpResponse> {
        let mut response = self.http.get(url, query)?;

        if is_rate_limited(&response) {
            let wait = self.rate_limit_wait(&response);
            warn!("Rate limited, sleeping for {}s...", wait.as_secs());
            self.clock.sleep(wait);
            response = self.http.get(url, query)?;
        }

        response.error_for_status(url)
    }

    fn rate_limit_wait(&self, response: &HttpResponse) -> Duration {
        let reset = response
            .header("x-ratelimit-reset")
            .and_then(|v| v.trim().parse::<i64>().ok())
            .unwrap_or(0);
        let now = i64::try_from(self.clock.now_unix()).unwrap_or(i64::MAX);
        let secs = reset
            .saturating_sub(now)
            .saturating_add(RATE_LIMIT_GRACE_SECS)
            .max(0);
        Duration::from_secs(secs.unsigned_abs())
    }

    /// List every repository the token can see, de-duplicated and filtered.
    ///
    /// Pages are requested until an empty one comes back. Any failure here
    /// aborts: a partial listing would silently undercount.
    ///
    /// # Errors
    /// Returns an error if any page request fails or cannot be parsed.
    pub fn list_repositories(&self) -> Result<RepoListing> {
        info!("Fetching repos");
        let url = format!("{}/user/repos", self.api);
        let mut all = Vec::new();
        let mut page: u32 = 1;

        loop {
            debug!("Fetching page {page}...");
            let query = [
                ("per_page", PER_PAGE.to_string()),
                ("page", page.to_string()),
                ("affiliation", self.affiliation.clone()),
                ("visibility", self.visibility.as_str().to_string()),
                ("sort", "pushed".to_string()),
                ("direction", "desc".to_string()),
            ];
            let response = self.get(&url, &query)?;
            let batch: Vec<Repository> = serde_json::from_str(&response.body)?;
            if batch.is_empty() {
                break;
            }
            all.extend(batch);
            page += 1;
        }

        let listing = self.dedupe_and_filter(all);
        info!(
            "Found {} repos ({} ignored)",
            listing.repositories.len(),
            listing.ignored
        );
        Ok(listing)
    }

    fn dedupe_and_filter(&self, repos: Vec<Repository>) -> RepoListing {
        let mut seen = HashSet::new();
        let mut listing = RepoListing::default();

        for repo in repos {
            if !seen.insert(repo.full_name.clone()) {
                continue;
            }
            if self.filter.should_ignore(&repo.full_name) {
                debug!("Ignoring repo: {}", repo.full_name);
                listing.ignored += 1;
                continue;
            }
            listing.repositories.push(repo);
        }

        listing
    }

    /// Language breakdown (bytes per language) of one repository.
    ///
    /// # Errors
    /// Returns `InvalidRepoName` for names that are not `owner/repo`, an HTTP
    /// or transport error if the request fails, or a JSON error for a
    /// malformed body.
    pub fn get_repo_languages(&self, full_name: &str) -> Result<LanguageBytes> {
        if !validate_repo_name(full_name) {
            return Err(GhlangError::InvalidRepoName(full_name.to_string()));
        }
        let url = format!("{}/repos/{full_name}/languages", self.api);
        let response = self.get(&url, &[])?;
        Ok(serde_json::from_str(&response.body)?)
    }

    /// Sum language bytes over every listed repository.
    ///
    /// Repositories whose breakdown cannot be fetched are skipped and counted;
    /// they never abort the run. An empty listing yields empty totals.
    ///
    /// # Errors
    /// Returns an error if the repository listing fails, or on a failure that
    /// is not a per-repository fetch problem.
    pub fn get_all_language_stats(&self) -> Result<AggregationReport> {
        let listing = self.list_repositories()?;
        let mut report = AggregationReport::default();

        if listing.repositories.is_empty() {
            warn!("No repositories found, nothing to do");
            report.listing = listing;
            return Ok(report);
        }

        info!("Fetching language stats for each repo");
        let total = u64::try_from(listing.repositories.len()).unwrap_or(u64::MAX);
        let progress = FetchProgress::new(total, !self.show_progress);

        for repo in &listing.repositories {
            progress.set_message(&repo.full_name);
            match self.get_repo_languages(&repo.full_name) {
                Ok(languages) => {
                    for (language, bytes) in languages {
                        *report.totals.entry(language).or_insert(0) += bytes;
                    }
                    report.processed += 1;
                    debug!("Processed {}", repo.full_name);
                }
                Err(e) if e.is_repo_fetch_failure() => {
                    report.skipped += 1;
                    warn!("Skipped {}: {e}", repo.full_name);
                }
                Err(e) => {
                    progress.finish();
                    return Err(e);
                }
            }
            progress.inc();
        }
        progress.finish();

        info!(
            "Processed {} repositories ({} skipped)",
            report.processed, report.skipped
        );
        report.listing = listing;
        Ok(report)
    }
}

fn is_rate_limited(response: &HttpResponse) -> bool {
    response.status == 403 && response.header("x-ratelimit-remaining") == Some("0")
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
