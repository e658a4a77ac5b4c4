//! GitHub language colors from linguist's `languages.yml`.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use indexmap::IndexMap;
use serde_yaml::Value;
use sha2::{Digest, Sha256};
use tracing::{debug, info};

use crate::error::Result;
use crate::github::{HttpClient, ReqwestClient};

pub const LINGUIST_LANGUAGES_URL: &str =
    "https://raw.githubusercontent.com/github/linguist/master/lib/linguist/languages.yml";

/// Color used for languages missing from the table.
pub const FALLBACK_COLOR: &str = "#cccccc";

const CACHE_TTL_SECS: u64 = 24 * 3600;
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Language name to hex color.
pub type ColorTable = IndexMap<String, String>;

/// Color for a language, falling back to gray.
#[must_use]
pub fn color_for<'a>(colors: &'a ColorTable, language: &str) -> &'a str {
    colors.get(language).map_or(FALLBACK_COLOR, String::as_str)
}

/// Extract colors from a linguist `languages.yml` document.
///
/// Only entries that are mappings with a string `color` field are kept.
///
/// # Errors
/// Returns an error if the document is not a YAML mapping.
pub fn parse_linguist_colors(yaml: &str) -> Result<ColorTable> {
    let data: IndexMap<String, Value> = serde_yaml::from_str(yaml)?;

    Ok(data
        .into_iter()
        .filter_map(|(language, props)| {
            let Value::Mapping(props) = props else {
                return None;
            };
            match props.get("color") {
                Some(Value::String(color)) => Some((language, color.clone())),
                _ => None,
            }
        })
        .collect())
}

/// Fetches the color table, with an on-disk cache keyed by URL.
#[derive(Debug, Clone)]
pub struct ColorSource {
    url: String,
    cache_dir: Option<PathBuf>,
    ttl: Duration,
}

impl Default for ColorSource {
    fn default() -> Self {
        Self {
            url: LINGUIST_LANGUAGES_URL.to_string(),
            cache_dir: default_cache_dir(),
            ttl: Duration::from_secs(CACHE_TTL_SECS),
        }
    }
}

impl ColorSource {
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    /// Use a specific cache directory, or `None` to disable caching.
    #[must_use]
    pub fn with_cache_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.cache_dir = dir;
        self
    }

    #[must_use]
    pub const fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Load colors, preferring a fresh cache entry over the network.
    ///
    /// # Errors
    /// Returns an error if the request fails, the server answers with a
    /// non-2xx status, or the document cannot be parsed.
    pub fn load_with_client(&self, client: &impl HttpClient) -> Result<ColorTable> {
        if let Some(cached) = self.read_cache() {
            debug!("Using cached language colors");
            return Ok(cached);
        }

        info!("Grabbing language colors from GitHub");
        let response = client.get(&self.url, &[])?.error_for_status(&self.url)?;
        let colors = parse_linguist_colors(&response.body)?;
        info!("Loaded {} language colors", colors.len());

        // Cache write failures only cost a refetch next time
        let _ = self.write_cache(&colors);

        Ok(colors)
    }

    /// Load colors over HTTPS.
    ///
    /// # Errors
    /// Same as [`ColorSource::load_with_client`].
    #[cfg(not(tarpaulin_include))]
    pub fn load(&self) -> Result<ColorTable> {
        let client = ReqwestClient::new(Duration::from_secs(REQUEST_TIMEOUT_SECS))?;
        self.load_with_client(&client)
    }

    fn cache_file(&self) -> Option<PathBuf> {
        self.cache_dir
            .as_ref()
            .map(|dir| dir.join(format!("{}.json", hash_url(&self.url))))
    }

    fn read_cache(&self) -> Option<ColorTable> {
        let path = self.cache_file()?;
        if !is_fresh(&path, self.ttl) {
            return None;
        }
        let content = fs::read_to_string(&path).ok()?;
        serde_json::from_str(&content).ok()
    }

    fn write_cache(&self, colors: &ColorTable) -> Option<()> {
        let path = self.cache_file()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).ok()?;
        }
        let json = serde_json::to_string(colors).ok()?;
        fs::write(&path, json).ok()
    }
}

fn default_cache_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "ghlang").map(|dirs| dirs.cache_dir().join("colors"))
}

fn hash_url(url: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(url.as_bytes());
    format!("{:x}", hasher.finalize())
}

fn is_fresh(path: &Path, ttl: Duration) -> bool {
    let Ok(metadata) = fs::metadata(path) else {
        return false;
    };
    let Ok(modified) = metadata.modified() else {
        return false;
    };
    let Ok(elapsed) = SystemTime::now().duration_since(modified) else {
        return false;
    };
    elapsed < ttl
}

#[cfg(test)]
#[path = "colors_tests.rs"]
mod tests;
