//! GitHub-backed language aggregation.

mod client;
mod filter;
mod http;

pub use client::{
    AggregationReport, GITHUB_API, GitHubClient, LanguageBytes, PER_PAGE, RepoListing, RepoQuery,
    Repository,
};
pub use filter::{RepoFilter, normalize_repo_pattern, should_ignore, validate_repo_name};
pub use http::{API_VERSION, Clock, HttpClient, HttpResponse, ReqwestClient, SystemClock};
