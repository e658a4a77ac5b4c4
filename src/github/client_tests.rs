use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};

use super::*;

const NOW: u64 = 1_700_000_000;

/// Scripted transport: each URL has a queue of responses; the last one repeats.
#[derive(Default)]
struct MockHttp {
    routes: RefCell<HashMap<String, VecDeque<Result<HttpResponse>>>>,
    calls: RefCell<Vec<(String, Vec<(String, String)>)>>,
}

impl MockHttp {
    fn route(self, url: &str, response: HttpResponse) -> Self {
        self.routes
            .borrow_mut()
            .entry(url.to_string())
            .or_default()
            .push_back(Ok(response));
        self
    }

    fn route_err(self, url: &str, err: GhlangError) -> Self {
        self.routes
            .borrow_mut()
            .entry(url.to_string())
            .or_default()
            .push_back(Err(err));
        self
    }

    fn calls_to(&self, url: &str) -> usize {
        self.calls.borrow().iter().filter(|(u, _)| u == url).count()
    }

    fn total_calls(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl HttpClient for MockHttp {
    fn get(&self, url: &str, query: &[(&str, String)]) -> Result<HttpResponse> {
        self.calls.borrow_mut().push((
            url.to_string(),
            query
                .iter()
                .map(|(k, v)| ((*k).to_string(), v.clone()))
                .collect(),
        ));

        // Paginated listing: route by page number when present
        let key = query
            .iter()
            .find(|(k, _)| *k == "page")
            .map_or_else(|| url.to_string(), |(_, page)| format!("{url}?page={page}"));

        let mut routes = self.routes.borrow_mut();
        let Some(queue) = routes.get_mut(&key) else {
            return Ok(HttpResponse::new(404, "{\"message\":\"Not Found\"}"));
        };
        if queue.len() > 1 {
            return queue.pop_front().unwrap_or_else(|| Ok(HttpResponse::new(500, "")));
        }
        match queue.front() {
            Some(Ok(r)) => Ok(r.clone()),
            Some(Err(e)) => Err(GhlangError::Request {
                url: url.to_string(),
                message: e.to_string(),
            }),
            None => Ok(HttpResponse::new(500, "")),
        }
    }
}

#[derive(Default)]
struct MockClock {
    sleeps: RefCell<Vec<Duration>>,
}

impl Clock for MockClock {
    fn now_unix(&self) -> u64 {
        NOW
    }

    fn sleep(&self, duration: Duration) {
        self.sleeps.borrow_mut().push(duration);
    }
}

const API: &str = "https://api.test";
const REPOS: &str = "https://api.test/user/repos";

fn langs_url(full_name: &str) -> String {
    format!("{API}/repos/{full_name}/languages")
}

fn page_key(page: u32) -> String {
    format!("{REPOS}?page={page}")
}

fn repos_json(names: &[&str]) -> String {
    let items: Vec<String> = names
        .iter()
        .map(|n| format!(r#"{{"full_name":"{n}","private":false}}"#))
        .collect();
    format!("[{}]", items.join(","))
}

fn query(ignored: &[&str]) -> RepoQuery {
    RepoQuery {
        affiliation: "owner".to_string(),
        visibility: Visibility::All,
        ignored_repos: ignored.iter().map(|s| (*s).to_string()).collect(),
    }
}

fn client(http: MockHttp, ignored: &[&str]) -> GitHubClient<MockHttp, MockClock> {
    GitHubClient::with_transport(http, MockClock::default(), &query(ignored))
        .unwrap()
        .with_api_base(API)
}

/// Listing with a single page of the given repos followed by an empty page.
fn listing(names: &[&str]) -> MockHttp {
    MockHttp::default()
        .route(&page_key(1), HttpResponse::new(200, repos_json(names)))
        .route(&page_key(2), HttpResponse::new(200, "[]"))
}

// ============================================================================
// list_repositories
// ============================================================================

#[test]
fn list_sends_expected_query() {
    let c = client(listing(&["a/b"]), &[]);
    c.list_repositories().unwrap();

    let calls = c.http.calls.borrow();
    let (url, params) = &calls[0];
    assert_eq!(url, REPOS);
    let params: HashMap<_, _> = params.iter().cloned().collect();
    assert_eq!(params["per_page"], "100");
    assert_eq!(params["page"], "1");
    assert_eq!(params["affiliation"], "owner");
    assert_eq!(params["visibility"], "all");
    assert_eq!(params["sort"], "pushed");
    assert_eq!(params["direction"], "desc");
}

#[test]
fn list_paginates_until_empty_page() {
    let http = MockHttp::default()
        .route(&page_key(1), HttpResponse::new(200, repos_json(&["a/one", "a/two"])))
        .route(&page_key(2), HttpResponse::new(200, repos_json(&["a/three"])))
        .route(&page_key(3), HttpResponse::new(200, "[]"));
    let c = client(http, &[]);

    let listing = c.list_repositories().unwrap();

    let names: Vec<_> = listing
        .repositories
        .iter()
        .map(|r| r.full_name.as_str())
        .collect();
    assert_eq!(names, ["a/one", "a/two", "a/three"]);
    assert_eq!(c.http.calls_to(REPOS), 3);
}

#[test]
fn list_dedupes_keeping_first_occurrence() {
    let http = MockHttp::default()
        .route(&page_key(1), HttpResponse::new(200, repos_json(&["a/b", "c/d"])))
        .route(&page_key(2), HttpResponse::new(200, repos_json(&["a/b"])))
        .route(&page_key(3), HttpResponse::new(200, "[]"));
    let c = client(http, &[]);

    let listing = c.list_repositories().unwrap();

    let names: Vec<_> = listing
        .repositories
        .iter()
        .map(|r| r.full_name.as_str())
        .collect();
    assert_eq!(names, ["a/b", "c/d"]);
}

#[test]
fn list_drops_ignored_and_counts_them() {
    let c = client(
        listing(&["user/keep", "user/ignored-repo", "org/x-private", "USER/IGNORED-REPO"]),
        &["user/ignored-repo", "https://github.com/org/*-private/"],
    );

    let listing = c.list_repositories().unwrap();

    assert_eq!(listing.repositories.len(), 1);
    assert_eq!(listing.repositories[0].full_name, "user/keep");
    assert_eq!(listing.ignored, 3);
}

#[test]
fn list_keeps_extra_fields() {
    let c = client(listing(&["a/b"]), &[]);
    let listing = c.list_repositories().unwrap();
    assert_eq!(
        listing.repositories[0].extra.get("private"),
        Some(&serde_json::Value::Bool(false))
    );
}

#[test]
fn list_failure_is_fatal() {
    let http = MockHttp::default()
        .route(&page_key(1), HttpResponse::new(200, repos_json(&["a/b"])))
        .route(&page_key(2), HttpResponse::new(502, "bad gateway"));
    let c = client(http, &[]);

    let err = c.list_repositories().unwrap_err();
    assert!(matches!(err, GhlangError::Http { status: 502, .. }));
}

// ============================================================================
// get_repo_languages and rate limiting
// ============================================================================

#[test]
fn repo_languages_parsed() {
    let http = MockHttp::default().route(
        &langs_url("torvalds/linux"),
        HttpResponse::new(200, r#"{"C": 1200000000, "Assembly": 9000000, "Rust": 500}"#),
    );
    let c = client(http, &[]);

    let languages = c.get_repo_languages("torvalds/linux").unwrap();

    assert_eq!(languages["C"], 1_200_000_000);
    assert_eq!(languages["Assembly"], 9_000_000);
    assert_eq!(languages["Rust"], 500);
}

#[test]
fn rate_limit_sleeps_once_and_retries_once() {
    let url = langs_url("user/repo");
    let http = MockHttp::default()
        .route(
            &url,
            HttpResponse::new(403, "")
                .with_header("X-RateLimit-Remaining", "0")
                .with_header("X-RateLimit-Reset", "0"),
        )
        .route(&url, HttpResponse::new(200, r#"{"Python": 1000}"#));
    let c = client(http, &[]);

    let languages = c.get_repo_languages("user/repo").unwrap();

    assert_eq!(languages.len(), 1);
    assert_eq!(languages["Python"], 1000);
    assert_eq!(c.http.total_calls(), 2);
    assert_eq!(c.clock.sleeps.borrow().len(), 1);
}

#[test]
fn rate_limit_wait_uses_reset_header() {
    let url = langs_url("user/repo");
    let reset = NOW + 30;
    let http = MockHttp::default()
        .route(
            &url,
            HttpResponse::new(403, "")
                .with_header("X-RateLimit-Remaining", "0")
                .with_header("X-RateLimit-Reset", reset.to_string()),
        )
        .route(&url, HttpResponse::new(200, "{}"));
    let c = client(http, &[]);

    c.get_repo_languages("user/repo").unwrap();

    assert_eq!(*c.clock.sleeps.borrow(), vec![Duration::from_secs(32)]);
}

#[test]
fn rate_limit_wait_never_negative() {
    let url = langs_url("user/repo");
    let http = MockHttp::default()
        .route(
            &url,
            HttpResponse::new(403, "")
                .with_header("X-RateLimit-Remaining", "0")
                .with_header("X-RateLimit-Reset", (NOW - 100).to_string()),
        )
        .route(&url, HttpResponse::new(200, "{}"));
    let c = client(http, &[]);

    c.get_repo_languages("user/repo").unwrap();

    assert_eq!(*c.clock.sleeps.borrow(), vec![Duration::ZERO]);
}

#[test]
fn second_rate_limit_is_not_retried() {
    let url = langs_url("user/repo");
    let limited = HttpResponse::new(403, "")
        .with_header("X-RateLimit-Remaining", "0")
        .with_header("X-RateLimit-Reset", "0");
    let http = MockHttp::default()
        .route(&url, limited.clone())
        .route(&url, limited);
    let c = client(http, &[]);

    let err = c.get_repo_languages("user/repo").unwrap_err();

    assert!(matches!(err, GhlangError::Http { status: 403, .. }));
    assert_eq!(c.http.total_calls(), 2);
    assert_eq!(c.clock.sleeps.borrow().len(), 1);
}

#[test]
fn plain_forbidden_is_not_retried() {
    let url = langs_url("user/repo");
    let http = MockHttp::default().route(
        &url,
        HttpResponse::new(403, "").with_header("X-RateLimit-Remaining", "12"),
    );
    let c = client(http, &[]);

    let err = c.get_repo_languages("user/repo").unwrap_err();

    assert!(matches!(err, GhlangError::Http { status: 403, .. }));
    assert_eq!(c.http.total_calls(), 1);
    assert!(c.clock.sleeps.borrow().is_empty());
}

#[test]
fn server_error_is_not_retried() {
    let url = langs_url("user/repo");
    let http = MockHttp::default()
        .route(&url, HttpResponse::new(500, ""))
        .route(&url, HttpResponse::new(200, r#"{"JavaScript": 5000}"#));
    let c = client(http, &[]);

    let err = c.get_repo_languages("user/repo").unwrap_err();

    assert!(matches!(err, GhlangError::Http { status: 500, .. }));
    assert_eq!(c.http.total_calls(), 1);
}

#[test]
fn invalid_repo_name_makes_no_request() {
    let c = client(MockHttp::default(), &[]);

    let err = c.get_repo_languages("owner/repo/extra").unwrap_err();

    assert!(matches!(err, GhlangError::InvalidRepoName(_)));
    assert_eq!(c.http.total_calls(), 0);
}

// ============================================================================
// get_all_language_stats
// ============================================================================

#[test]
fn aggregate_sums_successes_and_skips_failures() {
    let http = listing(&["a/one", "a/two", "a/three"])
        .route(&langs_url("a/one"), HttpResponse::new(200, r#"{"C": 10}"#))
        .route(
            &langs_url("a/two"),
            HttpResponse::new(200, r#"{"C": 5, "Rust": 2}"#),
        )
        .route(&langs_url("a/three"), HttpResponse::new(404, ""));
    let c = client(http, &[]);

    let report = c.get_all_language_stats().unwrap();

    assert_eq!(report.totals.len(), 2);
    assert_eq!(report.totals["C"], 15);
    assert_eq!(report.totals["Rust"], 2);
    assert_eq!(report.processed, 2);
    assert_eq!(report.skipped, 1);
}

#[test]
fn aggregate_skips_transport_failures() {
    let http = listing(&["a/one", "a/two"])
        .route_err(
            &langs_url("a/one"),
            GhlangError::Request {
                url: langs_url("a/one"),
                message: "connection reset".to_string(),
            },
        )
        .route(&langs_url("a/two"), HttpResponse::new(200, r#"{"Go": 7}"#));
    let c = client(http, &[]);

    let report = c.get_all_language_stats().unwrap();

    assert_eq!(report.totals["Go"], 7);
    assert_eq!(report.skipped, 1);
    assert_eq!(report.processed, 1);
}

#[test]
fn aggregate_empty_listing_is_empty_not_error() {
    let http = MockHttp::default().route(&page_key(1), HttpResponse::new(200, "[]"));
    let c = client(http, &[]);

    let report = c.get_all_language_stats().unwrap();

    assert!(report.totals.is_empty());
    assert_eq!(report.processed, 0);
    assert_eq!(c.http.total_calls(), 1);
}

#[test]
fn aggregate_all_ignored_is_empty() {
    let c = client(listing(&["me/private-notes"]), &["me/*"]);

    let report = c.get_all_language_stats().unwrap();

    assert!(report.totals.is_empty());
    assert_eq!(report.listing.ignored, 1);
}

#[test]
fn aggregate_listing_failure_aborts() {
    let http = MockHttp::default().route(&page_key(1), HttpResponse::new(401, ""));
    let c = client(http, &[]);

    assert!(matches!(
        c.get_all_language_stats(),
        Err(GhlangError::Http { status: 401, .. })
    ));
}

#[test]
fn aggregate_returns_listing_for_persistence() {
    let http = listing(&["a/one"]).route(&langs_url("a/one"), HttpResponse::new(200, "{}"));
    let c = client(http, &[]);

    let report = c.get_all_language_stats().unwrap();

    assert_eq!(report.listing.repositories, vec![Repository {
        full_name: "a/one".to_string(),
        extra: serde_json::from_str(r#"{"private": false}"#).unwrap(),
    }]);
}

#[test]
fn api_base_trailing_slash_trimmed() {
    let c = client(MockHttp::default(), &[]).with_api_base("https://example.test/");
    assert_eq!(c.api, "https://example.test");
}

#[test]
fn unclosed_bracket_pattern_ignores_literal_name() {
    let http = listing(&["a/[b", "a/b"])
        .route(&langs_url("a/b"), HttpResponse::new(200, r#"{"Go": 5}"#));
    let c = client(http, &["a/[b"]);

    let report = c.get_all_language_stats().unwrap();

    assert_eq!(report.listing.ignored, 1);
    assert_eq!(report.processed, 1);
    assert_eq!(report.totals["Go"], 5);
}
