/// Written to the config path on first run.
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# ghlang configuration

[github]
# Personal access token with `repo` scope (or set GITHUB_TOKEN)
token = "YOUR_TOKEN_HERE"
affiliation = "owner,collaborator,organization_member"
# all, public or private
visibility = "all"
# Repositories to skip; globs and github.com URLs are accepted
ignored_repos = [
    # "someone/some-repo",
    # "some-org/*",
]

[tokount]
# Directory names skipped by `ghlang local`
ignored_dirs = ["node_modules", "vendor", ".git", "dist", "build", "__pycache__"]
# binary = "/path/to/tokount"

[output]
directory = "~/Documents/ghlang-stats"
save_json = true
save_repos = true
top_n_languages = 5

[preferences]
verbose = false
# light or dark
theme = "light"
"#;
