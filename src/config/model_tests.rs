use super::*;

fn parse(toml_src: &str) -> Config {
    Config::from_file(toml::from_str(toml_src).unwrap())
}

#[test]
fn empty_file_gives_defaults() {
    let config = parse("");
    assert_eq!(config, Config::default());
    assert_eq!(config.affiliation, DEFAULT_AFFILIATION);
    assert_eq!(config.visibility, Visibility::All);
    assert_eq!(config.top_n_languages, 5);
    assert!(config.save_json);
    assert!(config.save_repos);
    assert!(!config.verbose);
    assert_eq!(config.theme, Theme::Light);
    assert_eq!(
        config.ignored_dirs,
        ["node_modules", "vendor", ".git", "dist", "build", "__pycache__"]
    );
}

#[test]
fn reads_every_section() {
    let config = parse(
        r#"
        [github]
        token = "ghp_abc"
        affiliation = "owner"
        visibility = "private"
        ignored_repos = ["me/old-*"]

        [tokount]
        ignored_dirs = ["target"]
        binary = "/opt/bin/tokount"

        [output]
        directory = "/tmp/stats"
        save_json = false
        save_repos = false
        top_n_languages = 8

        [preferences]
        verbose = true
        theme = "dark"
        "#,
    );

    assert_eq!(config.token, "ghp_abc");
    assert_eq!(config.affiliation, "owner");
    assert_eq!(config.visibility, Visibility::Private);
    assert_eq!(config.ignored_repos, ["me/old-*"]);
    assert_eq!(config.ignored_dirs, ["target"]);
    assert_eq!(config.tokount_binary, Some(PathBuf::from("/opt/bin/tokount")));
    assert_eq!(config.output_dir, PathBuf::from("/tmp/stats"));
    assert!(!config.save_json);
    assert!(!config.save_repos);
    assert_eq!(config.top_n_languages, 8);
    assert!(config.verbose);
    assert_eq!(config.theme, Theme::Dark);
}

#[test]
fn cloc_section_is_an_alias() {
    let config = parse("[cloc]\nignored_dirs = [\"third_party\"]\n");
    assert_eq!(config.ignored_dirs, ["third_party"]);
}

#[test]
fn placeholder_token_is_empty() {
    let config = parse("[github]\ntoken = \"YOUR_TOKEN_HERE\"\n");
    assert!(!config.has_token());
}

#[test]
fn invalid_visibility_is_rejected() {
    assert!(toml::from_str::<ConfigFile>("[github]\nvisibility = \"secret\"\n").is_err());
}

#[test]
fn overrides_replace_file_values() {
    let mut config = parse("[output]\ntop_n_languages = 3\n");
    config.apply_overrides(&CliOverrides {
        token: Some("cli-token".to_string()),
        output_dir: Some(PathBuf::from("/elsewhere")),
        top_n_languages: Some(10),
        save_json: Some(false),
        verbose: Some(true),
        theme: Some(Theme::Dark),
    });

    assert_eq!(config.token, "cli-token");
    assert_eq!(config.output_dir, PathBuf::from("/elsewhere"));
    assert_eq!(config.top_n_languages, 10);
    assert!(!config.save_json);
    assert!(config.verbose);
    assert_eq!(config.theme, Theme::Dark);
}

#[test]
fn none_overrides_keep_file_values() {
    let mut config = parse("[github]\ntoken = \"file\"\n[output]\ntop_n_languages = 3\n");
    let before = config.clone();

    config.apply_overrides(&CliOverrides::default());

    assert_eq!(config, before);
}

#[test]
fn redacted_masks_token_only() {
    let config = parse("[github]\ntoken = \"secret\"\n");
    let shown = config.redacted();
    assert_ne!(shown.token, "secret");
    assert_eq!(shown.affiliation, config.affiliation);

    let no_token = Config::default().redacted();
    assert!(no_token.token.is_empty());
}

#[test]
fn visibility_strings() {
    assert_eq!(Visibility::All.as_str(), "all");
    assert_eq!(Visibility::Public.to_string(), "public");
    assert_eq!(Visibility::Private.as_str(), "private");
}
