use std::path::PathBuf;

use clap::Parser;
use serde_json::json;

use ghlang::EXIT_CONFIG_ERROR;
use ghlang::tokount::{CountOptions, count_path, parse_excluded_dirs};

/// Count blank, comment and code lines per language and print them as JSON.
#[derive(Parser, Debug)]
#[command(name = "tokount", version, about)]
struct Args {
    /// File or directory to count
    path: PathBuf,

    /// Comma-separated directory names to skip
    excluded: Option<String>,

    /// Follow symbolic links while walking
    #[arg(long)]
    follow_links: bool,
}

fn fail(kind: &str, message: &str, details: &str) -> ! {
    let body = json!({
        "error": {
            "kind": kind,
            "message": message,
            "details": details,
        }
    });
    eprintln!("{body}");
    std::process::exit(EXIT_CONFIG_ERROR);
}

fn main() {
    let args = Args::parse();

    if !args.path.exists() {
        fail(
            "path_not_found",
            "Path does not exist",
            &args.path.display().to_string(),
        );
    }

    let options = CountOptions {
        excluded_dirs: parse_excluded_dirs(args.excluded.as_deref()),
        follow_links: args.follow_links,
    };
    let stats = match count_path(&args.path, &options) {
        Ok(stats) => stats,
        Err(e) => fail("count_failed", "Failed to count lines", &e.to_string()),
    };

    match serde_json::to_string(&stats) {
        Ok(json) => println!("{json}"),
        Err(e) => fail("serialize_failed", "Failed to encode results", &e.to_string()),
    }
}
