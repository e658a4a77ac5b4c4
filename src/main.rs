use clap::Parser;

use ghlang::cli::{Cli, Commands};
use ghlang::commands::{run_config, run_github, run_local};

fn main() {
    let cli = Cli::parse();

    let exit_code = match &cli.command {
        Commands::Github(args) => run_github(args),
        Commands::Local(args) => run_local(args),
        Commands::Config(args) => run_config(args),
    };

    std::process::exit(exit_code);
}
