use anyhow::Result;
use clap::Parser;
use reviewmap::cli::{Cli, Commands};
use reviewmap::commands::{handle_analyze, handle_review, AnalyzeConfig, ReviewConfig};

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            path,
            format,
            output,
        } => handle_analyze(AnalyzeConfig {
            path,
            format,
            output,
        }),
        Commands::Review { path } => handle_review(ReviewConfig { path }),
    }
}
