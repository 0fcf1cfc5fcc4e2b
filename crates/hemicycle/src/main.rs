mod cli;
mod commands;

use clap::Parser;
use cli::{CacheAction, Cli, Commands};
use hemicycle_core::Config;
use hemicycle_pipeline::Pipeline;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries the JSON output
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Commands::Version = cli.command {
        return commands::version::run();
    }

    let config = match cli.config.clone().or_else(Config::default_path) {
        Some(path) => Config::load(&path)?,
        None => Config::new(),
    };
    let legislature = cli.legislature.unwrap_or(config.legislature);
    let root = config.resolve_cache_root(cli.cache_dir.as_deref());
    let pipeline = Pipeline::new(config, &root)?;

    match cli.command {
        Commands::Cache { action } => match action {
            CacheAction::Info => commands::cache::run_info(&pipeline),
            CacheAction::Clear => commands::cache::run_clear(&pipeline),
            CacheAction::Warm => commands::cache::run_warm(&pipeline, legislature),
        },
        Commands::Deputies => commands::tables::run_deputies(&pipeline, legislature),
        Commands::Bills { limit } => commands::tables::run_bills(&pipeline, legislature, limit),
        Commands::Votes { limit } => commands::tables::run_votes(&pipeline, legislature, limit),
        Commands::Amendments { limit } => {
            commands::tables::run_amendments(&pipeline, legislature, limit)
        }
        Commands::Activity => commands::tables::run_activity(&pipeline, legislature),
        Commands::Stats => commands::tables::run_stats(&pipeline, legislature),
        Commands::Debates { limit } => commands::debates::run_list(&pipeline, legislature, limit),
        Commands::Debate { uid, tally } => {
            commands::debates::run_show(&pipeline, &uid, legislature, tally)
        }
        Commands::Version => commands::version::run(),
    }
}
