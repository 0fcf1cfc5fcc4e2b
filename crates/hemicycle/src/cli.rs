use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "hemicycle")]
#[command(version)]
#[command(about = "Fetch, normalize and cache French National Assembly open data")]
pub struct Cli {
    /// Legislature number (defaults to the configured one)
    #[arg(long, global = true)]
    pub legislature: Option<u32>,

    /// Cache root, overriding HEMICYCLE_CACHE_DIR and the config file
    #[arg(long, global = true)]
    pub cache_dir: Option<PathBuf>,

    /// TOML config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Inspect or manage the cache
    Cache {
        #[command(subcommand)]
        action: CacheAction,
    },

    /// List active deputies
    Deputies,

    /// List legislative dossiers
    Bills {
        /// Only normalize the first N archive members
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// List recorded votes
    Votes {
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// List amendments
    Amendments {
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Amendment activity per deputy
    Activity,

    /// Deputy and vote statistics
    Stats,

    /// List session transcripts
    Debates {
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Full text of one session transcript
    Debate {
        /// Transcript uid, e.g. CRSANR5L17S2025O1N012
        uid: String,

        /// Print per-speaker counts instead of paragraphs
        #[arg(long)]
        tally: bool,
    },

    /// Print version information
    Version,
}

#[derive(Subcommand)]
pub enum CacheAction {
    /// Entry count, size and age range
    Info,
    /// Remove every cached entry
    Clear,
    /// Populate every dataset for the legislature
    Warm,
}
