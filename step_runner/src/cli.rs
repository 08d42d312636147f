use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "step-runner", about = "Recompute algorithm step traces as JSON", version)]
pub struct Cli {
    /// Log at debug level (overrides RUST_LOG).
    #[arg(short, long, global = true)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run a JSON request tagged by `"algorithm"` (stdin when no file is given).
    Run {
        #[arg(long)]
        input: Option<PathBuf>,
        #[arg(long)]
        pretty: bool,
    },
    /// Sort an inline array, e.g. `sort quick 5,3,1` or `sort heap-sort "[5,3,1]"`.
    Sort {
        algorithm: String,
        #[arg(allow_hyphen_values = true)]
        array: String,
        #[arg(long)]
        pretty: bool,
    },
    Search {
        algorithm: String,
        #[arg(allow_hyphen_values = true)]
        array: String,
        #[arg(allow_hyphen_values = true)]
        target: i64,
        #[arg(long)]
        pretty: bool,
    },
    Match {
        algorithm: String,
        text: String,
        pattern: String,
        #[arg(long)]
        pretty: bool,
    },
    /// List every stepper with its complexity.
    Catalog {
        #[arg(long)]
        json: bool,
        /// Only entries of this family (e.g. `graph`, `dynamic-programming`).
        #[arg(long)]
        family: Option<String>,
    },
}
