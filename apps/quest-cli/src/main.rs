//! # quest-cli
//!
//! Interactive shell for the quest goal tracker.
//!
//! A menu loop over stdin/stdout that drives the core engine:
//! create goals, list them, record completions, and save/load the
//! store to a flat text file. All prompting and raw-input validation
//! happens here; the core never touches the terminal.

mod shell;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Quest — track goals and earn points.
#[derive(Parser)]
#[command(name = "quest", version, about)]
struct Cli {
    /// Default file name offered at the save/load prompts.
    #[arg(long, default_value = "goals.txt")]
    file: String,
}

fn main() -> Result<()> {
    // Logs go to stderr so they don't interleave with the menu on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let cli = Cli::parse();
    tracing::debug!(file = %cli.file, "starting interactive shell");
    shell::Shell::new(cli.file).run()
}
