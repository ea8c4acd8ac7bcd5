mod commands;
mod input;
mod logging;
mod progress;

use anyhow::Result;
use clap::{Parser, Subcommand};
use hashline_core::Algorithm;
use std::path::PathBuf;

/// Hashline — SHA-256 and SHA-512 digests of files.
#[derive(Parser, Debug)]
#[command(
    name = "hashline",
    version,
    about,
    args_conflicts_with_subcommands = true,
    arg_required_else_help = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// File to hash
    file: Option<PathBuf>,

    /// Hash algorithm: sha256 or sha512
    #[arg(short, long, default_value = "sha512", global = true)]
    algorithm: Algorithm,

    /// Print one JSON object per line instead of `<digest>  <path>`
    #[arg(long, conflicts_with = "tag")]
    json: bool,

    /// Print BSD-style tagged lines: `SHA512 (<path>) = <digest>`
    #[arg(long)]
    tag: bool,

    /// Draw a progress bar on stderr while hashing
    #[arg(long)]
    progress: bool,

    /// Increase log verbosity
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show how a file is framed into padded blocks
    Inspect {
        /// File to inspect
        file: PathBuf,
    },
}

impl Cli {
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn show_progress(&self) -> bool {
        self.progress && !self.quiet
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    match &cli.command {
        Some(Commands::Inspect { file }) => commands::inspect::run(&cli, file),
        None => match &cli.file {
            Some(file) => commands::hash::run(&cli, file),
            None => anyhow::bail!("no input file given. Run `hashline --help` for usage."),
        },
    }
}
