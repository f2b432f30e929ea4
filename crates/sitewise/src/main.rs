//! Sitewise CLI - Documentation site configuration toolkit.
//!
//! Provides commands for:
//! - `check`: Validate a site configuration file
//! - `init`: Write a starter configuration
//! - `show`: Print the normalized JSON rendition of a configuration

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CheckArgs, InitArgs, ShowArgs};
use output::Output;

/// Sitewise - Documentation site configuration toolkit.
#[derive(Parser)]
#[command(name = "sitewise", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a site configuration file.
    Check(CheckArgs),
    /// Write a starter configuration file.
    Init(InitArgs),
    /// Print the normalized JSON rendition of a configuration.
    Show(ShowArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // Check if verbose flag is set for the check command
    let verbose = matches!(&cli.command, Commands::Check(args) if args.verbose);

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(verbose))
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Check(args) => args.execute(),
        Commands::Init(args) => args.execute(),
        Commands::Show(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}

/// Log filter for the given verbosity.
///
/// `--verbose` enables INFO level, otherwise use `RUST_LOG` or default to WARN.
fn log_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    }
}
