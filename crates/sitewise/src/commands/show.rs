//! `sitewise show` command implementation.

use std::path::PathBuf;

use clap::Args;
use console::Term;
use sitewise_config::{ConfigFormat, SiteConfig};

use crate::error::CliError;

/// Arguments for the show command.
#[derive(Args)]
pub(crate) struct ShowArgs {
    /// Path to configuration file (default: auto-discover site.json/site.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl ShowArgs {
    /// Execute the show command.
    ///
    /// Loads and validates the configuration, then prints its normalized
    /// JSON rendition to stdout.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded or rendered.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let config = SiteConfig::load(self.config.as_deref())?;
        let rendered = ConfigFormat::Json.render(&config)?;

        // Data goes to stdout; status messages elsewhere use stderr
        Term::stdout().write_str(&rendered)?;

        Ok(())
    }
}
