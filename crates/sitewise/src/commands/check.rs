//! `sitewise check` command implementation.

use std::path::PathBuf;

use clap::Args;
use sitewise_config::SiteConfig;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    /// Path to configuration file (default: auto-discover site.json/site.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded or fails
    /// validation.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let config = SiteConfig::load(self.config.as_deref())?;

        output.success(&format!("Configuration OK: {}", config.title));
        for line in summary_lines(&config) {
            output.detail(&line);
        }

        Ok(())
    }
}

/// Build human-readable summary lines for a validated configuration.
fn summary_lines(config: &SiteConfig) -> Vec<String> {
    let item_count: usize = config.theme.sidebar.iter().map(|g| g.items.len()).sum();

    vec![
        format!("nav entries: {}", config.theme.nav.len()),
        format!(
            "sidebar groups: {} ({item_count} items)",
            config.theme.sidebar.len()
        ),
        format!("social links: {}", config.theme.social_links.len()),
    ]
}
