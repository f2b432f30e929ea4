//! `sitewise init` command implementation.

use std::path::PathBuf;

use clap::{Args, ValueEnum};
use sitewise_config::{ConfigFormat, SiteConfig};

use crate::error::CliError;
use crate::output::Output;

/// Output format for the generated configuration file.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub(crate) enum FormatArg {
    Json,
    Toml,
}

impl From<FormatArg> for ConfigFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => Self::Json,
            FormatArg::Toml => Self::Toml,
        }
    }
}

/// Arguments for the init command.
#[derive(Args)]
pub(crate) struct InitArgs {
    /// Target path (default: site.json or site.toml in the current directory).
    path: Option<PathBuf>,

    /// Configuration format (ignored when PATH is given; its extension wins).
    #[arg(short, long, value_enum, default_value_t = FormatArg::Json)]
    format: FormatArg,

    /// Overwrite an existing file.
    #[arg(long)]
    force: bool,
}

impl InitArgs {
    /// Execute the init command.
    ///
    /// # Errors
    ///
    /// Returns an error if the target exists without `--force`, has an
    /// unsupported extension, or cannot be written.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let (target, format) = resolve_target(self.path, self.format.into())?;

        if target.exists() && !self.force {
            return Err(CliError::Validation(format!(
                "{} already exists (use --force to overwrite)",
                target.display()
            )));
        }

        let content = format.render(&SiteConfig::starter())?;
        std::fs::write(&target, content)?;

        output.success(&format!("Created {}", target.display()));
        Ok(())
    }
}

/// Resolve the target path and format.
///
/// An explicit path determines the format from its extension; otherwise the
/// `--format` flag picks the default filename.
fn resolve_target(
    path: Option<PathBuf>,
    format: ConfigFormat,
) -> Result<(PathBuf, ConfigFormat), CliError> {
    match path {
        Some(path) => {
            let format = ConfigFormat::from_path(&path).ok_or_else(|| {
                CliError::Validation(format!(
                    "{} must have a .json or .toml extension",
                    path.display()
                ))
            })?;
            Ok((path, format))
        }
        None => Ok((PathBuf::from(format.default_filename()), format)),
    }
}
