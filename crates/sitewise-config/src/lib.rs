//! Documentation site configuration for Sitewise.
//!
//! Parses `site.json` / `site.toml` configuration files with serde and
//! provides auto-discovery of config files in parent directories.
//!
//! The configuration is a single declarative record: site metadata plus a
//! [`ThemeConfig`] describing navigation, sidebar groups, and social links.
//! It is loaded once at build start, validated, and treated as immutable
//! afterwards. Serializing a loaded configuration and parsing it back
//! yields an identical value, with all sequences in authoring order.

mod theme;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub use theme::{NavEntry, SidebarGroup, SidebarItem, SocialIcon, SocialLink, ThemeConfig};

/// Configuration filenames to search for, in priority order.
const CONFIG_FILENAMES: [&str; 2] = ["site.json", "site.toml"];

/// Site configuration record.
///
/// Field names and nesting follow the schema expected by the documentation
/// renderer: `title`, `description`, and `themeConfig`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Site title.
    #[serde(default)]
    pub title: String,
    /// Site description.
    #[serde(default)]
    pub description: String,
    /// Navigation, sidebar, and social link configuration.
    #[serde(default, rename = "themeConfig")]
    pub theme: ThemeConfig,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// JSON parsing or serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
    /// TOML serialization error.
    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
    /// File extension is neither `.json` nor `.toml`.
    #[error("Unsupported configuration format: {}", .0.display())]
    UnsupportedFormat(PathBuf),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
}

/// On-disk configuration format, chosen by file extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    /// Determine the format from a file extension.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Some(Self::Json),
            Some("toml") => Some(Self::Toml),
            _ => None,
        }
    }

    /// Default configuration filename for this format.
    #[must_use]
    pub const fn default_filename(self) -> &'static str {
        match self {
            Self::Json => "site.json",
            Self::Toml => "site.toml",
        }
    }

    /// Parse a configuration from file content.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is malformed for this format.
    pub fn parse(self, content: &str) -> Result<SiteConfig, ConfigError> {
        match self {
            Self::Json => Ok(serde_json::from_str(content)?),
            Self::Toml => Ok(toml::from_str(content)?),
        }
    }

    /// Render a configuration to file content, with a trailing newline.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn render(self, config: &SiteConfig) -> Result<String, ConfigError> {
        let mut content = match self {
            Self::Json => serde_json::to_string_pretty(config)?,
            Self::Toml => toml::to_string_pretty(config)?,
        };
        if !content.ends_with('\n') {
            content.push('\n');
        }
        Ok(content)
    }
}

impl SiteConfig {
    /// Load configuration from file.
    ///
    /// If `config_path` is provided, loads from that file. Otherwise,
    /// searches for `site.json` or `site.toml` in the current directory
    /// and parents.
    ///
    /// The configuration is validated after parsing.
    ///
    /// # Errors
    ///
    /// Returns an error if no config file is found, or if parsing or
    /// validation fails.
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            return Self::load_from_file(path);
        }

        match Self::discover_config() {
            Some(discovered) => Self::load_from_file(&discovered),
            None => Err(ConfigError::NotFound(PathBuf::from(CONFIG_FILENAMES[0]))),
        }
    }

    /// Load configuration from a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, has an unsupported
    /// extension, is malformed, or fails validation.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let format = ConfigFormat::from_path(path)
            .ok_or_else(|| ConfigError::UnsupportedFormat(path.to_path_buf()))?;
        let content = std::fs::read_to_string(path)?;
        let config = format.parse(&content)?;
        config.validate()?;
        tracing::info!(path = %path.display(), "Loaded site configuration");
        Ok(config)
    }

    /// Search for a config file in the current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            for filename in CONFIG_FILENAMES {
                let candidate = current.join(filename);
                if candidate.exists() {
                    tracing::debug!(path = %candidate.display(), "Discovered configuration file");
                    return Some(candidate);
                }
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Validate configuration values.
    ///
    /// Checks site metadata and delegates to [`ThemeConfig::validate`] for
    /// navigation, sidebar, and social link entries. Called automatically
    /// after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        theme::require_non_empty(&self.title, "title")?;
        self.theme.validate()
    }

    /// Starter configuration for a fresh documentation site.
    ///
    /// Always passes [`validate`](Self::validate).
    #[must_use]
    pub fn starter() -> Self {
        Self {
            title: "Go Tables".to_owned(),
            description: "Data table builder for Go web applications".to_owned(),
            theme: ThemeConfig {
                nav: vec![
                    NavEntry::new("Home", "/"),
                    NavEntry::new("Docs", "/introduction"),
                ],
                sidebar: vec![
                    SidebarGroup {
                        text: "Guide".to_owned(),
                        items: vec![
                            SidebarItem::new("Introduction", "/introduction"),
                            SidebarItem::new("Installation", "/installation"),
                        ],
                    },
                    SidebarGroup {
                        text: "Features".to_owned(),
                        items: vec![
                            SidebarItem::new("Fields", "/fields"),
                            SidebarItem::new("Filters", "/filters"),
                            SidebarItem::new("Search", "/search"),
                        ],
                    },
                ],
                social_links: vec![SocialLink {
                    icon: SocialIcon::Github,
                    link: "https://github.com/humweb/go-tables".to_owned(),
                }],
            },
        }
    }
}
