//! Theme configuration: navigation, sidebar, and social links.
//!
//! Provides the [`ThemeConfig`] record and its nested entry types. All
//! sequences are ordered and preserve their input order through
//! serialization, so the renderer sees entries exactly as authored.
//!
//! # Validation
//!
//! Entries carry no invariants at construction time; [`ThemeConfig::validate`]
//! checks the structural rules after loading:
//! - every nav entry has non-empty `text` and `link`
//! - every sidebar group has non-empty `text` and at least one item
//! - every sidebar item has non-empty `text` and `link`
//! - at least one social link exists and each targets an http(s) URL

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Theme configuration consumed by the documentation renderer.
///
/// Serialized under the `themeConfig` key of [`SiteConfig`](crate::SiteConfig).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Top navigation entries, in display order.
    #[serde(default)]
    pub nav: Vec<NavEntry>,
    /// Sidebar groups, in display order.
    #[serde(default)]
    pub sidebar: Vec<SidebarGroup>,
    /// Social profile links rendered in the site header.
    #[serde(default, rename = "socialLinks")]
    pub social_links: Vec<SocialLink>,
}

/// A top navigation entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavEntry {
    /// Display text.
    pub text: String,
    /// Target path or URL.
    pub link: String,
}

impl NavEntry {
    /// Create a nav entry.
    #[must_use]
    pub fn new(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: link.into(),
        }
    }
}

/// A named, ordered group of sidebar links.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarGroup {
    /// Group heading text.
    pub text: String,
    /// Links shown under this group, in display order.
    pub items: Vec<SidebarItem>,
}

/// A single sidebar link.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarItem {
    /// Display text.
    pub text: String,
    /// Target path or URL.
    pub link: String,
}

impl SidebarItem {
    /// Create a sidebar item.
    #[must_use]
    pub fn new(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: link.into(),
        }
    }
}

/// An external profile link rendered as an icon.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    /// Icon tag recognized by the renderer.
    pub icon: SocialIcon,
    /// Profile URL.
    pub link: String,
}

/// Icon tags recognized by the documentation renderer.
///
/// Serialized lowercase. Unrecognized tags are rejected at parse time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialIcon {
    Github,
    Twitter,
    X,
    Discord,
    Facebook,
    Instagram,
    Linkedin,
    Mastodon,
    Slack,
    Youtube,
}

impl SocialIcon {
    /// The lowercase tag used in configuration files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Github => "github",
            Self::Twitter => "twitter",
            Self::X => "x",
            Self::Discord => "discord",
            Self::Facebook => "facebook",
            Self::Instagram => "instagram",
            Self::Linkedin => "linkedin",
            Self::Mastodon => "mastodon",
            Self::Slack => "slack",
            Self::Youtube => "youtube",
        }
    }
}

impl fmt::Display for SocialIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ThemeConfig {
    /// Validate navigation, sidebar, and social link entries.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (i, entry) in self.nav.iter().enumerate() {
            require_non_empty(&entry.text, &format!("nav[{i}].text"))?;
            require_non_empty(&entry.link, &format!("nav[{i}].link"))?;
        }

        for (i, group) in self.sidebar.iter().enumerate() {
            require_non_empty(&group.text, &format!("sidebar[{i}].text"))?;
            if group.items.is_empty() {
                return Err(ConfigError::Validation(format!(
                    "sidebar[{i}].items cannot be empty"
                )));
            }
            for (j, item) in group.items.iter().enumerate() {
                require_non_empty(&item.text, &format!("sidebar[{i}].items[{j}].text"))?;
                require_non_empty(&item.link, &format!("sidebar[{i}].items[{j}].link"))?;
            }
        }

        if self.social_links.is_empty() {
            return Err(ConfigError::Validation(
                "socialLinks must contain at least one entry".to_owned(),
            ));
        }
        for (i, social) in self.social_links.iter().enumerate() {
            require_non_empty(&social.link, &format!("socialLinks[{i}].link"))?;
            require_http_url(&social.link, &format!("socialLinks[{i}].link"))?;
        }

        Ok(())
    }
}

/// Require a string field to be non-empty.
pub(crate) fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
pub(crate) fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn valid_theme() -> ThemeConfig {
        ThemeConfig {
            nav: vec![NavEntry::new("Home", "/")],
            sidebar: vec![SidebarGroup {
                text: "Guide".to_owned(),
                items: vec![SidebarItem::new("Introduction", "/introduction")],
            }],
            social_links: vec![SocialLink {
                icon: SocialIcon::Github,
                link: "https://github.com/humweb/go-tables".to_owned(),
            }],
        }
    }

    /// Assert that validation fails with expected substrings in the error message.
    fn assert_validation_error(theme: &ThemeConfig, expected_substrings: &[&str]) {
        let result = theme.validate();
        assert!(result.is_err(), "Expected validation to fail");
        let err = result.unwrap_err();
        assert!(
            matches!(err, ConfigError::Validation(_)),
            "Expected ConfigError::Validation, got {err:?}"
        );
        let msg = err.to_string();
        for s in expected_substrings {
            assert!(
                msg.contains(s),
                "Expected error to contain '{s}', got: {msg}"
            );
        }
    }

    // Parsing tests

    #[test]
    fn test_parse_nav_preserves_order() {
        let json = r#"{
            "nav": [
                {"text": "Home", "link": "/"},
                {"text": "Docs", "link": "/introduction"}
            ]
        }"#;
        let theme: ThemeConfig = serde_json::from_str(json).unwrap();
        assert_eq!(theme.nav.len(), 2);
        assert_eq!(theme.nav[0], NavEntry::new("Home", "/"));
        assert_eq!(theme.nav[1], NavEntry::new("Docs", "/introduction"));
    }

    #[test]
    fn test_parse_sidebar_groups_and_items() {
        let json = r#"{
            "sidebar": [
                {"text": "Guide", "items": [
                    {"text": "Introduction", "link": "/introduction"},
                    {"text": "Installation", "link": "/installation"}
                ]},
                {"text": "Features", "items": [
                    {"text": "Fields", "link": "/fields"}
                ]}
            ]
        }"#;
        let theme: ThemeConfig = serde_json::from_str(json).unwrap();
        assert_eq!(theme.sidebar.len(), 2);
        assert_eq!(theme.sidebar[0].text, "Guide");
        assert_eq!(theme.sidebar[0].items.len(), 2);
        assert_eq!(theme.sidebar[0].items[1].link, "/installation");
        assert_eq!(theme.sidebar[1].text, "Features");
        assert_eq!(theme.sidebar[1].items.len(), 1);
    }

    #[test]
    fn test_parse_social_links_icon_tags() {
        let json = r#"{
            "socialLinks": [
                {"icon": "github", "link": "https://github.com/humweb/go-tables"},
                {"icon": "discord", "link": "https://discord.gg/example"}
            ]
        }"#;
        let theme: ThemeConfig = serde_json::from_str(json).unwrap();
        assert_eq!(theme.social_links.len(), 2);
        assert_eq!(theme.social_links[0].icon, SocialIcon::Github);
        assert_eq!(theme.social_links[1].icon, SocialIcon::Discord);
    }

    #[test]
    fn test_parse_unknown_icon_rejected() {
        let json = r#"{"socialLinks": [{"icon": "geocities", "link": "https://example.com"}]}"#;
        let result: Result<ThemeConfig, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_missing_sections_default_empty() {
        let theme: ThemeConfig = serde_json::from_str("{}").unwrap();
        assert!(theme.nav.is_empty());
        assert!(theme.sidebar.is_empty());
        assert!(theme.social_links.is_empty());
    }

    #[test]
    fn test_parse_unknown_field_ignored() {
        let json = r#"{"nav": [], "sidebar": [], "socialLinks": [], "logo": "/logo.svg"}"#;
        let result: Result<ThemeConfig, _> = serde_json::from_str(json);
        assert!(result.is_ok());
    }

    #[test]
    fn test_social_icon_display_matches_wire_tag() {
        assert_eq!(SocialIcon::Github.to_string(), "github");
        assert_eq!(
            serde_json::to_value(SocialIcon::Youtube).unwrap(),
            serde_json::json!("youtube")
        );
    }

    // Round-trip tests

    #[test]
    fn test_round_trip_json_identical() {
        let theme = valid_theme();
        let json = serde_json::to_string(&theme).unwrap();
        let reparsed: ThemeConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(theme, reparsed);
    }

    #[test]
    fn test_round_trip_preserves_sidebar_order() {
        let theme = ThemeConfig {
            sidebar: vec![
                SidebarGroup {
                    text: "B Group".to_owned(),
                    items: vec![
                        SidebarItem::new("Second", "/second"),
                        SidebarItem::new("First", "/first"),
                    ],
                },
                SidebarGroup {
                    text: "A Group".to_owned(),
                    items: vec![SidebarItem::new("Third", "/third")],
                },
            ],
            ..Default::default()
        };
        let json = serde_json::to_string(&theme).unwrap();
        let reparsed: ThemeConfig = serde_json::from_str(&json).unwrap();
        // Order is authoring order, not alphabetical
        assert_eq!(reparsed.sidebar[0].text, "B Group");
        assert_eq!(reparsed.sidebar[0].items[0].text, "Second");
        assert_eq!(reparsed.sidebar[1].text, "A Group");
    }

    #[test]
    fn test_serialized_keys_match_renderer_schema() {
        let theme = valid_theme();
        let value = serde_json::to_value(&theme).unwrap();
        assert!(value.get("nav").is_some());
        assert!(value.get("sidebar").is_some());
        assert!(value.get("socialLinks").is_some());
        assert!(value.get("social_links").is_none());
    }

    // Validation tests

    #[test]
    fn test_validate_valid_theme_passes() {
        assert!(valid_theme().validate().is_ok());
    }

    #[test]
    fn test_validate_nav_empty_text() {
        let mut theme = valid_theme();
        theme.nav.push(NavEntry::new("", "/docs"));
        assert_validation_error(&theme, &["nav[1].text", "empty"]);
    }

    #[test]
    fn test_validate_nav_empty_link() {
        let mut theme = valid_theme();
        theme.nav[0].link = String::new();
        assert_validation_error(&theme, &["nav[0].link", "empty"]);
    }

    #[test]
    fn test_validate_sidebar_group_empty_text() {
        let mut theme = valid_theme();
        theme.sidebar[0].text = String::new();
        assert_validation_error(&theme, &["sidebar[0].text", "empty"]);
    }

    #[test]
    fn test_validate_sidebar_group_no_items() {
        let mut theme = valid_theme();
        theme.sidebar.push(SidebarGroup {
            text: "Empty".to_owned(),
            items: Vec::new(),
        });
        assert_validation_error(&theme, &["sidebar[1].items", "empty"]);
    }

    #[test]
    fn test_validate_sidebar_item_empty_link() {
        let mut theme = valid_theme();
        theme.sidebar[0].items[0].link = String::new();
        assert_validation_error(&theme, &["sidebar[0].items[0].link", "empty"]);
    }

    #[test]
    fn test_validate_social_links_required() {
        let mut theme = valid_theme();
        theme.social_links.clear();
        assert_validation_error(&theme, &["socialLinks", "at least one"]);
    }

    #[test]
    fn test_validate_social_link_invalid_scheme() {
        let mut theme = valid_theme();
        theme.social_links[0].link = "ftp://github.com/humweb/go-tables".to_owned();
        assert_validation_error(&theme, &["socialLinks[0].link", "http"]);
    }

    #[test]
    fn test_validate_social_link_plain_http_accepted() {
        let mut theme = valid_theme();
        theme.social_links[0].link = "http://internal.example.com/repo".to_owned();
        assert!(theme.validate().is_ok());
    }

    #[test]
    fn test_validate_empty_nav_and_sidebar_allowed() {
        let theme = ThemeConfig {
            social_links: valid_theme().social_links,
            ..Default::default()
        };
        assert!(theme.validate().is_ok());
    }
}
