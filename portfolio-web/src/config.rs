use serde::Deserialize;

use crate::content;
use crate::error::SiteError;
use crate::links::HOME_PAGE;

pub const CONFIG_ELEMENT_ID: &str = "site-config";
pub const DEFAULT_STORAGE_KEY: &str = "theme";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub home_page: String,
    pub storage_key: String,
    pub brand: Brand,
    pub nav: Vec<NavEntry>,
    pub social: Vec<SocialLink>,
    pub phrases: Vec<String>,
    pub jokes: Vec<String>,
    pub joke_placeholder: String,
    pub timing: TypewriterTiming,
    pub log_level: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Brand {
    pub name: String,
    pub tagline: String,
    pub copyright: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct NavEntry {
    pub label: String,
    pub target: NavTarget,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavTarget {
    /// Anchor on the home page, e.g. `#about`.
    Section(String),
    /// Separate document, e.g. `blog.html`.
    Page(String),
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub icon: String,
    pub href: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TypewriterTiming {
    pub type_delay_ms: u32,
    pub erase_delay_ms: u32,
    pub full_dwell_ms: u32,
    pub empty_dwell_ms: u32,
}

impl Default for TypewriterTiming {
    fn default() -> Self {
        Self {
            type_delay_ms: 100,
            erase_delay_ms: 50,
            full_dwell_ms: 2000,
            empty_dwell_ms: 500,
        }
    }
}

impl Default for Brand {
    fn default() -> Self {
        Self {
            name: content::BRAND_NAME.to_string(),
            tagline: content::BRAND_TAGLINE.to_string(),
            copyright: content::COPYRIGHT.to_string(),
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        let nav = content::NAV_LINKS
            .iter()
            .map(|link| match link {
                content::NavLink::Section(label, anchor) => NavEntry {
                    label: label.to_string(),
                    target: NavTarget::Section(anchor.to_string()),
                },
                content::NavLink::Page(label, file) => NavEntry {
                    label: label.to_string(),
                    target: NavTarget::Page(file.to_string()),
                },
            })
            .collect();
        let social = content::SOCIAL_LINKS
            .iter()
            .map(|(label, icon, href)| SocialLink {
                label: label.to_string(),
                icon: icon.to_string(),
                href: href.to_string(),
            })
            .collect();
        Self {
            home_page: HOME_PAGE.to_string(),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            brand: Brand::default(),
            nav,
            social,
            phrases: content::PHRASES.iter().map(|s| s.to_string()).collect(),
            jokes: content::JOKES.iter().map(|s| s.to_string()).collect(),
            joke_placeholder: content::JOKE_PLACEHOLDER.to_string(),
            timing: TypewriterTiming::default(),
            log_level: "info".to_string(),
        }
    }
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> Result<Self, SiteError> {
        let config: SiteConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults when the page carries no inline config block.
    pub fn load(inline: Option<&str>) -> Result<Self, SiteError> {
        match inline.map(str::trim).filter(|raw| !raw.is_empty()) {
            Some(raw) => Self::from_json(raw),
            None => Ok(Self::default()),
        }
    }

    fn validate(&self) -> Result<(), SiteError> {
        if self.phrases.is_empty() {
            return Err(SiteError::EmptyList("phrases"));
        }
        if self.jokes.is_empty() {
            return Err(SiteError::EmptyList("jokes"));
        }
        if self.home_page.trim().is_empty() {
            return Err(SiteError::EmptyList("home page"));
        }
        if self.storage_key.trim().is_empty() {
            return Err(SiteError::EmptyList("storage key"));
        }
        Ok(())
    }

    pub fn max_log_level(&self) -> tracing::Level {
        match self.log_level.to_ascii_lowercase().as_str() {
            "error" => tracing::Level::ERROR,
            "warn" | "warning" => tracing::Level::WARN,
            "debug" => tracing::Level::DEBUG,
            "trace" => tracing::Level::TRACE,
            _ => tracing::Level::INFO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_carry_site_content() {
        let config = SiteConfig::default();
        assert_eq!(config.home_page, "index.html");
        assert_eq!(config.storage_key, "theme");
        assert_eq!(config.phrases.len(), 5);
        assert_eq!(config.jokes.len(), 8);
        assert_eq!(
            config.nav[3],
            NavEntry {
                label: "Insights (Blog)".to_string(),
                target: NavTarget::Page("blog.html".to_string()),
            }
        );
        assert_eq!(config.timing, TypewriterTiming::default());
    }

    #[test]
    fn missing_or_blank_inline_config_uses_defaults() {
        assert_eq!(SiteConfig::load(None).unwrap(), SiteConfig::default());
        assert_eq!(SiteConfig::load(Some("  \n ")).unwrap(), SiteConfig::default());
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config = SiteConfig::load(Some(
            r#"{"phrases": ["Hi.", "Bye."], "timing": {"full_dwell_ms": 3000}, "nav": [{"label": "Blog", "target": {"page": "blog.html"}}]}"#,
        ))
        .unwrap();
        assert_eq!(config.phrases, vec!["Hi.".to_string(), "Bye.".to_string()]);
        assert_eq!(config.timing.full_dwell_ms, 3000);
        assert_eq!(config.timing.type_delay_ms, 100);
        assert_eq!(config.jokes.len(), 8);
        assert_eq!(config.nav.len(), 1);
    }

    #[test]
    fn empty_lists_are_rejected() {
        let err = SiteConfig::from_json(r#"{"jokes": []}"#).unwrap_err();
        assert_eq!(err.to_string(), "site config has no jokes");
        let err = SiteConfig::from_json(r#"{"phrases": []}"#).unwrap_err();
        assert_eq!(err.to_string(), "site config has no phrases");
    }

    #[test]
    fn malformed_json_is_a_decode_error() {
        assert!(matches!(
            SiteConfig::from_json("{nope").unwrap_err(),
            SiteError::ConfigDecode(_)
        ));
    }

    #[test]
    fn log_level_parse_is_lenient() {
        let mut config = SiteConfig::default();
        assert_eq!(config.max_log_level(), tracing::Level::INFO);
        config.log_level = "WARNING".to_string();
        assert_eq!(config.max_log_level(), tracing::Level::WARN);
        config.log_level = "verbose".to_string();
        assert_eq!(config.max_log_level(), tracing::Level::INFO);
    }
}
