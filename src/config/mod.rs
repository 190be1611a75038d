//! Configuration management for lever-jobs

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::error::{ConfigError, Result};

/// Default Lever postings endpoint; the site identifier is appended verbatim
pub const DEFAULT_API_BASE: &str = "https://api.lever.co/v0/postings/";

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Lever site identifier (the `<company>` in jobs.lever.co/<company>)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_identifier: Option<String>,

    /// Postings API base URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_base: Option<String>,

    /// HTTP request timeout in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// How long fetched postings stay cached, in seconds
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,

    /// Saved widget instance
    #[serde(default)]
    pub widget: WidgetSettings,
}

/// Form fields of the sidebar widget
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WidgetSettings {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub site_identifier: String,
}

impl WidgetSettings {
    /// Build widget settings from raw form input, stripping markup.
    pub fn from_form(title: &str, site_identifier: &str) -> Self {
        Self {
            title: strip_tags(title),
            site_identifier: strip_tags(site_identifier),
        }
    }
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_cache_ttl_secs() -> u64 {
    crate::cache::POSITIONS_TTL.as_secs()
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".lever-jobs").join("config.yaml"))
    }

    /// Resolve an optional override path, falling back to the default location
    pub fn resolve_path(path: Option<&str>) -> Result<PathBuf> {
        match path {
            Some(p) => Ok(PathBuf::from(p)),
            None => Self::default_path(),
        }
    }

    /// Load configuration from an optional override path
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        Self::load_from(Self::resolve_path(path)?)
    }

    /// Load configuration, or start from defaults when no file exists yet
    pub fn load_or_default(path: Option<&str>) -> Result<Self> {
        match Self::load_at(path) {
            Err(crate::error::Error::Config(ConfigError::NotFound)) => Ok(Self::default()),
            other => other,
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: PathBuf) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound.into());
        }

        let contents = std::fs::read_to_string(&path)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;

        Ok(config)
    }

    /// Save configuration to an optional override path
    pub fn save_at(&self, path: Option<&str>) -> Result<()> {
        self.save_to(Self::resolve_path(path)?)
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents =
            serde_yaml::to_string(self).map_err(|e| ConfigError::SaveError(e.to_string()))?;

        std::fs::write(&path, contents)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(&path)?.permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(&path, perms)?;
        }

        Ok(())
    }

    /// Store a site identifier after sanitizing it as plain text.
    ///
    /// An identifier that sanitizes to nothing clears the setting.
    pub fn set_site_identifier(&mut self, raw: &str) {
        let clean = sanitize_text_field(raw);
        self.site_identifier = if clean.is_empty() { None } else { Some(clean) };
    }

    /// The configured site identifier, or `MissingSiteIdentifier`
    pub fn require_site_identifier(&self) -> Result<&str> {
        self.site_identifier
            .as_deref()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| ConfigError::MissingSiteIdentifier.into())
    }

    pub fn api_base(&self) -> &str {
        self.api_base.as_deref().unwrap_or(DEFAULT_API_BASE)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            site_identifier: None,
            api_base: None,
            request_timeout_secs: default_request_timeout_secs(),
            cache_ttl_secs: default_cache_ttl_secs(),
            widget: WidgetSettings::default(),
        }
    }
}

/// Remove anything between `<` and `>`.
pub fn strip_tags(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_tag = false;
    for c in input.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }
    out
}

/// Plain-text sanitizing for a single-line setting: strips tags, collapses
/// line breaks, tabs and runs of whitespace, trims the ends.
pub fn sanitize_text_field(input: &str) -> String {
    strip_tags(input)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
