//! Global CLI options shared across all commands
//!
//! Consolidates the global flags into one struct so handlers take a single
//! `&GlobalOptions` instead of a parameter per flag.

use std::path::PathBuf;
use std::time::Duration;

use crate::cli::{Cli, OutputFormat};

/// Global CLI options passed to all command handlers.
///
/// # Precedence
///
/// CLI flag > environment variable > config file > default. This struct
/// captures the CLI/env layer; config file values are merged in
/// `CommandContext`.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Output format (pretty, table, json)
    pub format: OutputFormat,

    /// Custom config file path (defaults to ~/.lever-jobs/config.yaml)
    pub config: Option<String>,

    /// Site identifier override (bypasses config file)
    pub site: Option<String>,

    /// Bypass the listing cache
    pub no_cache: bool,

    /// Custom postings API base for testing
    pub api_base: Option<String>,

    /// Request timeout override in seconds
    pub timeout: Option<u64>,

    /// Custom cache directory
    pub cache_dir: Option<PathBuf>,
}

impl GlobalOptions {
    /// Create GlobalOptions from a parsed CLI struct.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            config: cli.config.clone(),
            site: cli.site.clone(),
            no_cache: cli.no_cache,
            api_base: cli.api_base.clone(),
            timeout: cli.timeout,
            cache_dir: cli.cache_dir.clone(),
        }
    }

    /// Get config path as `Option<&str>`.
    pub fn config_ref(&self) -> Option<&str> {
        self.config.as_deref()
    }

    /// Get site override as `Option<&str>`.
    pub fn site_ref(&self) -> Option<&str> {
        self.site.as_deref()
    }

    /// Get timeout override as a `Duration`.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout.map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_options_accessors() {
        let opts = GlobalOptions {
            format: OutputFormat::Json,
            config: Some("/custom/path".to_string()),
            site: Some("leverdemo".to_string()),
            no_cache: true,
            api_base: Some("http://localhost:8080/v0/postings/".to_string()),
            timeout: Some(5),
            cache_dir: Some(PathBuf::from("/tmp/lever-cache")),
        };

        assert_eq!(opts.config_ref(), Some("/custom/path"));
        assert_eq!(opts.site_ref(), Some("leverdemo"));
        assert_eq!(opts.timeout(), Some(Duration::from_secs(5)));
        assert!(opts.no_cache);
    }

    #[test]
    fn test_global_options_none_accessors() {
        let opts = GlobalOptions {
            format: OutputFormat::Pretty,
            config: None,
            site: None,
            no_cache: false,
            api_base: None,
            timeout: None,
            cache_dir: None,
        };

        assert_eq!(opts.config_ref(), None);
        assert_eq!(opts.site_ref(), None);
        assert_eq!(opts.timeout(), None);
        assert!(!opts.no_cache);
    }
}
