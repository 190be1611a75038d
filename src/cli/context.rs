//! Command execution context
//!
//! Loads configuration, layers the global flags on top, and builds the
//! cached postings client shared by the listing and render commands.

use crate::cache::{CacheStorage, ListingCache};
use crate::cli::{GlobalOptions, OutputFormat};
use crate::client::LeverClient;
use crate::config::{Config, sanitize_text_field};
use crate::error::{CacheError, ConfigError, Result};

/// Context for command execution containing config, cache and runtime options.
pub struct CommandContext {
    /// Loaded configuration with flag overrides applied
    pub config: Config,
    /// Read-through listing cache over the Lever client
    pub cache: ListingCache<LeverClient>,
    /// Output format preference
    pub format: OutputFormat,
}

impl CommandContext {
    /// Create a new command context.
    ///
    /// A missing config file is not an error here: commands that need a
    /// site identifier ask for it through [`require_site`](Self::require_site).
    /// A cache that cannot be opened degrades to uncached reads.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let mut config = Config::load_or_default(opts.config_ref())?;

        if let Some(site) = opts.site_ref() {
            config.set_site_identifier(site);
        }
        if let Some(api_base) = &opts.api_base {
            config.api_base = Some(api_base.clone());
        }
        if let Some(timeout) = opts.timeout() {
            config.request_timeout_secs = timeout.as_secs();
        }

        let client = LeverClient::new(config.api_base(), config.request_timeout())?;

        let store = if opts.no_cache {
            None
        } else {
            match open_store(opts) {
                Ok(store) => Some(store),
                Err(e) => {
                    log::warn!("Listing cache unavailable, fetching directly: {}", e);
                    None
                }
            }
        };

        let cache = ListingCache::new(client, store, config.cache_ttl());

        Ok(Self {
            config,
            cache,
            format: opts.format,
        })
    }

    /// The effective site identifier, if any
    pub fn site(&self) -> Option<&str> {
        self.config.site_identifier.as_deref()
    }

    /// The effective site identifier, or a configuration error
    pub fn require_site(&self) -> Result<&str> {
        self.config.require_site_identifier()
    }
}

/// Open the transient store at `--cache-dir` or the default location
pub fn open_store(opts: &GlobalOptions) -> std::result::Result<CacheStorage, CacheError> {
    match &opts.cache_dir {
        Some(dir) => CacheStorage::open_at(dir),
        None => CacheStorage::open(),
    }
}

/// Sanitize a raw site identifier, rejecting one that sanitizes to nothing
pub fn sanitized_site(raw: &str) -> Result<String> {
    let clean = sanitize_text_field(raw);
    if clean.is_empty() {
        return Err(ConfigError::Invalid("site identifier is empty".to_string()).into());
    }
    Ok(clean)
}
