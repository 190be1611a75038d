//! CLI command definitions and handlers

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::listing::CategoryDimension;

pub mod args;
pub mod cache;
pub mod context;
pub mod init;
pub mod listings;
pub mod render;
pub mod site;
pub mod status;

pub use args::{GlobalOptions, OutputFormat};
pub use context::CommandContext;

/// lever-jobs - Lever job postings, cached, grouped and rendered
#[derive(Parser, Debug)]
#[command(name = "lever-jobs")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (pretty, table, json)
    #[arg(
        long,
        global = true,
        env = "LEVER_JOBS_FORMAT",
        default_value = "pretty",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: OutputFormat,

    /// Override config file location
    #[arg(long, global = true, env = "LEVER_JOBS_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Override the configured site identifier
    #[arg(long, global = true, env = "LEVER_JOBS_SITE", hide_env = true)]
    pub site: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "LEVER_JOBS_DEBUG", hide_env = true)]
    pub debug: bool,

    /// Bypass cache, fetch fresh data from the API
    #[arg(long, global = true, env = "LEVER_JOBS_NO_CACHE", hide_env = true)]
    pub no_cache: bool,

    /// HTTP request timeout in seconds
    #[arg(long, global = true, env = "LEVER_JOBS_TIMEOUT", hide_env = true)]
    pub timeout: Option<u64>,

    /// Postings API base URL (development/testing)
    #[arg(long, global = true, env = "LEVER_JOBS_API_BASE", hide = true)]
    pub api_base: Option<String>,

    /// Cache directory (development/testing)
    #[arg(long, global = true, env = "LEVER_JOBS_CACHE_DIR", hide = true)]
    pub cache_dir: Option<PathBuf>,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Set up the Lever site identifier
    Init,

    /// Show configuration and cache status
    Status,

    /// Display version information
    Version,

    /// Manage the Lever site identifier
    #[command(subcommand)]
    Site(SiteCommands),

    /// List job postings grouped by team
    #[command(visible_alias = "ls")]
    Listings,

    /// Show location, team and commitment indexes
    Categories {
        /// Only show one dimension
        #[arg(long, short = 'd', value_enum)]
        dimension: Option<CategoryDimension>,
    },

    /// Render markup for embedding
    #[command(subcommand)]
    Render(RenderCommands),

    /// Manage saved widget settings
    #[command(subcommand)]
    Widget(WidgetCommands),

    /// Manage the local listing cache
    #[command(subcommand)]
    Cache(CacheCommands),
}

/// Site identifier subcommands
#[derive(Subcommand, Debug)]
pub enum SiteCommands {
    /// Save the site identifier (sanitized as plain text)
    Set {
        /// Site identifier, as in https://jobs.lever.co/<SITE>
        site_identifier: String,
    },

    /// Show the saved site identifier
    Get,
}

/// Markup rendering subcommands
#[derive(Subcommand, Debug)]
pub enum RenderCommands {
    /// Render the [lever_job_listings] content directive
    #[command(after_help = "EXAMPLES:\n  \
            lever-jobs render shortcode                 # Using the saved site\n  \
            lever-jobs render shortcode --site acme     # For another site\n  \
            lever-jobs render shortcode > jobs.html")]
    Shortcode,

    /// Render the sidebar widget
    Widget {
        /// Widget title (defaults to the saved widget title)
        #[arg(long)]
        title: Option<String>,

        /// Widget site identifier (defaults to the saved widget site)
        #[arg(long = "widget-site")]
        widget_site: Option<String>,
    },
}

/// Widget settings subcommands
#[derive(Subcommand, Debug)]
pub enum WidgetCommands {
    /// Save widget form fields
    Set {
        /// Widget title
        #[arg(long)]
        title: Option<String>,

        /// Widget site identifier
        #[arg(long = "widget-site")]
        widget_site: Option<String>,
    },

    /// Show saved widget form fields
    Get,
}

/// Cache management subcommands
#[derive(Subcommand, Debug)]
pub enum CacheCommands {
    /// Show cache statistics
    Status,

    /// Invalidate cached listings; the next read refetches
    Clear,

    /// Print the cache directory
    Path,
}
