//! Status command implementation

use colored::Colorize;

use crate::cli::args::GlobalOptions;
use crate::cli::context::open_store;
use crate::config::Config;
use crate::error::{ConfigError, Error, Result};
use crate::output::formatters::{format_duration, format_timestamp_local};

/// Run the status command to display configuration and cache status
pub fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}\n", "Lever Jobs Status".bold());

    let config_path = Config::resolve_path(opts.config_ref())?;

    match Config::load_at(opts.config_ref()) {
        Ok(config) => {
            println!("Config file: {}", config_path.display().to_string().cyan());
            println!();

            match &config.site_identifier {
                Some(site) => println!("{} Site identifier: {}", "✓".green(), site.bold()),
                None => {
                    println!("{} No site identifier set", "✗".red());
                    println!("  → Run 'lever-jobs site set <ID>' to set one");
                }
            }

            if !config.widget.site_identifier.is_empty() {
                println!(
                    "{} Widget site: {}",
                    "✓".green(),
                    config.widget.site_identifier
                );
            } else {
                println!("{} Widget not configured", "○".dimmed());
            }

            if let Some(ref base) = config.api_base {
                println!("{} Custom API base: {}", "○".dimmed(), base.cyan());
            }

            println!(
                "{} Cache lifetime: {}",
                "○".dimmed(),
                format_duration(config.cache_ttl())
            );
        }
        Err(Error::Config(ConfigError::NotFound)) => {
            println!("{} Configuration not found", "✗".red());
            println!();
            println!(
                "Run {} to create a configuration file.",
                "lever-jobs init".cyan()
            );
        }
        Err(e) => return Err(e),
    }

    println!();
    print_cache_line(opts);
    println!();

    Ok(())
}

fn print_cache_line(opts: &GlobalOptions) {
    if opts.no_cache {
        println!("{} Cache disabled (--no-cache)", "○".dimmed());
        return;
    }

    let stats = match open_store(opts).and_then(|store| store.stats()) {
        Ok(stats) => stats,
        Err(e) => {
            println!("{} Cache unavailable: {}", "⚠".yellow(), e);
            return;
        }
    };

    match (stats.newest_entry, stats.next_expiry) {
        (Some(fetched), Some(expires)) => println!(
            "{} Listings cached {} (expire {})",
            "✓".green(),
            format_timestamp_local(fetched),
            format_timestamp_local(expires)
        ),
        _ => println!(
            "{} No cached listings (next read fetches from Lever)",
            "○".dimmed()
        ),
    }
}
