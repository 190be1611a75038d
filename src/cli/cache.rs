//! Cache management commands

use std::time::Duration;

use colored::Colorize;

use crate::cache::{CacheStorage, POSITIONS_KEY};
use crate::cli::args::GlobalOptions;
use crate::cli::context::open_store;
use crate::cli::{CommandContext, OutputFormat};
use crate::error::Result;
use crate::output::formatters::{format_duration, format_size, format_timestamp_local};

/// Show cache status/statistics
pub fn status(opts: &GlobalOptions) -> Result<()> {
    let store = open_store(opts)?;
    let stats = store.stats()?;
    let location = describe_location(&store);
    let now = chrono::Utc::now().timestamp_millis();

    match opts.format {
        OutputFormat::Json => {
            let json = serde_json::json!({
                "key": POSITIONS_KEY,
                "total_entries": stats.total_entries,
                "valid_entries": stats.valid_entries,
                "expired_entries": stats.expired_entries,
                "total_size_bytes": stats.total_size_bytes,
                "total_size_human": format_size(stats.total_size_bytes),
                "newest_entry_timestamp": stats.newest_entry,
                "next_expiry_timestamp": stats.next_expiry,
                "path": location,
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        _ => {
            println!("Cache Status");
            println!("────────────────────────────────────────");
            println!("Location:       {}", location);
            println!("Valid entries:  {}", stats.valid_entries);
            println!("Expired:        {}", stats.expired_entries);
            println!("Total size:     {}", format_size(stats.total_size_bytes));

            if let Some(newest) = stats.newest_entry {
                println!("Fetched:        {}", format_timestamp_local(newest));
            }
            if let Some(expiry) = stats.next_expiry {
                let remaining = Duration::from_millis((expiry - now).max(0) as u64);
                println!(
                    "Expires:        {} (in {})",
                    format_timestamp_local(expiry),
                    format_duration(remaining)
                );
            }
        }
    }

    Ok(())
}

/// Invalidate cached listings so the next read refetches
pub fn clear(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let removed = ctx.cache.invalidate()?;

    match opts.format {
        OutputFormat::Json => {
            let json = serde_json::json!({
                "key": POSITIONS_KEY,
                "removed": removed,
                "success": true,
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        _ => {
            if removed {
                println!("{} Cleared cached listings", "✓".green());
            } else {
                println!("Cache was already empty");
            }
        }
    }

    Ok(())
}

/// Show cache path
pub fn path(opts: &GlobalOptions) -> Result<()> {
    let dir = match &opts.cache_dir {
        Some(dir) => dir.clone(),
        None => CacheStorage::cache_dir()?,
    };
    println!("{}", dir.display());
    Ok(())
}

fn describe_location(store: &CacheStorage) -> String {
    store
        .location()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "in-memory".to_string())
}
