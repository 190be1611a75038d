//! Site identifier and widget settings commands

use colored::Colorize;

use crate::cli::context::sanitized_site;
use crate::cli::{GlobalOptions, OutputFormat};
use crate::config::{Config, WidgetSettings};
use crate::error::Result;

/// Save the site identifier
pub fn set(opts: &GlobalOptions, raw: &str) -> Result<()> {
    let site = sanitized_site(raw)?;

    let mut config = Config::load_or_default(opts.config_ref())?;
    config.set_site_identifier(&site);
    config.save_at(opts.config_ref())?;

    println!("{} Site identifier set to {}", "✓".green(), site.bold());
    Ok(())
}

/// Show the saved site identifier
pub fn get(opts: &GlobalOptions) -> Result<()> {
    let config = Config::load_or_default(opts.config_ref())?;

    match opts.format {
        OutputFormat::Json => {
            let json = serde_json::json!({ "site_identifier": config.site_identifier });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        _ => match &config.site_identifier {
            Some(site) => println!("{}", site),
            None => {
                println!("{} No site identifier configured", "○".dimmed());
                println!("  → Run 'lever-jobs site set <ID>' to set one");
            }
        },
    }

    Ok(())
}

/// Save widget form fields, keeping any field not given
pub fn set_widget(opts: &GlobalOptions, title: Option<&str>, site: Option<&str>) -> Result<()> {
    let mut config = Config::load_or_default(opts.config_ref())?;

    let title = title.unwrap_or(&config.widget.title).to_string();
    let site = site.unwrap_or(&config.widget.site_identifier).to_string();
    config.widget = WidgetSettings::from_form(&title, &site);
    config.save_at(opts.config_ref())?;

    println!("{} Widget settings saved", "✓".green());
    Ok(())
}

/// Show saved widget form fields
pub fn get_widget(opts: &GlobalOptions) -> Result<()> {
    let config = Config::load_or_default(opts.config_ref())?;

    match opts.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&config.widget)?),
        _ => {
            println!("Title: {}", config.widget.title);
            println!("Site:  {}", config.widget.site_identifier);
        }
    }

    Ok(())
}
