//! Init command implementation

use colored::Colorize;
use dialoguer::{Confirm, Input, theme::ColorfulTheme};

use crate::cli::args::GlobalOptions;
use crate::cli::context::sanitized_site;
use crate::client::{LeverClient, PostingsApi};
use crate::config::{Config, WidgetSettings};
use crate::error::Result;

/// Run the init command
///
/// Prompts for the site identifier, optionally checks it against the
/// postings API, and saves it. The widget is pointed at the same site
/// unless it already has one.
pub async fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}", "Welcome to lever-jobs!".bold().green());
    println!("Let's set up your Lever job board.\n");

    let mut config = Config::load_or_default(opts.config_ref())?;
    let theme = ColorfulTheme::default();

    let mut prompt = Input::<String>::with_theme(&theme)
        .with_prompt("Lever site identifier (https://jobs.lever.co/<SITE>)");
    if let Some(existing) = &config.site_identifier {
        prompt = prompt.default(existing.clone());
    }
    let raw: String = prompt.interact_text()?;
    let site = sanitized_site(&raw)?;

    let verify = Confirm::with_theme(&theme)
        .with_prompt("Check the site against the Lever postings API now?")
        .default(true)
        .interact()?;

    if verify {
        if let Some(api_base) = &opts.api_base {
            config.api_base = Some(api_base.clone());
        }
        println!("\n{}", "Fetching postings...".cyan());
        let client = LeverClient::new(config.api_base(), config.request_timeout())?;
        match client.fetch_postings(&site).await {
            Ok(postings) => println!(
                "{} Found {} postings for {}",
                "✓".green(),
                postings.len(),
                site.bold()
            ),
            Err(e) => println!("{} Could not verify site: {}", "⚠".yellow(), e),
        }
    }

    config.set_site_identifier(&site);
    if config.widget.site_identifier.is_empty() {
        config.widget = WidgetSettings::from_form(&config.widget.title, &site);
    }
    config.save_at(opts.config_ref())?;

    let config_path = Config::resolve_path(opts.config_ref())?;
    println!(
        "\n{} Configuration saved to: {}",
        "✓".green(),
        config_path.display()
    );

    println!("\n{}", "You're all set! Try running:".bold());
    println!("  {} - List open positions", "lever-jobs listings".cyan());
    println!(
        "  {} - Render the job listings markup",
        "lever-jobs render shortcode".cyan()
    );

    Ok(())
}
