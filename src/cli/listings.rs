//! Listing and category commands

use colored::Colorize;

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, OutputFormat};
use crate::error::Result;
use crate::listing::{
    CategoryDimension, CategoryIndexes, Listing, TeamGroup, build_index, group_by_team,
};
use crate::models::{CategoryDisplay, ListingDisplay};
use crate::output::Formattable;
use crate::output::json::{JsonOutput, format_site_json};
use crate::output::table::format_table;

/// List the site's postings grouped by team
pub async fn list(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let site = ctx.require_site()?;

    log::debug!("Listing postings for {}", site);
    let listings = ctx.cache.get(site).await?;
    log::debug!("Loaded {} listings", listings.len());

    match ctx.format {
        OutputFormat::Json => println!("{}", format_site_json(site, listings.as_slice())?),
        OutputFormat::Table => {
            let teams = build_index(&listings, CategoryDimension::Team);
            let rows: Vec<ListingDisplay> = group_by_team(&listings, &teams)
                .iter()
                .flat_map(|group| group.listings.iter().map(|l| ListingDisplay::from(*l)))
                .collect();
            println!("{}", format_table(&rows));
        }
        OutputFormat::Pretty => print_pretty(site, &listings),
    }

    Ok(())
}

/// Show the category indexes of the site's postings
pub async fn categories(opts: &GlobalOptions, dimension: Option<CategoryDimension>) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let site = ctx.require_site()?;

    let listings = ctx.cache.get(site).await?;
    let indexes = CategoryIndexes::from_collection(&listings);

    match (ctx.format, dimension) {
        (OutputFormat::Json, Some(dim)) => {
            let output = JsonOutput::new(indexes.get(dim)).with_site(site);
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        (OutputFormat::Json, None) => {
            let output = JsonOutput::new(&indexes).with_site(site);
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        (format, only) => CategoryDisplay::rows(&indexes, only).print(format)?,
    }

    Ok(())
}

fn print_pretty(site: &str, listings: &[Listing]) {
    if listings.is_empty() {
        println!("{} No open positions for {}", "○".dimmed(), site.bold());
        return;
    }

    let teams = build_index(listings, CategoryDimension::Team);
    let groups = group_by_team(listings, &teams);

    println!(
        "{} open positions at {} across {} teams\n",
        listings.len().to_string().bold(),
        site.bold(),
        groups.len()
    );

    for group in &groups {
        print_group(group);
    }
}

fn print_group(group: &TeamGroup<'_>) {
    let heading = if group.team.is_empty() {
        "(no team)"
    } else {
        group.team
    };
    println!("{}", heading.bold().cyan());

    for listing in &group.listings {
        println!(
            "  • {}  {}",
            listing.title.bold(),
            format!("{} | {}", listing.location, listing.commitment).dimmed()
        );
        if !listing.hosted_url.is_empty() {
            println!("    {}", listing.hosted_url.dimmed());
        }
    }
    println!();
}
