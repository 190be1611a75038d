//! lever-jobs - Lever job postings, cached, grouped and rendered for embedding

use clap::Parser;

mod cache;
mod cli;
mod client;
mod config;
mod error;
mod listing;
mod models;
mod output;
mod render;

use cli::{CacheCommands, Cli, Commands, GlobalOptions, RenderCommands, SiteCommands, WidgetCommands};
use error::Result;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    if let Err(err) = run(cli).await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

/// Warnings by default, `RUST_LOG` when set, debug for this crate with `--debug`
fn init_logging(debug: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if debug {
        builder.filter_module("lever_jobs", log::LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}

async fn run(cli: Cli) -> Result<()> {
    let opts = GlobalOptions::from_cli(&cli);
    log::debug!("Running {:?}", cli.command);

    match cli.command {
        Commands::Init => cli::init::run(&opts).await,
        Commands::Status => cli::status::run(&opts),
        Commands::Version => {
            println!("lever-jobs version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Site(site_cmd) => match site_cmd {
            SiteCommands::Set { site_identifier } => cli::site::set(&opts, &site_identifier),
            SiteCommands::Get => cli::site::get(&opts),
        },
        Commands::Listings => cli::listings::list(&opts).await,
        Commands::Categories { dimension } => cli::listings::categories(&opts, dimension).await,
        Commands::Render(render_cmd) => match render_cmd {
            RenderCommands::Shortcode => cli::render::shortcode(&opts).await,
            RenderCommands::Widget { title, widget_site } => {
                cli::render::widget(&opts, title.as_deref(), widget_site.as_deref())
            }
        },
        Commands::Widget(widget_cmd) => match widget_cmd {
            WidgetCommands::Set { title, widget_site } => {
                cli::site::set_widget(&opts, title.as_deref(), widget_site.as_deref())
            }
            WidgetCommands::Get => cli::site::get_widget(&opts),
        },
        Commands::Cache(cache_cmd) => match cache_cmd {
            CacheCommands::Status => cli::cache::status(&opts),
            CacheCommands::Clear => cli::cache::clear(&opts),
            CacheCommands::Path => cli::cache::path(&opts),
        },
    }
}
