//! Markup rendering commands

use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::config::{Config, WidgetSettings};
use crate::error::Result;
use crate::render;

/// Print the `[lever_job_listings]` markup for the effective site
pub async fn shortcode(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let html = render::render_shortcode(&ctx.cache, ctx.site()).await?;
    println!("{}", html);
    Ok(())
}

/// Print the widget markup; flags override the saved widget fields
pub fn widget(opts: &GlobalOptions, title: Option<&str>, site: Option<&str>) -> Result<()> {
    let config = Config::load_or_default(opts.config_ref())?;

    let settings = WidgetSettings::from_form(
        title.unwrap_or(&config.widget.title),
        site.unwrap_or(&config.widget.site_identifier),
    );

    println!("{}", render::render_widget(&settings)?);
    Ok(())
}
