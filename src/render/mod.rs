//! Markup for the `[lever_job_listings]` content directive and the widget
//!
//! Templates live in `templates/` and are HTML-escaped by askama.

use askama::Template;

use crate::cache::ListingCache;
use crate::client::PostingsApi;
use crate::config::WidgetSettings;
use crate::error::{Error, Result};
use crate::listing::{CategoryDimension, Listing, TeamGroup, build_index, group_by_team};

/// Shown in place of the listings when no site identifier is configured
pub const MISSING_SITE_PROMPT: &str = "<p class=\"lever-jobs-notice\">Please enter your Lever site \
identifier in the settings, then use the <strong>[lever_job_listings]</strong> shortcode and / or \
the <strong>widget</strong> to display the content.</p>";

#[derive(Template)]
#[template(path = "job_listings.html")]
struct JobListingsTemplate<'a> {
    groups: &'a [TeamGroup<'a>],
}

#[derive(Template)]
#[template(path = "widget.html")]
struct WidgetTemplate<'a> {
    title: &'a str,
    site_identifier: &'a str,
}

mod filters {
    /// Capitalize the first letter of every space-separated word
    pub fn ucwords<T: std::fmt::Display>(s: T) -> ::askama::Result<String> {
        let s = s.to_string();
        let mut out = String::with_capacity(s.len());
        let mut at_word_start = true;
        for c in s.chars() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.push(c);
            }
            at_word_start = c.is_whitespace();
        }
        Ok(out)
    }

    /// Body of a double-quoted JS string literal, safe inside `<script>`.
    ///
    /// Everything but ASCII alphanumerics and `-_. ` becomes a `\uXXXX`
    /// escape, so the output needs no further HTML escaping.
    pub fn js_string<T: std::fmt::Display>(s: T) -> ::askama::Result<String> {
        let s = s.to_string();
        let mut out = String::with_capacity(s.len());
        for c in s.chars() {
            if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | ' ') {
                out.push(c);
            } else {
                let mut units = [0u16; 2];
                for unit in c.encode_utf16(&mut units) {
                    out.push_str(&format!("\\u{:04x}", unit));
                }
            }
        }
        Ok(out)
    }
}

/// Listings grouped by team, one section per team in index order
pub fn render_job_listings(listings: &[Listing]) -> Result<String> {
    let teams = build_index(listings, CategoryDimension::Team);
    let groups = group_by_team(listings, &teams);
    Ok(JobListingsTemplate { groups: &groups }.render()?)
}

/// Render the content directive.
///
/// Visitors never see an error: a missing identifier renders the
/// configuration prompt and a failed fetch renders no listings.
pub async fn render_shortcode<C: PostingsApi + 'static>(
    cache: &ListingCache<C>,
    site_identifier: Option<&str>,
) -> Result<String> {
    let Some(site) = site_identifier.filter(|s| !s.is_empty()) else {
        return Ok(MISSING_SITE_PROMPT.to_string());
    };

    match cache.get(site).await {
        Ok(listings) => render_job_listings(&listings),
        Err(Error::Fetch(e)) if e.is_retryable() => {
            log::warn!("Listings for {} unavailable, retrying on next render: {}", site, e);
            render_job_listings(&[])
        }
        Err(e) => {
            log::error!("Failed to load listings for {}: {}", site, e);
            render_job_listings(&[])
        }
    }
}

/// Render the sidebar widget for saved settings
pub fn render_widget(settings: &WidgetSettings) -> Result<String> {
    let template = WidgetTemplate {
        title: &settings.title,
        site_identifier: &settings.site_identifier,
    };
    Ok(template.render()?)
}
