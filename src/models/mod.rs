//! Display models for CLI output
//!
//! Display models flatten listings and category indexes into table rows.

pub mod display;

pub use display::{CategoryDisplay, ListingDisplay};
