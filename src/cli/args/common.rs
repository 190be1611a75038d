//! Common CLI types shared across commands

/// Output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pretty format - listings grouped under team headings
    #[default]
    Pretty,
    /// Table format - one row per listing
    Table,
    /// JSON format - structured for scripts
    Json,
}
