//! Error types for configuration loading.
//!
//! Game actions never fail; only reading the embedded configuration can.

use thiserror::Error;

/// Error when parsing or validating embedded settings
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The JSON blob could not be parsed.
    #[error("Invalid settings JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// A category list was given but it is empty.
    #[error("Category list must not be empty")]
    EmptyCategories,

    /// A category has a blank label on either side.
    #[error("Category {index} has a blank label")]
    BlankLabel { index: usize },
}
