//! Error type for the delay analysis pipeline.
//!
//! Two kinds of failure exist:
//! - **Fatal input errors** (missing file, unreadable CSV, absent columns) propagate to `main`.
//! - **Per-value coercion failures** never surface here; they become nulls during cleaning.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalysisError {
    /// A required input column is absent after name normalization.
    #[error("Column '{0}' not found in dataset")]
    MissingColumn(String),

    /// The input holds no usable rows (empty file, or every date unparsable).
    #[error("Dataset is empty: {0}")]
    EmptyDataset(String),

    /// Drawing or encoding an image failed.
    #[error("Failed to render '{artifact}': {reason}")]
    Render { artifact: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    #[error("CSV export error: {0}")]
    Csv(#[from] csv::Error),
}

impl AnalysisError {
    /// Wraps any displayable drawing error for the named artifact.
    pub fn render(artifact: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        AnalysisError::Render {
            artifact: artifact.into(),
            reason: reason.to_string(),
        }
    }

    /// True for errors caused by the input data rather than the environment.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::MissingColumn(_) | Self::EmptyDataset(_) | Self::Polars(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
