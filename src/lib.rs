//! # ATC pre-departure delay analysis
//!
//! Batch analysis of a combined airport delay dataset (2017–2023): read one CSV, clean
//! and derive columns, aggregate by year, month, airport and day, then write a summary
//! table image, four figures and the aggregate tables as CSV.
//!
//! ## Stages
//! - [`ingestion`]: all-text CSV load and console preview.
//! - [`cleaning`]: name normalization, lenient date/number coercion, derived columns.
//! - [`aggregation`]: per-year statistics, monthly means, totals, top airports, rolling trend.
//! - [`rendering`]: PNG output through plotters.
//! - [`pipeline`]: wires the stages together.

pub mod aggregation;
pub mod cleaning;
pub mod config;
pub mod error;
pub mod ingestion;
pub mod pipeline;
pub mod rendering;
pub mod utils;

pub use config::{AnalysisConfig, ColumnConfig};
pub use error::{AnalysisError, Result};
pub use pipeline::{AnalysisReport, analyze, render_report, run};
