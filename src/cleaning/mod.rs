//! Cleaning & derivation stage.
//!
//! normalize names → check required columns → parse dates (drop unparsable rows)
//! → coerce delays/year → `total_delay`, `month`, `month_name`, `airport_label`.

pub mod dates;
pub mod derive;

use log::info;
use polars::prelude::DataFrame;

use crate::config::ColumnConfig;
use crate::error::{AnalysisError, Result};

pub use dates::{month_abbrev, month_name, parse_flight_date};
pub use derive::{derive_columns, normalize_column_names, parse_date_column};

/// Fails with `MissingColumn` for the first required column absent from `df`.
pub fn require_columns(df: &DataFrame, required: &[&str]) -> Result<()> {
    let names = df.get_column_names();
    match required
        .iter()
        .find(|req| !names.iter().any(|n| n.as_str() == **req))
    {
        Some(missing) => Err(AnalysisError::MissingColumn(missing.to_string())),
        None => Ok(()),
    }
}

/// Runs the full cleaning sequence and prints the cleaned shape.
pub fn clean(raw: DataFrame, columns: &ColumnConfig) -> Result<DataFrame> {
    let rows_in = raw.height();

    let df = normalize_column_names(raw)?;
    require_columns(&df, &columns.required())?;

    let (df, unparsable) = parse_date_column(df, &columns.date)?;
    let df = derive_columns(df, columns)?;

    if df.height() == 0 {
        return Err(AnalysisError::EmptyDataset(format!(
            "no row of {} has a parsable '{}'",
            rows_in, columns.date
        )));
    }

    info!(
        "Cleaning kept {} of {} rows ({} dropped for bad dates)",
        df.height(),
        rows_in,
        unparsable
    );
    println!("Dataset Shape: ({}, {})", df.height(), df.width());

    Ok(df)
}
