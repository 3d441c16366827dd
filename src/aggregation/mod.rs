//! Grouped aggregations over the cleaned table.
//!
//! Each function is pure: it reads the cleaned frame and returns plain rows, sorted
//! deterministically, for one rendering step and one CSV export. Null keys never form a
//! group (rows with no year, or no airport label, are left out of that aggregation).

pub mod grouped;
pub mod rolling;
pub mod summary;

use polars::prelude::*;

use crate::error::Result;

pub use grouped::{AirportTotal, MonthlyAverage, YearlyTotal, monthly_average, top_airports, yearly_total};
pub use rolling::{DailyTrendPoint, DayBucket, daily_trend, rolling_mean};
pub use summary::{YearSummary, format_summary_table, round2, summary_by_year};

/// Column values as `f64` (numeric columns of any width are widened).
pub(crate) fn f64_values(df: &DataFrame, name: &str) -> Result<Vec<Option<f64>>> {
    let column = df.column(name)?.cast(&DataType::Float64)?;
    Ok(column.f64()?.into_iter().collect())
}

pub(crate) fn i32_values(df: &DataFrame, name: &str) -> Result<Vec<Option<i32>>> {
    let column = df.column(name)?.cast(&DataType::Int32)?;
    Ok(column.i32()?.into_iter().collect())
}

pub(crate) fn u64_values(df: &DataFrame, name: &str) -> Result<Vec<Option<u64>>> {
    let column = df.column(name)?.cast(&DataType::UInt64)?;
    Ok(column.u64()?.into_iter().collect())
}

pub(crate) fn str_values(df: &DataFrame, name: &str) -> Result<Vec<Option<String>>> {
    let column = df.column(name)?;
    Ok(column
        .str()?
        .into_iter()
        .map(|v| v.map(str::to_string))
        .collect())
}
