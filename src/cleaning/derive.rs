//! Column-level transformations. Each function takes a frame by value and returns a new one.
//!
//! Summation rule: `total_delay` adds the two delay components with a missing component
//! counted as zero, so a row with both components missing totals exactly 0. This is stated
//! here rather than inherited from any library's null handling.

use chrono::Datelike;
use log::warn;
use polars::prelude::*;

use crate::cleaning::dates::{date_to_epoch_days, month_name, parse_flight_date};
use crate::config::{AIRPORT_LABEL_COL, ColumnConfig, MONTH_COL, MONTH_NAME_COL, TOTAL_DELAY_COL};
use crate::error::Result;

/// Lowercases (and trims) every column name.
pub fn normalize_column_names(mut df: DataFrame) -> Result<DataFrame> {
    let names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| name.trim().to_lowercase())
        .collect();
    df.set_column_names(names)?;
    Ok(df)
}

/// Replaces the text date column with a polars `Date` and adds `month` / `month_name`.
///
/// Unparsable entries become null in all three columns. Returns the frame and the number
/// of rows whose date could not be parsed.
pub fn parse_date_column(mut df: DataFrame, date_col: &str) -> Result<(DataFrame, usize)> {
    let raw = df.column(date_col)?.cast(&DataType::String)?;
    let parsed: Vec<_> = raw
        .str()?
        .into_iter()
        .map(|value| value.and_then(parse_flight_date))
        .collect();

    let unparsable = parsed.iter().filter(|d| d.is_none()).count();
    if unparsable > 0 {
        warn!(
            "{} of {} rows have an unparsable '{}' and will be dropped",
            unparsable,
            parsed.len(),
            date_col
        );
    }

    let days: Int32Chunked = parsed.iter().map(|d| d.map(date_to_epoch_days)).collect();
    let months: Int32Chunked = parsed.iter().map(|d| d.map(|d| d.month() as i32)).collect();
    let names: StringChunked = parsed
        .iter()
        .map(|d| d.and_then(|d| month_name(d.month())))
        .collect();

    df.with_column(
        days.into_series()
            .with_name(date_col.into())
            .cast(&DataType::Date)?,
    )?;
    df.with_column(months.into_series().with_name(MONTH_COL.into()))?;
    df.with_column(names.into_series().with_name(MONTH_NAME_COL.into()))?;

    Ok((df, unparsable))
}

/// Lenient numeric coercion: surrounding whitespace is ignored; unparsable text and `NaN`
/// become null, so every missing marker takes the same path through the sum.
pub fn numeric_expr(name: &str) -> Expr {
    col(name)
        .cast(DataType::String)
        .str()
        .strip_chars(lit(NULL))
        .cast(DataType::Float64)
        .fill_nan(lit(NULL))
}

/// Null-as-zero sum of two numeric columns.
pub fn total_delay_expr(first: &str, second: &str) -> Expr {
    col(first).fill_null(lit(0.0)) + col(second).fill_null(lit(0.0))
}

/// `"{name} ({icao})"`; null if either part is null.
pub fn airport_label_expr(name: &str, icao: &str) -> Expr {
    concat_str([col(name), lit(" ("), col(icao), lit(")")], "", false)
}

/// Drops rows with a null date, coerces numeric columns and adds the derived columns.
///
/// Expects `parse_date_column` to have run. Coercion goes through `numeric_expr`; `year`
/// is read as a number first, so `2020.0` and ` 2020` both give 2020.
pub fn derive_columns(df: DataFrame, columns: &ColumnConfig) -> Result<DataFrame> {
    let [first, second] = &columns.delays;

    let out = df
        .lazy()
        .filter(col(columns.date.as_str()).is_not_null())
        .with_columns([
            numeric_expr(first).alias(first.as_str()),
            numeric_expr(second).alias(second.as_str()),
            numeric_expr(&columns.year)
                .cast(DataType::Int32)
                .alias(columns.year.as_str()),
        ])
        .with_columns([
            total_delay_expr(first, second).alias(TOTAL_DELAY_COL),
            airport_label_expr(&columns.airport_name, &columns.airport_icao)
                .alias(AIRPORT_LABEL_COL),
        ])
        .collect()?;

    let null_years = out.column(columns.year.as_str())?.null_count();
    if null_years > 0 {
        warn!(
            "{} rows have no usable '{}' and are left out of yearly aggregates",
            null_years, columns.year
        );
    }

    Ok(out)
}
