//! Summary statistics of `total_delay` per year.

use polars::prelude::*;
use serde::Serialize;

use crate::aggregation::{f64_values, i32_values, u64_values};
use crate::config::{ColumnConfig, TOTAL_DELAY_COL};
use crate::error::Result;

/// One row of the summary table. Floats are rounded to 2 decimals; `std` is the sample
/// standard deviation and is NaN for a year with a single observation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearSummary {
    pub year: i32,
    pub mean: f64,
    pub median: f64,
    pub min: f64,
    pub max: f64,
    pub std: f64,
    pub count: u64,
}

impl YearSummary {
    pub const COLUMNS: [&'static str; 6] = ["mean", "median", "min", "max", "std", "count"];

    /// Cell texts in `COLUMNS` order.
    pub fn cells(&self) -> [String; 6] {
        [
            format!("{:.2}", self.mean),
            format!("{:.2}", self.median),
            format!("{:.2}", self.min),
            format!("{:.2}", self.max),
            format!("{:.2}", self.std),
            self.count.to_string(),
        ]
    }
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// mean, median, min, max, std (ddof 1) and count of `total_delay` grouped by year.
pub fn summary_by_year(df: &DataFrame, columns: &ColumnConfig) -> Result<Vec<YearSummary>> {
    let year = columns.year.as_str();
    let total = || col(TOTAL_DELAY_COL);

    let out = df
        .clone()
        .lazy()
        .filter(col(year).is_not_null())
        .group_by([col(year)])
        .agg([
            total().mean().alias("mean"),
            total().median().alias("median"),
            total().min().alias("min"),
            total().max().alias("max"),
            total().std(1).alias("std"),
            total().count().alias("count"),
        ])
        .sort([year], SortMultipleOptions::default())
        .collect()?;

    let years = i32_values(&out, year)?;
    let means = f64_values(&out, "mean")?;
    let medians = f64_values(&out, "median")?;
    let mins = f64_values(&out, "min")?;
    let maxes = f64_values(&out, "max")?;
    let stds = f64_values(&out, "std")?;
    let counts = u64_values(&out, "count")?;

    let stat = |v: Option<f64>| round2(v.unwrap_or(f64::NAN));

    Ok((0..out.height())
        .filter_map(|i| {
            Some(YearSummary {
                year: years[i]?,
                mean: stat(means[i]),
                median: stat(medians[i]),
                min: stat(mins[i]),
                max: stat(maxes[i]),
                std: stat(stds[i]),
                count: counts[i].unwrap_or(0),
            })
        })
        .collect())
}

/// Fixed-width text rendering of the summary table for the console.
pub fn format_summary_table(rows: &[YearSummary]) -> String {
    let mut out = format!("{:<6}", "year");
    for name in YearSummary::COLUMNS {
        out.push_str(&format!(" {:>12}", name));
    }
    out.push('\n');
    out.push_str(&"=".repeat(6 + 13 * YearSummary::COLUMNS.len()));
    out.push('\n');

    for row in rows {
        out.push_str(&format!("{:<6}", row.year));
        for cell in row.cells() {
            out.push_str(&format!(" {:>12}", cell));
        }
        out.push('\n');
    }
    out
}
