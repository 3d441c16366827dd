//! Monthly average, yearly total and the top-N airport ranking.

use polars::prelude::*;
use serde::Serialize;

use crate::aggregation::{f64_values, i32_values, str_values};
use crate::config::{AIRPORT_LABEL_COL, ColumnConfig, MONTH_COL, TOTAL_DELAY_COL};
use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyAverage {
    pub year: i32,
    pub month: u32,
    pub mean_delay: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearlyTotal {
    pub year: i32,
    pub total_delay: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AirportTotal {
    pub airport_label: String,
    pub total_delay: f64,
}

/// Mean `total_delay` per (year, month), ordered by year then month.
pub fn monthly_average(df: &DataFrame, columns: &ColumnConfig) -> Result<Vec<MonthlyAverage>> {
    let year = columns.year.as_str();

    let out = df
        .clone()
        .lazy()
        .filter(col(year).is_not_null())
        .group_by([col(year), col(MONTH_COL)])
        .agg([col(TOTAL_DELAY_COL).mean()])
        .sort([year, MONTH_COL], SortMultipleOptions::default())
        .collect()?;

    let years = i32_values(&out, year)?;
    let months = i32_values(&out, MONTH_COL)?;
    let means = f64_values(&out, TOTAL_DELAY_COL)?;

    Ok((0..out.height())
        .filter_map(|i| {
            Some(MonthlyAverage {
                year: years[i]?,
                month: u32::try_from(months[i]?).ok()?,
                mean_delay: means[i]?,
            })
        })
        .collect())
}

/// Sum of `total_delay` per year, ordered by year.
pub fn yearly_total(df: &DataFrame, columns: &ColumnConfig) -> Result<Vec<YearlyTotal>> {
    let year = columns.year.as_str();

    let out = df
        .clone()
        .lazy()
        .filter(col(year).is_not_null())
        .group_by([col(year)])
        .agg([col(TOTAL_DELAY_COL).sum()])
        .sort([year], SortMultipleOptions::default())
        .collect()?;

    let years = i32_values(&out, year)?;
    let totals = f64_values(&out, TOTAL_DELAY_COL)?;

    Ok(years
        .into_iter()
        .zip(totals)
        .filter_map(|(year, total)| {
            Some(YearlyTotal {
                year: year?,
                total_delay: total.unwrap_or(0.0),
            })
        })
        .collect())
}

/// The `n` airports with the largest summed `total_delay`, largest first.
///
/// Airports whose total is NaN are left out. Groups are put in label order before a stable descending sort, so exact ties come
/// out alphabetically. That order carries no meaning beyond being reproducible.
pub fn top_airports(df: &DataFrame, n: usize) -> Result<Vec<AirportTotal>> {
    let out = df
        .clone()
        .lazy()
        .filter(col(AIRPORT_LABEL_COL).is_not_null())
        .group_by([col(AIRPORT_LABEL_COL)])
        .agg([col(TOTAL_DELAY_COL).sum()])
        .sort([AIRPORT_LABEL_COL], SortMultipleOptions::default())
        .collect()?;

    let labels = str_values(&out, AIRPORT_LABEL_COL)?;
    let totals = f64_values(&out, TOTAL_DELAY_COL)?;

    let mut ranked: Vec<AirportTotal> = labels
        .into_iter()
        .zip(totals)
        .filter_map(|(label, total)| {
            Some(AirportTotal {
                airport_label: label?,
                total_delay: total.unwrap_or(0.0),
            })
        })
        // an undefined total has no rank
        .filter(|a| !a.total_delay.is_nan())
        .collect();

    // stable: equal totals keep label order
    ranked.sort_by(|a, b| b.total_delay.total_cmp(&a.total_delay));
    ranked.truncate(n);

    Ok(ranked)
}
