//! Daily delay trend with a trailing calendar-window mean, per year.
//!
//! The window covers `window` consecutive calendar days ending on each reported date
//! and averages every observation (one row = one airport-day) dated inside it, so the
//! trend stays on the per-observation scale. Dates with no rows add nothing to the window.

use chrono::NaiveDate;
use polars::prelude::*;
use serde::Serialize;

use crate::aggregation::{f64_values, i32_values, u64_values};
use crate::cleaning::dates::epoch_days_to_date;
use crate::config::{ColumnConfig, TOTAL_DELAY_COL};
use crate::error::Result;

const OBSERVATIONS_COL: &str = "observations";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyTrendPoint {
    pub year: i32,
    pub date: NaiveDate,
    /// Mean `total_delay` of the rows reported on `date`.
    pub daily_mean: f64,
    pub observations: u64,
    pub rolling_mean: f64,
}

/// Every observation reported on one date, reduced to its sum and count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayBucket {
    pub date: NaiveDate,
    pub sum: f64,
    pub count: u64,
}

/// Trailing mean over the `window` calendar days ending at each bucket (minimum one day).
///
/// `days` must be sorted by date with one bucket per date. Each output value averages the
/// observations of every bucket dated in `(date - window, date]`.
pub fn rolling_mean(days: &[DayBucket], window: usize) -> Vec<f64> {
    let span = window.max(1) as i64;
    let mut out = Vec::with_capacity(days.len());
    let mut start = 0;
    let mut sum = 0.0;
    let mut count = 0u64;

    for day in days {
        sum += day.sum;
        count += day.count;
        while (day.date - days[start].date).num_days() >= span {
            sum -= days[start].sum;
            count -= days[start].count;
            start += 1;
        }
        out.push(if count == 0 { f64::NAN } else { sum / count as f64 });
    }
    out
}

/// Daily means per year, each year smoothed independently; ordered by year then date.
pub fn daily_trend(
    df: &DataFrame,
    columns: &ColumnConfig,
    window: usize,
) -> Result<Vec<DailyTrendPoint>> {
    let year = columns.year.as_str();
    let date = columns.date.as_str();

    let out = df
        .clone()
        .lazy()
        .filter(col(year).is_not_null())
        .group_by([col(year), col(date)])
        .agg([
            col(TOTAL_DELAY_COL).sum(),
            col(TOTAL_DELAY_COL).count().alias(OBSERVATIONS_COL),
        ])
        .sort([year, date], SortMultipleOptions::default())
        .collect()?;

    let years = i32_values(&out, year)?;
    let days = i32_values(&out, date)?;
    let sums = f64_values(&out, TOTAL_DELAY_COL)?;
    let counts = u64_values(&out, OBSERVATIONS_COL)?;

    let daily: Vec<(i32, DayBucket)> = (0..out.height())
        .filter_map(|i| {
            let bucket = DayBucket {
                date: epoch_days_to_date(days[i]?)?,
                sum: sums[i].unwrap_or(0.0),
                count: counts[i].unwrap_or(0),
            };
            (bucket.count > 0).then_some((years[i]?, bucket))
        })
        .collect();

    let mut points = Vec::with_capacity(daily.len());
    for chunk in daily.chunk_by(|a, b| a.0 == b.0) {
        let buckets: Vec<DayBucket> = chunk.iter().map(|(_, bucket)| *bucket).collect();
        let smoothed = rolling_mean(&buckets, window);

        points.extend(chunk.iter().zip(smoothed).map(|(&(year, bucket), mean)| {
            DailyTrendPoint {
                year,
                date: bucket.date,
                daily_mean: bucket.sum / bucket.count as f64,
                observations: bucket.count,
                rolling_mean: mean,
            }
        }));
    }

    Ok(points)
}
