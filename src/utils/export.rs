//! CSV export of the aggregate tables, written next to the chart images.
//!
//! One file per aggregation:
//! - `summary_by_year.csv`: year, mean, median, min, max, std, count.
//! - `monthly_average.csv`: year, month, mean_delay.
//! - `yearly_total.csv`: year, total_delay.
//! - `top_airports.csv`: airport_label, total_delay (largest first).
//! - `daily_trend.csv`: year, date, daily_mean, observations, rolling_mean.
//!
//! Existing files are overwritten.

use std::{
    fs::create_dir_all,
    path::{Path, PathBuf},
};

use csv::Writer;
use log::info;
use serde::Serialize;

use crate::error::Result;
use crate::pipeline::AnalysisReport;

pub const SUMMARY_BY_YEAR_CSV: &str = "summary_by_year.csv";
pub const MONTHLY_AVERAGE_CSV: &str = "monthly_average.csv";
pub const YEARLY_TOTAL_CSV: &str = "yearly_total.csv";
pub const TOP_AIRPORTS_CSV: &str = "top_airports.csv";
pub const DAILY_TREND_CSV: &str = "daily_trend.csv";

/// Serializes `rows` (header from field names) to `path`.
pub fn write_rows<T: Serialize>(path: &Path, rows: &[T]) -> Result<()> {
    let mut writer = Writer::from_path(path)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    info!("Exported {} rows to {:?}", rows.len(), path);
    Ok(())
}

/// Writes every aggregate table of `report` into `dir`; returns the written paths.
pub fn export_report_tables(report: &AnalysisReport, dir: &Path) -> Result<Vec<PathBuf>> {
    create_dir_all(dir)?;

    let targets = [
        dir.join(SUMMARY_BY_YEAR_CSV),
        dir.join(MONTHLY_AVERAGE_CSV),
        dir.join(YEARLY_TOTAL_CSV),
        dir.join(TOP_AIRPORTS_CSV),
        dir.join(DAILY_TREND_CSV),
    ];

    write_rows(&targets[0], &report.summary)?;
    write_rows(&targets[1], &report.monthly)?;
    write_rows(&targets[2], &report.yearly)?;
    write_rows(&targets[3], &report.top_airports)?;
    write_rows(&targets[4], &report.daily)?;

    Ok(targets.to_vec())
}
