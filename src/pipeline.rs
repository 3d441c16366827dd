//! End-to-end run: load → clean → aggregate → render.
//!
//! `analyze` is pure computation over the input file; `render_report` owns every side
//! effect on the results directory. `run` chains the two with the console output.

use std::fs::create_dir_all;
use std::path::PathBuf;
use std::time::Instant;

use log::info;
use serde::Serialize;

use crate::aggregation::{
    AirportTotal, DailyTrendPoint, MonthlyAverage, YearSummary, YearlyTotal, daily_trend,
    format_summary_table, monthly_average, summary_by_year, top_airports, yearly_total,
};
use crate::cleaning::clean;
use crate::config::AnalysisConfig;
use crate::error::Result;
use crate::ingestion::{load_dataset, print_preview};
use crate::rendering::Figures;
use crate::utils::export::export_report_tables;

/// Everything computed from one input file.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    /// (rows, columns) of the cleaned table.
    pub shape: (usize, usize),
    pub summary: Vec<YearSummary>,
    pub monthly: Vec<MonthlyAverage>,
    pub yearly: Vec<YearlyTotal>,
    pub top_airports: Vec<AirportTotal>,
    pub daily: Vec<DailyTrendPoint>,
}

pub fn analyze(config: &AnalysisConfig) -> Result<AnalysisReport> {
    let started = Instant::now();

    let raw = load_dataset(&config.input_csv)?;
    if config.print_preview {
        print_preview(&raw)?;
    }

    let df = clean(raw, &config.columns)?;
    let columns = &config.columns;

    let report = AnalysisReport {
        shape: df.shape(),
        summary: summary_by_year(&df, columns)?,
        monthly: monthly_average(&df, columns)?,
        yearly: yearly_total(&df, columns)?,
        top_airports: top_airports(&df, config.top_airports)?,
        daily: daily_trend(&df, columns, config.rolling_window)?,
    };

    info!(
        "Analysis of {} rows over {} years done in {:.2?}",
        report.shape.0,
        report.summary.len(),
        started.elapsed()
    );
    Ok(report)
}

/// Writes the five images and the CSV tables; returns every written path.
pub fn render_report(report: &AnalysisReport, config: &AnalysisConfig) -> Result<Vec<PathBuf>> {
    create_dir_all(&config.results_dir)?;

    let figures = Figures {
        summary: &report.summary,
        daily: &report.daily,
        monthly: &report.monthly,
        yearly: &report.yearly,
        top_airports: &report.top_airports,
    };
    let mut written = figures.save_all(&config.results_dir, config.dpi)?;
    for path in &written {
        println!("Saved: {}", path.display());
    }

    written.extend(export_report_tables(report, &config.results_dir)?);
    Ok(written)
}

pub fn run(config: &AnalysisConfig) -> Result<AnalysisReport> {
    info!("Reading {:?}", config.input_csv);
    let report = analyze(config)?;

    println!("\nSummary Statistics by Year:");
    println!("{}", format_summary_table(&report.summary));

    render_report(&report, config)?;
    info!("Results written to {:?}", config.results_dir);
    Ok(report)
}
