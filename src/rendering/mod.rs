//! PNG artifacts. Each figure is drawn by a backend-generic function in `charts` or
//! `table` and written here through `BitMapBackend`.

pub mod charts;
pub mod style;
pub mod table;

use std::path::{Path, PathBuf};

use log::{debug, info};
use plotters::coord::Shift;
use plotters::prelude::*;

use crate::aggregation::{AirportTotal, DailyTrendPoint, MonthlyAverage, YearSummary, YearlyTotal};
use crate::config::{
    DAILY_TREND_PNG, MONTHLY_AVERAGE_PNG, SUMMARY_TABLE_PNG, TOP_AIRPORTS_PNG, YEARLY_TOTAL_PNG,
};
use crate::error::{AnalysisError, Result};
use style::{ChartStyle, FigureSize};

pub type DrawResult = std::result::Result<(), Box<dyn std::error::Error>>;

/// Rasterizes `draw` into `path` at `size` × `dpi`. The file is replaced if present.
pub fn save_png<F>(path: &Path, size: FigureSize, dpi: u32, draw: F) -> Result<()>
where
    F: FnOnce(&DrawingArea<BitMapBackend<'_>, Shift>) -> DrawResult,
{
    let artifact = path.display().to_string();
    let pixels = size.pixels(dpi);
    debug!("Rendering {} at {}x{} px", artifact, pixels.0, pixels.1);

    let root = BitMapBackend::new(path, pixels).into_drawing_area();
    draw(&root).map_err(|e| AnalysisError::render(&artifact, e))?;
    root.present()
        .map_err(|e| AnalysisError::render(&artifact, e))?;

    info!("Saved {}", artifact);
    Ok(())
}

/// The five images of one report, in output order.
pub struct Figures<'a> {
    pub summary: &'a [YearSummary],
    pub daily: &'a [DailyTrendPoint],
    pub monthly: &'a [MonthlyAverage],
    pub yearly: &'a [YearlyTotal],
    pub top_airports: &'a [AirportTotal],
}

impl Figures<'_> {
    /// Writes every image into `dir` (which must exist) and returns the paths.
    pub fn save_all(&self, dir: &Path, dpi: u32) -> Result<Vec<PathBuf>> {
        let style = ChartStyle::new(dpi);

        let table = dir.join(SUMMARY_TABLE_PNG);
        save_png(&table, FigureSize::SUMMARY_TABLE, dpi, |root| {
            table::draw_summary_table(root, self.summary, &style)
        })?;

        let daily = dir.join(DAILY_TREND_PNG);
        save_png(&daily, FigureSize::DAILY_TREND, dpi, |root| {
            charts::draw_daily_trend(root, self.daily, &style)
        })?;

        let monthly = dir.join(MONTHLY_AVERAGE_PNG);
        save_png(&monthly, FigureSize::MONTHLY_AVERAGE, dpi, |root| {
            charts::draw_monthly_average(root, self.monthly, &style)
        })?;

        let yearly = dir.join(YEARLY_TOTAL_PNG);
        save_png(&yearly, FigureSize::YEARLY_TOTAL, dpi, |root| {
            charts::draw_yearly_total(root, self.yearly, &style)
        })?;

        let airports = dir.join(TOP_AIRPORTS_PNG);
        save_png(&airports, FigureSize::TOP_AIRPORTS, dpi, |root| {
            charts::draw_top_airports(root, self.top_airports, &style)
        })?;

        Ok(vec![table, daily, monthly, yearly, airports])
    }
}
