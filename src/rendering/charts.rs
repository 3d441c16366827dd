//! The four figures. Each `draw_*` targets any plotters backend; the caller owns the file.
//!
//! Figure 1: daily rolling-mean trend, one line per year.
//! Figure 2: monthly average per year, marker lines, legend outside on the right.
//! Figure 3: yearly total, one bar per year.
//! Figure 4: top airports, horizontal bars, rank 1 on top.

use std::collections::BTreeMap;

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::aggregation::{AirportTotal, DailyTrendPoint, MonthlyAverage, YearlyTotal};
use crate::cleaning::dates::{date_to_epoch_days, epoch_days_to_date, month_abbrev};
use crate::rendering::DrawResult;
use crate::rendering::style::{ChartStyle, GRID_COLOR, TAB10, TAB20, TEXT_COLOR, palette_color};
use crate::utils::format_thousands;

pub const DAILY_TREND_TITLE: &str = "Daily Pre-Departure Delay (7-day Rolling Mean)";
pub const MONTHLY_AVERAGE_TITLE: &str = "Monthly Average Pre-Departure Delay";
pub const YEARLY_TOTAL_TITLE: &str = "Total ATC Pre-Departure Delay per Year (2017–2023)";
pub const TOP_AIRPORTS_TITLE: &str = "Top 10 Airports by Total ATC Pre-Departure Delay (2017-2023)";

/// Headroom above the tallest value.
const Y_PAD: f64 = 1.05;
const BAR_HALF_WIDTH: f64 = 0.4;

/// Upper axis bound for non-negative data; never collapses to an empty range.
fn upper_bound(values: impl Iterator<Item = f64>) -> f64 {
    let max = values.filter(|v| v.is_finite()).fold(0.0, f64::max);
    if max > 0.0 { max * Y_PAD } else { 1.0 }
}

/// Maps an integer-valued tick back to a category label; other ticks stay blank.
fn category_label(tick: f64, labels: &[String]) -> String {
    let idx = tick.round();
    if (tick - idx).abs() > 1e-6 || idx < 0.0 {
        return String::new();
    }
    labels.get(idx as usize).cloned().unwrap_or_default()
}

/// Figure 1: one rolling-mean line per year over the calendar.
pub fn draw_daily_trend<DB>(
    root: &DrawingArea<DB, Shift>,
    points: &[DailyTrendPoint],
    style: &ChartStyle,
) -> DrawResult
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)?;

    let mut by_year: BTreeMap<i32, Vec<(i32, f64)>> = BTreeMap::new();
    for p in points {
        by_year
            .entry(p.year)
            .or_default()
            .push((date_to_epoch_days(p.date), p.rolling_mean));
    }

    let x_min = points.iter().map(|p| date_to_epoch_days(p.date)).min().unwrap_or(0);
    let x_max = points
        .iter()
        .map(|p| date_to_epoch_days(p.date))
        .max()
        .unwrap_or(0)
        .max(x_min + 1);
    let y_max = upper_bound(points.iter().map(|p| p.rolling_mean));

    let mut chart = ChartBuilder::on(root)
        .caption(DAILY_TREND_TITLE, style.bold(20.0))
        .margin(style.px(12.0))
        .x_label_area_size(style.px(50.0))
        .y_label_area_size(style.px(95.0))
        .build_cartesian_2d(x_min..x_max, 0f64..y_max)?;

    chart
        .configure_mesh()
        .light_line_style(&WHITE)
        .bold_line_style(style.line(GRID_COLOR, 0.8))
        .x_labels(10)
        .x_label_formatter(&|d| {
            epoch_days_to_date(*d)
                .map(|d| d.format("%Y-%m").to_string())
                .unwrap_or_default()
        })
        .y_label_formatter(&|v| format_thousands(*v))
        .label_style(style.bold(18.0).color(&TEXT_COLOR))
        .x_desc("Year")
        .y_desc("Total Delay (minutes)")
        .axis_desc_style(style.bold(16.0))
        .draw()?;

    for (i, (year, series)) in by_year.into_iter().enumerate() {
        let line = style.line(palette_color(&TAB10, i), 1.5);
        let legend_len = style.px(18.0) as i32;
        chart
            .draw_series(LineSeries::new(series, line))?
            .label(year.to_string())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + legend_len, y)], line));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(&WHITE.mix(0.85))
        .border_style(style.line(GRID_COLOR, 0.8))
        .label_font(style.regular(14.0))
        .draw()?;

    Ok(())
}

/// Figure 2: mean delay by month, one marker line per year, legend titled "Year".
pub fn draw_monthly_average<DB>(
    root: &DrawingArea<DB, Shift>,
    rows: &[MonthlyAverage],
    style: &ChartStyle,
) -> DrawResult
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)?;

    let mut by_year: BTreeMap<i32, Vec<(i32, f64)>> = BTreeMap::new();
    for r in rows {
        by_year
            .entry(r.year)
            .or_default()
            .push((r.month as i32, r.mean_delay));
    }

    let (width, _) = root.dim_in_pixel();
    let legend_w = style.text_width(8, 16.0) as i32;
    let (plot_area, legend_area) = root.split_horizontally(width as i32 - legend_w);

    let y_max = upper_bound(rows.iter().map(|r| r.mean_delay));

    let mut chart = ChartBuilder::on(&plot_area)
        .caption(MONTHLY_AVERAGE_TITLE, style.bold(20.0))
        .margin(style.px(12.0))
        .x_label_area_size(style.px(50.0))
        .y_label_area_size(style.px(80.0))
        .build_cartesian_2d(0i32..13i32, 0f64..y_max)?;

    chart
        .configure_mesh()
        .light_line_style(&WHITE)
        .bold_line_style(style.line(GRID_COLOR, 0.8))
        .x_labels(14)
        .x_label_formatter(&|m| {
            u32::try_from(*m)
                .ok()
                .and_then(month_abbrev)
                .unwrap_or_default()
                .to_string()
        })
        .y_label_formatter(&|v| format_thousands(*v))
        .label_style(style.bold(18.0).color(&TEXT_COLOR))
        .x_desc("Month")
        .y_desc("Average Delay (minutes)")
        .axis_desc_style(style.bold(18.0))
        .draw()?;

    let marker = style.px(4.0);
    let mut legend = Vec::with_capacity(by_year.len());
    for (i, (year, series)) in by_year.into_iter().enumerate() {
        let color = palette_color(&TAB20, i);
        chart.draw_series(LineSeries::new(series.iter().copied(), style.line(color, 2.5)))?;
        chart.draw_series(
            series
                .iter()
                .map(|&(m, v)| Circle::new((m, v), marker, color.filled())),
        )?;
        legend.push((year, color));
    }

    draw_year_legend(&legend_area, &legend, style)?;
    Ok(())
}

/// Legend column: "Year" heading, then a line-and-marker swatch per year.
fn draw_year_legend<DB>(
    area: &DrawingArea<DB, Shift>,
    entries: &[(i32, RGBColor)],
    style: &ChartStyle,
) -> DrawResult
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let line_h = style.pt(16.0 * 1.6) as i32;
    let swatch = style.px(20.0) as i32;
    let left = style.px(4.0) as i32;
    let top = style.px(40.0) as i32;
    let anchor = Pos::new(HPos::Left, VPos::Center);

    area.draw(&Text::new(
        "Year",
        (left, top),
        style.bold(16.0).color(&TEXT_COLOR).pos(anchor),
    ))?;

    for (i, (year, color)) in entries.iter().enumerate() {
        let y = top + line_h * (i as i32 + 1);
        area.draw(&PathElement::new(
            vec![(left, y), (left + swatch, y)],
            style.line(*color, 2.5),
        ))?;
        area.draw(&Circle::new((left + swatch / 2, y), style.px(4.0), color.filled()))?;
        area.draw(&Text::new(
            year.to_string(),
            (left + swatch + style.px(6.0) as i32, y),
            style.regular(14.0).color(&TEXT_COLOR).pos(anchor),
        ))?;
    }

    Ok(())
}

/// Figure 3: one bar per year, coloured by position in `tab10`.
pub fn draw_yearly_total<DB>(
    root: &DrawingArea<DB, Shift>,
    totals: &[YearlyTotal],
    style: &ChartStyle,
) -> DrawResult
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)?;

    let labels: Vec<String> = totals.iter().map(|t| t.year.to_string()).collect();
    let n = totals.len().max(1);
    let y_max = upper_bound(totals.iter().map(|t| t.total_delay));

    let mut chart = ChartBuilder::on(root)
        .caption(YEARLY_TOTAL_TITLE, style.bold(20.0))
        .margin(style.px(12.0))
        .x_label_area_size(style.px(50.0))
        .y_label_area_size(style.px(110.0))
        .build_cartesian_2d(-0.5f64..(n as f64 - 0.5), 0f64..y_max)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .light_line_style(&WHITE)
        .bold_line_style(style.line(GRID_COLOR, 0.8))
        .x_labels(n)
        .x_label_formatter(&|v| category_label(*v, &labels))
        .y_label_formatter(&|v| format_thousands(*v))
        .label_style(style.bold(18.0).color(&TEXT_COLOR))
        .x_desc("Year")
        .y_desc("Total Delay (minutes)")
        .axis_desc_style(style.bold(18.0))
        .draw()?;

    chart.draw_series(totals.iter().enumerate().map(|(i, t)| {
        let x = i as f64;
        Rectangle::new(
            [(x - BAR_HALF_WIDTH, 0.0), (x + BAR_HALF_WIDTH, t.total_delay)],
            palette_color(&TAB10, i).filled(),
        )
    }))?;

    Ok(())
}

/// Figure 4: horizontal bars, largest airport at the top.
pub fn draw_top_airports<DB>(
    root: &DrawingArea<DB, Shift>,
    airports: &[AirportTotal],
    style: &ChartStyle,
) -> DrawResult
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)?;

    let n = airports.len().max(1);
    // bottom-to-top: the last tick is rank 1
    let labels: Vec<String> = airports
        .iter()
        .rev()
        .map(|a| a.airport_label.clone())
        .collect();
    let longest = labels.iter().map(|l| l.chars().count()).max().unwrap_or(8);
    let x_max = upper_bound(airports.iter().map(|a| a.total_delay));

    let mut chart = ChartBuilder::on(root)
        .caption(TOP_AIRPORTS_TITLE, style.bold(22.0))
        .margin(style.px(12.0))
        .x_label_area_size(style.px(60.0))
        .y_label_area_size(style.text_width(longest, 20.0) + style.px(40.0))
        .build_cartesian_2d(0f64..x_max, -0.5f64..(n as f64 - 0.5))?;

    chart
        .configure_mesh()
        .disable_y_mesh()
        .light_line_style(&WHITE)
        .bold_line_style(style.line(GRID_COLOR, 0.8))
        .y_labels(n)
        .y_label_formatter(&|v| category_label(*v, &labels))
        .x_label_formatter(&|v| format_thousands(*v))
        .label_style(style.bold(20.0).color(&TEXT_COLOR))
        .x_desc("Total Delay (minutes)")
        .y_desc("Airport")
        .axis_desc_style(style.bold(20.0))
        .draw()?;

    chart.draw_series(airports.iter().enumerate().map(|(rank, a)| {
        let y = (n - 1 - rank) as f64;
        Rectangle::new(
            [(0.0, y - BAR_HALF_WIDTH), (a.total_delay, y + BAR_HALF_WIDTH)],
            palette_color(&TAB10, rank).filled(),
        )
    }))?;

    Ok(())
}
