//! Summary table image: years as row labels, statistics as column headers.

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::aggregation::YearSummary;
use crate::rendering::DrawResult;
use crate::rendering::style::{ChartStyle, TEXT_COLOR};

const TABLE_FONT_PT: f64 = 12.0;
// Row height relative to the font, doubled like a vertically scaled table.
const ROW_HEIGHT_FACTOR: f64 = 2.0 * 1.4;

/// Draws the table centered in `root` with outlined cells. The top-left corner is empty.
pub fn draw_summary_table<DB>(
    root: &DrawingArea<DB, Shift>,
    rows: &[YearSummary],
    style: &ChartStyle,
) -> DrawResult
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)?;

    let (width, height) = root.dim_in_pixel();
    let n_cols = YearSummary::COLUMNS.len() + 1;
    let n_rows = rows.len() + 1;

    let table_w = (f64::from(width) * 0.92) as i32;
    let cell_w = table_w / n_cols as i32;
    let max_cell_h = f64::from(height) * 0.92 / n_rows as f64;
    let cell_h = style.pt(TABLE_FONT_PT * ROW_HEIGHT_FACTOR).min(max_cell_h) as i32;

    let x0 = (width as i32 - cell_w * n_cols as i32) / 2;
    let y0 = (height as i32 - cell_h * n_rows as i32) / 2;

    let border = style.line(BLACK, 0.8);
    let text = style
        .regular(TABLE_FONT_PT)
        .color(&TEXT_COLOR)
        .pos(Pos::new(HPos::Center, VPos::Center));

    let mut grid: Vec<Vec<String>> = Vec::with_capacity(n_rows);
    let mut header = vec![String::new()];
    header.extend(YearSummary::COLUMNS.iter().map(|c| c.to_string()));
    grid.push(header);
    for row in rows {
        let mut line = vec![row.year.to_string()];
        line.extend(row.cells());
        grid.push(line);
    }

    for (r, line) in grid.iter().enumerate() {
        for (c, cell) in line.iter().enumerate() {
            // corner cell stays blank and unframed
            if r == 0 && c == 0 {
                continue;
            }
            let left = x0 + c as i32 * cell_w;
            let top = y0 + r as i32 * cell_h;

            root.draw(&Rectangle::new(
                [(left, top), (left + cell_w, top + cell_h)],
                border,
            ))?;
            root.draw(&Text::new(
                cell.clone(),
                (left + cell_w / 2, top + cell_h / 2),
                text.clone(),
            ))?;
        }
    }

    Ok(())
}
