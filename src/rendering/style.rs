//! Fixed visual styling shared by every artifact.
//!
//! Sizes are specified the print way (inches, points) and converted to pixels at the
//! configured DPI: a 14 × 7 in figure at 300 DPI is 4200 × 2100 px, a 20 pt title is
//! 83 px tall.

use plotters::style::{FontDesc, FontFamily, FontStyle, RGBColor, ShapeStyle};

pub const GRID_COLOR: RGBColor = RGBColor(204, 204, 204);
pub const TEXT_COLOR: RGBColor = RGBColor(38, 38, 38);

pub const TAB10: [RGBColor; 10] = [
    RGBColor(31, 119, 180),
    RGBColor(255, 127, 14),
    RGBColor(44, 160, 44),
    RGBColor(214, 39, 40),
    RGBColor(148, 103, 189),
    RGBColor(140, 86, 75),
    RGBColor(227, 119, 194),
    RGBColor(127, 127, 127),
    RGBColor(188, 189, 34),
    RGBColor(23, 190, 207),
];

pub const TAB20: [RGBColor; 20] = [
    RGBColor(31, 119, 180),
    RGBColor(174, 199, 232),
    RGBColor(255, 127, 14),
    RGBColor(255, 187, 120),
    RGBColor(44, 160, 44),
    RGBColor(152, 223, 138),
    RGBColor(214, 39, 40),
    RGBColor(255, 152, 150),
    RGBColor(148, 103, 189),
    RGBColor(197, 176, 213),
    RGBColor(140, 86, 75),
    RGBColor(196, 156, 148),
    RGBColor(227, 119, 194),
    RGBColor(247, 182, 210),
    RGBColor(127, 127, 127),
    RGBColor(199, 199, 199),
    RGBColor(188, 189, 34),
    RGBColor(219, 219, 141),
    RGBColor(23, 190, 207),
    RGBColor(158, 218, 229),
];

/// Cycles through `palette` for the i-th series.
pub fn palette_color(palette: &[RGBColor], index: usize) -> RGBColor {
    palette[index % palette.len()]
}

/// Figure dimensions in inches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FigureSize {
    pub width_in: f64,
    pub height_in: f64,
}

impl FigureSize {
    pub const SUMMARY_TABLE: FigureSize = FigureSize::new(10.0, 3.0);
    pub const DAILY_TREND: FigureSize = FigureSize::new(14.0, 7.0);
    pub const MONTHLY_AVERAGE: FigureSize = FigureSize::new(14.0, 7.0);
    pub const YEARLY_TOTAL: FigureSize = FigureSize::new(12.0, 6.0);
    pub const TOP_AIRPORTS: FigureSize = FigureSize::new(15.0, 9.0);

    pub const fn new(width_in: f64, height_in: f64) -> Self {
        Self { width_in, height_in }
    }

    pub fn pixels(&self, dpi: u32) -> (u32, u32) {
        let dpi = f64::from(dpi);
        (
            (self.width_in * dpi).round() as u32,
            (self.height_in * dpi).round() as u32,
        )
    }
}

/// Resolution-aware font and stroke factory.
#[derive(Debug, Clone, Copy)]
pub struct ChartStyle {
    pub dpi: u32,
}

impl ChartStyle {
    pub fn new(dpi: u32) -> Self {
        Self { dpi }
    }

    /// Points → pixels.
    pub fn pt(&self, points: f64) -> f64 {
        points * f64::from(self.dpi) / 72.0
    }

    pub fn px(&self, points: f64) -> u32 {
        self.pt(points).round().max(1.0) as u32
    }

    pub fn bold(&self, points: f64) -> FontDesc<'static> {
        FontDesc::new(FontFamily::SansSerif, self.pt(points), FontStyle::Bold)
    }

    pub fn regular(&self, points: f64) -> FontDesc<'static> {
        FontDesc::new(FontFamily::SansSerif, self.pt(points), FontStyle::Normal)
    }

    pub fn line(&self, color: RGBColor, width_pt: f64) -> ShapeStyle {
        ShapeStyle::from(&color).stroke_width(self.px(width_pt))
    }

    /// Rough pixel width of `chars` characters at `points`; used to size label areas.
    pub fn text_width(&self, chars: usize, points: f64) -> u32 {
        (chars as f64 * self.pt(points) * 0.62).ceil() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_figure_pixels_at_300_dpi() {
        assert_eq!(FigureSize::DAILY_TREND.pixels(300), (4200, 2100));
        assert_eq!(FigureSize::SUMMARY_TABLE.pixels(300), (3000, 900));
        assert_eq!(FigureSize::TOP_AIRPORTS.pixels(100), (1500, 900));
    }

    #[test]
    fn test_points_to_pixels() {
        let style = ChartStyle::new(300);
        assert!((style.pt(72.0) - 300.0).abs() < 1e-9);
        assert_eq!(style.px(20.0), 83);
        assert_eq!(ChartStyle::new(1).px(0.1), 1);
    }

    #[test]
    fn test_palette_cycles() {
        assert_eq!(palette_color(&TAB10, 0), TAB10[0]);
        assert_eq!(palette_color(&TAB10, 11), TAB10[1]);
        assert_eq!(palette_color(&TAB20, 19), TAB20[19]);
    }
}
