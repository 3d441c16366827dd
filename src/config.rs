//! Fixed run parameters: input path, output directory, column names, chart constants.
//!
//! Nothing here is read from the environment or the command line. `AnalysisConfig`
//! exists as a value so tests and benches can redirect paths.

use std::path::PathBuf;

pub const DEFAULT_INPUT_CSV: &str = "combined_pre_departure_delay_dataset_2017_2023.csv";
pub const DEFAULT_RESULTS_DIR: &str = "results";

pub const DATE_COL: &str = "flt_date";
pub const DELAY_COLS: [&str; 2] = ["dly_atc_pre_2", "dly_atc_pre_3"];
pub const YEAR_COL: &str = "year";
pub const AIRPORT_NAME_COL: &str = "apt_name";
pub const AIRPORT_ICAO_COL: &str = "apt_icao";

// Derived columns
pub const TOTAL_DELAY_COL: &str = "total_delay";
pub const MONTH_COL: &str = "month";
pub const MONTH_NAME_COL: &str = "month_name";
pub const AIRPORT_LABEL_COL: &str = "airport_label";

pub const ROLLING_WINDOW_DAYS: usize = 7;
pub const TOP_AIRPORTS: usize = 10;
pub const OUTPUT_DPI: u32 = 300;
pub const PREVIEW_ROWS: usize = 5;

// Artifact file names
pub const SUMMARY_TABLE_PNG: &str = "summary table.png";
pub const DAILY_TREND_PNG: &str = "figure 1.png";
pub const MONTHLY_AVERAGE_PNG: &str = "figure 2.png";
pub const YEARLY_TOTAL_PNG: &str = "figure 3.png";
pub const TOP_AIRPORTS_PNG: &str = "figure 4.png";

/// Input column names, lowercase (matched after normalization).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnConfig {
    pub date: String,
    pub delays: [String; 2],
    pub year: String,
    pub airport_name: String,
    pub airport_icao: String,
}

impl Default for ColumnConfig {
    fn default() -> Self {
        Self {
            date: DATE_COL.to_string(),
            delays: DELAY_COLS.map(str::to_string),
            year: YEAR_COL.to_string(),
            airport_name: AIRPORT_NAME_COL.to_string(),
            airport_icao: AIRPORT_ICAO_COL.to_string(),
        }
    }
}

impl ColumnConfig {
    /// Every column the cleaning stage needs to find in the input.
    pub fn required(&self) -> Vec<&str> {
        vec![
            self.date.as_str(),
            self.delays[0].as_str(),
            self.delays[1].as_str(),
            self.year.as_str(),
            self.airport_name.as_str(),
            self.airport_icao.as_str(),
        ]
    }
}

#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    pub input_csv: PathBuf,
    pub results_dir: PathBuf,
    pub columns: ColumnConfig,
    pub rolling_window: usize,
    pub top_airports: usize,
    pub dpi: u32,
    /// Print head/tail/describe of the raw table before cleaning.
    pub print_preview: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            input_csv: PathBuf::from(DEFAULT_INPUT_CSV),
            results_dir: PathBuf::from(DEFAULT_RESULTS_DIR),
            columns: ColumnConfig::default(),
            rolling_window: ROLLING_WINDOW_DAYS,
            top_airports: TOP_AIRPORTS,
            dpi: OUTPUT_DPI,
            print_preview: true,
        }
    }
}
