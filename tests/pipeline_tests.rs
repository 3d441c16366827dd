use std::fs;
use std::path::{Path, PathBuf};

use atc_delay_analysis::aggregation::{summary_by_year, top_airports};
use atc_delay_analysis::cleaning::clean;
use atc_delay_analysis::config::{
    AnalysisConfig, ColumnConfig, DAILY_TREND_PNG, MONTHLY_AVERAGE_PNG, SUMMARY_TABLE_PNG,
    TOP_AIRPORTS_PNG, YEARLY_TOTAL_PNG,
};
use atc_delay_analysis::ingestion::load_dataset;
use atc_delay_analysis::utils::export::{export_report_tables, SUMMARY_BY_YEAR_CSV, TOP_AIRPORTS_CSV};
use atc_delay_analysis::{AnalysisError, analyze, run};

const HEADER: &str = "FLT_DATE,DLY_ATC_PRE_2,DLY_ATC_PRE_3,YEAR,APT_NAME,APT_ICAO";

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn write_csv(dir: &Path, rows: &[&str]) -> PathBuf {
    let path = dir.join("input.csv");
    let mut text = String::from(HEADER);
    for row in rows {
        text.push('\n');
        text.push_str(row);
    }
    text.push('\n');
    fs::write(&path, text).unwrap();
    path
}

fn config_for(input: PathBuf, results: &Path) -> AnalysisConfig {
    AnalysisConfig {
        input_csv: input,
        results_dir: results.to_path_buf(),
        dpi: 50,
        print_preview: false,
        ..AnalysisConfig::default()
    }
}

#[test]
fn test_non_numeric_delay_counts_as_zero() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_csv(
        dir.path(),
        &[
            "2020-01-01,10,5,2020,Paris-Charles-de-Gaulle,LFPG",
            "2020-01-02,bad,3,2020,Paris-Charles-de-Gaulle,LFPG",
        ],
    );

    let df = clean(load_dataset(&input).unwrap(), &ColumnConfig::default()).unwrap();
    let summary = summary_by_year(&df, &ColumnConfig::default()).unwrap();

    assert_eq!(summary.len(), 1);
    let y = &summary[0];
    assert_eq!(y.year, 2020);
    assert_eq!(y.count, 2);
    assert_eq!(y.mean, 9.0);
    assert_eq!(y.median, 9.0);
    assert_eq!(y.min, 3.0);
    assert_eq!(y.max, 15.0);
    assert_eq!(y.std, 8.49);
}

#[test]
fn test_nan_delay_counts_as_zero() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_csv(
        dir.path(),
        &[
            "2020-01-01,10,5,2020,Paris-Charles-de-Gaulle,LFPG",
            "2020-01-02,NaN,3,2020,Amsterdam - Schiphol,EHAM",
            "2020-01-03,nan,NaN,2020,Frankfurt,EDDF",
        ],
    );
    let report = analyze(&config_for(input, &dir.path().join("results"))).unwrap();

    let y = &report.summary[0];
    assert_eq!(y.count, 3);
    assert_eq!(y.mean, 6.0);
    assert_eq!(y.median, 3.0);
    assert_eq!(y.min, 0.0);
    assert_eq!(y.max, 15.0);
    assert!(y.std.is_finite());
    assert_eq!(report.yearly[0].total_delay, 18.0);

    let totals: Vec<f64> = report.top_airports.iter().map(|a| a.total_delay).collect();
    assert_eq!(totals, vec![15.0, 3.0, 0.0]);
}

#[test]
fn test_unparsable_date_row_is_excluded_everywhere() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_csv(
        dir.path(),
        &[
            "2020-01-01,10,5,2020,Nice,LFMN",
            "not-a-date,500,500,2020,Nice,LFMN",
        ],
    );
    let report = analyze(&config_for(input, &dir.path().join("results"))).unwrap();

    assert_eq!(report.shape.0, 1);
    assert_eq!(report.summary[0].count, 1);
    assert_eq!(report.yearly[0].total_delay, 15.0);
    assert_eq!(report.top_airports[0].total_delay, 15.0);
    assert_eq!(report.daily.len(), 1);
}

#[test]
fn test_all_dates_bad_is_empty_dataset() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_csv(dir.path(), &["garbage,1,1,2020,Nice,LFMN"]);

    let err = analyze(&config_for(input, &dir.path().join("results"))).unwrap_err();
    assert!(matches!(err, AnalysisError::EmptyDataset(_)));
}

#[test]
fn test_missing_required_column_is_reported_by_name() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("input.csv");
    fs::write(&path, "FLT_DATE,YEAR\n2020-01-01,2020\n").unwrap();

    let err = analyze(&config_for(path, dir.path())).unwrap_err();
    assert!(err.is_input_error());
    match err {
        AnalysisError::MissingColumn(name) => assert_eq!(name, "dly_atc_pre_2"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_missing_input_file_fails_before_results_dir_is_created() {
    let dir = tempfile::tempdir().unwrap();
    let results = dir.path().join("results");

    let err = run(&config_for(dir.path().join("absent.csv"), &results)).unwrap_err();
    assert!(matches!(err, AnalysisError::Io(_)));
    assert!(!err.is_input_error());
    assert!(!results.exists());
}

#[test]
fn test_top_airports_capped_and_descending() {
    let dir = tempfile::tempdir().unwrap();
    let rows: Vec<String> = (0..12)
        .map(|i| format!("2020-01-01,{},0,2020,Airport {i:02},A{i:03}", (i + 1) * 10))
        .collect();
    let refs: Vec<&str> = rows.iter().map(String::as_str).collect();
    let input = write_csv(dir.path(), &refs);

    let df = clean(load_dataset(&input).unwrap(), &ColumnConfig::default()).unwrap();
    let top = top_airports(&df, 10).unwrap();

    assert_eq!(top.len(), 10);
    assert_eq!(top[0].airport_label, "Airport 11 (A011)");
    assert_eq!(top[0].total_delay, 120.0);
    assert_eq!(top[9].airport_label, "Airport 02 (A002)");
    assert!(top.windows(2).all(|w| w[0].total_delay >= w[1].total_delay));
}

#[test]
fn test_fixture_file_end_to_end_aggregates() {
    let dir = tempfile::tempdir().unwrap();
    let report = analyze(&config_for(fixture("small_delays.csv"), dir.path())).unwrap();

    // the not-a-date row is gone, the Madrid row stays with zero delay
    assert_eq!(report.shape.0, 5);

    let years: Vec<i32> = report.summary.iter().map(|s| s.year).collect();
    assert_eq!(years, vec![2020, 2021]);

    let totals: Vec<f64> = report.yearly.iter().map(|y| y.total_delay).collect();
    assert_eq!(totals, vec![38.0, 15.0]);

    let months: Vec<(i32, u32)> = report.monthly.iter().map(|m| (m.year, m.month)).collect();
    assert_eq!(months, vec![(2020, 1), (2020, 2), (2021, 3), (2021, 4)]);
    assert_eq!(report.monthly[0].mean_delay, 9.0);

    assert_eq!(report.top_airports[0].airport_label, "Amsterdam - Schiphol (EHAM)");
    assert_eq!(report.top_airports.len(), 4);

    // 2020 rolling mean: Feb 3 is outside the 7-day window of the January reports
    let rolling: Vec<f64> = report
        .daily
        .iter()
        .filter(|p| p.year == 2020)
        .map(|p| p.rolling_mean)
        .collect();
    assert_eq!(rolling.len(), 3);
    assert!((rolling[0] - 15.0).abs() < 1e-9);
    assert!((rolling[1] - 9.0).abs() < 1e-9);
    assert!((rolling[2] - 20.0).abs() < 1e-9);
}

#[test]
fn test_report_tables_exported_as_csv() {
    let dir = tempfile::tempdir().unwrap();
    let report = analyze(&config_for(fixture("small_delays.csv"), dir.path())).unwrap();
    let out = dir.path().join("tables");

    let written = export_report_tables(&report, &out).unwrap();
    assert_eq!(written.len(), 5);
    assert!(written.iter().all(|p| p.exists()));

    let summary = fs::read_to_string(out.join(SUMMARY_BY_YEAR_CSV)).unwrap();
    assert!(summary.starts_with("year,mean,median,min,max,std,count\n"));
    assert!(summary.contains("2020,"));

    let airports = fs::read_to_string(out.join(TOP_AIRPORTS_CSV)).unwrap();
    assert!(airports.lines().nth(1).unwrap().starts_with("Amsterdam - Schiphol (EHAM),"));
}

#[test]
#[ignore = "needs a system sans-serif font for chart text"]
fn test_run_writes_all_artifacts() {
    let dir = tempfile::tempdir().unwrap();
    let results = dir.path().join("results");

    run(&config_for(fixture("small_delays.csv"), &results)).unwrap();

    for name in [
        SUMMARY_TABLE_PNG,
        DAILY_TREND_PNG,
        MONTHLY_AVERAGE_PNG,
        YEARLY_TOTAL_PNG,
        TOP_AIRPORTS_PNG,
    ] {
        let bytes = fs::read(results.join(name)).unwrap();
        assert_eq!(&bytes[1..4], b"PNG", "{name} is not a PNG");
    }
}
