//! Console preview of the raw table: head, tail and a numeric describe.

use log::debug;
use polars::prelude::*;
use statrs::statistics::{Data, Distribution, Max, Min, OrderStatistics};

use crate::config::PREVIEW_ROWS;
use crate::error::Result;

const DESCRIBE_ROWS: [&str; 8] = ["count", "mean", "std", "min", "25%", "50%", "75%", "max"];

/// Prints head, tail and describe of `df` to stdout.
pub fn print_preview(df: &DataFrame) -> Result<()> {
    println!("{}", df.head(Some(PREVIEW_ROWS)));
    println!("{}", df.tail(Some(PREVIEW_ROWS)));
    println!("{}", describe(df)?);
    Ok(())
}

/// Numeric summary of every column that holds at least one number.
///
/// Columns are coerced to `f64` leniently; text that fails to parse is ignored. A column
/// is kept only when more than half of its non-null values parse, so a text column with
/// a stray number-like cell stays out. `std` is the sample standard deviation.
/// Quantiles follow `statrs` order statistics, so they can differ slightly from other
/// tools' interpolation rules on small inputs.
pub fn describe(df: &DataFrame) -> Result<DataFrame> {
    let mut columns = vec![Column::new("statistic".into(), DESCRIBE_ROWS.to_vec())];

    for column in df.get_columns() {
        let numeric = column.cast(&DataType::Float64)?;
        let values: Vec<f64> = numeric
            .f64()?
            .into_iter()
            .flatten()
            .filter(|v| v.is_finite())
            .collect();

        let present = column.len() - column.null_count();
        if values.is_empty() || values.len() * 2 <= present {
            debug!("describe: skipping non-numeric column '{}'", column.name());
            continue;
        }

        columns.push(Column::new(column.name().clone(), column_stats(values).to_vec()));
    }

    Ok(DataFrame::new(columns)?)
}

/// count, mean, std, min, 25%, 50%, 75%, max (NaN where undefined).
fn column_stats(values: Vec<f64>) -> [f64; 8] {
    let mut data = Data::new(values);
    let count = data.len() as f64;
    let mean = data.mean().unwrap_or(f64::NAN);
    let std = data.std_dev().unwrap_or(f64::NAN);
    let min = data.min();
    let max = data.max();

    [
        count,
        mean,
        std,
        min,
        data.quantile(0.25),
        data.quantile(0.5),
        data.quantile(0.75),
        max,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stat(df: &DataFrame, column: &str, row: usize) -> f64 {
        df.column(column).unwrap().get(row).unwrap().try_extract::<f64>().unwrap()
    }

    #[test]
    fn test_describe_skips_text_columns() {
        let df = df![
            "apt_name" => ["Alpha", "Beta", "Gamma"],
            "dly_atc_pre_2" => ["1", "2", "bad"],
        ]
        .unwrap();

        let desc = describe(&df).unwrap();
        assert_eq!(desc.width(), 2);
        assert!(desc.column("apt_name").is_err());

        // count ignores the unparsable entry
        assert_eq!(stat(&desc, "dly_atc_pre_2", 0), 2.0);
        assert_eq!(stat(&desc, "dly_atc_pre_2", 1), 1.5);
        assert_eq!(stat(&desc, "dly_atc_pre_2", 3), 1.0);
        assert_eq!(stat(&desc, "dly_atc_pre_2", 7), 2.0);
    }

    #[test]
    fn test_describe_sample_std() {
        let df = df!["v" => [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]].unwrap();
        let desc = describe(&df).unwrap();

        // sample variance = 32 / 7
        let expected = (32.0f64 / 7.0).sqrt();
        assert!((stat(&desc, "v", 2) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_single_value_std_is_nan() {
        let df = df!["v" => [3.0]].unwrap();
        let desc = describe(&df).unwrap();
        assert!(stat(&desc, "v", 2).is_nan());
    }

    #[test]
    fn test_mostly_text_column_is_skipped() {
        let df = df![
            "apt_icao" => ["LFPG", "1234", "EHAM", "EDDF"],
            "flt_dep_1" => [Some("410"), None, Some("398"), Some("512")],
        ]
        .unwrap();

        let desc = describe(&df).unwrap();
        assert!(desc.column("apt_icao").is_err());
        assert_eq!(stat(&desc, "flt_dep_1", 0), 3.0);
    }
}
