//! CSV loading.
//!
//! All columns are read as `String` (`infer_schema_length = 0`). Schema inference would
//! fail the whole read on a stray `bad` value deep inside a numeric column; reading text
//! and coercing later turns that into a single null instead.

use std::{
    io::{Error as IoError, ErrorKind},
    path::Path,
};

use log::{debug, info};
use polars::prelude::*;

use crate::error::{AnalysisError, Result};

/// Reads the CSV at `path` (header row required) into an all-text DataFrame.
///
/// Fails if the file is absent, unparsable, or holds no data rows.
pub fn load_dataset(path: &Path) -> Result<DataFrame> {
    if !path.exists() {
        return Err(IoError::new(
            ErrorKind::NotFound,
            format!("input CSV not found at {}", path.display()),
        )
        .into());
    }

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))?
        .finish()?;

    if df.height() == 0 {
        return Err(AnalysisError::EmptyDataset(format!(
            "{} has a header but no rows",
            path.display()
        )));
    }

    info!(
        "Loaded {} rows x {} columns from {}",
        df.height(),
        df.width(),
        path.display()
    );
    debug!("Raw columns: {:?}", df.get_column_names());

    Ok(df)
}
