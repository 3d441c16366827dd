//! Runs the delay analysis on the fixed input file and writes `results/`.
//!
//! Set `RUST_LOG=info` (or `debug`) for stage timings and row counts.

use std::process::ExitCode;

use atc_delay_analysis::{AnalysisConfig, AnalysisError, run};
use log::{error, info};

/// 2 when the input data is unusable, 1 for environment failures (I/O, rendering).
fn exit_code_for(err: &AnalysisError) -> ExitCode {
    if err.is_input_error() {
        ExitCode::from(2)
    } else {
        ExitCode::FAILURE
    }
}

fn main() -> ExitCode {
    env_logger::init();
    info!("=== ATC DELAY ANALYSIS START ===");

    let config = AnalysisConfig::default();
    match run(&config) {
        Ok(report) => {
            info!(
                "=== ATC DELAY ANALYSIS FINISHED ({} rows) ===",
                report.shape.0
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Analysis failed: {}", e);
            eprintln!("Error: {}", e);
            exit_code_for(&e)
        }
    }
}
