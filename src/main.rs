mod input;
mod logging;
mod model;
mod pipeline;
mod report;

use std::path::{Path, PathBuf};

use clap::Parser;

use crate::input::{InputError, load_scores};
use crate::model::scores::WeightVector;
use crate::pipeline::stage2_weight::run_stage2;
use crate::pipeline::stage3_summarize::run_stage3;
use crate::pipeline::stage4_report::{Stage4Input, write_report};

const INPUT_PATH: &str = "data/class_score_en.csv";
const REPORT_PATH: &str = "class_score_analysis.md";

/// Weighted exam score analysis. Reads data/class_score_en.csv and writes
/// class_score_analysis.md in the current directory.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone)]
struct AnalysisConfig {
    input_path: PathBuf,
    report_path: PathBuf,
    weights: WeightVector,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(INPUT_PATH),
            report_path: PathBuf::from(REPORT_PATH),
            weights: WeightVector::default_v1(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
enum RunError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("cannot write report {}: {source}", path.display())]
    Report {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RunOutcome {
    Written { rows: usize },
    NoData,
}

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    match run(&AnalysisConfig::default()) {
        Ok(RunOutcome::Written { rows }) => tracing::info!("analysis complete: {rows} rows"),
        Ok(RunOutcome::NoData) => {}
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}

fn run(config: &AnalysisConfig) -> Result<RunOutcome, RunError> {
    let dataset = load_scores(&config.input_path)?;
    if dataset.is_empty() {
        tracing::warn!(
            "no valid score rows in {}; report not written",
            config.input_path.display()
        );
        return Ok(RunOutcome::NoData);
    }

    let averages = run_stage2(&dataset, config.weights);
    let summaries = run_stage3(&dataset, &averages);
    for summary in &summaries {
        tracing::debug!(column = %summary.column, stats = ?summary.stats, "summarized");
    }

    let input = Stage4Input {
        dataset: &dataset,
        averages: &averages,
        summaries: &summaries,
    };
    write_report(&input, &config.report_path)
        .map_err(|source| report_error(&config.report_path, source))?;
    tracing::info!("wrote {}", config.report_path.display());

    Ok(RunOutcome::Written {
        rows: dataset.len(),
    })
}

fn report_error(path: &Path, source: std::io::Error) -> RunError {
    RunError::Report {
        path: path.to_path_buf(),
        source,
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
