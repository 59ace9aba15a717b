use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

pub mod scores;

use crate::model::scores::ScoreDataset;
use scores::{SkippedLine, parse_scores};

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("cannot open score file {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed reading score file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Opens `path` and parses every line, logging the lines that were skipped.
pub fn load_scores(path: &Path) -> Result<ScoreDataset, InputError> {
    let file = File::open(path).map_err(|source| InputError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed = parse_scores(BufReader::new(file)).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    for skipped in &parsed.skipped {
        match skipped {
            SkippedLine::Malformed { .. } => tracing::warn!("{skipped}"),
            SkippedLine::Failed { .. } => tracing::error!("{skipped}"),
        }
    }
    tracing::debug!(
        rows = parsed.dataset.len(),
        skipped = parsed.skipped.len(),
        "parsed {}",
        path.display()
    );

    Ok(parsed.dataset)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
