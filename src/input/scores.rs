use std::fmt;
use std::io::BufRead;

use crate::model::scores::{ScoreDataset, ScorePair};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkippedLine {
    /// Wrong field count or a field that is not an integer.
    Malformed { line: String },
    /// The line could not be processed at all, e.g. invalid UTF-8.
    Failed { line: String, cause: String },
}

impl fmt::Display for SkippedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkippedLine::Malformed { line } => {
                write!(f, "Warning: Skipping malformed line: {line}")
            }
            SkippedLine::Failed { line, cause } => {
                write!(f, "Error: {cause} occurred while processing line: {line}")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    Comment,
    Pair(ScorePair),
    Skipped(SkippedLine),
}

#[derive(Debug, Clone, Default)]
pub struct ParsedScores {
    pub dataset: ScoreDataset,
    pub skipped: Vec<SkippedLine>,
}

/// Classifies one raw line. `raw` must not include the line terminator.
pub fn parse_line(raw: &str) -> LineOutcome {
    if raw.starts_with('#') {
        return LineOutcome::Comment;
    }
    let line = raw.trim();
    match split_pair(line) {
        Some(pair) => LineOutcome::Pair(pair),
        None => LineOutcome::Skipped(SkippedLine::Malformed {
            line: line.to_string(),
        }),
    }
}

fn split_pair(line: &str) -> Option<ScorePair> {
    let mut fields = line.split(',');
    let midterm = fields.next()?.trim().parse::<i64>().ok()?;
    let final_score = fields.next()?.trim().parse::<i64>().ok()?;
    if fields.next().is_some() {
        return None;
    }
    Some(ScorePair::new(midterm, final_score))
}

/// Parses every line of `reader`. Bad content never fails the parse; only
/// errors from the reader itself are returned.
pub fn parse_scores<R: BufRead>(mut reader: R) -> std::io::Result<ParsedScores> {
    let mut buf = Vec::new();
    let mut out = ParsedScores::default();

    loop {
        buf.clear();
        let read = reader.read_until(b'\n', &mut buf)?;
        if read == 0 {
            break;
        }
        let bytes = strip_newline(&buf);

        let outcome = match std::str::from_utf8(bytes) {
            Ok(raw) => parse_line(raw),
            Err(err) => LineOutcome::Skipped(SkippedLine::Failed {
                line: String::from_utf8_lossy(bytes).trim().to_string(),
                cause: err.to_string(),
            }),
        };

        match outcome {
            LineOutcome::Comment => {}
            LineOutcome::Pair(pair) => out.dataset.push(pair),
            LineOutcome::Skipped(skipped) => out.skipped.push(skipped),
        }
    }

    Ok(out)
}

fn strip_newline(buf: &[u8]) -> &[u8] {
    let buf = buf.strip_suffix(b"\n").unwrap_or(buf);
    buf.strip_suffix(b"\r").unwrap_or(buf)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/scores.rs"]
mod tests;
