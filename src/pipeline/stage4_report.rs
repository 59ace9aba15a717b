use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::model::scores::ScorePair;
use crate::model::stats::ColumnSummary;
use crate::report::markdown::render_report_markdown;

#[derive(Debug, Clone)]
pub struct Stage4Input<'a> {
    pub dataset: &'a [ScorePair],
    pub averages: &'a [f64],
    pub summaries: &'a [ColumnSummary],
}

/// Renders the markdown report and overwrites `path` with it.
pub fn write_report(input: &Stage4Input<'_>, path: &Path) -> std::io::Result<()> {
    let markdown = render_report_markdown(input.dataset, input.averages, input.summaries);
    write_text(path, &markdown)
}

fn write_text(path: &Path, contents: &str) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(contents.as_bytes())?;
    w.flush()?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_report.rs"]
mod tests;
