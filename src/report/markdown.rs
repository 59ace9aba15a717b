use std::fmt::Write;

use crate::model::scores::ScorePair;
use crate::model::stats::ColumnSummary;
use crate::report::format_f64_3;

pub fn render_report_markdown(
    dataset: &[ScorePair],
    averages: &[f64],
    summaries: &[ColumnSummary],
) -> String {
    let mut out = String::new();

    out.push_str("### Individual Score\n\n");
    out.push_str("| Midterm | Final | Average |\n");
    out.push_str("| ------- | ----- | ------- |\n");
    for (pair, average) in dataset.iter().zip(averages) {
        let _ = writeln!(
            out,
            "| {} | {} | {} |",
            pair.midterm,
            pair.final_score,
            format_f64_3(*average)
        );
    }
    out.push_str("\n\n\n");

    out.push_str("### Examination Analysis\n");
    for summary in summaries {
        let stats = &summary.stats;
        let _ = writeln!(out, "* {}", summary.column);
        let _ = writeln!(out, "  * Mean: **{}**", format_f64_3(stats.mean));
        let _ = writeln!(out, "  * Variance: {}", format_f64_3(stats.variance));
        let _ = writeln!(out, "  * Median: **{}**", format_f64_3(stats.median));
        let _ = writeln!(
            out,
            "  * Min/Max: ({}, {})",
            format_f64_3(stats.min),
            format_f64_3(stats.max)
        );
    }

    out
}
