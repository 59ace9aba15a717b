use crate::model::scores::{Column, ScorePair};
use crate::model::stats::{ColumnSummary, SummaryStats};

/// Mean, population variance, median, min and max of `values`.
///
/// An empty slice yields [`SummaryStats::ZERO`].
pub fn summarize(values: &[f64]) -> SummaryStats {
    if values.is_empty() {
        return SummaryStats::ZERO;
    }
    let n = values.len();
    let n_f = n as f64;

    let mean = values.iter().sum::<f64>() / n_f;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n_f;

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let median = if n % 2 == 0 {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    } else {
        sorted[n / 2]
    };

    SummaryStats {
        mean,
        variance,
        median,
        min: sorted[0],
        max: sorted[n - 1],
    }
}

pub fn column_values(dataset: &[ScorePair], averages: &[f64], column: Column) -> Vec<f64> {
    match column {
        Column::Midterm => dataset.iter().map(|p| p.midterm as f64).collect(),
        Column::Final => dataset.iter().map(|p| p.final_score as f64).collect(),
        Column::Average => averages.to_vec(),
    }
}

pub fn run_stage3(dataset: &[ScorePair], averages: &[f64]) -> Vec<ColumnSummary> {
    Column::ALL
        .iter()
        .map(|&column| ColumnSummary {
            column,
            stats: summarize(&column_values(dataset, averages, column)),
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_summarize.rs"]
mod tests;
