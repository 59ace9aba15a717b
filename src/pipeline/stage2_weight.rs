use crate::model::scores::{AverageSequence, ScorePair, WeightVector};

pub fn weighted_average(pair: ScorePair, weights: WeightVector) -> f64 {
    pair.midterm as f64 * weights.midterm + pair.final_score as f64 * weights.final_score
}

/// One average per pair, in dataset order.
pub fn run_stage2(dataset: &[ScorePair], weights: WeightVector) -> AverageSequence {
    dataset
        .iter()
        .map(|&pair| weighted_average(pair, weights))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_weight.rs"]
mod tests;
