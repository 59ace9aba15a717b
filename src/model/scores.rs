#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScorePair {
    pub midterm: i64,
    pub final_score: i64,
}

impl ScorePair {
    pub fn new(midterm: i64, final_score: i64) -> Self {
        Self {
            midterm,
            final_score,
        }
    }
}

/// Score rows in input line order.
pub type ScoreDataset = Vec<ScorePair>;

/// Weighted averages, positionally aligned with a [`ScoreDataset`].
pub type AverageSequence = Vec<f64>;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightVector {
    pub midterm: f64,
    pub final_score: f64,
}

impl WeightVector {
    pub const fn new(midterm: f64, final_score: f64) -> Self {
        Self {
            midterm,
            final_score,
        }
    }

    /// Midterm out of 125 worth 40%, final out of 100 worth 60%.
    pub const fn default_v1() -> Self {
        Self::new(40.0 / 125.0, 60.0 / 100.0)
    }
}

impl Default for WeightVector {
    fn default() -> Self {
        Self::default_v1()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Midterm,
    Final,
    Average,
}

impl Column {
    pub const ALL: [Column; 3] = [Column::Midterm, Column::Final, Column::Average];

    pub fn label(self) -> &'static str {
        match self {
            Column::Midterm => "Midterm",
            Column::Final => "Final",
            Column::Average => "Average",
        }
    }
}

impl std::fmt::Display for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/scores.rs"]
mod tests;
