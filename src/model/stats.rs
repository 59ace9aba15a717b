use crate::model::scores::Column;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummaryStats {
    pub mean: f64,
    pub variance: f64,
    pub median: f64,
    pub min: f64,
    pub max: f64,
}

impl SummaryStats {
    /// Returned for an empty column instead of an error.
    pub const ZERO: SummaryStats = SummaryStats {
        mean: 0.0,
        variance: 0.0,
        median: 0.0,
        min: 0.0,
        max: 0.0,
    };
}

impl Default for SummaryStats {
    fn default() -> Self {
        Self::ZERO
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnSummary {
    pub column: Column,
    pub stats: SummaryStats,
}
