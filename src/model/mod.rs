pub mod scores;
pub mod stats;
