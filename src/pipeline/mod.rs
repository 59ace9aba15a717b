pub mod stage2_weight;
pub mod stage3_summarize;
pub mod stage4_report;
