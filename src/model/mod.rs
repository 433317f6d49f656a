//! Aggregation model: fold decoded records into frequency tables and rank them.

pub mod analyzer;
pub mod freq;

pub use analyzer::{Aggregator, Analytics, AnalyzerConfig, LogAnalyzer, ScanStats};
pub use freq::{FrequencyTable, RankPolicy};
