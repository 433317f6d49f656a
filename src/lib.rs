//! Access-log analytics: decode combined-log lines with a configurable
//! pattern and report distinct clients, top clients and top urls.

pub mod config;
pub mod error;
pub mod log;
pub mod logging;
pub mod model;
pub mod render;

pub use error::{AnalyzerError, Dimension};
pub use log::{Pattern, PatternError, Record, decode};
pub use model::{Analytics, AnalyzerConfig, LogAnalyzer, RankPolicy, ScanStats};

pub type Result<T> = anyhow::Result<T>;
