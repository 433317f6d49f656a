use std::io;
use std::path::PathBuf;

/// Which frequency table a ranking was requested from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Ips,
    Urls,
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dimension::Ips => f.write_str("ips"),
            Dimension::Urls => f.write_str("urls"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AnalyzerError {
    #[error("config is required")]
    ConfigRequired,

    #[error("line pattern is required")]
    PatternRequired,

    #[error("cannot open or read {}", .path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("requested top {requested} {dimension} but only {available} distinct keys exist")]
    RankOutOfRange {
        dimension: Dimension,
        requested: usize,
        available: usize,
    },
}
