use crate::error::{AnalyzerError, Dimension};
use crate::log::{LogLines, Pattern, Record, decode};
use crate::model::freq::{FrequencyTable, RankPolicy};
use serde::Serialize;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info};

/// Caller-supplied analyzer settings.
#[derive(Debug, Clone, Default)]
pub struct AnalyzerConfig {
    pub pattern: Option<Pattern>,
    /// How many of the most active client addresses to report. 0 = none.
    pub top_ips: usize,
    /// How many of the most visited urls to report. 0 = none.
    pub top_urls: usize,
    pub rank_policy: RankPolicy,
}

/// Line counters for one scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScanStats {
    pub lines: u64,
    pub matched: u64,
    pub skipped: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analytics {
    pub unique_ips: usize,
    pub most_active_ips: Vec<String>,
    pub most_visited_urls: Vec<String>,
    pub stats: ScanStats,
}

/// The two frequency tables of one analysis run.
#[derive(Debug, Default)]
pub struct Aggregator {
    ips: FrequencyTable,
    urls: FrequencyTable,
    stats: ScanStats,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fold(&mut self, record: &Record) {
        self.ips.increment(&record.remote_host);
        self.urls.increment(&record.url);
        self.stats.matched += 1;
    }

    /// Decode `line` and fold it in, or count it as skipped.
    pub fn fold_line(&mut self, pattern: &Pattern, line: &str) {
        self.stats.lines += 1;
        match decode(pattern, line) {
            Some(record) => self.fold(&record),
            None => {
                self.stats.skipped += 1;
                debug!(line_no = self.stats.lines, line, "skipping line that does not match pattern");
            }
        }
    }

    pub fn ips(&self) -> &FrequencyTable {
        &self.ips
    }

    pub fn urls(&self) -> &FrequencyTable {
        &self.urls
    }

    /// Reduce both tables to the requested rankings.
    pub fn finish(
        self,
        top_ips: usize,
        top_urls: usize,
        policy: RankPolicy,
    ) -> Result<Analytics, AnalyzerError> {
        Ok(Analytics {
            unique_ips: self.ips.len(),
            most_active_ips: self.ips.top(top_ips, policy, Dimension::Ips)?,
            most_visited_urls: self.urls.top(top_urls, policy, Dimension::Urls)?,
            stats: self.stats,
        })
    }
}

/// Validated analyzer: a pattern plus ranking settings.
#[derive(Debug, Clone)]
pub struct LogAnalyzer {
    pattern: Pattern,
    top_ips: usize,
    top_urls: usize,
    rank_policy: RankPolicy,
}

impl LogAnalyzer {
    /// Build an analyzer. Both the config and its pattern are required;
    /// any ranking counts, including 0, are accepted.
    pub fn new(config: Option<AnalyzerConfig>) -> Result<Self, AnalyzerError> {
        let config = config.ok_or(AnalyzerError::ConfigRequired)?;
        let pattern = config.pattern.ok_or(AnalyzerError::PatternRequired)?;

        Ok(Self {
            pattern,
            top_ips: config.top_ips,
            top_urls: config.top_urls,
            rank_policy: config.rank_policy,
        })
    }

    /// Analyze the log file at `path` in a single streaming pass.
    pub fn analyze(&self, path: impl AsRef<Path>) -> Result<Analytics, AnalyzerError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| AnalyzerError::SourceUnavailable {
            path: path.to_path_buf(),
            source,
        })?;

        let analytics = self
            .scan(BufReader::new(file))
            .map_err(|source| AnalyzerError::SourceUnavailable {
                path: path.to_path_buf(),
                source,
            })?
            .finish(self.top_ips, self.top_urls, self.rank_policy)?;

        info!(
            path = %path.display(),
            lines = analytics.stats.lines,
            skipped = analytics.stats.skipped,
            unique_ips = analytics.unique_ips,
            "analyzed access log"
        );
        Ok(analytics)
    }

    /// Analyze an already-open source.
    pub fn analyze_reader<R: BufRead>(&self, reader: R) -> Result<Analytics, AnalyzerError> {
        self.scan(reader)
            .map_err(|source| AnalyzerError::SourceUnavailable {
                path: "<reader>".into(),
                source,
            })?
            .finish(self.top_ips, self.top_urls, self.rank_policy)
    }

    fn scan<R: BufRead>(&self, reader: R) -> std::io::Result<Aggregator> {
        let mut agg = Aggregator::new();
        for line in LogLines::new(reader) {
            agg.fold_line(&self.pattern, &line?);
        }
        Ok(agg)
    }
}
