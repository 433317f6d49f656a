//! Analyzer configuration file (JSON).
//!
//! JSON shape, every field optional:
//! {
//!   "pattern": "^(?<ip>\\S+) ...",   // regex with named groups; default: combined log
//!   "top_ips": 4,                     // most active client addresses to report
//!   "top_urls": 3,                    // most visited urls to report
//!   "rank_policy": "strict"           // or "clamp"
//! }
//!
//! The file is only read by the command-line front end; the library takes an
//! `AnalyzerConfig` built in memory.

use crate::log::Pattern;
use crate::model::{AnalyzerConfig, RankPolicy};
use anyhow::Context;
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const DEFAULT_TOP_IPS: usize = 4;
pub const DEFAULT_TOP_URLS: usize = 3;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawConfig {
    #[serde(default)]
    pub pattern: Option<String>,

    #[serde(default)]
    pub top_ips: Option<usize>,

    #[serde(default)]
    pub top_urls: Option<usize>,

    #[serde(default)]
    pub rank_policy: Option<RankPolicy>,
}

impl RawConfig {
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("read config file {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("parse config file {}", path.display()))
    }

    /// Compile the pattern and fill in defaults.
    pub fn build(self) -> anyhow::Result<AnalyzerConfig> {
        let pattern = match self.pattern {
            Some(src) => Pattern::new(&src).with_context(|| format!("compile pattern {:?}", src))?,
            None => Pattern::combined(),
        };

        Ok(AnalyzerConfig {
            pattern: Some(pattern),
            top_ips: self.top_ips.unwrap_or(DEFAULT_TOP_IPS),
            top_urls: self.top_urls.unwrap_or(DEFAULT_TOP_URLS),
            rank_policy: self.rank_policy.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn empty_config_uses_defaults() {
        let config = RawConfig::default().build().unwrap();
        assert_eq!(config.top_ips, DEFAULT_TOP_IPS);
        assert_eq!(config.top_urls, DEFAULT_TOP_URLS);
        assert_eq!(config.rank_policy, RankPolicy::Strict);
        assert_eq!(
            config.pattern.unwrap().as_str(),
            Pattern::combined().as_str()
        );
    }

    #[test]
    fn loads_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"pattern": "^(?<ip>\\S+) (?<url>\\S+)$", "top_ips": 1, "top_urls": 0, "rank_policy": "clamp"}}"#
        )
        .unwrap();

        let config = RawConfig::load(file.path()).unwrap().build().unwrap();
        assert_eq!(config.top_ips, 1);
        assert_eq!(config.top_urls, 0);
        assert_eq!(config.rank_policy, RankPolicy::Clamp);
        assert_eq!(config.pattern.unwrap().as_str(), r"^(?<ip>\S+) (?<url>\S+)$");
    }

    #[test]
    fn rejects_unknown_fields() {
        let err = serde_json::from_str::<RawConfig>(r#"{"top_ip": 1}"#).unwrap_err();
        assert!(err.to_string().contains("unknown field"));
    }

    #[test]
    fn bad_pattern_is_reported() {
        let raw = RawConfig {
            pattern: Some(r"^(?<ip>\S+)$".to_string()),
            ..RawConfig::default()
        };
        let err = raw.build().unwrap_err();
        assert!(format!("{:#}", err).contains("`url`"));
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(RawConfig::load("/definitely/not/here.json").is_err());
    }
}
