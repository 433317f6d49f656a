//! Line pattern: a compiled regex plus the names of the fields it captures.
//!
//! Fields are bound by capture-group *name*, so a pattern may reorder or
//! omit optional groups without breaking the decoder. Only `ip` and `url`
//! are mandatory since both are aggregated.

use regex::{Captures, Regex};
use std::fmt;

/// Names of the capture groups the decoder understands.
pub mod group {
    pub const IP: &str = "ip";
    pub const TIME: &str = "time";
    pub const METHOD: &str = "method";
    pub const URL: &str = "url";
    pub const PROTOCOL: &str = "protocol";
    pub const ALT_URL: &str = "alt_url";
    pub const STATUS: &str = "status";
    pub const BYTES: &str = "bytes";
    pub const REFERRER: &str = "referrer";
    pub const USER_AGENT: &str = "user_agent";

    pub const REQUIRED: [&str; 2] = [IP, URL];
}

/// Combined log format, tolerating a request line without a protocol token.
///
/// Example:
/// 177.71.128.21 - - [10/Jul/2018:22:21:28 +0200] "GET /intranet-analytics/ HTTP/1.1" 200 3574 "-" "Mozilla/5.0"
const COMBINED: &str = concat!(
    r#"^(?<ip>\S+)\s"#,                             // client address
    r#"\S+\s+"#,                                    // remote logname
    r#"(?:\S+\s+)+"#,                               // remote user
    r#"\[(?<time>[^\]]+)\]\s"#,                     // timestamp
    r#""(?<method>\S*)\s?"#,                        // method
    r#"(?:(?<url>(?:[^"]*(?:\\")?)*)\s"#,           // url
    r#"(?<protocol>[^"]*)"\s|"#,                    // protocol
    r#"(?<alt_url>(?:[^"]*(?:\\")?)*)"\s)"#,        // or a url with no protocol
    r#"(?<status>\S+)\s"#,                          // status code
    r#"(?<bytes>\S+)\s"#,                           // bytes
    r#""(?<referrer>(?:[^"]*(?:\\")?)*)"\s"#,       // referrer
    r#""(?<user_agent>.*)"$"#,                      // user agent
);

#[derive(Debug, thiserror::Error)]
pub enum PatternError {
    #[error("invalid line pattern")]
    Regex(#[from] regex::Error),

    #[error("line pattern has no `{0}` capture group")]
    MissingGroup(&'static str),
}

/// Immutable line pattern shared by every decode of one analysis run.
#[derive(Clone)]
pub struct Pattern {
    re: Regex,
}

impl Pattern {
    /// Compile `source` and check that the mandatory groups are present.
    pub fn new(source: &str) -> Result<Self, PatternError> {
        let re = Regex::new(source)?;
        Self::from_regex(re)
    }

    pub fn from_regex(re: Regex) -> Result<Self, PatternError> {
        for name in group::REQUIRED {
            if !re.capture_names().flatten().any(|n| n == name) {
                return Err(PatternError::MissingGroup(name));
            }
        }
        Ok(Self { re })
    }

    /// The built-in combined log pattern.
    pub fn combined() -> Self {
        Self::new(COMBINED).expect("built-in combined pattern is valid")
    }

    pub fn as_str(&self) -> &str {
        self.re.as_str()
    }

    pub(crate) fn captures<'h>(&self, line: &'h str) -> Option<Captures<'h>> {
        self.re.captures(line)
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Pattern").field(&self.re.as_str()).finish()
    }
}
