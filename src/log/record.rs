use chrono::{DateTime, FixedOffset};

/// One decoded access-log line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub remote_host: String,
    /// None when the timestamp field does not follow `%d/%b/%Y:%H:%M:%S %z`.
    pub time: Option<DateTime<FixedOffset>>,
    /// `method url protocol`, joined with single spaces.
    pub request: String,
    pub status: i64,
    pub bytes: i64,
    pub referrer: String,
    pub user_agent: String,
    /// Primary url, or the protocol-less fallback when the primary is empty.
    pub url: String,
}
