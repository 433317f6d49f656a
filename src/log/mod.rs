//! Access-log line decoding: pattern, record, and the streaming line reader.

pub mod parse;
pub mod pattern;
pub mod record;

pub use parse::{LogLines, decode};
pub use pattern::{Pattern, PatternError};
pub use record::Record;
