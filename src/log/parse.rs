use crate::log::pattern::{Pattern, group};
use crate::log::record::Record;
use chrono::DateTime;
use std::io::{self, BufRead};

/// Common log format timestamp, e.g. `10/Jul/2018:22:21:28 -0700`.
const TIME_LAYOUT: &str = "%d/%b/%Y:%H:%M:%S %z";

/// Decode one line (terminator already stripped) into a record.
///
/// Returns None when the pattern does not match; callers skip such lines.
/// Malformed sub-fields never reject a matched line: a bad timestamp becomes
/// None, and non-numeric status or byte counts become 0. Signed values
/// such as `-1` are kept as they are.
pub fn decode(pattern: &Pattern, line: &str) -> Option<Record> {
    let caps = pattern.captures(line)?;
    let field = |name: &str| caps.name(name).map_or("", |m| m.as_str());

    let url = field(group::URL);
    let alt_url = field(group::ALT_URL);
    let url = if url.is_empty() && !alt_url.is_empty() {
        alt_url
    } else {
        url
    };

    Some(Record {
        remote_host: field(group::IP).to_string(),
        time: DateTime::parse_from_str(field(group::TIME), TIME_LAYOUT).ok(),
        request: format!(
            "{} {} {}",
            field(group::METHOD),
            field(group::URL),
            field(group::PROTOCOL)
        ),
        status: field(group::STATUS).parse().unwrap_or(0),
        bytes: field(group::BYTES).parse().unwrap_or(0),
        referrer: field(group::REFERRER).to_string(),
        user_agent: field(group::USER_AGENT).to_string(),
        url: url.to_string(),
    })
}

/// Streams lines out of a reader without buffering the whole source.
///
/// Line terminators (`\n` or `\r\n`) are stripped. Invalid UTF-8 is replaced
/// rather than reported, so a corrupt line is handed to the decoder (and
/// usually skipped) instead of ending the scan.
pub struct LogLines<R> {
    reader: R,
    buf: Vec<u8>,
}

impl<R: BufRead> LogLines<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
        }
    }
}

impl<R: BufRead> Iterator for LogLines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => None,
            Ok(_) => {
                if self.buf.last() == Some(&b'\n') {
                    self.buf.pop();
                    if self.buf.last() == Some(&b'\r') {
                        self.buf.pop();
                    }
                }
                Some(Ok(String::from_utf8_lossy(&self.buf).into_owned()))
            }
            Err(e) => Some(Err(e)),
        }
    }
}
