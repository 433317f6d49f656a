//! Key -> occurrence counter with a deterministic top-N ranking.
//!
//! Keys remember the order they were first seen in. Ranking is a stable sort
//! by descending count over that order, so equal counts come out first-seen
//! first and repeated runs over the same input rank identically.

use crate::error::{AnalyzerError, Dimension};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// What to do when more top entries are requested than distinct keys exist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RankPolicy {
    /// Fail with `AnalyzerError::RankOutOfRange`.
    #[default]
    Strict,
    /// Return every distinct key instead.
    Clamp,
}

#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    slots: HashMap<String, usize>,
    entries: Vec<(String, u64)>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, key: &str) {
        match self.slots.get(key) {
            Some(&slot) => self.entries[slot].1 += 1,
            None => {
                self.slots.insert(key.to_string(), self.entries.len());
                self.entries.push((key.to_string(), 1));
            }
        }
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn count(&self, key: &str) -> u64 {
        self.slots.get(key).map_or(0, |&slot| self.entries[slot].1)
    }

    /// All (key, count) pairs, highest count first, ties in first-seen order.
    pub fn ranked(&self) -> Vec<(&str, u64)> {
        let mut ranked: Vec<(&str, u64)> = self
            .entries
            .iter()
            .map(|(key, count)| (key.as_str(), *count))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }

    /// The `n` most frequent keys.
    ///
    /// `n == 0` is always an empty list. Otherwise, when `n` exceeds the
    /// number of distinct keys, `Strict` fails and `Clamp` returns them all.
    pub fn top(
        &self,
        n: usize,
        policy: RankPolicy,
        dimension: Dimension,
    ) -> Result<Vec<String>, AnalyzerError> {
        if n == 0 {
            return Ok(Vec::new());
        }
        if n > self.len() && policy == RankPolicy::Strict {
            return Err(AnalyzerError::RankOutOfRange {
                dimension,
                requested: n,
                available: self.len(),
            });
        }

        Ok(self
            .ranked()
            .into_iter()
            .take(n)
            .map(|(key, _)| key.to_string())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn table(keys: &[&str]) -> FrequencyTable {
        let mut t = FrequencyTable::new();
        for key in keys {
            t.increment(key);
        }
        t
    }

    #[test]
    fn counts_occurrences() {
        let t = table(&["a", "b", "a", "c", "a", "b"]);
        assert_eq!(t.len(), 3);
        assert_eq!(t.count("a"), 3);
        assert_eq!(t.count("b"), 2);
        assert_eq!(t.count("c"), 1);
        assert_eq!(t.count("missing"), 0);
    }

    #[test]
    fn ranks_by_count_then_first_seen() {
        let t = table(&["x", "y", "z", "y", "z", "w"]);
        assert_eq!(t.ranked(), vec![("y", 2), ("z", 2), ("x", 1), ("w", 1)]);
    }

    #[test]
    fn top_takes_prefix_of_ranking() {
        let t = table(&["x", "y", "z", "y", "z", "z"]);
        let top = t.top(2, RankPolicy::Strict, Dimension::Urls).unwrap();
        assert_eq!(top, vec!["z", "y"]);
    }

    #[test]
    fn top_zero_is_empty_even_without_keys() {
        let t = FrequencyTable::new();
        assert!(t.is_empty());
        assert_eq!(t.top(0, RankPolicy::Strict, Dimension::Ips).unwrap(), Vec::<String>::new());
    }

    #[test]
    fn strict_rejects_more_than_available() {
        let t = table(&["a", "b"]);
        let err = t.top(3, RankPolicy::Strict, Dimension::Ips).unwrap_err();
        assert!(matches!(
            err,
            AnalyzerError::RankOutOfRange {
                dimension: Dimension::Ips,
                requested: 3,
                available: 2,
            }
        ));
    }

    #[test]
    fn clamp_returns_all_available() {
        let t = table(&["a", "b", "b"]);
        let top = t.top(5, RankPolicy::Clamp, Dimension::Urls).unwrap();
        assert_eq!(top, vec!["b", "a"]);
    }

    #[test]
    fn exact_length_is_not_out_of_range() {
        let t = table(&["a", "b"]);
        assert_eq!(t.top(2, RankPolicy::Strict, Dimension::Ips).unwrap().len(), 2);
    }

    #[test]
    fn policy_deserializes_lowercase() {
        let policy: RankPolicy = serde_json::from_str(r#""clamp""#).unwrap();
        assert_eq!(policy, RankPolicy::Clamp);
    }
}
