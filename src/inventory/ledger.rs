//! Transaction log: every recorded stock movement, newest first.

use crate::domain::{Movement, Transaction};
use chrono::{DateTime, TimeZone};
use std::fmt::Display;

/// Number of entries the history panel shows.
pub const RECENT_LIMIT: usize = 10;

/// Append-only log of transactions.
///
/// Entries are stored oldest first and exposed newest first, which is the
/// order both the history panel and the CSV export use.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionLog {
    entries: Vec<Transaction>,
    last_id: u64,
}

impl TransactionLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a movement at the head of the log and returns it.
    pub fn record<Tz: TimeZone>(
        &mut self,
        item_name: String,
        quantity: u32,
        action: Movement,
        at: &DateTime<Tz>,
    ) -> &Transaction
    where
        Tz::Offset: Display,
    {
        let id = self.issue_id(at);
        self.entries.push(Transaction::new(id, item_name, quantity, action, at));
        &self.entries[self.entries.len() - 1]
    }

    /// All transactions, newest first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Transaction> + ExactSizeIterator {
        self.entries.iter().rev()
    }

    /// The `limit` most recent transactions, newest first.
    pub fn recent(&self, limit: usize) -> impl Iterator<Item = &Transaction> {
        self.iter().take(limit)
    }

    /// Most recent transaction.
    #[must_use]
    pub fn latest(&self) -> Option<&Transaction> {
        self.entries.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Millisecond timestamp, bumped past the previous id on collision.
    fn issue_id<Tz: TimeZone>(&mut self, at: &DateTime<Tz>) -> u64 {
        let millis = u64::try_from(at.timestamp_millis()).unwrap_or(0);
        self.last_id = millis.max(self.last_id.saturating_add(1));
        self.last_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_record_prepends() {
        let mut log = TransactionLog::new();
        let at = Utc::now();
        log.record("A".into(), 1, Movement::In, &at);
        log.record("B".into(), 2, Movement::Out, &at);

        let names: Vec<&str> = log.iter().map(|t| t.item_name.as_str()).collect();
        assert_eq!(names, vec!["B", "A"]);
        assert_eq!(log.latest().map(|t| t.quantity), Some(2));
    }

    #[test]
    fn test_ids_unique_within_same_instant() {
        let mut log = TransactionLog::new();
        let at = Utc::now();
        let first = log.record("A".into(), 1, Movement::In, &at).id;
        let second = log.record("A".into(), 1, Movement::In, &at).id;
        assert!(second > first);
    }

    #[test]
    fn test_recent_is_a_view_not_a_limit() {
        let mut log = TransactionLog::new();
        let at = Utc::now();
        for i in 0..15 {
            log.record(format!("item {i}"), 1, Movement::In, &at);
        }
        let recent: Vec<&str> = log.recent(RECENT_LIMIT).map(|t| t.item_name.as_str()).collect();
        assert_eq!(recent.len(), 10);
        assert_eq!(recent[0], "item 14");
        assert_eq!(recent[9], "item 5");
        assert_eq!(log.len(), 15);
    }
}
