//! Stock movement records.
//!
//! A [`Transaction`] is created once per successful movement submission and
//! never changes afterwards. It snapshots the material's display string, so
//! later renames or deletions don't rewrite history.

use chrono::{DateTime, Local, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of a stock movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Movement {
    /// Stock-in ("Barang Masuk").
    #[default]
    In,
    /// Stock-out ("Barang Keluar").
    Out,
}

impl Movement {
    /// Localized label used in the history table and the CSV export.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::In => "Barang Masuk",
            Self::Out => "Barang Keluar",
        }
    }

    /// The other direction.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::In => Self::Out,
            Self::Out => Self::In,
        }
    }
}

impl fmt::Display for Movement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Immutable record of a single stock movement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Session-unique id, issued by the transaction log.
    pub id: u64,
    /// Calendar date in Indonesian short form (`d/m/yyyy`).
    pub date: String,
    /// `"name - brand (code)"` of the material at recording time.
    pub item_name: String,
    pub quantity: u32,
    pub action: Movement,
    /// Unix timestamp (seconds) of creation.
    pub timestamp: i64,
}

impl Transaction {
    /// Creates a transaction stamped with `at`.
    #[must_use]
    pub fn new<Tz: TimeZone>(
        id: u64,
        item_name: String,
        quantity: u32,
        action: Movement,
        at: &DateTime<Tz>,
    ) -> Self
    where
        Tz::Offset: fmt::Display,
    {
        Self {
            id,
            date: local_date(at),
            item_name,
            quantity,
            action,
            timestamp: at.timestamp(),
        }
    }
}

/// Formats a date the way Indonesian locales print short dates: `19/10/2026`.
#[must_use]
pub fn local_date<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: fmt::Display,
{
    at.format("%-d/%-m/%Y").to_string()
}

/// Current local time, the clock every recorded movement is stamped with.
#[must_use]
pub fn now() -> DateTime<Local> {
    Local::now()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn jakarta(y: i32, m: u32, d: u32) -> DateTime<FixedOffset> {
        FixedOffset::east_opt(7 * 3600)
            .unwrap()
            .with_ymd_and_hms(y, m, d, 9, 30, 0)
            .unwrap()
    }

    #[test]
    fn test_local_date_has_no_leading_zeros() {
        assert_eq!(local_date(&jakarta(2026, 3, 5)), "5/3/2026");
        assert_eq!(local_date(&jakarta(2026, 10, 19)), "19/10/2026");
    }

    #[test]
    fn test_new_transaction_stamps_time() {
        let at = jakarta(2026, 10, 19);
        let tx = Transaction::new(1, "Pulpen - Pilot (PUL-001)".into(), 5, Movement::In, &at);
        assert_eq!(tx.date, "19/10/2026");
        assert_eq!(tx.timestamp, at.timestamp());
    }

    #[test]
    fn test_movement_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Movement::Out).unwrap(), "\"out\"");
        assert_eq!(Movement::In.toggled(), Movement::Out);
        assert_eq!(Movement::Out.label(), "Barang Keluar");
    }
}
