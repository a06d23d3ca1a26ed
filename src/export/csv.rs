//! CSV serialization of the transaction log.

use crate::domain::error::{Result, StokError};
use crate::inventory::TransactionLog;
use chrono::{DateTime, TimeZone};
use std::fmt::Display;

/// Header row of every export.
pub const HEADER: [&str; 4] = ["Tanggal", "Nama Barang", "Jumlah", "Aksi"];

/// Serializes the whole log, newest first, as RFC 4180 CSV with `\n` record
/// terminators.
///
/// Fields containing a comma, a quote or a line break are quoted and embedded
/// quotes are doubled.
///
/// # Errors
///
/// Returns [`StokError::Csv`] if a record cannot be written and
/// [`StokError::Export`] if the buffer is not valid UTF-8.
pub fn render(log: &TransactionLog) -> Result<String> {
    let mut writer = ::csv::WriterBuilder::new()
        .terminator(::csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(HEADER)?;
    for tx in log.iter() {
        let quantity = tx.quantity.to_string();
        writer.write_record([tx.date.as_str(), tx.item_name.as_str(), quantity.as_str(), tx.action.label()])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| StokError::Io(e.into_error()))?;

    tracing::debug!(rows = log.len(), bytes = bytes.len(), "rendered csv export");

    String::from_utf8(bytes).map_err(|e| StokError::Export(format!("export is not UTF-8: {e}")))
}

/// Export file name for the given day: `riwayat-stok-2026-10-19.csv`.
#[must_use]
pub fn file_name<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    format!("riwayat-stok-{}.csv", at.format("%Y-%m-%d"))
}
