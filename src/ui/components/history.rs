//! Recent transactions, newest first.

use crate::domain::Movement;
use crate::ui::helpers::{fit, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{HistoryInfo, HistoryRow};

const DATE_WIDTH: usize = 11;
const QUANTITY_WIDTH: usize = 8;
const ACTION_WIDTH: usize = 14;

fn item_width(cols: usize) -> usize {
    cols.saturating_sub(1 + DATE_WIDTH + QUANTITY_WIDTH + ACTION_WIDTH).max(12)
}

/// Writes section title, column headers and rows. Returns the next row.
pub fn render_history(out: &mut String, row: usize, history: &HistoryInfo, theme: &Theme, cols: usize) -> usize {
    position_cursor(out, row, 1);
    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&theme.colors.header_fg));
    out.push_str(&fit(" Riwayat Transaksi Terbaru", cols));
    out.push_str(Theme::reset());

    position_cursor(out, row + 1, 1);
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    let headers = format!(
        " {}{}{:>w$}  {}",
        fit("TANGGAL", DATE_WIDTH),
        fit("NAMA BARANG", item_width(cols)),
        "JUMLAH",
        "AKSI",
        w = QUANTITY_WIDTH - 2,
    );
    out.push_str(&fit(&headers, cols));
    out.push_str(Theme::reset());
    let row = row + 2;

    if let Some(message) = &history.empty_message {
        position_cursor(out, row, 1);
        out.push_str(&Theme::fg(&theme.colors.empty_state_fg));
        out.push_str(&fit(&format!(" {message}"), cols));
        out.push_str(Theme::reset());
        return row + 1;
    }

    history.rows.iter().fold(row, |row, entry| render_row(out, row, entry, theme, cols))
}

fn render_row(out: &mut String, row: usize, entry: &HistoryRow, theme: &Theme, cols: usize) -> usize {
    position_cursor(out, row, 1);
    out.push_str(&Theme::fg(&theme.colors.text_normal));
    out.push_str(&format!(
        " {}{}{:>w$}  ",
        fit(&entry.date, DATE_WIDTH),
        fit(&entry.item_name, item_width(cols)),
        entry.quantity,
        w = QUANTITY_WIDTH - 2,
    ));

    let color = match entry.action {
        Movement::In => &theme.colors.movement_in_fg,
        Movement::Out => &theme.colors.movement_out_fg,
    };
    out.push_str(&Theme::fg(color));
    out.push_str(&fit(entry.action.label(), ACTION_WIDTH));

    let used = 1 + DATE_WIDTH + item_width(cols) + QUANTITY_WIDTH + ACTION_WIDTH;
    out.push_str(&" ".repeat(cols.saturating_sub(used)));
    out.push_str(Theme::reset());
    row + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_show_action_labels() {
        let history = HistoryInfo {
            rows: vec![HistoryRow {
                date: "19/10/2026".into(),
                item_name: "Penggaris - Butterfly (RUL-001)".into(),
                quantity: 5,
                action: Movement::Out,
            }],
            empty_message: None,
        };
        let theme = Theme::default();
        let mut out = String::new();

        assert_eq!(render_history(&mut out, 20, &history, &theme, 80), 23);
        assert!(out.contains("19/10/2026"));
        assert!(out.contains("Penggaris - Butterfly (RUL-001)"));
        assert!(out.contains(&format!("{}Barang Keluar", Theme::fg(&theme.colors.movement_out_fg))));
    }

    #[test]
    fn test_empty_history_message() {
        let history = HistoryInfo {
            rows: vec![],
            empty_message: Some("Belum ada transaksi".into()),
        };
        let mut out = String::new();
        assert_eq!(render_history(&mut out, 1, &history, &Theme::default(), 80), 4);
        assert!(out.contains("Belum ada transaksi"));
    }
}
