//! Current-stock table.
//!
//! Columns: code, `name - brand`, category, stock and an alert tag. The label
//! column takes whatever width the fixed columns leave.

use crate::ui::helpers::{fit, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{StockLevel, StockRow, StockTable};

const CODE_WIDTH: usize = 9;
const CATEGORY_WIDTH: usize = 13;
const STOCK_WIDTH: usize = 7;
const STATUS_WIDTH: usize = 9;
const MIN_LABEL_WIDTH: usize = 12;

fn label_width(cols: usize) -> usize {
    cols.saturating_sub(1 + CODE_WIDTH + CATEGORY_WIDTH + STOCK_WIDTH + STATUS_WIDTH)
        .max(MIN_LABEL_WIDTH)
}

const fn level_tag(level: StockLevel) -> &'static str {
    match level {
        StockLevel::Critical => "Kritis",
        StockLevel::Low => "Menipis",
        StockLevel::Healthy => "",
    }
}

fn level_color(level: StockLevel, theme: &Theme) -> &str {
    match level {
        StockLevel::Critical => &theme.colors.stock_critical_fg,
        StockLevel::Low => &theme.colors.stock_low_fg,
        StockLevel::Healthy => &theme.colors.stock_healthy_fg,
    }
}

/// Writes section title, column headers and rows. Returns the next row.
pub fn render_stock_table(out: &mut String, row: usize, table: &StockTable, theme: &Theme, cols: usize) -> usize {
    position_cursor(out, row, 1);
    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&theme.colors.header_fg));
    out.push_str(&fit(&format!(" Stok Saat Ini ({} material)", table.total), cols));
    out.push_str(Theme::reset());
    let mut row = row + 1;

    position_cursor(out, row, 1);
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    let headers = format!(
        " {}{}{}{:>w$} {}",
        fit("KODE", CODE_WIDTH),
        fit("NAMA BARANG", label_width(cols)),
        fit("KATEGORI", CATEGORY_WIDTH),
        "STOK",
        fit("", STATUS_WIDTH - 1),
        w = STOCK_WIDTH - 1,
    );
    out.push_str(&fit(&headers, cols));
    out.push_str(Theme::reset());
    row += 1;

    if let Some(message) = &table.empty_message {
        position_cursor(out, row, 1);
        out.push_str(&Theme::fg(&theme.colors.empty_state_fg));
        out.push_str(&fit(&format!(" {message}"), cols));
        out.push_str(Theme::reset());
        return row + 1;
    }

    table.rows.iter().fold(row, |row, stock_row| render_row(out, row, stock_row, theme, cols))
}

fn render_row(out: &mut String, row: usize, item: &StockRow, theme: &Theme, cols: usize) -> usize {
    position_cursor(out, row, 1);

    let text_color = if item.is_selected {
        out.push_str(&Theme::bg(&theme.colors.selection_bg));
        &theme.colors.selection_fg
    } else {
        &theme.colors.text_normal
    };

    out.push_str(&Theme::fg(text_color));
    let columns = format!(
        " {}{}{}",
        fit(&item.code, CODE_WIDTH),
        fit(&item.label, label_width(cols)),
        fit(&item.category, CATEGORY_WIDTH)
    );
    out.push_str(&columns);

    if !item.is_selected {
        out.push_str(&Theme::fg(level_color(item.level, theme)));
    }
    out.push_str(Theme::bold());
    out.push_str(&format!("{:>w$} ", item.stock, w = STOCK_WIDTH - 1));
    out.push_str(&fit(level_tag(item.level), STATUS_WIDTH - 1));

    let used = 1 + CODE_WIDTH + label_width(cols) + CATEGORY_WIDTH + STOCK_WIDTH + STATUS_WIDTH - 1;
    out.push_str(&" ".repeat(cols.saturating_sub(used)));
    out.push_str(Theme::reset());
    row + 1
}
