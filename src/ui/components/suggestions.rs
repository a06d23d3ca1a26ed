//! Autocomplete dropdown under the movement panel.

use crate::ui::helpers::{self, fit, position_cursor, truncate, width_of};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{SuggestionItem, SuggestionList};

const INDENT: &str = "    ";

/// Writes the dropdown. Returns `row + list.height()`.
pub fn render_suggestions(out: &mut String, row: usize, list: &SuggestionList, theme: &Theme, cols: usize) -> usize {
    if list.items.is_empty() {
        position_cursor(out, row, 1);
        out.push_str(&Theme::fg(&theme.colors.empty_state_fg));
        let message = list.empty_message.as_deref().unwrap_or_default();
        out.push_str(&fit(&format!("{INDENT}{message}"), cols));
        out.push_str(Theme::reset());
        return row + 1;
    }

    list.items
        .iter()
        .fold(row, |row, item| render_item(out, row, item, theme, cols))
}

/// `label  CODE · stok N`, highlighted where the label matched the query.
fn render_item(out: &mut String, row: usize, item: &SuggestionItem, theme: &Theme, cols: usize) -> usize {
    position_cursor(out, row, 1);

    if item.is_selected {
        out.push_str(&Theme::fg(&theme.colors.selection_fg));
        out.push_str(&Theme::bg(&theme.colors.selection_bg));
    } else {
        out.push_str(&Theme::fg(&theme.colors.text_normal));
    }

    let detail = format!("  {} · stok {}", item.code, item.stock);
    let room = cols.saturating_sub(width_of(INDENT) + width_of(&detail));
    let label = truncate(&item.label, room);

    out.push_str(INDENT);
    helpers::render_highlighted_text(out, &label, &item.highlight_ranges, theme, item.is_selected);

    if !item.is_selected {
        out.push_str(&Theme::fg(&theme.colors.text_dim));
    }
    let used = width_of(INDENT) + width_of(&label);
    out.push_str(&fit(&detail, cols.saturating_sub(used)));
    out.push_str(Theme::reset());
    row + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(label: &str, code: &str, selected: bool) -> SuggestionItem {
        SuggestionItem {
            label: label.into(),
            code: code.into(),
            stock: 25,
            is_selected: selected,
            highlight_ranges: vec![(0, 3)],
        }
    }

    #[test]
    fn test_one_row_per_item() {
        let list = SuggestionList {
            items: vec![item("Pulpen - Pilot", "PUL-001", true), item("Pulpen - Zebra", "PUL-002", false)],
            empty_message: None,
        };
        let mut out = String::new();
        let next = render_suggestions(&mut out, 9, &list, &Theme::default(), 60);

        assert_eq!(next, 9 + list.height());
        assert!(out.contains("Pulpen - Pilot  PUL-001 · stok 25"));
        assert!(out.contains("PUL-002 · stok 25"));
    }

    #[test]
    fn test_empty_message() {
        let list = SuggestionList {
            items: vec![],
            empty_message: Some("Barang tidak ditemukan".into()),
        };
        let mut out = String::new();
        assert_eq!(render_suggestions(&mut out, 9, &list, &Theme::default(), 40), 10);
        assert!(out.contains("Barang tidak ditemukan"));
    }
}
