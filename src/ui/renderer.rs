//! Top-level rendering entry point.

use crate::app::AppState;
use crate::ui::components;

/// Renders the plugin pane to stdout.
///
/// The whole frame is built first and printed once, so Zellij never shows a
/// half-drawn pane.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    print!("{}", render_to_string(state, rows, cols));
}

/// The frame [`render`] would print.
///
/// ```
/// use stok::app::AppState;
/// use stok::inventory::Inventory;
/// use stok::ui::{render_to_string, Theme};
///
/// let state = AppState::new(Inventory::seeded(), Theme::default());
/// let frame = render_to_string(&state, 30, 100);
/// assert!(frame.contains("Stok Saat Ini (10 material)"));
/// ```
#[must_use]
pub fn render_to_string(state: &AppState, rows: usize, cols: usize) -> String {
    let viewmodel = state.compute_viewmodel(rows, cols);
    components::render_frame(&viewmodel, &state.theme, rows, cols)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{handle_event, Event};
    use crate::inventory::Inventory;
    use crate::ui::Theme;

    fn cursor_rows(frame: &str) -> Vec<usize> {
        frame
            .split("\u{1b}[")
            .filter_map(|chunk| chunk.split_once(";1H"))
            .filter_map(|(row, _)| row.parse().ok())
            .collect()
    }

    #[test]
    fn test_browse_frame_fits_pane() {
        let state = AppState::new(Inventory::seeded(), Theme::default());
        let frame = render_to_string(&state, 30, 100);

        assert!(frame.contains("Stok Barang Kantor"));
        assert!(frame.contains("Transaksi Stok"));
        assert!(frame.contains("PEN-001"));
        assert!(frame.contains("Belum ada transaksi"));
        assert!(cursor_rows(&frame).iter().all(|&row| (1..=30).contains(&row)));
        assert_eq!(cursor_rows(&frame).last(), Some(&30));
    }

    #[test]
    fn test_search_frame_fits_pane() {
        let mut state = AppState::new(Inventory::seeded(), Theme::default());
        handle_event(&mut state, &Event::FocusSearch).unwrap();
        for c in "pen".chars() {
            handle_event(&mut state, &Event::Char(c)).unwrap();
        }
        let frame = render_to_string(&state, 30, 100);
        assert!(frame.contains("Pensil 2B - Faber Castell"));

        let mut rows = cursor_rows(&frame);
        let footer = rows.pop();
        assert_eq!(footer, Some(30));
        assert!(rows.iter().all(|&row| row < 30));

        let mut distinct = rows.clone();
        distinct.sort_unstable();
        distinct.dedup();
        assert_eq!(distinct.len(), rows.len());
    }

    #[test]
    fn test_empty_catalog_frame() {
        let state = AppState::new(Inventory::empty(), Theme::default());
        let frame = render_to_string(&state, 24, 80);
        assert!(frame.contains("Belum ada material"));
        assert!(frame.contains("Stok Saat Ini (0 material)"));
    }
}
