//! Low-level text helpers shared by the components.
//!
//! Components write into a frame `String` instead of printing directly, so a
//! whole frame can be inspected in tests and printed in one go. All widths are
//! counted in characters, not bytes: labels carry Indonesian text and arrows.

use crate::ui::theme::Theme;
use std::fmt::Write;

/// Moves the cursor to a 1-indexed `row`/`col`.
pub fn position_cursor(out: &mut String, row: usize, col: usize) {
    let _ = write!(out, "\u{1b}[{row};{col}H");
}

/// Number of characters in `text`.
#[must_use]
pub fn width_of(text: &str) -> usize {
    text.chars().count()
}

/// Cuts `text` to at most `width` characters, ending in `…` when cut.
#[must_use]
pub fn truncate(text: &str, width: usize) -> String {
    if width_of(text) <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut cut: String = text.chars().take(width - 1).collect();
    cut.push('…');
    cut
}

/// `text` truncated or right-padded to exactly `width` characters.
#[must_use]
pub fn fit(text: &str, width: usize) -> String {
    let cut = truncate(text, width);
    let pad = width.saturating_sub(width_of(&cut));
    format!("{cut}{}", " ".repeat(pad))
}

/// Writes `text` with the character ranges in `ranges` highlighted.
///
/// Ranges are `(start, end)` character indices, end exclusive, sorted and
/// non-overlapping. Selected rows skip highlighting so the selection
/// background stays intact.
pub fn render_highlighted_text(
    out: &mut String,
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    is_selected: bool,
) {
    if ranges.is_empty() || is_selected {
        out.push_str(text);
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len()).max(pos);
        let end = end.min(chars.len());
        if start >= end {
            continue;
        }

        out.extend(&chars[pos..start]);
        out.push_str(&Theme::fg(&theme.colors.match_highlight_fg));
        out.push_str(&Theme::bg(&theme.colors.match_highlight_bg));
        out.extend(&chars[start..end]);
        out.push_str(Theme::reset());
        out.push_str(&Theme::fg(&theme.colors.text_normal));
        pos = end;
    }

    out.extend(&chars[pos..]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_pads_and_truncates_by_chars() {
        assert_eq!(fit("Pulpen", 8), "Pulpen  ");
        assert_eq!(fit("Kertas HVS A4", 8), "Kertas …");
        assert_eq!(fit("←/→", 3), "←/→");
        assert_eq!(truncate("abc", 0), "");
    }

    #[test]
    fn test_position_cursor() {
        let mut out = String::new();
        position_cursor(&mut out, 5, 1);
        assert_eq!(out, "\u{1b}[5;1H");
    }

    #[test]
    fn test_highlight_wraps_match_only() {
        let theme = Theme::default();
        let mut out = String::new();
        render_highlighted_text(&mut out, "Pulpen - Pilot", &[(0, 3)], &theme, false);

        let expected_prefix = format!(
            "{}{}Pul{}",
            Theme::fg(&theme.colors.match_highlight_fg),
            Theme::bg(&theme.colors.match_highlight_bg),
            Theme::reset()
        );
        assert!(out.starts_with(&expected_prefix));
        assert!(out.ends_with("pen - Pilot"));
    }

    #[test]
    fn test_selected_text_is_plain() {
        let mut out = String::new();
        render_highlighted_text(&mut out, "Penghapus", &[(0, 3)], &Theme::default(), true);
        assert_eq!(out, "Penghapus");
    }

    #[test]
    fn test_out_of_range_highlight_is_clamped() {
        let mut out = String::new();
        render_highlighted_text(&mut out, "Map", &[(1, 10)], &Theme::default(), false);
        assert!(out.starts_with('M'));
        assert!(out.contains("ap"));
    }
}
