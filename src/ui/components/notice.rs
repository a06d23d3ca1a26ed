//! One-line notice banner shown above the panel.

use crate::ui::helpers::{fit, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::NoticeInfo;

pub fn render_notice(out: &mut String, row: usize, notice: &NoticeInfo, theme: &Theme, cols: usize) -> usize {
    let (color, mark) = if notice.is_error {
        (&theme.colors.notice_error_fg, '✗')
    } else {
        (&theme.colors.notice_info_fg, '✓')
    };

    position_cursor(out, row, 1);
    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(color));
    out.push_str(&fit(&format!(" {mark} {}", notice.text), cols));
    out.push_str(Theme::reset());
    row + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_and_info_marks() {
        let theme = Theme::default();
        let mut out = String::new();
        render_notice(&mut out, 4, &NoticeInfo { text: "Stok tidak mencukupi!".into(), is_error: true }, &theme, 40);
        assert!(out.contains("✗ Stok tidak mencukupi!"));
        assert!(out.contains(&Theme::fg(&theme.colors.notice_error_fg)));

        out.clear();
        render_notice(&mut out, 4, &NoticeInfo { text: "Tersimpan".into(), is_error: false }, &theme, 40);
        assert!(out.contains("✓ Tersimpan"));
    }
}
