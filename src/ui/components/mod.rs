//! Component renderers composing one frame.
//!
//! Every component takes the frame buffer, the row to start at and the pane
//! width, and returns the next free row. Layout top to bottom:
//!
//! ```text
//! [blank line]
//! [Header]
//! [Border]
//! [Notice]            only while a notice is pending
//! [Panel]             movement form, material form or delete dialog
//! [Suggestions]       only while the search field suggests
//! [Stock title + column headers + rows]
//! [History title + column headers + rows]
//! [Blank padding]
//! [Border]
//! [Footer]
//! ```
//!
//! The fixed rows here are what `CHROME_ROWS` in the app state accounts for.

mod footer;
mod header;
mod history;
mod notice;
mod panel;
mod stock;
mod suggestions;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use footer::render_footer;
use header::render_header;
use history::render_history;
use notice::render_notice;
use panel::render_panel;
use stock::render_stock_table;
use suggestions::render_suggestions;

fn render_border(out: &mut String, row: usize, color: &str, cols: usize) -> usize {
    position_cursor(out, row, 1);
    out.push_str(&Theme::fg(color));
    out.push_str(&"─".repeat(cols));
    out.push_str(Theme::reset());
    row + 1
}

/// Renders a complete frame for a `rows` x `cols` pane.
#[must_use]
pub fn render_frame(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) -> String {
    let mut out = String::new();
    let mut row = 2;

    row = render_header(&mut out, row, &vm.header, theme, cols);
    row = render_border(&mut out, row, &theme.colors.border, cols);

    if let Some(notice) = &vm.notice {
        row = render_notice(&mut out, row, notice, theme, cols);
    }

    row = render_panel(&mut out, row, &vm.panel, theme, cols);

    if let Some(suggestions) = &vm.suggestions {
        row = render_suggestions(&mut out, row, suggestions, theme, cols);
    }

    row = render_stock_table(&mut out, row, &vm.stock, theme, cols);
    let _ = render_history(&mut out, row, &vm.history, theme, cols);

    let footer_row = rows.max(2);
    render_border(&mut out, footer_row - 1, &theme.colors.border, cols);
    render_footer(&mut out, footer_row, &vm.footer, theme, cols);

    out
}
