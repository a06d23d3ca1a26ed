//! Upper panel: movement form, material form or delete confirmation.

use crate::app::modes::EntryField;
use crate::domain::Movement;
use crate::ui::helpers::{fit, position_cursor, width_of};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{ConfirmPanel, FormFieldInfo, MaterialFormPanel, MovementPanel, Panel};

const LABEL_WIDTH: usize = 14;

/// Writes the panel. Returns the row after it, `row + panel.height()`.
pub fn render_panel(out: &mut String, row: usize, panel: &Panel, theme: &Theme, cols: usize) -> usize {
    match panel {
        Panel::Movement(movement) => render_movement(out, row, movement, theme, cols),
        Panel::MaterialForm(form) => render_material_form(out, row, form, theme, cols),
        Panel::ConfirmDelete(confirm) => render_confirm(out, row, confirm, theme, cols),
    }
}

fn render_title(out: &mut String, row: usize, title: &str, color: &str, cols: usize) -> usize {
    position_cursor(out, row, 1);
    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(color));
    out.push_str(&fit(&format!(" {title}"), cols));
    out.push_str(Theme::reset());
    row + 1
}

/// Writes `label : value`. A focused value gets the focus color and a caret.
#[allow(clippy::too_many_arguments)]
fn render_field(
    out: &mut String,
    row: usize,
    label: &str,
    value: &str,
    is_focused: bool,
    hint: Option<&str>,
    theme: &Theme,
    cols: usize,
) -> usize {
    position_cursor(out, row, 1);
    let label = format!("  {} : ", fit(label, LABEL_WIDTH - 2));
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    out.push_str(&label);

    let caret = if is_focused { "▏" } else { "" };
    let color = if is_focused { &theme.colors.input_focus } else { &theme.colors.text_normal };
    let mut used = width_of(&label);

    out.push_str(&Theme::fg(color));
    if is_focused {
        out.push_str(Theme::bold());
    }
    let room = cols.saturating_sub(used + width_of(caret));
    let value = fit(value, width_of(value).min(room));
    out.push_str(&value);
    out.push_str(caret);
    out.push_str(Theme::reset());
    used += width_of(&value) + width_of(caret);

    if let Some(hint) = hint {
        let hint = format!("  {hint}");
        let hint = fit(&hint, width_of(&hint).min(cols.saturating_sub(used)));
        out.push_str(&Theme::fg(&theme.colors.text_dim));
        out.push_str(&hint);
        used += width_of(&hint);
    }

    out.push_str(&" ".repeat(cols.saturating_sub(used)));
    out.push_str(Theme::reset());
    row + 1
}

fn render_movement(out: &mut String, row: usize, panel: &MovementPanel, theme: &Theme, cols: usize) -> usize {
    let mut row = render_title(out, row, "Transaksi Stok", &theme.colors.header_fg, cols);

    let focused = |field| panel.focus == Some(field);
    row = render_field(out, row, "Barang", &panel.query, focused(EntryField::Search), None, theme, cols);

    let selected = panel.selected_item.as_deref().unwrap_or("-");
    row = render_field(out, row, "Dipilih", selected, false, None, theme, cols);

    row = render_field(out, row, "Jumlah", &panel.quantity, focused(EntryField::Quantity), None, theme, cols);

    render_direction(out, row, panel.action, theme, cols)
}

fn render_direction(out: &mut String, row: usize, action: Movement, theme: &Theme, cols: usize) -> usize {
    position_cursor(out, row, 1);
    let label = format!("  {} : ", fit("Aksi", LABEL_WIDTH - 2));
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    out.push_str(&label);
    let mut used = width_of(&label);

    for (direction, color) in [
        (Movement::In, &theme.colors.movement_in_fg),
        (Movement::Out, &theme.colors.movement_out_fg),
    ] {
        let chosen = direction == action;
        let option = format!("{} {}   ", if chosen { '●' } else { '○' }, direction.label());
        let option = fit(&option, width_of(&option).min(cols.saturating_sub(used)));

        if chosen {
            out.push_str(Theme::bold());
            out.push_str(&Theme::fg(color));
        } else {
            out.push_str(Theme::reset());
            out.push_str(&Theme::fg(&theme.colors.text_dim));
        }
        out.push_str(&option);
        used += width_of(&option);
    }

    out.push_str(Theme::reset());
    out.push_str(&" ".repeat(cols.saturating_sub(used)));
    row + 1
}

fn render_material_form(out: &mut String, row: usize, form: &MaterialFormPanel, theme: &Theme, cols: usize) -> usize {
    let mut row = render_title(out, row, &form.title, &theme.colors.header_fg, cols);
    for FormFieldInfo { label, value, is_focused, hint } in &form.fields {
        row = render_field(out, row, label, value, *is_focused, *hint, theme, cols);
    }
    row
}

fn render_confirm(out: &mut String, row: usize, confirm: &ConfirmPanel, theme: &Theme, cols: usize) -> usize {
    let row = render_title(out, row, "Hapus Material", &theme.colors.notice_error_fg, cols);

    position_cursor(out, row, 1);
    out.push_str(&Theme::fg(&theme.colors.text_normal));
    out.push_str(&fit(&format!("  {}  (y/n)", confirm.message), cols));
    out.push_str(Theme::reset());
    row + 1
}
