//! View model types representing renderable UI state.
//!
//! View models are computed from application state by
//! `AppState::compute_viewmodel()` and consumed by the renderer. They contain
//! no business logic, only display-ready data, so layout decisions (which
//! panel is visible, which table rows fit) can be tested without a terminal.

use crate::app::modes::EntryField;
use crate::domain::Movement;

/// Complete UI view model for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    /// Title bar.
    pub header: HeaderInfo,

    /// Blocking notice, shown until the next key press.
    pub notice: Option<NoticeInfo>,

    /// The form or dialog in the upper half of the pane.
    pub panel: Panel,

    /// Autocomplete dropdown, present while suggesting for a non-empty query.
    pub suggestions: Option<SuggestionList>,

    /// Current stock, windowed around the catalog cursor.
    pub stock: StockTable,

    /// Most recent transactions.
    pub history: HistoryInfo,

    /// Keybinding hints.
    pub footer: FooterInfo,
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    /// Title text to display in the header.
    pub title: String,
}

/// A notice banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoticeInfo {
    pub text: String,
    /// Errors and confirmations use different colors.
    pub is_error: bool,
}

/// Upper panel contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Panel {
    /// The stock movement form.
    Movement(MovementPanel),
    /// The add/edit material form.
    MaterialForm(MaterialFormPanel),
    /// Delete confirmation dialog.
    ConfirmDelete(ConfirmPanel),
}

impl Panel {
    /// Number of terminal rows the panel occupies.
    #[must_use]
    pub fn height(&self) -> usize {
        match self {
            Self::Movement(_) => 5,
            Self::MaterialForm(form) => form.fields.len() + 1,
            Self::ConfirmDelete(_) => 2,
        }
    }
}

/// Movement form fields as displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovementPanel {
    /// Search field text.
    pub query: String,
    /// Display name of the bound material, if it still exists.
    pub selected_item: Option<String>,
    pub quantity: String,
    pub action: Movement,
    /// Focused field, `None` in browse mode.
    pub focus: Option<EntryField>,
}

/// Material form as displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterialFormPanel {
    /// "Tambah Material Baru" or "Edit Material PUL-001".
    pub title: String,
    pub fields: Vec<FormFieldInfo>,
}

/// One labelled input of the material form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormFieldInfo {
    pub label: &'static str,
    pub value: String,
    pub is_focused: bool,
    /// Extra hint rendered after the value (category cycling).
    pub hint: Option<&'static str>,
}

/// Delete confirmation dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmPanel {
    pub message: String,
}

/// Autocomplete dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionList {
    pub items: Vec<SuggestionItem>,
    /// Shown instead of items when nothing matches.
    pub empty_message: Option<String>,
}

impl SuggestionList {
    /// Number of terminal rows the dropdown occupies.
    #[must_use]
    pub fn height(&self) -> usize {
        self.items.len().max(1)
    }
}

/// One suggestion row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionItem {
    /// `"name - brand"`.
    pub label: String,
    pub code: String,
    pub stock: u32,
    pub is_selected: bool,

    /// Character ranges of `label` matching the query.
    ///
    /// Each tuple is `(start_index, end_index)` in UTF-8 character indices.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Stock alert level of a material.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockLevel {
    Critical,
    Low,
    Healthy,
}

/// Visible window of the current-stock table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockTable {
    pub rows: Vec<StockRow>,
    /// Total materials in the catalog, for the section title.
    pub total: usize,
    /// Shown instead of rows when the catalog is empty.
    pub empty_message: Option<String>,
}

/// One row of the current-stock table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockRow {
    pub code: String,
    /// `"name - brand"`.
    pub label: String,
    pub category: String,
    pub stock: u32,
    pub level: StockLevel,
    pub is_selected: bool,
}

/// Recent transactions section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryInfo {
    pub rows: Vec<HistoryRow>,
    /// Shown instead of rows when nothing has been recorded.
    pub empty_message: Option<String>,
}

impl HistoryInfo {
    /// Number of terminal rows the section body occupies.
    #[must_use]
    pub fn height(&self) -> usize {
        self.rows.len().max(1)
    }
}

/// One row of the recent-transactions table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRow {
    pub date: String,
    pub item_name: String,
    pub quantity: u32,
    pub action: Movement,
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Keybinding help text (e.g., "/: cari  Tab: jumlah  q: tutup").
    pub keybindings: String,
}
