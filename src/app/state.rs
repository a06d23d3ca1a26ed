//! Application state management and view model computation.
//!
//! [`AppState`] is the single source of truth for the pane: the inventory
//! session itself plus all transient UI state (forms, mode, cursor, notice).
//! It is mutated only by the event handler; view models are computed on
//! demand from a snapshot.

use super::forms::{MaterialField, MaterialForm, MovementForm};
use super::modes::{EntryField, Mode, Suggest};
use crate::domain::Material;
use crate::inventory::{Inventory, RECENT_LIMIT};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    ConfirmPanel, FooterInfo, FormFieldInfo, HeaderInfo, HistoryInfo, HistoryRow, MaterialFormPanel,
    MovementPanel, NoticeInfo, Panel, StockLevel, StockRow, StockTable, SuggestionItem, SuggestionList,
    UIViewModel,
};
use std::path::PathBuf;

/// Dropdown rows visible at once; longer match lists scroll with the cursor.
pub const SUGGESTION_ROWS: usize = 5;

/// Rows taken by fixed chrome: blank line, header, two borders, the stock and
/// history titles with their column headers, and the footer.
const CHROME_ROWS: usize = 9;

/// Stock rows kept visible before the history section is shortened.
const MIN_STOCK_ROWS: usize = 3;

/// Category presets offered by the material form.
pub const DEFAULT_CATEGORIES: [&str; 5] = ["Alat Tulis", "Kertas", "Alat Kantor", "Elektronik", "Lainnya"];

/// Severity of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// Blocking message shown until the next key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Info, text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Error, text: text.into() }
    }
}

/// Stock alert thresholds.
///
/// A stock strictly below `critical_below` is critical, strictly below
/// `low_below` is low, anything else is healthy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StockThresholds {
    /// Stock below this is critical.
    pub critical_below: u32,

    /// Stock below this is low. Never smaller than `critical_below` when
    /// built from configuration.
    pub low_below: u32,
}

impl Default for StockThresholds {
    fn default() -> Self {
        Self { critical_below: 10, low_below: 20 }
    }
}

impl StockThresholds {
    #[must_use]
    pub const fn level(&self, stock: u32) -> StockLevel {
        if stock < self.critical_below {
            StockLevel::Critical
        } else if stock < self.low_below {
            StockLevel::Low
        } else {
            StockLevel::Healthy
        }
    }
}

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Catalog and transaction log.
    pub inventory: Inventory,

    /// Current input handling mode.
    pub mode: Mode,

    /// Stock movement form buffers.
    pub movement: MovementForm,

    /// Add/edit material form buffers; meaningful in [`Mode::MaterialForm`].
    pub material_form: MaterialForm,

    /// Zero-based index of the highlighted catalog row.
    ///
    /// Clamped by `clamp_cursor()` whenever the catalog shrinks.
    pub cursor: usize,

    /// Pending notice. While set, the next key press only dismisses it.
    pub notice: Option<Notice>,

    /// Color scheme for UI rendering.
    pub theme: Theme,

    /// Limits for the stock badges.
    pub thresholds: StockThresholds,

    /// Category presets cycled in the material form.
    pub categories: Vec<String>,

    /// Directory CSV exports are written to.
    pub export_dir: PathBuf,
}

impl AppState {
    /// Creates application state around an inventory with default settings.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stok::app::AppState;
    /// use stok::inventory::Inventory;
    /// use stok::ui::Theme;
    ///
    /// let state = AppState::new(Inventory::seeded(), Theme::default());
    /// assert_eq!(state.cursor, 0);
    /// assert!(state.notice.is_none());
    /// ```
    #[must_use]
    pub fn new(inventory: Inventory, theme: Theme) -> Self {
        Self {
            inventory,
            mode: Mode::Browse,
            movement: MovementForm::default(),
            material_form: MaterialForm::default(),
            cursor: 0,
            notice: None,
            theme,
            thresholds: StockThresholds::default(),
            categories: DEFAULT_CATEGORIES.map(String::from).to_vec(),
            export_dir: PathBuf::from("/host"),
        }
    }

    /// Moves the catalog cursor down by one, wrapping to the top.
    pub fn move_cursor_down(&mut self) {
        let len = self.inventory.catalog.len();
        if len == 0 {
            return;
        }
        self.cursor = (self.cursor + 1) % len;
    }

    /// Moves the catalog cursor up by one, wrapping to the bottom.
    pub fn move_cursor_up(&mut self) {
        let len = self.inventory.catalog.len();
        if len == 0 {
            return;
        }
        self.cursor = if self.cursor == 0 { len - 1 } else { self.cursor - 1 };
    }

    /// Keeps the cursor inside the catalog after removals.
    pub fn clamp_cursor(&mut self) {
        self.cursor = self.cursor.min(self.inventory.catalog.len().saturating_sub(1));
    }

    /// Material under the catalog cursor.
    #[must_use]
    pub fn material_under_cursor(&self) -> Option<&Material> {
        self.inventory.catalog.list().get(self.cursor)
    }

    /// Materials offered by the autocomplete dropdown.
    ///
    /// Empty for an empty query, otherwise every catalog match in insertion
    /// order. The view model shows a [`SUGGESTION_ROWS`] window of them.
    #[must_use]
    pub fn suggestions(&self) -> Vec<&Material> {
        if self.movement.query.is_empty() {
            return Vec::new();
        }
        self.inventory.catalog.filter(&self.movement.query)
    }

    /// Whether the suggestion dropdown is visible.
    #[must_use]
    pub fn is_suggesting(&self) -> bool {
        self.mode == Mode::Entry(EntryField::Search)
            && self.movement.suggest == Suggest::Suggesting
            && !self.movement.query.is_empty()
    }

    /// Replaces any pending notice.
    pub fn raise(&mut self, notice: Notice) {
        tracing::debug!(kind = ?notice.kind, text = %notice.text, "notice raised");
        self.notice = Some(notice);
    }

    /// Computes a renderable UI view model from current state and terminal
    /// dimensions.
    ///
    /// # Windowing Algorithm
    ///
    /// 1. Subtract the fixed chrome, notice, panel, dropdown and history rows
    /// 2. Shorten the history when fewer than three stock rows would remain
    /// 3. Center the stock window around the cursor, shifted to stay full near
    ///    the end of the catalog
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, _cols: usize) -> UIViewModel {
        let notice = self.notice.as_ref().map(|n| NoticeInfo {
            text: n.text.clone(),
            is_error: n.kind == NoticeKind::Error,
        });
        let panel = self.compute_panel();
        let suggestions = self.compute_suggestions();

        let fixed = CHROME_ROWS
            + usize::from(notice.is_some())
            + panel.height()
            + suggestions.as_ref().map_or(0, SuggestionList::height);

        let mut history = self.compute_history(RECENT_LIMIT);
        if rows.saturating_sub(fixed + history.height()) < MIN_STOCK_ROWS {
            let history_budget = rows.saturating_sub(fixed + MIN_STOCK_ROWS).max(1);
            history.rows.truncate(history_budget);
        }

        let available_rows = rows.saturating_sub(fixed + history.height());
        let stock = self.compute_stock_table(available_rows);

        UIViewModel {
            header: HeaderInfo { title: " Stok Barang Kantor ".to_string() },
            notice,
            panel,
            suggestions,
            stock,
            history,
            footer: self.compute_footer(),
        }
    }

    fn compute_panel(&self) -> Panel {
        match self.mode {
            Mode::MaterialForm => {
                let form = &self.material_form;
                let title = form
                    .editing
                    .and_then(|key| self.inventory.catalog.get(key))
                    .map_or_else(
                        || "Tambah Material Baru".to_string(),
                        |m| format!("Edit Material {}", m.code),
                    );
                let fields = MaterialField::all()
                    .into_iter()
                    .map(|field| FormFieldInfo {
                        label: field.label(),
                        value: form.value(field).to_string(),
                        is_focused: form.focus == field,
                        hint: (field == MaterialField::Category).then_some("←/→ pilih"),
                    })
                    .collect();
                Panel::MaterialForm(MaterialFormPanel { title, fields })
            }
            Mode::ConfirmDelete(key) => {
                let name = self
                    .inventory
                    .catalog
                    .get(key)
                    .map_or_else(|| key.to_string(), Material::display_name);
                Panel::ConfirmDelete(ConfirmPanel {
                    message: format!("Hapus {name}?"),
                })
            }
            Mode::Browse | Mode::Entry(_) => Panel::Movement(MovementPanel {
                query: self.movement.query.clone(),
                selected_item: self
                    .movement
                    .selection
                    .and_then(|key| self.inventory.catalog.get(key))
                    .map(Material::display_name),
                quantity: self.movement.quantity.clone(),
                action: self.movement.action,
                focus: match self.mode {
                    Mode::Entry(field) => Some(field),
                    _ => None,
                },
            }),
        }
    }

    fn compute_suggestions(&self) -> Option<SuggestionList> {
        if !self.is_suggesting() {
            return None;
        }

        let matches = self.suggestions();
        if matches.is_empty() {
            return Some(SuggestionList {
                items: Vec::new(),
                empty_message: Some("Barang tidak ditemukan".to_string()),
            });
        }

        let cursor = self.movement.suggestion_cursor.min(matches.len() - 1);
        let (start, end) = visible_window(cursor, matches.len(), SUGGESTION_ROWS);
        let items = matches[start..end]
            .iter()
            .enumerate()
            .map(|(relative_idx, material)| SuggestionItem {
                label: material.label(),
                code: material.code.to_string(),
                stock: material.stock,
                is_selected: start + relative_idx == cursor,
                highlight_ranges: match_ranges(&material.name, &self.movement.query),
            })
            .collect();

        Some(SuggestionList { items, empty_message: None })
    }

    fn compute_stock_table(&self, available_rows: usize) -> StockTable {
        let materials = self.inventory.catalog.list();
        if materials.is_empty() {
            return StockTable {
                rows: Vec::new(),
                total: 0,
                empty_message: Some("Belum ada material".to_string()),
            };
        }

        let (visible_start, visible_end) = visible_window(self.cursor, materials.len(), available_rows);

        let browsing = self.mode == Mode::Browse;
        let rows = materials[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(relative_idx, material)| StockRow {
                code: material.code.to_string(),
                label: material.label(),
                category: material.category.clone(),
                stock: material.stock,
                level: self.thresholds.level(material.stock),
                is_selected: browsing && visible_start + relative_idx == self.cursor,
            })
            .collect();

        StockTable {
            rows,
            total: materials.len(),
            empty_message: None,
        }
    }

    fn compute_history(&self, limit: usize) -> HistoryInfo {
        let rows: Vec<HistoryRow> = self
            .inventory
            .log
            .recent(limit)
            .map(|tx| HistoryRow {
                date: tx.date.clone(),
                item_name: tx.item_name.clone(),
                quantity: tx.quantity,
                action: tx.action,
            })
            .collect();

        let empty_message = rows.is_empty().then(|| "Belum ada transaksi".to_string());
        HistoryInfo { rows, empty_message }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = if self.notice.is_some() {
            "Tekan tombol apa saja untuk melanjutkan"
        } else {
            match self.mode {
                Mode::Browse => {
                    "j/k: pilih  /: cari  Tab: jumlah  +/-/m: aksi  Enter: simpan  a: tambah  e: edit  d: hapus  x: ekspor  q: tutup"
                }
                Mode::Entry(EntryField::Search) => {
                    "Ketik untuk mencari  ↑/↓: saran  Enter: pilih  Tab: jumlah  Esc: selesai"
                }
                Mode::Entry(EntryField::Quantity) => {
                    "0-9: jumlah  +/-: aksi  Enter: simpan  Tab: cari  Esc: selesai"
                }
                Mode::MaterialForm => "Tab/↑/↓: pindah field  ←/→: kategori  Enter: simpan  Esc: batal",
                Mode::ConfirmDelete(_) => "y/Enter: hapus  n/Esc: batal",
            }
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }
}

/// Range of `len` items to show in `rows` rows, centered on `cursor` and
/// shifted to stay full near the end.
fn visible_window(cursor: usize, len: usize, rows: usize) -> (usize, usize) {
    let mut start = cursor.saturating_sub(rows / 2);
    let end = (start + rows).min(len);
    if end - start < rows && len >= rows {
        start = end.saturating_sub(rows);
    }
    (start, end)
}

/// Character ranges of `text` matching `query` case-insensitively.
///
/// Only the first occurrence is reported, which is what the substring filter
/// matched on.
fn match_ranges(text: &str, query: &str) -> Vec<(usize, usize)> {
    let fold = |c: char| c.to_lowercase().next().unwrap_or(c);
    let hay: Vec<char> = text.chars().map(fold).collect();
    let needle: Vec<char> = query.chars().map(fold).collect();

    if needle.is_empty() || needle.len() > hay.len() {
        return Vec::new();
    }

    hay.windows(needle.len())
        .position(|window| window == needle.as_slice())
        .map(|start| vec![(start, start + needle.len())])
        .unwrap_or_default()
}
