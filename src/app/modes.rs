//! Input mode state machine types.
//!
//! The mode decides which keybindings are active and which panel the view
//! model shows. The suggestion state is tracked separately because it only
//! matters while the search field has focus.
//!
//! # State Machine
//!
//! ```text
//! Browse ──/──▶ Entry(Search) ◀─Tab─▶ Entry(Quantity)
//!   │  ▲            │ Esc                  │ Esc / Enter
//!   │  └────────────┴──────────────────────┘
//!   ├──a/e──▶ MaterialForm ──Enter/Esc──▶ Browse
//!   └──d────▶ ConfirmDelete ──y/n──────▶ Browse
//! ```

use crate::domain::MaterialKey;

/// Field of the movement form that has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryField {
    /// The item search field; typing filters the catalog.
    Search,
    /// The quantity field; accepts digits only.
    Quantity,
}

impl EntryField {
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Search => Self::Quantity,
            Self::Quantity => Self::Search,
        }
    }
}

/// Current input handling mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Default mode: the catalog cursor moves and single keys are commands.
    Browse,

    /// Typing into one field of the movement form.
    Entry(EntryField),

    /// The add/edit material form is open.
    MaterialForm,

    /// Waiting for the user to confirm deleting a material.
    ConfirmDelete(MaterialKey),
}

/// Autocomplete panel state.
///
/// `Suggesting` means the panel is open and bound to the current query text;
/// picking a suggestion returns to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Suggest {
    #[default]
    Idle,
    Suggesting,
}
