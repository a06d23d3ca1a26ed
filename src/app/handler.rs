//! Event handling and state transition logic.
//!
//! [`handle_event`] is the reducer of the plugin. It takes one [`Event`],
//! mutates [`AppState`] and returns whether the pane should re-render plus the
//! [`Action`]s the plugin shim has to execute. It performs no I/O itself, so
//! every interaction can be driven from tests.
//!
//! # Event Types
//!
//! - **Navigation**: `MoveDown`, `MoveUp`, `NextField`, `PreviousField`
//! - **Input**: `Char`, `Backspace`, `Submit`, `Cancel`
//! - **Movement form**: `FocusSearch`, `FocusQuantity`, `SetDirection`, `ToggleDirection`
//! - **Catalog**: `OpenAddMaterial`, `OpenEditMaterial`, `RequestDelete`,
//!   `ConfirmDelete`, `CycleCategory`
//! - **Session**: `Export`, `CloseFocus`, `DismissNotice`
//! - **Worker**: `WorkerResponse` with typed message variants

use super::forms::{MaterialField, MaterialForm};
use super::modes::{EntryField, Mode, Suggest};
use super::state::Notice;
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::transaction::now;
use crate::domain::{InventoryError, Movement};
use crate::export;
use crate::infrastructure::strip_host_prefix;
use crate::worker::{WorkerMessage, WorkerResponse};

/// Events triggered by user input or worker responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Moves the catalog cursor, the suggestion cursor or the form focus down.
    MoveDown,
    /// Moves the catalog cursor, the suggestion cursor or the form focus up.
    MoveUp,
    /// Focuses the search field and opens the suggestions.
    FocusSearch,
    /// Focuses the quantity field.
    FocusQuantity,
    /// Next field of the focused form.
    NextField,
    /// Previous field of the focused form.
    PreviousField,
    /// Types a character into the focused field.
    Char(char),
    /// Removes the last character of the focused field.
    Backspace,
    /// Enter: pick a suggestion, submit the movement, save the material form
    /// or confirm a deletion, depending on mode.
    Submit,
    /// Esc: leave the current field, form or dialog.
    Cancel,
    /// Chooses the movement direction.
    SetDirection(Movement),
    /// Flips the movement direction.
    ToggleDirection,
    /// Opens a blank material form.
    OpenAddMaterial,
    /// Opens the material form for the material under the cursor.
    OpenEditMaterial,
    /// Asks for confirmation before deleting the material under the cursor.
    RequestDelete,
    /// Confirms a pending deletion.
    ConfirmDelete,
    /// Cycles the category presets in the material form.
    CycleCategory {
        forward: bool,
    },
    /// Serializes the history and sends it to the worker for writing.
    Export,
    /// Hides the plugin pane.
    CloseFocus,
    /// Clears the pending notice.
    DismissNotice,
    /// Wraps a response from the background worker thread.
    WorkerResponse(WorkerResponse),
}

impl Event {
    /// Whether the event comes from a key press.
    #[must_use]
    pub const fn is_key(&self) -> bool {
        !matches!(self, Self::WorkerResponse(_))
    }
}

/// Processes an event, mutates application state, and returns the render flag
/// and actions to execute.
///
/// Inventory rule violations never surface as `Err`; they become an error
/// notice and leave the inventory untouched.
///
/// # Errors
///
/// Currently infallible for every event; the `Result` keeps the signature
/// stable for handlers that may fail on infrastructure errors.
///
/// # Example
///
/// ```rust
/// use stok::app::{handle_event, AppState, Event};
/// use stok::inventory::Inventory;
/// use stok::ui::Theme;
///
/// let mut state = AppState::new(Inventory::seeded(), Theme::default());
/// let (render, actions) = handle_event(&mut state, &Event::MoveDown)?;
/// assert!(render);
/// assert!(actions.is_empty());
/// assert_eq!(state.cursor, 1);
/// # Ok::<(), stok::StokError>(())
/// ```
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event, mode = ?state.mode).entered();

    if state.notice.is_some() && event.is_key() {
        tracing::debug!("dismissing notice");
        state.notice = None;
        return Ok((true, vec![]));
    }

    match event {
        Event::MoveDown | Event::MoveUp => {
            let down = *event == Event::MoveDown;
            match state.mode {
                Mode::Browse => {
                    if down {
                        state.move_cursor_down();
                    } else {
                        state.move_cursor_up();
                    }
                }
                Mode::Entry(EntryField::Search) => {
                    if state.movement.suggest == Suggest::Idle {
                        state.movement.open_suggestions();
                    } else {
                        let count = state.suggestions().len();
                        state.movement.move_suggestion(count, down);
                    }
                }
                Mode::MaterialForm => move_form_focus(&mut state.material_form, down),
                Mode::Entry(EntryField::Quantity) | Mode::ConfirmDelete(_) => return Ok((false, vec![])),
            }
            Ok((true, vec![]))
        }
        Event::FocusSearch => {
            state.mode = Mode::Entry(EntryField::Search);
            state.movement.open_suggestions();
            Ok((true, vec![]))
        }
        Event::FocusQuantity => {
            state.mode = Mode::Entry(EntryField::Quantity);
            state.movement.close_suggestions();
            Ok((true, vec![]))
        }
        Event::NextField | Event::PreviousField => {
            match state.mode {
                Mode::Browse => {
                    state.mode = Mode::Entry(EntryField::Quantity);
                }
                Mode::Entry(field) => {
                    let next = field.other();
                    state.mode = Mode::Entry(next);
                    if next == EntryField::Search {
                        state.movement.open_suggestions();
                    } else {
                        state.movement.close_suggestions();
                    }
                }
                Mode::MaterialForm => {
                    move_form_focus(&mut state.material_form, *event == Event::NextField);
                }
                Mode::ConfirmDelete(_) => return Ok((false, vec![])),
            }
            Ok((true, vec![]))
        }
        Event::Char(c) => match state.mode {
            Mode::Entry(EntryField::Search) => {
                state.movement.type_query(*c);
                tracing::trace!(query = %state.movement.query, "search query updated");
                Ok((true, vec![]))
            }
            Mode::Entry(EntryField::Quantity) => match c {
                '+' => set_direction(state, Movement::In),
                '-' => set_direction(state, Movement::Out),
                _ => Ok((state.movement.type_quantity(*c), vec![])),
            },
            Mode::MaterialForm => {
                state.material_form.type_char(*c);
                Ok((true, vec![]))
            }
            Mode::Browse | Mode::ConfirmDelete(_) => Ok((false, vec![])),
        },
        Event::Backspace => {
            match state.mode {
                Mode::Entry(EntryField::Search) => state.movement.erase_query(),
                Mode::Entry(EntryField::Quantity) => state.movement.erase_quantity(),
                Mode::MaterialForm => state.material_form.erase(),
                Mode::Browse | Mode::ConfirmDelete(_) => return Ok((false, vec![])),
            }
            Ok((true, vec![]))
        }
        Event::Submit => match state.mode {
            Mode::Entry(EntryField::Search) if state.is_suggesting() => {
                pick_suggestion(state);
                Ok((true, vec![]))
            }
            Mode::Browse | Mode::Entry(_) => {
                submit_movement(state);
                Ok((true, vec![]))
            }
            Mode::MaterialForm => {
                save_material(state);
                Ok((true, vec![]))
            }
            Mode::ConfirmDelete(_) => confirm_delete(state),
        },
        Event::Cancel => {
            match state.mode {
                Mode::Browse => {
                    tracing::debug!("clearing movement form");
                    state.movement.clear();
                }
                Mode::Entry(_) => {
                    state.movement.close_suggestions();
                    state.mode = Mode::Browse;
                }
                Mode::MaterialForm | Mode::ConfirmDelete(_) => {
                    tracing::debug!(mode = ?state.mode, "cancelled");
                    state.mode = Mode::Browse;
                }
            }
            Ok((true, vec![]))
        }
        Event::SetDirection(direction) => set_direction(state, *direction),
        Event::ToggleDirection => {
            let toggled = state.movement.action.toggled();
            set_direction(state, toggled)
        }
        Event::OpenAddMaterial => {
            if state.mode != Mode::Browse {
                return Ok((false, vec![]));
            }
            state.material_form = MaterialForm::for_new(state.categories.first().map(String::as_str));
            state.mode = Mode::MaterialForm;
            Ok((true, vec![]))
        }
        Event::OpenEditMaterial => {
            if state.mode != Mode::Browse {
                return Ok((false, vec![]));
            }
            let Some(material) = state.material_under_cursor() else {
                tracing::debug!("no material under cursor to edit");
                return Ok((false, vec![]));
            };
            state.material_form = MaterialForm::for_edit(material);
            state.mode = Mode::MaterialForm;
            Ok((true, vec![]))
        }
        Event::RequestDelete => {
            if state.mode != Mode::Browse {
                return Ok((false, vec![]));
            }
            let Some(key) = state.material_under_cursor().map(|m| m.key) else {
                tracing::debug!("no material under cursor to delete");
                return Ok((false, vec![]));
            };
            state.mode = Mode::ConfirmDelete(key);
            Ok((true, vec![]))
        }
        Event::ConfirmDelete => confirm_delete(state),
        Event::CycleCategory { forward } => {
            if state.mode != Mode::MaterialForm || state.material_form.focus != MaterialField::Category {
                return Ok((false, vec![]));
            }
            state.material_form.cycle_category(&state.categories, *forward);
            Ok((true, vec![]))
        }
        Event::Export => Ok(export_history(state)),
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::DismissNotice => Ok((state.notice.take().is_some(), vec![])),
        Event::WorkerResponse(response) => match response {
            WorkerResponse::ExportWritten { path } => {
                tracing::debug!(path = %path.display(), "export written by worker");
                let shown = strip_host_prefix(&path.to_string_lossy());
                state.raise(Notice::info(format!("Riwayat diekspor ke {shown}")));
                Ok((true, vec![]))
            }
            WorkerResponse::Error { message } => {
                tracing::error!("Worker error: {}", message);
                state.raise(Notice::error(format!("Gagal mengekspor riwayat: {message}")));
                Ok((true, vec![]))
            }
        },
    }
}

fn move_form_focus(form: &mut MaterialForm, down: bool) {
    form.focus = if down { form.focus.next() } else { form.focus.previous() };
}

fn set_direction(state: &mut AppState, direction: Movement) -> Result<(bool, Vec<Action>)> {
    if !matches!(state.mode, Mode::Browse | Mode::Entry(_)) {
        return Ok((false, vec![]));
    }
    let changed = state.movement.action != direction;
    state.movement.action = direction;
    Ok((changed, vec![]))
}

/// Binds the highlighted suggestion and moves on to the quantity field.
fn pick_suggestion(state: &mut AppState) {
    let suggestions = state.suggestions();
    let Some(material) = suggestions
        .get(state.movement.suggestion_cursor)
        .or_else(|| suggestions.last())
        .map(|m| (*m).clone())
    else {
        tracing::debug!(query = %state.movement.query, "no suggestion to pick");
        state.raise(Notice::error(InventoryError::MaterialNotFound.to_string()));
        return;
    };

    tracing::debug!(material_code = %material.code, "suggestion picked");
    state.movement.pick(&material);
    state.mode = Mode::Entry(EntryField::Quantity);
}

fn submit_movement(state: &mut AppState) {
    let result = state.inventory.submit_movement(
        state.movement.selection,
        &state.movement.quantity,
        state.movement.action,
        &now(),
    );

    match result {
        Ok(tx) => {
            tracing::debug!(
                transaction_id = tx.id,
                item = %tx.item_name,
                quantity = tx.quantity,
                action = ?tx.action,
                "movement recorded"
            );
            state.movement.clear();
            state.mode = Mode::Browse;
        }
        Err(e) => {
            tracing::debug!(error = %e, "movement rejected");
            state.raise(Notice::error(e.to_string()));
        }
    }
}

fn save_material(state: &mut AppState) {
    let form = &state.material_form;
    let result = match form.editing {
        Some(key) => state
            .inventory
            .edit_material(key, &form.name, &form.brand, &form.category, &form.stock)
            .map(|m| format!("Material {} berhasil diperbarui", m.code)),
        None => state
            .inventory
            .add_material(&form.name, &form.brand, &form.category, &form.stock)
            .map(|m| format!("Material baru berhasil ditambahkan dengan ID: {}", m.code)),
    };

    match result {
        Ok(message) => {
            state.material_form = MaterialForm::default();
            state.mode = Mode::Browse;
            state.raise(Notice::info(message));
        }
        Err(e) => {
            tracing::debug!(error = %e, "material form rejected");
            state.raise(Notice::error(e.to_string()));
        }
    }
}

fn confirm_delete(state: &mut AppState) -> Result<(bool, Vec<Action>)> {
    let Mode::ConfirmDelete(key) = state.mode else {
        return Ok((false, vec![]));
    };

    state.mode = Mode::Browse;
    match state.inventory.delete_material(key) {
        Ok(removed) => {
            tracing::debug!(material_code = %removed.code, "material deleted");
            state.clamp_cursor();
        }
        Err(e) => state.raise(Notice::error(e.to_string())),
    }
    Ok((true, vec![]))
}

fn export_history(state: &mut AppState) -> (bool, Vec<Action>) {
    if !matches!(state.mode, Mode::Browse) {
        return (false, vec![]);
    }

    match export::csv::render(&state.inventory.log) {
        Ok(payload) => {
            let file_name = export::csv::file_name(&now());
            tracing::debug!(
                file_name = %file_name,
                transactions = state.inventory.log.len(),
                "exporting history"
            );
            (
                false,
                vec![Action::PostToWorker(WorkerMessage::export_csv(
                    state.export_dir.clone(),
                    file_name,
                    payload,
                ))],
            )
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to render export");
            state.raise(Notice::error(format!("Gagal mengekspor riwayat: {e}")));
            (true, vec![])
        }
    }
}
