//! Keyboard bindings: Zellij key presses to reducer events.
//!
//! The binding depends on the mode; the same letter types into a field in
//! entry mode and runs a command in browse mode.

use super::modes::{EntryField, Mode};
use super::state::AppState;
use super::Event;
use crate::domain::Movement;
use zellij_tile::prelude::{BareKey, KeyModifier, KeyWithModifier};

/// Maps a key press to an event. `None` means the key is unbound here.
///
/// A pending notice swallows every key.
#[must_use]
pub fn map_key(state: &AppState, key: &KeyWithModifier) -> Option<Event> {
    if state.notice.is_some() {
        return Some(Event::DismissNotice);
    }

    if key.has_modifiers(&[KeyModifier::Ctrl]) {
        return match key.bare_key {
            BareKey::Char('n') => Some(Event::MoveDown),
            BareKey::Char('p') => Some(Event::MoveUp),
            _ => None,
        };
    }

    let shifted = key.has_modifiers(&[KeyModifier::Shift]);
    match state.mode {
        Mode::Browse => browse_key(key.bare_key),
        Mode::Entry(field) => entry_key(field, key.bare_key, shifted),
        Mode::MaterialForm => form_key(key.bare_key, shifted),
        Mode::ConfirmDelete(_) => match key.bare_key {
            BareKey::Char('y' | 'Y') | BareKey::Enter => Some(Event::ConfirmDelete),
            BareKey::Char('n' | 'N') | BareKey::Esc => Some(Event::Cancel),
            _ => None,
        },
    }
}

fn browse_key(key: BareKey) -> Option<Event> {
    Some(match key {
        BareKey::Down | BareKey::Char('j') => Event::MoveDown,
        BareKey::Up | BareKey::Char('k') => Event::MoveUp,
        BareKey::Char('/') => Event::FocusSearch,
        BareKey::Tab => Event::FocusQuantity,
        BareKey::Char('+') => Event::SetDirection(Movement::In),
        BareKey::Char('-') => Event::SetDirection(Movement::Out),
        BareKey::Char('m') => Event::ToggleDirection,
        BareKey::Enter => Event::Submit,
        BareKey::Char('a') => Event::OpenAddMaterial,
        BareKey::Char('e') => Event::OpenEditMaterial,
        BareKey::Char('d') => Event::RequestDelete,
        BareKey::Char('x') => Event::Export,
        BareKey::Char('q') => Event::CloseFocus,
        BareKey::Esc => Event::Cancel,
        _ => return None,
    })
}

fn entry_key(field: EntryField, key: BareKey, shifted: bool) -> Option<Event> {
    Some(match key {
        BareKey::Tab if shifted => Event::PreviousField,
        BareKey::Tab => Event::NextField,
        BareKey::Down if field == EntryField::Search => Event::MoveDown,
        BareKey::Up if field == EntryField::Search => Event::MoveUp,
        BareKey::Enter => Event::Submit,
        BareKey::Esc => Event::Cancel,
        BareKey::Backspace => Event::Backspace,
        BareKey::Char(c) => Event::Char(c),
        _ => return None,
    })
}

fn form_key(key: BareKey, shifted: bool) -> Option<Event> {
    Some(match key {
        BareKey::Tab if shifted => Event::PreviousField,
        BareKey::Tab | BareKey::Down => Event::NextField,
        BareKey::Up => Event::PreviousField,
        BareKey::Left => Event::CycleCategory { forward: false },
        BareKey::Right => Event::CycleCategory { forward: true },
        BareKey::Enter => Event::Submit,
        BareKey::Esc => Event::Cancel,
        BareKey::Backspace => Event::Backspace,
        BareKey::Char(c) => Event::Char(c),
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::Notice;
    use crate::domain::MaterialKey;
    use crate::inventory::Inventory;
    use crate::ui::Theme;

    fn state(mode: Mode) -> AppState {
        let mut state = AppState::new(Inventory::seeded(), Theme::default());
        state.mode = mode;
        state
    }

    fn key(bare: BareKey) -> KeyWithModifier {
        KeyWithModifier::new(bare)
    }

    #[test]
    fn test_letters_are_commands_in_browse_and_text_in_entry() {
        let browse = state(Mode::Browse);
        assert_eq!(map_key(&browse, &key(BareKey::Char('j'))), Some(Event::MoveDown));
        assert_eq!(map_key(&browse, &key(BareKey::Char('a'))), Some(Event::OpenAddMaterial));
        assert_eq!(map_key(&browse, &key(BareKey::Char('z'))), None);

        let search = state(Mode::Entry(EntryField::Search));
        assert_eq!(map_key(&search, &key(BareKey::Char('j'))), Some(Event::Char('j')));
        assert_eq!(map_key(&search, &key(BareKey::Down)), Some(Event::MoveDown));
    }

    #[test]
    fn test_ctrl_navigation_is_global() {
        let form = state(Mode::MaterialForm);
        let ctrl_n = key(BareKey::Char('n')).with_ctrl_modifier();
        assert_eq!(map_key(&form, &ctrl_n), Some(Event::MoveDown));
        let ctrl_x = key(BareKey::Char('x')).with_ctrl_modifier();
        assert_eq!(map_key(&form, &ctrl_x), None);
    }

    #[test]
    fn test_shift_tab_goes_back() {
        let quantity = state(Mode::Entry(EntryField::Quantity));
        let shift_tab = key(BareKey::Tab).with_shift_modifier();
        assert_eq!(map_key(&quantity, &shift_tab), Some(Event::PreviousField));
        assert_eq!(map_key(&quantity, &key(BareKey::Tab)), Some(Event::NextField));
        assert_eq!(map_key(&quantity, &key(BareKey::Down)), None);
    }

    #[test]
    fn test_form_arrows_cycle_category() {
        let form = state(Mode::MaterialForm);
        assert_eq!(map_key(&form, &key(BareKey::Right)), Some(Event::CycleCategory { forward: true }));
        assert_eq!(map_key(&form, &key(BareKey::Up)), Some(Event::PreviousField));
    }

    #[test]
    fn test_confirm_dialog_keys() {
        let confirm = state(Mode::ConfirmDelete(MaterialKey(1)));
        assert_eq!(map_key(&confirm, &key(BareKey::Char('y'))), Some(Event::ConfirmDelete));
        assert_eq!(map_key(&confirm, &key(BareKey::Esc)), Some(Event::Cancel));
        assert_eq!(map_key(&confirm, &key(BareKey::Char('q'))), None);
    }

    #[test]
    fn test_notice_swallows_any_key() {
        let mut browse = state(Mode::Browse);
        browse.raise(Notice::error("Stok tidak mencukupi!"));
        assert_eq!(map_key(&browse, &key(BareKey::F(1))), Some(Event::DismissNotice));
    }
}
