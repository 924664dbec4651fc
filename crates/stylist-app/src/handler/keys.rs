//! Key event handlers for different UI modes

use crate::input_key::InputKey;
use crate::message::Message;
use crate::modal::ModalId;
use crate::state::{AppState, UiMode};
use crate::tabs::Tab;

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    // Force quit works everywhere
    if key == InputKey::CharCtrl('c') {
        return Some(Message::Quit);
    }

    match state.ui_mode() {
        UiMode::Alert => handle_key_alert(key),
        UiMode::TrialExpired => handle_key_trial_expired(key),
        UiMode::ConfirmDelete => handle_key_confirm_delete(key),
        UiMode::FilePicker => handle_key_file_picker(state, key),
        UiMode::Modal(id) => handle_key_modal(id, key),
        UiMode::ComposerInput => handle_key_composer(state, key),
        UiMode::SearchInput => handle_key_search(state, key),
        UiMode::Normal => handle_key_normal(state, key),
    }
}

fn handle_key_alert(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter | InputKey::Esc => Some(Message::DismissAlert),
        _ => None,
    }
}

fn handle_key_trial_expired(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('s') | InputKey::Enter => Some(Message::RequestCheckout),
        InputKey::Char('q') => Some(Message::Quit),
        _ => None,
    }
}

fn handle_key_confirm_delete(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('y' | 'Y') | InputKey::Enter => Some(Message::ConfirmDelete),
        InputKey::Char('n' | 'N') | InputKey::Esc => Some(Message::CancelDelete),
        _ => None,
    }
}

fn handle_key_file_picker(state: &AppState, key: InputKey) -> Option<Message> {
    let input = state.modals.picker.as_ref()?.input.as_str();
    match key {
        InputKey::Enter => Some(Message::PickerSubmit),
        InputKey::Esc => Some(Message::PickerCancel),
        _ => edit_text(input, key).map(|text| Message::PickerInput { text }),
    }
}

fn handle_key_modal(id: ModalId, key: InputKey) -> Option<Message> {
    match id {
        ModalId::Upload => match key {
            InputKey::Enter => Some(Message::SubmitUpload),
            InputKey::Esc => Some(Message::CloseModal(ModalId::Upload)),
            _ => None,
        },
        ModalId::OutfitForm => match key {
            InputKey::Tab | InputKey::BackTab | InputKey::Up | InputKey::Down => {
                Some(Message::FormToggleField)
            }
            InputKey::Left | InputKey::Char('h') => {
                Some(Message::FormCycleOption { forward: false })
            }
            InputKey::Right | InputKey::Char('l') => {
                Some(Message::FormCycleOption { forward: true })
            }
            InputKey::Enter => Some(Message::SubmitOutfitForm),
            InputKey::Esc => Some(Message::CloseModal(ModalId::OutfitForm)),
            _ => None,
        },
        ModalId::OutfitResult => match key {
            InputKey::Enter | InputKey::Esc => Some(Message::CloseModal(ModalId::OutfitResult)),
            _ => None,
        },
    }
}

fn handle_key_composer(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter => Some(Message::SendChat),
        InputKey::Esc => Some(Message::BlurComposer),
        _ => edit_text(&state.chat.composer, key).map(|text| Message::ComposerInput { text }),
    }
}

fn handle_key_search(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        // Keep the query, leave input mode
        InputKey::Enter | InputKey::Esc => Some(Message::EndSearch),
        _ => edit_text(state.closet.query(), key).map(|text| Message::SearchInput { text }),
    }
}

/// Apply a text-editing key to `current`, returning the new text
fn edit_text(current: &str, key: InputKey) -> Option<String> {
    match key {
        InputKey::Char(c) => {
            let mut text = current.to_string();
            text.push(c);
            Some(text)
        }
        InputKey::Backspace => {
            let mut text = current.to_string();
            text.pop();
            Some(text)
        }
        // Clear all input
        InputKey::CharCtrl('u') => Some(String::new()),
        _ => None,
    }
}

/// Handle key events in normal mode
fn handle_key_normal(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') => return Some(Message::Quit),

        // ─────────────────────────────────────────────────────────
        // Tab navigation
        // ─────────────────────────────────────────────────────────
        InputKey::Char('1') => return Some(Message::SelectTab(Tab::Home)),
        InputKey::Char('2') => return Some(Message::SelectTab(Tab::Chat)),
        InputKey::Char('3') => return Some(Message::SelectTab(Tab::Closet)),
        InputKey::Tab => return Some(Message::NextTab),
        InputKey::BackTab => return Some(Message::PrevTab),
        _ => {}
    }

    match state.tabs.active() {
        Tab::Home => handle_key_home(key),
        Tab::Chat => handle_key_chat(key),
        Tab::Closet => handle_key_closet(key),
    }
}

fn handle_key_home(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Left | InputKey::Char('h') => Some(Message::CarouselPrev),
        InputKey::Right | InputKey::Char('l') => Some(Message::CarouselNext),
        InputKey::Char('g') => Some(Message::RegenerateOutfits),
        InputKey::Char('o') => Some(Message::OpenOutfitForm),
        _ => None,
    }
}

fn handle_key_chat(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('i') | InputKey::Enter => Some(Message::FocusComposer),
        InputKey::Char('a') => Some(Message::AttachImage),
        InputKey::Char('x') => Some(Message::ClearStagedImage),
        InputKey::Char('s') => Some(Message::CycleSuggestion),
        _ => None,
    }
}

fn handle_key_closet(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Left => Some(Message::CycleCategory { forward: false }),
        InputKey::Right => Some(Message::CycleCategory { forward: true }),
        InputKey::Up | InputKey::Char('k') => Some(Message::SelectPrevItem),
        InputKey::Down | InputKey::Char('j') => Some(Message::SelectNextItem),
        InputKey::Char('d') => Some(Message::RequestDelete),
        InputKey::Char('u') => Some(Message::OpenUpload),
        InputKey::Char('/') => Some(Message::StartSearch),
        InputKey::Char('r') => Some(Message::LoadCloset),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Alert;

    fn state_on(tab: Tab) -> AppState {
        let mut state = AppState::new();
        state.tabs.select(tab);
        state
    }

    #[test]
    fn test_number_keys_select_tabs() {
        let state = AppState::new();
        assert!(matches!(
            handle_key(&state, InputKey::Char('3')),
            Some(Message::SelectTab(Tab::Closet))
        ));
        assert!(matches!(
            handle_key(&state, InputKey::Tab),
            Some(Message::NextTab)
        ));
    }

    #[test]
    fn test_same_letter_differs_per_tab() {
        let home = state_on(Tab::Home);
        let chat = state_on(Tab::Chat);
        assert!(matches!(
            handle_key(&home, InputKey::Char('h')),
            Some(Message::CarouselPrev)
        ));
        assert!(handle_key(&chat, InputKey::Char('h')).is_none());
        assert!(matches!(
            handle_key(&chat, InputKey::Char('s')),
            Some(Message::CycleSuggestion)
        ));
    }

    #[test]
    fn test_composer_typing_builds_text() {
        let mut state = state_on(Tab::Chat);
        state.focus = crate::state::InputFocus::Composer;
        state.chat.composer = "hi".to_string();

        match handle_key(&state, InputKey::Char('!')) {
            Some(Message::ComposerInput { text }) => assert_eq!(text, "hi!"),
            other => panic!("unexpected {:?}", other),
        }
        match handle_key(&state, InputKey::Backspace) {
            Some(Message::ComposerInput { text }) => assert_eq!(text, "h"),
            other => panic!("unexpected {:?}", other),
        }
        // 'q' is text here, not quit
        assert!(matches!(
            handle_key(&state, InputKey::Char('q')),
            Some(Message::ComposerInput { .. })
        ));
    }

    #[test]
    fn test_alert_swallows_navigation() {
        let mut state = AppState::new();
        state.show_alert(Alert::error("boom"));
        assert!(handle_key(&state, InputKey::Char('2')).is_none());
        assert!(matches!(
            handle_key(&state, InputKey::Esc),
            Some(Message::DismissAlert)
        ));
    }

    #[test]
    fn test_ctrl_c_quits_in_any_mode() {
        let mut state = AppState::new();
        state.modals.open(ModalId::OutfitForm);
        assert!(matches!(
            handle_key(&state, InputKey::CharCtrl('c')),
            Some(Message::Quit)
        ));
    }

    #[test]
    fn test_outfit_form_keys() {
        let mut state = AppState::new();
        state.modals.open(ModalId::OutfitForm);
        assert!(matches!(
            handle_key(&state, InputKey::Right),
            Some(Message::FormCycleOption { forward: true })
        ));
        assert!(matches!(
            handle_key(&state, InputKey::Esc),
            Some(Message::CloseModal(ModalId::OutfitForm))
        ));
    }
}
