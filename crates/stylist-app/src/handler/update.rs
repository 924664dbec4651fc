//! Main update function - handles state transitions (TEA pattern)

use std::time::Instant;

use crate::message::Message;
use crate::state::{AppPhase, AppState, InputFocus};

use super::{chat, closet, dialogs, home, keys::handle_key, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Swipe { dx } => home::handle_swipe(state, dx),

        Message::Tick => {
            state.toasts.expire(Instant::now());
            UpdateResult::none()
        }

        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Startup => home::handle_startup(state),

        // ─────────────────────────────────────────────────────────
        // Navigation
        // ─────────────────────────────────────────────────────────
        Message::SelectTab(tab) => {
            let load = state.tabs.select(tab);
            after_tab_change(state, load)
        }
        Message::NextTab => {
            let load = state.tabs.next();
            after_tab_change(state, load)
        }
        Message::PrevTab => {
            let load = state.tabs.prev();
            after_tab_change(state, load)
        }

        // ─────────────────────────────────────────────────────────
        // Session & weather
        // ─────────────────────────────────────────────────────────
        Message::WeatherLoaded { weather } => home::handle_weather_loaded(state, weather),
        Message::WeatherFailed { error } => home::handle_weather_failed(state, error),
        Message::SubscriptionLoaded { status } => home::handle_subscription_loaded(state, status),
        Message::SubscriptionFailed { error } => home::handle_subscription_failed(state, error),

        // ─────────────────────────────────────────────────────────
        // Home
        // ─────────────────────────────────────────────────────────
        Message::CarouselNext => {
            state.carousel.next();
            UpdateResult::none()
        }
        Message::CarouselPrev => {
            state.carousel.prev();
            UpdateResult::none()
        }
        Message::RegenerateOutfits => home::handle_regenerate(state),
        Message::OutfitsLoaded { outfits } => home::handle_outfits_loaded(state, outfits),
        Message::OutfitsFailed { error } => home::handle_outfits_failed(state, error),

        // ─────────────────────────────────────────────────────────
        // Outfit generation form
        // ─────────────────────────────────────────────────────────
        Message::OpenOutfitForm => dialogs::handle_open_outfit_form(state),
        Message::FormToggleField => {
            state.modals.outfit_form.toggle_field();
            UpdateResult::none()
        }
        Message::FormCycleOption { forward } => {
            state.modals.outfit_form.cycle_option(forward);
            UpdateResult::none()
        }
        Message::SubmitOutfitForm => dialogs::handle_submit_outfit_form(state),
        Message::OutfitGenerated { result } => dialogs::handle_outfit_generated(state, result),
        Message::GenerationFailed { error } => dialogs::handle_generation_failed(state, error),

        // ─────────────────────────────────────────────────────────
        // Chat
        // ─────────────────────────────────────────────────────────
        Message::FocusComposer => chat::handle_focus_composer(state),
        Message::BlurComposer => {
            state.focus = InputFocus::None;
            UpdateResult::none()
        }
        Message::ComposerInput { text } => {
            state.chat.composer = text;
            UpdateResult::none()
        }
        Message::SendChat => chat::handle_send(state),
        Message::ChatReplied { reply } => chat::handle_reply(state, reply),
        Message::ChatFailed { error } => chat::handle_send_failed(state, error),
        Message::CycleSuggestion => {
            state.chat.cycle_suggestion();
            UpdateResult::none()
        }
        Message::AttachImage => chat::handle_attach_image(state),
        Message::ImageEncoded { path, data_url } => {
            chat::handle_image_encoded(state, path, data_url)
        }
        Message::ImageFailed { error } => {
            state.toasts.error(error);
            UpdateResult::none()
        }
        Message::ClearStagedImage => {
            state.chat.clear_staged_image();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Closet
        // ─────────────────────────────────────────────────────────
        Message::LoadCloset => closet::handle_load(state),
        Message::ClosetLoaded { items } => closet::handle_loaded(state, items),
        Message::ClosetFailed { error } => closet::handle_load_failed(state, error),
        Message::CycleCategory { forward } => {
            state.closet.cycle_filter(forward);
            UpdateResult::none()
        }
        Message::SelectNextItem => {
            state.closet.select_next();
            UpdateResult::none()
        }
        Message::SelectPrevItem => {
            state.closet.select_prev();
            UpdateResult::none()
        }
        Message::StartSearch => {
            state.focus = InputFocus::Search;
            UpdateResult::none()
        }
        Message::SearchInput { text } => {
            state.closet.set_query(text);
            UpdateResult::none()
        }
        Message::EndSearch => {
            state.focus = InputFocus::None;
            UpdateResult::none()
        }
        Message::RequestDelete => closet::handle_request_delete(state),
        Message::ConfirmDelete => closet::handle_confirm_delete(state),
        Message::CancelDelete => {
            state.closet.cancel_delete();
            UpdateResult::none()
        }
        Message::ItemDeleted { file } => closet::handle_item_deleted(state, file),
        Message::DeleteFailed { error } => {
            state.toasts.error(error);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Upload
        // ─────────────────────────────────────────────────────────
        Message::OpenUpload => closet::handle_open_upload(state),
        Message::SubmitUpload => closet::handle_submit_upload(state),
        Message::UploadSucceeded { path } => closet::handle_upload_succeeded(state, path),
        Message::UploadFailed { path, error } => closet::handle_upload_failed(state, path, error),

        // ─────────────────────────────────────────────────────────
        // File picker
        // ─────────────────────────────────────────────────────────
        Message::PickerInput { text } => {
            if let Some(picker) = state.modals.picker.as_mut() {
                picker.input = text;
            }
            UpdateResult::none()
        }
        Message::PickerSubmit => dialogs::handle_picker_submit(state),
        Message::PickerCancel => {
            state.modals.cancel_picker();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Dialogs
        // ─────────────────────────────────────────────────────────
        Message::CloseModal(id) => {
            state.modals.close(id);
            UpdateResult::none()
        }
        Message::DismissAlert => {
            state.alert = None;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Trial gate
        // ─────────────────────────────────────────────────────────
        Message::RequestCheckout => dialogs::handle_request_checkout(state),
        Message::CheckoutReady { url } => dialogs::handle_checkout_ready(state, url),
        Message::CheckoutFailed { error } => dialogs::handle_checkout_failed(state, error),
    }
}

/// Leaving a tab drops text focus; entering the closet always refetches it
fn after_tab_change(state: &mut AppState, load_closet: bool) -> UpdateResult {
    state.focus = InputFocus::None;
    tracing::debug!("Switched to {} tab", state.tabs.active().label());
    if load_closet {
        UpdateResult::message(Message::LoadCloset)
    } else {
        UpdateResult::none()
    }
}
