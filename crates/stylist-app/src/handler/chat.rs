//! Chat handlers

use std::path::PathBuf;

use stylist_core::prelude::*;

use crate::chat::StagedImage;
use crate::modal::PickerPurpose;
use crate::state::{AppState, InputFocus};

use super::{UpdateAction, UpdateResult};

pub fn handle_focus_composer(state: &mut AppState) -> UpdateResult {
    if state.session.can_use_features() {
        state.focus = InputFocus::Composer;
    }
    UpdateResult::none()
}

pub fn handle_send(state: &mut AppState) -> UpdateResult {
    if !state.session.can_use_features() {
        debug!("Chat blocked: trial expired");
        return UpdateResult::none();
    }

    let weather = state.weather_condition();
    let occasion = state.occasion().to_string();
    match state.chat.send(weather, &occasion) {
        Some(request) => {
            debug!(
                "Sending chat message ({} chars, image: {})",
                request.message.len(),
                request.image_base64.is_some()
            );
            UpdateResult::action(UpdateAction::SendChat(request))
        }
        None => UpdateResult::none(),
    }
}

pub fn handle_reply(state: &mut AppState, reply: String) -> UpdateResult {
    state.chat.receive_reply(reply);
    UpdateResult::none()
}

/// The user's message stays in the transcript; no error bubble is added
pub fn handle_send_failed(state: &mut AppState, error: String) -> UpdateResult {
    warn!("Chat send failed: {}", error);
    state.chat.send_failed();
    state.notify_background_failure(&error);
    UpdateResult::none()
}

pub fn handle_attach_image(state: &mut AppState) -> UpdateResult {
    state.modals.open_picker(PickerPurpose::ChatImage);
    UpdateResult::none()
}

pub fn handle_image_encoded(state: &mut AppState, path: PathBuf, data_url: String) -> UpdateResult {
    debug!("Staged chat image {}", path.display());
    state.chat.stage_image(StagedImage { path, data_url });
    UpdateResult::none()
}
