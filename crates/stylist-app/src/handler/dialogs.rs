//! Outfit generation form, file picker and checkout handlers

use std::path::PathBuf;

use stylist_core::prelude::*;
use stylist_core::GeneratedOutfit;

use crate::modal::{ModalId, PickerPurpose};
use crate::state::{Alert, AppState};

use super::{UpdateAction, UpdateResult};

pub fn handle_open_outfit_form(state: &mut AppState) -> UpdateResult {
    state.modals.open(ModalId::OutfitForm);
    UpdateResult::none()
}

pub fn handle_submit_outfit_form(state: &mut AppState) -> UpdateResult {
    let form = &state.modals.outfit_form;
    if state.guard_duplicates() && form.in_progress {
        debug!("Outfit generation already in flight, ignoring");
        return UpdateResult::none();
    }

    let (Some(weather), Some(occasion)) = (form.weather(), form.occasion()) else {
        state.show_alert(Alert::new(
            "Generate outfit",
            "Please select both weather and occasion",
        ));
        return UpdateResult::none();
    };

    info!("Generating outfit for {} / {}", weather, occasion);
    state.modals.outfit_form.in_progress = true;
    UpdateResult::action(UpdateAction::GenerateOutfit {
        weather: weather.to_string(),
        occasion: occasion.to_string(),
    })
}

pub fn handle_outfit_generated(state: &mut AppState, result: GeneratedOutfit) -> UpdateResult {
    state.modals.show_result(result);
    state.modals.close(ModalId::OutfitForm);
    UpdateResult::none()
}

pub fn handle_generation_failed(state: &mut AppState, error: String) -> UpdateResult {
    warn!("Outfit generation failed: {}", error);
    state.modals.outfit_form.in_progress = false;
    state.show_alert(Alert::error(error));
    UpdateResult::none()
}

// ─────────────────────────────────────────────────────────
// File picker
// ─────────────────────────────────────────────────────────

/// Expand a leading `~/` to the home directory
fn expand_path(input: &str) -> PathBuf {
    if let Some(rest) = input.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(input)
}

/// An empty path counts as cancelling the picker
pub fn handle_picker_submit(state: &mut AppState) -> UpdateResult {
    let Some(input) = state
        .modals
        .picker
        .as_ref()
        .map(|p| p.input.trim().to_string())
    else {
        return UpdateResult::none();
    };

    if input.is_empty() {
        state.modals.cancel_picker();
        return UpdateResult::none();
    }

    let path = expand_path(&input);
    match state.modals.choose_file(path.clone()) {
        Some(PickerPurpose::ChatImage) => UpdateResult::action(UpdateAction::EncodeImage { path }),
        Some(PickerPurpose::Upload) | None => UpdateResult::none(),
    }
}

// ─────────────────────────────────────────────────────────
// Checkout
// ─────────────────────────────────────────────────────────

pub fn handle_request_checkout(state: &mut AppState) -> UpdateResult {
    if state.guard_duplicates() && state.checkout_pending {
        debug!("Checkout already in flight, ignoring");
        return UpdateResult::none();
    }
    state.checkout_pending = true;
    UpdateResult::action(UpdateAction::StartCheckout)
}

pub fn handle_checkout_ready(state: &mut AppState, url: String) -> UpdateResult {
    state.checkout_pending = false;
    state.show_alert(Alert::new(
        "Subscribe",
        format!("Open this link in your browser to subscribe:\n{}", url),
    ));
    UpdateResult::none()
}

pub fn handle_checkout_failed(state: &mut AppState, error: String) -> UpdateResult {
    warn!("Checkout failed: {}", error);
    state.checkout_pending = false;
    state.show_alert(Alert::error(error));
    UpdateResult::none()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_path_plain() {
        assert_eq!(expand_path("/tmp/a.png"), PathBuf::from("/tmp/a.png"));
        assert_eq!(expand_path("a.png"), PathBuf::from("a.png"));
    }

    #[test]
    fn test_expand_path_home() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_path("~/a.png"), home.join("a.png"));
        }
    }
}
