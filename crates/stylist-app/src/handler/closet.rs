//! Closet handlers: loading, delete confirmation and upload

use std::path::{Path, PathBuf};

use stylist_core::prelude::*;
use stylist_core::ClothingItem;

use crate::message::Message;
use crate::modal::{ModalId, OpenOutcome};
use crate::state::{Alert, AppState};

use super::{UpdateAction, UpdateResult};

/// Shown after the server has analyzed an uploaded photo
pub const UPLOAD_SUCCESS_TEXT: &str = "Clothing item analyzed successfully!";

pub const DELETE_SUCCESS_TEXT: &str = "Item deleted successfully";

pub fn handle_load(state: &mut AppState) -> UpdateResult {
    state.closet.begin_load();
    UpdateResult::action(UpdateAction::LoadCloset)
}

pub fn handle_loaded(state: &mut AppState, items: Vec<ClothingItem>) -> UpdateResult {
    debug!("Closet loaded with {} items", items.len());
    state.closet.replace(items);
    UpdateResult::none()
}

pub fn handle_load_failed(state: &mut AppState, error: String) -> UpdateResult {
    warn!("Closet load failed: {}", error);
    state.closet.load_failed();
    state.notify_background_failure(&error);
    UpdateResult::none()
}

// ─────────────────────────────────────────────────────────
// Delete
// ─────────────────────────────────────────────────────────

pub fn handle_request_delete(state: &mut AppState) -> UpdateResult {
    let Some(file) = state.closet.selected().map(|item| item.file.clone()) else {
        return UpdateResult::none();
    };
    if !state.closet.request_delete(&file) {
        debug!("{} is not in the closet, nothing to delete", file);
    }
    UpdateResult::none()
}

pub fn handle_confirm_delete(state: &mut AppState) -> UpdateResult {
    match state.closet.confirm_delete() {
        Some(file) => {
            info!("Deleting {}", file);
            UpdateResult::action(UpdateAction::DeleteItem { file })
        }
        None => UpdateResult::none(),
    }
}

pub fn handle_item_deleted(state: &mut AppState, file: String) -> UpdateResult {
    if !state.closet.remove(&file) {
        debug!("{} was already gone from the cache", file);
    }
    state.toasts.success(DELETE_SUCCESS_TEXT);
    UpdateResult::none()
}

// ─────────────────────────────────────────────────────────
// Upload
// ─────────────────────────────────────────────────────────

pub fn handle_open_upload(state: &mut AppState) -> UpdateResult {
    if state.modals.open(ModalId::Upload) == OpenOutcome::PickerShown {
        debug!("No file chosen yet, asking for one first");
    }
    UpdateResult::none()
}

pub fn handle_submit_upload(state: &mut AppState) -> UpdateResult {
    if state.guard_duplicates() && state.modals.upload.in_progress {
        debug!("Upload already in flight, ignoring");
        return UpdateResult::none();
    }

    let Some(path) = state.modals.upload.file.clone() else {
        state.show_alert(Alert::new("Upload", "Please select a file"));
        return UpdateResult::none();
    };

    info!("Uploading {}", path.display());
    state.modals.upload.in_progress = true;
    UpdateResult::action(UpdateAction::UploadItem { path })
}

/// Whether the upload modal still belongs to the upload of `path`
fn is_current_upload(state: &AppState, path: &Path) -> bool {
    state.modals.upload.file.as_deref() == Some(path)
}

/// A finished upload that was dismissed with Esc still lands in the closet,
/// but leaves whatever upload modal is open now alone.
pub fn handle_upload_succeeded(state: &mut AppState, path: PathBuf) -> UpdateResult {
    if is_current_upload(state, &path) {
        state.modals.close(ModalId::Upload);
    } else {
        debug!("Upload of {} finished after its modal closed", path.display());
    }
    state.toasts.success(UPLOAD_SUCCESS_TEXT);
    UpdateResult::message(Message::LoadCloset)
}

/// The modal stays open with the file still chosen so the user can retry
pub fn handle_upload_failed(state: &mut AppState, path: PathBuf, error: String) -> UpdateResult {
    warn!("Upload of {} failed: {}", path.display(), error);
    if is_current_upload(state, &path) {
        state.modals.upload.in_progress = false;
    }
    state.show_alert(Alert::error(error));
    UpdateResult::none()
}
