//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers for UI modes
//! - `home`: Weather, subscription and outfit carousel handlers
//! - `chat`: Chat composer and transcript handlers
//! - `closet`: Closet loading, filtering, upload and delete handlers
//! - `dialogs`: Modal, picker, alert and checkout handlers

pub(crate) mod chat;
pub(crate) mod closet;
pub(crate) mod dialogs;
pub(crate) mod home;
pub(crate) mod keys;
pub(crate) mod update;


use std::path::PathBuf;

use stylist_backend::ChatRequest;

use crate::message::Message;

// Re-export main entry point
pub use keys::handle_key;
pub use update::update;

/// Network work the event loop should start after update
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateAction {
    /// Fetch weather and subscription status in parallel
    Bootstrap { location: String },

    LoadOutfits { weather: String, occasion: String },

    GenerateOutfit { weather: String, occasion: String },

    SendChat(ChatRequest),

    /// Read and base64-encode an image for the chat composer
    EncodeImage { path: PathBuf },

    LoadCloset,

    UploadItem { path: PathBuf },

    DeleteItem { file: String },

    StartCheckout,
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
