//! stylist-app - Application state and orchestration for AIstylist
//!
//! This crate implements the TEA (The Elm Architecture) pattern for the
//! stylist client:
//!
//! - [`AppState`]: the whole model (tabs, carousel, chat, closet, modals, toasts)
//! - [`Message`]: every user intent and every network completion
//! - [`update`]: pure state transitions returning an [`UpdateResult`]
//! - [`handle_action`]: runs the [`UpdateAction`]s on tokio tasks against a
//!   [`stylist_backend::StyleBackend`]
//! - [`Engine`]: ties the above to a message channel for a frontend to drive
//!
//! Nothing here touches a terminal; `stylist-tui` renders [`AppState`] and
//! translates terminal events into [`Message`]s.

pub mod actions;
pub mod carousel;
pub mod chat;
pub mod closet;
pub mod config;
pub mod engine;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod modal;
pub mod process;
pub mod signals;
pub mod state;
pub mod tabs;
pub mod toast;

pub use actions::handle_action;
pub use engine::Engine;
pub use handler::{handle_key, update, UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use process::process_message;
pub use state::{AppState, UiMode};
