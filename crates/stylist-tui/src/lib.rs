//! stylist-tui - Terminal UI for AIstylist
//!
//! Renders [`stylist_app::AppState`] with ratatui and turns crossterm key
//! and mouse events into [`stylist_app::Message`]s.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

pub use runner::run;
