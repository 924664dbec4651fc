//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Greeting and weather (glass container)
    pub header: Rect,

    /// Home / Chat / Closet tab bar
    pub tabs: Rect,

    /// Active tab content
    pub body: Rect,

    /// One-line key hints
    pub hints: Rect,
}

pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Header (top border + greeting + bottom border)
        Constraint::Length(1), // Tabs
        Constraint::Min(3),    // Body
        Constraint::Length(1), // Hints
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        tabs: chunks[1],
        body: chunks[2],
        hints: chunks[3],
    }
}

/// Split the home body into the outfit card and its caption/controls row
pub fn split_home(body: Rect) -> (Rect, Rect) {
    let chunks = Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).split(body);
    (chunks[0], chunks[1])
}

/// Split the chat body into transcript and composer
pub fn split_chat(body: Rect) -> (Rect, Rect) {
    let chunks = Layout::vertical([Constraint::Min(3), Constraint::Length(3)]).split(body);
    (chunks[0], chunks[1])
}
