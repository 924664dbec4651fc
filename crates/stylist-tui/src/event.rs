//! Terminal event polling

use std::time::{Duration, Instant};

use crossterm::event::{
    self, Event, KeyCode, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position, Rect};

use stylist_app::message::Message;
use stylist_app::InputKey;
use stylist_core::prelude::*;

/// Horizontal pixels represented by one terminal column when turning a mouse
/// drag into a swipe distance
pub const PIXELS_PER_COLUMN: i32 = 8;

/// Poll timeout, also the spacing between `Tick`s
pub const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Convert crossterm KeyEvent to InputKey
pub fn key_event_to_input(key: crossterm::event::KeyEvent) -> Option<InputKey> {
    match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputKey::CharCtrl(c))
        }
        KeyCode::Char(c) => Some(InputKey::Char(c)),
        KeyCode::Enter => Some(InputKey::Enter),
        KeyCode::Esc => Some(InputKey::Esc),
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => Some(InputKey::BackTab),
        KeyCode::Tab => Some(InputKey::Tab),
        KeyCode::BackTab => Some(InputKey::BackTab),
        KeyCode::Backspace => Some(InputKey::Backspace),
        KeyCode::Up => Some(InputKey::Up),
        KeyCode::Down => Some(InputKey::Down),
        KeyCode::Left => Some(InputKey::Left),
        KeyCode::Right => Some(InputKey::Right),
        _ => None, // Unsupported keys ignored
    }
}

/// Turns a left-button press/release pair over the outfit card into a swipe
#[derive(Debug, Default, Clone, Copy)]
pub struct SwipeTracker {
    start_column: Option<u16>,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a mouse event. `region` is the outfit card, if it is on screen.
    pub fn handle(&mut self, mouse: MouseEvent, region: Option<Rect>) -> Option<Message> {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let inside = region
                    .map(|r| r.contains(Position::new(mouse.column, mouse.row)))
                    .unwrap_or(false);
                self.start_column = inside.then_some(mouse.column);
                None
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let start = self.start_column.take()?;
                let dx = (i32::from(mouse.column) - i32::from(start)) * PIXELS_PER_COLUMN;
                (dx != 0).then_some(Message::Swipe { dx })
            }
            _ => None,
        }
    }
}

/// Wall-clock `Tick` source for toast expiry.
///
/// Ticks are due by elapsed time, not by poll timeouts, so a steady stream
/// of mouse motion or typing cannot hold them back.
#[derive(Debug, Clone, Copy)]
pub struct Ticker {
    interval: Duration,
    last: Instant,
}

impl Ticker {
    pub fn new(interval: Duration) -> Self {
        Self::starting_at(interval, Instant::now())
    }

    pub fn starting_at(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            last: now,
        }
    }

    /// `Some(Tick)` once `interval` has passed since the last one
    pub fn tick(&mut self, now: Instant) -> Option<Message> {
        if now.saturating_duration_since(self.last) < self.interval {
            return None;
        }
        self.last = now;
        Some(Message::Tick)
    }
}

/// Poll for terminal events with timeout
pub fn poll(swipes: &mut SwipeTracker, swipe_region: Option<Rect>) -> Result<Option<Message>> {
    if !event::poll(POLL_INTERVAL)? {
        return Ok(None);
    }

    match event::read()? {
        Event::Key(key) if key.kind == event::KeyEventKind::Press => {
            Ok(key_event_to_input(key).map(Message::Key))
        }
        Event::Mouse(mouse) => Ok(swipes.handle(mouse, swipe_region)),
        _ => Ok(None),
    }
}
