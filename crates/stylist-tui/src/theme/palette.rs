//! Color palette

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black;
pub const CARD_BG: Color = Color::Black;
pub const POPUP_BG: Color = Color::Rgb(28, 30, 38);

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray;
pub const BORDER_ACTIVE: Color = Color::Magenta;

// --- Accent ---
pub const ACCENT: Color = Color::Magenta;
pub const ACCENT_SOFT: Color = Color::LightMagenta;

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;
/// Foreground on accent backgrounds
pub const CONTRAST_FG: Color = Color::Black;

// --- Status ---
pub const STATUS_GREEN: Color = Color::Green;
pub const STATUS_RED: Color = Color::Red;
pub const STATUS_YELLOW: Color = Color::Yellow;
pub const STATUS_BLUE: Color = Color::Blue;

// --- Chat bubbles ---
pub const USER_BUBBLE: Color = Color::LightMagenta;
pub const ASSISTANT_BUBBLE: Color = Color::Cyan;

// --- Weather ---
pub const WEATHER_SUN: Color = Color::Yellow;
pub const WEATHER_CLOUD: Color = Color::Gray;
pub const WEATHER_WET: Color = Color::LightBlue;
pub const WEATHER_SNOW: Color = Color::White;
