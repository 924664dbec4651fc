//! Semantic style builders

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use stylist_app::toast::ToastKind;
use stylist_core::WeatherGlyph;

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

pub fn keybinding() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

pub fn error() -> Style {
    Style::default().fg(palette::STATUS_RED)
}

/// "Black on accent" - focused+selected items across widgets
pub fn focused_selected() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

pub fn toast(kind: ToastKind) -> Style {
    let color = match kind {
        ToastKind::Info => palette::STATUS_BLUE,
        ToastKind::Success => palette::STATUS_GREEN,
        ToastKind::Error => palette::STATUS_RED,
    };
    Style::default().fg(palette::CONTRAST_FG).bg(color)
}

pub fn weather(glyph: WeatherGlyph) -> Style {
    let color = match glyph {
        WeatherGlyph::Sun => palette::WEATHER_SUN,
        WeatherGlyph::Cloud => palette::WEATHER_CLOUD,
        WeatherGlyph::Rain | WeatherGlyph::Drizzle => palette::WEATHER_WET,
        WeatherGlyph::Snow => palette::WEATHER_SNOW,
    };
    Style::default().fg(color)
}

// --- Block builders ---
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
}

pub fn modal_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_active())
        .style(Style::default().bg(palette::POPUP_BG))
}
