//! Header bar: greeting and current weather

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use stylist_core::{UserSession, WeatherSnapshot, FALLBACK_CONDITION, FALLBACK_TEMPERATURE};

use crate::theme::{palette, styles};

/// `Good morning, <name>!` on the left, weather glyph and temperature on the right
pub struct MainHeader<'a> {
    session: &'a UserSession,
    weather: Option<&'a WeatherSnapshot>,
}

impl<'a> MainHeader<'a> {
    pub fn new(session: &'a UserSession, weather: Option<&'a WeatherSnapshot>) -> Self {
        Self { session, weather }
    }

    fn weather_line(&self) -> Line<'static> {
        // Placeholder until the startup fetch lands (or if it failed)
        let fallback;
        let weather = match self.weather {
            Some(weather) => weather,
            None => {
                fallback = WeatherSnapshot::new(FALLBACK_CONDITION, FALLBACK_TEMPERATURE);
                &fallback
            }
        };
        let glyph = weather.glyph();

        Line::from(vec![
            Span::styled(glyph.symbol().to_string(), styles::weather(glyph)),
            Span::raw(" "),
            Span::styled(weather.temperature_label(), styles::text_primary()),
            Span::raw(" "),
            Span::styled(weather.condition.clone(), styles::text_secondary()),
            Span::raw(" "),
        ])
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let greeting = Line::from(vec![
            Span::raw(" "),
            Span::styled(self.session.greeting(), styles::accent_bold()),
        ]);
        Paragraph::new(greeting).render(inner, buf);

        Paragraph::new(self.weather_line())
            .alignment(Alignment::Right)
            .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_header_greets_first_name() {
        let session = UserSession::new("Ada Lovelace", None);
        let mut term = TestTerminal::new();
        let area = Rect::new(0, 0, 80, 3);

        term.render_widget(MainHeader::new(&session, None), area);

        assert!(term.buffer_contains("Good morning, Ada!"));
    }

    #[test]
    fn test_header_shows_weather() {
        let session = UserSession::new("Ada", None);
        let weather = WeatherSnapshot::new("Light rain", 14.2);
        let mut term = TestTerminal::new();

        term.render_widget(MainHeader::new(&session, Some(&weather)), Rect::new(0, 0, 80, 3));

        assert!(term.buffer_contains("14°C"));
        assert!(term.buffer_contains("Light rain"));
    }

    #[test]
    fn test_header_falls_back_to_sunny() {
        let session = UserSession::new("", None);
        let mut term = TestTerminal::new();

        term.render_widget(MainHeader::new(&session, None), Rect::new(0, 0, 80, 3));

        assert!(term.buffer_contains("Good morning, there!"));
        assert!(term.buffer_contains("22°C"));
        assert!(term.buffer_contains("Sunny"));
    }
}
