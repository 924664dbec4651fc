//! Home tab: the outfit carousel

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use stylist_app::carousel::OutfitCarousel;
use stylist_core::Outfit;

use crate::theme::styles;

/// The current outfit, or a loading/empty placeholder
pub struct OutfitCard<'a> {
    carousel: &'a OutfitCarousel,
}

impl<'a> OutfitCard<'a> {
    pub fn new(carousel: &'a OutfitCarousel) -> Self {
        Self { carousel }
    }

    fn outfit_lines(outfit: &Outfit) -> Vec<Line<'static>> {
        let mut lines = vec![Line::from(Span::styled(
            outfit.name.clone(),
            styles::accent_bold(),
        ))];

        if let Some(url) = &outfit.image_url {
            lines.push(Line::from(vec![
                Span::styled("image  ", styles::text_muted()),
                Span::styled(url.clone(), styles::text_secondary()),
            ]));
        }
        if !outfit.occasion.is_empty() {
            lines.push(Line::from(vec![
                Span::styled("for    ", styles::text_muted()),
                Span::styled(outfit.occasion.clone(), styles::text_primary()),
            ]));
        }
        if !outfit.weather_condition.is_empty() || outfit.temperature.is_some() {
            let mut weather = outfit.weather_condition.clone();
            if let Some(t) = outfit.temperature {
                if !weather.is_empty() {
                    weather.push_str(", ");
                }
                weather.push_str(&format!("{}°C", t.round() as i64));
            }
            lines.push(Line::from(vec![
                Span::styled("wear   ", styles::text_muted()),
                Span::styled(weather, styles::text_primary()),
            ]));
        }
        if !outfit.description.is_empty() {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                outfit.description.clone(),
                styles::text_secondary(),
            )));
        }
        lines
    }
}

impl Widget for OutfitCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(true).title(" Today's outfits ");
        let inner = block.inner(area);
        block.render(area, buf);

        let placeholder = |text: &'static str| {
            Paragraph::new(Line::from(Span::styled(text, styles::text_muted())))
                .alignment(Alignment::Center)
        };

        match self.carousel.current() {
            Some(outfit) => Paragraph::new(Self::outfit_lines(outfit))
                .wrap(Wrap { trim: true })
                .render(inner, buf),
            None if self.carousel.is_pending() => {
                placeholder("Finding outfits for you...").render(inner, buf)
            }
            None if self.carousel.is_loaded() => {
                placeholder("No outfits yet. Press g to generate.").render(inner, buf)
            }
            None => placeholder("Loading outfits...").render(inner, buf),
        }
    }
}

/// Navigation row under the card; a loading notice while a batch is pending
pub struct OutfitControls<'a> {
    carousel: &'a OutfitCarousel,
}

impl<'a> OutfitControls<'a> {
    pub fn new(carousel: &'a OutfitCarousel) -> Self {
        Self { carousel }
    }
}

impl Widget for OutfitControls<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = if self.carousel.is_pending() {
            Line::from(Span::styled("Generating outfits...", styles::accent()))
        } else if self.carousel.is_empty() {
            Line::default()
        } else {
            Line::from(vec![
                Span::styled("‹ h", styles::keybinding()),
                Span::styled(
                    format!("  {} / {}  ", self.carousel.index() + 1, self.carousel.len()),
                    styles::text_primary(),
                ),
                Span::styled("l ›", styles::keybinding()),
            ])
        };
        Paragraph::new(line)
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}
