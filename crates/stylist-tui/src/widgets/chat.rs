//! Chat tab: transcript and composer

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use stylist_app::chat::{ChatSession, SUGGESTED_QUESTIONS};
use stylist_core::ChatMessage;

use crate::theme::{palette, styles};

use super::{truncate, wrap_text};

/// The transcript, newest at the bottom
pub struct ChatTranscript<'a> {
    chat: &'a ChatSession,
}

impl<'a> ChatTranscript<'a> {
    pub fn new(chat: &'a ChatSession) -> Self {
        Self { chat }
    }

    fn message_lines(message: &ChatMessage, width: usize) -> Vec<Line<'static>> {
        let (who, color) = if message.is_from_user {
            ("You", palette::USER_BUBBLE)
        } else {
            ("Stylist", palette::ASSISTANT_BUBBLE)
        };

        let mut lines = vec![Line::from(vec![
            Span::styled(
                who,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", message.timestamp.format("%H:%M")),
                styles::text_muted(),
            ),
        ])];

        if message.image_url.is_some() {
            lines.push(Line::from(Span::styled("[image attached]", styles::accent())));
        }
        if !message.text.is_empty() {
            lines.extend(
                wrap_text(&message.text, width)
                    .into_iter()
                    .map(|l| Line::from(Span::styled(l, styles::text_primary()))),
            );
        }
        lines.push(Line::default());
        lines
    }

    fn welcome_lines() -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::from(Span::styled(
                "Ask your stylist anything. Try one of these (s):",
                styles::text_secondary(),
            )),
            Line::default(),
        ];
        lines.extend(
            SUGGESTED_QUESTIONS
                .iter()
                .map(|q| Line::from(Span::styled(format!("  • {}", q), styles::accent()))),
        );
        lines
    }
}

impl Widget for ChatTranscript<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).title(" Stylist chat ");
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        if self.chat.is_empty() {
            Paragraph::new(Self::welcome_lines()).render(inner, buf);
            return;
        }

        let width = inner.width as usize;
        let mut lines: Vec<Line> = self
            .chat
            .messages()
            .iter()
            .flat_map(|m| Self::message_lines(m, width))
            .collect();
        if self.chat.is_waiting() {
            lines.push(Line::from(Span::styled(
                "Stylist is typing...",
                styles::text_muted().add_modifier(Modifier::ITALIC),
            )));
        }

        // Keep the newest lines in view
        let skip = lines.len().saturating_sub(inner.height as usize);
        let visible: Vec<Line> = lines.into_iter().skip(skip).collect();
        Paragraph::new(visible).render(inner, buf);
    }
}

/// Single-line message box; shows the staged image in its title
pub struct Composer<'a> {
    chat: &'a ChatSession,
    focused: bool,
}

impl<'a> Composer<'a> {
    pub fn new(chat: &'a ChatSession, focused: bool) -> Self {
        Self { chat, focused }
    }
}

impl Widget for Composer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = match &self.chat.staged_image {
            Some(image) => format!(" Message · {} attached ", image.file_name()),
            None => " Message ".to_string(),
        };
        let block = styles::glass_block(self.focused).title(title);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 {
            return;
        }

        let line = if self.chat.composer.is_empty() && !self.focused {
            Line::from(Span::styled(
                "Press i to type, a to attach a photo",
                styles::text_muted(),
            ))
        } else {
            // Show the tail of long input so the cursor stays visible
            let max = (inner.width as usize).saturating_sub(1);
            let text: String = {
                let chars: Vec<char> = self.chat.composer.chars().collect();
                let start = chars.len().saturating_sub(max);
                chars[start..].iter().collect()
            };
            let mut spans = vec![Span::styled(truncate(&text, max), styles::text_primary())];
            if self.focused {
                spans.push(Span::styled("▏", styles::accent()));
            }
            Line::from(spans)
        };
        Paragraph::new(line).render(inner, buf);
    }
}
