//! Toast notifications, stacked in the top-right corner of the body

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use stylist_app::toast::{ToastKind, ToastQueue};

use crate::theme::{palette, styles};

use super::truncate;

const TOAST_WIDTH: u16 = 44;
const TOAST_HEIGHT: u16 = 3;

pub struct ToastStack<'a> {
    toasts: &'a ToastQueue,
}

impl<'a> ToastStack<'a> {
    pub fn new(toasts: &'a ToastQueue) -> Self {
        Self { toasts }
    }
}

impl Widget for ToastStack<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = TOAST_WIDTH.min(area.width);
        if width < 6 {
            return;
        }
        let x = area.x + area.width - width;

        // Newest on top
        for (row, toast) in self.toasts.iter().rev().enumerate() {
            let y = area.y + row as u16 * TOAST_HEIGHT;
            if y + TOAST_HEIGHT > area.y + area.height {
                break;
            }
            let rect = Rect::new(x, y, width, TOAST_HEIGHT);
            let icon = match toast.kind {
                ToastKind::Info => "ℹ",
                ToastKind::Success => "✓",
                ToastKind::Error => "✗",
            };

            Clear.render(rect, buf);
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(styles::toast(toast.kind))
                .style(Style::default().bg(palette::POPUP_BG));
            let inner = block.inner(rect);
            block.render(rect, buf);

            let text = truncate(&toast.text, (inner.width as usize).saturating_sub(2));
            Paragraph::new(Line::from(vec![
                Span::styled(format!("{} ", icon), styles::toast(toast.kind)),
                Span::styled(text, styles::text_primary()),
            ]))
            .render(inner, buf);
        }
    }
}
