//! Full-screen notice shown once the free trial has ended

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::theme::styles;

use super::modal_overlay::centered_rect;

pub struct TrialExpiredScreen {
    checkout_pending: bool,
}

impl TrialExpiredScreen {
    pub fn new(checkout_pending: bool) -> Self {
        Self { checkout_pending }
    }
}

impl Widget for TrialExpiredScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rect = centered_rect(56, 9, area);
        let block = styles::glass_block(true).title(" Your free trial has ended ");
        let inner = block.inner(rect);
        block.render(rect, buf);

        let action = if self.checkout_pending {
            Line::from(Span::styled("Preparing checkout...", styles::accent()))
        } else {
            Line::from(vec![
                Span::styled("s", styles::keybinding()),
                Span::styled(" to get a checkout link   ", styles::text_muted()),
                Span::styled("q", styles::keybinding()),
                Span::styled(" to quit", styles::text_muted()),
            ])
        };

        let lines = vec![
            Line::from(Span::styled(
                "Subscribe to keep getting outfit ideas,",
                styles::text_primary(),
            )),
            Line::from(Span::styled(
                "stylist chat and closet analysis.",
                styles::text_primary(),
            )),
            Line::default(),
            action,
        ];
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}
