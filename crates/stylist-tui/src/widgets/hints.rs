//! Bottom line of key hints for the current input mode

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use stylist_app::modal::ModalId;
use stylist_app::tabs::Tab;
use stylist_app::UiMode;

use crate::theme::styles;

pub struct KeyHints {
    mode: UiMode,
    tab: Tab,
}

impl KeyHints {
    pub fn new(mode: UiMode, tab: Tab) -> Self {
        Self { mode, tab }
    }

    fn pairs(&self) -> &'static [(&'static str, &'static str)] {
        match self.mode {
            UiMode::Normal => match self.tab {
                Tab::Home => &[
                    ("h/l", "browse"),
                    ("g", "refresh"),
                    ("o", "generate"),
                    ("1-3", "tabs"),
                    ("q", "quit"),
                ],
                Tab::Chat => &[
                    ("i", "type"),
                    ("a", "attach"),
                    ("x", "clear image"),
                    ("s", "suggest"),
                    ("q", "quit"),
                ],
                Tab::Closet => &[
                    ("←/→", "category"),
                    ("j/k", "select"),
                    ("/", "search"),
                    ("u", "upload"),
                    ("d", "delete"),
                    ("r", "reload"),
                    ("q", "quit"),
                ],
            },
            UiMode::ComposerInput => &[("Enter", "send"), ("Esc", "done")],
            UiMode::SearchInput => &[("Enter", "done"), ("Esc", "done")],
            UiMode::TrialExpired => &[("s", "subscribe"), ("q", "quit")],
            UiMode::Modal(ModalId::Upload) => &[("Enter", "analyze"), ("Esc", "cancel")],
            UiMode::Modal(ModalId::OutfitForm) => &[
                ("Tab", "field"),
                ("←/→", "choose"),
                ("Enter", "generate"),
                ("Esc", "close"),
            ],
            UiMode::Modal(ModalId::OutfitResult) => &[("Enter", "close")],
            UiMode::FilePicker => &[("Enter", "choose"), ("Esc", "cancel")],
            UiMode::ConfirmDelete => &[("y", "delete"), ("n", "keep")],
            UiMode::Alert => &[("Enter", "OK")],
        }
    }
}

impl Widget for KeyHints {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![Span::raw(" ")];
        for (i, (key, label)) in self.pairs().iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ", styles::text_muted()));
            }
            spans.push(Span::styled(*key, styles::keybinding()));
            spans.push(Span::styled(format!(" {}", label), styles::text_muted()));
        }
        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
