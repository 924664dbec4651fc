//! Closet tab: category chips, search line and item list

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use stylist_app::closet::ClosetStore;
use stylist_core::CategoryFilter;

use crate::theme::styles;

use super::truncate;

pub struct ClosetView<'a> {
    closet: &'a ClosetStore,
    search_focused: bool,
}

impl<'a> ClosetView<'a> {
    pub fn new(closet: &'a ClosetStore, search_focused: bool) -> Self {
        Self {
            closet,
            search_focused,
        }
    }

    fn filter_line(&self) -> Line<'static> {
        let active = self.closet.filter();
        let mut spans = Vec::new();
        for choice in CategoryFilter::choices() {
            let style = if &choice == active {
                styles::focused_selected()
            } else {
                styles::text_secondary()
            };
            spans.push(Span::styled(format!(" {} ", choice.label()), style));
            spans.push(Span::raw(" "));
        }
        if let CategoryFilter::Unknown(name) = active {
            spans.push(Span::styled(format!(" {} ", name), styles::focused_selected()));
        }
        Line::from(spans)
    }

    fn search_line(&self) -> Option<Line<'static>> {
        let query = self.closet.query();
        if query.is_empty() && !self.search_focused {
            return None;
        }
        let mut spans = vec![
            Span::styled("/ ", styles::keybinding()),
            Span::styled(query.to_string(), styles::text_primary()),
        ];
        if self.search_focused {
            spans.push(Span::styled("▏", styles::accent()));
        }
        Some(Line::from(spans))
    }

    fn item_lines(&self, width: usize) -> Vec<Line<'static>> {
        let selected = self.closet.selected_index();
        let mut lines = Vec::new();
        for (i, item) in self.closet.visible().into_iter().enumerate() {
            let is_selected = i == selected;
            let marker = if is_selected { "▸ " } else { "  " };
            let name_style = if is_selected {
                styles::focused_selected()
            } else {
                styles::accent_bold()
            };
            let name = truncate(item.display_name(), width.saturating_sub(20).max(8));
            lines.push(Line::from(vec![
                Span::styled(marker, styles::accent()),
                Span::styled(name, name_style),
                Span::styled(format!("  {}", item.category.label()), styles::text_muted()),
            ]));
            lines.push(Line::from(Span::styled(
                format!("  {}", truncate(&item.preview(), width.saturating_sub(2))),
                styles::text_secondary(),
            )));
        }
        lines
    }
}

impl Widget for ClosetView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.search_focused).title(" My closet ");
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height < 3 || inner.width == 0 {
            return;
        }

        let search = self.search_line();
        let search_height = u16::from(search.is_some());
        let [chips, search_area, _, list] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(search_height),
            Constraint::Length(1),
            Constraint::Min(1),
        ])
        .areas(inner);

        Paragraph::new(self.filter_line()).render(chips, buf);
        if let Some(line) = search {
            Paragraph::new(line).render(search_area, buf);
        }

        if self.closet.is_loading() && self.closet.items().is_empty() {
            Paragraph::new(Span::styled("Loading closet...", styles::text_muted()))
                .alignment(Alignment::Center)
                .render(list, buf);
            return;
        }

        let lines = self.item_lines(list.width as usize);
        if lines.is_empty() {
            let text = if self.closet.items().is_empty() {
                "Your closet is empty. Press u to upload an item."
            } else {
                "No items match."
            };
            Paragraph::new(Span::styled(text, styles::text_muted()))
                .alignment(Alignment::Center)
                .render(list, buf);
            return;
        }

        // Two lines per item; keep the selection on screen
        let selected_row = self.closet.selected_index() * 2;
        let height = list.height as usize;
        let skip = (selected_row + 2).saturating_sub(height);
        let visible: Vec<Line> = lines.into_iter().skip(skip).collect();
        Paragraph::new(visible).render(list, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use stylist_backend::test_utils::test_closet;
    use stylist_core::Category;

    fn loaded_closet() -> ClosetStore {
        let mut closet = ClosetStore::new();
        closet.replace(test_closet());
        closet
    }

    #[test]
    fn test_lists_items_without_txt_suffix() {
        let closet = loaded_closet();
        let mut term = TestTerminal::new();
        term.render_widget(ClosetView::new(&closet, false), term.area());

        assert!(term.buffer_contains("beige-sweater"));
        assert!(!term.buffer_contains("beige-sweater.txt"));
        assert!(term.buffer_contains("ankle-boots"));
    }

    #[test]
    fn test_shows_all_category_chips() {
        let closet = loaded_closet();
        let mut term = TestTerminal::new();
        term.render_widget(ClosetView::new(&closet, false), term.area());

        assert!(term.buffer_contains(" All "));
        assert!(term.buffer_contains(" Tops "));
        assert!(term.buffer_contains(" Shoes "));
    }

    #[test]
    fn test_filter_hides_other_categories() {
        let mut closet = loaded_closet();
        closet.set_filter(CategoryFilter::Only(Category::Bottoms));

        let mut term = TestTerminal::new();
        term.render_widget(ClosetView::new(&closet, false), term.area());

        assert!(term.buffer_contains("dark-jeans"));
        assert!(!term.buffer_contains("trench-coat"));
    }

    #[test]
    fn test_search_line_shows_query() {
        let mut closet = loaded_closet();
        closet.set_query("coat");

        let mut term = TestTerminal::new();
        term.render_widget(ClosetView::new(&closet, false), term.area());

        assert!(term.buffer_contains("/ coat"));
        assert!(term.buffer_contains("trench-coat"));
        assert!(!term.buffer_contains("dark-jeans"));
    }

    #[test]
    fn test_empty_closet_prompt() {
        let mut closet = ClosetStore::new();
        closet.replace(Vec::new());

        let mut term = TestTerminal::new();
        term.render_widget(ClosetView::new(&closet, false), term.area());

        assert!(term.buffer_contains("Your closet is empty"));
    }

    #[test]
    fn test_loading_placeholder() {
        let mut closet = ClosetStore::new();
        closet.begin_load();

        let mut term = TestTerminal::new();
        term.render_widget(ClosetView::new(&closet, false), term.area());

        assert!(term.buffer_contains("Loading closet..."));
    }
}
