//! Client-side cache of the user's closet
//!
//! The cache mirrors the server and is only ever replaced wholesale by a load
//! or shrunk by a confirmed delete. The category filter and search box are
//! views over it and never touch it.

use stylist_core::{CategoryFilter, ClothingItem};

/// Items of `items` that belong to `filter`. `All` returns everything.
pub fn filter_items(items: &[ClothingItem], filter: &CategoryFilter) -> Vec<ClothingItem> {
    items
        .iter()
        .filter(|item| filter.matches(item))
        .cloned()
        .collect()
}

#[derive(Debug, Clone, Default)]
pub struct ClosetStore {
    items: Vec<ClothingItem>,
    filter: CategoryFilter,
    query: String,
    selected: usize,
    loading: bool,
    pending_delete: Option<String>,
}

impl ClosetStore {
    pub fn new() -> Self {
        Self::default()
    }

    // ─────────────────────────────────────────────────────────
    // Cache
    // ─────────────────────────────────────────────────────────

    pub fn items(&self) -> &[ClothingItem] {
        &self.items
    }

    pub fn contains(&self, file: &str) -> bool {
        self.items.iter().any(|item| item.file == file)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    /// Replace the cache with a fresh server listing
    pub fn replace(&mut self, items: Vec<ClothingItem>) {
        self.items = items;
        self.loading = false;
        self.clamp_selection();
    }

    pub fn load_failed(&mut self) {
        self.loading = false;
    }

    /// Drop an item after the server confirmed the delete
    pub fn remove(&mut self, file: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.file != file);
        self.clamp_selection();
        self.items.len() != before
    }

    // ─────────────────────────────────────────────────────────
    // Views
    // ─────────────────────────────────────────────────────────

    pub fn filter(&self) -> &CategoryFilter {
        &self.filter
    }

    pub fn set_filter(&mut self, filter: CategoryFilter) {
        self.filter = filter;
        self.selected = 0;
    }

    /// Step through `All` and the known categories
    pub fn cycle_filter(&mut self, forward: bool) {
        let choices = CategoryFilter::choices();
        let len = choices.len();
        let next = match choices.iter().position(|c| *c == self.filter) {
            Some(i) if forward => (i + 1) % len,
            Some(i) => (i + len - 1) % len,
            None => 0,
        };
        self.set_filter(choices[next].clone());
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.clamp_selection();
    }

    /// Items passing the category filter, then the search query
    pub fn visible(&self) -> Vec<&ClothingItem> {
        self.items
            .iter()
            .filter(|item| self.filter.matches(item))
            .filter(|item| item.matches_query(&self.query))
            .collect()
    }

    // ─────────────────────────────────────────────────────────
    // Selection
    // ─────────────────────────────────────────────────────────

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected(&self) -> Option<&ClothingItem> {
        self.visible().get(self.selected).copied()
    }

    pub fn select_next(&mut self) {
        let len = self.visible().len();
        if len > 0 {
            self.selected = (self.selected + 1).min(len - 1);
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn clamp_selection(&mut self) {
        let len = self.visible().len();
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }

    // ─────────────────────────────────────────────────────────
    // Delete confirmation
    // ─────────────────────────────────────────────────────────

    /// Ask to delete `file`. Returns false, and asks nothing, when the item
    /// is not in the cache.
    pub fn request_delete(&mut self, file: &str) -> bool {
        if !self.contains(file) {
            return false;
        }
        self.pending_delete = Some(file.to_string());
        true
    }

    pub fn pending_delete(&self) -> Option<&str> {
        self.pending_delete.as_deref()
    }

    /// The user said yes; hand back the file to delete
    pub fn confirm_delete(&mut self) -> Option<String> {
        self.pending_delete.take()
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }
}
