//! Top-level tab navigation

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Home,
    Chat,
    Closet,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Home, Tab::Chat, Tab::Closet];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Chat => "Chat",
            Tab::Closet => "Closet",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Tab::Home => 0,
            Tab::Chat => 1,
            Tab::Closet => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<Tab> {
        Self::ALL.get(index).copied()
    }
}

/// Which tab is showing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TabNavigation {
    active: Tab,
}

impl TabNavigation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Tab {
        self.active
    }

    /// Switch tabs. Returns true when the closet must be refetched, which is
    /// on every selection of the closet tab, even if it is already active.
    pub fn select(&mut self, tab: Tab) -> bool {
        self.active = tab;
        tab == Tab::Closet
    }

    pub fn next(&mut self) -> bool {
        let tab = Tab::ALL[(self.active.index() + 1) % Tab::ALL.len()];
        self.select(tab)
    }

    pub fn prev(&mut self) -> bool {
        let len = Tab::ALL.len();
        let tab = Tab::ALL[(self.active.index() + len - 1) % len];
        self.select(tab)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_tab_is_home() {
        assert_eq!(TabNavigation::new().active(), Tab::Home);
    }

    #[test]
    fn test_only_closet_requests_load() {
        let mut tabs = TabNavigation::new();
        assert!(!tabs.select(Tab::Chat));
        assert!(tabs.select(Tab::Closet));
        assert!(!tabs.select(Tab::Home));
    }

    #[test]
    fn test_reselecting_closet_requests_load_again() {
        let mut tabs = TabNavigation::new();
        assert!(tabs.select(Tab::Closet));
        assert!(tabs.select(Tab::Closet));
    }

    #[test]
    fn test_cycling_wraps() {
        let mut tabs = TabNavigation::new();
        assert!(tabs.prev());
        assert_eq!(tabs.active(), Tab::Closet);
        assert!(!tabs.next());
        assert_eq!(tabs.active(), Tab::Home);
        assert!(!tabs.next());
        assert_eq!(tabs.active(), Tab::Chat);
        assert!(tabs.next());
        assert_eq!(tabs.active(), Tab::Closet);
    }

    #[test]
    fn test_from_index() {
        assert_eq!(Tab::from_index(1), Some(Tab::Chat));
        assert_eq!(Tab::from_index(3), None);
    }
}
