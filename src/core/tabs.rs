use crate::models::tab::Tab;

/// Which tab is active. Flat: no history, no sub-states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabController {
    tabs: Vec<Tab>,
    active: Tab,
}

impl TabController {
    /// `initial` falls back to the first tab when it is not offered.
    pub fn new(tabs: Vec<Tab>, initial: Tab) -> Self {
        let active = if tabs.contains(&initial) {
            initial
        } else {
            tabs.first().copied().unwrap_or(initial)
        };
        Self { tabs, active }
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn active(&self) -> Tab {
        self.active
    }

    /// Map a user selector to one of the offered tabs.
    pub fn resolve(&self, selector: &str) -> Option<Tab> {
        Tab::parse(selector).filter(|t| self.tabs.contains(t))
    }

    pub fn select(&mut self, tab: Tab) {
        self.active = tab;
    }
}
