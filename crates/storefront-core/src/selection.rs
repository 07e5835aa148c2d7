//! View selection state: category, sort order, search query, cart panel.

use serde::{Deserialize, Serialize};

use crate::pipeline::{SortOrder, CATEGORY_ALL};

/// The user's current view controls.
///
/// Fields are private so mutation flows through the session reducer; shells
/// read them through the getters when painting the controls themselves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    selected_category: String,
    sort_order: SortOrder,
    search_query: String,
    cart_panel_open: bool,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            selected_category: CATEGORY_ALL.to_string(),
            sort_order: SortOrder::default(),
            search_query: String::new(),
            cart_panel_open: false,
        }
    }
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selected category label, or [`CATEGORY_ALL`].
    pub fn selected_category(&self) -> &str {
        &self.selected_category
    }

    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    /// Raw search query. Matched case-insensitively but stored as typed.
    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn cart_panel_open(&self) -> bool {
        self.cart_panel_open
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.selected_category = category.into();
    }

    pub fn set_sort_order(&mut self, order: SortOrder) {
        self.sort_order = order;
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    pub fn toggle_cart_panel(&mut self) {
        self.cart_panel_open = !self.cart_panel_open;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_show_everything_with_panel_closed() {
        let selection = Selection::new();
        assert_eq!(selection.selected_category(), CATEGORY_ALL);
        assert_eq!(selection.sort_order(), SortOrder::Default);
        assert_eq!(selection.search_query(), "");
        assert!(!selection.cart_panel_open());
    }

    #[test]
    fn toggle_flips_back_and_forth() {
        let mut selection = Selection::new();
        selection.toggle_cart_panel();
        assert!(selection.cart_panel_open());
        selection.toggle_cart_panel();
        assert!(!selection.cart_panel_open());
    }
}
