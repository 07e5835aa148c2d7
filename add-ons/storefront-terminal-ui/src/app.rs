//! Terminal shell state: the session plus cursor and search-mode handling.
//!
//! Key handling in main.rs maps key codes onto these methods. Everything that
//! changes store state goes through `StoreSession::dispatch`; the cursor and
//! the search mode are shell-local view state and mark the redraw flag
//! themselves.

use std::cell::Cell;
use std::rc::Rc;

use storefront_core::{
    Category, InputEvent, Selection, SortOrder, StoreSession, ViewSnapshot, CATEGORY_ALL,
};

pub struct TerminalApp {
    session: StoreSession,
    shop_name: String,
    dirty: Rc<Cell<bool>>,
    cursor: usize,
    search_mode: bool,
}

impl TerminalApp {
    pub fn new(mut session: StoreSession, shop_name: impl Into<String>) -> Self {
        // Redraw flag shared with the render hook: any dispatched event marks
        // the next loop iteration for a draw. The subscription's immediate
        // invocation covers the initial paint.
        let dirty = Rc::new(Cell::new(false));
        let flag = Rc::clone(&dirty);
        session.subscribe(move |_| flag.set(true));
        Self {
            session,
            shop_name: shop_name.into(),
            dirty,
            cursor: 0,
            search_mode: false,
        }
    }

    pub fn shop_name(&self) -> &str {
        &self.shop_name
    }

    pub fn snapshot(&self) -> &ViewSnapshot {
        self.session.view()
    }

    pub fn selection(&self) -> &Selection {
        self.session.selection()
    }

    /// Consumes the redraw flag; returns whether a draw is due.
    pub fn take_redraw(&mut self) -> bool {
        self.dirty.replace(false)
    }

    pub fn search_mode(&self) -> bool {
        self.search_mode
    }

    /// Cursor index into the visible products, clamped to the current grid.
    pub fn cursor(&self) -> usize {
        self.cursor
            .min(self.session.view().visible.len().saturating_sub(1))
    }

    pub fn enter_search(&mut self) {
        self.search_mode = true;
        self.dirty.set(true);
    }

    pub fn leave_search(&mut self) {
        self.search_mode = false;
        self.dirty.set(true);
    }

    pub fn push_search_char(&mut self, c: char) {
        let mut query = self.session.selection().search_query().to_string();
        query.push(c);
        self.session.dispatch(InputEvent::SearchChanged(query));
    }

    pub fn pop_search_char(&mut self) {
        let mut query = self.session.selection().search_query().to_string();
        query.pop();
        self.session.dispatch(InputEvent::SearchChanged(query));
    }

    fn category_options() -> Vec<&'static str> {
        let mut options = vec![CATEGORY_ALL];
        options.extend(Category::all().iter().map(|c| c.label()));
        options
    }

    /// Steps the category selection left (-1) or right (+1), wrapping around.
    /// The cursor resets so it always points into the new grid.
    pub fn cycle_category(&mut self, step: isize) {
        let options = Self::category_options();
        let current = self.session.selection().selected_category().to_string();
        let index = options.iter().position(|o| *o == current).unwrap_or(0);
        let len = options.len() as isize;
        let next = (index as isize + step).rem_euclid(len) as usize;
        self.cursor = 0;
        self.session
            .dispatch(InputEvent::CategorySelected(options[next].to_string()));
    }

    pub fn cycle_sort(&mut self) {
        let orders = SortOrder::all();
        let current = self.session.selection().sort_order();
        let index = orders.iter().position(|o| *o == current).unwrap_or(0);
        let next = orders[(index + 1) % orders.len()];
        self.session.dispatch(InputEvent::SortSelected(next));
    }

    pub fn move_cursor(&mut self, delta: isize) {
        let len = self.session.view().visible.len();
        if len == 0 {
            return;
        }
        let max = (len - 1) as isize;
        self.cursor = (self.cursor() as isize + delta).clamp(0, max) as usize;
        self.dirty.set(true);
    }

    pub fn add_highlighted(&mut self) {
        let id = match self.session.view().visible.get(self.cursor()) {
            Some(p) => p.id,
            None => return,
        };
        self.session.dispatch(InputEvent::AddToCart(id));
    }

    /// Removes the highlighted product's entries from the cart (every entry
    /// with that id).
    pub fn remove_highlighted(&mut self) {
        let id = match self.session.view().visible.get(self.cursor()) {
            Some(p) => p.id,
            None => return,
        };
        self.session.dispatch(InputEvent::RemoveFromCart(id));
    }

    pub fn toggle_cart(&mut self) {
        self.session.dispatch(InputEvent::CartToggled);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::Catalog;

    fn app() -> TerminalApp {
        TerminalApp::new(StoreSession::new(Catalog::builtin()), "Test Shop")
    }

    #[test]
    fn subscription_marks_initial_redraw() {
        let mut app = app();
        assert!(app.take_redraw(), "first loop iteration should draw");
        assert!(!app.take_redraw(), "flag clears after the draw");
    }

    #[test]
    fn dispatching_marks_redraw() {
        let mut app = app();
        app.take_redraw();
        app.cycle_sort();
        assert!(app.take_redraw());
    }

    #[test]
    fn category_cycling_wraps_both_ways() {
        let mut app = app();
        assert_eq!(app.selection().selected_category(), CATEGORY_ALL);
        app.cycle_category(-1);
        assert_eq!(
            app.selection().selected_category(),
            "Notebook",
            "stepping left from the sentinel wraps to the last label"
        );
        app.cycle_category(1);
        assert_eq!(app.selection().selected_category(), CATEGORY_ALL);
    }

    #[test]
    fn search_chars_flow_into_the_query() {
        let mut app = app();
        app.enter_search();
        for c in "tab".chars() {
            app.push_search_char(c);
        }
        assert_eq!(app.selection().search_query(), "tab");
        assert_eq!(app.snapshot().visible.len(), 1, "only the tablet matches");
        app.pop_search_char();
        assert_eq!(app.selection().search_query(), "ta");
    }

    #[test]
    fn cursor_clamps_to_the_visible_range() {
        let mut app = app();
        app.move_cursor(10);
        assert_eq!(app.cursor(), 3, "cursor stops at the last of 4 products");
        app.move_cursor(-10);
        assert_eq!(app.cursor(), 0);
    }

    #[test]
    fn highlighted_product_flows_into_the_cart() {
        let mut app = app();
        app.move_cursor(1);
        app.add_highlighted();
        assert_eq!(app.snapshot().cart_count, 1);
        assert_eq!(app.snapshot().cart_entries[0].name, "Galaxy Tab S9+");
        app.remove_highlighted();
        assert_eq!(app.snapshot().cart_count, 0);
    }

    #[test]
    fn narrowing_filters_resets_the_cursor() {
        let mut app = app();
        app.move_cursor(3);
        app.cycle_category(1);
        assert_eq!(app.cursor(), 0);
        assert_eq!(app.snapshot().visible.len(), 1, "Mobile narrows to the phone");
    }
}
