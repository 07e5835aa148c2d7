//! View snapshot: the render-ready projection of session state.

use serde::{Deserialize, Serialize};

use crate::catalog::Product;

/// Formats a price for display: currency symbol plus 2 decimal places.
pub fn format_price(symbol: &str, price: f64) -> String {
    format!("{symbol}{price:.2}")
}

/// Everything a shell needs to paint one frame, precomputed.
///
/// A snapshot is recomputed after every dispatched event and handed to each
/// render hook by reference. It owns its data, so shells may also clone and
/// keep one across frames without borrowing the session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewSnapshot {
    /// Products the grid should show, already filtered and sorted.
    pub visible: Vec<Product>,
    /// Cart entries in insertion order, duplicates included.
    pub cart_entries: Vec<Product>,
    /// Entry count for the cart button badge.
    pub cart_count: usize,
    /// Unrounded cart total.
    pub cart_total: f64,
    /// Cart total rounded to 2 decimal places.
    pub cart_display_total: f64,
    /// Whether the cart summary panel is open.
    pub cart_panel_open: bool,
    /// Currency symbol for price formatting.
    pub currency_symbol: String,
    /// User-visible notice, set when catalog retrieval degraded.
    pub notice: Option<String>,
    /// Monotonic state revision; bumps by one per dispatched event.
    pub revision: u64,
}

impl ViewSnapshot {
    /// Formats a price with this snapshot's currency symbol.
    pub fn price_label(&self, price: f64) -> String {
        format_price(&self.currency_symbol, price)
    }

    /// The cart total line, e.g. `Total: $2099.98`.
    pub fn total_label(&self) -> String {
        format!("Total: {}", self.price_label(self.cart_display_total))
    }
}
