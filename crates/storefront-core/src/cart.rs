//! In-memory shopping cart.
//!
//! The cart is a list of product entries, not a quantity map: adding the same
//! product twice appends two entries. Removal is by product id and removes
//! every entry with that id at once, so after any remove the cart holds no
//! entry for that product. The add-one/remove-all asymmetry is intentional
//! and the Remove control is labelled accordingly.

use crate::catalog::{Product, ProductId};

/// Session-lifetime cart. Not persisted.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    entries: Vec<Product>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a product entry. Duplicates are separate entries.
    pub fn add_item(&mut self, product: Product) {
        tracing::debug!(
            target: "storefront::cart",
            id = %product.id,
            name = %product.name,
            "cart add"
        );
        self.entries.push(product);
    }

    /// Removes every entry with the given id. A miss is a no-op.
    pub fn remove_item(&mut self, id: ProductId) {
        let before = self.entries.len();
        self.entries.retain(|p| p.id != id);
        let removed = before - self.entries.len();
        if removed > 0 {
            tracing::debug!(target: "storefront::cart", id = %id, removed, "cart remove");
        }
    }

    /// Sum of entry prices, unrounded.
    pub fn total(&self) -> f64 {
        self.entries.iter().map(|p| p.price).sum()
    }

    /// Total rounded to 2 decimal places for display.
    pub fn display_total(&self) -> f64 {
        (self.total() * 100.0).round() / 100.0
    }

    /// Number of entries, counting duplicates separately.
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[Product] {
        &self.entries
    }

    /// Whether any entry has the given id.
    pub fn contains(&self, id: ProductId) -> bool {
        self.entries.iter().any(|p| p.id == id)
    }
}
