//! Visible-product pipeline: category filter, then search filter, then sort.
//!
//! The pipeline is a pure function of the catalog and the current selection.
//! It never mutates the catalog and recomputes from the full product list on
//! every call, so filters and sorts compose without ordering bugs.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::catalog::Product;

/// Category menu sentinel that disables category filtering.
pub const CATEGORY_ALL: &str = "All";

/// Sort order applied after filtering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Catalog enumeration order, unchanged.
    #[default]
    Default,
    PriceAscending,
    PriceDescending,
}

impl SortOrder {
    /// Display label, as shown in the sort menu.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Default => "Sort by",
            Self::PriceAscending => "Price: Low to High",
            Self::PriceDescending => "Price: High to Low",
        }
    }

    /// All orders in menu order.
    pub fn all() -> [Self; 3] {
        [Self::Default, Self::PriceAscending, Self::PriceDescending]
    }
}

/// Computes the product list the grid should render.
///
/// Filters are conjunctive: a product must match the selected category (or
/// the category must be [`CATEGORY_ALL`]) and contain the search query in its
/// name, case-insensitively. An all-whitespace query still filters literally
/// on the whitespace. The sort is stable, so equal prices keep their catalog
/// order, and [`SortOrder::Default`] keeps catalog order outright.
pub fn visible_products(
    all: &[Product],
    category: &str,
    query: &str,
    order: SortOrder,
) -> Vec<Product> {
    let needle = query.to_lowercase();
    let mut kept: Vec<Product> = all
        .iter()
        .filter(|p| category == CATEGORY_ALL || p.category.label() == category)
        .filter(|p| needle.is_empty() || p.name.to_lowercase().contains(&needle))
        .cloned()
        .collect();
    match order {
        SortOrder::Default => {}
        SortOrder::PriceAscending => {
            kept.sort_by(|a, b| a.price.partial_cmp(&b.price).unwrap_or(Ordering::Equal));
        }
        SortOrder::PriceDescending => {
            kept.sort_by(|a, b| b.price.partial_cmp(&a.price).unwrap_or(Ordering::Equal));
        }
    }
    kept
}
