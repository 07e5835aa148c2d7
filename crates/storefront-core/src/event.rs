//! Input events: the typed messages shells dispatch into the session.

use serde::{Deserialize, Serialize};

use crate::catalog::ProductId;
use crate::pipeline::SortOrder;

/// A single user interaction, as delivered to [`crate::StoreSession::dispatch`].
///
/// Each variant updates exactly one piece of session state; the session then
/// recomputes the view snapshot and notifies subscribers. Events are plain
/// data, so shells can construct them from any input source (widget callbacks,
/// key presses, scripted test sequences).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputEvent {
    /// The search field changed; carries the full new query text.
    SearchChanged(String),
    /// A category label (or the `"All"` sentinel) was picked from the menu.
    CategorySelected(String),
    /// A sort order was picked from the menu.
    SortSelected(SortOrder),
    /// An Add to Cart control was activated for the given product.
    AddToCart(ProductId),
    /// A Remove control was activated; clears every cart entry with this id.
    RemoveFromCart(ProductId),
    /// The cart button was activated; flips the summary panel open or closed.
    CartToggled,
}
