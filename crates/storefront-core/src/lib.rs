//! storefront-core: product catalog, filter/sort pipeline, cart, and session
//! state behind the storefront UI shells.
//!
//! Shells construct a [`StoreSession`], subscribe a render hook, and dispatch
//! [`InputEvent`]s; everything else (what is visible, what the cart holds,
//! whether the summary panel is open) is read from the [`ViewSnapshot`] the
//! session recomputes after each event.

mod cart;
mod catalog;
mod config;
mod error;
mod event;
mod pipeline;
mod selection;
mod session;
mod view;

// Catalog: product records and sourcing
pub use catalog::{Catalog, Category, Product, ProductId};

// Retrieval errors (the only fallible boundary)
pub use error::{RetrievalError, RetrievalResult};

// Visible-product pipeline
pub use pipeline::{visible_products, SortOrder, CATEGORY_ALL};

// Cart
pub use cart::Cart;

// Selection + input events
pub use event::InputEvent;
pub use selection::Selection;

// Session: reducer, snapshot, subscriptions
pub use session::{RenderHook, StoreSession, SubscriptionId};
pub use view::{format_price, ViewSnapshot};

// Configuration
pub use config::StoreConfig;
