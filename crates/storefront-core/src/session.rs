//! Store session: single owner of all UI state, driven by input events.
//!
//! Shells never mutate catalog, cart, or selection directly. They dispatch
//! [`InputEvent`]s; the session applies the event, recomputes the
//! [`ViewSnapshot`], and synchronously invokes every subscribed render hook
//! with the fresh snapshot before [`StoreSession::dispatch`] returns. One
//! event, one recompute, one notification round. There is no background
//! thread and no async machinery anywhere in the session.

use std::fmt;

use crate::cart::Cart;
use crate::catalog::Catalog;
use crate::config::StoreConfig;
use crate::event::InputEvent;
use crate::pipeline::visible_products;
use crate::selection::Selection;
use crate::view::ViewSnapshot;

/// Handle returned by [`StoreSession::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// A render hook: called with the fresh snapshot after every event.
pub type RenderHook = Box<dyn FnMut(&ViewSnapshot)>;

/// The application state container and reducer.
pub struct StoreSession {
    catalog: Catalog,
    cart: Cart,
    selection: Selection,
    currency_symbol: String,
    notice: Option<String>,
    snapshot: ViewSnapshot,
    revision: u64,
    next_subscription: u64,
    hooks: Vec<(SubscriptionId, RenderHook)>,
}

impl StoreSession {
    /// Session over the given catalog with the default `$` currency symbol.
    pub fn new(catalog: Catalog) -> Self {
        Self::with_currency(catalog, "$")
    }

    pub fn with_currency(catalog: Catalog, currency_symbol: impl Into<String>) -> Self {
        let mut session = Self {
            catalog,
            cart: Cart::new(),
            selection: Selection::new(),
            currency_symbol: currency_symbol.into(),
            notice: None,
            snapshot: ViewSnapshot::default(),
            revision: 0,
            next_subscription: 0,
            hooks: Vec::new(),
        };
        session.snapshot = session.compute_snapshot();
        session
    }

    /// Builds the startup session from configuration.
    ///
    /// Without a configured catalog path this uses the built-in catalog. With
    /// one, a retrieval failure degrades to an empty catalog plus a
    /// user-visible notice; it never aborts the session.
    pub fn bootstrap(config: &StoreConfig) -> Self {
        let (catalog, notice) = match &config.catalog_path {
            None => (Catalog::builtin(), None),
            Some(path) => match Catalog::from_json_file(path) {
                Ok(catalog) => (catalog, None),
                Err(err) => {
                    tracing::warn!(
                        target: "storefront::session",
                        path = %path,
                        error = %err,
                        "catalog retrieval failed, starting with empty catalog"
                    );
                    (
                        Catalog::empty(),
                        Some("Product catalog is currently unavailable.".to_string()),
                    )
                }
            },
        };
        tracing::info!(
            target: "storefront::session",
            shop = %config.shop_name,
            products = catalog.len(),
            degraded = notice.is_some(),
            "session ready"
        );
        let mut session = Self::with_currency(catalog, config.currency_symbol.clone());
        session.notice = notice;
        session.snapshot = session.compute_snapshot();
        session
    }

    /// Applies one event, recomputes the snapshot, and notifies subscribers.
    pub fn dispatch(&mut self, event: InputEvent) {
        tracing::debug!(target: "storefront::session", ?event, "dispatch");
        match event {
            InputEvent::SearchChanged(query) => self.selection.set_search_query(query),
            InputEvent::CategorySelected(category) => self.selection.set_category(category),
            InputEvent::SortSelected(order) => self.selection.set_sort_order(order),
            InputEvent::AddToCart(id) => match self.catalog.get(id) {
                Some(product) => self.cart.add_item(product.clone()),
                None => {
                    tracing::warn!(
                        target: "storefront::session",
                        id = %id,
                        "add to cart for unknown product id ignored"
                    );
                }
            },
            InputEvent::RemoveFromCart(id) => self.cart.remove_item(id),
            InputEvent::CartToggled => self.selection.toggle_cart_panel(),
        }
        self.revision += 1;
        self.snapshot = self.compute_snapshot();
        self.notify();
    }

    /// The current snapshot. Always consistent with the last dispatched event.
    pub fn view(&self) -> &ViewSnapshot {
        &self.snapshot
    }

    /// Registers a render hook. The hook runs synchronously on every dispatch,
    /// in subscription order, and is invoked once immediately with the current
    /// snapshot so a new shell paints without waiting for an event.
    pub fn subscribe(&mut self, mut hook: impl FnMut(&ViewSnapshot) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        hook(&self.snapshot);
        self.hooks.push((id, Box::new(hook)));
        tracing::debug!(
            target: "storefront::session",
            id = id.0,
            subscribers = self.hooks.len(),
            "render hook subscribed"
        );
        id
    }

    /// Removes a render hook. Returns whether the id was registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.hooks.len();
        self.hooks.retain(|(hook_id, _)| *hook_id != id);
        before != self.hooks.len()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// The degradation notice, if catalog retrieval failed at bootstrap.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Monotonic revision counter; bumps by one per dispatched event.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn compute_snapshot(&self) -> ViewSnapshot {
        ViewSnapshot {
            visible: visible_products(
                self.catalog.list_all(),
                self.selection.selected_category(),
                self.selection.search_query(),
                self.selection.sort_order(),
            ),
            cart_entries: self.cart.entries().to_vec(),
            cart_count: self.cart.count(),
            cart_total: self.cart.total(),
            cart_display_total: self.cart.display_total(),
            cart_panel_open: self.selection.cart_panel_open(),
            currency_symbol: self.currency_symbol.clone(),
            notice: self.notice.clone(),
            revision: self.revision,
        }
    }

    fn notify(&mut self) {
        let snapshot = &self.snapshot;
        for (_, hook) in self.hooks.iter_mut() {
            hook(snapshot);
        }
    }
}

impl fmt::Debug for StoreSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreSession")
            .field("catalog_products", &self.catalog.len())
            .field("cart_count", &self.cart.count())
            .field("selection", &self.selection)
            .field("revision", &self.revision)
            .field("subscribers", &self.hooks.len())
            .finish_non_exhaustive()
    }
}
