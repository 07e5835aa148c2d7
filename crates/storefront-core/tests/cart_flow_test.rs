//! Integration test: cart flows through the session. Verifies add, remove,
//! count, and total semantics as driven by dispatched input events.
//!
//! ## Scenarios
//! 1. Adding two distinct products yields count 2 and the rounded total.
//! 2. Adding the same product twice yields two separate entries.
//! 3. Removing by id clears every entry with that id.
//! 4. Removing an id not in the cart changes nothing.
//! 5. Adding an id the catalog does not know is ignored.
//! 6. The cart is independent of the active filters.
//! 7. An empty cart reads as zero count and a zero total.

use storefront_core::{Catalog, InputEvent, ProductId, StoreSession};

// ---------------------------------------------------------------------------
// Helper: session over the built-in catalog
// ---------------------------------------------------------------------------

fn session() -> StoreSession {
    StoreSession::new(Catalog::builtin())
}

const PHONE: ProductId = ProductId(1); // Galaxy S23 Ultra, 1199.99
const TABLET: ProductId = ProductId(2); // Galaxy Tab S9+, 899.99

// ===========================================================================
// Test 1: Two distinct products, count and rounded total
// ===========================================================================

#[test]
fn two_distinct_products_total_to_the_cent() {
    let mut session = session();
    session.dispatch(InputEvent::AddToCart(PHONE));
    session.dispatch(InputEvent::AddToCart(TABLET));

    let snapshot = session.view();
    assert_eq!(snapshot.cart_count, 2);
    assert_eq!(
        snapshot.cart_display_total, 2099.98,
        "1199.99 + 899.99 should display as 2099.98"
    );
    assert_eq!(snapshot.total_label(), "Total: $2099.98");
}

// ===========================================================================
// Test 2: Duplicate adds are separate entries
// ===========================================================================

#[test]
fn duplicate_adds_create_two_entries() {
    let mut session = session();
    session.dispatch(InputEvent::AddToCart(PHONE));
    session.dispatch(InputEvent::AddToCart(PHONE));

    let snapshot = session.view();
    assert_eq!(snapshot.cart_count, 2, "same product twice should count twice");
    assert!(snapshot.cart_entries.iter().all(|p| p.id == PHONE));
    assert_eq!(snapshot.cart_display_total, 2399.98);
}

// ===========================================================================
// Test 3: Remove clears every entry with the id
// ===========================================================================

#[test]
fn remove_clears_all_entries_for_the_product() {
    let mut session = session();
    session.dispatch(InputEvent::AddToCart(PHONE));
    session.dispatch(InputEvent::AddToCart(TABLET));
    session.dispatch(InputEvent::AddToCart(PHONE));

    session.dispatch(InputEvent::RemoveFromCart(PHONE));

    let snapshot = session.view();
    assert_eq!(
        snapshot.cart_count, 1,
        "both phone entries should be gone, got {:?}",
        snapshot.cart_entries
    );
    assert_eq!(snapshot.cart_entries[0].id, TABLET);
    assert_eq!(snapshot.cart_display_total, 899.99);
}

// ===========================================================================
// Test 4: Remove miss changes nothing
// ===========================================================================

#[test]
fn removing_an_absent_product_is_a_no_op() {
    let mut session = session();
    session.dispatch(InputEvent::AddToCart(TABLET));

    session.dispatch(InputEvent::RemoveFromCart(ProductId(99)));

    let snapshot = session.view();
    assert_eq!(snapshot.cart_count, 1);
    assert_eq!(snapshot.cart_entries[0].id, TABLET);
}

// ===========================================================================
// Test 5: Unknown product id is ignored
// ===========================================================================

#[test]
fn adding_an_unknown_id_leaves_the_cart_alone() {
    let mut session = session();
    session.dispatch(InputEvent::AddToCart(ProductId(404)));

    let snapshot = session.view();
    assert_eq!(snapshot.cart_count, 0, "unknown id must not create an entry");
    assert_eq!(snapshot.cart_total, 0.0);
}

// ===========================================================================
// Test 6: Cart contents are independent of the filters
// ===========================================================================

#[test]
fn filters_do_not_touch_the_cart() {
    let mut session = session();

    // Narrow the grid to tablets, then add the phone by id anyway.
    session.dispatch(InputEvent::CategorySelected("Tablet".to_string()));
    session.dispatch(InputEvent::AddToCart(PHONE));

    let snapshot = session.view();
    assert_eq!(snapshot.visible.len(), 1, "grid should show only the tablet");
    assert_eq!(snapshot.cart_count, 1, "cart add works regardless of the grid");
    assert_eq!(snapshot.cart_entries[0].id, PHONE);

    // Searching afterwards leaves the cart untouched.
    session.dispatch(InputEvent::SearchChanged("nothing-matches".to_string()));
    let snapshot = session.view();
    assert!(snapshot.visible.is_empty());
    assert_eq!(snapshot.cart_count, 1);
}

// ===========================================================================
// Test 7: Empty cart reads as zero
// ===========================================================================

#[test]
fn empty_cart_is_zero_everywhere() {
    let session = session();
    let snapshot = session.view();

    assert_eq!(snapshot.cart_count, 0);
    assert!(snapshot.cart_entries.is_empty());
    assert_eq!(snapshot.cart_total, 0.0);
    assert_eq!(snapshot.cart_display_total, 0.0);
    assert_eq!(snapshot.total_label(), "Total: $0.00");
}
