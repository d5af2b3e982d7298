use super::*;

// =============================================================
// panels_for_role
// =============================================================

#[test]
fn customer_sees_orders_and_account() {
    assert_eq!(panels_for_role("customer"), &[Panel::Orders, Panel::Account]);
}

#[test]
fn artist_sees_listings_and_sales() {
    assert_eq!(
        panels_for_role("artist"),
        &[Panel::Listings, Panel::Sales, Panel::Orders, Panel::Account]
    );
}

#[test]
fn admin_sees_catalog_customers_and_refunds() {
    assert_eq!(
        panels_for_role("admin"),
        &[Panel::Catalog, Panel::Customers, Panel::Refunds, Panel::Account]
    );
}

#[test]
fn unknown_roles_fall_back_to_customer_set() {
    assert_eq!(panels_for_role("curator"), panels_for_role("customer"));
    assert_eq!(panels_for_role(""), panels_for_role("customer"));
}

// =============================================================
// Panel
// =============================================================

#[test]
fn orders_and_account_panels_link_to_pages() {
    assert_eq!(Panel::Orders.href(), Some("/orders"));
    assert_eq!(Panel::Account.href(), Some("/account"));
    assert_eq!(Panel::Catalog.href(), None);
    assert_eq!(Panel::Refunds.href(), None);
}

#[test]
fn every_panel_has_title_and_blurb() {
    for panel in [
        Panel::Orders,
        Panel::Account,
        Panel::Listings,
        Panel::Sales,
        Panel::Catalog,
        Panel::Customers,
        Panel::Refunds,
    ] {
        assert!(!panel.title().is_empty());
        assert!(!panel.blurb().is_empty());
    }
}
