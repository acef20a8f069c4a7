// Integration tests for the inventory screen
//
// Tests cover:
// - Product listing (names, prices, single product lookup)
// - Random selection: k distinct products, badge reads k
// - Asking for more products than listed fails before touching the cart
// - Add/remove by name and the reset-app-state menu entry
// - Sorting by name and price in both directions

mod common;

use common::TestContext;
use rand::SeedableRng;
use rand::rngs::StdRng;
use sauce_pages::fixtures::titles;
use sauce_pages::price::approx_eq;
use sauce_pages::{Error, SortOrder};
use std::collections::HashSet;

const BACKPACK: &str = "Sauce Labs Backpack";
const BIKE_LIGHT: &str = "Sauce Labs Bike Light";

// ============================================================================
// Listing
// ============================================================================

#[tokio::test]
async fn test_inventory_lists_products() {
    let ctx = TestContext::logged_in().await;
    let inventory = ctx.pages.inventory();

    assert_eq!(inventory.page_title().await.unwrap(), titles::INVENTORY);

    let count = inventory.product_count().await.unwrap();
    let names = inventory.product_names().await.unwrap();
    let prices = inventory.product_prices().await.unwrap();
    assert_eq!(count, 6);
    assert_eq!(names.len(), count);
    assert_eq!(prices.len(), count);
    assert!(names.iter().any(|n| n == BACKPACK));
    assert!(prices.iter().all(|p| *p > 0.0), "every price parses: {prices:?}");

    let first = inventory.product_at(0).await.unwrap();
    assert_eq!(first.name, names[0]);
    assert!(approx_eq(first.price, prices[0]));

    let err = inventory.product_at(count).await.unwrap_err();
    assert!(matches!(err, Error::IndexOutOfRange { .. }));

    assert!(!inventory.is_cart_badge_visible().await.unwrap());
    assert_eq!(inventory.cart_badge_count().await.unwrap(), 0);

    ctx.close().await;
}

// ============================================================================
// Random selection
// ============================================================================

#[tokio::test]
async fn test_random_products_are_distinct_and_counted() {
    let ctx = TestContext::logged_in().await;
    let inventory = ctx.pages.inventory();
    let mut rng = StdRng::seed_from_u64(7);

    for k in [1usize, 3, 6] {
        let added = inventory
            .add_random_products_to_cart_with(k, &mut rng)
            .await
            .expect("Failed to add random products");

        let names: HashSet<&str> = added.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(added.len(), k);
        assert_eq!(names.len(), k, "products should be distinct: {added:?}");
        assert_eq!(inventory.cart_badge_count().await.unwrap(), k);
        println!("✓ k={} badge={}", k, k);

        inventory
            .reset_app_state()
            .await
            .expect("Failed to reset app state");
        inventory.open().await.expect("Failed to reload inventory");
        assert_eq!(inventory.cart_badge_count().await.unwrap(), 0);
    }

    ctx.close().await;
}

#[tokio::test]
async fn test_random_products_with_thread_rng() {
    let ctx = TestContext::logged_in().await;
    let inventory = ctx.pages.inventory();

    let added = inventory
        .add_random_products_to_cart(3)
        .await
        .expect("Failed to add random products");
    assert_eq!(added.len(), 3);
    assert_eq!(inventory.cart_badge_count().await.unwrap(), 3);

    ctx.close().await;
}

#[tokio::test]
async fn test_too_many_random_products_fails_fast() {
    let ctx = TestContext::logged_in().await;
    let inventory = ctx.pages.inventory();
    let total = inventory.product_count().await.unwrap();

    let err = inventory
        .add_random_products_to_cart(total + 1)
        .await
        .unwrap_err();
    match err {
        Error::NotEnoughProducts {
            requested,
            available,
        } => {
            assert_eq!(requested, total + 1);
            assert_eq!(available, total);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(!inventory.is_cart_badge_visible().await.unwrap());

    ctx.close().await;
}

// ============================================================================
// Add and remove by name
// ============================================================================

#[tokio::test]
async fn test_add_and_remove_by_name() {
    let ctx = TestContext::logged_in().await;
    let inventory = ctx.pages.inventory();

    inventory.add_product_by_name(BACKPACK).await.unwrap();
    inventory.add_product_by_name(BIKE_LIGHT).await.unwrap();
    assert_eq!(inventory.cart_badge_count().await.unwrap(), 2);

    inventory.remove_product_by_name(BACKPACK).await.unwrap();
    assert_eq!(inventory.cart_badge_count().await.unwrap(), 1);

    let err = inventory
        .add_product_by_name("Sauce Labs Hovercraft")
        .await
        .unwrap_err();
    assert!(matches!(err, Error::ProductNotFound(name) if name == "Sauce Labs Hovercraft"));

    ctx.close().await;
}

// ============================================================================
// Sorting
// ============================================================================

#[tokio::test]
async fn test_sorting() {
    let ctx = TestContext::logged_in().await;
    let inventory = ctx.pages.inventory();

    for order in SortOrder::ALL {
        inventory.sort_by(order).await.expect("Failed to sort");
        assert_eq!(inventory.active_sort().await.unwrap(), order.label());

        let names = inventory.product_names().await.unwrap();
        let prices = inventory.product_prices().await.unwrap();
        match order {
            SortOrder::NameAscending => {
                assert!(names.windows(2).all(|w| w[0] <= w[1]), "{names:?}")
            }
            SortOrder::NameDescending => {
                assert!(names.windows(2).all(|w| w[0] >= w[1]), "{names:?}")
            }
            SortOrder::PriceAscending => {
                assert!(prices.windows(2).all(|w| w[0] <= w[1]), "{prices:?}")
            }
            SortOrder::PriceDescending => {
                assert!(prices.windows(2).all(|w| w[0] >= w[1]), "{prices:?}")
            }
        }
        println!("✓ {}", order.label());
    }

    ctx.close().await;
}
