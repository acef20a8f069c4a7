// Scenario flows - Multi-screen sequences shared by tests and tooling
//
// Each flow is a straight sequence of page-object calls. The first failing
// step aborts the flow and its error is returned as-is.

use crate::config::SuiteConfig;
use crate::error::{Error, Result};
use crate::fixtures::{CheckoutInfo, Credentials};
use crate::manager::PageManager;
use crate::navigation::{Route, timeout_millis};
use crate::price::OrderSummary;
use crate::session::{BrowserSession, save_storage_state};
use playwright_rs::StorageState;
use std::path::Path;
use std::time::{Duration, Instant};

const SESSION_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Logs in from the login screen and waits for the inventory.
pub async fn login(pages: &PageManager, credentials: &Credentials) -> Result<()> {
    tracing::info!("Logging in as '{}'", credentials.username);
    pages.login().open().await?;
    pages.login().login(credentials).await?;
    pages.inventory().wait_until_loaded().await
}

/// Logs in with the credentials from the environment.
///
/// An unset username or password leaves that field empty, so the storefront
/// reports the missing value and the wait for the inventory times out.
pub async fn login_from_config(pages: &PageManager, config: &SuiteConfig) -> Result<()> {
    tracing::info!(
        "Logging in with configured credentials (username set: {})",
        config.username().is_some()
    );
    pages.login().open().await?;
    pages
        .login()
        .login_with(config.username(), config.password())
        .await?;
    pages.inventory().wait_until_loaded().await
}

/// Opens the inventory and reports whether the tab is already signed in.
///
/// Meant for contexts seeded with a persisted storage state. Returns `false`
/// once the storefront bounces the visit to the login screen, `true` once
/// products are listed. Fails with [`Error::NavigationTimeout`] when neither
/// happens within the navigation bound.
pub async fn resume_session(pages: &PageManager) -> Result<bool> {
    let inventory = pages.inventory();
    let nav = pages.navigator();
    inventory.open().await?;

    let start = Instant::now();
    loop {
        if nav.is_at(Route::Login) {
            tracing::info!("Stored session not accepted, login required");
            return Ok(false);
        }
        if inventory.is_open() && inventory.product_count().await? > 0 {
            tracing::info!("Resumed stored session");
            return Ok(true);
        }
        if start.elapsed() >= nav.timeout() {
            return Err(Error::NavigationTimeout {
                expected: nav.base_url().join(Route::Inventory.path())?.to_string(),
                actual: nav.current_url(),
                timeout_ms: timeout_millis(nav.timeout()),
            });
        }
        tokio::time::sleep(SESSION_POLL_INTERVAL).await;
    }
}

/// Empties the cart and returns to the inventory screen.
///
/// Reads the live item count and removes the first row that many times.
/// Returns the number of items removed. Requires a logged-in session.
pub async fn reset_cart(pages: &PageManager) -> Result<usize> {
    let cart = pages.cart();
    cart.open().await?;
    let count = cart.item_count().await?;
    for _ in 0..count {
        cart.remove_item_at(0).await?;
    }
    if count > 0 {
        tracing::info!("Removed {} leftover cart items", count);
    }
    pages.inventory().open().await?;
    Ok(count)
}

/// From the inventory screen: opens the cart, fills the buyer form and stops
/// on the overview. Returns the amounts shown there.
pub async fn checkout_to_overview(
    pages: &PageManager,
    info: &CheckoutInfo,
) -> Result<OrderSummary> {
    pages.inventory().open_cart().await?;
    pages.cart().checkout().await?;
    pages
        .checkout_step_one()
        .complete_checkout_step_one(info)
        .await?;
    pages.checkout_step_two().summary().await
}

/// Runs [`checkout_to_overview`] and places the order.
pub async fn place_order(pages: &PageManager, info: &CheckoutInfo) -> Result<OrderSummary> {
    let summary = checkout_to_overview(pages, info).await?;
    pages.checkout_step_two().click_finish().await?;
    tracing::info!(total = summary.total, "Order placed");
    Ok(summary)
}

/// Logs in within a fresh context and writes its storage state to `path`.
///
/// The context is closed afterwards, also when the login fails. The returned
/// state is what was written.
pub async fn capture_authenticated_state(
    session: &BrowserSession,
    credentials: &Credentials,
    path: &Path,
) -> Result<StorageState> {
    let (context, page) = session.new_page().await?;
    let pages = PageManager::new(page, session.config()).await;
    let captured = match login(&pages, credentials).await {
        Ok(()) => save_storage_state(&context, path).await,
        Err(e) => Err(e),
    };
    let closed = context.close().await;
    let state = captured?;
    closed?;
    Ok(state)
}
