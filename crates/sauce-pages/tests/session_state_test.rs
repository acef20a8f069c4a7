// Integration tests for persisted sessions
//
// A storage state captured after login lets a new context open the inventory
// directly. Without one, the same visit is sent back to the login screen.
// The logged-in test fixture goes through the login form only in that case.

mod common;

use common::{Storefront, TestContext};
use sauce_pages::session::{load_storage_state, save_storage_state};
use sauce_pages::{BrowserSession, Error, PageManager, Route, fixtures, flows};
use std::time::Duration;
use tempfile::TempDir;

#[tokio::test]
async fn test_captured_state_skips_login() {
    let storefront = Storefront::start().await;
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("auth").join("storage-state.json");
    let config = storefront.config().clone().with_storage_state(&path);

    let session = BrowserSession::launch(config)
        .await
        .expect("Failed to launch browser session");

    // Capture
    let state = flows::capture_authenticated_state(&session, &fixtures::valid_user(), &path)
        .await
        .expect("Failed to capture storage state");
    assert!(path.exists(), "state file should be written");
    assert!(
        state.cookies.iter().any(|c| c.name == "session-username"),
        "session cookie should be captured"
    );

    let reloaded = load_storage_state(&path).unwrap().expect("State should load");
    assert_eq!(reloaded.cookies.len(), state.cookies.len());

    // Reuse
    let context = session
        .new_authenticated_context()
        .await
        .expect("Failed to open authenticated context");
    let page = context.new_page().await.expect("Failed to create page");
    let pages = PageManager::new(page, session.config()).await;

    pages.inventory().open().await.expect("Failed to open inventory");
    assert!(pages.inventory().is_open(), "should not be redirected");
    assert_eq!(pages.inventory().product_count().await.unwrap(), 6);
    println!("✓ inventory reached without logging in");

    context.close().await.expect("Failed to close context");
    session.close().await.expect("Failed to close session");
    storefront.shutdown();
}

#[tokio::test]
async fn test_missing_state_starts_unauthenticated() {
    let storefront = Storefront::start().await;
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = storefront
        .config()
        .clone()
        .with_storage_state(dir.path().join("missing.json"));

    let session = BrowserSession::launch(config)
        .await
        .expect("Failed to launch browser session");
    let context = session
        .new_authenticated_context()
        .await
        .expect("Missing state should fall back to a fresh context");
    let page = context.new_page().await.expect("Failed to create page");
    let pages = PageManager::new(page, session.config()).await;

    pages.inventory().open().await.unwrap();
    pages
        .navigator()
        .wait_for(Route::Login)
        .await
        .expect("Fresh context should be redirected to login");

    context.close().await.unwrap();
    session.close().await.unwrap();
    storefront.shutdown();
}

#[tokio::test]
async fn test_save_storage_state_writes_json() {
    let storefront = Storefront::start().await;
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("state.json");

    let session = BrowserSession::launch(storefront.config().clone())
        .await
        .unwrap();
    let (context, page) = session.new_page().await.unwrap();
    let pages = PageManager::new(page, session.config()).await;
    flows::login(&pages, &fixtures::valid_user()).await.unwrap();
    pages.inventory().add_product_to_cart(0).await.unwrap();

    save_storage_state(&context, &path).await.unwrap();
    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert!(json["cookies"].is_array());
    assert!(json["origins"].is_array());

    context.close().await.unwrap();
    session.close().await.unwrap();
    storefront.shutdown();
}

#[tokio::test]
async fn test_failed_capture_writes_nothing() {
    let storefront = Storefront::start().await;
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("state.json");
    let config = storefront
        .config()
        .clone()
        .with_navigation_timeout(Duration::from_secs(1));

    let session = BrowserSession::launch(config)
        .await
        .expect("Failed to launch browser session");
    let err = flows::capture_authenticated_state(
        &session,
        &fixtures::locked_out_user(),
        &path,
    )
    .await
    .expect_err("Locked out user should not reach the inventory");
    assert!(matches!(err, Error::NavigationTimeout { .. }), "{err:?}");
    assert!(!path.exists(), "no state should be written for a failed login");

    // The capture context is gone; a second capture on the same browser works.
    let state = flows::capture_authenticated_state(&session, &fixtures::valid_user(), &path)
        .await
        .expect("Failed to capture after a failed attempt");
    assert!(path.exists());
    assert!(!state.cookies.is_empty());
    println!("✓ failed capture left no state file");

    session.close().await.expect("Failed to close session");
    storefront.shutdown();
}

// ============================================================================
// Logged-in fixture
// ============================================================================

#[tokio::test]
async fn test_logged_in_reuses_stored_session() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("storage-state.json");

    // No state yet: the fixture logs in through the form.
    let first = TestContext::logged_in_with(|c| c.with_storage_state(&path)).await;
    assert!(!first.reused_session(), "nothing to reuse yet");
    assert!(first.pages.inventory().is_open());
    save_storage_state(first.context(), &path)
        .await
        .expect("Failed to save storage state");
    first.close().await;

    // With the state file in place the login form is skipped.
    let second = TestContext::logged_in_with(|c| c.with_storage_state(&path)).await;
    assert!(second.reused_session(), "stored session should be accepted");
    assert!(second.pages.inventory().is_open());
    assert!(!second.pages.login().is_open());
    assert_eq!(second.pages.inventory().product_count().await.unwrap(), 6);
    println!("✓ logged-in fixture skipped the login form");

    second.close().await;
}
