//! sauce-pages: Page objects for end-to-end testing of the Swag Labs storefront
//!
//! Wraps each storefront screen (login, inventory, cart and the three checkout
//! steps) in a page object built on `playwright-rs` locators, aggregates them in
//! a [`PageManager`], and provides fixtures and multi-screen flows for tests.
//!
//! # Examples
//!
//! ```ignore
//! use sauce_pages::{BrowserSession, PageManager, SuiteConfig, fixtures, flows};
//!
//! #[tokio::main]
//! async fn main() -> sauce_pages::Result<()> {
//!     let config = SuiteConfig::from_env()?;
//!     let session = BrowserSession::launch(config).await?;
//!     let (context, page) = session.new_page().await?;
//!     let pages = PageManager::new(page, session.config()).await;
//!
//!     flows::login(&pages, &fixtures::valid_user()).await?;
//!     pages.inventory().add_random_products_to_cart(3).await?;
//!     flows::place_order(&pages, &fixtures::valid_checkout_info()).await?;
//!
//!     let header = pages.checkout_complete().complete_header().await?;
//!     assert!(header.contains(fixtures::checkout::COMPLETE_HEADER));
//!
//!     context.close().await?;
//!     session.close().await
//! }
//! ```
//!
//! # Browsers
//!
//! Browser-driven code needs the Playwright browsers matching
//! [`PLAYWRIGHT_VERSION`]:
//!
//! ```bash
//! npx playwright@1.56.1 install chromium firefox webkit
//! ```

pub mod config;
mod error;
pub mod fixtures;
pub mod flows;
mod manager;
pub mod navigation;
pub mod pages;
pub mod price;
pub mod sampling;
pub mod selectors;
pub mod session;

pub use config::{BrowserKind, SuiteConfig};
pub use error::{Error, Result};
pub use manager::PageManager;
pub use navigation::{Navigator, Route};
pub use pages::{
    CartItem, CartPage, CheckoutCompletePage, CheckoutStepOnePage, CheckoutStepTwoPage,
    InventoryPage, LoginPage, ProductSummary, SortOrder,
};
pub use price::OrderSummary;
pub use session::BrowserSession;

/// Playwright driver version the browsers must match.
pub use playwright_rs::PLAYWRIGHT_VERSION;
