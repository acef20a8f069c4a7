// Navigation - Screen routes and URL waiting
//
// `Navigator` is the shared handle every page object holds: the engine's page
// plus the storefront base URL and the wait-for-URL bound. Cloning it clones
// the reference to the same browser tab, not a snapshot.

use crate::config::SuiteConfig;
use crate::error::{Error, Result};
use playwright_rs::{GotoOptions, Page};
use std::time::{Duration, Instant};
use url::Url;

/// Poll interval while waiting for a URL change.
const URL_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Storefront screens and their paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Inventory,
    Cart,
    CheckoutStepOne,
    CheckoutStepTwo,
    CheckoutComplete,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/",
            Route::Inventory => "/inventory.html",
            Route::Cart => "/cart.html",
            Route::CheckoutStepOne => "/checkout-step-one.html",
            Route::CheckoutStepTwo => "/checkout-step-two.html",
            Route::CheckoutComplete => "/checkout-complete.html",
        }
    }

    /// Whether `current` points at this screen of the storefront at `base`.
    ///
    /// Origin and path must match; query strings and fragments are ignored.
    pub fn matches(&self, base: &Url, current: &str) -> bool {
        let Ok(current) = Url::parse(current) else {
            return false;
        };
        current.origin() == base.origin() && current.path() == self.path()
    }
}

/// Page handle bound to one storefront.
#[derive(Debug, Clone)]
pub struct Navigator {
    page: Page,
    base_url: Url,
    timeout: Duration,
}

impl Navigator {
    pub fn new(page: Page, config: &SuiteConfig) -> Self {
        Self {
            page,
            base_url: config.base_url().clone(),
            timeout: config.navigation_timeout(),
        }
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn current_url(&self) -> String {
        self.page.url()
    }

    /// Whether the tab currently shows `route`.
    pub fn is_at(&self, route: Route) -> bool {
        route.matches(&self.base_url, &self.page.url())
    }

    /// Whether the tab is on the storefront's origin at all.
    pub fn is_on_storefront(&self) -> bool {
        Url::parse(&self.page.url())
            .map(|current| current.origin() == self.base_url.origin())
            .unwrap_or(false)
    }

    /// Loads `route` directly.
    pub async fn goto(&self, route: Route) -> Result<()> {
        let url = self.base_url.join(route.path())?;
        tracing::debug!("Navigating to {}", url);
        self.page
            .goto(url.as_str(), Some(GotoOptions::new().timeout(self.timeout)))
            .await?;
        Ok(())
    }

    /// Waits until the tab shows `route`.
    ///
    /// Fails with [`Error::NavigationTimeout`] once the configured bound elapses.
    pub async fn wait_for(&self, route: Route) -> Result<()> {
        let start = Instant::now();
        loop {
            if self.is_at(route) {
                return Ok(());
            }

            if start.elapsed() >= self.timeout {
                let expected = self.base_url.join(route.path())?.to_string();
                return Err(Error::NavigationTimeout {
                    expected,
                    actual: self.page.url(),
                    timeout_ms: timeout_millis(self.timeout),
                });
            }

            tokio::time::sleep(URL_POLL_INTERVAL).await;
        }
    }
}

/// Milliseconds in `timeout`, saturating at `u64::MAX`.
pub(crate) fn timeout_millis(timeout: Duration) -> u64 {
    u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX)
}
