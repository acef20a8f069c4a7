// PageManager - Every page object bound to one browser tab
//
// Built once per test case. All six page objects share the same `Page`
// handle, so an action through one is immediately visible through the others.

use crate::config::SuiteConfig;
use crate::navigation::Navigator;
use crate::pages::{
    CartPage, CheckoutCompletePage, CheckoutStepOnePage, CheckoutStepTwoPage, InventoryPage,
    LoginPage,
};
use playwright_rs::Page;

/// Aggregates the storefront page objects for a single tab.
///
/// # Example
///
/// ```ignore
/// let pages = PageManager::new(page, &config).await;
/// pages.login().open().await?;
/// pages.login().login(&fixtures::valid_user()).await?;
/// pages.inventory().wait_until_loaded().await?;
/// ```
#[derive(Debug, Clone)]
pub struct PageManager {
    nav: Navigator,
    login: LoginPage,
    inventory: InventoryPage,
    cart: CartPage,
    checkout_step_one: CheckoutStepOnePage,
    checkout_step_two: CheckoutStepTwoPage,
    checkout_complete: CheckoutCompletePage,
}

impl PageManager {
    pub async fn new(page: Page, config: &SuiteConfig) -> Self {
        let nav = Navigator::new(page, config);
        Self {
            login: LoginPage::new(nav.clone()).await,
            inventory: InventoryPage::new(nav.clone()).await,
            cart: CartPage::new(nav.clone()).await,
            checkout_step_one: CheckoutStepOnePage::new(nav.clone()).await,
            checkout_step_two: CheckoutStepTwoPage::new(nav.clone()).await,
            checkout_complete: CheckoutCompletePage::new(nav.clone()).await,
            nav,
        }
    }

    pub fn login(&self) -> &LoginPage {
        &self.login
    }

    pub fn inventory(&self) -> &InventoryPage {
        &self.inventory
    }

    pub fn cart(&self) -> &CartPage {
        &self.cart
    }

    pub fn checkout_step_one(&self) -> &CheckoutStepOnePage {
        &self.checkout_step_one
    }

    pub fn checkout_step_two(&self) -> &CheckoutStepTwoPage {
        &self.checkout_step_two
    }

    pub fn checkout_complete(&self) -> &CheckoutCompletePage {
        &self.checkout_complete
    }

    pub fn navigator(&self) -> &Navigator {
        &self.nav
    }
}
