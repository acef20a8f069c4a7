// Checkout complete (`/checkout-complete.html`): order confirmation

use super::{check_visible, read_text};
use crate::error::Result;
use crate::navigation::{Navigator, Route};
use crate::selectors::{checkout_complete as sel, header};
use playwright_rs::Locator;

#[derive(Debug, Clone)]
pub struct CheckoutCompletePage {
    nav: Navigator,
    title: Locator,
    complete_header: Locator,
    complete_text: Locator,
    pony_express: Locator,
    back_button: Locator,
}

impl CheckoutCompletePage {
    pub async fn new(nav: Navigator) -> Self {
        let page = nav.page();
        Self {
            title: page.locator(header::TITLE).await,
            complete_header: page.locator(sel::HEADER).await,
            complete_text: page.locator(sel::TEXT).await,
            pony_express: page.locator(sel::PONY_EXPRESS).await,
            back_button: page.locator(sel::BACK_TO_PRODUCTS).await,
            nav,
        }
    }

    pub async fn wait_until_loaded(&self) -> Result<()> {
        self.nav.wait_for(Route::CheckoutComplete).await
    }

    pub fn is_open(&self) -> bool {
        self.nav.is_at(Route::CheckoutComplete)
    }

    pub async fn page_title(&self) -> Result<String> {
        read_text(&self.title).await
    }

    pub async fn complete_header(&self) -> Result<String> {
        read_text(&self.complete_header).await
    }

    pub async fn complete_text(&self) -> Result<String> {
        read_text(&self.complete_text).await
    }

    pub async fn is_pony_express_visible(&self) -> Result<bool> {
        check_visible(&self.pony_express).await
    }

    /// Returns to the inventory screen.
    pub async fn back_to_products(&self) -> Result<()> {
        self.back_button.click(None).await?;
        self.nav.wait_for(Route::Inventory).await
    }

    pub fn navigator(&self) -> &Navigator {
        &self.nav
    }
}
