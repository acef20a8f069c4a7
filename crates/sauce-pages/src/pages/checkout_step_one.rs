// Checkout step one (`/checkout-step-one.html`): buyer information form

use super::{check_visible, read_text};
use crate::error::Result;
use crate::fixtures::CheckoutInfo;
use crate::navigation::{Navigator, Route};
use crate::selectors::{checkout_step_one as sel, header};
use playwright_rs::{Locator, expect};

#[derive(Debug, Clone)]
pub struct CheckoutStepOnePage {
    nav: Navigator,
    title: Locator,
    first_name: Locator,
    last_name: Locator,
    postal_code: Locator,
    continue_button: Locator,
    cancel_button: Locator,
    error_message: Locator,
}

impl CheckoutStepOnePage {
    pub async fn new(nav: Navigator) -> Self {
        let page = nav.page();
        Self {
            title: page.locator(header::TITLE).await,
            first_name: page.locator(sel::FIRST_NAME).await,
            last_name: page.locator(sel::LAST_NAME).await,
            postal_code: page.locator(sel::POSTAL_CODE).await,
            continue_button: page.locator(sel::CONTINUE).await,
            cancel_button: page.locator(sel::CANCEL).await,
            error_message: page.locator(sel::ERROR).await,
            nav,
        }
    }

    pub async fn open(&self) -> Result<()> {
        self.nav.goto(Route::CheckoutStepOne).await
    }

    pub async fn wait_until_loaded(&self) -> Result<()> {
        self.nav.wait_for(Route::CheckoutStepOne).await
    }

    pub fn is_open(&self) -> bool {
        self.nav.is_at(Route::CheckoutStepOne)
    }

    pub async fn page_title(&self) -> Result<String> {
        read_text(&self.title).await
    }

    pub async fn fill_first_name(&self, value: &str) -> Result<()> {
        self.first_name.fill(value, None).await?;
        Ok(())
    }

    pub async fn fill_last_name(&self, value: &str) -> Result<()> {
        self.last_name.fill(value, None).await?;
        Ok(())
    }

    pub async fn fill_postal_code(&self, value: &str) -> Result<()> {
        self.postal_code.fill(value, None).await?;
        Ok(())
    }

    pub async fn fill_form(&self, info: &CheckoutInfo) -> Result<()> {
        tracing::debug!(?info, "Filling checkout information");
        self.fill_first_name(&info.first_name).await?;
        self.fill_last_name(&info.last_name).await?;
        self.fill_postal_code(&info.postal_code).await
    }

    pub async fn click_continue(&self) -> Result<()> {
        self.continue_button.click(None).await?;
        Ok(())
    }

    /// Returns to the cart.
    pub async fn click_cancel(&self) -> Result<()> {
        self.cancel_button.click(None).await?;
        self.nav.wait_for(Route::Cart).await
    }

    /// Fills the form, continues and waits for the overview.
    pub async fn complete_checkout_step_one(&self, info: &CheckoutInfo) -> Result<()> {
        self.fill_form(info).await?;
        self.click_continue().await?;
        self.nav.wait_for(Route::CheckoutStepTwo).await
    }

    pub async fn error_message(&self) -> Result<String> {
        read_text(&self.error_message).await
    }

    pub async fn is_error_visible(&self) -> Result<bool> {
        check_visible(&self.error_message).await
    }

    /// Waits for the error banner to appear and returns its text.
    pub async fn wait_for_error(&self) -> Result<String> {
        expect(self.error_message.clone())
            .with_timeout(self.nav.timeout())
            .to_be_visible()
            .await?;
        self.error_message().await
    }

    pub fn navigator(&self) -> &Navigator {
        &self.nav
    }
}
