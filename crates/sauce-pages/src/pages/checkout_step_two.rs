// Checkout step two (`/checkout-step-two.html`): order overview

use super::{CartItem, read_all_texts, read_cart_items, read_text};
use crate::error::Result;
use crate::navigation::{Navigator, Route};
use crate::price::{OrderSummary, parse_currency};
use crate::selectors::{checkout_step_two as sel, header};
use playwright_rs::Locator;

#[derive(Debug, Clone)]
pub struct CheckoutStepTwoPage {
    nav: Navigator,
    title: Locator,
    items: Locator,
    item_names: Locator,
    payment_info: Locator,
    shipping_info: Locator,
    subtotal_label: Locator,
    tax_label: Locator,
    total_label: Locator,
    finish_button: Locator,
    cancel_button: Locator,
}

impl CheckoutStepTwoPage {
    pub async fn new(nav: Navigator) -> Self {
        let page = nav.page();
        Self {
            title: page.locator(header::TITLE).await,
            items: page.locator(sel::ITEM).await,
            item_names: page.locator(sel::ITEM_NAME).await,
            payment_info: page.locator(sel::PAYMENT_INFO).await,
            shipping_info: page.locator(sel::SHIPPING_INFO).await,
            subtotal_label: page.locator(sel::SUBTOTAL).await,
            tax_label: page.locator(sel::TAX).await,
            total_label: page.locator(sel::TOTAL).await,
            finish_button: page.locator(sel::FINISH).await,
            cancel_button: page.locator(sel::CANCEL).await,
            nav,
        }
    }

    pub async fn wait_until_loaded(&self) -> Result<()> {
        self.nav.wait_for(Route::CheckoutStepTwo).await
    }

    pub fn is_open(&self) -> bool {
        self.nav.is_at(Route::CheckoutStepTwo)
    }

    pub async fn page_title(&self) -> Result<String> {
        read_text(&self.title).await
    }

    pub async fn items(&self) -> Result<Vec<CartItem>> {
        read_cart_items(
            &self.items,
            sel::ITEM_NAME,
            sel::ITEM_PRICE,
            sel::ITEM_QUANTITY,
        )
        .await
    }

    pub async fn item_names(&self) -> Result<Vec<String>> {
        read_all_texts(&self.item_names).await
    }

    /// Item total before tax; `0.0` when the label carries no amount.
    pub async fn subtotal(&self) -> Result<f64> {
        Ok(parse_currency(&read_text(&self.subtotal_label).await?))
    }

    pub async fn tax(&self) -> Result<f64> {
        Ok(parse_currency(&read_text(&self.tax_label).await?))
    }

    pub async fn total(&self) -> Result<f64> {
        Ok(parse_currency(&read_text(&self.total_label).await?))
    }

    /// Subtotal, tax and total read in that order.
    pub async fn summary(&self) -> Result<OrderSummary> {
        let summary = OrderSummary {
            subtotal: self.subtotal().await?,
            tax: self.tax().await?,
            total: self.total().await?,
        };
        tracing::debug!(?summary, "Read order summary");
        Ok(summary)
    }

    pub async fn payment_info(&self) -> Result<String> {
        read_text(&self.payment_info).await
    }

    pub async fn shipping_info(&self) -> Result<String> {
        read_text(&self.shipping_info).await
    }

    /// Places the order and waits for the confirmation screen.
    pub async fn click_finish(&self) -> Result<()> {
        self.finish_button.click(None).await?;
        self.nav.wait_for(Route::CheckoutComplete).await
    }

    /// Abandons the order and waits for the inventory screen.
    pub async fn click_cancel(&self) -> Result<()> {
        self.cancel_button.click(None).await?;
        self.nav.wait_for(Route::Inventory).await
    }

    pub fn navigator(&self) -> &Navigator {
        &self.nav
    }
}
