// Cart screen (`/cart.html`)

use super::{CartItem, check_index, check_visible, read_all_texts, read_cart_items, read_text};
use crate::error::{Error, Result};
use crate::navigation::{Navigator, Route};
use crate::selectors::{self, cart as sel, header};
use playwright_rs::Locator;

/// Page object for the cart.
#[derive(Debug, Clone)]
pub struct CartPage {
    nav: Navigator,
    title: Locator,
    items: Locator,
    item_names: Locator,
    checkout_button: Locator,
    continue_shopping_button: Locator,
}

impl CartPage {
    pub async fn new(nav: Navigator) -> Self {
        let page = nav.page();
        Self {
            title: page.locator(header::TITLE).await,
            items: page.locator(sel::ITEM).await,
            item_names: page.locator(sel::ITEM_NAME).await,
            checkout_button: page.locator(sel::CHECKOUT).await,
            continue_shopping_button: page.locator(sel::CONTINUE_SHOPPING).await,
            nav,
        }
    }

    pub async fn open(&self) -> Result<()> {
        self.nav.goto(Route::Cart).await
    }

    pub async fn wait_until_loaded(&self) -> Result<()> {
        self.nav.wait_for(Route::Cart).await
    }

    pub fn is_open(&self) -> bool {
        self.nav.is_at(Route::Cart)
    }

    pub async fn page_title(&self) -> Result<String> {
        read_text(&self.title).await
    }

    /// Number of rows currently rendered in the cart.
    pub async fn item_count(&self) -> Result<usize> {
        Ok(self.items.count().await?)
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

    /// Removes the row at `index`.
    pub async fn remove_item_at(&self, index: usize) -> Result<()> {
        check_index(index, self.item_count().await?)?;
        tracing::debug!("Removing cart row {}", index);
        self.items
            .nth(index as i32)
            .locator(sel::REMOVE_BUTTON)
            .click(None)
            .await?;
        Ok(())
    }

    pub async fn remove_item_by_name(&self, name: &str) -> Result<()> {
        let button = self
            .nav
            .page()
            .locator(&selectors::remove_button(name))
            .await;
        if button.count().await? == 0 {
            return Err(Error::ProductNotFound(name.to_string()));
        }
        button.click(None).await?;
        Ok(())
    }

    /// Back to the inventory screen.
    pub async fn continue_shopping(&self) -> Result<()> {
        self.continue_shopping_button.click(None).await?;
        self.nav.wait_for(Route::Inventory).await
    }

    /// On to the first checkout step.
    pub async fn checkout(&self) -> Result<()> {
        self.checkout_button.click(None).await?;
        self.nav.wait_for(Route::CheckoutStepOne).await
    }

    pub async fn is_checkout_visible(&self) -> Result<bool> {
        check_visible(&self.checkout_button).await
    }

    pub fn navigator(&self) -> &Navigator {
        &self.nav
    }
}
