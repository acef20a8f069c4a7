// Page objects - One wrapper per storefront screen
//
// Each page object owns a `Navigator` and the engine locators for its screen,
// created once at construction. Methods forward to the engine and return the
// rendered values untouched, except for prices, which go through
// `price::parse_currency`.

mod cart;
mod checkout_complete;
mod checkout_step_one;
mod checkout_step_two;
mod inventory;
mod login;

pub use cart::CartPage;
pub use checkout_complete::CheckoutCompletePage;
pub use checkout_step_one::CheckoutStepOnePage;
pub use checkout_step_two::CheckoutStepTwoPage;
pub use inventory::{InventoryPage, SortOrder};
pub use login::LoginPage;

use crate::error::{Error, Result};
use crate::price::parse_currency;
use playwright_rs::Locator;

/// Name and price of a product as listed on the inventory screen.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductSummary {
    pub name: String,
    pub price: f64,
}

/// A line in the cart or on the checkout overview.
#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    pub name: String,
    pub price: f64,
    pub quantity: u32,
}

impl CartItem {
    pub fn summary(&self) -> ProductSummary {
        ProductSummary {
            name: self.name.clone(),
            price: self.price,
        }
    }
}

/// Text content of a single element, empty when the element has none.
pub(crate) async fn read_text(locator: &Locator) -> Result<String> {
    Ok(locator.text_content().await?.unwrap_or_default())
}

/// Text content of every element `locator` matches, in document order.
pub(crate) async fn read_all_texts(locator: &Locator) -> Result<Vec<String>> {
    let count = locator.count().await?;
    let mut texts = Vec::with_capacity(count);
    for i in 0..count {
        texts.push(read_text(&locator.nth(i as i32)).await?);
    }
    Ok(texts)
}

/// Visibility check: a missing element reads as `false`.
pub(crate) async fn check_visible(locator: &Locator) -> Result<bool> {
    if locator.count().await? == 0 {
        return Ok(false);
    }
    Ok(locator.first().is_visible().await?)
}

/// Enabled check: a missing element reads as `false`.
pub(crate) async fn check_enabled(locator: &Locator) -> Result<bool> {
    if locator.count().await? == 0 {
        return Ok(false);
    }
    Ok(locator.first().is_enabled().await?)
}

/// Fails with [`Error::IndexOutOfRange`] unless `index < len`.
pub(crate) fn check_index(index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        Err(Error::IndexOutOfRange { index, len })
    }
}

/// Reads the name, price and quantity of each list row.
pub(crate) async fn read_cart_items(
    items: &Locator,
    name_selector: &str,
    price_selector: &str,
    quantity_selector: &str,
) -> Result<Vec<CartItem>> {
    let count = items.count().await?;
    let mut rows = Vec::with_capacity(count);
    for i in 0..count {
        let row = items.nth(i as i32);
        let name = read_text(&row.locator(name_selector)).await?;
        let price = parse_currency(&read_text(&row.locator(price_selector)).await?);
        let quantity_text = read_text(&row.locator(quantity_selector)).await?;
        let quantity = quantity_text.trim().parse::<u32>().unwrap_or_else(|_| {
            tracing::warn!("Unreadable quantity '{}' for '{}', reading as 0", quantity_text, name);
            0
        });
        rows.push(CartItem {
            name,
            price,
            quantity,
        });
    }
    Ok(rows)
}
