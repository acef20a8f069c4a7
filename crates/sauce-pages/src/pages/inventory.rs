// Inventory screen (`/inventory.html`)

use super::{ProductSummary, check_index, check_visible, read_all_texts, read_text};
use crate::error::{Error, Result};
use crate::navigation::{Navigator, Route};
use crate::price::parse_currency;
use crate::sampling::pick_distinct_indices;
use crate::selectors::{self, header, inventory as sel};
use playwright_rs::Locator;
use rand::Rng;

/// Options of the product sort dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    NameAscending,
    NameDescending,
    PriceAscending,
    PriceDescending,
}

impl SortOrder {
    pub const ALL: [SortOrder; 4] = [
        SortOrder::NameAscending,
        SortOrder::NameDescending,
        SortOrder::PriceAscending,
        SortOrder::PriceDescending,
    ];

    /// `value` attribute of the `<option>`.
    pub fn value(&self) -> &'static str {
        match self {
            SortOrder::NameAscending => "az",
            SortOrder::NameDescending => "za",
            SortOrder::PriceAscending => "lohi",
            SortOrder::PriceDescending => "hilo",
        }
    }

    /// Label shown once the option is active.
    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::NameAscending => "Name (A to Z)",
            SortOrder::NameDescending => "Name (Z to A)",
            SortOrder::PriceAscending => "Price (low to high)",
            SortOrder::PriceDescending => "Price (high to low)",
        }
    }
}

/// Page object for the product listing.
#[derive(Debug, Clone)]
pub struct InventoryPage {
    nav: Navigator,
    title: Locator,
    items: Locator,
    item_names: Locator,
    item_prices: Locator,
    cart_link: Locator,
    cart_badge: Locator,
    sort_select: Locator,
    active_sort: Locator,
    menu_button: Locator,
    close_menu_button: Locator,
    logout_link: Locator,
    reset_link: Locator,
}

impl InventoryPage {
    pub async fn new(nav: Navigator) -> Self {
        let page = nav.page();
        Self {
            title: page.locator(header::TITLE).await,
            items: page.locator(sel::ITEM).await,
            item_names: page.locator(sel::ITEM_NAME).await,
            item_prices: page.locator(sel::ITEM_PRICE).await,
            cart_link: page.locator(header::CART_LINK).await,
            cart_badge: page.locator(header::CART_BADGE).await,
            sort_select: page.locator(sel::SORT_SELECT).await,
            active_sort: page.locator(sel::ACTIVE_SORT).await,
            menu_button: page.locator(header::MENU_BUTTON).await,
            close_menu_button: page.locator(header::CLOSE_MENU_BUTTON).await,
            logout_link: page.locator(header::LOGOUT_LINK).await,
            reset_link: page.locator(header::RESET_LINK).await,
            nav,
        }
    }

    pub async fn open(&self) -> Result<()> {
        self.nav.goto(Route::Inventory).await
    }

    /// Waits for the inventory URL, e.g. after submitting the login form.
    pub async fn wait_until_loaded(&self) -> Result<()> {
        self.nav.wait_for(Route::Inventory).await
    }

    pub fn is_open(&self) -> bool {
        self.nav.is_at(Route::Inventory)
    }

    pub async fn page_title(&self) -> Result<String> {
        read_text(&self.title).await
    }

    pub async fn product_count(&self) -> Result<usize> {
        Ok(self.items.count().await?)
    }

    pub async fn product_names(&self) -> Result<Vec<String>> {
        read_all_texts(&self.item_names).await
    }

    pub async fn product_prices(&self) -> Result<Vec<f64>> {
        let texts = read_all_texts(&self.item_prices).await?;
        Ok(texts.iter().map(|t| parse_currency(t)).collect())
    }

    /// Name and price of the product at `index` in display order.
    pub async fn product_at(&self, index: usize) -> Result<ProductSummary> {
        check_index(index, self.product_count().await?)?;
        let item = self.items.nth(index as i32);
        let name = read_text(&item.locator(sel::ITEM_NAME)).await?;
        let price = parse_currency(&read_text(&item.locator(sel::ITEM_PRICE)).await?);
        Ok(ProductSummary { name, price })
    }

    /// Clicks the add button of the product at `index`.
    pub async fn add_product_to_cart(&self, index: usize) -> Result<ProductSummary> {
        let product = self.product_at(index).await?;
        tracing::debug!("Adding '{}' to cart", product.name);
        self.items
            .nth(index as i32)
            .locator(sel::ADD_BUTTON)
            .click(None)
            .await?;
        Ok(product)
    }

    pub async fn add_product_by_name(&self, name: &str) -> Result<()> {
        self.click_product_button(name, &selectors::add_to_cart_button(name))
            .await
    }

    pub async fn remove_product_by_name(&self, name: &str) -> Result<()> {
        self.click_product_button(name, &selectors::remove_button(name))
            .await
    }

    async fn click_product_button(&self, name: &str, selector: &str) -> Result<()> {
        let button = self.nav.page().locator(selector).await;
        if button.count().await? == 0 {
            return Err(Error::ProductNotFound(name.to_string()));
        }
        tracing::debug!("Clicking {}", selector);
        button.click(None).await?;
        Ok(())
    }

    /// Adds `count` distinct randomly chosen products.
    ///
    /// Products are added in the order they were drawn and returned in that
    /// order. Fails before touching the cart when `count` exceeds the number of
    /// listed products.
    pub async fn add_random_products_to_cart(&self, count: usize) -> Result<Vec<ProductSummary>> {
        let available = self.product_count().await?;
        let indices = pick_distinct_indices(&mut rand::thread_rng(), count, available)?;
        self.add_products_at(&indices).await
    }

    /// Same as [`add_random_products_to_cart`](Self::add_random_products_to_cart)
    /// with a caller-supplied RNG.
    pub async fn add_random_products_to_cart_with<R>(
        &self,
        count: usize,
        rng: &mut R,
    ) -> Result<Vec<ProductSummary>>
    where
        R: Rng + ?Sized,
    {
        let available = self.product_count().await?;
        let indices = pick_distinct_indices(rng, count, available)?;
        self.add_products_at(&indices).await
    }

    async fn add_products_at(&self, indices: &[usize]) -> Result<Vec<ProductSummary>> {
        tracing::info!("Adding products at {:?} to cart", indices);
        let mut added = Vec::with_capacity(indices.len());
        for &index in indices {
            added.push(self.add_product_to_cart(index).await?);
        }
        Ok(added)
    }

    /// Number on the cart badge; `0` when the badge is not rendered.
    pub async fn cart_badge_count(&self) -> Result<usize> {
        if !check_visible(&self.cart_badge).await? {
            return Ok(0);
        }
        let text = read_text(&self.cart_badge).await?;
        Ok(text.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("Unreadable cart badge '{}', reading as 0", text);
            0
        }))
    }

    pub async fn is_cart_badge_visible(&self) -> Result<bool> {
        check_visible(&self.cart_badge).await
    }

    /// Follows the cart link and waits for the cart screen.
    pub async fn open_cart(&self) -> Result<()> {
        self.cart_link.click(None).await?;
        self.nav.wait_for(Route::Cart).await
    }

    pub async fn sort_by(&self, order: SortOrder) -> Result<()> {
        tracing::debug!("Sorting products by {}", order.label());
        self.sort_select.select_option(order.value(), None).await?;
        Ok(())
    }

    /// Label of the active sort option, exactly as rendered.
    pub async fn active_sort(&self) -> Result<String> {
        read_text(&self.active_sort).await
    }

    pub async fn open_menu(&self) -> Result<()> {
        self.menu_button.click(None).await?;
        Ok(())
    }

    pub async fn close_menu(&self) -> Result<()> {
        self.close_menu_button.click(None).await?;
        Ok(())
    }

    /// Signs out through the side menu and waits for the login screen.
    pub async fn logout(&self) -> Result<()> {
        self.open_menu().await?;
        self.logout_link.click(None).await?;
        self.nav.wait_for(Route::Login).await
    }

    /// Empties the cart through the side menu.
    pub async fn reset_app_state(&self) -> Result<()> {
        self.open_menu().await?;
        self.reset_link.click(None).await?;
        self.close_menu().await
    }

    pub fn navigator(&self) -> &Navigator {
        &self.nav
    }
}
