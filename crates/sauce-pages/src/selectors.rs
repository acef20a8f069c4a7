// Selectors - Locator sets for each storefront screen
//
// Every interactive element is addressed through the storefront's
// `data-test` attributes (plus a few stable ids for the burger menu).
// Changing any of these strings is a breaking change for the page objects.

/// Builds a `[data-test="..."]` attribute selector.
pub fn data_test(value: &str) -> String {
    format!(r#"[data-test="{value}"]"#)
}

/// Suffix the storefront uses for per-product button ids.
///
/// `"Sauce Labs Backpack"` becomes `"sauce-labs-backpack"`.
pub fn product_slug(name: &str) -> String {
    name.to_lowercase().replace(' ', "-")
}

/// Add button for the named product on the inventory screen.
pub fn add_to_cart_button(product_name: &str) -> String {
    data_test(&format!("add-to-cart-{}", product_slug(product_name)))
}

/// Remove button for the named product (inventory and cart screens).
pub fn remove_button(product_name: &str) -> String {
    data_test(&format!("remove-{}", product_slug(product_name)))
}

pub mod login {
    pub const USERNAME: &str = r#"[data-test="username"]"#;
    pub const PASSWORD: &str = r#"[data-test="password"]"#;
    pub const LOGIN_BUTTON: &str = r#"[data-test="login-button"]"#;
    pub const ERROR: &str = r#"[data-test="error"]"#;
    pub const ERROR_BUTTON: &str = r#"[data-test="error-button"]"#;
    pub const LOGO: &str = ".login_logo";
}

pub mod header {
    pub const TITLE: &str = r#"[data-test="title"]"#;
    pub const CART_LINK: &str = r#"[data-test="shopping-cart-link"]"#;
    pub const CART_BADGE: &str = r#"[data-test="shopping-cart-badge"]"#;
    pub const MENU_BUTTON: &str = "#react-burger-menu-btn";
    pub const CLOSE_MENU_BUTTON: &str = "#react-burger-cross-btn";
    pub const LOGOUT_LINK: &str = r#"[data-test="logout-sidebar-link"]"#;
    pub const RESET_LINK: &str = r#"[data-test="reset-sidebar-link"]"#;
}

pub mod inventory {
    pub const ITEM: &str = r#"[data-test="inventory-item"]"#;
    pub const ITEM_NAME: &str = r#"[data-test="inventory-item-name"]"#;
    pub const ITEM_PRICE: &str = r#"[data-test="inventory-item-price"]"#;
    /// Add button scoped inside an item; absent once the item is in the cart.
    pub const ADD_BUTTON: &str = r#"button[data-test^="add-to-cart"]"#;
    pub const SORT_SELECT: &str = r#"[data-test="product-sort-container"]"#;
    pub const ACTIVE_SORT: &str = r#"[data-test="active-option"]"#;
}

pub mod cart {
    pub const ITEM: &str = r#"[data-test="inventory-item"]"#;
    pub const ITEM_NAME: &str = r#"[data-test="inventory-item-name"]"#;
    pub const ITEM_PRICE: &str = r#"[data-test="inventory-item-price"]"#;
    pub const ITEM_QUANTITY: &str = r#"[data-test="item-quantity"]"#;
    /// Remove button scoped inside a cart item.
    pub const REMOVE_BUTTON: &str = r#"button[data-test^="remove"]"#;
    pub const CHECKOUT: &str = r#"[data-test="checkout"]"#;
    pub const CONTINUE_SHOPPING: &str = r#"[data-test="continue-shopping"]"#;
}

pub mod checkout_step_one {
    pub const FIRST_NAME: &str = r#"[data-test="firstName"]"#;
    pub const LAST_NAME: &str = r#"[data-test="lastName"]"#;
    pub const POSTAL_CODE: &str = r#"[data-test="postalCode"]"#;
    pub const CONTINUE: &str = r#"[data-test="continue"]"#;
    pub const CANCEL: &str = r#"[data-test="cancel"]"#;
    pub const ERROR: &str = r#"[data-test="error"]"#;
}

pub mod checkout_step_two {
    pub const ITEM: &str = r#"[data-test="inventory-item"]"#;
    pub const ITEM_NAME: &str = r#"[data-test="inventory-item-name"]"#;
    pub const ITEM_PRICE: &str = r#"[data-test="inventory-item-price"]"#;
    pub const ITEM_QUANTITY: &str = r#"[data-test="item-quantity"]"#;
    pub const PAYMENT_INFO: &str = r#"[data-test="payment-info-value"]"#;
    pub const SHIPPING_INFO: &str = r#"[data-test="shipping-info-value"]"#;
    pub const SUBTOTAL: &str = r#"[data-test="subtotal-label"]"#;
    pub const TAX: &str = r#"[data-test="tax-label"]"#;
    pub const TOTAL: &str = r#"[data-test="total-label"]"#;
    pub const FINISH: &str = r#"[data-test="finish"]"#;
    pub const CANCEL: &str = r#"[data-test="cancel"]"#;
}

pub mod checkout_complete {
    pub const HEADER: &str = r#"[data-test="complete-header"]"#;
    pub const TEXT: &str = r#"[data-test="complete-text"]"#;
    pub const PONY_EXPRESS: &str = r#"[data-test="pony-express"]"#;
    pub const BACK_TO_PRODUCTS: &str = r#"[data-test="back-to-products"]"#;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_test_selector() {
        assert_eq!(data_test("checkout"), cart::CHECKOUT);
        assert_eq!(data_test("username"), login::USERNAME);
    }

    #[test]
    fn test_product_buttons() {
        assert_eq!(
            add_to_cart_button("Sauce Labs Backpack"),
            r#"[data-test="add-to-cart-sauce-labs-backpack"]"#
        );
        assert_eq!(
            remove_button("Test.allTheThings() T-Shirt (Red)"),
            r#"[data-test="remove-test.allthethings()-t-shirt-(red)"]"#
        );
    }
}
