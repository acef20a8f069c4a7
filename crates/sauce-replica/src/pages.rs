// Pages - HTML skeletons for the six storefront screens
//
// Each screen is served as static markup carrying the same `data-test`
// attributes as the live storefront. Lists, badges and error banners are
// filled in client-side by `assets/app.js`, which reads the embedded catalog.

use crate::catalog::Catalog;

/// Screens served by the replica.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Inventory,
    Cart,
    CheckoutStepOne,
    CheckoutStepTwo,
    CheckoutComplete,
}

impl Screen {
    pub const ALL: [Screen; 6] = [
        Screen::Login,
        Screen::Inventory,
        Screen::Cart,
        Screen::CheckoutStepOne,
        Screen::CheckoutStepTwo,
        Screen::CheckoutComplete,
    ];

    /// Route the screen is served from.
    pub fn path(&self) -> &'static str {
        match self {
            Screen::Login => "/",
            Screen::Inventory => "/inventory.html",
            Screen::Cart => "/cart.html",
            Screen::CheckoutStepOne => "/checkout-step-one.html",
            Screen::CheckoutStepTwo => "/checkout-step-two.html",
            Screen::CheckoutComplete => "/checkout-complete.html",
        }
    }

    /// Value of `<body data-screen>`, used by the client script to dispatch.
    fn key(&self) -> &'static str {
        match self {
            Screen::Login => "login",
            Screen::Inventory => "inventory",
            Screen::Cart => "cart",
            Screen::CheckoutStepOne => "checkout-step-one",
            Screen::CheckoutStepTwo => "checkout-step-two",
            Screen::CheckoutComplete => "checkout-complete",
        }
    }

    /// Heading shown in the secondary header (`[data-test="title"]`).
    pub fn heading(&self) -> Option<&'static str> {
        match self {
            Screen::Login => None,
            Screen::Inventory => Some("Products"),
            Screen::Cart => Some("Your Cart"),
            Screen::CheckoutStepOne => Some("Checkout: Your Information"),
            Screen::CheckoutStepTwo => Some("Checkout: Overview"),
            Screen::CheckoutComplete => Some("Checkout: Complete!"),
        }
    }
}

/// Renders the full document for `screen` with `catalog` embedded as JSON.
pub fn render(screen: Screen, catalog: &Catalog) -> serde_json::Result<String> {
    let catalog_json = serde_json::to_string(catalog)?;
    let body = match screen {
        Screen::Login => login_body(),
        other => format!("{}{}", app_header(other), screen_body(other)),
    };

    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <title>Swag Labs</title>
  <style>{style}</style>
</head>
<body data-screen="{key}">
{body}
  <script>window.SWAG_CATALOG = {catalog_json};</script>
  <script src="/static/app.js"></script>
</body>
</html>"#,
        style = STYLE,
        key = screen.key(),
    ))
}

fn login_body() -> String {
    r#"  <div class="login_container">
    <div class="login_logo">Swag Labs</div>
    <div class="login_wrapper">
      <form id="login-form" novalidate>
        <div class="form_group">
          <input class="input_error form_input" placeholder="Username" type="text" id="user-name" name="user-name" data-test="username" autocorrect="off" autocapitalize="none" />
        </div>
        <div class="form_group">
          <input class="input_error form_input" placeholder="Password" type="password" id="password" name="password" data-test="password" autocorrect="off" autocapitalize="none" />
        </div>
        <div class="error-message-container" id="login-error"></div>
        <input type="submit" class="submit-button btn_action" data-test="login-button" id="login-button" name="login-button" value="Login" />
      </form>
    </div>
  </div>"#
        .to_string()
}

fn app_header(screen: Screen) -> String {
    format!(
        r##"  <div id="page_wrapper" class="page_wrapper">
    <div class="primary_header" data-test="primary-header">
      <div class="bm-burger-button">
        <button type="button" id="react-burger-menu-btn">Open Menu</button>
      </div>
      <div class="bm-menu-wrap" id="menu" aria-hidden="true" hidden>
        <nav class="bm-item-list">
          <a id="inventory_sidebar_link" class="bm-item menu-item" href="/inventory.html" data-test="inventory-sidebar-link">All Items</a>
          <a id="logout_sidebar_link" class="bm-item menu-item" href="#" data-test="logout-sidebar-link">Logout</a>
          <a id="reset_sidebar_link" class="bm-item menu-item" href="#" data-test="reset-sidebar-link">Reset App State</a>
        </nav>
        <button type="button" id="react-burger-cross-btn">Close Menu</button>
      </div>
      <div class="app_logo">Swag Labs</div>
      <div class="shopping_cart_container" id="shopping_cart_container">
        <a class="shopping_cart_link" href="/cart.html" data-test="shopping-cart-link"></a>
      </div>
    </div>
    <div class="header_secondary_container" data-test="secondary-header">
      <span class="title" data-test="title">{heading}</span>
      {sort}
    </div>
"##,
        heading = screen.heading().unwrap_or_default(),
        sort = if screen == Screen::Inventory {
            SORT_CONTROL
        } else {
            ""
        },
    )
}

const SORT_CONTROL: &str = r#"<span class="select_container">
        <span class="active_option" data-test="active-option">Name (A to Z)</span>
        <select class="product_sort_container" data-test="product-sort-container">
          <option value="az">Name (A to Z)</option>
          <option value="za">Name (Z to A)</option>
          <option value="lohi">Price (low to high)</option>
          <option value="hilo">Price (high to low)</option>
        </select>
      </span>"#;

fn screen_body(screen: Screen) -> String {
    let content = match screen {
        Screen::Login => "",
        Screen::Inventory => {
            r#"    <div class="inventory_container" data-test="inventory-container">
      <div class="inventory_list" data-test="inventory-list"></div>
    </div>"#
        }
        Screen::Cart => {
            r#"    <div class="cart_contents_container" data-test="cart-contents-container">
      <div class="cart_list" data-test="cart-list"></div>
      <div class="cart_footer">
        <button class="btn btn_secondary back btn_medium" data-test="continue-shopping" id="continue-shopping">Continue Shopping</button>
        <button class="btn btn_action btn_medium checkout_button" data-test="checkout" id="checkout">Checkout</button>
      </div>
    </div>"#
        }
        Screen::CheckoutStepOne => {
            r#"    <div class="checkout_info_container" data-test="checkout-info-container">
      <form id="checkout-form" novalidate>
        <div class="checkout_info">
          <div class="form_group"><input class="input_error form_input" placeholder="First Name" type="text" id="first-name" name="firstName" data-test="firstName" /></div>
          <div class="form_group"><input class="input_error form_input" placeholder="Last Name" type="text" id="last-name" name="lastName" data-test="lastName" /></div>
          <div class="form_group"><input class="input_error form_input" placeholder="Zip/Postal Code" type="text" id="postal-code" name="postalCode" data-test="postalCode" /></div>
          <div class="error-message-container" id="checkout-error"></div>
        </div>
        <div class="checkout_buttons">
          <button type="button" class="btn btn_secondary back btn_medium cart_cancel_link" data-test="cancel" id="cancel">Cancel</button>
          <input type="submit" class="submit-button btn btn_primary cart_button btn_action" data-test="continue" id="continue" name="continue" value="Continue" />
        </div>
      </form>
    </div>"#
        }
        Screen::CheckoutStepTwo => {
            r#"    <div class="checkout_summary_container" data-test="checkout-summary-container">
      <div class="cart_list" data-test="cart-list"></div>
      <div class="summary_info">
        <div class="summary_info_label" data-test="payment-info-label">Payment Information:</div>
        <div class="summary_value_label" data-test="payment-info-value"></div>
        <div class="summary_info_label" data-test="shipping-info-label">Shipping Information:</div>
        <div class="summary_value_label" data-test="shipping-info-value"></div>
        <div class="summary_info_label" data-test="total-info-label">Price Total</div>
        <div class="summary_subtotal_label" data-test="subtotal-label"></div>
        <div class="summary_tax_label" data-test="tax-label"></div>
        <div class="summary_info_label summary_total_label" data-test="total-label"></div>
        <div class="cart_footer">
          <button class="btn btn_secondary back btn_medium cart_cancel_link" data-test="cancel" id="cancel">Cancel</button>
          <button class="btn btn_action btn_medium cart_button" data-test="finish" id="finish">Finish</button>
        </div>
      </div>
    </div>"#
        }
        Screen::CheckoutComplete => {
            r#"    <div class="checkout_complete_container" data-test="checkout-complete-container">
      <img alt="Pony Express" class="pony_express" data-test="pony-express" src="/static/pony-express.svg" width="120" height="120" />
      <h2 class="complete-header" data-test="complete-header">Thank you for your order!</h2>
      <div class="complete-text" data-test="complete-text">Your order has been dispatched, and will arrive just as fast as the pony can get there!</div>
      <button class="btn btn_primary btn_small" data-test="back-to-products" id="back-to-products">Back Home</button>
    </div>"#
        }
    };
    format!("{content}\n  </div>")
}

/// Illustration shown on the completion screen.
pub const PONY_EXPRESS_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="120" height="120" viewBox="0 0 120 120"><circle cx="60" cy="60" r="56" fill="#e2231a"/><path d="M30 80 L50 40 L70 60 L90 35" stroke="#fff" stroke-width="8" fill="none"/></svg>"##;

const STYLE: &str = "body{font-family:sans-serif;margin:0}\
.error-message-container.error{background:#e2231a;color:#fff;padding:8px}\
.inventory_item,.cart_item{border-bottom:1px solid #ddd;padding:8px}\
.shopping_cart_link{display:inline-block;min-width:32px;min-height:24px}\
.shopping_cart_badge{background:#e2231a;color:#fff;border-radius:50%;padding:2px 6px}\
.bm-menu-wrap[hidden]{display:none}";
