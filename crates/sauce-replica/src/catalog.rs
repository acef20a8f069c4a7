// Catalog - Products, accounts and checkout constants served by the replica
//
// Mirrors the data the live Swag Labs storefront renders so that page objects
// written against saucedemo.com behave identically against the replica.

use serde::Serialize;

/// Password accepted for every known account.
pub const PASSWORD: &str = "secret_sauce";

/// Accounts that can sign in.
pub const USERS: &[&str] = &[
    "standard_user",
    "locked_out_user",
    "problem_user",
    "performance_glitch_user",
    "error_user",
    "visual_user",
];

/// Accounts that exist but are refused at login.
pub const LOCKED_OUT_USERS: &[&str] = &["locked_out_user"];

/// Sales tax applied to the item total on the checkout overview.
pub const TAX_RATE: f64 = 0.08;

pub const PAYMENT_INFO: &str = "SauceCard #31337";
pub const SHIPPING_INFO: &str = "Free Pony Express Delivery!";

/// A product listed on the inventory screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
    pub price_cents: u32,
}

impl Product {
    /// Rendered price, e.g. `$29.99`.
    pub fn display_price(&self) -> String {
        format!("${}.{:02}", self.price_cents / 100, self.price_cents % 100)
    }

    /// Suffix used in the product's `data-test` button ids.
    pub fn slug(&self) -> String {
        self.name.to_lowercase().replace(' ', "-")
    }
}

/// Everything the client script needs, embedded into each page.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    pub products: Vec<Product>,
    pub users: Vec<&'static str>,
    pub locked_out: Vec<&'static str>,
    pub password: &'static str,
    pub tax_rate: f64,
    pub payment_info: &'static str,
    pub shipping_info: &'static str,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            products: products(),
            users: USERS.to_vec(),
            locked_out: LOCKED_OUT_USERS.to_vec(),
            password: PASSWORD,
            tax_rate: TAX_RATE,
            payment_info: PAYMENT_INFO,
            shipping_info: SHIPPING_INFO,
        }
    }
}

/// The six products, in the storefront's default (name ascending) order.
pub fn products() -> Vec<Product> {
    vec![
        Product {
            id: 4,
            name: "Sauce Labs Backpack",
            description: "carry.allTheThings() with the sleek, streamlined Sly Pack that melds uncompromising style with unequaled laptop and tablet protection.",
            price_cents: 2999,
        },
        Product {
            id: 0,
            name: "Sauce Labs Bike Light",
            description: "A red light isn't the desired state in testing but it sure helps when riding your bike at night. Water-resistant with 3 lighting modes, 1 AAA battery included.",
            price_cents: 999,
        },
        Product {
            id: 1,
            name: "Sauce Labs Bolt T-Shirt",
            description: "Get your testing superhero on with the Sauce Labs bolt T-shirt. From American Apparel, 100% ringspun combed cotton, heather gray with red bolt.",
            price_cents: 1599,
        },
        Product {
            id: 5,
            name: "Sauce Labs Fleece Jacket",
            description: "It's not every day that you come across a midweight quarter-zip fleece jacket capable of handling everything from a relaxing day outdoors to a busy day at the office.",
            price_cents: 4999,
        },
        Product {
            id: 2,
            name: "Sauce Labs Onesie",
            description: "Rib snap infant onesie for the junior automation engineer in development. Reinforced 3-snap bottom closure, two-needle hemmed sleeved and bottom won't unravel.",
            price_cents: 799,
        },
        Product {
            id: 3,
            name: "Test.allTheThings() T-Shirt (Red)",
            description: "This classic Sauce Labs t-shirt is perfect to wear when cozying up to your keyboard to automate a few tests. Super-soft and comfy ringspun combed cotton.",
            price_cents: 1599,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_products_are_unique_and_sorted_by_name() {
        let products = products();
        assert_eq!(products.len(), 6);

        let ids: HashSet<u32> = products.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), products.len());

        let names: Vec<&str> = products.iter().map(|p| p.name).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }

    #[test]
    fn test_display_price_and_slug() {
        let backpack = &products()[0];
        assert_eq!(backpack.display_price(), "$29.99");
        assert_eq!(backpack.slug(), "sauce-labs-backpack");

        let red_shirt = &products()[5];
        assert_eq!(red_shirt.slug(), "test.allthethings()-t-shirt-(red)");

        let onesie = &products()[4];
        assert_eq!(onesie.display_price(), "$7.99");
    }

    #[test]
    fn test_catalog_serializes_camel_case() {
        let json = serde_json::to_value(Catalog::default()).expect("catalog serializes");
        assert_eq!(json["password"], "secret_sauce");
        assert_eq!(json["lockedOut"][0], "locked_out_user");
        assert_eq!(json["products"][0]["priceCents"], 2999);
        assert_eq!(json["taxRate"], 0.08);
    }
}
