// Fixtures - Credentials, checkout records and expected storefront texts
//
// Plain values built on demand; nothing here is shared mutable state.
// The random generators take the RNG explicitly so runs can be reproduced.

use rand::Rng;
use rand::seq::SliceRandom;

pub const STANDARD_USER: &str = "standard_user";
pub const LOCKED_OUT_USER: &str = "locked_out_user";
pub const STANDARD_PASSWORD: &str = "secret_sauce";

/// Page headings (`[data-test="title"]`).
pub mod titles {
    pub const INVENTORY: &str = "Products";
    pub const CART: &str = "Your Cart";
    pub const CHECKOUT_STEP_ONE: &str = "Checkout: Your Information";
    pub const CHECKOUT_STEP_TWO: &str = "Checkout: Overview";
    pub const CHECKOUT_COMPLETE: &str = "Checkout: Complete!";
}

/// Fixed texts shown during checkout.
pub mod checkout {
    pub const COMPLETE_HEADER: &str = "Thank you for your order";
    pub const COMPLETE_TEXT: &str =
        "Your order has been dispatched, and will arrive just as fast as the pony can get there!";
    pub const PAYMENT_INFO: &str = "SauceCard #31337";
    pub const SHIPPING_INFO: &str = "Free Pony Express Delivery!";
}

/// Error fragments shown on the login screen.
pub mod login_errors {
    pub const NO_MATCH: &str = "Username and password do not match";
    pub const USERNAME_REQUIRED: &str = "Username is required";
    pub const PASSWORD_REQUIRED: &str = "Password is required";
    pub const LOCKED_OUT: &str = "Sorry, this user has been locked out";
    pub const NOT_LOGGED_IN: &str = "when you are logged in";
}

/// Error messages shown on the first checkout step.
pub mod checkout_errors {
    pub const FIRST_NAME_REQUIRED: &str = "Error: First Name is required";
    pub const LAST_NAME_REQUIRED: &str = "Error: Last Name is required";
    pub const POSTAL_CODE_REQUIRED: &str = "Error: Postal Code is required";
}

/// Username/password pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Values typed into the first checkout step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutInfo {
    pub first_name: String,
    pub last_name: String,
    pub postal_code: String,
}

impl CheckoutInfo {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        postal_code: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            postal_code: postal_code.into(),
        }
    }
}

/// A rejected login together with the error it must produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginFailureCase {
    pub description: &'static str,
    pub credentials: Credentials,
    pub expected_error: &'static str,
}

/// An incomplete checkout form together with the error it must produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutFailureCase {
    pub description: &'static str,
    pub info: CheckoutInfo,
    pub expected_error: &'static str,
}

pub fn valid_user() -> Credentials {
    Credentials::new(STANDARD_USER, STANDARD_PASSWORD)
}

pub fn locked_out_user() -> Credentials {
    Credentials::new(LOCKED_OUT_USER, STANDARD_PASSWORD)
}

pub fn valid_checkout_info() -> CheckoutInfo {
    CheckoutInfo::new("John", "Doe", "12345")
}

pub fn login_failure_cases() -> Vec<LoginFailureCase> {
    vec![
        LoginFailureCase {
            description: "unknown username",
            credentials: Credentials::new("invalid_user", STANDARD_PASSWORD),
            expected_error: login_errors::NO_MATCH,
        },
        LoginFailureCase {
            description: "wrong password",
            credentials: Credentials::new(STANDARD_USER, "wrong_password"),
            expected_error: login_errors::NO_MATCH,
        },
        LoginFailureCase {
            description: "empty username",
            credentials: Credentials::new("", STANDARD_PASSWORD),
            expected_error: login_errors::USERNAME_REQUIRED,
        },
        LoginFailureCase {
            description: "empty password",
            credentials: Credentials::new(STANDARD_USER, ""),
            expected_error: login_errors::PASSWORD_REQUIRED,
        },
        LoginFailureCase {
            description: "empty username and password",
            credentials: Credentials::new("", ""),
            expected_error: login_errors::USERNAME_REQUIRED,
        },
        LoginFailureCase {
            description: "locked out user",
            credentials: locked_out_user(),
            expected_error: login_errors::LOCKED_OUT,
        },
        LoginFailureCase {
            description: "username padded with whitespace",
            credentials: Credentials::new(format!(" {STANDARD_USER} "), STANDARD_PASSWORD),
            expected_error: login_errors::NO_MATCH,
        },
    ]
}

pub fn checkout_failure_cases() -> Vec<CheckoutFailureCase> {
    vec![
        CheckoutFailureCase {
            description: "missing first name",
            info: CheckoutInfo::new("", "Doe", "12345"),
            expected_error: checkout_errors::FIRST_NAME_REQUIRED,
        },
        CheckoutFailureCase {
            description: "missing last name",
            info: CheckoutInfo::new("John", "", "12345"),
            expected_error: checkout_errors::LAST_NAME_REQUIRED,
        },
        CheckoutFailureCase {
            description: "missing postal code",
            info: CheckoutInfo::new("John", "Doe", ""),
            expected_error: checkout_errors::POSTAL_CODE_REQUIRED,
        },
        CheckoutFailureCase {
            description: "empty form",
            info: CheckoutInfo::new("", "", ""),
            expected_error: checkout_errors::FIRST_NAME_REQUIRED,
        },
    ]
}

const USERNAMES: &[&str] = &[
    "standard_user",
    "problem_user",
    "performance_glitch_user",
    "error_user",
    "visual_user",
];
const FIRST_NAMES: &[&str] = &["John", "Jane", "Alex", "Maria", "Chen", "Amara"];
const LAST_NAMES: &[&str] = &["Doe", "Smith", "Garcia", "Nguyen", "Okafor", "Muller"];
const POSTAL_CODES: &[&str] = &["12345", "90210", "10001", "SW1A 1AA", "75008", "2000"];

fn pick<'a, R: Rng + ?Sized>(rng: &mut R, pool: &[&'a str]) -> &'a str {
    pool.choose(rng).copied().unwrap_or_default()
}

/// A username that signs in successfully, paired with the shared password.
pub fn random_user<R: Rng + ?Sized>(rng: &mut R) -> Credentials {
    Credentials::new(pick(rng, USERNAMES), STANDARD_PASSWORD)
}

/// A complete checkout record built from small literal pools.
pub fn random_checkout_info<R: Rng + ?Sized>(rng: &mut R) -> CheckoutInfo {
    CheckoutInfo::new(
        pick(rng, FIRST_NAMES),
        pick(rng, LAST_NAMES),
        pick(rng, POSTAL_CODES),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_canonical_records() {
        assert_eq!(valid_user(), Credentials::new("standard_user", "secret_sauce"));
        assert_eq!(
            valid_checkout_info(),
            CheckoutInfo {
                first_name: "John".into(),
                last_name: "Doe".into(),
                postal_code: "12345".into(),
            }
        );
    }

    #[test]
    fn test_login_failure_cases_are_distinct() {
        let cases = login_failure_cases();
        for (i, a) in cases.iter().enumerate() {
            for b in &cases[i + 1..] {
                assert_ne!(a.credentials, b.credentials, "{} vs {}", a.description, b.description);
            }
        }
        assert!(cases.iter().all(|c| c.credentials != valid_user()));
    }

    #[test]
    fn test_checkout_failure_cases_each_miss_a_field() {
        for case in checkout_failure_cases() {
            let info = &case.info;
            assert!(
                info.first_name.is_empty() || info.last_name.is_empty() || info.postal_code.is_empty(),
                "{} should leave a field empty",
                case.description
            );
        }
    }

    #[test]
    fn test_random_generators_draw_from_pools() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..50 {
            let user = random_user(&mut rng);
            assert!(USERNAMES.contains(&user.username.as_str()));
            assert_eq!(user.password, STANDARD_PASSWORD);

            let info = random_checkout_info(&mut rng);
            assert!(FIRST_NAMES.contains(&info.first_name.as_str()));
            assert!(LAST_NAMES.contains(&info.last_name.as_str()));
            assert!(POSTAL_CODES.contains(&info.postal_code.as_str()));
        }
    }

    #[test]
    fn test_random_users_never_locked_out() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..50 {
            assert_ne!(random_user(&mut rng).username, LOCKED_OUT_USER);
        }
    }
}
