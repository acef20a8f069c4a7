// Error types for sauce-pages

use thiserror::Error;

/// Result type alias for page-object operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while driving the storefront
#[derive(Debug, Error)]
pub enum Error {
    /// Failure reported by the browser-automation engine
    ///
    /// Covers launch problems, actionability timeouts and closed targets.
    /// The engine's own message is kept intact.
    #[error(transparent)]
    Playwright(#[from] playwright_rs::Error),

    /// The page did not reach the expected URL in time
    #[error("Timed out after {timeout_ms}ms waiting for URL '{expected}' (current: '{actual}')")]
    NavigationTimeout {
        expected: String,
        actual: String,
        timeout_ms: u64,
    },

    /// More products were requested than the inventory lists
    ///
    /// Raised before any product is added to the cart.
    #[error(
        "Cannot add {requested} random products to the cart: only {available} products are available"
    )]
    NotEnoughProducts { requested: usize, available: usize },

    /// A product with the given name is not listed on the current screen
    #[error("Product not found: '{0}'")]
    ProductNotFound(String),

    /// An item index is outside the rendered list
    #[error("Index {index} is out of range for {len} items")]
    IndexOutOfRange { index: usize, len: usize },

    /// Base URL cannot be used to build screen URLs
    #[error("Invalid base URL '{0}': must be an absolute http(s) URL")]
    InvalidBaseUrl(String),

    /// URL parse error
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// I/O error (storage-state files)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error with additional context
    #[error("{0}: {1}")]
    Context(String, #[source] Box<Error>),
}

impl Error {
    /// Adds context to the error
    pub fn context(self, msg: impl Into<String>) -> Self {
        Error::Context(msg.into(), Box::new(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_enough_products_message() {
        let err = Error::NotEnoughProducts {
            requested: 7,
            available: 6,
        };
        assert_eq!(
            err.to_string(),
            "Cannot add 7 random products to the cart: only 6 products are available"
        );
    }

    #[test]
    fn test_context_wraps_source() {
        let err = Error::ProductNotFound("Sauce Labs Backpack".into()).context("adding to cart");
        assert_eq!(
            err.to_string(),
            "adding to cart: Product not found: 'Sauce Labs Backpack'"
        );
        assert!(std::error::Error::source(&err).is_some());
    }
}
