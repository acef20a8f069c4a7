// Browser session - Engine lifecycle for one suite run
//
// Owns the Playwright driver and a launched browser. Every test opens its own
// context from here, so cookies and local storage never leak between tests
// unless a persisted storage state is loaded on purpose.

use crate::config::{BrowserKind, SuiteConfig};
use crate::error::{Error, Result};
use playwright_rs::{
    Browser, BrowserContext, BrowserContextOptions, LaunchOptions, Page, Playwright, StorageState,
};
use std::path::Path;

/// A launched browser bound to a [`SuiteConfig`].
pub struct BrowserSession {
    playwright: Playwright,
    browser: Browser,
    config: SuiteConfig,
}

impl BrowserSession {
    /// Starts the driver and launches the configured browser engine.
    pub async fn launch(config: SuiteConfig) -> Result<Self> {
        tracing::info!(
            browser = config.browser().as_str(),
            headless = config.headless(),
            "Launching browser"
        );

        let playwright = Playwright::launch()
            .await
            .map_err(|e| Error::from(e).context("Failed to start Playwright"))?;

        let browser_type = match config.browser() {
            BrowserKind::Chromium => playwright.chromium(),
            BrowserKind::Firefox => playwright.firefox(),
            BrowserKind::Webkit => playwright.webkit(),
        };
        let options = LaunchOptions::new().headless(config.headless());
        let browser = browser_type
            .launch_with_options(options)
            .await
            .map_err(|e| {
                Error::from(e).context(format!("Failed to launch {}", config.browser().as_str()))
            })?;

        Ok(Self {
            playwright,
            browser,
            config,
        })
    }

    pub fn config(&self) -> &SuiteConfig {
        &self.config
    }

    pub fn browser(&self) -> &Browser {
        &self.browser
    }

    /// Opens a fresh context with empty cookies and storage.
    pub async fn new_context(&self) -> Result<BrowserContext> {
        Ok(self.browser.new_context().await?)
    }

    /// Opens a context seeded with `state`.
    pub async fn new_context_with_state(&self, state: StorageState) -> Result<BrowserContext> {
        let options = BrowserContextOptions::builder()
            .storage_state(state)
            .build();
        Ok(self.browser.new_context_with_options(options).await?)
    }

    /// Opens a context seeded with the persisted storage state, if one exists.
    ///
    /// Falls back to a fresh context when the file at
    /// [`SuiteConfig::storage_state`] is missing.
    pub async fn new_authenticated_context(&self) -> Result<BrowserContext> {
        match load_storage_state(self.config.storage_state())? {
            Some(state) => {
                tracing::info!(
                    "Reusing storage state from {}",
                    self.config.storage_state().display()
                );
                self.new_context_with_state(state).await
            }
            None => {
                tracing::warn!(
                    "No storage state at {}, starting unauthenticated",
                    self.config.storage_state().display()
                );
                self.new_context().await
            }
        }
    }

    /// Opens a fresh context and a tab in it.
    pub async fn new_page(&self) -> Result<(BrowserContext, Page)> {
        let context = self.new_context().await?;
        let page = context.new_page().await?;
        Ok((context, page))
    }

    /// Closes the browser and stops the driver.
    pub async fn close(self) -> Result<()> {
        tracing::info!("Closing browser session");
        self.browser.close().await?;
        self.playwright.shutdown().await?;
        Ok(())
    }
}

/// Writes the context's cookies and local storage to `path` as JSON.
///
/// Parent directories are created as needed.
pub async fn save_storage_state(context: &BrowserContext, path: &Path) -> Result<StorageState> {
    let state = context.storage_state().await?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(&state)?;
    std::fs::write(path, json)?;
    tracing::info!(
        cookies = state.cookies.len(),
        origins = state.origins.len(),
        "Saved storage state to {}",
        path.display()
    );
    Ok(state)
}

/// Reads a storage state written by [`save_storage_state`].
///
/// Returns `Ok(None)` when the file does not exist.
pub fn load_storage_state(path: &Path) -> Result<Option<StorageState>> {
    let json = match std::fs::read_to_string(path) {
        Ok(json) => json,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    let state = serde_json::from_str(&json)
        .map_err(|e| Error::from(e).context(format!("Invalid storage state {}", path.display())))?;
    Ok(Some(state))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_storage_state_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let state = load_storage_state(&dir.path().join("missing.json")).unwrap();
        assert!(state.is_none());
    }

    #[test]
    fn test_load_storage_state_parses_cookies_and_origins() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        std::fs::write(
            &path,
            r#"{
                "cookies": [{
                    "name": "session-username",
                    "value": "standard_user",
                    "domain": "www.saucedemo.com",
                    "path": "/",
                    "expires": -1,
                    "httpOnly": false,
                    "secure": false,
                    "sameSite": "Lax"
                }],
                "origins": [{
                    "origin": "https://www.saucedemo.com",
                    "localStorage": [{ "name": "cart-contents", "value": "[4]" }]
                }]
            }"#,
        )
        .unwrap();

        let state = load_storage_state(&path).unwrap().unwrap();
        assert_eq!(state.cookies.len(), 1);
        assert_eq!(state.cookies[0].name, "session-username");
        assert_eq!(state.origins[0].local_storage[0].value, "[4]");
    }

    #[test]
    fn test_load_corrupt_storage_state_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        std::fs::write(&path, "not json").unwrap();

        let err = load_storage_state(&path).unwrap_err();
        assert!(err.to_string().starts_with("Invalid storage state"));
    }
}
