// Suite configuration
//
// Loaded once from the process environment and passed explicitly into
// sessions, page managers and flows. Nothing here is global.

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

/// Storefront used when `SAUCE_BASE_URL` is not set.
pub const DEFAULT_BASE_URL: &str = "https://www.saucedemo.com";

/// Bound applied to every wait-for-URL call.
pub const DEFAULT_NAVIGATION_TIMEOUT: Duration = Duration::from_secs(10);

/// Where `xtask auth-setup` writes the captured session by default.
pub const DEFAULT_STORAGE_STATE: &str = ".auth/storage-state.json";

pub const ENV_BASE_URL: &str = "SAUCE_BASE_URL";
pub const ENV_BROWSER: &str = "SAUCE_BROWSER";
pub const ENV_HEADLESS: &str = "SAUCE_HEADLESS";
pub const ENV_USERNAME: &str = "SAUCE_USERNAME";
pub const ENV_PASSWORD: &str = "SAUCE_PASSWORD";
pub const ENV_STORAGE_STATE: &str = "SAUCE_STORAGE_STATE";
pub const ENV_NAVIGATION_TIMEOUT_MS: &str = "SAUCE_NAVIGATION_TIMEOUT_MS";

/// Browser engine to launch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BrowserKind {
    #[default]
    Chromium,
    Firefox,
    Webkit,
}

impl BrowserKind {
    /// Parses a browser name; unknown names fall back to Chromium.
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "chromium" | "chrome" => BrowserKind::Chromium,
            "firefox" => BrowserKind::Firefox,
            "webkit" | "safari" => BrowserKind::Webkit,
            other => {
                tracing::warn!("Unknown browser '{}', using chromium", other);
                BrowserKind::Chromium
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BrowserKind::Chromium => "chromium",
            BrowserKind::Firefox => "firefox",
            BrowserKind::Webkit => "webkit",
        }
    }
}

/// Immutable settings for one suite run.
#[derive(Debug, Clone)]
pub struct SuiteConfig {
    base_url: Url,
    browser: BrowserKind,
    headless: bool,
    username: Option<String>,
    password: Option<String>,
    storage_state: PathBuf,
    navigation_timeout: Duration,
}

impl SuiteConfig {
    /// Creates a configuration for `base_url` with every other value at its default.
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Self {
            base_url: parse_base_url(base_url)?,
            browser: BrowserKind::default(),
            headless: true,
            username: None,
            password: None,
            storage_state: PathBuf::from(DEFAULT_STORAGE_STATE),
            navigation_timeout: DEFAULT_NAVIGATION_TIMEOUT,
        })
    }

    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`, which maps a variable name to its value.
    ///
    /// Credentials are taken as-is: an unset username or password stays `None`
    /// and the corresponding login field is left empty.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup(ENV_BASE_URL).unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let mut config = Self::new(&base_url)?;

        if let Some(browser) = lookup(ENV_BROWSER) {
            config.browser = BrowserKind::parse(&browser);
        }
        if let Some(headless) = lookup(ENV_HEADLESS) {
            match parse_flag(&headless) {
                Some(flag) => config.headless = flag,
                None => tracing::warn!(
                    "Ignoring {}='{}': expected true/false",
                    ENV_HEADLESS,
                    headless
                ),
            }
        }
        config.username = lookup(ENV_USERNAME);
        config.password = lookup(ENV_PASSWORD);
        if let Some(path) = lookup(ENV_STORAGE_STATE) {
            config.storage_state = PathBuf::from(path);
        }
        if let Some(ms) = lookup(ENV_NAVIGATION_TIMEOUT_MS) {
            match ms.trim().parse::<u64>() {
                Ok(ms) => config.navigation_timeout = Duration::from_millis(ms),
                Err(_) => tracing::warn!(
                    "Ignoring {}='{}': not a number of milliseconds",
                    ENV_NAVIGATION_TIMEOUT_MS,
                    ms
                ),
            }
        }

        tracing::debug!(
            base_url = %config.base_url,
            browser = config.browser.as_str(),
            headless = config.headless,
            "Loaded suite configuration"
        );
        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: &str) -> Result<Self> {
        self.base_url = parse_base_url(base_url)?;
        Ok(self)
    }

    pub fn with_browser(mut self, browser: BrowserKind) -> Self {
        self.browser = browser;
        self
    }

    pub fn with_headless(mut self, headless: bool) -> Self {
        self.headless = headless;
        self
    }

    pub fn with_credentials(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    pub fn with_storage_state(mut self, path: impl Into<PathBuf>) -> Self {
        self.storage_state = path.into();
        self
    }

    pub fn with_navigation_timeout(mut self, timeout: Duration) -> Self {
        self.navigation_timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn browser(&self) -> BrowserKind {
        self.browser
    }

    pub fn headless(&self) -> bool {
        self.headless
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    pub fn storage_state(&self) -> &Path {
        &self.storage_state
    }

    pub fn navigation_timeout(&self) -> Duration {
        self.navigation_timeout
    }

    /// Absolute URL of `path` on the storefront.
    pub fn url_for(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path)?)
    }
}

fn parse_base_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw.trim())?;
    match url.scheme() {
        "http" | "https" if url.host().is_some() => Ok(url),
        _ => Err(Error::InvalidBaseUrl(raw.to_string())),
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
