// Login screen (`/`)

use super::{check_enabled, check_visible, read_text};
use crate::error::Result;
use crate::fixtures::Credentials;
use crate::navigation::{Navigator, Route};
use crate::selectors::login as sel;
use playwright_rs::{Locator, expect};

/// Page object for the login screen.
#[derive(Debug, Clone)]
pub struct LoginPage {
    nav: Navigator,
    username_input: Locator,
    password_input: Locator,
    login_button: Locator,
    error_message: Locator,
    error_button: Locator,
    logo: Locator,
}

impl LoginPage {
    pub async fn new(nav: Navigator) -> Self {
        let page = nav.page();
        Self {
            username_input: page.locator(sel::USERNAME).await,
            password_input: page.locator(sel::PASSWORD).await,
            login_button: page.locator(sel::LOGIN_BUTTON).await,
            error_message: page.locator(sel::ERROR).await,
            error_button: page.locator(sel::ERROR_BUTTON).await,
            logo: page.locator(sel::LOGO).await,
            nav,
        }
    }

    pub async fn open(&self) -> Result<()> {
        self.nav.goto(Route::Login).await
    }

    pub async fn fill_username(&self, username: &str) -> Result<()> {
        tracing::debug!("Filling username '{}'", username);
        self.username_input.fill(username, None).await?;
        Ok(())
    }

    pub async fn fill_password(&self, password: &str) -> Result<()> {
        self.password_input.fill(password, None).await?;
        Ok(())
    }

    pub async fn click_login(&self) -> Result<()> {
        self.login_button.click(None).await?;
        Ok(())
    }

    /// Fills both fields and submits. Does not wait for the inventory screen.
    pub async fn login(&self, credentials: &Credentials) -> Result<()> {
        self.login_with(Some(&credentials.username), Some(&credentials.password))
            .await
    }

    /// Fills only the fields that are `Some`, then submits.
    pub async fn login_with(&self, username: Option<&str>, password: Option<&str>) -> Result<()> {
        if let Some(username) = username {
            self.fill_username(username).await?;
        }
        if let Some(password) = password {
            self.fill_password(password).await?;
        }
        self.click_login().await
    }

    /// Text of the error banner, exactly as rendered.
    pub async fn error_message(&self) -> Result<String> {
        read_text(&self.error_message).await
    }

    pub async fn is_error_visible(&self) -> Result<bool> {
        check_visible(&self.error_message).await
    }

    /// Waits for the error banner to appear and returns its text.
    pub async fn wait_for_error(&self) -> Result<String> {
        expect(self.error_message.clone())
            .with_timeout(self.nav.timeout())
            .to_be_visible()
            .await?;
        self.error_message().await
    }

    /// Closes the error banner.
    pub async fn dismiss_error(&self) -> Result<()> {
        self.error_button.click(None).await?;
        Ok(())
    }

    pub async fn is_login_button_visible(&self) -> Result<bool> {
        check_visible(&self.login_button).await
    }

    pub async fn is_login_button_enabled(&self) -> Result<bool> {
        check_enabled(&self.login_button).await
    }

    pub async fn logo_text(&self) -> Result<String> {
        read_text(&self.logo).await
    }

    pub fn is_open(&self) -> bool {
        self.nav.is_at(Route::Login)
    }

    pub fn navigator(&self) -> &Navigator {
        &self.nav
    }
}
