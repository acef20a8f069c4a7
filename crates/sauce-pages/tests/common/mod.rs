// Shared setup for the storefront integration tests
//
// Tests run against a local `sauce-replica` server unless `SAUCE_BASE_URL`
// points them at a live storefront. Each test owns its browser, context and
// page, so tests can run in parallel.

// Each test binary compiles this module separately and uses a subset of it.
#![allow(dead_code)]

use playwright_rs::BrowserContext;
use sauce_pages::config::ENV_BASE_URL;
use sauce_pages::{BrowserSession, PageManager, SuiteConfig, fixtures, flows};
use sauce_replica::ReplicaServer;
use std::sync::Once;

static TRACING: Once = Once::new();

/// Installs a `RUST_LOG`-driven subscriber once per test binary.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .try_init();
    });
}

/// The storefront under test: a replica started for this test, or the
/// remote site named by `SAUCE_BASE_URL`.
pub struct Storefront {
    replica: Option<ReplicaServer>,
    config: SuiteConfig,
}

impl Storefront {
    pub async fn start() -> Self {
        init_tracing();
        let config = SuiteConfig::from_env().expect("Failed to load suite configuration");

        if std::env::var(ENV_BASE_URL).is_ok() {
            return Storefront {
                replica: None,
                config,
            };
        }

        let replica = ReplicaServer::start()
            .await
            .expect("Failed to start storefront replica");
        let config = config
            .with_base_url(&replica.url())
            .expect("Replica URL should be a valid base URL");
        Storefront {
            replica: Some(replica),
            config,
        }
    }

    pub fn config(&self) -> &SuiteConfig {
        &self.config
    }

    pub fn shutdown(self) {
        if let Some(replica) = self.replica {
            replica.shutdown();
        }
    }
}

/// A browser tab with every page object bound to it.
pub struct TestContext {
    pub pages: PageManager,
    context: BrowserContext,
    session: BrowserSession,
    storefront: Storefront,
    reused_session: bool,
}

impl TestContext {
    /// Fresh, unauthenticated context on the login screen.
    pub async fn start() -> Self {
        Self::start_with(|config| config).await
    }

    /// Like [`TestContext::start`], with a chance to adjust the configuration.
    pub async fn start_with<F>(adjust: F) -> Self
    where
        F: FnOnce(SuiteConfig) -> SuiteConfig,
    {
        let storefront = Storefront::start().await;
        let config = adjust(storefront.config().clone());
        let session = BrowserSession::launch(config)
            .await
            .expect("Failed to launch browser session");
        let (context, page) = session.new_page().await.expect("Failed to open page");
        let pages = PageManager::new(page, session.config()).await;
        pages
            .login()
            .open()
            .await
            .expect("Failed to open login screen");

        TestContext {
            pages,
            context,
            session,
            storefront,
            reused_session: false,
        }
    }

    /// Logged in as `standard_user` with an empty cart, on the inventory screen.
    pub async fn logged_in() -> Self {
        Self::logged_in_with(|config| config).await
    }

    /// Like [`TestContext::logged_in`], with a chance to adjust the configuration.
    ///
    /// The context is seeded from the configured storage state. The login form
    /// is only used when that state is missing or no longer accepted.
    pub async fn logged_in_with<F>(adjust: F) -> Self
    where
        F: FnOnce(SuiteConfig) -> SuiteConfig,
    {
        let storefront = Storefront::start().await;
        let config = adjust(storefront.config().clone());
        let session = BrowserSession::launch(config)
            .await
            .expect("Failed to launch browser session");
        let context = session
            .new_authenticated_context()
            .await
            .expect("Failed to open context");
        let page = context.new_page().await.expect("Failed to create page");
        let pages = PageManager::new(page, session.config()).await;

        let reused_session = flows::resume_session(&pages)
            .await
            .expect("Failed to open inventory");
        if !reused_session {
            flows::login(&pages, &fixtures::valid_user())
                .await
                .expect("Failed to log in as standard_user");
        }
        flows::reset_cart(&pages)
            .await
            .expect("Failed to reset cart");

        TestContext {
            pages,
            context,
            session,
            storefront,
            reused_session,
        }
    }

    pub fn config(&self) -> &SuiteConfig {
        self.session.config()
    }

    pub fn context(&self) -> &BrowserContext {
        &self.context
    }

    /// Whether [`TestContext::logged_in_with`] got past the login form through
    /// the stored session.
    pub fn reused_session(&self) -> bool {
        self.reused_session
    }

    pub async fn close(self) {
        self.context.close().await.expect("Failed to close context");
        self.session
            .close()
            .await
            .expect("Failed to close browser session");
        self.storefront.shutdown();
    }
}
