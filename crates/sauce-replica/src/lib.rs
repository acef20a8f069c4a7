// sauce-replica: Local replica of the Swag Labs storefront
//
// Serves the six storefront screens with the same routes, `data-test`
// selectors, login rules, cart persistence and checkout arithmetic as
// https://www.saucedemo.com, so the end-to-end suite can run offline and
// deterministically.
//
// # Example
//
// ```ignore
// let server = sauce_replica::ReplicaServer::start().await?;
// println!("storefront at {}", server.url());
// server.shutdown();
// ```

pub mod catalog;
pub mod pages;

use axum::{
    Router,
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use std::net::SocketAddr;
use tokio::net::{TcpListener, ToSocketAddrs};
use tokio::task::JoinHandle;

pub use catalog::{Catalog, Product};
pub use pages::Screen;

const APP_JS: &str = include_str!("../assets/app.js");

/// Handle to a running replica server.
///
/// The server task is aborted by [`ReplicaServer::shutdown`]; dropping the
/// handle leaves it running until the runtime stops.
pub struct ReplicaServer {
    addr: SocketAddr,
    handle: JoinHandle<()>,
}

impl ReplicaServer {
    /// Starts the replica on a random available loopback port.
    pub async fn start() -> std::io::Result<Self> {
        Self::bind("127.0.0.1:0").await
    }

    /// Starts the replica on a specific address.
    pub async fn bind(addr: impl ToSocketAddrs) -> std::io::Result<Self> {
        let listener = TcpListener::bind(addr).await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, router()).await {
                tracing::error!("Replica server stopped: {}", e);
            }
        });

        tracing::info!("Swag Labs replica listening on http://{}", addr);
        Ok(Self { addr, handle })
    }

    /// Base URL of the server, without a trailing slash.
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Stops the server.
    pub fn shutdown(self) {
        tracing::debug!("Shutting down replica on {}", self.addr);
        self.handle.abort();
    }
}

/// Router serving every storefront screen and static asset.
pub fn router() -> Router {
    let mut router = Router::new()
        .route("/index.html", get(|| screen(Screen::Login)))
        .route("/static/app.js", get(app_js))
        .route("/static/pony-express.svg", get(pony_express));

    for s in Screen::ALL {
        router = router.route(s.path(), get(move || screen(s)));
    }

    router
}

async fn screen(screen: Screen) -> Response {
    match pages::render(screen, &Catalog::default()) {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!("Failed to render {:?}: {}", screen, e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

async fn app_js() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "application/javascript")], APP_JS)
}

async fn pony_express() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "image/svg+xml")], pages::PONY_EXPRESS_SVG)
}
