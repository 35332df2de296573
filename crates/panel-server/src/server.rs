//! HTTP server implementation using Axum.

use crate::handlers;
use axum::{
    routing::{get, post},
    Router,
};
use panel_core::config::ServerConfig;
use panel_core::PanelApi;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::oneshot;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

/// Application state shared across handlers.
pub struct AppState {
    /// Catalog and launcher
    pub api: PanelApi,
    /// Port the listener is actually bound to
    pub port: u16,
}

/// Build the router: JSON API under `/api`, the control page at `/`.
///
/// With `static_dir` set, `/` serves its `index.html` and `/static` serves
/// the directory. Otherwise `/` serves the page compiled into the binary.
pub fn build_router(state: Arc<AppState>, static_dir: Option<PathBuf>) -> Router {
    // Phones on the LAN load the page from a different origin during development
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let router = Router::new()
        .route("/api/health", get(handlers::health))
        .route("/api/ip", get(handlers::get_ip))
        .route("/api/open-app", post(handlers::open_app))
        .route(
            "/api/shortcuts",
            get(handlers::list_shortcuts).post(handlers::create_shortcut),
        )
        .route(
            "/api/shortcuts/:id",
            get(handlers::get_shortcut).delete(handlers::delete_shortcut),
        )
        .route("/api/shortcuts/:id/logo.svg", get(handlers::get_shortcut_logo));

    let router = match static_dir {
        Some(dir) => {
            let index = ServeFile::new(dir.join(ServerConfig::INDEX_FILE_NAME));
            router
                .route_service("/", index)
                .nest_service("/static", ServeDir::new(dir))
        }
        None => router.route("/", get(handlers::index)),
    };

    router
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}

/// Handle to a running server.
pub struct ServerHandle {
    addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
    task_handle: Option<tokio::task::JoinHandle<()>>,
}

impl ServerHandle {
    /// Get the address the server is listening on.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Stop accepting connections and wait for in-flight requests to finish.
    pub async fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.task_handle.take() {
            let _ = handle.await;
        }
    }
}

impl Drop for ServerHandle {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

/// Start the HTTP server.
///
/// Returns once the listener is bound; the server runs in the background.
/// Port 0 picks a free port, see [`ServerHandle::addr`].
pub async fn start_server(
    api: PanelApi,
    static_dir: Option<PathBuf>,
    host: &str,
    port: u16,
) -> anyhow::Result<ServerHandle> {
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    let actual_addr = listener.local_addr()?;

    let state = Arc::new(AppState {
        api,
        port: actual_addr.port(),
    });
    let app = build_router(state, static_dir);

    info!("Server listening on {}", actual_addr);

    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
    let task_handle = tokio::spawn(async move {
        let result = axum::serve(listener, app)
            .with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
            })
            .await;
        if let Err(e) = result {
            error!("Server error: {}", e);
        }
    });

    Ok(ServerHandle {
        addr: actual_addr,
        shutdown_tx: Some(shutdown_tx),
        task_handle: Some(task_handle),
    })
}
