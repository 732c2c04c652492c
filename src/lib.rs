//! Documentation of a minimal guestbook.
//!
//! Visitors leave a name and a short message. Entries live in a hosted
//! Supabase table and are rendered newest first on a single page.
//!
//!
//!
//! # Request Flow
//! - `GET /` lists every entry and renders the full page
//! - `POST /submit-message` stores the entry, then returns only the `#message-list` container
//! - htmx swaps that container in place (`outerHTML`) and the form resets itself
//! - `GET /assets/favicon.png` serves the icon baked into the binary
//!
//!
//!
//! # Notes
//!
//! ## Validation
//! The form bounds `name` to 15 chars and `message` to 50 chars, both required. The server only
//! rejects payloads missing a field. Anything else, including empty or overlong values sent
//! directly, is stored as given.
//!
//! ## Ordering
//! The store assigns increasing ids. Listing sorts by id descending, so insertion order is the
//! display order without any locking on our side.
//!
//!
//!
//! # Setup
//!
//! Environment, either exported or in a `.env` file.
//! ```sh
//! SUPABASE_URL=https://<project>.supabase.co
//! SUPABASE_KEY=<anon key>
//! RUST_PORT=5001
//! RUST_LOG=info
//! ```
//!
//! The key may also be mounted as a secret at `/run/secrets/SUPABASE_KEY`.
//!
//! Table.
//! ```sql
//! create table guestbook (
//!     id bigint generated by default as identity primary key,
//!     name text,
//!     message text,
//!     timestamp text
//! );
//! ```
//!
//! Run.
//! ```sh
//! cargo run --release
//! ```
use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};

use signal::{
    ctrl_c,
    unix::{SignalKind, signal},
};
use tokio::{net::TcpListener, signal};
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt};

pub mod config;
pub mod database;
pub mod error;
pub mod guestbook;
pub mod render;
pub mod routes;
pub mod state;
pub mod utils;

use config::Config;
use error::AppError;
use render::components::{FAVICON_PATH, SUBMIT_PATH};
use routes::{favicon_handler, page_handler, submit_handler};
use state::AppState;

pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(page_handler))
        .route(SUBMIT_PATH, post(submit_handler))
        .route(FAVICON_PATH, get(favicon_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn start_server() -> Result<(), AppError> {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Loading config...");
    let config = Config::load()?;

    info!("Initializing state...");
    let state = AppState::new(&config)?;

    info!("Starting server...");
    let app = app(state);

    let address = config.address();
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address).await?;
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutting down...");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                error!("Failed to install Ctrl+C handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!("Failed to install signal handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
