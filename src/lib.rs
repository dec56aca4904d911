//! Budget API is a REST API for tracking budgets.
//!
//! Clients create named accounts, attach dated transactions to them, and each
//! account's balance is kept up to date as transactions are added and removed.
//! All data is held in memory for the lifetime of the process.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum_server::Handle;
use tokio::signal;

mod account;
mod app_state;
mod config;
mod cors;
pub mod endpoints;
mod error;
mod logging;
mod request_body;
mod routing;
mod store;
mod transaction;

#[cfg(test)]
mod test_utils;

pub use account::Account;
pub use app_state::AppState;
pub use config::{DEFAULT_PORT, PORT_ENV_KEY, parse_port_or_default};
pub use cors::cors_layer;
pub use error::Error;
pub use logging::{LOG_BODY_LENGTH_LIMIT, REQUEST_BODY_LIMIT, logging_middleware};
pub use routing::build_router;
pub use store::Store;
pub use transaction::{Transaction, TransactionId, create_transaction_id};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}
