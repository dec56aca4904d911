//! Defines the endpoint for deleting an account.

use axum::{
    extract::{Path, State},
    http::StatusCode,
};

use crate::{AppState, Error, account::Account, store::Store};

/// A route handler for deleting an account and all of its transactions,
/// responds with the status 204 No Content.
pub async fn delete_account_endpoint(
    State(state): State<AppState>,
    Path(user): Path<String>,
) -> Result<StatusCode, Error> {
    tracing::debug!("delete_account; user = {user:?}");

    let mut store = state.lock_store()?;
    let account = delete_account(&user, &mut store)?;

    tracing::info!(
        "Deleted account for {} with {} transactions",
        account.user,
        account.transactions.len()
    );

    Ok(StatusCode::NO_CONTENT)
}

fn delete_account(user: &str, store: &mut Store) -> Result<Account, Error> {
    store.remove_account(user)
}
