//! Defines the endpoint for reading an account.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::{AppState, Error, account::Account};

/// A route handler for getting an account along with all of its transactions.
pub async fn get_account_endpoint(
    State(state): State<AppState>,
    Path(user): Path<String>,
) -> Result<Json<Account>, Error> {
    tracing::debug!("get_account; user = {user:?}");

    let store = state.lock_store()?;
    let account = store.account(&user)?;

    Ok(Json(account.clone()))
}
