//! Defines the endpoint for updating an account's currency and description.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Deserialize;
use serde_json::Value;

use crate::{
    AppState, Error,
    account::Account,
    request_body::{JsonBody, is_truthy, truthy_text},
    store::Store,
};

/// The request body for updating an account.
///
/// Only `currency` and `description` may be changed. The other fields are
/// read so that attempts to change them can be rejected.
#[derive(Debug, Default, Deserialize)]
pub struct EditAccountBody {
    /// The new currency label.
    pub currency: Option<Value>,
    /// The new description.
    pub description: Option<Value>,
    /// Not editable.
    pub user: Option<Value>,
    /// Not editable.
    pub balance: Option<Value>,
    /// Not editable.
    pub transactions: Option<Value>,
}

/// A route handler for updating an account, responds with the updated account.
pub async fn edit_account_endpoint(
    State(state): State<AppState>,
    Path(user): Path<String>,
    JsonBody(body): JsonBody<EditAccountBody>,
) -> Result<Json<Account>, Error> {
    tracing::debug!("edit_account; user = {user:?}, body = {body:?}");

    let mut store = state.lock_store()?;
    let account = update_account(&user, &body, &mut store)?;

    tracing::info!("Updated account for {}", account.user);

    Ok(Json(account))
}

/// Apply the truthy fields of `body` to the account for `user`.
///
/// # Errors
/// - [Error::UserNotFound] if there is no account for `user`,
/// - [Error::ReadOnlyField] if `body` tries to change the user, balance or
///   transactions.
///
/// The store is not modified on error.
fn update_account(user: &str, body: &EditAccountBody, store: &mut Store) -> Result<Account, Error> {
    let account = store.account_mut(user)?;

    if is_truthy(body.user.as_ref())
        || is_truthy(body.balance.as_ref())
        || is_truthy(body.transactions.as_ref())
    {
        return Err(Error::ReadOnlyField);
    }

    if let Some(currency) = truthy_text(body.currency.as_ref()) {
        account.currency = currency;
    }

    if let Some(description) = truthy_text(body.description.as_ref()) {
        account.description = description;
    }

    Ok(account.clone())
}
