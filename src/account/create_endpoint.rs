//! Defines the endpoint for creating a new account.

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Deserialize;
use serde_json::Value;

use crate::{
    AppState, Error,
    account::Account,
    request_body::{JsonBody, is_truthy, number_value, truthy_text},
    store::Store,
};

/// The request body for creating an account.
///
/// Fields are kept as raw JSON values so that numbers sent as text can be
/// parsed and missing fields reported as [Error::MissingParameters].
#[derive(Debug, Default, Deserialize)]
pub struct CreateAccountBody {
    /// The name of the user, required.
    pub user: Option<Value>,
    /// The currency label, required.
    pub currency: Option<Value>,
    /// Defaults to "<user>'s budget".
    pub description: Option<Value>,
    /// The opening balance as a number or numeric text, defaults to zero.
    pub balance: Option<Value>,
}

/// A route handler for creating a new account, responds with the account and
/// the status 201 Created.
pub async fn create_account_endpoint(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<CreateAccountBody>,
) -> Result<impl IntoResponse, Error> {
    tracing::debug!("create_account; body = {body:?}");

    let mut store = state.lock_store()?;
    let account = create_account(&body, &mut store)?;

    tracing::info!("Created account for {}", account.user);

    Ok((StatusCode::CREATED, Json(account)))
}

/// Validate `body` and add the new account to `store`.
///
/// # Errors
/// - [Error::MissingParameters] if `user` or `currency` is missing,
/// - [Error::DuplicateUser] if the user already has an account,
/// - [Error::InvalidBalance] if `balance` is not a number.
///
/// The store is not modified on error.
pub fn create_account(body: &CreateAccountBody, store: &mut Store) -> Result<Account, Error> {
    let (Some(user), Some(currency)) = (
        truthy_text(body.user.as_ref()),
        truthy_text(body.currency.as_ref()),
    ) else {
        return Err(Error::MissingParameters);
    };

    if store.contains(&user) {
        return Err(Error::DuplicateUser);
    }

    let balance = parse_balance(body.balance.as_ref())?;
    let description = truthy_text(body.description.as_ref());

    store
        .insert_account(Account::new(&user, &currency, description, balance))
        .cloned()
}

fn parse_balance(balance: Option<&Value>) -> Result<f64, Error> {
    match balance {
        Some(value) if is_truthy(Some(value)) => number_value(value).ok_or(Error::InvalidBalance),
        _ => Ok(0.0),
    }
}
