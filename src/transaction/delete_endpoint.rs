use axum::{
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    AppState, Error,
    store::Store,
    transaction::{Transaction, TransactionId},
};

/// A route handler for removing a transaction from an account, responds with
/// the status 204 No Content.
///
/// The transaction's amount is subtracted from the account's balance.
pub async fn delete_transaction_endpoint(
    State(state): State<AppState>,
    Path((user, transaction_id)): Path<(String, TransactionId)>,
) -> Result<StatusCode, Error> {
    tracing::debug!("delete_transaction; user = {user:?}, transaction_id = {transaction_id:?}");

    let mut store = state.lock_store()?;
    delete_transaction(&user, &transaction_id, &mut store)?;

    tracing::info!("Removed transaction {transaction_id} from account {user}");

    Ok(StatusCode::NO_CONTENT)
}

fn delete_transaction(
    user: &str,
    id: &TransactionId,
    store: &mut Store,
) -> Result<Transaction, Error> {
    store.account_mut(user)?.remove_transaction(id)
}
