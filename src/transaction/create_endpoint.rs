//! Defines the endpoint for adding a transaction to an account.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use serde_json::Value;

use crate::{
    AppState, Error,
    request_body::{JsonBody, is_truthy, number_value, truthy_text, value_text},
    store::Store,
    transaction::Transaction,
};

/// The request body for adding a transaction.
#[derive(Debug, Default, Deserialize)]
pub struct TransactionBody {
    /// When the transaction happened, required.
    pub date: Option<Value>,
    /// What the transaction was for, required.
    pub object: Option<Value>,
    /// The amount as a number or numeric text, required and non-zero.
    pub amount: Option<Value>,
}

/// A route handler for adding a transaction to an account, responds with the
/// transaction and the status 201 Created.
pub async fn create_transaction_endpoint(
    State(state): State<AppState>,
    Path(user): Path<String>,
    JsonBody(body): JsonBody<TransactionBody>,
) -> Result<impl IntoResponse, Error> {
    tracing::debug!("create_transaction; user = {user:?}, body = {body:?}");

    let mut store = state.lock_store()?;
    let transaction = create_transaction(&user, &body, &mut store)?;

    tracing::info!("Added transaction {} to account {user}", transaction.id);

    Ok((StatusCode::CREATED, Json(transaction)))
}

/// Validate `body` and add the transaction to the account for `user`.
///
/// The amount is added to the account's balance.
///
/// # Errors
/// - [Error::UserNotFound] if there is no account for `user`,
/// - [Error::MissingParameters] if `date`, `object` or `amount` is missing or
///   falsy (so an amount of zero is rejected),
/// - [Error::InvalidAmount] if `amount` is not a number,
/// - [Error::DuplicateTransaction] if the account already has a transaction
///   with the same date, object and amount,
/// - [Error::BalanceOutOfRange] if the new balance would not be finite.
///
/// The store is not modified on error.
pub fn create_transaction(
    user: &str,
    body: &TransactionBody,
    store: &mut Store,
) -> Result<Transaction, Error> {
    let account = store.account_mut(user)?;

    let (Some(date), Some(object), Some(raw_amount)) = (
        truthy_text(body.date.as_ref()),
        truthy_text(body.object.as_ref()),
        body.amount.as_ref().filter(|amount| is_truthy(Some(*amount))),
    ) else {
        return Err(Error::MissingParameters);
    };

    let amount = number_value(raw_amount).ok_or(Error::InvalidAmount)?;
    let transaction = Transaction::new(&date, &object, amount, &value_text(raw_amount));

    account.add_transaction(transaction).cloned()
}

#[cfg(test)]
mod tests {
    use axum::{
        extract::{Path, State},
        http::StatusCode,
        response::IntoResponse,
    };
    use serde_json::{Value, json};

    use crate::{
        AppState, Error,
        account::Account,
        request_body::JsonBody,
        store::Store,
        test_utils::{assert_error_body, parse_json_body},
        transaction::{
            Transaction, create_transaction_endpoint, create_transaction_id,
            create_endpoint::{TransactionBody, create_transaction},
        },
    };

    fn body(value: Value) -> TransactionBody {
        serde_json::from_value(value).expect("could not deserialize test body")
    }

    fn must_create_store() -> Store {
        let mut store = Store::new();
        store
            .insert_account(Account::new("alice", "$", None, 0.0))
            .unwrap();
        store
    }

    #[tokio::test]
    async fn can_create_transaction() {
        let state = AppState::new(must_create_store());

        let response = create_transaction_endpoint(
            State(state.clone()),
            Path("alice".to_owned()),
            JsonBody(body(
                json!({ "date": "2023-01-01", "object": "Gift", "amount": 20 }),
            )),
        )
        .await
        .into_response();

        assert_eq!(response.status(), StatusCode::CREATED);
        let got: Transaction = parse_json_body(response).await;
        assert_eq!(
            got,
            Transaction {
                id: create_transaction_id("2023-01-01", "Gift", "20"),
                date: "2023-01-01".to_owned(),
                object: "Gift".to_owned(),
                amount: 20.0,
            }
        );

        let store = state.store.lock().unwrap();
        let account = store.account("alice").unwrap();
        assert_eq!(account.balance, 20.0);
        assert_eq!(account.transactions, vec![got]);
    }

    #[tokio::test]
    async fn missing_account_responds_with_not_found() {
        let state = AppState::new(must_create_store());

        let response = create_transaction_endpoint(
            State(state),
            Path("bob".to_owned()),
            JsonBody(body(
                json!({ "date": "2023-01-01", "object": "Gift", "amount": 20 }),
            )),
        )
        .await
        .into_response();

        assert_error_body(response, StatusCode::NOT_FOUND, "User does not exist").await;
    }

    #[test]
    fn missing_account_is_checked_before_parameters() {
        let mut store = must_create_store();

        let result = create_transaction("bob", &body(json!({})), &mut store);

        assert_eq!(result, Err(Error::UserNotFound));
    }

    #[test]
    fn adds_amount_to_balance() {
        let mut store = Store::with_demo_account();
        let balance_before = store.account("test").unwrap().balance;

        create_transaction(
            "test",
            &body(json!({ "date": "2022-11-01", "object": "Lunch", "amount": -12.5 })),
            &mut store,
        )
        .unwrap();

        let account = store.account("test").unwrap();
        assert_eq!(account.balance, balance_before - 12.5);
        assert_eq!(account.transactions.len(), 4);
    }

    #[test]
    fn parses_amount_from_text_and_hashes_raw_text() {
        let mut store = must_create_store();

        let transaction = create_transaction(
            "alice",
            &body(json!({ "date": "2023-01-01", "object": "Gift", "amount": "20.00" })),
            &mut store,
        )
        .unwrap();

        assert_eq!(transaction.amount, 20.0);
        assert_eq!(
            transaction.id,
            create_transaction_id("2023-01-01", "Gift", "20.00")
        );
    }

    #[test]
    fn zero_amount_is_rejected_as_missing() {
        let mut store = must_create_store();

        let result = create_transaction(
            "alice",
            &body(json!({ "date": "2023-01-01", "object": "Nothing", "amount": 0 })),
            &mut store,
        );

        assert_eq!(result, Err(Error::MissingParameters));
    }

    #[test]
    fn missing_parameters_do_not_modify_store() {
        let bodies = [
            json!({}),
            json!({ "object": "Gift", "amount": 20 }),
            json!({ "date": "2023-01-01", "amount": 20 }),
            json!({ "date": "2023-01-01", "object": "Gift" }),
            json!({ "date": "", "object": "Gift", "amount": 20 }),
            json!({ "date": "2023-01-01", "object": "Gift", "amount": "" }),
        ];

        for value in bodies {
            let mut store = must_create_store();
            let want = store.clone();

            let result = create_transaction("alice", &body(value.clone()), &mut store);

            assert_eq!(result, Err(Error::MissingParameters), "body {value}");
            assert_eq!(store, want);
        }
    }

    #[test]
    fn invalid_amount_does_not_modify_store() {
        let mut store = must_create_store();
        let want = store.clone();

        let result = create_transaction(
            "alice",
            &body(json!({ "date": "2023-01-01", "object": "Gift", "amount": "twenty" })),
            &mut store,
        );

        assert_eq!(result, Err(Error::InvalidAmount));
        assert_eq!(store, want);
    }

    #[test]
    fn duplicate_transaction_does_not_modify_account() {
        let mut store = must_create_store();
        let transaction_body =
            body(json!({ "date": "2023-01-01", "object": "Gift", "amount": 20 }));
        create_transaction("alice", &transaction_body, &mut store).unwrap();
        let want = store.clone();

        let result = create_transaction("alice", &transaction_body, &mut store);

        assert_eq!(result, Err(Error::DuplicateTransaction));
        assert_eq!(store, want);
    }

    #[test]
    fn same_transaction_can_be_added_to_different_accounts() {
        let mut store = must_create_store();
        store
            .insert_account(Account::new("bob", "$", None, 0.0))
            .unwrap();
        let transaction_body =
            body(json!({ "date": "2023-01-01", "object": "Gift", "amount": 20 }));

        let first = create_transaction("alice", &transaction_body, &mut store).unwrap();
        let second = create_transaction("bob", &transaction_body, &mut store).unwrap();

        assert_eq!(first, second);
    }
}
