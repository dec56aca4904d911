//! Defines the app level error type and its conversion to JSON error responses.
use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A required field was missing from the request body, or it was present
    /// but falsy (e.g., an empty string or the number zero).
    #[error("Missing parameters")]
    MissingParameters,

    /// The opening balance of a new account could not be parsed as a number.
    #[error("Balance must be a number")]
    InvalidBalance,

    /// The amount of a new transaction could not be parsed as a number.
    #[error("Amount must be a number")]
    InvalidAmount,

    /// The change would take the account's balance beyond the range of a
    /// finite number.
    #[error("Balance is out of range")]
    BalanceOutOfRange,

    /// An account update tried to change a field other than the currency or
    /// description.
    #[error("Only currency and description are editable")]
    ReadOnlyField,

    /// The request body was not a JSON object or was sent with the wrong
    /// content type.
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// An account already exists for the user.
    #[error("User already exists")]
    DuplicateUser,

    /// A transaction with the same date, object and amount already exists in
    /// the account.
    ///
    /// Transaction IDs are derived from their content, so resubmitting the
    /// same transaction is rejected instead of recorded twice.
    #[error("Transaction already exists")]
    DuplicateTransaction,

    /// There is no account for the requested user.
    #[error("User does not exist")]
    UserNotFound,

    /// The account has no transaction with the requested ID.
    #[error("Transaction does not exist")]
    TransactionNotFound,

    /// The requested route does not exist.
    #[error("Not found")]
    NotFound,

    /// Could not acquire the store lock.
    ///
    /// This only happens if another request panicked while holding the lock.
    #[error("could not acquire the store lock")]
    StoreLockError,
}

impl Error {
    /// The HTTP status code the error is reported with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::MissingParameters
            | Error::InvalidBalance
            | Error::InvalidAmount
            | Error::BalanceOutOfRange
            | Error::ReadOnlyField
            | Error::InvalidBody(_) => StatusCode::BAD_REQUEST,
            Error::DuplicateUser | Error::DuplicateTransaction => StatusCode::CONFLICT,
            Error::UserNotFound | Error::TransactionNotFound | Error::NotFound => {
                StatusCode::NOT_FOUND
            }
            Error::StoreLockError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        Error::InvalidBody(rejection.body_text())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let error_message = match self {
            // Internal errors are not intended to be shown to the client.
            Error::StoreLockError => {
                tracing::error!("An unexpected error occurred: {}", self);
                "Internal server error".to_owned()
            }
            error => {
                tracing::warn!("Rejected request with {status}: {error}");
                error.to_string()
            }
        };

        (status, Json(json!({ "error": error_message }))).into_response()
    }
}
