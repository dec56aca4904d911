//! Defines the core data model for transactions and how their IDs are derived.

use serde::{Deserialize, Serialize};

/// The ID of a transaction, a lowercase hex MD5 digest of its content.
pub type TransactionId = String;

// ============================================================================
// MODELS
// ============================================================================

/// An expense or income, i.e. an event where money was either spent or earned.
///
/// To create a new `Transaction`, use [Transaction::new] so that the ID is
/// derived from the transaction's content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction, see [create_transaction_id].
    pub id: TransactionId,
    /// When the transaction happened, expected to be formatted as `YYYY-MM-DD`.
    pub date: String,
    /// A text description of what the transaction was for.
    pub object: String,
    /// The amount of money spent or earned in this transaction.
    ///
    /// Positive values are credits, negative values are debits.
    pub amount: f64,
}

impl Transaction {
    /// Create a new transaction.
    ///
    /// `amount_text` is the amount as the client sent it and is only used to
    /// derive the ID, so that `"20"` and `"20.00"` are distinct transactions
    /// even though both have the amount 20.
    pub fn new(date: &str, object: &str, amount: f64, amount_text: &str) -> Self {
        Self {
            id: create_transaction_id(date, object, amount_text),
            date: date.to_owned(),
            object: object.to_owned(),
            amount,
        }
    }
}

// ============================================================================
// IDS
// ============================================================================

/// Creates the ID for a transaction from its date, object and amount.
///
/// The ID is the MD5 digest of the three fields concatenated, rendered as
/// lowercase hex. Transactions with the same content get the same ID, which
/// is how duplicate submissions are detected.
pub fn create_transaction_id(date: &str, object: &str, amount_text: &str) -> TransactionId {
    let digest = md5::compute(format!("{date}{object}{amount_text}"));

    format!("{digest:x}")
}

#[cfg(test)]
mod create_transaction_id_tests {
    use super::create_transaction_id;

    #[test]
    fn is_md5_hex_of_concatenated_fields() {
        // md5("2023-01-01Gift20")
        let want = format!("{:x}", md5::compute("2023-01-01Gift20"));

        let got = create_transaction_id("2023-01-01", "Gift", "20");

        assert_eq!(got, want);
        assert_eq!(got.len(), 32);
        assert!(got.chars().all(|c| c.is_ascii_hexdigit() && !c.is_uppercase()));
    }

    #[test]
    fn empty_input_matches_known_digest() {
        assert_eq!(
            create_transaction_id("", "", ""),
            "d41d8cd98f00b204e9800998ecf8427e"
        );
    }

    #[test]
    fn same_content_gives_same_id() {
        assert_eq!(
            create_transaction_id("2022-10-26", "Book", "-10"),
            create_transaction_id("2022-10-26", "Book", "-10")
        );
    }

    #[test]
    fn different_content_gives_different_ids() {
        let id = create_transaction_id("2022-10-26", "Book", "-10");

        assert_ne!(id, create_transaction_id("2022-10-27", "Book", "-10"));
        assert_ne!(id, create_transaction_id("2022-10-26", "Books", "-10"));
        assert_ne!(id, create_transaction_id("2022-10-26", "Book", "-10.00"));
    }
}
