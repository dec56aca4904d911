//! Defines the account model and the operations that keep its balance in step
//! with its transactions.

use serde::{Deserialize, Serialize};

use crate::{
    Error,
    transaction::{Transaction, TransactionId},
};

/// A named budget with a running balance and its transaction history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// The name of the user that owns the account, also the account's key.
    pub user: String,
    /// The currency label, e.g. "$" or "EUR".
    pub currency: String,
    /// A text description of the account.
    pub description: String,
    /// The opening balance plus the amounts of all transactions in the account.
    pub balance: f64,
    /// The transactions in the order they were added.
    pub transactions: Vec<Transaction>,
}

impl Account {
    /// Create an account with no transactions.
    ///
    /// If `description` is `None`, the description defaults to "<user>'s budget".
    pub fn new(user: &str, currency: &str, description: Option<String>, balance: f64) -> Self {
        Self {
            user: user.to_owned(),
            currency: currency.to_owned(),
            description: description.unwrap_or_else(|| format!("{user}'s budget")),
            balance,
            transactions: Vec::new(),
        }
    }

    /// Get the transaction with the ID `id`.
    pub fn transaction(&self, id: &str) -> Option<&Transaction> {
        self.transactions
            .iter()
            .find(|transaction| transaction.id == id)
    }

    /// Append `transaction` and add its amount to the balance.
    ///
    /// # Errors
    /// - [Error::DuplicateTransaction] if the account already has a
    ///   transaction with the same ID,
    /// - [Error::BalanceOutOfRange] if the new balance would not be finite.
    ///
    /// The account is left unchanged on error.
    pub fn add_transaction(&mut self, transaction: Transaction) -> Result<&Transaction, Error> {
        if self.transaction(&transaction.id).is_some() {
            return Err(Error::DuplicateTransaction);
        }

        self.balance = finite_balance(self.balance + transaction.amount)?;
        self.transactions.push(transaction);

        Ok(&self.transactions[self.transactions.len() - 1])
    }

    /// Remove the transaction with the ID `id` and subtract its amount from
    /// the balance.
    ///
    /// # Errors
    /// - [Error::TransactionNotFound] if there is no such transaction,
    /// - [Error::BalanceOutOfRange] if the new balance would not be finite.
    ///
    /// The account is left unchanged on error.
    pub fn remove_transaction(&mut self, id: &TransactionId) -> Result<Transaction, Error> {
        let index = self
            .transactions
            .iter()
            .position(|transaction| &transaction.id == id)
            .ok_or(Error::TransactionNotFound)?;

        self.balance = finite_balance(self.balance - self.transactions[index].amount)?;

        Ok(self.transactions.remove(index))
    }
}

/// Balances are serialised as JSON numbers, which cannot hold infinity.
fn finite_balance(balance: f64) -> Result<f64, Error> {
    if balance.is_finite() {
        Ok(balance)
    } else {
        Err(Error::BalanceOutOfRange)
    }
}
