//! The in-memory store that holds every account.

use std::collections::HashMap;

use crate::{Error, account::Account, transaction::Transaction};

/// Maps user names to their accounts.
///
/// The store lives for as long as the process, nothing is persisted.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Store {
    accounts: HashMap<String, Account>,
}

impl Store {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding a demo account for the user "test".
    pub fn with_demo_account() -> Self {
        let mut account = Account::new("test", "$", Some("Test account".to_owned()), 40.0);

        for (date, object, amount) in [
            ("2022-10-25", "Pocket money", 50.0),
            ("2022-10-26", "Book", -10.0),
            ("2022-10-28", "Sandwich", -5.0),
        ] {
            let transaction = Transaction::new(date, object, amount, &amount.to_string());
            account
                .add_transaction(transaction)
                .expect("demo transactions are distinct and small");
        }

        let mut store = Self::new();
        store.accounts.insert(account.user.clone(), account);

        store
    }

    /// The number of accounts in the store.
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Whether the store has no accounts.
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Whether there is an account for `user`.
    pub fn contains(&self, user: &str) -> bool {
        self.accounts.contains_key(user)
    }

    /// Get the account for `user`.
    ///
    /// # Errors
    /// Returns [Error::UserNotFound] if there is no account for `user`.
    pub fn account(&self, user: &str) -> Result<&Account, Error> {
        self.accounts.get(user).ok_or(Error::UserNotFound)
    }

    /// Get the account for `user` for modification.
    ///
    /// # Errors
    /// Returns [Error::UserNotFound] if there is no account for `user`.
    pub fn account_mut(&mut self, user: &str) -> Result<&mut Account, Error> {
        self.accounts.get_mut(user).ok_or(Error::UserNotFound)
    }

    /// Insert a new account, keyed by its user.
    ///
    /// # Errors
    /// Returns [Error::DuplicateUser] if the user already has an account.
    /// The existing account is left unchanged.
    pub fn insert_account(&mut self, account: Account) -> Result<&Account, Error> {
        if self.contains(&account.user) {
            return Err(Error::DuplicateUser);
        }

        let user = account.user.clone();
        Ok(&*self.accounts.entry(user).or_insert(account))
    }

    /// Remove the account for `user` along with all of its transactions.
    ///
    /// # Errors
    /// Returns [Error::UserNotFound] if there is no account for `user`.
    pub fn remove_account(&mut self, user: &str) -> Result<Account, Error> {
        self.accounts.remove(user).ok_or(Error::UserNotFound)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Error, account::Account, store::Store};

    #[test]
    fn insert_then_get_account() {
        let mut store = Store::new();
        let account = Account::new("alice", "$", None, 0.0);

        store.insert_account(account.clone()).unwrap();

        assert_eq!(store.account("alice"), Ok(&account));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn insert_duplicate_user_keeps_existing_account() {
        let mut store = Store::new();
        let account = Account::new("alice", "$", None, 10.0);
        store.insert_account(account.clone()).unwrap();

        let result = store.insert_account(Account::new("alice", "EUR", None, 99.0));

        assert_eq!(result, Err(Error::DuplicateUser));
        assert_eq!(store.account("alice"), Ok(&account));
    }

    #[test]
    fn get_missing_account_fails() {
        let mut store = Store::new();

        assert_eq!(store.account("nobody"), Err(Error::UserNotFound));
        assert_eq!(store.account_mut("nobody"), Err(Error::UserNotFound));
    }

    #[test]
    fn remove_account_deletes_it() {
        let mut store = Store::new();
        store
            .insert_account(Account::new("alice", "$", None, 0.0))
            .unwrap();

        store.remove_account("alice").unwrap();

        assert!(store.is_empty());
        assert_eq!(store.account("alice"), Err(Error::UserNotFound));
    }

    #[test]
    fn remove_missing_account_leaves_store_unchanged() {
        let mut store = Store::with_demo_account();
        let want = store.clone();

        let result = store.remove_account("nobody");

        assert_eq!(result, Err(Error::UserNotFound));
        assert_eq!(store, want);
    }

    #[test]
    fn demo_account_balance_includes_transactions() {
        let store = Store::with_demo_account();

        let account = store.account("test").unwrap();

        assert_eq!(account.description, "Test account");
        assert_eq!(account.transactions.len(), 3);
        assert_eq!(account.balance, 75.0);
    }

    #[test]
    fn demo_transactions_have_distinct_ids() {
        let store = Store::with_demo_account();
        let account = store.account("test").unwrap();

        let mut ids: Vec<_> = account.transactions.iter().map(|t| &t.id).collect();
        ids.sort();
        ids.dedup();

        assert_eq!(ids.len(), account.transactions.len());
    }
}
