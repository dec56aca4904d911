//! Transaction management for the budgeting application.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model and how transaction IDs are derived from content
//! - The endpoints for adding transactions to and removing them from accounts

mod core;
mod create_endpoint;
mod delete_endpoint;

pub use core::{Transaction, TransactionId, create_transaction_id};
pub use create_endpoint::create_transaction_endpoint;
pub use delete_endpoint::delete_transaction_endpoint;
