//! Transaction domain: the cash-in / cash-out book.

pub mod model;
pub mod service;

pub use model::{
    CreateTransactionRequest, NewTransaction, Transaction, TransactionType,
    UpdateTransactionRequest,
};
pub use service::TransactionService;
