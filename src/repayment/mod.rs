//! Repayment domain: the append-only loan repayment ledger.

pub mod model;
pub mod service;

pub use model::{CreateRepaymentRequest, EmiType, ListRepaymentsQuery, NewRepayment, Repayment};
pub use service::RepaymentService;
