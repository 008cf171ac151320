//! Loan domain: records, validation policy, and lifecycle management.

pub mod model;
pub mod service;

pub use model::{
    CreateLoanRequest, Loan, NewLoan, ReimbursementPlan, UpdateLoanRequest,
};
pub use service::LoanService;
