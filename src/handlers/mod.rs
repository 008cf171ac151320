//! API handlers for the CashBook backend

pub mod loan;
pub mod registry;
pub mod repayment;
pub mod transaction;
pub mod upload;

pub use loan::*;
pub use registry::*;
pub use repayment::*;
pub use transaction::*;
pub use upload::*;
