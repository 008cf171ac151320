//! Route definitions for the CashBook API

mod loan;
mod registry;
mod repayment;
mod transaction;
mod upload;

pub use loan::loan_routes;
pub use registry::registry_routes;
pub use repayment::repayment_routes;
pub use transaction::transaction_routes;
pub use upload::upload_routes;

use axum::Router;

use crate::state::AppState;

/// Compose every API route group into one router.
pub fn api_router() -> Router<AppState> {
    Router::new()
        .merge(loan_routes())
        .merge(repayment_routes())
        .merge(transaction_routes())
        .merge(registry_routes())
        .merge(upload_routes())
}
