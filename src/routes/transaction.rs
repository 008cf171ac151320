//! Transaction route definitions

use axum::Router;

use crate::handlers::*;
use crate::state::AppState;

pub fn transaction_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/transactions",
            axum::routing::get(list_transactions)
                .post(create_transaction)
                .delete(delete_transactions),
        )
        .route(
            "/api/transactions/type/:type",
            axum::routing::get(list_transactions_by_type),
        )
        .route(
            "/api/transactions/:id",
            axum::routing::put(update_transaction),
        )
}
