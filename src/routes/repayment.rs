//! Repayment route definitions

use axum::Router;

use crate::handlers::*;
use crate::state::AppState;

pub fn repayment_routes() -> Router<AppState> {
    Router::new().route(
        "/api/loan-repayments",
        axum::routing::get(list_repayments).post(create_repayment),
    )
}
