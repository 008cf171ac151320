//! Registry route definitions (parties, categories, payment modes)

use axum::Router;

use crate::handlers::*;
use crate::state::AppState;

pub fn registry_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/parties",
            axum::routing::get(list_parties).post(add_party),
        )
        .route(
            "/api/categories",
            axum::routing::get(list_categories).post(add_category),
        )
        .route(
            "/api/payment-modes",
            axum::routing::get(list_payment_modes).post(add_payment_mode),
        )
}
