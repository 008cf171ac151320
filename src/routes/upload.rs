//! Upload route definitions

use axum::Router;

use crate::handlers::*;
use crate::state::AppState;

pub fn upload_routes() -> Router<AppState> {
    Router::new().route("/api/uploads", axum::routing::post(upload_files))
}
