//! Repayment API handlers

use axum::{extract::State, http::StatusCode, Json};

use crate::error::{ApiError, AppJson, AppQuery};
use crate::models::ApiResponse;
use crate::repayment::{CreateRepaymentRequest, ListRepaymentsQuery, Repayment};
use crate::state::AppState;

pub async fn create_repayment(
    State(state): State<AppState>,
    AppJson(request): AppJson<CreateRepaymentRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Repayment>>), ApiError> {
    // Loan existence is verified here at the API boundary; the ledger
    // itself stores only a non-owning reference.
    if let Some(loan_id) = request.loan_id {
        state.loan_service.get_loan(loan_id).await?;
    }

    let entry = state.repayment_service.create_repayment(request).await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(entry))))
}

pub async fn list_repayments(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<ListRepaymentsQuery>,
) -> Result<Json<ApiResponse<Vec<Repayment>>>, ApiError> {
    let entries = state
        .repayment_service
        .list_repayments(query.loan_id)
        .await?;

    Ok(Json(ApiResponse::ok(entries)))
}
