//! Loan API handlers

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use uuid::Uuid;

use crate::error::{ApiError, AppJson, AppPath};
use crate::loan::{CreateLoanRequest, Loan, LoanService, UpdateLoanRequest};
use crate::models::{ApiResponse, DeleteRequest, DeleteResponse};

pub async fn create_loan(
    State(service): State<Arc<LoanService>>,
    AppJson(request): AppJson<CreateLoanRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Loan>>), ApiError> {
    let loan = service.create_loan(request).await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(loan))))
}

pub async fn get_loan(
    State(service): State<Arc<LoanService>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<ApiResponse<Loan>>, ApiError> {
    let loan = service.get_loan(id).await?;

    Ok(Json(ApiResponse::ok(loan)))
}

pub async fn list_loans(
    State(service): State<Arc<LoanService>>,
) -> Result<Json<ApiResponse<Vec<Loan>>>, ApiError> {
    let loans = service.list_loans().await?;

    Ok(Json(ApiResponse::ok(loans)))
}

pub async fn update_loan(
    State(service): State<Arc<LoanService>>,
    AppPath(id): AppPath<Uuid>,
    AppJson(request): AppJson<UpdateLoanRequest>,
) -> Result<Json<ApiResponse<Loan>>, ApiError> {
    let loan = service.update_loan(id, request).await?;

    Ok(Json(ApiResponse::ok(loan)))
}

pub async fn delete_loans(
    State(service): State<Arc<LoanService>>,
    AppJson(request): AppJson<DeleteRequest>,
) -> Result<Json<ApiResponse<DeleteResponse>>, ApiError> {
    let deleted = service.delete_loans(&request.ids).await?;

    Ok(Json(ApiResponse::ok(DeleteResponse { deleted })))
}
