//! Transaction API handlers

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use uuid::Uuid;

use crate::error::{ApiError, AppJson, AppPath};
use crate::models::{ApiResponse, DeleteRequest, DeleteResponse};
use crate::transaction::{
    CreateTransactionRequest, Transaction, TransactionService, TransactionType,
    UpdateTransactionRequest,
};

pub async fn create_transaction(
    State(service): State<Arc<TransactionService>>,
    AppJson(request): AppJson<CreateTransactionRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Transaction>>), ApiError> {
    let transaction = service.create_transaction(request).await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(transaction))))
}

pub async fn list_transactions(
    State(service): State<Arc<TransactionService>>,
) -> Result<Json<ApiResponse<Vec<Transaction>>>, ApiError> {
    let transactions = service.list_transactions().await?;

    Ok(Json(ApiResponse::ok(transactions)))
}

pub async fn list_transactions_by_type(
    State(service): State<Arc<TransactionService>>,
    AppPath(tx_type): AppPath<String>,
) -> Result<Json<ApiResponse<Vec<Transaction>>>, ApiError> {
    let tx_type: TransactionType = tx_type.parse()?;
    let transactions = service.list_transactions_by_type(tx_type).await?;

    Ok(Json(ApiResponse::ok(transactions)))
}

pub async fn update_transaction(
    State(service): State<Arc<TransactionService>>,
    AppPath(id): AppPath<Uuid>,
    AppJson(request): AppJson<UpdateTransactionRequest>,
) -> Result<Json<ApiResponse<Transaction>>, ApiError> {
    let transaction = service.update_transaction(id, request).await?;

    Ok(Json(ApiResponse::ok(transaction)))
}

pub async fn delete_transactions(
    State(service): State<Arc<TransactionService>>,
    AppJson(request): AppJson<DeleteRequest>,
) -> Result<Json<ApiResponse<DeleteResponse>>, ApiError> {
    let deleted = service.delete_transactions(&request.ids).await?;

    Ok(Json(ApiResponse::ok(DeleteResponse { deleted })))
}
