//! Registry API handlers (parties, categories, payment modes)

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};

use crate::error::{ApiError, AppJson};
use crate::models::ApiResponse;
use crate::registry::{
    Category, CreateCategoryRequest, CreatePartyRequest, CreatePaymentModeRequest, Party,
    PaymentMode, RegistryService,
};

pub async fn add_party(
    State(service): State<Arc<RegistryService>>,
    AppJson(request): AppJson<CreatePartyRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Party>>), ApiError> {
    let party = service.add_party(request).await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(party))))
}

pub async fn list_parties(
    State(service): State<Arc<RegistryService>>,
) -> Result<Json<ApiResponse<Vec<Party>>>, ApiError> {
    let parties = service.list_parties().await?;

    Ok(Json(ApiResponse::ok(parties)))
}

pub async fn add_category(
    State(service): State<Arc<RegistryService>>,
    AppJson(request): AppJson<CreateCategoryRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Category>>), ApiError> {
    let category = service.add_category(request).await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(category))))
}

pub async fn list_categories(
    State(service): State<Arc<RegistryService>>,
) -> Result<Json<ApiResponse<Vec<Category>>>, ApiError> {
    let categories = service.list_categories().await?;

    Ok(Json(ApiResponse::ok(categories)))
}

pub async fn add_payment_mode(
    State(service): State<Arc<RegistryService>>,
    AppJson(request): AppJson<CreatePaymentModeRequest>,
) -> Result<(StatusCode, Json<ApiResponse<PaymentMode>>), ApiError> {
    let mode = service.add_payment_mode(request).await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(mode))))
}

pub async fn list_payment_modes(
    State(service): State<Arc<RegistryService>>,
) -> Result<Json<ApiResponse<Vec<PaymentMode>>>, ApiError> {
    let modes = service.list_payment_modes().await?;

    Ok(Json(ApiResponse::ok(modes)))
}
