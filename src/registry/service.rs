//! Registry service layer - reference-data create and list operations.

use std::sync::Arc;

use crate::error::{ApiError, ApiResult};
use crate::registry::model::{
    Category, CreateCategoryRequest, CreatePartyRequest, CreatePaymentModeRequest, NewParty,
    Party, PaymentMode,
};
use crate::store::RegistryStore;

fn required_name(value: Option<String>, field: &str) -> Result<String, ApiError> {
    match value {
        Some(s) if !s.trim().is_empty() => Ok(s.trim().to_string()),
        _ => Err(ApiError::MissingField(field.to_string())),
    }
}

/// Registry service for parties, categories, and payment modes
#[derive(Clone)]
pub struct RegistryService {
    store: Arc<dyn RegistryStore>,
}

impl RegistryService {
    /// Create a new registry service backed by the given store handle
    pub fn new(store: Arc<dyn RegistryStore>) -> Self {
        Self { store }
    }

    /// Register a party; names are trimmed and must be unique.
    pub async fn add_party(&self, request: CreatePartyRequest) -> ApiResult<Party> {
        let party_name = required_name(request.party_name, "partyName")?;

        if self.store.find_party_by_name(&party_name).await?.is_some() {
            return Err(ApiError::Conflict("Party already exists".to_string()));
        }

        let party = self
            .store
            .insert_party(NewParty {
                party_name,
                phone: request.phone.unwrap_or_default(),
                party_type: request.party_type,
            })
            .await?;

        tracing::info!(party = %party.party_name, "Party added");
        Ok(party)
    }

    /// List all parties
    pub async fn list_parties(&self) -> ApiResult<Vec<Party>> {
        self.store.list_parties().await
    }

    /// Add a transaction category
    pub async fn add_category(&self, request: CreateCategoryRequest) -> ApiResult<Category> {
        let name = required_name(request.category, "category")?;

        if self.store.find_category_by_name(&name).await?.is_some() {
            return Err(ApiError::Conflict("Category already exists".to_string()));
        }

        let category = self.store.insert_category(&name).await?;
        tracing::info!(category = %category.category, "Category added");
        Ok(category)
    }

    /// List all categories
    pub async fn list_categories(&self) -> ApiResult<Vec<Category>> {
        self.store.list_categories().await
    }

    /// Add a payment mode
    pub async fn add_payment_mode(
        &self,
        request: CreatePaymentModeRequest,
    ) -> ApiResult<PaymentMode> {
        let name = required_name(request.payment_mode, "paymentMode")?;

        if self.store.find_payment_mode_by_name(&name).await?.is_some() {
            return Err(ApiError::Conflict("Payment mode already exists".to_string()));
        }

        let mode = self.store.insert_payment_mode(&name).await?;
        tracing::info!(payment_mode = %mode.payment_mode, "Payment mode added");
        Ok(mode)
    }

    /// List all payment modes
    pub async fn list_payment_modes(&self) -> ApiResult<Vec<PaymentMode>> {
        self.store.list_payment_modes().await
    }
}
