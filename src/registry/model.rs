//! Registry models.

use serde::{Deserialize, Serialize};
use sqlx::types::chrono::{DateTime, Utc};
use uuid::Uuid;

/// A counterparty (customer, supplier, lender).
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Party {
    pub id: Uuid,
    pub party_name: String,
    pub phone: String,
    pub party_type: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A validated party ready for insertion.
#[derive(Debug, Clone)]
pub struct NewParty {
    pub party_name: String,
    pub phone: String,
    pub party_type: Option<String>,
}

/// Transaction category label.
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: Uuid,
    pub category: String,
    pub created_at: DateTime<Utc>,
}

/// Payment mode label (e.g. "Cash", "UPI", "Bank Transfer").
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMode {
    pub id: Uuid,
    pub payment_mode: String,
    pub created_at: DateTime<Utc>,
}

/// Request to register a party.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePartyRequest {
    pub party_name: Option<String>,
    pub phone: Option<String>,
    pub party_type: Option<String>,
}

/// Request to add a category.
#[derive(Debug, Default, Deserialize)]
pub struct CreateCategoryRequest {
    pub category: Option<String>,
}

/// Request to add a payment mode.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentModeRequest {
    pub payment_mode: Option<String>,
}
