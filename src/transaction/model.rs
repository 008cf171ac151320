//! Transaction models.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::types::chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::ApiError;

/// Direction of a cash transaction. The wire values match the labels the
/// dashboard shows ("Cash In" / "Cash Out").
#[derive(Debug, Serialize, Deserialize, sqlx::Type, Clone, Copy, PartialEq, Eq)]
#[sqlx(type_name = "transaction_type")]
pub enum TransactionType {
    #[sqlx(rename = "Cash In")]
    #[serde(rename = "Cash In")]
    CashIn,
    #[sqlx(rename = "Cash Out")]
    #[serde(rename = "Cash Out")]
    CashOut,
}

impl FromStr for TransactionType {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Cash In" => Ok(TransactionType::CashIn),
            "Cash Out" => Ok(TransactionType::CashOut),
            other => Err(ApiError::InvalidInput(format!(
                "Invalid transaction type: '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionType::CashIn => write!(f, "Cash In"),
            TransactionType::CashOut => write!(f, "Cash Out"),
        }
    }
}

/// Cash transaction record
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: Uuid,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub tx_type: TransactionType,
    pub date: NaiveDate,
    pub amount: Decimal,
    pub party_name: Option<String>,
    pub remarks: Option<String>,
    pub category: Option<String>,
    pub payment_mode: Option<String>,
    pub files: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A validated transaction ready for insertion.
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub tx_type: TransactionType,
    pub date: NaiveDate,
    pub amount: Decimal,
    pub party_name: Option<String>,
    pub remarks: Option<String>,
    pub category: Option<String>,
    pub payment_mode: Option<String>,
    pub files: Vec<String>,
}

/// Request to create a transaction.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransactionRequest {
    #[serde(rename = "type")]
    pub tx_type: Option<TransactionType>,
    pub date: Option<NaiveDate>,
    pub amount: Option<Decimal>,
    pub party_name: Option<String>,
    pub remarks: Option<String>,
    pub category: Option<String>,
    pub payment_mode: Option<String>,
    pub files: Option<Vec<String>>,
}

impl CreateTransactionRequest {
    /// Required fields: `type`, `date`, `amount` (positive).
    pub fn into_validated(self) -> Result<NewTransaction, ApiError> {
        let tx_type = self
            .tx_type
            .ok_or_else(|| ApiError::MissingField("type".to_string()))?;
        let date = self
            .date
            .ok_or_else(|| ApiError::MissingField("date".to_string()))?;
        let amount = self
            .amount
            .ok_or_else(|| ApiError::MissingField("amount".to_string()))?;

        if amount <= Decimal::ZERO {
            return Err(ApiError::InvalidInput(
                "amount must be greater than zero".to_string(),
            ));
        }

        Ok(NewTransaction {
            tx_type,
            date,
            amount,
            party_name: self.party_name,
            remarks: self.remarks,
            category: self.category,
            payment_mode: self.payment_mode,
            files: self.files.unwrap_or_default(),
        })
    }
}

/// Partial update request for a transaction.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTransactionRequest {
    #[serde(rename = "type")]
    pub tx_type: Option<TransactionType>,
    pub date: Option<NaiveDate>,
    pub amount: Option<Decimal>,
    pub party_name: Option<String>,
    pub remarks: Option<String>,
    pub category: Option<String>,
    pub payment_mode: Option<String>,
    pub files: Option<Vec<String>>,
}

impl UpdateTransactionRequest {
    /// Apply the partial overwrite to a stored transaction.
    pub fn apply_to(self, tx: &mut Transaction) -> Result<(), ApiError> {
        if let Some(amount) = self.amount {
            if amount <= Decimal::ZERO {
                return Err(ApiError::InvalidInput(
                    "amount must be greater than zero".to_string(),
                ));
            }
            tx.amount = amount;
        }
        if let Some(tx_type) = self.tx_type {
            tx.tx_type = tx_type;
        }
        if let Some(date) = self.date {
            tx.date = date;
        }
        if let Some(party_name) = self.party_name {
            tx.party_name = Some(party_name);
        }
        if let Some(remarks) = self.remarks {
            tx.remarks = Some(remarks);
        }
        if let Some(category) = self.category {
            tx.category = Some(category);
        }
        if let Some(payment_mode) = self.payment_mode {
            tx.payment_mode = Some(payment_mode);
        }
        if let Some(files) = self.files {
            tx.files = files;
        }
        Ok(())
    }
}
