//! Repayment ledger models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::types::chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::ApiError;

/// Whether the posted amount matches the scheduled EMI or was a custom
/// figure entered by the user.
#[derive(Debug, Serialize, Deserialize, sqlx::Type, Clone, Copy, Default, PartialEq, Eq)]
#[sqlx(type_name = "emi_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum EmiType {
    #[default]
    Normal,
    Custom,
}

/// A repayment ledger entry. Entries are append-only: they reference
/// their loan by id without owning it, carry informational snapshots of
/// the loan at posting time, and are never mutated or recomputed.
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Repayment {
    pub id: Uuid,
    pub date: NaiveDate,
    pub loan_id: Uuid,
    pub loan_title: Option<String>,
    pub loan_amount: Option<Decimal>,
    pub interest_rate: Option<Decimal>,
    #[serde(rename = "originalEMI")]
    pub original_emi: Option<Decimal>,
    pub emi_amount: Decimal,
    pub emi_type: EmiType,
    pub party_name: Option<String>,
    pub remarks: Option<String>,
    pub payment_mode: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A validated ledger entry ready for insertion.
#[derive(Debug, Clone)]
pub struct NewRepayment {
    pub date: NaiveDate,
    pub loan_id: Uuid,
    pub loan_title: Option<String>,
    pub loan_amount: Option<Decimal>,
    pub interest_rate: Option<Decimal>,
    pub original_emi: Option<Decimal>,
    pub emi_amount: Decimal,
    pub emi_type: EmiType,
    pub party_name: Option<String>,
    pub remarks: Option<String>,
    pub payment_mode: Option<String>,
}

/// Request to post a repayment against a loan.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRepaymentRequest {
    pub date: Option<NaiveDate>,
    pub loan_id: Option<Uuid>,
    pub loan_title: Option<String>,
    pub loan_amount: Option<Decimal>,
    pub interest_rate: Option<Decimal>,
    #[serde(rename = "originalEMI")]
    pub original_emi: Option<Decimal>,
    pub emi_amount: Option<Decimal>,
    pub emi_type: Option<EmiType>,
    pub party_name: Option<String>,
    pub remarks: Option<String>,
    pub payment_mode: Option<String>,
}

impl CreateRepaymentRequest {
    /// Required fields: `date`, `loanId`, `emiAmount`; the amount must be
    /// positive. Snapshot fields pass through as given.
    pub fn into_validated(self) -> Result<NewRepayment, ApiError> {
        let date = self
            .date
            .ok_or_else(|| ApiError::MissingField("date".to_string()))?;
        let loan_id = self
            .loan_id
            .ok_or_else(|| ApiError::MissingField("loanId".to_string()))?;
        let emi_amount = self
            .emi_amount
            .ok_or_else(|| ApiError::MissingField("emiAmount".to_string()))?;

        if emi_amount <= Decimal::ZERO {
            return Err(ApiError::InvalidInput(
                "emiAmount must be greater than zero".to_string(),
            ));
        }

        Ok(NewRepayment {
            date,
            loan_id,
            loan_title: self.loan_title,
            loan_amount: self.loan_amount,
            interest_rate: self.interest_rate,
            original_emi: self.original_emi,
            emi_amount,
            emi_type: self.emi_type.unwrap_or_default(),
            party_name: self.party_name,
            remarks: self.remarks,
            payment_mode: self.payment_mode,
        })
    }
}

/// Query parameters for listing repayments.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListRepaymentsQuery {
    pub loan_id: Option<Uuid>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn full_request() -> CreateRepaymentRequest {
        CreateRepaymentRequest {
            date: Some("2024-02-01".parse().unwrap()),
            loan_id: Some(Uuid::new_v4()),
            emi_amount: Some(dec!(533.33)),
            ..Default::default()
        }
    }

    #[test]
    fn test_accepts_minimal_request() {
        let entry = full_request().into_validated().unwrap();
        assert_eq!(entry.emi_type, EmiType::Normal);
        assert_eq!(entry.emi_amount, dec!(533.33));
    }

    #[test]
    fn test_names_missing_fields() {
        let request = CreateRepaymentRequest {
            loan_id: None,
            ..full_request()
        };
        match request.into_validated() {
            Err(ApiError::MissingField(field)) => assert_eq!(field, "loanId"),
            other => panic!("expected MissingField, got {:?}", other.map(|_| ())),
        }

        let request = CreateRepaymentRequest {
            emi_amount: None,
            ..full_request()
        };
        match request.into_validated() {
            Err(ApiError::MissingField(field)) => assert_eq!(field, "emiAmount"),
            other => panic!("expected MissingField, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_rejects_non_positive_amount() {
        let request = CreateRepaymentRequest {
            emi_amount: Some(dec!(0)),
            ..full_request()
        };
        assert!(matches!(
            request.into_validated(),
            Err(ApiError::InvalidInput(_))
        ));
    }
}
