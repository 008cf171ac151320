//! Loan models and creation/update request types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::types::chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::accrual::Schedule;
use crate::error::ApiError;

/// Whether the loan is repaid through a reimbursement (EMI) plan.
#[derive(Debug, Serialize, Deserialize, sqlx::Type, Clone, Copy, Default, PartialEq, Eq)]
#[sqlx(type_name = "reimbursement_plan", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ReimbursementPlan {
    Yes,
    #[default]
    No,
}

/// Loan record: client-supplied inputs plus server-derived accrual
/// fields. The derived fields are recomputed whenever `loan_amount`,
/// `interest_rate`, or `loan_term` changes and are never client-settable.
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Loan {
    pub id: Uuid,
    pub date: NaiveDate,
    pub loan_title: String,
    pub loan_amount: Decimal,
    pub interest_rate: Decimal,
    pub loan_term: Option<i32>,
    pub loan_issued_by: String,
    pub party_name: Option<String>,
    pub remarks: Option<String>,
    pub payment_mode: String,
    pub reimbursement_plan: ReimbursementPlan,
    pub emi_date: Option<NaiveDate>,
    pub files: Vec<String>,
    pub daily_interest_amount: Decimal,
    #[serde(rename = "dailyEMI")]
    pub daily_emi: Option<Decimal>,
    pub due_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A validated loan ready for insertion; identity and timestamps are
/// assigned by the store.
#[derive(Debug, Clone)]
pub struct NewLoan {
    pub date: NaiveDate,
    pub loan_title: String,
    pub loan_amount: Decimal,
    pub interest_rate: Decimal,
    pub loan_term: Option<i32>,
    pub loan_issued_by: String,
    pub party_name: Option<String>,
    pub remarks: Option<String>,
    pub payment_mode: String,
    pub reimbursement_plan: ReimbursementPlan,
    pub emi_date: Option<NaiveDate>,
    pub files: Vec<String>,
    pub daily_interest_amount: Decimal,
    pub daily_emi: Option<Decimal>,
    pub due_date: Option<NaiveDate>,
}

/// Request to create a loan. Every field is optional at the wire level so
/// the required-field policy can report exactly which one is missing.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLoanRequest {
    pub date: Option<NaiveDate>,
    pub loan_title: Option<String>,
    pub loan_amount: Option<Decimal>,
    pub interest_rate: Option<Decimal>,
    pub loan_term: Option<i32>,
    pub loan_issued_by: Option<String>,
    pub party_name: Option<String>,
    pub remarks: Option<String>,
    pub payment_mode: Option<String>,
    pub reimbursement_plan: Option<ReimbursementPlan>,
    pub emi_date: Option<NaiveDate>,
    pub files: Option<Vec<String>>,
}

/// Validated creation input, before accrual derivation.
#[derive(Debug, Clone)]
pub struct LoanInput {
    pub date: NaiveDate,
    pub loan_title: String,
    pub loan_amount: Decimal,
    pub interest_rate: Decimal,
    pub loan_term: Option<i32>,
    pub loan_issued_by: String,
    pub party_name: Option<String>,
    pub remarks: Option<String>,
    pub payment_mode: String,
    pub reimbursement_plan: ReimbursementPlan,
    pub emi_date: Option<NaiveDate>,
    pub files: Vec<String>,
}

fn required_text(value: Option<String>, field: &str) -> Result<String, ApiError> {
    match value {
        Some(s) if !s.trim().is_empty() => Ok(s),
        _ => Err(ApiError::MissingField(field.to_string())),
    }
}

impl CreateLoanRequest {
    /// Required-field policy, keyed by the reimbursement plan:
    ///
    /// | field        | plan = no | plan = yes |
    /// |--------------|-----------|------------|
    /// | date         | required  | required   |
    /// | loanTitle    | required  | required   |
    /// | loanAmount   | required  | required   |
    /// | interestRate | required  | required   |
    /// | loanIssuedBy | required  | required   |
    /// | emiDate      | optional  | required   |
    /// | loanTerm     | optional  | optional   |
    ///
    /// `paymentMode` falls back to `"Cash"` when absent.
    pub fn into_validated(self) -> Result<LoanInput, ApiError> {
        let plan = self.reimbursement_plan.unwrap_or_default();

        let date = self
            .date
            .ok_or_else(|| ApiError::MissingField("date".to_string()))?;
        let loan_title = required_text(self.loan_title, "loanTitle")?;
        let loan_amount = self
            .loan_amount
            .ok_or_else(|| ApiError::MissingField("loanAmount".to_string()))?;
        let interest_rate = self
            .interest_rate
            .ok_or_else(|| ApiError::MissingField("interestRate".to_string()))?;
        let loan_issued_by = required_text(self.loan_issued_by, "loanIssuedBy")?;

        let emi_date = match (plan, self.emi_date) {
            (ReimbursementPlan::Yes, None) => {
                return Err(ApiError::MissingField("emiDate".to_string()))
            }
            (_, emi_date) => emi_date,
        };

        let payment_mode = self
            .payment_mode
            .filter(|mode| !mode.trim().is_empty())
            .unwrap_or_else(|| "Cash".to_string());

        Ok(LoanInput {
            date,
            loan_title,
            loan_amount,
            interest_rate,
            loan_term: self.loan_term,
            loan_issued_by,
            party_name: self.party_name,
            remarks: self.remarks,
            payment_mode,
            reimbursement_plan: plan,
            emi_date,
            files: self.files.unwrap_or_default(),
        })
    }
}

impl LoanInput {
    /// Attach the derived accrual fields, producing an insertable record.
    pub fn with_schedule(self, schedule: Schedule) -> NewLoan {
        NewLoan {
            date: self.date,
            loan_title: self.loan_title,
            loan_amount: self.loan_amount,
            interest_rate: self.interest_rate,
            loan_term: self.loan_term,
            loan_issued_by: self.loan_issued_by,
            party_name: self.party_name,
            remarks: self.remarks,
            payment_mode: self.payment_mode,
            reimbursement_plan: self.reimbursement_plan,
            emi_date: self.emi_date,
            files: self.files,
            daily_interest_amount: schedule.daily_interest_amount,
            daily_emi: schedule.daily_emi,
            due_date: schedule.due_date,
        }
    }
}

/// Partial update request: fields present overwrite the stored value,
/// fields absent are left untouched.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLoanRequest {
    pub date: Option<NaiveDate>,
    pub loan_title: Option<String>,
    pub loan_amount: Option<Decimal>,
    pub interest_rate: Option<Decimal>,
    pub loan_term: Option<i32>,
    pub loan_issued_by: Option<String>,
    pub party_name: Option<String>,
    pub remarks: Option<String>,
    pub payment_mode: Option<String>,
    pub reimbursement_plan: Option<ReimbursementPlan>,
    pub emi_date: Option<NaiveDate>,
    pub files: Option<Vec<String>>,
}

impl UpdateLoanRequest {
    /// True when the update touches an input of the accrual calculation,
    /// which forces the derived fields to be recomputed.
    pub fn touches_accrual_inputs(&self) -> bool {
        self.loan_amount.is_some() || self.interest_rate.is_some() || self.loan_term.is_some()
    }

    /// Apply the partial overwrite to a stored loan.
    pub fn apply_to(self, loan: &mut Loan) {
        if let Some(date) = self.date {
            loan.date = date;
        }
        if let Some(loan_title) = self.loan_title {
            loan.loan_title = loan_title;
        }
        if let Some(loan_amount) = self.loan_amount {
            loan.loan_amount = loan_amount;
        }
        if let Some(interest_rate) = self.interest_rate {
            loan.interest_rate = interest_rate;
        }
        if let Some(loan_term) = self.loan_term {
            loan.loan_term = Some(loan_term);
        }
        if let Some(loan_issued_by) = self.loan_issued_by {
            loan.loan_issued_by = loan_issued_by;
        }
        if let Some(party_name) = self.party_name {
            loan.party_name = Some(party_name);
        }
        if let Some(remarks) = self.remarks {
            loan.remarks = Some(remarks);
        }
        if let Some(payment_mode) = self.payment_mode {
            loan.payment_mode = payment_mode;
        }
        if let Some(reimbursement_plan) = self.reimbursement_plan {
            loan.reimbursement_plan = reimbursement_plan;
        }
        if let Some(emi_date) = self.emi_date {
            loan.emi_date = Some(emi_date);
        }
        if let Some(files) = self.files {
            loan.files = files;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn full_request() -> CreateLoanRequest {
        CreateLoanRequest {
            date: Some("2024-01-01".parse().unwrap()),
            loan_title: Some("Shop renovation".to_string()),
            loan_amount: Some(dec!(10000)),
            interest_rate: Some(dec!(2)),
            loan_term: Some(30),
            loan_issued_by: Some("State Bank".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_validation_accepts_complete_request() {
        let input = full_request().into_validated().unwrap();
        assert_eq!(input.loan_title, "Shop renovation");
        assert_eq!(input.payment_mode, "Cash");
        assert_eq!(input.reimbursement_plan, ReimbursementPlan::No);
    }

    #[test]
    fn test_validation_names_missing_field() {
        let request = CreateLoanRequest {
            loan_title: None,
            ..full_request()
        };
        match request.into_validated() {
            Err(ApiError::MissingField(field)) => assert_eq!(field, "loanTitle"),
            other => panic!("expected MissingField, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_blank_text_counts_as_missing() {
        let request = CreateLoanRequest {
            loan_issued_by: Some("   ".to_string()),
            ..full_request()
        };
        match request.into_validated() {
            Err(ApiError::MissingField(field)) => assert_eq!(field, "loanIssuedBy"),
            other => panic!("expected MissingField, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_empty_request_fails_fast() {
        assert!(matches!(
            CreateLoanRequest::default().into_validated(),
            Err(ApiError::MissingField(_))
        ));
    }

    #[test]
    fn test_emi_date_required_with_reimbursement_plan() {
        let request = CreateLoanRequest {
            reimbursement_plan: Some(ReimbursementPlan::Yes),
            ..full_request()
        };
        match request.into_validated() {
            Err(ApiError::MissingField(field)) => assert_eq!(field, "emiDate"),
            other => panic!("expected MissingField, got {:?}", other.map(|_| ())),
        }

        let request = CreateLoanRequest {
            reimbursement_plan: Some(ReimbursementPlan::Yes),
            emi_date: Some("2024-01-05".parse().unwrap()),
            ..full_request()
        };
        assert!(request.into_validated().is_ok());
    }

    #[test]
    fn test_loan_term_optional_at_creation() {
        let request = CreateLoanRequest {
            loan_term: None,
            ..full_request()
        };
        let input = request.into_validated().unwrap();
        assert_eq!(input.loan_term, None);
    }
}
