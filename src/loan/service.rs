//! Loan service layer - lifecycle management for loan records.
//!
//! Validation runs before any storage write; derived accrual fields are
//! recomputed from the effective principal/rate/term whenever one of them
//! changes, so they never reflect a combination that is not the one
//! stored.

use std::sync::Arc;

use uuid::Uuid;

use crate::accrual;
use crate::error::{ApiError, ApiResult};
use crate::loan::model::{CreateLoanRequest, Loan, UpdateLoanRequest};
use crate::store::LoanStore;

/// Loan service for managing the loan lifecycle
#[derive(Clone)]
pub struct LoanService {
    store: Arc<dyn LoanStore>,
}

impl LoanService {
    /// Create a new loan service backed by the given store handle
    pub fn new(store: Arc<dyn LoanStore>) -> Self {
        Self { store }
    }

    /// Create a loan: validate, derive accrual fields, persist.
    pub async fn create_loan(&self, request: CreateLoanRequest) -> ApiResult<Loan> {
        let input = request.into_validated()?;

        let schedule = accrual::derive_schedule(
            input.loan_amount,
            input.interest_rate,
            input.loan_term,
            input.date,
        )?;

        let loan = self.store.insert_loan(input.with_schedule(schedule)).await?;

        tracing::info!(loan_id = %loan.id, title = %loan.loan_title, "Loan created");
        Ok(loan)
    }

    /// Partially update a loan.
    ///
    /// When the update touches `loan_amount`, `interest_rate`, or
    /// `loan_term`, the derived fields are recomputed from the effective
    /// values (new where supplied, stored otherwise) using the stored
    /// start date, and written in the same update.
    pub async fn update_loan(&self, id: Uuid, request: UpdateLoanRequest) -> ApiResult<Loan> {
        let mut loan = self
            .store
            .find_loan(id)
            .await?
            .ok_or_else(|| ApiError::NotFound("Loan".to_string()))?;

        if request.touches_accrual_inputs() {
            let principal = request.loan_amount.unwrap_or(loan.loan_amount);
            let rate = request.interest_rate.unwrap_or(loan.interest_rate);
            let term = request.loan_term.or(loan.loan_term);

            let schedule = accrual::derive_schedule(principal, rate, term, loan.date)?;
            loan.daily_interest_amount = schedule.daily_interest_amount;
            loan.daily_emi = schedule.daily_emi;
            loan.due_date = schedule.due_date;
        }

        request.apply_to(&mut loan);

        let updated = self.store.update_loan(&loan).await?;
        tracing::info!(loan_id = %updated.id, "Loan updated");
        Ok(updated)
    }

    /// Delete a set of loans by id. Ids that match nothing are silently
    /// ignored; an empty id set is rejected.
    pub async fn delete_loans(&self, ids: &[Uuid]) -> ApiResult<u64> {
        if ids.is_empty() {
            return Err(ApiError::InvalidInput(
                "No ids provided for deletion".to_string(),
            ));
        }

        let deleted = self.store.delete_loans(ids).await?;
        tracing::info!(requested = ids.len(), deleted, "Loans deleted");
        Ok(deleted)
    }

    /// Fetch a loan by id
    pub async fn get_loan(&self, id: Uuid) -> ApiResult<Loan> {
        self.store
            .find_loan(id)
            .await?
            .ok_or_else(|| ApiError::NotFound("Loan".to_string()))
    }

    /// List all loans, newest first
    pub async fn list_loans(&self) -> ApiResult<Vec<Loan>> {
        self.store.list_loans().await
    }
}
