//! Repayment service layer - posting and reading the repayment ledger.
//!
//! Posting a repayment is purely an append: the parent loan's stored
//! fields (including its derived schedule) are left untouched, and there
//! is no balance-sufficiency check. Whether the ledger should feed back
//! into an outstanding balance is an open product question; the current
//! design keeps entries informational.

use std::sync::Arc;

use uuid::Uuid;

use crate::error::ApiResult;
use crate::repayment::model::{CreateRepaymentRequest, Repayment};
use crate::store::RepaymentStore;

/// Repayment service for the append-only ledger
#[derive(Clone)]
pub struct RepaymentService {
    store: Arc<dyn RepaymentStore>,
}

impl RepaymentService {
    /// Create a new repayment service backed by the given store handle
    pub fn new(store: Arc<dyn RepaymentStore>) -> Self {
        Self { store }
    }

    /// Append a repayment entry to the ledger.
    ///
    /// Two identical requests produce two distinct entries; there is no
    /// dedup key. Loan existence is the caller's concern (checked at the
    /// HTTP boundary), since the ledger holds only a non-owning
    /// reference.
    pub async fn create_repayment(&self, request: CreateRepaymentRequest) -> ApiResult<Repayment> {
        let entry = request.into_validated()?;
        let stored = self.store.insert_repayment(entry).await?;

        tracing::info!(
            repayment_id = %stored.id,
            loan_id = %stored.loan_id,
            amount = %stored.emi_amount,
            "Repayment posted"
        );
        Ok(stored)
    }

    /// List ledger entries newest first, optionally restricted to one
    /// loan.
    pub async fn list_repayments(&self, loan_id: Option<Uuid>) -> ApiResult<Vec<Repayment>> {
        self.store.list_repayments(loan_id).await
    }
}
