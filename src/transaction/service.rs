//! Transaction service layer - cash book operations.

use std::sync::Arc;

use uuid::Uuid;

use crate::error::{ApiError, ApiResult};
use crate::store::TransactionStore;
use crate::transaction::model::{
    CreateTransactionRequest, Transaction, TransactionType, UpdateTransactionRequest,
};

/// Transaction service for the cash book
#[derive(Clone)]
pub struct TransactionService {
    store: Arc<dyn TransactionStore>,
}

impl TransactionService {
    /// Create a new transaction service backed by the given store handle
    pub fn new(store: Arc<dyn TransactionStore>) -> Self {
        Self { store }
    }

    /// Record a transaction
    pub async fn create_transaction(
        &self,
        request: CreateTransactionRequest,
    ) -> ApiResult<Transaction> {
        let entry = request.into_validated()?;
        let stored = self.store.insert_transaction(entry).await?;

        tracing::info!(
            transaction_id = %stored.id,
            tx_type = %stored.tx_type,
            amount = %stored.amount,
            "Transaction created"
        );
        Ok(stored)
    }

    /// List all transactions, newest first
    pub async fn list_transactions(&self) -> ApiResult<Vec<Transaction>> {
        self.store.list_transactions(None).await
    }

    /// List transactions of one direction, newest first
    pub async fn list_transactions_by_type(
        &self,
        tx_type: TransactionType,
    ) -> ApiResult<Vec<Transaction>> {
        self.store.list_transactions(Some(tx_type)).await
    }

    /// Partially update a transaction
    pub async fn update_transaction(
        &self,
        id: Uuid,
        request: UpdateTransactionRequest,
    ) -> ApiResult<Transaction> {
        let mut tx = self
            .store
            .find_transaction(id)
            .await?
            .ok_or_else(|| ApiError::NotFound("Transaction".to_string()))?;

        request.apply_to(&mut tx)?;

        let updated = self.store.update_transaction(&tx).await?;
        tracing::info!(transaction_id = %updated.id, "Transaction updated");
        Ok(updated)
    }

    /// Delete a set of transactions by id. Unknown ids are silently
    /// ignored; an empty id set is rejected.
    pub async fn delete_transactions(&self, ids: &[Uuid]) -> ApiResult<u64> {
        if ids.is_empty() {
            return Err(ApiError::InvalidInput(
                "No ids provided for deletion".to_string(),
            ));
        }

        let deleted = self.store.delete_transactions(ids).await?;
        tracing::info!(requested = ids.len(), deleted, "Transactions deleted");
        Ok(deleted)
    }
}
