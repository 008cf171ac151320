//! In-memory storage backend.
//!
//! Keeps every collection in a `Vec` behind an async `RwLock`, assigning
//! ids and timestamps on insert. Listings iterate in reverse insertion
//! order, which gives a stable newest-first ordering even when two
//! inserts land on the same timestamp. Used by the integration tests and
//! handy for local experiments without a database.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{ApiError, ApiResult};
use crate::loan::model::{Loan, NewLoan};
use crate::registry::model::{Category, NewParty, Party, PaymentMode};
use crate::repayment::model::{NewRepayment, Repayment};
use crate::store::{LoanStore, RegistryStore, RepaymentStore, TransactionStore};
use crate::transaction::model::{NewTransaction, Transaction, TransactionType};

/// In-memory store over all collections
#[derive(Default)]
pub struct MemoryStore {
    loans: RwLock<Vec<Loan>>,
    repayments: RwLock<Vec<Repayment>>,
    transactions: RwLock<Vec<Transaction>>,
    parties: RwLock<Vec<Party>>,
    categories: RwLock<Vec<Category>>,
    payment_modes: RwLock<Vec<PaymentMode>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LoanStore for MemoryStore {
    async fn insert_loan(&self, loan: NewLoan) -> ApiResult<Loan> {
        let now = Utc::now();
        let stored = Loan {
            id: Uuid::new_v4(),
            date: loan.date,
            loan_title: loan.loan_title,
            loan_amount: loan.loan_amount,
            interest_rate: loan.interest_rate,
            loan_term: loan.loan_term,
            loan_issued_by: loan.loan_issued_by,
            party_name: loan.party_name,
            remarks: loan.remarks,
            payment_mode: loan.payment_mode,
            reimbursement_plan: loan.reimbursement_plan,
            emi_date: loan.emi_date,
            files: loan.files,
            daily_interest_amount: loan.daily_interest_amount,
            daily_emi: loan.daily_emi,
            due_date: loan.due_date,
            created_at: now,
            updated_at: now,
        };
        self.loans.write().await.push(stored.clone());
        Ok(stored)
    }

    async fn find_loan(&self, id: Uuid) -> ApiResult<Option<Loan>> {
        Ok(self
            .loans
            .read()
            .await
            .iter()
            .find(|loan| loan.id == id)
            .cloned())
    }

    async fn list_loans(&self) -> ApiResult<Vec<Loan>> {
        Ok(self.loans.read().await.iter().rev().cloned().collect())
    }

    async fn update_loan(&self, loan: &Loan) -> ApiResult<Loan> {
        let mut loans = self.loans.write().await;
        let slot = loans
            .iter_mut()
            .find(|stored| stored.id == loan.id)
            .ok_or_else(|| ApiError::NotFound("Loan".to_string()))?;

        let mut updated = loan.clone();
        updated.created_at = slot.created_at;
        updated.updated_at = Utc::now();
        *slot = updated.clone();
        Ok(updated)
    }

    async fn delete_loans(&self, ids: &[Uuid]) -> ApiResult<u64> {
        let mut loans = self.loans.write().await;
        let before = loans.len();
        loans.retain(|loan| !ids.contains(&loan.id));
        Ok((before - loans.len()) as u64)
    }
}

#[async_trait]
impl RepaymentStore for MemoryStore {
    async fn insert_repayment(&self, entry: NewRepayment) -> ApiResult<Repayment> {
        let stored = Repayment {
            id: Uuid::new_v4(),
            date: entry.date,
            loan_id: entry.loan_id,
            loan_title: entry.loan_title,
            loan_amount: entry.loan_amount,
            interest_rate: entry.interest_rate,
            original_emi: entry.original_emi,
            emi_amount: entry.emi_amount,
            emi_type: entry.emi_type,
            party_name: entry.party_name,
            remarks: entry.remarks,
            payment_mode: entry.payment_mode,
            created_at: Utc::now(),
        };
        self.repayments.write().await.push(stored.clone());
        Ok(stored)
    }

    async fn list_repayments(&self, loan_id: Option<Uuid>) -> ApiResult<Vec<Repayment>> {
        Ok(self
            .repayments
            .read()
            .await
            .iter()
            .rev()
            .filter(|entry| loan_id.map_or(true, |id| entry.loan_id == id))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl TransactionStore for MemoryStore {
    async fn insert_transaction(&self, tx: NewTransaction) -> ApiResult<Transaction> {
        let now = Utc::now();
        let stored = Transaction {
            id: Uuid::new_v4(),
            tx_type: tx.tx_type,
            date: tx.date,
            amount: tx.amount,
            party_name: tx.party_name,
            remarks: tx.remarks,
            category: tx.category,
            payment_mode: tx.payment_mode,
            files: tx.files,
            created_at: now,
            updated_at: now,
        };
        self.transactions.write().await.push(stored.clone());
        Ok(stored)
    }

    async fn find_transaction(&self, id: Uuid) -> ApiResult<Option<Transaction>> {
        Ok(self
            .transactions
            .read()
            .await
            .iter()
            .find(|tx| tx.id == id)
            .cloned())
    }

    async fn list_transactions(
        &self,
        tx_type: Option<TransactionType>,
    ) -> ApiResult<Vec<Transaction>> {
        Ok(self
            .transactions
            .read()
            .await
            .iter()
            .rev()
            .filter(|tx| tx_type.map_or(true, |t| tx.tx_type == t))
            .cloned()
            .collect())
    }

    async fn update_transaction(&self, tx: &Transaction) -> ApiResult<Transaction> {
        let mut transactions = self.transactions.write().await;
        let slot = transactions
            .iter_mut()
            .find(|stored| stored.id == tx.id)
            .ok_or_else(|| ApiError::NotFound("Transaction".to_string()))?;

        let mut updated = tx.clone();
        updated.created_at = slot.created_at;
        updated.updated_at = Utc::now();
        *slot = updated.clone();
        Ok(updated)
    }

    async fn delete_transactions(&self, ids: &[Uuid]) -> ApiResult<u64> {
        let mut transactions = self.transactions.write().await;
        let before = transactions.len();
        transactions.retain(|tx| !ids.contains(&tx.id));
        Ok((before - transactions.len()) as u64)
    }
}

#[async_trait]
impl RegistryStore for MemoryStore {
    async fn insert_party(&self, party: NewParty) -> ApiResult<Party> {
        let stored = Party {
            id: Uuid::new_v4(),
            party_name: party.party_name,
            phone: party.phone,
            party_type: party.party_type,
            created_at: Utc::now(),
        };
        self.parties.write().await.push(stored.clone());
        Ok(stored)
    }

    async fn find_party_by_name(&self, name: &str) -> ApiResult<Option<Party>> {
        Ok(self
            .parties
            .read()
            .await
            .iter()
            .find(|party| party.party_name == name)
            .cloned())
    }

    async fn list_parties(&self) -> ApiResult<Vec<Party>> {
        Ok(self.parties.read().await.iter().rev().cloned().collect())
    }

    async fn insert_category(&self, name: &str) -> ApiResult<Category> {
        let stored = Category {
            id: Uuid::new_v4(),
            category: name.to_string(),
            created_at: Utc::now(),
        };
        self.categories.write().await.push(stored.clone());
        Ok(stored)
    }

    async fn find_category_by_name(&self, name: &str) -> ApiResult<Option<Category>> {
        Ok(self
            .categories
            .read()
            .await
            .iter()
            .find(|category| category.category == name)
            .cloned())
    }

    async fn list_categories(&self) -> ApiResult<Vec<Category>> {
        Ok(self.categories.read().await.iter().rev().cloned().collect())
    }

    async fn insert_payment_mode(&self, name: &str) -> ApiResult<PaymentMode> {
        let stored = PaymentMode {
            id: Uuid::new_v4(),
            payment_mode: name.to_string(),
            created_at: Utc::now(),
        };
        self.payment_modes.write().await.push(stored.clone());
        Ok(stored)
    }

    async fn find_payment_mode_by_name(&self, name: &str) -> ApiResult<Option<PaymentMode>> {
        Ok(self
            .payment_modes
            .read()
            .await
            .iter()
            .find(|mode| mode.payment_mode == name)
            .cloned())
    }

    async fn list_payment_modes(&self) -> ApiResult<Vec<PaymentMode>> {
        Ok(self
            .payment_modes
            .read()
            .await
            .iter()
            .rev()
            .cloned()
            .collect())
    }
}
