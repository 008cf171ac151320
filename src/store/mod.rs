//! Storage traits for persistence.
//!
//! These traits are the explicit, dependency-injected storage handles the
//! services are built on: insert/find/find-by-filter/update/delete-by-id-set
//! operations over the logical collections. Two implementations exist:
//!
//! - [`PgStore`]: PostgreSQL via sqlx, used by the server binary
//! - [`MemoryStore`]: in-memory, used by the integration tests
//!
//! Every operation returns newest-first orderings where a listing is
//! involved, and maps backend failures into [`ApiError`] with the
//! diagnostic preserved.

mod memory;
mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::ApiResult;
use crate::loan::model::{Loan, NewLoan};
use crate::registry::model::{Category, NewParty, Party, PaymentMode};
use crate::repayment::model::{NewRepayment, Repayment};
use crate::transaction::model::{NewTransaction, Transaction, TransactionType};

/// Persistence for the `loans` collection.
#[async_trait]
pub trait LoanStore: Send + Sync {
    /// Insert a new loan, assigning identity and timestamps.
    async fn insert_loan(&self, loan: NewLoan) -> ApiResult<Loan>;

    /// Fetch a loan by id.
    async fn find_loan(&self, id: Uuid) -> ApiResult<Option<Loan>>;

    /// List all loans, newest first by creation.
    async fn list_loans(&self) -> ApiResult<Vec<Loan>>;

    /// Write back a full loan record (all mutable fields), bumping
    /// `updated_at`.
    async fn update_loan(&self, loan: &Loan) -> ApiResult<Loan>;

    /// Delete every loan whose id is in the set; returns the number
    /// actually removed. Ids that match nothing are not an error.
    async fn delete_loans(&self, ids: &[Uuid]) -> ApiResult<u64>;
}

/// Persistence for the `loan_repayments` ledger.
#[async_trait]
pub trait RepaymentStore: Send + Sync {
    /// Append a ledger entry, assigning identity and timestamp.
    async fn insert_repayment(&self, entry: NewRepayment) -> ApiResult<Repayment>;

    /// List entries newest first, optionally filtered by loan.
    async fn list_repayments(&self, loan_id: Option<Uuid>) -> ApiResult<Vec<Repayment>>;
}

/// Persistence for the `transactions` collection.
#[async_trait]
pub trait TransactionStore: Send + Sync {
    async fn insert_transaction(&self, tx: NewTransaction) -> ApiResult<Transaction>;

    async fn find_transaction(&self, id: Uuid) -> ApiResult<Option<Transaction>>;

    /// List newest first, optionally filtered by direction.
    async fn list_transactions(
        &self,
        tx_type: Option<TransactionType>,
    ) -> ApiResult<Vec<Transaction>>;

    async fn update_transaction(&self, tx: &Transaction) -> ApiResult<Transaction>;

    async fn delete_transactions(&self, ids: &[Uuid]) -> ApiResult<u64>;
}

/// Persistence for the reference-data registries.
#[async_trait]
pub trait RegistryStore: Send + Sync {
    async fn insert_party(&self, party: NewParty) -> ApiResult<Party>;
    async fn find_party_by_name(&self, name: &str) -> ApiResult<Option<Party>>;
    async fn list_parties(&self) -> ApiResult<Vec<Party>>;

    async fn insert_category(&self, name: &str) -> ApiResult<Category>;
    async fn find_category_by_name(&self, name: &str) -> ApiResult<Option<Category>>;
    async fn list_categories(&self) -> ApiResult<Vec<Category>>;

    async fn insert_payment_mode(&self, name: &str) -> ApiResult<PaymentMode>;
    async fn find_payment_mode_by_name(&self, name: &str) -> ApiResult<Option<PaymentMode>>;
    async fn list_payment_modes(&self) -> ApiResult<Vec<PaymentMode>>;
}
