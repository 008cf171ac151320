//! PostgreSQL storage backend.
//!
//! Identity (`gen_random_uuid()`) and the creation/update timestamp pair
//! are assigned by the database; every statement returns the stored row
//! so callers always see what actually persisted.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{ApiError, ApiResult};
use crate::loan::model::{Loan, NewLoan};
use crate::registry::model::{Category, NewParty, Party, PaymentMode};
use crate::repayment::model::{NewRepayment, Repayment};
use crate::store::{LoanStore, RegistryStore, RepaymentStore, TransactionStore};
use crate::transaction::model::{NewTransaction, Transaction, TransactionType};

/// PostgreSQL-backed store over all collections
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Create a new store over an established connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LoanStore for PgStore {
    async fn insert_loan(&self, loan: NewLoan) -> ApiResult<Loan> {
        let stored = sqlx::query_as::<_, Loan>(
            r#"
            INSERT INTO loans (
                date, loan_title, loan_amount, interest_rate, loan_term,
                loan_issued_by, party_name, remarks, payment_mode,
                reimbursement_plan, emi_date, files,
                daily_interest_amount, daily_emi, due_date
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
            RETURNING *
            "#,
        )
        .bind(loan.date)
        .bind(&loan.loan_title)
        .bind(loan.loan_amount)
        .bind(loan.interest_rate)
        .bind(loan.loan_term)
        .bind(&loan.loan_issued_by)
        .bind(&loan.party_name)
        .bind(&loan.remarks)
        .bind(&loan.payment_mode)
        .bind(loan.reimbursement_plan)
        .bind(loan.emi_date)
        .bind(&loan.files)
        .bind(loan.daily_interest_amount)
        .bind(loan.daily_emi)
        .bind(loan.due_date)
        .fetch_one(&self.pool)
        .await?;

        Ok(stored)
    }

    async fn find_loan(&self, id: Uuid) -> ApiResult<Option<Loan>> {
        let loan = sqlx::query_as::<_, Loan>("SELECT * FROM loans WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(loan)
    }

    async fn list_loans(&self) -> ApiResult<Vec<Loan>> {
        let loans =
            sqlx::query_as::<_, Loan>("SELECT * FROM loans ORDER BY created_at DESC")
                .fetch_all(&self.pool)
                .await?;
        Ok(loans)
    }

    async fn update_loan(&self, loan: &Loan) -> ApiResult<Loan> {
        let updated = sqlx::query_as::<_, Loan>(
            r#"
            UPDATE loans SET
                date = $1, loan_title = $2, loan_amount = $3, interest_rate = $4,
                loan_term = $5, loan_issued_by = $6, party_name = $7, remarks = $8,
                payment_mode = $9, reimbursement_plan = $10, emi_date = $11, files = $12,
                daily_interest_amount = $13, daily_emi = $14, due_date = $15,
                updated_at = now()
            WHERE id = $16
            RETURNING *
            "#,
        )
        .bind(loan.date)
        .bind(&loan.loan_title)
        .bind(loan.loan_amount)
        .bind(loan.interest_rate)
        .bind(loan.loan_term)
        .bind(&loan.loan_issued_by)
        .bind(&loan.party_name)
        .bind(&loan.remarks)
        .bind(&loan.payment_mode)
        .bind(loan.reimbursement_plan)
        .bind(loan.emi_date)
        .bind(&loan.files)
        .bind(loan.daily_interest_amount)
        .bind(loan.daily_emi)
        .bind(loan.due_date)
        .bind(loan.id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| ApiError::NotFound("Loan".to_string()))?;

        Ok(updated)
    }

    async fn delete_loans(&self, ids: &[Uuid]) -> ApiResult<u64> {
        let result = sqlx::query("DELETE FROM loans WHERE id = ANY($1)")
            .bind(ids)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}

#[async_trait]
impl RepaymentStore for PgStore {
    async fn insert_repayment(&self, entry: NewRepayment) -> ApiResult<Repayment> {
        let stored = sqlx::query_as::<_, Repayment>(
            r#"
            INSERT INTO loan_repayments (
                date, loan_id, loan_title, loan_amount, interest_rate,
                original_emi, emi_amount, emi_type, party_name, remarks, payment_mode
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING *
            "#,
        )
        .bind(entry.date)
        .bind(entry.loan_id)
        .bind(&entry.loan_title)
        .bind(entry.loan_amount)
        .bind(entry.interest_rate)
        .bind(entry.original_emi)
        .bind(entry.emi_amount)
        .bind(entry.emi_type)
        .bind(&entry.party_name)
        .bind(&entry.remarks)
        .bind(&entry.payment_mode)
        .fetch_one(&self.pool)
        .await?;

        Ok(stored)
    }

    async fn list_repayments(&self, loan_id: Option<Uuid>) -> ApiResult<Vec<Repayment>> {
        let entries = match loan_id {
            Some(loan_id) => {
                sqlx::query_as::<_, Repayment>(
                    "SELECT * FROM loan_repayments WHERE loan_id = $1 ORDER BY created_at DESC",
                )
                .bind(loan_id)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Repayment>(
                    "SELECT * FROM loan_repayments ORDER BY created_at DESC",
                )
                .fetch_all(&self.pool)
                .await?
            }
        };
        Ok(entries)
    }
}

#[async_trait]
impl TransactionStore for PgStore {
    async fn insert_transaction(&self, tx: NewTransaction) -> ApiResult<Transaction> {
        let stored = sqlx::query_as::<_, Transaction>(
            r#"
            INSERT INTO transactions (
                type, date, amount, party_name, remarks, category, payment_mode, files
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(tx.tx_type)
        .bind(tx.date)
        .bind(tx.amount)
        .bind(&tx.party_name)
        .bind(&tx.remarks)
        .bind(&tx.category)
        .bind(&tx.payment_mode)
        .bind(&tx.files)
        .fetch_one(&self.pool)
        .await?;

        Ok(stored)
    }

    async fn find_transaction(&self, id: Uuid) -> ApiResult<Option<Transaction>> {
        let tx = sqlx::query_as::<_, Transaction>("SELECT * FROM transactions WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(tx)
    }

    async fn list_transactions(
        &self,
        tx_type: Option<TransactionType>,
    ) -> ApiResult<Vec<Transaction>> {
        let transactions = match tx_type {
            Some(tx_type) => {
                sqlx::query_as::<_, Transaction>(
                    "SELECT * FROM transactions WHERE type = $1 ORDER BY created_at DESC",
                )
                .bind(tx_type)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Transaction>(
                    "SELECT * FROM transactions ORDER BY created_at DESC",
                )
                .fetch_all(&self.pool)
                .await?
            }
        };
        Ok(transactions)
    }

    async fn update_transaction(&self, tx: &Transaction) -> ApiResult<Transaction> {
        let updated = sqlx::query_as::<_, Transaction>(
            r#"
            UPDATE transactions SET
                type = $1, date = $2, amount = $3, party_name = $4,
                remarks = $5, category = $6, payment_mode = $7, files = $8,
                updated_at = now()
            WHERE id = $9
            RETURNING *
            "#,
        )
        .bind(tx.tx_type)
        .bind(tx.date)
        .bind(tx.amount)
        .bind(&tx.party_name)
        .bind(&tx.remarks)
        .bind(&tx.category)
        .bind(&tx.payment_mode)
        .bind(&tx.files)
        .bind(tx.id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| ApiError::NotFound("Transaction".to_string()))?;

        Ok(updated)
    }

    async fn delete_transactions(&self, ids: &[Uuid]) -> ApiResult<u64> {
        let result = sqlx::query("DELETE FROM transactions WHERE id = ANY($1)")
            .bind(ids)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}

#[async_trait]
impl RegistryStore for PgStore {
    async fn insert_party(&self, party: NewParty) -> ApiResult<Party> {
        let stored = sqlx::query_as::<_, Party>(
            r#"
            INSERT INTO parties (party_name, phone, party_type)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(&party.party_name)
        .bind(&party.phone)
        .bind(&party.party_type)
        .fetch_one(&self.pool)
        .await?;

        Ok(stored)
    }

    async fn find_party_by_name(&self, name: &str) -> ApiResult<Option<Party>> {
        let party = sqlx::query_as::<_, Party>("SELECT * FROM parties WHERE party_name = $1")
            .bind(name)
            .fetch_optional(&self.pool)
            .await?;
        Ok(party)
    }

    async fn list_parties(&self) -> ApiResult<Vec<Party>> {
        let parties =
            sqlx::query_as::<_, Party>("SELECT * FROM parties ORDER BY created_at DESC")
                .fetch_all(&self.pool)
                .await?;
        Ok(parties)
    }

    async fn insert_category(&self, name: &str) -> ApiResult<Category> {
        let stored = sqlx::query_as::<_, Category>(
            "INSERT INTO categories (category) VALUES ($1) RETURNING *",
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await?;

        Ok(stored)
    }

    async fn find_category_by_name(&self, name: &str) -> ApiResult<Option<Category>> {
        let category =
            sqlx::query_as::<_, Category>("SELECT * FROM categories WHERE category = $1")
                .bind(name)
                .fetch_optional(&self.pool)
                .await?;
        Ok(category)
    }

    async fn list_categories(&self) -> ApiResult<Vec<Category>> {
        let categories =
            sqlx::query_as::<_, Category>("SELECT * FROM categories ORDER BY created_at DESC")
                .fetch_all(&self.pool)
                .await?;
        Ok(categories)
    }

    async fn insert_payment_mode(&self, name: &str) -> ApiResult<PaymentMode> {
        let stored = sqlx::query_as::<_, PaymentMode>(
            "INSERT INTO payment_modes (payment_mode) VALUES ($1) RETURNING *",
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await?;

        Ok(stored)
    }

    async fn find_payment_mode_by_name(&self, name: &str) -> ApiResult<Option<PaymentMode>> {
        let mode = sqlx::query_as::<_, PaymentMode>(
            "SELECT * FROM payment_modes WHERE payment_mode = $1",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;
        Ok(mode)
    }

    async fn list_payment_modes(&self) -> ApiResult<Vec<PaymentMode>> {
        let modes = sqlx::query_as::<_, PaymentMode>(
            "SELECT * FROM payment_modes ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(modes)
    }
}
