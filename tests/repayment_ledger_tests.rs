//! Repayment ledger tests
//!
//! The ledger is append-only: posting never mutates the parent loan, two
//! identical posts yield two entries, and listings filter by loan.

use std::sync::Arc;

use rust_decimal_macros::dec;
use uuid::Uuid;

use cashbook_server::error::ApiError;
use cashbook_server::loan::{CreateLoanRequest, LoanService};
use cashbook_server::repayment::{CreateRepaymentRequest, EmiType, RepaymentService};
use cashbook_server::store::MemoryStore;

fn services() -> (LoanService, RepaymentService) {
    let store = Arc::new(MemoryStore::new());
    (
        LoanService::new(store.clone()),
        RepaymentService::new(store),
    )
}

fn loan_request() -> CreateLoanRequest {
    CreateLoanRequest {
        date: Some("2024-01-01".parse().unwrap()),
        loan_title: Some("Working capital".to_string()),
        loan_amount: Some(dec!(10000)),
        interest_rate: Some(dec!(2)),
        loan_term: Some(30),
        loan_issued_by: Some("State Bank".to_string()),
        ..Default::default()
    }
}

fn repayment_request(loan_id: Uuid) -> CreateRepaymentRequest {
    CreateRepaymentRequest {
        date: Some("2024-01-02".parse().unwrap()),
        loan_id: Some(loan_id),
        emi_amount: Some(dec!(533.33)),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_post_repayment() {
    let (loans, repayments) = services();
    let loan = loans.create_loan(loan_request()).await.unwrap();

    let entry = repayments
        .create_repayment(repayment_request(loan.id))
        .await
        .unwrap();

    assert_eq!(entry.loan_id, loan.id);
    assert_eq!(entry.emi_amount, dec!(533.33));
    assert_eq!(entry.emi_type, EmiType::Normal);
}

#[tokio::test]
async fn test_posting_does_not_touch_the_loan() {
    let (loans, repayments) = services();
    let loan = loans.create_loan(loan_request()).await.unwrap();

    repayments
        .create_repayment(repayment_request(loan.id))
        .await
        .unwrap();

    // The loan's stored fields, including its schedule, are unchanged.
    let after = loans.get_loan(loan.id).await.unwrap();
    assert_eq!(after.loan_amount, loan.loan_amount);
    assert_eq!(after.daily_interest_amount, loan.daily_interest_amount);
    assert_eq!(after.daily_emi, loan.daily_emi);
    assert_eq!(after.due_date, loan.due_date);
    assert_eq!(after.updated_at, loan.updated_at);
}

#[tokio::test]
async fn test_identical_posts_create_distinct_entries() {
    let (loans, repayments) = services();
    let loan = loans.create_loan(loan_request()).await.unwrap();

    let first = repayments
        .create_repayment(repayment_request(loan.id))
        .await
        .unwrap();
    let second = repayments
        .create_repayment(repayment_request(loan.id))
        .await
        .unwrap();

    assert_ne!(first.id, second.id);
    assert_eq!(repayments.list_repayments(None).await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_missing_fields_rejected_before_write() {
    let (_, repayments) = services();

    let result = repayments
        .create_repayment(CreateRepaymentRequest::default())
        .await;
    assert!(matches!(result, Err(ApiError::MissingField(_))));
    assert!(repayments.list_repayments(None).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_list_filters_by_loan() {
    let (loans, repayments) = services();
    let first = loans.create_loan(loan_request()).await.unwrap();
    let second = loans.create_loan(loan_request()).await.unwrap();

    repayments
        .create_repayment(repayment_request(first.id))
        .await
        .unwrap();
    repayments
        .create_repayment(repayment_request(second.id))
        .await
        .unwrap();
    repayments
        .create_repayment(repayment_request(second.id))
        .await
        .unwrap();

    let all = repayments.list_repayments(None).await.unwrap();
    assert_eq!(all.len(), 3);

    let of_second = repayments.list_repayments(Some(second.id)).await.unwrap();
    assert_eq!(of_second.len(), 2);
    assert!(of_second.iter().all(|entry| entry.loan_id == second.id));
}

#[tokio::test]
async fn test_list_is_newest_first() {
    let (loans, repayments) = services();
    let loan = loans.create_loan(loan_request()).await.unwrap();

    let first = repayments
        .create_repayment(CreateRepaymentRequest {
            emi_amount: Some(dec!(100)),
            ..repayment_request(loan.id)
        })
        .await
        .unwrap();
    let second = repayments
        .create_repayment(CreateRepaymentRequest {
            emi_amount: Some(dec!(200)),
            ..repayment_request(loan.id)
        })
        .await
        .unwrap();

    let entries = repayments.list_repayments(None).await.unwrap();
    assert_eq!(entries[0].id, second.id);
    assert_eq!(entries[1].id, first.id);
}

#[tokio::test]
async fn test_snapshot_fields_pass_through_unchanged() {
    let (loans, repayments) = services();
    let loan = loans.create_loan(loan_request()).await.unwrap();

    let entry = repayments
        .create_repayment(CreateRepaymentRequest {
            loan_title: Some(loan.loan_title.clone()),
            loan_amount: Some(loan.loan_amount),
            interest_rate: Some(loan.interest_rate),
            original_emi: loan.daily_emi,
            emi_type: Some(EmiType::Custom),
            ..repayment_request(loan.id)
        })
        .await
        .unwrap();

    assert_eq!(entry.loan_title.as_deref(), Some("Working capital"));
    assert_eq!(entry.original_emi, Some(dec!(533.33)));
    assert_eq!(entry.emi_type, EmiType::Custom);
}
