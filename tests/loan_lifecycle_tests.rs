//! Loan lifecycle tests
//!
//! Exercise creation, partial update, derived-field recomputation, and
//! batch deletion against the in-memory store.

use std::sync::Arc;

use rust_decimal_macros::dec;
use uuid::Uuid;

use cashbook_server::error::ApiError;
use cashbook_server::loan::{CreateLoanRequest, LoanService, UpdateLoanRequest};
use cashbook_server::store::MemoryStore;

fn service() -> LoanService {
    LoanService::new(Arc::new(MemoryStore::new()))
}

fn base_request() -> CreateLoanRequest {
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

// ============================================================================
// Creation
// ============================================================================

#[tokio::test]
async fn test_create_derives_accrual_fields() {
    let service = service();
    let loan = service.create_loan(base_request()).await.unwrap();

    assert_eq!(loan.daily_interest_amount, dec!(200.00));
    assert_eq!(loan.daily_emi, Some(dec!(533.33)));
    assert_eq!(loan.due_date, Some("2024-01-31".parse().unwrap()));
    assert_eq!(loan.payment_mode, "Cash");
}

#[tokio::test]
async fn test_create_without_term_leaves_term_fields_unset() {
    let service = service();
    let loan = service
        .create_loan(CreateLoanRequest {
            loan_term: None,
            ..base_request()
        })
        .await
        .unwrap();

    // Interest does not depend on the term; EMI and due date do.
    assert_eq!(loan.daily_interest_amount, dec!(200.00));
    assert_eq!(loan.daily_emi, None);
    assert_eq!(loan.due_date, None);
}

#[tokio::test]
async fn test_create_rejects_missing_fields() {
    let service = service();

    let result = service.create_loan(CreateLoanRequest::default()).await;
    assert!(matches!(result, Err(ApiError::MissingField(_))));

    let result = service
        .create_loan(CreateLoanRequest {
            interest_rate: None,
            ..base_request()
        })
        .await;
    match result {
        Err(ApiError::MissingField(field)) => assert_eq!(field, "interestRate"),
        other => panic!("expected MissingField, got {:?}", other.map(|_| ())),
    }
}

#[tokio::test]
async fn test_create_rejects_invalid_numbers() {
    let service = service();

    let result = service
        .create_loan(CreateLoanRequest {
            loan_amount: Some(dec!(-500)),
            ..base_request()
        })
        .await;
    assert!(matches!(result, Err(ApiError::InvalidInput(_))));

    let result = service
        .create_loan(CreateLoanRequest {
            loan_term: Some(0),
            ..base_request()
        })
        .await;
    assert!(matches!(result, Err(ApiError::InvalidInput(_))));
}

// ============================================================================
// Update and derived-field consistency
// ============================================================================

#[tokio::test]
async fn test_update_amount_recomputes_schedule() {
    let service = service();
    let loan = service.create_loan(base_request()).await.unwrap();

    let updated = service
        .update_loan(
            loan.id,
            UpdateLoanRequest {
                loan_amount: Some(dec!(20000)),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.loan_amount, dec!(20000));
    assert_eq!(updated.daily_interest_amount, dec!(400.00));
    assert_eq!(updated.daily_emi, Some(dec!(1066.67)));
    // Rate, term, and date unchanged, so the due date must not move.
    assert_eq!(updated.due_date, Some("2024-01-31".parse().unwrap()));
}

#[tokio::test]
async fn test_updated_loan_matches_equivalent_creation() {
    // After an amount update, the stored derived fields must equal what
    // a fresh creation with the same inputs would produce.
    let service = service();
    let loan = service.create_loan(base_request()).await.unwrap();
    let updated = service
        .update_loan(
            loan.id,
            UpdateLoanRequest {
                loan_amount: Some(dec!(20000)),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let fresh = service
        .create_loan(CreateLoanRequest {
            loan_amount: Some(dec!(20000)),
            ..base_request()
        })
        .await
        .unwrap();

    assert_eq!(updated.daily_interest_amount, fresh.daily_interest_amount);
    assert_eq!(updated.daily_emi, fresh.daily_emi);
    assert_eq!(updated.due_date, fresh.due_date);
}

#[tokio::test]
async fn test_update_term_fills_in_term_dependent_fields() {
    let service = service();
    let loan = service
        .create_loan(CreateLoanRequest {
            loan_term: None,
            ..base_request()
        })
        .await
        .unwrap();
    assert_eq!(loan.daily_emi, None);

    let updated = service
        .update_loan(
            loan.id,
            UpdateLoanRequest {
                loan_term: Some(30),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.daily_emi, Some(dec!(533.33)));
    assert_eq!(updated.due_date, Some("2024-01-31".parse().unwrap()));
}

#[tokio::test]
async fn test_update_of_other_fields_keeps_schedule() {
    let service = service();
    let loan = service.create_loan(base_request()).await.unwrap();

    let updated = service
        .update_loan(
            loan.id,
            UpdateLoanRequest {
                remarks: Some("rolled over from last season".to_string()),
                party_name: Some("Sharma Traders".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.remarks.as_deref(), Some("rolled over from last season"));
    assert_eq!(updated.daily_interest_amount, loan.daily_interest_amount);
    assert_eq!(updated.daily_emi, loan.daily_emi);
    assert_eq!(updated.due_date, loan.due_date);
}

#[tokio::test]
async fn test_update_recomputes_from_stored_start_date() {
    // When a single update changes both the date and an accrual input,
    // the schedule is derived from the date that was stored before the
    // update.
    let service = service();
    let loan = service.create_loan(base_request()).await.unwrap();

    let updated = service
        .update_loan(
            loan.id,
            UpdateLoanRequest {
                date: Some("2024-06-01".parse().unwrap()),
                loan_amount: Some(dec!(20000)),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.date, "2024-06-01".parse().unwrap());
    assert_eq!(updated.due_date, Some("2024-01-31".parse().unwrap()));
}

#[tokio::test]
async fn test_update_unknown_loan_is_not_found() {
    let service = service();
    let result = service
        .update_loan(Uuid::new_v4(), UpdateLoanRequest::default())
        .await;
    assert!(matches!(result, Err(ApiError::NotFound(_))));
}

// ============================================================================
// Listing and deletion
// ============================================================================

#[tokio::test]
async fn test_list_is_newest_first() {
    let service = service();
    let first = service
        .create_loan(CreateLoanRequest {
            loan_title: Some("First".to_string()),
            ..base_request()
        })
        .await
        .unwrap();
    let second = service
        .create_loan(CreateLoanRequest {
            loan_title: Some("Second".to_string()),
            ..base_request()
        })
        .await
        .unwrap();

    let loans = service.list_loans().await.unwrap();
    assert_eq!(loans.len(), 2);
    assert_eq!(loans[0].id, second.id);
    assert_eq!(loans[1].id, first.id);
}

#[tokio::test]
async fn test_get_loan() {
    let service = service();
    let loan = service.create_loan(base_request()).await.unwrap();

    let fetched = service.get_loan(loan.id).await.unwrap();
    assert_eq!(fetched.id, loan.id);

    let missing = service.get_loan(Uuid::new_v4()).await;
    assert!(matches!(missing, Err(ApiError::NotFound(_))));
}

#[tokio::test]
async fn test_batch_delete_ignores_unknown_ids() {
    let service = service();
    let keep = service.create_loan(base_request()).await.unwrap();
    let doomed = service.create_loan(base_request()).await.unwrap();

    let deleted = service
        .delete_loans(&[doomed.id, Uuid::new_v4()])
        .await
        .unwrap();
    assert_eq!(deleted, 1);

    let loans = service.list_loans().await.unwrap();
    assert_eq!(loans.len(), 1);
    assert_eq!(loans[0].id, keep.id);
}

#[tokio::test]
async fn test_batch_delete_rejects_empty_id_set() {
    let service = service();
    let result = service.delete_loans(&[]).await;
    assert!(matches!(result, Err(ApiError::InvalidInput(_))));
}
