//! Cash book transaction tests

use std::sync::Arc;

use rust_decimal_macros::dec;
use uuid::Uuid;

use cashbook_server::error::ApiError;
use cashbook_server::store::MemoryStore;
use cashbook_server::transaction::{
    CreateTransactionRequest, TransactionService, TransactionType, UpdateTransactionRequest,
};

fn service() -> TransactionService {
    TransactionService::new(Arc::new(MemoryStore::new()))
}

fn cash_in(amount: rust_decimal::Decimal) -> CreateTransactionRequest {
    CreateTransactionRequest {
        tx_type: Some(TransactionType::CashIn),
        date: Some("2024-03-01".parse().unwrap()),
        amount: Some(amount),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_create_and_list() {
    let service = service();
    let first = service.create_transaction(cash_in(dec!(1500))).await.unwrap();
    let second = service
        .create_transaction(CreateTransactionRequest {
            tx_type: Some(TransactionType::CashOut),
            ..cash_in(dec!(250))
        })
        .await
        .unwrap();

    let all = service.list_transactions().await.unwrap();
    assert_eq!(all.len(), 2);
    // Newest first
    assert_eq!(all[0].id, second.id);
    assert_eq!(all[1].id, first.id);
}

#[tokio::test]
async fn test_list_by_type() {
    let service = service();
    service.create_transaction(cash_in(dec!(100))).await.unwrap();
    service.create_transaction(cash_in(dec!(200))).await.unwrap();
    service
        .create_transaction(CreateTransactionRequest {
            tx_type: Some(TransactionType::CashOut),
            ..cash_in(dec!(50))
        })
        .await
        .unwrap();

    let cash_ins = service
        .list_transactions_by_type(TransactionType::CashIn)
        .await
        .unwrap();
    assert_eq!(cash_ins.len(), 2);
    assert!(cash_ins
        .iter()
        .all(|tx| tx.tx_type == TransactionType::CashIn));
}

#[tokio::test]
async fn test_create_requires_core_fields() {
    let service = service();
    let result = service
        .create_transaction(CreateTransactionRequest::default())
        .await;
    assert!(matches!(result, Err(ApiError::MissingField(_))));
}

#[tokio::test]
async fn test_partial_update() {
    let service = service();
    let tx = service.create_transaction(cash_in(dec!(100))).await.unwrap();

    let updated = service
        .update_transaction(
            tx.id,
            UpdateTransactionRequest {
                amount: Some(dec!(175)),
                category: Some("Supplies".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.amount, dec!(175));
    assert_eq!(updated.category.as_deref(), Some("Supplies"));
    // Untouched fields stay as stored.
    assert_eq!(updated.tx_type, TransactionType::CashIn);
    assert_eq!(updated.date, tx.date);
}

#[tokio::test]
async fn test_update_unknown_id_is_not_found() {
    let service = service();
    let result = service
        .update_transaction(Uuid::new_v4(), UpdateTransactionRequest::default())
        .await;
    assert!(matches!(result, Err(ApiError::NotFound(_))));
}

#[tokio::test]
async fn test_batch_delete_semantics() {
    let service = service();
    let keep = service.create_transaction(cash_in(dec!(10))).await.unwrap();
    let doomed = service.create_transaction(cash_in(dec!(20))).await.unwrap();

    assert!(matches!(
        service.delete_transactions(&[]).await,
        Err(ApiError::InvalidInput(_))
    ));

    let deleted = service
        .delete_transactions(&[doomed.id, Uuid::new_v4()])
        .await
        .unwrap();
    assert_eq!(deleted, 1);

    let remaining = service.list_transactions().await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, keep.id);
}
