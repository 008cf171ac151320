//! Application state shared across handlers

use std::sync::Arc;

use axum::extract::FromRef;

use crate::config::Config;
use crate::loan::LoanService;
use crate::registry::RegistryService;
use crate::repayment::RepaymentService;
use crate::transaction::TransactionService;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub loan_service: Arc<LoanService>,
    pub repayment_service: Arc<RepaymentService>,
    pub transaction_service: Arc<TransactionService>,
    pub registry_service: Arc<RegistryService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(
        loan_service: Arc<LoanService>,
        repayment_service: Arc<RepaymentService>,
        transaction_service: Arc<TransactionService>,
        registry_service: Arc<RegistryService>,
        config: Arc<Config>,
    ) -> Self {
        Self {
            loan_service,
            repayment_service,
            transaction_service,
            registry_service,
            config,
        }
    }
}

impl FromRef<AppState> for Arc<LoanService> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.loan_service.clone()
    }
}

impl FromRef<AppState> for Arc<RepaymentService> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.repayment_service.clone()
    }
}

impl FromRef<AppState> for Arc<TransactionService> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.transaction_service.clone()
    }
}

impl FromRef<AppState> for Arc<RegistryService> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.registry_service.clone()
    }
}

impl FromRef<AppState> for Arc<Config> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.config.clone()
    }
}
