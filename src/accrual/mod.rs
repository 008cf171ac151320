//! Loan accrual arithmetic.
//!
//! Pure functions deriving a loan's daily interest amount, daily EMI, and
//! due date from principal, rate, term, and start date. Interest is flat
//! per-day simple interest on the original principal, not a declining
//! balance: every recomputation uses the currently stored principal, so
//! changing the principal retroactively changes the whole projected
//! schedule. Amounts are rounded half-up to 2 decimal places.

use chrono::{Days, NaiveDate};
use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

/// Accrual input errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccrualError {
    #[error("loan amount must be greater than zero")]
    NonPositivePrincipal,

    #[error("interest rate must not be negative")]
    NegativeRate,

    #[error("loan term must be a positive number of days")]
    NonPositiveTerm,

    #[error("due date falls outside the supported calendar range")]
    DueDateOutOfRange,
}

/// Derived accrual fields for a loan.
///
/// `daily_emi` and `due_date` are only defined once a term is known;
/// `daily_interest_amount` does not depend on the term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    pub daily_interest_amount: Decimal,
    pub daily_emi: Option<Decimal>,
    pub due_date: Option<NaiveDate>,
}

/// Round to 2 decimal places, half-up (currency rounding).
fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

fn check_principal_and_rate(principal: Decimal, rate_percent: Decimal) -> Result<(), AccrualError> {
    if principal <= Decimal::ZERO {
        return Err(AccrualError::NonPositivePrincipal);
    }
    if rate_percent < Decimal::ZERO {
        return Err(AccrualError::NegativeRate);
    }
    Ok(())
}

/// Daily interest on the original principal: `principal × rate% / 100`.
pub fn daily_interest_amount(
    principal: Decimal,
    rate_percent: Decimal,
) -> Result<Decimal, AccrualError> {
    check_principal_and_rate(principal, rate_percent)?;
    Ok(round_currency(principal * rate_percent / Decimal::ONE_HUNDRED))
}

/// Daily EMI: the principal spread over the term plus the (already
/// rounded) daily interest amount.
pub fn daily_emi(
    principal: Decimal,
    rate_percent: Decimal,
    term_days: i32,
) -> Result<Decimal, AccrualError> {
    if term_days <= 0 {
        return Err(AccrualError::NonPositiveTerm);
    }
    let interest = daily_interest_amount(principal, rate_percent)?;
    Ok(round_currency(principal / Decimal::from(term_days) + interest))
}

/// Due date: `start + term_days` calendar days, no business-day
/// adjustment and no time-of-day component.
pub fn due_date(start: NaiveDate, term_days: i32) -> Result<NaiveDate, AccrualError> {
    if term_days <= 0 {
        return Err(AccrualError::NonPositiveTerm);
    }
    start
        .checked_add_days(Days::new(term_days as u64))
        .ok_or(AccrualError::DueDateOutOfRange)
}

/// Derive all accrual fields in one pass.
///
/// Used by the loan lifecycle on both creation and update so the stored
/// derived fields always match the stored principal/rate/term.
pub fn derive_schedule(
    principal: Decimal,
    rate_percent: Decimal,
    term_days: Option<i32>,
    start: NaiveDate,
) -> Result<Schedule, AccrualError> {
    let interest = daily_interest_amount(principal, rate_percent)?;

    let (emi, due) = match term_days {
        Some(term) => (
            Some(daily_emi(principal, rate_percent, term)?),
            Some(due_date(start, term)?),
        ),
        None => (None, None),
    };

    Ok(Schedule {
        daily_interest_amount: interest,
        daily_emi: emi,
        due_date: due,
    })
}
