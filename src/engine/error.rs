//! Error types for the split engine.

use thiserror::Error;

use crate::Cents;
use crate::model::GroupError;

/// Top-level error returned by [`split`](super::split).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("invalid group: {0}")]
    Group(#[from] GroupError),

    #[error("expected {expected} fair shares, got {actual}")]
    ShareCountMismatch { expected: usize, actual: usize },

    #[error("settlement failed: {0}")]
    Settlement(#[from] SettlementError),
}

/// Internal consistency failure of the settlement matching loop.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettlementError {
    /// One side ran out while the other still had an outstanding balance.
    /// Only possible when the balances fed in do not sum to zero.
    #[error("balances do not sum to zero: {creditors} still owed, {debtors} still owing")]
    Unbalanced { creditors: Cents, debtors: Cents },
}
