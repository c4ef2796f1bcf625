//! Typed errors for event ingestion.

use alloy_primitives::{Address, U256};
use beanstalk_events::{LogPosition, Season};
use thiserror::Error;

/// Why an event was rejected. The ledger is unchanged whenever one is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// Token is not on the configured whitelist
    #[error("unknown token: {token}")]
    UnknownToken { token: Address },

    /// Event is attributed to another account
    #[error("event for {found} does not belong to {expected}")]
    AccountMismatch { expected: Address, found: Address },

    /// Event contradicts what earlier events built up
    #[error("state inconsistency: {0}")]
    StateInconsistency(#[from] Inconsistency),
}

/// Ways an event can disagree with the accumulated ledger.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Inconsistency {
    #[error("no deposit of {token} in season {season}")]
    MissingDeposit { token: Address, season: Season },

    #[error("removing {requested} {field} of {token} in season {season} exceeds stored {stored}")]
    DepositOverdrawn {
        token: Address,
        season: Season,
        field: &'static str,
        requested: U256,
        stored: U256,
    },

    #[error("no withdrawal of {token} in season {season}")]
    MissingWithdrawal { token: Address, season: Season },

    #[error("removing {requested} of {token} in season {season} exceeds stored {stored}")]
    WithdrawalOverdrawn {
        token: Address,
        season: Season,
        requested: U256,
        stored: U256,
    },

    #[error("claim of {token} left {remaining} unaccounted for")]
    UnspentClaim { token: Address, remaining: U256 },

    #[error("batch shape mismatch: {seasons} seasons, {amounts} amounts, {bdvs} bdvs")]
    BatchShape {
        seasons: usize,
        amounts: usize,
        bdvs: usize,
    },

    #[error("batch total {declared} does not match summed amounts {summed}")]
    BatchTotal { declared: U256, summed: U256 },

    #[error("no plot at index {index}")]
    MissingPlot { index: U256 },

    #[error("plot at index {index} already exists")]
    PlotOccupied { index: U256 },

    #[error("moving {requested} pods at index {index} exceeds the {available} available")]
    PlotOverdrawn {
        index: U256,
        requested: U256,
        available: U256,
    },

    #[error("harvest left {remaining} beans unaccounted for")]
    UnspentHarvest { remaining: U256 },

    #[error("amount overflow")]
    Overflow,
}

/// An ordered replay stopped at a rejected event.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("replay stopped at block {} log {} after {applied} events: {source}", .position.block_number, .position.log_index)]
pub struct ReplayError {
    pub position: LogPosition,
    pub applied: usize,
    #[source]
    pub source: LedgerError,
}

/// Result type alias for ledger operations.
pub type LedgerResult<T> = std::result::Result<T, LedgerError>;
