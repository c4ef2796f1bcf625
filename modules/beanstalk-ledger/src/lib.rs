//! Farmer ledger: folds decoded Beanstalk events into silo and field balances.
//!
//! `EventProcessor` owns the state and applies events one at a time through a
//! `Reducer`. Rules for the silo (deposits, withdrawals) and the field (plots)
//! live in their own modules; rejected events never leave partial changes.

pub mod error;
pub mod field;
pub mod params;
pub mod processor;
pub mod reducer;
mod silo;
pub mod state;
pub mod summary;
pub mod traits;

pub use error::{Inconsistency, LedgerError, LedgerResult, ReplayError};
pub use field::PlotLedger;
pub use params::{ProcessingParams, Whitelist};
pub use processor::{chain_order, EventProcessor};
pub use reducer::FarmerReducer;
pub use state::{DepositCrate, FarmerState, SeasonMap, TokenMap, WithdrawalCrate};
pub use summary::{TokenSiloBalance, WithdrawalBucket, WithdrawalSummary};
pub use traits::Reducer;
