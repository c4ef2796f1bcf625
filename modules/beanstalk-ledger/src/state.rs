//! Aggregate farmer state folded from the event stream.

use std::collections::BTreeMap;

use alloy_primitives::{Address, U256};
use beanstalk_events::Season;
use serde::Serialize;

use crate::field::PlotLedger;
use crate::params::Whitelist;

/// Deposited amount and its base deposited value for one (token, season).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct DepositCrate {
    pub amount: U256,
    pub bdv: U256,
}

/// Withdrawn amount waiting to be claimed for one (token, season).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct WithdrawalCrate {
    pub amount: U256,
}

pub type SeasonMap<T> = BTreeMap<Season, T>;

/// token -> season -> crate
pub type TokenMap<T> = BTreeMap<Address, SeasonMap<T>>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FarmerState {
    pub deposits: TokenMap<DepositCrate>,
    pub withdrawals: TokenMap<WithdrawalCrate>,
    pub plots: PlotLedger,
}

impl FarmerState {
    /// Empty state with an empty season map for every whitelisted token.
    pub fn for_whitelist(whitelist: &Whitelist) -> Self {
        Self {
            deposits: whitelist.addresses().map(|a| (*a, SeasonMap::new())).collect(),
            withdrawals: whitelist.addresses().map(|a| (*a, SeasonMap::new())).collect(),
            plots: PlotLedger::default(),
        }
    }
}
