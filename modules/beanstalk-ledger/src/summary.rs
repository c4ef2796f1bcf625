//! Read-side views derived from the ledger. Nothing here mutates state.

use alloy_primitives::U256;
use beanstalk_events::{Season, Token};
use serde::Serialize;

use crate::state::{DepositCrate, SeasonMap, WithdrawalCrate};

/// Everything one token has in the silo, crates in season order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenSiloBalance {
    pub token: Token,
    pub amount: U256,
    pub bdv: U256,
    pub crates: Vec<(Season, DepositCrate)>,
}

impl TokenSiloBalance {
    pub fn from_crates(token: Token, crates: &SeasonMap<DepositCrate>) -> Self {
        let (amount, bdv) = crates.values().fold((U256::ZERO, U256::ZERO), |(a, b), c| {
            (a.saturating_add(c.amount), b.saturating_add(c.bdv))
        });
        Self {
            token,
            amount,
            bdv,
            crates: crates.iter().map(|(s, c)| (*s, *c)).collect(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WithdrawalBucket {
    pub amount: U256,
    pub crates: Vec<(Season, WithdrawalCrate)>,
}

impl WithdrawalBucket {
    fn push(&mut self, season: Season, c: WithdrawalCrate) {
        self.amount = self.amount.saturating_add(c.amount);
        self.crates.push((season, c));
    }
}

/// Withdrawals split by whether they can be claimed yet.
///
/// A crate withdrawn in a season after the current one is still locked
/// (`withdrawn`); anything at or before the current season is `claimable`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WithdrawalSummary {
    pub withdrawn: WithdrawalBucket,
    pub claimable: WithdrawalBucket,
}

impl WithdrawalSummary {
    pub fn split(crates: &SeasonMap<WithdrawalCrate>, current_season: Season) -> Self {
        let mut summary = Self::default();
        for (season, c) in crates {
            if *season <= current_season {
                summary.claimable.push(*season, *c);
            } else {
                summary.withdrawn.push(*season, *c);
            }
        }
        summary
    }
}
