//! Silo bookkeeping: deposit and withdrawal crates per (token, season).
//!
//! Every operation validates the whole change before writing, so a returned
//! error leaves the crates untouched. Crates whose amount reaches zero are
//! deleted rather than kept as zero-valued entries.

use alloy_primitives::{Address, U256};
use beanstalk_events::Season;
use tracing::debug;

use crate::error::{Inconsistency, LedgerResult};
use crate::state::{DepositCrate, FarmerState, SeasonMap, WithdrawalCrate};

impl FarmerState {
    pub(crate) fn add_deposit(
        &mut self,
        token: Address,
        season: Season,
        amount: U256,
        bdv: U256,
    ) -> LedgerResult<()> {
        let crates = self.deposits.entry(token).or_default();
        let current = crates.get(&season).copied().unwrap_or_default();
        let next = DepositCrate {
            amount: current.amount.checked_add(amount).ok_or(Inconsistency::Overflow)?,
            bdv: current.bdv.checked_add(bdv).ok_or(Inconsistency::Overflow)?,
        };
        if next.amount.is_zero() && next.bdv.is_zero() {
            return Ok(());
        }
        crates.insert(season, next);
        Ok(())
    }

    pub(crate) fn remove_deposit(
        &mut self,
        token: Address,
        season: Season,
        amount: U256,
        bdv: U256,
    ) -> LedgerResult<()> {
        let crates = self.deposits.entry(token).or_default();
        draw_deposit(crates, token, season, amount, Some(bdv))?;
        Ok(())
    }

    /// Remove several crates of one token at once. `bdvs` may be empty, in
    /// which case each crate gives up bdv in proportion to the amount removed.
    pub(crate) fn remove_deposits(
        &mut self,
        token: Address,
        seasons: &[Season],
        amounts: &[U256],
        amount: U256,
        bdvs: &[U256],
    ) -> LedgerResult<()> {
        if seasons.len() != amounts.len() || (!bdvs.is_empty() && bdvs.len() != seasons.len()) {
            return Err(Inconsistency::BatchShape {
                seasons: seasons.len(),
                amounts: amounts.len(),
                bdvs: bdvs.len(),
            }
            .into());
        }

        let summed = amounts
            .iter()
            .try_fold(U256::ZERO, |acc, a| acc.checked_add(*a))
            .ok_or(Inconsistency::Overflow)?;
        if summed != amount {
            return Err(Inconsistency::BatchTotal {
                declared: amount,
                summed,
            }
            .into());
        }

        let crates = self.deposits.entry(token).or_default();
        let mut staged = crates.clone();
        for (i, (season, removed)) in seasons.iter().zip(amounts).enumerate() {
            draw_deposit(&mut staged, token, *season, *removed, bdvs.get(i).copied())?;
        }
        *crates = staged;
        Ok(())
    }

    pub(crate) fn add_withdrawal(
        &mut self,
        token: Address,
        season: Season,
        amount: U256,
    ) -> LedgerResult<()> {
        if amount.is_zero() {
            return Ok(());
        }
        let crates = self.withdrawals.entry(token).or_default();
        let current = crates.get(&season).copied().unwrap_or_default();
        let next = current.amount.checked_add(amount).ok_or(Inconsistency::Overflow)?;
        crates.insert(season, WithdrawalCrate { amount: next });
        Ok(())
    }

    pub(crate) fn remove_withdrawal(
        &mut self,
        token: Address,
        season: Season,
        amount: U256,
    ) -> LedgerResult<()> {
        let crates = self.withdrawals.entry(token).or_default();
        let stored = crates
            .get(&season)
            .ok_or(Inconsistency::MissingWithdrawal { token, season })?
            .amount;
        let left = stored
            .checked_sub(amount)
            .ok_or(Inconsistency::WithdrawalOverdrawn {
                token,
                season,
                requested: amount,
                stored,
            })?;

        if left.is_zero() {
            crates.remove(&season);
        } else {
            crates.insert(season, WithdrawalCrate { amount: left });
        }
        Ok(())
    }

    /// Claim `amount` across `seasons`, draining each listed crate in order.
    /// Seasons with no crate contribute nothing; any part of `amount` the
    /// listed crates cannot cover is an error.
    pub(crate) fn remove_withdrawals(
        &mut self,
        token: Address,
        seasons: &[Season],
        amount: U256,
    ) -> LedgerResult<()> {
        let crates = self.withdrawals.entry(token).or_default();
        let mut staged = crates.clone();
        let mut remaining = amount;

        for season in seasons {
            if remaining.is_zero() {
                break;
            }
            let Some(stored) = staged.get(season).map(|c| c.amount) else {
                debug!(%token, season, "Claimed season has no withdrawal crate");
                continue;
            };
            let taken = stored.min(remaining);
            remaining -= taken;
            if taken == stored {
                staged.remove(season);
            } else {
                staged.insert(*season, WithdrawalCrate { amount: stored - taken });
            }
        }

        if !remaining.is_zero() {
            return Err(Inconsistency::UnspentClaim { token, remaining }.into());
        }
        *crates = staged;
        Ok(())
    }
}

/// Take `amount` (and `bdv`, or a pro-rata share of it) out of one crate.
fn draw_deposit(
    crates: &mut SeasonMap<DepositCrate>,
    token: Address,
    season: Season,
    amount: U256,
    bdv: Option<U256>,
) -> Result<(), Inconsistency> {
    let current = *crates
        .get(&season)
        .ok_or(Inconsistency::MissingDeposit { token, season })?;

    let bdv = match bdv {
        Some(bdv) => bdv,
        None => pro_rata_bdv(&current, amount)?,
    };

    let left_amount = current
        .amount
        .checked_sub(amount)
        .ok_or(Inconsistency::DepositOverdrawn {
            token,
            season,
            field: "amount",
            requested: amount,
            stored: current.amount,
        })?;
    let left_bdv = current
        .bdv
        .checked_sub(bdv)
        .ok_or(Inconsistency::DepositOverdrawn {
            token,
            season,
            field: "bdv",
            requested: bdv,
            stored: current.bdv,
        })?;

    if left_amount.is_zero() {
        if !left_bdv.is_zero() {
            debug!(%token, season, bdv = %left_bdv, "Dropping residual bdv with emptied crate");
        }
        crates.remove(&season);
    } else {
        crates.insert(
            season,
            DepositCrate {
                amount: left_amount,
                bdv: left_bdv,
            },
        );
    }
    Ok(())
}

/// Share of a crate's bdv that leaves with `amount`, rounded down.
/// Removing the whole crate takes all of its bdv.
fn pro_rata_bdv(current: &DepositCrate, amount: U256) -> Result<U256, Inconsistency> {
    if amount >= current.amount || current.amount.is_zero() {
        return Ok(current.bdv);
    }
    let scaled = current
        .bdv
        .checked_mul(amount)
        .ok_or(Inconsistency::Overflow)?;
    Ok(scaled / current.amount)
}
