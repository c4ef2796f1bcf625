//! Per-event rules: which part of the farmer state each event touches.

use alloy_primitives::{Address, U256};
use beanstalk_events::FarmerEvent;
use tracing::debug;

use crate::error::{LedgerError, LedgerResult};
use crate::params::ProcessingParams;
use crate::state::FarmerState;
use crate::traits::Reducer;

/// Applies decoded events for one account against a fixed whitelist.
pub struct FarmerReducer {
    account: Address,
    params: ProcessingParams,
}

impl FarmerReducer {
    pub fn new(account: Address, params: ProcessingParams) -> Self {
        Self { account, params }
    }

    pub fn account(&self) -> Address {
        self.account
    }

    pub fn params(&self) -> &ProcessingParams {
        &self.params
    }

    fn check_token(&self, token: Address) -> LedgerResult<()> {
        if self.params.whitelist.contains(&token) {
            Ok(())
        } else {
            Err(LedgerError::UnknownToken { token })
        }
    }

    fn check_account(&self, found: Address) -> LedgerResult<()> {
        if found == self.account {
            Ok(())
        } else {
            Err(LedgerError::AccountMismatch {
                expected: self.account,
                found,
            })
        }
    }

    fn transfer_plot(
        &self,
        state: &mut FarmerState,
        from: Address,
        to: Address,
        id: U256,
        pods: U256,
    ) -> LedgerResult<()> {
        if from == to {
            return self.check_account(from);
        }
        if to == self.account {
            state.plots.receive(id, pods)
        } else if from == self.account {
            state.plots.send(id, pods)
        } else {
            Err(LedgerError::AccountMismatch {
                expected: self.account,
                found: from,
            })
        }
    }
}

impl Reducer<FarmerEvent, FarmerState> for FarmerReducer {
    fn reduce(&self, state: &mut FarmerState, event: &FarmerEvent) -> LedgerResult<()> {
        // A zero claim is how a failed claim shows up in the logs. Nothing to check.
        if let FarmerEvent::RemoveWithdrawal { amount, season, .. } = event {
            if amount.is_zero() {
                debug!(season, "Ignoring empty withdrawal claim");
                return Ok(());
            }
        }

        if let Some(token) = event.token() {
            self.check_token(token)?;
        }
        if let Some(account) = event.account() {
            self.check_account(account)?;
        }

        match event {
            FarmerEvent::AddDeposit {
                token,
                season,
                amount,
                bdv,
                ..
            } => state.add_deposit(*token, *season, *amount, *bdv),
            FarmerEvent::RemoveDeposit {
                token,
                season,
                amount,
                bdv,
                ..
            } => state.remove_deposit(*token, *season, *amount, *bdv),
            FarmerEvent::RemoveDeposits {
                token,
                seasons,
                amounts,
                amount,
                bdvs,
                ..
            } => state.remove_deposits(*token, seasons, amounts, *amount, bdvs),
            FarmerEvent::AddWithdrawal {
                token,
                season,
                amount,
                ..
            } => state.add_withdrawal(*token, *season, *amount),
            FarmerEvent::RemoveWithdrawal {
                token,
                season,
                amount,
                ..
            } => state.remove_withdrawal(*token, *season, *amount),
            FarmerEvent::RemoveWithdrawals {
                token,
                seasons,
                amount,
                ..
            } => state.remove_withdrawals(*token, seasons, *amount),
            FarmerEvent::Sow { index, pods, .. } => state.plots.sow(*index, *pods),
            FarmerEvent::Harvest { plots, beans, .. } => state.plots.harvest(plots, *beans),
            FarmerEvent::PlotTransfer { from, to, id, pods } => {
                self.transfer_plot(state, *from, *to, *id, *pods)
            }
        }
    }
}
