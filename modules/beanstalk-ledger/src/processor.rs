//! The ingestion entry point.

use alloy_primitives::{Address, U256};
use beanstalk_events::{ChainEvent, Eventlike, FarmerEvent};
use tracing::{debug, info, warn};

use crate::error::{LedgerResult, ReplayError};
use crate::field::PlotLedger;
use crate::params::ProcessingParams;
use crate::reducer::FarmerReducer;
use crate::state::{DepositCrate, FarmerState, SeasonMap, TokenMap, WithdrawalCrate};
use crate::summary::{TokenSiloBalance, WithdrawalSummary};
use crate::traits::Reducer;

/// Folds one account's decoded events into deposits, withdrawals and plots.
///
/// Events must be supplied in chain order. There is no undo: recovering from
/// a bad or misordered stream means replaying into a fresh processor.
pub struct EventProcessor {
    reducer: FarmerReducer,
    state: FarmerState,
}

impl EventProcessor {
    pub fn new(account: Address, params: ProcessingParams) -> Self {
        let state = FarmerState::for_whitelist(&params.whitelist);
        Self {
            reducer: FarmerReducer::new(account, params),
            state,
        }
    }

    /// Apply one event. On error the state is exactly what it was before.
    pub fn ingest(&mut self, event: &FarmerEvent) -> LedgerResult<()> {
        match self.reducer.reduce(&mut self.state, event) {
            Ok(()) => {
                debug!(event_type = event.event_type(), "Applied event");
                Ok(())
            }
            Err(e) => {
                warn!(event_type = event.event_type(), error = %e, "Rejected event");
                Err(e)
            }
        }
    }

    /// Sort by chain position and apply each event in turn, stopping at the
    /// first rejection. Returns how many events were applied.
    pub fn ingest_all(
        &mut self,
        events: impl IntoIterator<Item = ChainEvent>,
    ) -> Result<usize, ReplayError> {
        let mut events: Vec<ChainEvent> = events.into_iter().collect();
        chain_order(&mut events);

        for (applied, event) in events.iter().enumerate() {
            self.ingest(&event.log).map_err(|source| ReplayError {
                position: event.position(),
                applied,
                source,
            })?;
        }

        info!(
            account = %self.account(),
            events = events.len(),
            plots = self.state.plots.len(),
            "Replay complete"
        );
        Ok(events.len())
    }

    pub fn account(&self) -> Address {
        self.reducer.account()
    }

    pub fn params(&self) -> &ProcessingParams {
        self.reducer.params()
    }

    /// token -> season -> deposit crate
    pub fn deposits(&self) -> &TokenMap<DepositCrate> {
        &self.state.deposits
    }

    /// token -> season -> withdrawal crate
    pub fn withdrawals(&self) -> &TokenMap<WithdrawalCrate> {
        &self.state.withdrawals
    }

    pub fn plots(&self) -> &PlotLedger {
        &self.state.plots
    }

    pub fn state(&self) -> &FarmerState {
        &self.state
    }

    pub fn total_pods(&self) -> U256 {
        self.state.plots.total_pods()
    }

    /// Totals and crates for a whitelisted token.
    pub fn token_balance(&self, token: &Address) -> Option<TokenSiloBalance> {
        let meta = self.params().whitelist.get(token)?;
        let empty = SeasonMap::new();
        let crates = self.state.deposits.get(token).unwrap_or(&empty);
        Some(TokenSiloBalance::from_crates(meta.clone(), crates))
    }

    /// A whitelisted token's withdrawals, split into locked and claimable
    /// relative to the configured season.
    pub fn parse_withdrawals(&self, token: &Address) -> Option<WithdrawalSummary> {
        if !self.params().whitelist.contains(token) {
            return None;
        }
        let empty = SeasonMap::new();
        let crates = self.state.withdrawals.get(token).unwrap_or(&empty);
        Some(WithdrawalSummary::split(crates, self.params().season))
    }
}

/// Sort events by block number, then log index. Stable for equal positions.
pub fn chain_order(events: &mut [ChainEvent]) {
    events.sort_by_key(|e| e.position());
}
