//! Decoded Beanstalk events relevant to a single farmer.
//!
//! Payloads are addressed by field name only. The wire shape mirrors a decoded
//! log: `{ "event": "AddDeposit", "args": { "account": ..., ... } }`.

use alloy_primitives::{Address, U256};
use serde::{Deserialize, Serialize};

use crate::eventlike::Eventlike;
use crate::types::Season;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "args")]
pub enum FarmerEvent {
    // -----------------------------------------------------------------------
    // Silo: deposits
    // -----------------------------------------------------------------------
    AddDeposit {
        account: Address,
        token: Address,
        season: Season,
        amount: U256,
        bdv: U256,
    },

    RemoveDeposit {
        account: Address,
        token: Address,
        season: Season,
        amount: U256,
        bdv: U256,
    },

    /// Several crates of one token removed in a single call.
    /// `amounts[i]` and `bdvs[i]` belong to `seasons[i]`; `amount` is their sum.
    RemoveDeposits {
        account: Address,
        token: Address,
        seasons: Vec<Season>,
        amounts: Vec<U256>,
        amount: U256,
        #[serde(default)]
        bdvs: Vec<U256>,
    },

    // -----------------------------------------------------------------------
    // Silo: withdrawals
    // -----------------------------------------------------------------------
    AddWithdrawal {
        account: Address,
        token: Address,
        season: Season,
        amount: U256,
    },

    /// A claim. `amount` is zero when the claim found nothing to remove.
    RemoveWithdrawal {
        account: Address,
        token: Address,
        season: Season,
        amount: U256,
    },

    RemoveWithdrawals {
        account: Address,
        token: Address,
        seasons: Vec<Season>,
        amount: U256,
    },

    // -----------------------------------------------------------------------
    // Field: plots
    // -----------------------------------------------------------------------
    Sow {
        account: Address,
        index: U256,
        beans: U256,
        pods: U256,
    },

    Harvest {
        account: Address,
        plots: Vec<U256>,
        beans: U256,
    },

    PlotTransfer {
        from: Address,
        to: Address,
        id: U256,
        pods: U256,
    },
}

impl FarmerEvent {
    /// Deserialize an event from its `{ event, args }` payload.
    pub fn from_payload(payload: &serde_json::Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(payload.clone())
    }

    /// The silo token this event is scoped to. `None` for field events.
    pub fn token(&self) -> Option<Address> {
        match self {
            FarmerEvent::AddDeposit { token, .. }
            | FarmerEvent::RemoveDeposit { token, .. }
            | FarmerEvent::RemoveDeposits { token, .. }
            | FarmerEvent::AddWithdrawal { token, .. }
            | FarmerEvent::RemoveWithdrawal { token, .. }
            | FarmerEvent::RemoveWithdrawals { token, .. } => Some(*token),
            FarmerEvent::Sow { .. } | FarmerEvent::Harvest { .. } | FarmerEvent::PlotTransfer { .. } => {
                None
            }
        }
    }

    /// The account the event is attributed to. Plot transfers involve two
    /// accounts and return `None`.
    pub fn account(&self) -> Option<Address> {
        match self {
            FarmerEvent::AddDeposit { account, .. }
            | FarmerEvent::RemoveDeposit { account, .. }
            | FarmerEvent::RemoveDeposits { account, .. }
            | FarmerEvent::AddWithdrawal { account, .. }
            | FarmerEvent::RemoveWithdrawal { account, .. }
            | FarmerEvent::RemoveWithdrawals { account, .. }
            | FarmerEvent::Sow { account, .. }
            | FarmerEvent::Harvest { account, .. } => Some(*account),
            FarmerEvent::PlotTransfer { .. } => None,
        }
    }
}

impl Eventlike for FarmerEvent {
    fn event_type(&self) -> &'static str {
        match self {
            FarmerEvent::AddDeposit { .. } => "add_deposit",
            FarmerEvent::RemoveDeposit { .. } => "remove_deposit",
            FarmerEvent::RemoveDeposits { .. } => "remove_deposits",
            FarmerEvent::AddWithdrawal { .. } => "add_withdrawal",
            FarmerEvent::RemoveWithdrawal { .. } => "remove_withdrawal",
            FarmerEvent::RemoveWithdrawals { .. } => "remove_withdrawals",
            FarmerEvent::Sow { .. } => "sow",
            FarmerEvent::Harvest { .. } => "harvest",
            FarmerEvent::PlotTransfer { .. } => "plot_transfer",
        }
    }

    fn to_payload(&self) -> serde_json::Value {
        serde_json::to_value(self).expect("FarmerEvent serialization should never fail")
    }
}
