use alloy_primitives::{Address, U256};
use serde::{Deserialize, Serialize};

use crate::events::FarmerEvent;

/// Discrete time bucket deposits and withdrawals are grouped by.
pub type Season = u32;

/// A token the silo accepts, with the precision its raw amounts are scaled by.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    pub address: Address,
    pub symbol: String,
    pub decimals: u8,
}

impl Token {
    pub fn new(address: Address, symbol: impl Into<String>, decimals: u8) -> Self {
        Self {
            address,
            symbol: symbol.into(),
            decimals,
        }
    }

    /// Raw amount for `whole` units of this token (`whole * 10^decimals`).
    pub fn amount(&self, whole: u64) -> U256 {
        scale_units(whole, self.decimals)
    }

    /// Human-readable rendering of a raw amount. Presentation only.
    pub fn display_amount(&self, raw: U256) -> String {
        format_units(raw, self.decimals)
    }
}

/// `whole * 10^decimals` as an exact integer.
pub fn scale_units(whole: u64, decimals: u8) -> U256 {
    U256::from(whole) * U256::from(10u8).pow(U256::from(decimals))
}

/// Render a raw integer amount at `decimals` precision.
///
/// Trailing fractional zeros are trimmed so plot indices and pods read the
/// way they are quoted: `format_units(737663715081254, 6)` is
/// `"737663715.081254"` and `format_units(1000000, 6)` is `"1"`. Precisions
/// beyond what a `U256` can carry render the raw integer.
pub fn format_units(raw: U256, decimals: u8) -> String {
    match alloy_primitives::utils::format_units(raw, decimals) {
        Ok(formatted) if formatted.contains('.') => formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string(),
        Ok(formatted) => formatted,
        Err(_) => raw.to_string(),
    }
}

/// Where a log sits in the chain. Orders by block, then by index within the block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LogPosition {
    pub block_number: u64,
    pub log_index: u64,
}

/// A decoded event as handed over by the log-fetching side, with its chain position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChainEvent {
    pub block_number: u64,
    pub log_index: u64,
    pub log: FarmerEvent,
}

impl ChainEvent {
    pub fn new(block_number: u64, log_index: u64, log: FarmerEvent) -> Self {
        Self {
            block_number,
            log_index,
            log,
        }
    }

    pub fn position(&self) -> LogPosition {
        LogPosition {
            block_number: self.block_number,
            log_index: self.log_index,
        }
    }
}
