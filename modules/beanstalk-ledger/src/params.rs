use std::collections::BTreeMap;

use alloy_primitives::Address;
use beanstalk_events::{Season, Token};

/// Tokens the silo accepts, looked up by address.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Whitelist {
    tokens: BTreeMap<Address, Token>,
}

impl Whitelist {
    pub fn new(tokens: impl IntoIterator<Item = Token>) -> Self {
        Self {
            tokens: tokens.into_iter().map(|t| (t.address, t)).collect(),
        }
    }

    pub fn get(&self, address: &Address) -> Option<&Token> {
        self.tokens.get(address)
    }

    pub fn contains(&self, address: &Address) -> bool {
        self.tokens.contains_key(address)
    }

    pub fn addresses(&self) -> impl Iterator<Item = &Address> {
        self.tokens.keys()
    }

    pub fn tokens(&self) -> impl Iterator<Item = &Token> {
        self.tokens.values()
    }
}

/// Context an `EventProcessor` is built with: the current season and the
/// token whitelist. Owned by the processor; nothing here is global.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessingParams {
    pub season: Season,
    pub whitelist: Whitelist,
}

impl ProcessingParams {
    pub fn new(season: Season, tokens: impl IntoIterator<Item = Token>) -> Self {
        Self {
            season,
            whitelist: Whitelist::new(tokens),
        }
    }
}
