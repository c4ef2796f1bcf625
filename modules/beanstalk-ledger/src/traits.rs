//! Core traits for the farmer ledger.

use beanstalk_events::Eventlike;

use crate::error::LedgerResult;

/// Pure state updates. No I/O, no side effects.
///
/// Called once per event, in chain order. A rejected event must leave the
/// state exactly as it was before the call.
pub trait Reducer<E: Eventlike, S>: Send + Sync {
    fn reduce(&self, state: &mut S, event: &E) -> LedgerResult<()>;
}
