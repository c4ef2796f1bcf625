//! Field bookkeeping: the farmer's plots, keyed by their start index in the pod line.
//!
//! A plot covers `[index, index + pods)`. Consuming pods from the front of a
//! plot moves its remainder to `index + consumed`; plots never overlap.

use std::collections::BTreeMap;

use alloy_primitives::U256;

use crate::error::{Inconsistency, LedgerResult};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlotLedger {
    plots: BTreeMap<U256, U256>,
}

impl PlotLedger {
    pub fn get(&self, index: &U256) -> Option<U256> {
        self.plots.get(index).copied()
    }

    /// Plots in ascending index order.
    pub fn iter(&self) -> impl Iterator<Item = (&U256, &U256)> {
        self.plots.iter()
    }

    pub fn len(&self) -> usize {
        self.plots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plots.is_empty()
    }

    pub fn total_pods(&self) -> U256 {
        self.plots
            .values()
            .fold(U256::ZERO, |acc, pods| acc.saturating_add(*pods))
    }

    /// A new plot at `index`.
    pub(crate) fn sow(&mut self, index: U256, pods: U256) -> LedgerResult<()> {
        self.insert_new(index, pods)
    }

    /// A plot arriving from another account.
    pub(crate) fn receive(&mut self, index: U256, pods: U256) -> LedgerResult<()> {
        self.insert_new(index, pods)
    }

    /// Redeem `beans` from the listed plots, lowest index first.
    ///
    /// Fully redeemed plots are deleted. A partially redeemed plot keeps its
    /// unredeemed pods at `index + redeemed`.
    pub(crate) fn harvest(&mut self, plots: &[U256], beans: U256) -> LedgerResult<()> {
        let mut order = plots.to_vec();
        order.sort();

        let mut staged = self.plots.clone();
        let mut remaining = beans;
        for index in order {
            let pods = staged
                .remove(&index)
                .ok_or(Inconsistency::MissingPlot { index })?;
            if remaining < pods {
                let front = index
                    .checked_add(remaining)
                    .ok_or(Inconsistency::Overflow)?;
                staged.insert(front, pods - remaining);
                remaining = U256::ZERO;
            } else {
                remaining -= pods;
            }
        }

        if !remaining.is_zero() {
            return Err(Inconsistency::UnspentHarvest { remaining }.into());
        }
        self.plots = staged;
        Ok(())
    }

    /// Send `pods` starting at `index` to another account.
    ///
    /// `index` is either the start of a plot (sent from the front) or a point
    /// inside one, in which case the head stays where it was and any tail past
    /// the sent range becomes its own plot.
    pub(crate) fn send(&mut self, index: U256, pods: U256) -> LedgerResult<()> {
        let (start, len) = self.containing(index)?;
        let end = start.checked_add(len).ok_or(Inconsistency::Overflow)?;
        let sent_end = index.checked_add(pods).ok_or(Inconsistency::Overflow)?;
        if sent_end > end {
            return Err(Inconsistency::PlotOverdrawn {
                index,
                requested: pods,
                available: end - index,
            }
            .into());
        }

        self.plots.remove(&start);
        if index > start {
            self.plots.insert(start, index - start);
        }
        if sent_end < end {
            self.plots.insert(sent_end, end - sent_end);
        }
        Ok(())
    }

    /// The plot that covers `index`, as `(start, pods)`.
    fn containing(&self, index: U256) -> Result<(U256, U256), Inconsistency> {
        self.plots
            .range(..=index)
            .next_back()
            .map(|(start, pods)| (*start, *pods))
            .filter(|(start, pods)| index - *start < *pods)
            .ok_or(Inconsistency::MissingPlot { index })
    }

    fn insert_new(&mut self, index: U256, pods: U256) -> LedgerResult<()> {
        if pods.is_zero() {
            return Ok(());
        }
        let end = index.checked_add(pods).ok_or(Inconsistency::Overflow)?;
        if self.containing(index).is_ok() || self.plots.range(index..end).next().is_some() {
            return Err(Inconsistency::PlotOccupied { index }.into());
        }
        self.plots.insert(index, pods);
        Ok(())
    }
}
