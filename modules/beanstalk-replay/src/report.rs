//! Human-readable view of a folded ledger. Raw integers become decimal
//! strings here and nowhere else.

use std::fmt;

use beanstalk_events::{format_units, Season};
use beanstalk_ledger::{EventProcessor, WithdrawalBucket};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Snapshot {
    pub account: String,
    pub season: Season,
    pub silo: Vec<TokenReport>,
    pub field: FieldReport,
}

#[derive(Debug, Serialize)]
pub struct TokenReport {
    pub symbol: String,
    pub address: String,
    pub deposited: String,
    pub bdv: String,
    pub deposits: Vec<CrateRow>,
    pub withdrawn: String,
    pub claimable: String,
    pub withdrawals: Vec<CrateRow>,
}

#[derive(Debug, Serialize)]
pub struct CrateRow {
    pub season: Season,
    pub amount: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bdv: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub claimable: Option<bool>,
}

#[derive(Debug, Serialize)]
pub struct FieldReport {
    pub total_pods: String,
    pub plots: Vec<PlotRow>,
}

#[derive(Debug, Serialize)]
pub struct PlotRow {
    pub index: String,
    pub pods: String,
}

pub fn snapshot(processor: &EventProcessor, bean_decimals: u8) -> Snapshot {
    let params = processor.params();

    let silo = params
        .whitelist
        .tokens()
        .filter_map(|token| {
            let balance = processor.token_balance(&token.address)?;
            let withdrawals = processor.parse_withdrawals(&token.address)?;
            let decimals = token.decimals;

            let deposits = balance
                .crates
                .iter()
                .map(|(season, c)| CrateRow {
                    season: *season,
                    amount: format_units(c.amount, decimals),
                    bdv: Some(format_units(c.bdv, bean_decimals)),
                    claimable: None,
                })
                .collect();

            let mut withdrawal_rows = rows(&withdrawals.claimable, decimals, true);
            withdrawal_rows.extend(rows(&withdrawals.withdrawn, decimals, false));
            withdrawal_rows.sort_by_key(|r| r.season);

            Some(TokenReport {
                symbol: token.symbol.clone(),
                address: token.address.to_string(),
                deposited: format_units(balance.amount, decimals),
                bdv: format_units(balance.bdv, bean_decimals),
                deposits,
                withdrawn: format_units(withdrawals.withdrawn.amount, decimals),
                claimable: format_units(withdrawals.claimable.amount, decimals),
                withdrawals: withdrawal_rows,
            })
        })
        .collect();

    let plots = processor
        .plots()
        .iter()
        .map(|(index, pods)| PlotRow {
            index: format_units(*index, bean_decimals),
            pods: format_units(*pods, bean_decimals),
        })
        .collect();

    Snapshot {
        account: processor.account().to_string(),
        season: params.season,
        silo,
        field: FieldReport {
            total_pods: format_units(processor.total_pods(), bean_decimals),
            plots,
        },
    }
}

fn rows(bucket: &WithdrawalBucket, decimals: u8, claimable: bool) -> Vec<CrateRow> {
    bucket
        .crates
        .iter()
        .map(|(season, c)| CrateRow {
            season: *season,
            amount: format_units(c.amount, decimals),
            bdv: None,
            claimable: Some(claimable),
        })
        .collect()
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Farmer {} @ season {} ===", self.account, self.season)?;

        for token in &self.silo {
            writeln!(
                f,
                "\n{}  deposited {} (bdv {})  |  withdrawn {}  |  claimable {}",
                token.symbol, token.deposited, token.bdv, token.withdrawn, token.claimable
            )?;
            for row in &token.deposits {
                writeln!(
                    f,
                    "  deposit    season {:>6}  {}  bdv {}",
                    row.season,
                    row.amount,
                    row.bdv.as_deref().unwrap_or("-")
                )?;
            }
            for row in &token.withdrawals {
                let state = if row.claimable == Some(true) { "claimable" } else { "locked" };
                writeln!(f, "  withdrawal season {:>6}  {}  {state}", row.season, row.amount)?;
            }
        }

        writeln!(f, "\nField  {} pods in {} plots", self.field.total_pods, self.field.plots.len())?;
        for plot in &self.field.plots {
            writeln!(f, "  plot @ {}  {} pods", plot.index, plot.pods)?;
        }
        Ok(())
    }
}
