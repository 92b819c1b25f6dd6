use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashSet;

use super::filter::filter_entries;
use super::roc::{derive_entries, rate_of_change, DerivedEntry};
use crate::models::{Account, Entry};

/// Portfolio summary over a filtered set of entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    pub total_pnl: f64,
    pub weighted_roc: f64,
    pub accounts_involved: usize,
    pub best: Option<DerivedEntry>,
    pub worst: Option<DerivedEntry>,
}

pub fn compute_metrics(accounts: &[Account], entries: &[Entry], date_filter: Option<&str>) -> Metrics {
    let filtered = filter_entries(entries, date_filter);
    aggregate(accounts, &filtered)
}

/// Folds already-filtered entries into a `Metrics` snapshot.
///
/// The weighting denominator adds an account's capital once per entry, so an
/// account with three entries in the window counts three times. The account
/// count is a distinct count.
pub fn aggregate(accounts: &[Account], filtered: &[&Entry]) -> Metrics {
    if filtered.is_empty() {
        return Metrics::default();
    }

    let derived = derive_entries(accounts, filtered.iter().copied());

    let mut total_pnl = 0.0;
    let mut total_capital_weighted = 0.0;
    let mut account_ids: HashSet<&str> = HashSet::new();

    for row in &derived {
        total_pnl += row.pnl();
        total_capital_weighted += row.capital;
        account_ids.insert(row.account_id());
    }

    let weighted_roc = rate_of_change(total_pnl, total_capital_weighted);
    let accounts_involved = account_ids.len();

    // Stable sort: ties keep filtered order, so best is the first of the
    // maximal entries and worst the last of the minimal ones.
    let mut sorted_by_pnl = derived;
    sorted_by_pnl.sort_by(|a, b| b.pnl().partial_cmp(&a.pnl()).unwrap_or(Ordering::Equal));

    let best = sorted_by_pnl.first().cloned();
    let worst = sorted_by_pnl.pop();

    log::debug!(
        "Aggregated {} entries: total_pnl={} weighted_roc={} accounts={}",
        filtered.len(),
        total_pnl,
        weighted_roc,
        accounts_involved
    );

    Metrics {
        total_pnl,
        weighted_roc,
        accounts_involved,
        best,
        worst,
    }
}
