use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::{Account, Entry};

/// An entry resolved against its account, with its ROC in percent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedEntry {
    #[serde(flatten)]
    pub entry: Entry,
    pub account: Option<Account>,
    pub capital: f64,
    pub roc: f64,
}

impl DerivedEntry {
    pub fn pnl(&self) -> f64 {
        self.entry.pnl
    }

    pub fn account_id(&self) -> &str {
        &self.entry.account_id
    }
}

/// PnL as a percentage of capital. Zero capital yields 0 instead of dividing.
pub fn rate_of_change(pnl: f64, capital: f64) -> f64 {
    if capital != 0.0 {
        (pnl / capital) * 100.0
    } else {
        0.0
    }
}

/// A missing account resolves to capital 0 and therefore ROC 0.
pub fn derive_entry(entry: &Entry, account: Option<&Account>) -> DerivedEntry {
    let capital = account.map(|a| a.capital).unwrap_or(0.0);
    DerivedEntry {
        entry: entry.clone(),
        account: account.cloned(),
        capital,
        roc: rate_of_change(entry.pnl, capital),
    }
}

pub fn derive_entries<'a, I>(accounts: &[Account], entries: I) -> Vec<DerivedEntry>
where
    I: IntoIterator<Item = &'a Entry>,
{
    let mut by_id: HashMap<&str, &Account> = HashMap::with_capacity(accounts.len());
    for account in accounts {
        by_id.entry(account.id.as_str()).or_insert(account);
    }

    entries
        .into_iter()
        .map(|entry| derive_entry(entry, by_id.get(entry.account_id.as_str()).copied()))
        .collect()
}
