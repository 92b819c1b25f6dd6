use chrono::Utc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::{LedgerError, Result};
use crate::models::{Account, CreateAccountInput, CreateEntryInput, Entry, Settings, UpdateSettingsInput};

/// In-memory accounts and entries.
///
/// Entries are kept most-recently-added first. Removing an account removes
/// its entries in the same call, so no entry ever points at a missing account.
#[derive(Debug, Clone)]
pub struct Ledger {
    settings: Settings,
    accounts: Vec<Account>,
    entries: Vec<Entry>,
    revision: u64,
}

// Shared by every ledger in the process, so two distinct stores never report
// the same revision.
static NEXT_REVISION: AtomicU64 = AtomicU64::new(1);

fn next_revision() -> u64 {
    NEXT_REVISION.fetch_add(1, Ordering::Relaxed)
}

impl Default for Ledger {
    fn default() -> Self {
        Self::with_settings(Settings::default())
    }
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            settings,
            accounts: Vec::new(),
            entries: Vec::new(),
            revision: next_revision(),
        }
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Changes on every successful mutation of accounts or entries. Values
    /// are drawn from a process-wide counter and never repeat across ledgers.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn account(&self, id: &str) -> Option<&Account> {
        self.accounts.iter().find(|a| a.id == id)
    }

    pub fn add_account(&mut self, input: CreateAccountInput) -> Result<Account> {
        if let Err(e) = input.validate() {
            log::warn!("Rejected account: {}", e);
            return Err(e);
        }

        let account = Account {
            id: format!("ACCT-{}", uuid::Uuid::new_v4()),
            trader_name: input.trader_name.trim().to_string(),
            account_name: input.account_name.trim().to_string(),
            capital: input.capital,
            created_at: Utc::now().timestamp(),
        };

        log::info!(
            "Added account {} ({} / {}, capital {})",
            account.id,
            account.trader_name,
            account.account_name,
            account.capital
        );
        self.accounts.push(account.clone());
        self.revision = next_revision();
        Ok(account)
    }

    /// Removes the account and every entry that references it. Unknown ids
    /// are a no-op. Returns the number of entries removed with the account.
    pub fn remove_account(&mut self, id: &str) -> usize {
        let Some(pos) = self.accounts.iter().position(|a| a.id == id) else {
            log::debug!("remove_account: no account {}", id);
            return 0;
        };

        self.accounts.remove(pos);
        let before = self.entries.len();
        self.entries.retain(|e| e.account_id != id);
        let cascaded = before - self.entries.len();
        self.revision = next_revision();

        log::info!("Removed account {} and {} entries", id, cascaded);
        cascaded
    }

    pub fn add_entry(&mut self, input: CreateEntryInput) -> Result<Entry> {
        if let Err(e) = input.validate(self.settings.strict_dates) {
            log::warn!("Rejected entry: {}", e);
            return Err(e);
        }
        if self.account(&input.account_id).is_none() {
            log::warn!("Rejected entry for unknown account {}", input.account_id);
            return Err(LedgerError::UnknownAccount(input.account_id));
        }

        let entry = Entry {
            id: format!("ENTRY-{}", uuid::Uuid::new_v4()),
            account_id: input.account_id,
            date: input.date,
            pnl: input.pnl,
            created_at: Utc::now().timestamp(),
        };

        log::info!(
            "Added entry {} for account {} on {} (pnl {})",
            entry.id,
            entry.account_id,
            entry.date,
            entry.pnl
        );
        self.entries.insert(0, entry.clone());
        self.revision = next_revision();
        Ok(entry)
    }

    pub fn update_settings(&mut self, update: UpdateSettingsInput) -> Result<&Settings> {
        self.settings.apply(update)?;
        log::info!("Settings updated: {:?}", self.settings);
        Ok(&self.settings)
    }
}
