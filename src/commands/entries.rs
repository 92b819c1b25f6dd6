use crate::engine::{derive_entries, filter_entries, DerivedEntry};
use crate::ledger::LedgerState;
use crate::models::{CreateEntryInput, Entry};

/// Entries with their account and ROC, most recently added first.
pub fn get_entries(
    state: &LedgerState,
    filter_date: Option<String>,
) -> Result<Vec<DerivedEntry>, String> {
    let ledger = state.ledger.lock().map_err(|e| e.to_string())?;
    let filtered = filter_entries(ledger.entries(), filter_date.as_deref());
    Ok(derive_entries(ledger.accounts(), filtered))
}

pub fn create_entry(state: &LedgerState, entry: CreateEntryInput) -> Result<Entry, String> {
    let mut ledger = state.ledger.lock().map_err(|e| e.to_string())?;
    ledger.add_entry(entry).map_err(|e| e.to_string())
}
