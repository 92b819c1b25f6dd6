use crate::ledger::LedgerState;
use crate::models::{Account, CreateAccountInput};

pub fn get_accounts(state: &LedgerState) -> Result<Vec<Account>, String> {
    let ledger = state.ledger.lock().map_err(|e| e.to_string())?;
    Ok(ledger.accounts().to_vec())
}

pub fn create_account(state: &LedgerState, account: CreateAccountInput) -> Result<Account, String> {
    let mut ledger = state.ledger.lock().map_err(|e| e.to_string())?;
    ledger.add_account(account).map_err(|e| e.to_string())
}

/// Deletes the account and its entries. Returns how many entries went with it.
pub fn delete_account(state: &LedgerState, id: String) -> Result<usize, String> {
    let mut ledger = state.ledger.lock().map_err(|e| e.to_string())?;
    Ok(ledger.remove_account(&id))
}
