use crate::ledger::LedgerState;
use crate::models::{Settings, UpdateSettingsInput};

pub fn get_settings(state: &LedgerState) -> Result<Settings, String> {
    let ledger = state.ledger.lock().map_err(|e| e.to_string())?;
    Ok(ledger.settings().clone())
}

pub fn update_settings(state: &LedgerState, settings: UpdateSettingsInput) -> Result<Settings, String> {
    let mut ledger = state.ledger.lock().map_err(|e| e.to_string())?;
    let updated = ledger.update_settings(settings).map_err(|e| e.to_string())?;
    Ok(updated.clone())
}
