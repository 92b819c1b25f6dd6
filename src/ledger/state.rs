use std::sync::Mutex;

use super::store::Ledger;
use crate::engine::MetricsCache;
use crate::error::Result;
use crate::models::Settings;

/// Shared handle for a host that serves the ledger to a UI.
///
/// Every mutation and every metrics read goes through `ledger`, so metrics
/// are always computed against a consistent snapshot.
pub struct LedgerState {
    pub ledger: Mutex<Ledger>,
    pub metrics_cache: Mutex<MetricsCache>,
}

impl LedgerState {
    pub fn new(settings: Settings) -> Self {
        log::info!(
            "Initializing ledger (currency {}, strict dates {})",
            settings.currency,
            settings.strict_dates
        );

        LedgerState {
            ledger: Mutex::new(Ledger::with_settings(settings)),
            metrics_cache: Mutex::new(MetricsCache::new()),
        }
    }

    /// Copy of the store taken under the lock, for rendering outside it.
    pub fn snapshot(&self) -> Result<Ledger> {
        let ledger = self.ledger.lock()?;
        Ok(ledger.clone())
    }
}

impl Default for LedgerState {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}
