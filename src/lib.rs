//! Multi-account daily PnL ledger.
//!
//! `ledger` holds accounts and entries, `engine` turns them into per-entry ROC
//! and portfolio metrics, and `commands` is the surface a UI host calls.

pub mod commands;
pub mod engine;
pub mod error;
pub mod ledger;
pub mod models;

pub use engine::{compute_metrics, filter_entries, rate_of_change, DerivedEntry, Metrics};
pub use error::{LedgerError, Result};
pub use ledger::{Ledger, LedgerState};
pub use models::{Account, CreateAccountInput, CreateEntryInput, Entry, Settings};
