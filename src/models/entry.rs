use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{LedgerError, Result};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One PnL figure for one account on one calendar date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub id: String,
    pub account_id: String,
    pub date: String, // YYYY-MM-DD
    pub pnl: f64,
    pub created_at: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEntryInput {
    pub date: String,
    pub account_id: String,
    pub pnl: f64,
}

impl CreateEntryInput {
    pub fn new(date: impl Into<String>, account_id: impl Into<String>, pnl: f64) -> Self {
        Self {
            date: date.into(),
            account_id: account_id.into(),
            pnl,
        }
    }

    /// Field-level checks. Whether `account_id` resolves is the store's call.
    pub fn validate(&self, strict_dates: bool) -> Result<()> {
        if self.date.trim().is_empty() {
            return Err(LedgerError::Validation("Date is required".to_string()));
        }
        if strict_dates && !is_canonical_date(&self.date) {
            return Err(LedgerError::Validation(format!(
                "Date '{}' is not a valid YYYY-MM-DD date",
                self.date
            )));
        }
        if self.account_id.is_empty() {
            return Err(LedgerError::Validation("Account is required".to_string()));
        }
        if !self.pnl.is_finite() {
            return Err(LedgerError::Validation(format!(
                "PnL must be a finite number, got {}",
                self.pnl
            )));
        }
        Ok(())
    }
}

/// Filters compare dates as strings, so only the zero-padded form is accepted.
fn is_canonical_date(date: &str) -> bool {
    NaiveDate::parse_from_str(date, DATE_FORMAT)
        .map(|parsed| parsed.format(DATE_FORMAT).to_string() == date)
        .unwrap_or(false)
}

/// Today's UTC date, the default for a new entry.
pub fn today() -> String {
    Utc::now().date_naive().format(DATE_FORMAT).to_string()
}
