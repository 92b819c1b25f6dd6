use serde::{Deserialize, Serialize};

use crate::error::{LedgerError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    pub trader_name: String,
    pub account_name: String,
    /// Fixed nominal capital, the denominator for every ROC on this account.
    pub capital: f64,
    pub created_at: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccountInput {
    pub trader_name: String,
    pub account_name: String,
    pub capital: f64,
}

impl CreateAccountInput {
    pub fn new(trader_name: impl Into<String>, account_name: impl Into<String>, capital: f64) -> Self {
        Self {
            trader_name: trader_name.into(),
            account_name: account_name.into(),
            capital,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.trader_name.trim().is_empty() {
            return Err(LedgerError::Validation(
                "Trader name cannot be empty".to_string(),
            ));
        }
        if self.account_name.trim().is_empty() {
            return Err(LedgerError::Validation(
                "Account name cannot be empty".to_string(),
            ));
        }
        if !self.capital.is_finite() || self.capital <= 0.0 {
            return Err(LedgerError::Validation(format!(
                "Capital must be a positive number, got {}",
                self.capital
            )));
        }
        Ok(())
    }
}
