use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{LedgerError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Display currency for the presentation layer. All amounts share it.
    pub currency: String,
    /// Require entry dates to parse as real `YYYY-MM-DD` calendar dates.
    pub strict_dates: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency: "USD".to_string(),
            strict_dates: true,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSettingsInput {
    pub currency: Option<String>,
    pub strict_dates: Option<bool>,
}

impl Settings {
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let settings: Settings = serde_json::from_str(raw)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::info!("Loading ledger settings from {:?}", path);
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    pub fn validate(&self) -> Result<()> {
        if self.currency.trim().is_empty() {
            return Err(LedgerError::Settings(
                "Currency cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Applies a partial update. Nothing changes if the result would be invalid.
    pub fn apply(&mut self, update: UpdateSettingsInput) -> Result<()> {
        let mut next = self.clone();
        if let Some(currency) = update.currency {
            next.currency = currency.trim().to_uppercase();
        }
        if let Some(strict_dates) = update.strict_dates {
            next.strict_dates = strict_dates;
        }
        next.validate()?;
        *self = next;
        Ok(())
    }
}
