use serde::{Deserialize, Serialize};

use crate::engine::{compute_metrics, daily_pnl_curve, filter_entries, DailyPnlPoint, Metrics};
use crate::ledger::LedgerState;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    /// Every account in the store, regardless of the date filter.
    pub total_accounts: usize,
    /// Currency the amounts in `metrics` are displayed in.
    pub currency: String,
    pub metrics: Metrics,
}

pub fn get_dashboard_stats(
    state: &LedgerState,
    filter_date: Option<String>,
) -> Result<DashboardStats, String> {
    let ledger = state.ledger.lock().map_err(|e| e.to_string())?;
    let mut cache = state.metrics_cache.lock().map_err(|e| e.to_string())?;

    let metrics = cache.get_or_compute(ledger.revision(), filter_date.as_deref(), || {
        compute_metrics(ledger.accounts(), ledger.entries(), filter_date.as_deref())
    });

    Ok(DashboardStats {
        total_accounts: ledger.accounts().len(),
        currency: ledger.settings().currency.clone(),
        metrics,
    })
}

pub fn get_pnl_curve(
    state: &LedgerState,
    filter_date: Option<String>,
) -> Result<Vec<DailyPnlPoint>, String> {
    let ledger = state.ledger.lock().map_err(|e| e.to_string())?;
    let entries: Vec<_> = filter_entries(ledger.entries(), filter_date.as_deref())
        .into_iter()
        .cloned()
        .collect();
    Ok(daily_pnl_curve(&entries))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{create_account, create_entry, delete_account, get_accounts, get_entries};
    use crate::ledger::Ledger;
    use crate::models::{CreateAccountInput, CreateEntryInput, UpdateSettingsInput};

    const EPS: f64 = 1e-9;

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn test_dashboard_scenario() {
        init_logger();
        let state = LedgerState::default();
        let main = create_account(&state, CreateAccountInput::new("Ann", "Main", 10_000.0)).unwrap();
        create_entry(&state, CreateEntryInput::new("2024-01-01", &main.id, 500.0)).unwrap();
        create_entry(&state, CreateEntryInput::new("2024-01-01", &main.id, -200.0)).unwrap();

        let stats = get_dashboard_stats(&state, None).unwrap();
        assert_eq!(stats.total_accounts, 1);
        assert_eq!(stats.currency, "USD");
        assert!((stats.metrics.total_pnl - 300.0).abs() < EPS);
        assert!((stats.metrics.weighted_roc - 1.5).abs() < EPS);
        assert_eq!(stats.metrics.accounts_involved, 1);
        assert_eq!(stats.metrics.best.unwrap().pnl(), 500.0);
        assert_eq!(stats.metrics.worst.unwrap().pnl(), -200.0);
    }

    #[test]
    fn test_dashboard_reflects_mutations_after_cached_read() {
        let state = LedgerState::default();
        let a = create_account(&state, CreateAccountInput::new("Ann", "A", 1_000.0)).unwrap();
        create_entry(&state, CreateEntryInput::new("2024-01-01", &a.id, 100.0)).unwrap();

        let before = get_dashboard_stats(&state, None).unwrap();
        assert_eq!(before, get_dashboard_stats(&state, None).unwrap());

        create_entry(&state, CreateEntryInput::new("2024-01-01", &a.id, 50.0)).unwrap();
        let after = get_dashboard_stats(&state, None).unwrap();
        assert!((after.metrics.total_pnl - 150.0).abs() < EPS);

        delete_account(&state, a.id.clone()).unwrap();
        let emptied = get_dashboard_stats(&state, None).unwrap();
        assert_eq!(emptied.total_accounts, 0);
        assert_eq!(emptied.metrics, Metrics::default());
    }

    #[test]
    fn test_dashboard_recomputes_after_ledger_replaced() {
        let state = LedgerState::default();
        let a = create_account(&state, CreateAccountInput::new("Ann", "A", 1_000.0)).unwrap();
        create_entry(&state, CreateEntryInput::new("2024-01-01", &a.id, 100.0)).unwrap();
        let before = get_dashboard_stats(&state, None).unwrap();
        assert!((before.metrics.total_pnl - 100.0).abs() < EPS);

        // Same number of mutations as the ledger it replaces.
        let mut other = Ledger::new();
        let b = other.add_account(CreateAccountInput::new("Bob", "B", 3_000.0)).unwrap();
        other.add_entry(CreateEntryInput::new("2024-01-01", &b.id, 900.0)).unwrap();
        let expected = compute_metrics(other.accounts(), other.entries(), None);
        *state.ledger.lock().unwrap() = other;

        let after = get_dashboard_stats(&state, None).unwrap();
        assert_eq!(after.metrics, expected);
        assert!((after.metrics.total_pnl - 900.0).abs() < EPS);
    }

    #[test]
    fn test_dashboard_reports_configured_currency() {
        let state = LedgerState::default();
        crate::commands::update_settings(
            &state,
            UpdateSettingsInput {
                currency: Some("eur".to_string()),
                strict_dates: None,
            },
        )
        .unwrap();
        assert_eq!(get_dashboard_stats(&state, None).unwrap().currency, "EUR");
    }

    #[test]
    fn test_filter_without_matches_keeps_account_total() {
        let state = LedgerState::default();
        let a = create_account(&state, CreateAccountInput::new("Ann", "A", 1_000.0)).unwrap();
        create_entry(&state, CreateEntryInput::new("2024-01-01", &a.id, 100.0)).unwrap();

        let stats = get_dashboard_stats(&state, Some("2024-02-01".to_string())).unwrap();
        assert_eq!(stats.total_accounts, 1);
        assert_eq!(stats.metrics, Metrics::default());
    }

    #[test]
    fn test_entry_rows_and_cascade_through_commands() {
        let state = LedgerState::default();
        let a = create_account(&state, CreateAccountInput::new("Ann", "A", 2_000.0)).unwrap();
        let b = create_account(&state, CreateAccountInput::new("Bob", "B", 4_000.0)).unwrap();
        create_entry(&state, CreateEntryInput::new("2024-01-01", &a.id, 100.0)).unwrap();
        create_entry(&state, CreateEntryInput::new("2024-01-02", &b.id, 100.0)).unwrap();

        let rows = get_entries(&state, None).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].account_id(), b.id);
        assert!((rows[0].roc - 2.5).abs() < EPS);
        assert_eq!(rows[0].account.as_ref().unwrap().trader_name, "Bob");

        let rows = get_entries(&state, Some("2024-01-01".to_string())).unwrap();
        assert_eq!(rows.len(), 1);
        assert!((rows[0].roc - 5.0).abs() < EPS);

        assert_eq!(delete_account(&state, b.id.clone()).unwrap(), 1);
        assert_eq!(get_accounts(&state).unwrap(), vec![a]);
        assert!(get_entries(&state, None).unwrap().iter().all(|r| r.account_id() != b.id));
    }

    #[test]
    fn test_command_errors_are_stringified() {
        let state = LedgerState::default();
        let err = create_entry(&state, CreateEntryInput::new("2024-01-01", "ACCT-x", 1.0)).unwrap_err();
        assert!(err.contains("ACCT-x"));

        let err = create_account(&state, CreateAccountInput::new("", "A", 1.0)).unwrap_err();
        assert!(err.contains("Trader name"));
    }

    #[test]
    fn test_pnl_curve() {
        let state = LedgerState::default();
        let a = create_account(&state, CreateAccountInput::new("Ann", "A", 1_000.0)).unwrap();
        create_entry(&state, CreateEntryInput::new("2024-01-02", &a.id, -30.0)).unwrap();
        create_entry(&state, CreateEntryInput::new("2024-01-01", &a.id, 100.0)).unwrap();

        let curve = get_pnl_curve(&state, None).unwrap();
        assert_eq!(curve.len(), 2);
        assert_eq!(curve[0].date, "2024-01-01");
        assert_eq!(curve[1].cumulative_pnl, 70.0);

        let curve = get_pnl_curve(&state, Some("2024-01-02".to_string())).unwrap();
        assert_eq!(curve.len(), 1);
        assert_eq!(curve[0].cumulative_pnl, -30.0);
    }
}
