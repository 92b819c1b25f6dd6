use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::Entry;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyPnlPoint {
    pub date: String,
    pub daily_pnl: f64,
    pub cumulative_pnl: f64,
    pub entry_count: usize,
}

/// Per-date PnL with a running total, oldest date first.
pub fn daily_pnl_curve(entries: &[Entry]) -> Vec<DailyPnlPoint> {
    let mut daily_map: HashMap<&str, (f64, usize)> = HashMap::new();

    for entry in entries {
        let day = daily_map.entry(entry.date.as_str()).or_insert((0.0, 0));
        day.0 += entry.pnl;
        day.1 += 1;
    }

    // YYYY-MM-DD sorts chronologically as a string
    let mut sorted_dates: Vec<_> = daily_map.into_iter().collect();
    sorted_dates.sort_by(|a, b| a.0.cmp(b.0));

    let mut cumulative_pnl = 0.0;
    sorted_dates
        .into_iter()
        .map(|(date, (daily_pnl, entry_count))| {
            cumulative_pnl += daily_pnl;
            DailyPnlPoint {
                date: date.to_string(),
                daily_pnl,
                cumulative_pnl,
                entry_count,
            }
        })
        .collect()
}
