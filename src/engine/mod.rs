pub mod cache;
pub mod curve;
pub mod filter;
pub mod metrics;
pub mod roc;

pub use cache::MetricsCache;
pub use curve::{daily_pnl_curve, DailyPnlPoint};
pub use filter::{filter_entries, normalize_filter};
pub use metrics::{aggregate, compute_metrics, Metrics};
pub use roc::{derive_entries, derive_entry, rate_of_change, DerivedEntry};
