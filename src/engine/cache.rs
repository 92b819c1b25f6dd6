use super::filter::normalize_filter;
use super::metrics::Metrics;

#[derive(Debug, Clone)]
struct CachedMetrics {
    revision: u64,
    date_filter: Option<String>,
    metrics: Metrics,
}

/// Holds the last computed `Metrics`, keyed by store revision and date filter.
///
/// Store revisions come from a process-wide counter and change on every
/// mutation, so neither an edited store nor a swapped-in one can hit a stale
/// slot.
#[derive(Debug, Default)]
pub struct MetricsCache {
    slot: Option<CachedMetrics>,
}

impl MetricsCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_compute<F>(&mut self, revision: u64, date_filter: Option<&str>, compute: F) -> Metrics
    where
        F: FnOnce() -> Metrics,
    {
        let date_filter = normalize_filter(date_filter);

        if let Some(cached) = &self.slot {
            if cached.revision == revision && cached.date_filter.as_deref() == date_filter {
                log::debug!("Metrics cache hit (revision {}, filter {:?})", revision, date_filter);
                return cached.metrics.clone();
            }
        }

        log::debug!("Metrics cache miss (revision {}, filter {:?})", revision, date_filter);
        let metrics = compute();
        self.slot = Some(CachedMetrics {
            revision,
            date_filter: date_filter.map(str::to_string),
            metrics: metrics.clone(),
        });
        metrics
    }
}
