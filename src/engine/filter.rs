use crate::models::Entry;

/// An empty filter string means no filter.
pub fn normalize_filter(date_filter: Option<&str>) -> Option<&str> {
    date_filter.filter(|d| !d.is_empty())
}

/// Entries whose date equals the filter exactly, in their original order.
pub fn filter_entries<'a>(entries: &'a [Entry], date_filter: Option<&str>) -> Vec<&'a Entry> {
    match normalize_filter(date_filter) {
        Some(date) => entries.iter().filter(|e| e.date == date).collect(),
        None => entries.iter().collect(),
    }
}
