//! Name search over worker records.

use crate::models::Worker;

/// Filters workers by a case-insensitive substring match on their name.
///
/// An empty search term matches every worker. The result preserves input
/// order and borrows from the input slice; nothing is cloned or mutated.
///
/// # Example
///
/// ```
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
/// use worker_tracker::aggregation::filter_by_name;
/// use worker_tracker::models::{Schedule, Worker};
///
/// let workers = vec![Worker {
///     id: Uuid::new_v4(),
///     name: "Sita".to_string(),
///     daily_rate: Decimal::from(1000),
///     schedule: Schedule::default(),
/// }];
///
/// assert_eq!(filter_by_name(&workers, "sit").len(), 1);
/// assert_eq!(filter_by_name(&workers, "xyz").len(), 0);
/// ```
pub fn filter_by_name<'a>(workers: &'a [Worker], search_term: &str) -> Vec<&'a Worker> {
    let needle = search_term.to_lowercase();
    workers
        .iter()
        .filter(|worker| worker.name.to_lowercase().contains(&needle))
        .collect()
}
