//! Active site counting.

use std::collections::HashSet;

use crate::models::Worker;

/// Counts distinct non-empty site labels across all workers' schedules.
///
/// The count is global, not a per-worker sum: two workers assigned to
/// `SiteA` on different days still contribute one active site. Labels are
/// compared case-sensitively, so `Site A` and `site a` are distinct.
///
/// # Example
///
/// ```
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
/// use worker_tracker::aggregation::count_active_sites;
/// use worker_tracker::models::{DayKey, Schedule, Worker};
///
/// let mut first = Schedule::default();
/// first.set_site(DayKey::Monday, "SiteA");
/// let mut second = Schedule::default();
/// second.set_site(DayKey::Friday, "SiteA");
///
/// let workers: Vec<Worker> = [first, second]
///     .into_iter()
///     .map(|schedule| Worker {
///         id: Uuid::new_v4(),
///         name: "w".to_string(),
///         daily_rate: Decimal::from(1000),
///         schedule,
///     })
///     .collect();
///
/// assert_eq!(count_active_sites(&workers), 1);
/// ```
pub fn count_active_sites(workers: &[Worker]) -> usize {
    let mut sites: HashSet<&str> = HashSet::new();
    for worker in workers {
        sites.extend(worker.schedule.worked_sites());
    }
    sites.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DayKey, Schedule};
    use rust_decimal::Decimal;
    use uuid::Uuid;

    fn worker(sites: &[(DayKey, &str)]) -> Worker {
        let mut schedule = Schedule::default();
        for (day, site) in sites {
            schedule.set_site(*day, *site);
        }
        Worker {
            id: Uuid::new_v4(),
            name: "w".to_string(),
            daily_rate: Decimal::from(1000),
            schedule,
        }
    }

    #[test]
    fn test_no_workers_means_no_active_sites() {
        assert_eq!(count_active_sites(&[]), 0);
    }

    #[test]
    fn test_empty_schedules_mean_no_active_sites() {
        let workers = vec![worker(&[]), worker(&[])];
        assert_eq!(count_active_sites(&workers), 0);
    }

    #[test]
    fn test_shared_site_counted_once() {
        let workers = vec![
            worker(&[(DayKey::Monday, "SiteA")]),
            worker(&[(DayKey::Friday, "SiteA")]),
        ];
        assert_eq!(count_active_sites(&workers), 1);
    }

    #[test]
    fn test_distinct_sites_counted_separately() {
        let workers = vec![
            worker(&[(DayKey::Monday, "SiteA"), (DayKey::Tuesday, "SiteB")]),
            worker(&[(DayKey::Wednesday, "SiteC")]),
        ];
        assert_eq!(count_active_sites(&workers), 3);
    }

    #[test]
    fn test_labels_compared_case_sensitively() {
        let workers = vec![
            worker(&[(DayKey::Monday, "Site A")]),
            worker(&[(DayKey::Tuesday, "site a")]),
        ];
        assert_eq!(count_active_sites(&workers), 2);
    }

    #[test]
    fn test_repeat_within_one_worker_counted_once() {
        let workers = vec![worker(&[
            (DayKey::Monday, "Depot"),
            (DayKey::Tuesday, "Depot"),
            (DayKey::Wednesday, "Depot"),
        ])];
        assert_eq!(count_active_sites(&workers), 1);
    }
}
