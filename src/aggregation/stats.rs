//! Workforce-wide statistics.

use crate::models::{Worker, WorkforceStats};

use super::{count_active_sites, summarize_wages};

/// Computes the headline statistics for the workforce dashboard.
///
/// Combines the worker count, the global distinct active-site count, and
/// the total payroll from [`summarize_wages`].
pub fn workforce_stats(workers: &[Worker]) -> WorkforceStats {
    WorkforceStats {
        total_workers: workers.len(),
        active_sites: count_active_sites(workers),
        total_wages: summarize_wages(workers).total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DayKey, Schedule};
    use rust_decimal::Decimal;
    use std::str::FromStr;
    use uuid::Uuid;

    fn worker(rate: &str, sites: &[(DayKey, &str)]) -> Worker {
        let mut schedule = Schedule::default();
        for (day, site) in sites {
            schedule.set_site(*day, *site);
        }
        Worker {
            id: Uuid::new_v4(),
            name: "w".to_string(),
            daily_rate: Decimal::from_str(rate).unwrap(),
            schedule,
        }
    }

    #[test]
    fn test_empty_workforce() {
        let stats = workforce_stats(&[]);
        assert_eq!(stats.total_workers, 0);
        assert_eq!(stats.active_sites, 0);
        assert_eq!(stats.total_wages, Decimal::ZERO);
    }

    #[test]
    fn test_stats_combine_count_sites_and_payroll() {
        let workers = vec![
            worker(
                "1000",
                &[
                    (DayKey::Monday, "SiteA"),
                    (DayKey::Tuesday, "SiteA"),
                    (DayKey::Thursday, "SiteB"),
                ],
            ),
            worker("1350", &[]),
        ];

        let stats = workforce_stats(&workers);
        assert_eq!(stats.total_workers, 2);
        assert_eq!(stats.active_sites, 2);
        assert_eq!(stats.total_wages, Decimal::from_str("3000").unwrap());
    }
}
