//! Wage summary calculation.

use rust_decimal::Decimal;

use crate::models::{WageSummary, WageSummaryRow, Worker};

/// Summarizes wages across all workers.
///
/// For each worker, days worked is the count of schedule entries with a
/// non-empty site label, and the wage is `days_worked * daily_rate`. The
/// returned total is the sum of all wages.
///
/// # Guarantees
///
/// - Rows preserve the input order of `workers`.
/// - Each worker yields exactly one row, including workers with zero days.
/// - The calculation is pure: calling it twice on the same input yields
///   identical output.
///
/// # Example
///
/// ```
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
/// use worker_tracker::aggregation::summarize_wages;
/// use worker_tracker::models::{DayKey, Schedule, Worker};
///
/// let mut schedule = Schedule::default();
/// schedule.set_site(DayKey::Monday, "SiteA");
/// schedule.set_site(DayKey::Tuesday, "SiteA");
/// let worker = Worker {
///     id: Uuid::new_v4(),
///     name: "Sita".to_string(),
///     daily_rate: Decimal::from(1000),
///     schedule,
/// };
///
/// let summary = summarize_wages(&[worker]);
/// assert_eq!(summary.rows[0].days_worked, 2);
/// assert_eq!(summary.total, Decimal::from(2000));
/// ```
pub fn summarize_wages(workers: &[Worker]) -> WageSummary {
    let mut rows = Vec::with_capacity(workers.len());
    let mut total = Decimal::ZERO;

    for worker in workers {
        let days_worked = worker.days_worked();
        let wage = worker.wage();
        total += wage;
        rows.push(WageSummaryRow {
            name: worker.name.clone(),
            days_worked,
            wage,
        });
    }

    WageSummary { rows, total }
}
