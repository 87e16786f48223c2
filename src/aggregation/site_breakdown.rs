//! Per-site breakdown of a single worker's wage.

use rust_decimal::Decimal;

use crate::models::{SiteBreakdown, SiteBreakdownRow, Worker};

/// Breaks one worker's pay down by work site.
///
/// Schedule entries are grouped by exact site label, ignoring empty days.
/// Each row's `days` is the number of day keys mapped to that label and its
/// `amount` is `days * daily_rate`. The total equals the worker's wage from
/// [`summarize_wages`](crate::aggregation::summarize_wages) by construction.
///
/// Rows are ordered by first occurrence of the site label when scanning day
/// keys in canonical order (S, M, T, W, Th, F, St), not alphabetically.
/// Labels are matched case-sensitively.
///
/// # Example
///
/// ```
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
/// use worker_tracker::aggregation::site_breakdown;
/// use worker_tracker::models::{DayKey, Schedule, Worker};
///
/// let mut schedule = Schedule::default();
/// schedule.set_site(DayKey::Monday, "SiteA");
/// schedule.set_site(DayKey::Tuesday, "SiteA");
/// schedule.set_site(DayKey::Thursday, "SiteB");
/// let worker = Worker {
///     id: Uuid::new_v4(),
///     name: "Sita".to_string(),
///     daily_rate: Decimal::from(1000),
///     schedule,
/// };
///
/// let breakdown = site_breakdown(&worker);
/// assert_eq!(breakdown.rows.len(), 2);
/// assert_eq!(breakdown.rows[0].site, "SiteA");
/// assert_eq!(breakdown.rows[0].days, 2);
/// assert_eq!(breakdown.total, Decimal::from(3000));
/// ```
pub fn site_breakdown(worker: &Worker) -> SiteBreakdown {
    let mut rows: Vec<SiteBreakdownRow> = Vec::new();

    for site in worker.schedule.worked_sites() {
        match rows.iter_mut().find(|row| row.site == site) {
            Some(row) => row.days += 1,
            None => rows.push(SiteBreakdownRow {
                site: site.to_string(),
                days: 1,
                amount: Decimal::ZERO,
            }),
        }
    }

    let mut total = Decimal::ZERO;
    for row in &mut rows {
        row.amount = Decimal::from(row.days) * worker.daily_rate;
        total += row.amount;
    }

    SiteBreakdown { rows, total }
}
