//! Worker model.
//!
//! This module defines the Worker struct representing one tracked worker
//! with a daily pay rate and a weekly site schedule.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Schedule;

/// The daily rate applied when a worker is created without a usable rate.
pub const DEFAULT_DAILY_RATE: Decimal = Decimal::from_parts(1350, 0, 0, false, 0);

/// Represents a tracked worker.
///
/// A worker owns a weekly [`Schedule`] assigning a work site to each day,
/// and a fixed daily pay rate. Wage figures are always derived from these
/// two fields, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Worker {
    /// Unique identifier for the worker.
    pub id: Uuid,
    /// The worker's display name.
    pub name: String,
    /// Payment for one worked day.
    pub daily_rate: Decimal,
    /// The weekly site schedule. An absent schedule deserializes to the
    /// all-empty schedule rather than failing.
    #[serde(default)]
    pub schedule: Schedule,
}

impl Worker {
    /// Counts the days this worker is assigned to a site.
    ///
    /// # Examples
    ///
    /// ```
    /// use worker_tracker::models::{DayKey, Schedule, Worker, DEFAULT_DAILY_RATE};
    /// use uuid::Uuid;
    ///
    /// let mut worker = Worker {
    ///     id: Uuid::new_v4(),
    ///     name: "Sita".to_string(),
    ///     daily_rate: DEFAULT_DAILY_RATE,
    ///     schedule: Schedule::default(),
    /// };
    /// assert_eq!(worker.days_worked(), 0);
    ///
    /// worker.schedule.set_site(DayKey::Monday, "SiteA");
    /// assert_eq!(worker.days_worked(), 1);
    /// ```
    pub fn days_worked(&self) -> u32 {
        self.schedule.days_worked()
    }

    /// The total pay owed for the week: days worked times the daily rate.
    pub fn wage(&self) -> Decimal {
        Decimal::from(self.days_worked()) * self.daily_rate
    }
}
