//! Weekly schedule model and day keys.
//!
//! This module defines the seven-day site schedule attached to every worker
//! and the [`DayKey`] enum naming each day in canonical order.

use serde::{Deserialize, Serialize};

/// The seven day keys of a weekly schedule, Sunday through Saturday.
///
/// The canonical order is `S, M, T, W, Th, F, St`. Site-breakdown rows are
/// ordered by first occurrence of a site label when scanning days in this
/// order, so the order here is load-bearing.
///
/// # Example
///
/// ```
/// use worker_tracker::models::DayKey;
///
/// assert_eq!(DayKey::Sunday.label(), "S");
/// assert_eq!(DayKey::Saturday.label(), "St");
/// assert_eq!(DayKey::ALL.len(), 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayKey {
    /// Sunday, serialized as `S`.
    #[serde(rename = "S")]
    Sunday,
    /// Monday, serialized as `M`.
    #[serde(rename = "M")]
    Monday,
    /// Tuesday, serialized as `T`.
    #[serde(rename = "T")]
    Tuesday,
    /// Wednesday, serialized as `W`.
    #[serde(rename = "W")]
    Wednesday,
    /// Thursday, serialized as `Th`.
    #[serde(rename = "Th")]
    Thursday,
    /// Friday, serialized as `F`.
    #[serde(rename = "F")]
    Friday,
    /// Saturday, serialized as `St`.
    #[serde(rename = "St")]
    Saturday,
}

impl DayKey {
    /// All seven day keys in canonical order.
    pub const ALL: [DayKey; 7] = [
        DayKey::Sunday,
        DayKey::Monday,
        DayKey::Tuesday,
        DayKey::Wednesday,
        DayKey::Thursday,
        DayKey::Friday,
        DayKey::Saturday,
    ];

    /// Returns the short label used on the wire (`S`, `M`, ..., `St`).
    pub fn label(self) -> &'static str {
        match self {
            DayKey::Sunday => "S",
            DayKey::Monday => "M",
            DayKey::Tuesday => "T",
            DayKey::Wednesday => "W",
            DayKey::Thursday => "Th",
            DayKey::Friday => "F",
            DayKey::Saturday => "St",
        }
    }

    /// Returns the full English day name, used in export column headers.
    pub fn day_name(self) -> &'static str {
        match self {
            DayKey::Sunday => "Sunday",
            DayKey::Monday => "Monday",
            DayKey::Tuesday => "Tuesday",
            DayKey::Wednesday => "Wednesday",
            DayKey::Thursday => "Thursday",
            DayKey::Friday => "Friday",
            DayKey::Saturday => "Saturday",
        }
    }
}

impl std::fmt::Display for DayKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A worker's weekly site assignments.
///
/// One entry per day key; an empty string means the worker is not assigned
/// anywhere that day. The wire representation uses exactly the seven short
/// day keys, and any key absent from incoming JSON deserializes to empty,
/// so a partially-populated (or entirely missing) schedule never fails.
///
/// # Example
///
/// ```
/// use worker_tracker::models::{DayKey, Schedule};
///
/// let mut schedule = Schedule::default();
/// schedule.set_site(DayKey::Monday, "SiteA");
/// assert_eq!(schedule.site(DayKey::Monday), "SiteA");
/// assert_eq!(schedule.days_worked(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Site assignment for Sunday.
    #[serde(rename = "S", default)]
    pub sunday: String,
    /// Site assignment for Monday.
    #[serde(rename = "M", default)]
    pub monday: String,
    /// Site assignment for Tuesday.
    #[serde(rename = "T", default)]
    pub tuesday: String,
    /// Site assignment for Wednesday.
    #[serde(rename = "W", default)]
    pub wednesday: String,
    /// Site assignment for Thursday.
    #[serde(rename = "Th", default)]
    pub thursday: String,
    /// Site assignment for Friday.
    #[serde(rename = "F", default)]
    pub friday: String,
    /// Site assignment for Saturday.
    #[serde(rename = "St", default)]
    pub saturday: String,
}

impl Schedule {
    /// Returns the site label for the given day (empty if not worked).
    pub fn site(&self, day: DayKey) -> &str {
        match day {
            DayKey::Sunday => &self.sunday,
            DayKey::Monday => &self.monday,
            DayKey::Tuesday => &self.tuesday,
            DayKey::Wednesday => &self.wednesday,
            DayKey::Thursday => &self.thursday,
            DayKey::Friday => &self.friday,
            DayKey::Saturday => &self.saturday,
        }
    }

    /// Sets the site label for the given day. An empty label clears the day.
    pub fn set_site(&mut self, day: DayKey, site: impl Into<String>) {
        let slot = match day {
            DayKey::Sunday => &mut self.sunday,
            DayKey::Monday => &mut self.monday,
            DayKey::Tuesday => &mut self.tuesday,
            DayKey::Wednesday => &mut self.wednesday,
            DayKey::Thursday => &mut self.thursday,
            DayKey::Friday => &mut self.friday,
            DayKey::Saturday => &mut self.saturday,
        };
        *slot = site.into();
    }

    /// Iterates over all seven entries in canonical day order.
    pub fn entries(&self) -> impl Iterator<Item = (DayKey, &str)> {
        DayKey::ALL.into_iter().map(move |day| (day, self.site(day)))
    }

    /// Iterates over the non-empty site labels in canonical day order.
    pub fn worked_sites(&self) -> impl Iterator<Item = &str> {
        self.entries()
            .filter(|(_, site)| !site.is_empty())
            .map(|(_, site)| site)
    }

    /// Counts the days with a non-empty site assignment.
    ///
    /// Always in `0..=7`.
    pub fn days_worked(&self) -> u32 {
        self.worked_sites().count() as u32
    }

    /// Returns true if no day has a site assignment.
    pub fn is_empty(&self) -> bool {
        self.days_worked() == 0
    }

    /// Clears every day's site assignment.
    pub fn clear(&mut self) {
        *self = Schedule::default();
    }
}
