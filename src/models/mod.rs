//! Core data models for the Workforce Tracking Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod schedule;
mod summary;
mod worker;

pub use schedule::{DayKey, Schedule};
pub use summary::{
    SiteBreakdown, SiteBreakdownRow, WageSummary, WageSummaryRow, WorkforceStats,
};
pub use worker::{DEFAULT_DAILY_RATE, Worker};
