//! Derived wage views.
//!
//! This module contains the row types produced by the aggregation functions:
//! per-worker wage summaries, per-site breakdowns, and workforce statistics.
//! None of these have an independent lifecycle; they are recomputed from the
//! current worker records on every read.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One worker's line in the wage summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WageSummaryRow {
    /// The worker's name.
    pub name: String,
    /// Days with a non-empty site assignment, always in `0..=7`.
    pub days_worked: u32,
    /// Total pay owed: `days_worked * daily_rate`.
    pub wage: Decimal,
}

/// The wage summary across all workers.
///
/// Rows preserve the input order of the worker records, one row per worker
/// even when no days were worked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WageSummary {
    /// Per-worker rows in input order.
    pub rows: Vec<WageSummaryRow>,
    /// Sum of all row wages.
    pub total: Decimal,
}

/// One site's line in a worker's site breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteBreakdownRow {
    /// The site label.
    pub site: String,
    /// Days the worker is assigned to this site, always at least 1.
    pub days: u32,
    /// Pay attributable to this site: `days * daily_rate`.
    pub amount: Decimal,
}

/// A single worker's pay broken down by site.
///
/// Rows are ordered by first occurrence of the site label scanning days in
/// canonical order, and the total equals the worker's wage by construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteBreakdown {
    /// Per-site rows in first-occurrence order.
    pub rows: Vec<SiteBreakdownRow>,
    /// Sum of all row amounts.
    pub total: Decimal,
}

/// Workforce-wide statistics for the dashboard header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkforceStats {
    /// Number of worker records.
    pub total_workers: usize,
    /// Distinct non-empty site labels across all schedules.
    pub active_sites: usize,
    /// Total payroll across all workers.
    pub total_wages: Decimal,
}
