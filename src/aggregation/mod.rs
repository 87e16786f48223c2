//! Wage aggregation for the Workforce Tracking Engine.
//!
//! This module contains the pure transformations from worker records to
//! derived views: per-worker wage summaries, per-site breakdowns, the
//! distinct active-site count, name filtering, and workforce statistics.
//! Nothing here mutates its input or performs I/O.

mod active_sites;
mod name_filter;
mod site_breakdown;
mod stats;
mod wage_summary;

pub use active_sites::count_active_sites;
pub use name_filter::filter_by_name;
pub use site_breakdown::site_breakdown;
pub use stats::workforce_stats;
pub use wage_summary::summarize_wages;
