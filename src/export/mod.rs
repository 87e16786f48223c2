//! Export routines for the Workforce Tracking Engine.
//!
//! This module produces the downloadable documents derived from the worker
//! records: a wage-summary CSV and a two-sheet workbook (raw records plus
//! the wage summary), along with date-stamped file names and the currency
//! formatting used on presentation surfaces.

mod currency;
mod workbook;

pub use currency::{format_currency, format_inr};
pub use workbook::{Workbook, export_filename, wage_summary_csv, workers_workbook};
