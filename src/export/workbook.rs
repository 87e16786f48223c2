//! CSV document generation.

use chrono::NaiveDate;
use csv::{QuoteStyle, WriterBuilder};
use serde::{Deserialize, Serialize};

use crate::error::{TrackerError, TrackerResult};
use crate::models::{DayKey, WageSummary, Worker};

/// A two-sheet export of the current records.
///
/// Each sheet is a standalone CSV document: the raw worker records and the
/// derived wage summary, matching the two tabs of the dashboard's
/// spreadsheet download.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workbook {
    /// The raw worker records, one column per full day name.
    pub workers_sheet: String,
    /// The wage summary sheet.
    pub wage_summary_sheet: String,
}

impl Workbook {
    /// Display name of the raw-records sheet.
    pub const WORKERS_SHEET_NAME: &'static str = "Workers";
    /// Display name of the wage-summary sheet.
    pub const WAGE_SUMMARY_SHEET_NAME: &'static str = "Wage Summary";
}

fn finish(writer: csv::Writer<Vec<u8>>) -> TrackerResult<String> {
    let bytes = writer.into_inner().map_err(|e| TrackerError::ExportError {
        message: e.to_string(),
    })?;
    String::from_utf8(bytes).map_err(|e| TrackerError::ExportError {
        message: e.to_string(),
    })
}

fn quoted_writer() -> csv::Writer<Vec<u8>> {
    WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_writer(Vec::new())
}

/// Renders the wage summary as a CSV document.
///
/// The header row is `Name, Days, Total Wage` followed by one data row per
/// summary row. Every value is quoted, with embedded quotes doubled.
///
/// # Example
///
/// ```
/// use rust_decimal::Decimal;
/// use worker_tracker::export::wage_summary_csv;
/// use worker_tracker::models::{WageSummary, WageSummaryRow};
///
/// let summary = WageSummary {
///     rows: vec![WageSummaryRow {
///         name: "Sita".to_string(),
///         days_worked: 3,
///         wage: Decimal::from(3000),
///     }],
///     total: Decimal::from(3000),
/// };
///
/// let csv = wage_summary_csv(&summary).unwrap();
/// assert!(csv.starts_with("\"Name\",\"Days\",\"Total Wage\""));
/// assert!(csv.contains("\"Sita\",\"3\",\"3000\""));
/// ```
pub fn wage_summary_csv(summary: &WageSummary) -> TrackerResult<String> {
    let mut writer = quoted_writer();

    let map_err = |e: csv::Error| TrackerError::ExportError {
        message: e.to_string(),
    };

    writer
        .write_record(["Name", "Days", "Total Wage"])
        .map_err(map_err)?;
    for row in &summary.rows {
        writer
            .write_record([
                row.name.as_str(),
                &row.days_worked.to_string(),
                &row.wage.normalize().to_string(),
            ])
            .map_err(map_err)?;
    }

    finish(writer)
}

/// Renders the two-sheet workbook for the current records.
///
/// The workers sheet lists each record with its id, name, daily rate, and
/// one column per full day name (Sunday through Saturday); the wage summary
/// sheet is [`wage_summary_csv`] for the given summary.
pub fn workers_workbook(workers: &[Worker], summary: &WageSummary) -> TrackerResult<Workbook> {
    let mut writer = quoted_writer();

    let map_err = |e: csv::Error| TrackerError::ExportError {
        message: e.to_string(),
    };

    let mut header = vec!["Id".to_string(), "Name".to_string(), "Daily Rate".to_string()];
    header.extend(DayKey::ALL.iter().map(|day| day.day_name().to_string()));
    writer.write_record(&header).map_err(map_err)?;

    for worker in workers {
        let mut record = vec![
            worker.id.to_string(),
            worker.name.clone(),
            worker.daily_rate.normalize().to_string(),
        ];
        record.extend(
            DayKey::ALL
                .iter()
                .map(|&day| worker.schedule.site(day).to_string()),
        );
        writer.write_record(&record).map_err(map_err)?;
    }

    Ok(Workbook {
        workers_sheet: finish(writer)?,
        wage_summary_sheet: wage_summary_csv(summary)?,
    })
}

/// Builds a date-stamped export file name, e.g. `wage_summary_2026-08-06.csv`.
pub fn export_filename(prefix: &str, date: NaiveDate, extension: &str) -> String {
    format!("{}_{}.{}", prefix, date.format("%Y-%m-%d"), extension)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregation::summarize_wages;
    use crate::models::{Schedule, WageSummaryRow};
    use rust_decimal::Decimal;
    use std::str::FromStr;
    use uuid::Uuid;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn summary_row(name: &str, days: u32, wage: &str) -> WageSummaryRow {
        WageSummaryRow {
            name: name.to_string(),
            days_worked: days,
            wage: dec(wage),
        }
    }

    #[test]
    fn test_csv_header_row() {
        let summary = WageSummary {
            rows: vec![],
            total: Decimal::ZERO,
        };
        let csv = wage_summary_csv(&summary).unwrap();
        assert_eq!(csv, "\"Name\",\"Days\",\"Total Wage\"\n");
    }

    #[test]
    fn test_csv_one_row_per_summary_row() {
        let summary = WageSummary {
            rows: vec![
                summary_row("Sita", 3, "3000"),
                summary_row("Ravi", 0, "0"),
            ],
            total: dec("3000"),
        };

        let csv = wage_summary_csv(&summary).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "\"Sita\",\"3\",\"3000\"");
        assert_eq!(lines[2], "\"Ravi\",\"0\",\"0\"");
    }

    #[test]
    fn test_csv_doubles_embedded_quotes() {
        let summary = WageSummary {
            rows: vec![summary_row("Ravi \"Raju\" K", 1, "1350")],
            total: dec("1350"),
        };

        let csv = wage_summary_csv(&summary).unwrap();
        assert!(csv.contains("\"Ravi \"\"Raju\"\" K\""));
    }

    #[test]
    fn test_csv_quotes_values_with_commas() {
        let summary = WageSummary {
            rows: vec![summary_row("K, Sita", 1, "1350")],
            total: dec("1350"),
        };

        let csv = wage_summary_csv(&summary).unwrap();
        assert!(csv.contains("\"K, Sita\""));
    }

    #[test]
    fn test_workbook_has_both_sheets() {
        let worker = Worker {
            id: Uuid::nil(),
            name: "Sita".to_string(),
            daily_rate: dec("1000"),
            schedule: {
                let mut schedule = Schedule::default();
                schedule.set_site(crate::models::DayKey::Monday, "SiteA");
                schedule
            },
        };
        let workers = vec![worker];
        let summary = summarize_wages(&workers);

        let workbook = workers_workbook(&workers, &summary).unwrap();

        let header: &str = workbook.workers_sheet.lines().next().unwrap();
        assert_eq!(
            header,
            "\"Id\",\"Name\",\"Daily Rate\",\"Sunday\",\"Monday\",\"Tuesday\",\
             \"Wednesday\",\"Thursday\",\"Friday\",\"Saturday\""
        );
        assert!(workbook.workers_sheet.contains("\"SiteA\""));
        assert!(
            workbook
                .wage_summary_sheet
                .contains("\"Sita\",\"1\",\"1000\"")
        );
    }

    #[test]
    fn test_workbook_sheet_names() {
        assert_eq!(Workbook::WORKERS_SHEET_NAME, "Workers");
        assert_eq!(Workbook::WAGE_SUMMARY_SHEET_NAME, "Wage Summary");
    }

    #[test]
    fn test_export_filename_is_date_stamped() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
        assert_eq!(
            export_filename("wage_summary", date, "csv"),
            "wage_summary_2026-08-06.csv"
        );
    }
}
