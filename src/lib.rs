#![doc = include_str!("../README.md")]

mod error;
mod payroll;
mod record;
mod report;

pub use error::{Error, Result};
pub use payroll::{
    combine, group, Department, Departments, Employee, DEFAULT_DEPARTMENT, DEFAULT_NAME,
    RATE_KEYS,
};
pub use record::{from_reader, read_csv, Record};
pub use report::{PayoutReport, ReportKind};

/// Produces the payout report text for `datasets`, one per timesheet file.
///
/// # Examples
///
/// ```
/// # use payout::{payout_report, Record};
/// let rows: Vec<Record> = vec![
///     [("name", "Alice"), ("department", "Ops"), ("hours", "10"), ("rate", "20")]
///         .into_iter()
///         .collect(),
/// ];
/// let report = payout_report(&[rows]).unwrap();
/// assert!(report.starts_with("Ops\n---\n"));
/// assert!(report.ends_with("$   200"));
/// ```
///
/// # Errors
///
/// Returns [`Error::ValueParse`] if any row has non-numeric hours or rate.
pub fn payout_report<R: AsRef<[Record]>>(datasets: &[R]) -> Result<String> {
    let departments = combine(datasets)?;
    Ok(PayoutReport::new(&departments).to_string())
}
