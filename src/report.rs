use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::{error::Error, payroll::Departments};

const NAME_WIDTH: usize = 20;

/// The kinds of report this crate can produce.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReportKind {
    Payout,
}

impl FromStr for ReportKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "payout" => Ok(Self::Payout),
            _ => Err(Error::UnknownReport(s.to_string())),
        }
    }
}

impl Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Payout => f.write_str("payout"),
        }
    }
}

/// Payout report over a set of departments.
///
/// Each department gets its own block: a title, a table of employees with
/// hours, rate and pay, and a line of totals. Blocks follow the order of the
/// [`Departments`] they came from. All figures are shown to the nearest whole
/// unit.
///
/// To get the report text, use its [`Display`] implementation.
#[derive(Clone, Copy, Debug)]
pub struct PayoutReport<'a> {
    departments: &'a Departments,
}

impl<'a> PayoutReport<'a> {
    #[must_use]
    pub fn new(departments: &'a Departments) -> Self {
        Self { departments }
    }

    fn lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        for dept in self.departments {
            lines.push(dept.name.clone());
            lines.push("-".repeat(dept.name.chars().count()));
            lines.push(format!(
                "{:<NAME_WIDTH$} {:>6} {:>6} {:>8}",
                "name", "hours", "rate", "payout"
            ));
            for emp in &dept.employees {
                lines.push(format!(
                    "{:<NAME_WIDTH$} {:>6.0} {:>6.0} ${:>6.0}",
                    emp.name, emp.hours_worked, emp.hourly_rate, emp.total_pay
                ));
            }
            lines.push("-".repeat(NAME_WIDTH));
            lines.push(format!(
                "{:<NAME_WIDTH$} {:>6.0} {:>6} ${:>6.0}",
                "",
                dept.total_hours(),
                "",
                dept.total_pay()
            ));
            lines.push(String::new());
        }
        lines
    }
}

impl Display for PayoutReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.lines().join("\n").trim())
    }
}
