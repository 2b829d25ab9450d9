use log::debug;

use crate::{
    error::{Error, Result},
    record::Record,
};

/// Column names checked, in order, for an employee's pay rate.
pub const RATE_KEYS: [&str; 3] = ["hourly_rate", "rate", "salary"];

pub const DEFAULT_NAME: &str = "Unnamed";
pub const DEFAULT_DEPARTMENT: &str = "No Department";

/// Pay for one employee, worked out from one timesheet row.
#[derive(Clone, Debug, PartialEq)]
pub struct Employee {
    pub name: String,
    pub hours_worked: f64,
    pub hourly_rate: f64,
    pub total_pay: f64,
}

impl Employee {
    /// Builds an employee entry from `record`, filling in defaults for any
    /// missing column.
    ///
    /// The rate comes from the first of [`RATE_KEYS`] present in the row.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ValueParse`] if the hours or rate isn't a number.
    pub fn from_record(record: &Record) -> Result<Self> {
        let hours_worked = parse_field("hours", record.get("hours").unwrap_or("0"))?;
        let hourly_rate = match RATE_KEYS.iter().find(|k| record.contains_key(k)) {
            Some(key) => parse_field(key, record.get(key).unwrap_or("0"))?,
            None => 0.0,
        };
        Ok(Self {
            name: record.get("name").unwrap_or(DEFAULT_NAME).to_string(),
            hours_worked,
            hourly_rate,
            total_pay: hours_worked * hourly_rate,
        })
    }
}

fn parse_field(field: &str, value: &str) -> Result<f64> {
    value.trim().parse().map_err(|source| Error::ValueParse {
        field: field.to_string(),
        value: value.to_string(),
        source,
    })
}

/// The employees in one department, in the order they were read.
#[derive(Clone, Debug, PartialEq)]
pub struct Department {
    pub name: String,
    pub employees: Vec<Employee>,
}

impl Department {
    // Folding from +0.0 keeps an all-zero column from totalling -0.0.
    #[must_use]
    pub fn total_hours(&self) -> f64 {
        self.employees.iter().fold(0.0, |acc, e| acc + e.hours_worked)
    }

    #[must_use]
    pub fn total_pay(&self) -> f64 {
        self.employees.iter().fold(0.0, |acc, e| acc + e.total_pay)
    }
}

/// Employees grouped by department.
///
/// Departments are kept in the order they were first seen, not sorted by name.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Departments(Vec<Department>);

impl Departments {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the employee list for department `name`, adding an empty
    /// department at the end if there isn't one yet.
    pub fn entry(&mut self, name: &str) -> &mut Vec<Employee> {
        let index = match self.0.iter().position(|d| d.name == name) {
            Some(index) => index,
            None => {
                self.0.push(Department {
                    name: name.to_string(),
                    employees: Vec::new(),
                });
                self.0.len() - 1
            }
        };
        &mut self.0[index].employees
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Department> {
        self.0.iter().find(|d| d.name == name)
    }

    /// Appends every department in `other` to this one, merging employees
    /// into any department already here.
    pub fn merge(&mut self, other: Departments) {
        for dept in other.0 {
            self.entry(&dept.name).extend(dept.employees);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Department> {
        self.0.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a Departments {
    type Item = &'a Department;
    type IntoIter = std::slice::Iter<'a, Department>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Works out pay for every row in `records` and groups it by department.
///
/// Rows with no `department` go under [`DEFAULT_DEPARTMENT`].
///
/// # Errors
///
/// Returns [`Error::ValueParse`] for the first row whose hours or rate isn't
/// a number.
pub fn group(records: &[Record]) -> Result<Departments> {
    let mut departments = Departments::new();
    for record in records {
        let dept = record.get("department").unwrap_or(DEFAULT_DEPARTMENT);
        departments.entry(dept).push(Employee::from_record(record)?);
    }
    debug!(
        "grouped {} records into {} departments",
        records.len(),
        departments.len()
    );
    Ok(departments)
}

/// Groups each dataset with [`group`], then merges the results in order.
///
/// # Errors
///
/// Returns the first error from [`group`].
pub fn combine<R: AsRef<[Record]>>(datasets: &[R]) -> Result<Departments> {
    let mut combined = Departments::new();
    for dataset in datasets {
        combined.merge(group(dataset.as_ref())?);
    }
    Ok(combined)
}
