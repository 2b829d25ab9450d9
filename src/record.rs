use csv::{ReaderBuilder, StringRecord};
use log::debug;

use std::{fs, io::Read, path::Path};

use crate::error::{Error, Result};

/// One data row of a timesheet, keyed by the header row.
///
/// Fields keep the order of the header row. If a header appears twice, the
/// field stays where it first appeared but holds the later value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Record(Vec<(String, String)>);

impl Record {
    /// Returns the value under `key`, if this row has one.
    ///
    /// # Examples
    ///
    /// ```
    /// # use payout::Record;
    /// let record: Record = [("name", "Alice"), ("hours", "160")].into_iter().collect();
    /// assert_eq!(record.get("name"), Some("Alice"));
    /// assert_eq!(record.get("rate"), None);
    /// ```
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns `true` if this row has a value under `key`.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Sets `key` to `value`, replacing any earlier value in place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some((_, v)) => *v = value,
            None => self.0.push((key, value)),
        }
    }

    /// Iterates over `(header, value)` pairs in header order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
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

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Self::default();
        for (k, v) in iter {
            record.insert(k, v);
        }
        record
    }
}

/// Reads the timesheet at `path`.
///
/// The first line gives the column names, and every later line becomes one
/// [`Record`] by pairing its values with those names by position. Whitespace
/// at either end of a line is ignored. Rows may be shorter or longer than the
/// header: missing columns are simply absent, and extra values are dropped.
/// There is no quoting, so a comma always separates fields. A blank line is a
/// row with a single empty value. A file with only a header line gives no
/// records.
///
/// # Errors
///
/// Returns [`Error::FileAccess`] if the file can't be opened, or can't be read
/// as UTF-8 text.
pub fn read_csv(path: impl AsRef<Path>) -> Result<Vec<Record>> {
    let path = path.as_ref();
    let file_error = |source: csv::Error| Error::FileAccess {
        path: path.to_path_buf(),
        source,
    };
    let text = fs::read_to_string(path).map_err(|e| file_error(e.into()))?;
    let records = parse(&text).map_err(file_error)?;
    debug!("read {} records from {}", records.len(), path.display());
    Ok(records)
}

/// Reads timesheet rows from `rdr`, in the same format as [`read_csv`].
///
/// # Errors
///
/// Returns [`Error::FileAccess`] if the input can't be read as UTF-8 text.
pub fn from_reader(mut rdr: impl Read) -> Result<Vec<Record>> {
    let file_error = |source: csv::Error| Error::FileAccess {
        path: "<reader>".into(),
        source,
    };
    let mut text = String::new();
    rdr.read_to_string(&mut text).map_err(|e| file_error(e.into()))?;
    parse(&text).map_err(file_error)
}

fn parse(text: &str) -> csv::Result<Vec<Record>> {
    let mut lines = text.lines().map(str::trim);
    let Some(header_line) = lines.next() else {
        return Ok(Vec::new());
    };
    let headers = split_line(header_line)?;
    let mut records = Vec::new();
    for line in lines {
        let row = split_line(line)?;
        records.push(headers.iter().zip(row.iter()).collect());
    }
    Ok(records)
}

/// Splits one line into fields on `,`, with no quote handling.
///
/// An empty line gives one empty field, not zero.
fn split_line(line: &str) -> csv::Result<StringRecord> {
    let mut fields = StringRecord::new();
    let found = ReaderBuilder::new()
        .delimiter(b',')
        .has_headers(false)
        .quoting(false)
        .from_reader(line.as_bytes())
        .read_record(&mut fields)?;
    if !found {
        fields.push_field("");
    }
    Ok(fields)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_csv_fn_correctly_parses_timesheet() {
        let records = read_csv("testdata/employees.csv").unwrap();
        assert_eq!(records.len(), 2, "wrong number of records");
        assert_eq!(records[0].get("name"), Some("Alice Johnson"));
        assert_eq!(records[0].get("department"), Some("Marketing"));
        assert_eq!(records[0].get("hours"), Some("160"));
        assert_eq!(records[0].get("rate"), Some("50"));
        assert_eq!(records[1].get("name"), Some("Bob Smith"));
        assert_eq!(records[1].get("department"), Some("Design"));
    }

    #[test]
    fn read_csv_fn_keeps_header_order() {
        let records = read_csv("testdata/employees.csv").unwrap();
        let keys: Vec<_> = records[0].iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["id", "email", "name", "department", "hours", "rate"]);
    }

    #[test]
    fn read_csv_fn_returns_no_records_for_header_only_file() {
        let records = read_csv("testdata/header_only.csv").unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn read_csv_fn_returns_file_access_error_for_missing_file() {
        let err = read_csv("testdata/no_such_file.csv").unwrap_err();
        assert!(matches!(err, Error::FileAccess { .. }), "{err:?}");
    }

    #[test]
    fn short_rows_leave_trailing_columns_absent() {
        let records = read_csv("testdata/ragged.csv").unwrap();
        assert_eq!(records[0].get("name"), Some("Carol White"));
        assert_eq!(records[0].get("department"), None);
        assert_eq!(records[0].get("hours"), None);
        assert_eq!(records[0].len(), 1);
    }

    #[test]
    fn long_rows_drop_extra_values() {
        let records = read_csv("testdata/ragged.csv").unwrap();
        assert_eq!(records[1].len(), 4);
        assert_eq!(records[1].get("rate"), Some("30"));
    }

    #[test]
    fn duplicate_headers_take_the_last_value() {
        let records = from_reader("name,hours,name\nfirst,10,second\n".as_bytes()).unwrap();
        assert_eq!(records[0].get("name"), Some("second"));
        let keys: Vec<_> = records[0].iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["name", "hours"]);
    }

    #[test]
    fn quotes_are_not_special() {
        let records = from_reader("name,hours\n\"Smith, Jo\",10\n".as_bytes()).unwrap();
        assert_eq!(records[0].get("name"), Some("\"Smith"));
        assert_eq!(records[0].get("hours"), Some(" Jo\""));
    }

    #[test]
    fn read_csv_fn_ignores_whitespace_at_line_ends() {
        let records = read_csv("testdata/padded.csv").unwrap();
        let keys: Vec<_> = records[0].iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["name", "department", "hours", "rate"]);
        assert_eq!(records[0].get("name"), Some("Al Green"));
        assert_eq!(records[0].get("rate"), Some("5"));
        assert_eq!(records[1].get("department"), Some("Ops"));
        assert_eq!(records[1].get("hours"), Some(" 4"));
    }

    #[test]
    fn blank_lines_become_rows_with_one_empty_value() {
        let text = "name,department,hours,rate\nAl,Ops,10,5\n\n";
        let records = from_reader(text.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].len(), 1);
        assert_eq!(records[1].get("name"), Some(""));
    }

    #[test]
    fn empty_input_gives_no_records() {
        assert!(from_reader("".as_bytes()).unwrap().is_empty());
    }
}
