//! Tabular data types.
//!
//! This module contains the data model carried through the topic facade:
//! - [`FieldValue`] - The scalar value type system for table cells
//! - [`Row`] - One record, a mapping from field name to scalar value
//! - [`Table`] - An ordered sequence of rows with the union of their columns

use chrono::{NaiveDate, NaiveDateTime};
use std::collections::HashMap;
use std::fmt;

/// A scalar value in a table cell
///
/// Rows are flat mappings from field name to scalar value, so this enum covers
/// the JSON-native scalars plus the temporal types that are coerced to
/// formatted strings on the wire.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// 64-bit signed integer
    Integer(i64),
    /// 64-bit floating point number
    Float(f64),
    /// UTF-8 string
    String(String),
    /// Boolean value (true/false)
    Boolean(bool),
    /// Absent value
    Null,
    /// Date (YYYY-MM-DD)
    Date(NaiveDate),
    /// Timestamp (YYYY-MM-DD HH:MM:SS[.nnn])
    Timestamp(NaiveDateTime),
}

impl FieldValue {
    /// Get the type name for error messages and debugging
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldValue::Integer(_) => "INTEGER",
            FieldValue::Float(_) => "FLOAT",
            FieldValue::String(_) => "STRING",
            FieldValue::Boolean(_) => "BOOLEAN",
            FieldValue::Null => "NULL",
            FieldValue::Date(_) => "DATE",
            FieldValue::Timestamp(_) => "TIMESTAMP",
        }
    }

    /// Convert this value to a clean string representation for display
    ///
    /// Unlike Debug formatting, this renders cells the way a table printer
    /// would: bare numbers, unquoted strings, `NULL` for absent values.
    pub fn to_display_string(&self) -> String {
        match self {
            FieldValue::Integer(i) => i.to_string(),
            FieldValue::Float(f) => f.to_string(),
            FieldValue::String(s) => s.clone(),
            FieldValue::Boolean(b) => b.to_string(),
            FieldValue::Null => "NULL".to_string(),
            FieldValue::Date(d) => d.format("%Y-%m-%d").to_string(),
            FieldValue::Timestamp(ts) => ts.format("%Y-%m-%d %H:%M:%S%.3f").to_string(),
        }
    }
}

/// One record: a mapping from field name to scalar value
///
/// A row is produced by flattening one line of tabular input. Rows in the same
/// table may carry different field sets; the table unions them into columns.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Row {
    fields: HashMap<String, FieldValue>,
}

impl Row {
    /// Create an empty row
    pub fn new() -> Self {
        Row {
            fields: HashMap::new(),
        }
    }

    /// Create a row from an existing field map
    pub fn from_fields(fields: HashMap<String, FieldValue>) -> Self {
        Row { fields }
    }

    /// Builder-style field insertion
    pub fn with_field(mut self, name: impl Into<String>, value: FieldValue) -> Self {
        self.fields.insert(name.into(), value);
        self
    }

    /// Insert or replace a field
    pub fn set_field(&mut self, name: impl Into<String>, value: FieldValue) {
        self.fields.insert(name.into(), value);
    }

    /// Get a field value by name
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// Check if a field exists
    pub fn has_field(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Number of fields in this row
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Access the underlying field map
    pub fn fields(&self) -> &HashMap<String, FieldValue> {
        &self.fields
    }
}

impl From<HashMap<String, FieldValue>> for Row {
    fn from(fields: HashMap<String, FieldValue>) -> Self {
        Row::from_fields(fields)
    }
}

/// An ordered sequence of rows re-assembled into a tabular structure
///
/// Columns are the union of the field names seen across all rows, kept in
/// ascending name order so that rendering and assertions are deterministic.
/// Rows keep their insertion order, which on the read path is the arrival
/// order of the consumed records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Row>,
}

impl Table {
    /// Create an empty table
    pub fn new() -> Self {
        Table {
            columns: Vec::new(),
            rows: Vec::new(),
        }
    }

    /// Build a table from a sequence of rows
    pub fn from_rows(rows: Vec<Row>) -> Self {
        let mut table = Table::new();
        for row in rows {
            table.push_row(row);
        }
        table
    }

    /// Append a row, extending the column union with any unseen field names
    pub fn push_row(&mut self, row: Row) {
        for name in row.fields().keys() {
            if let Err(pos) = self.columns.binary_search(name) {
                self.columns.insert(pos, name.clone());
            }
        }
        self.rows.push(row);
    }

    /// Column names, ascending
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Rows in insertion order
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Row by position
    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterate over rows
    pub fn iter(&self) -> std::slice::Iter<'_, Row> {
        self.rows.iter()
    }
}

impl<'a> IntoIterator for &'a Table {
    type Item = &'a Row;
    type IntoIter = std::slice::Iter<'a, Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

impl fmt::Display for Table {
    /// Render the table as an aligned text grid with a header line,
    /// `NULL` for cells a row does not carry, and a row/column summary.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.columns.is_empty() {
            return write!(f, "(empty table)");
        }

        let rendered: Vec<Vec<String>> = self
            .rows
            .iter()
            .map(|row| {
                self.columns
                    .iter()
                    .map(|col| {
                        row.get(col)
                            .map(|v| v.to_display_string())
                            .unwrap_or_else(|| "NULL".to_string())
                    })
                    .collect()
            })
            .collect();

        let widths: Vec<usize> = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                rendered
                    .iter()
                    .map(|cells| cells[i].len())
                    .chain(std::iter::once(col.len()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let header: Vec<String> = self
            .columns
            .iter()
            .zip(&widths)
            .map(|(col, w)| format!("{:<width$}", col, width = w))
            .collect();
        writeln!(f, "{}", header.join(" | "))?;

        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        writeln!(f, "{}", rule.join("-+-"))?;

        for cells in &rendered {
            let line: Vec<String> = cells
                .iter()
                .zip(&widths)
                .map(|(cell, w)| format!("{:<width$}", cell, width = w))
                .collect();
            writeln!(f, "{}", line.join(" | "))?;
        }

        write!(
            f,
            "\n[{} rows x {} columns]",
            self.num_rows(),
            self.num_columns()
        )
    }
}
