//! Raw spreadsheet tables and header-driven column lookup.
//!
//! A fetched range arrives as an ordered grid of string cells with the
//! header in row 0. Column order is not fixed across exports, so every cell
//! access goes through a label → index map built from the header once.

use std::collections::HashMap;

use serde::Deserialize;

use crate::error::RowError;

/// One fetched range: header row first, data rows after.
///
/// Mirrors the `values` field of a Sheets `values.get` response body; an
/// entirely empty range omits the field, which deserializes to an empty
/// grid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawTable {
    #[serde(default)]
    pub values: Vec<Vec<String>>,
}

impl RawTable {
    pub fn new(values: Vec<Vec<String>>) -> Self {
        Self { values }
    }

    /// The header row, if the table has one.
    pub fn header(&self) -> Option<&[String]> {
        self.values.first().map(Vec::as_slice)
    }

    /// Data rows: everything after the header.
    pub fn rows(&self) -> &[Vec<String>] {
        self.values.get(1..).unwrap_or_default()
    }
}

/// Label → column index map, built from the header row once per table.
///
/// Duplicate header labels resolve to the rightmost column.
#[derive(Debug)]
pub struct HeaderIndex {
    columns: HashMap<String, usize>,
}

impl HeaderIndex {
    pub fn new(header: &[String]) -> Self {
        let columns = header
            .iter()
            .enumerate()
            .map(|(index, label)| (label.clone(), index))
            .collect();
        Self { columns }
    }

    /// Project one cell out of a data row by column label.
    ///
    /// A label missing from the header, or a row too short to reach the
    /// column, fails this row only — callers skip the row and keep going.
    pub fn cell<'a>(&self, row: &'a [String], label: &'static str) -> Result<&'a str, RowError> {
        let index = *self.columns.get(label).ok_or(RowError::MissingColumn(label))?;
        row.get(index)
            .map(String::as_str)
            .ok_or(RowError::MissingColumn(label))
    }
}
