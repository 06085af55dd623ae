//! The validated transaction dataset.

use chrono::NaiveDate;

use crate::error::RowError;
use crate::table::{HeaderIndex, RawTable};

const COL_DATE: &str = "DT";
const COL_AMOUNT: &str = "AMNT";
const COL_ACCOUNT: &str = "ACCT";

/// One validated expense/income transaction.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRecord {
    pub date: NaiveDate,
    pub amount: f64,
    pub account: String,
}

/// All valid transactions from one fetched range, in sheet order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionDataset {
    pub rows: Vec<TransactionRecord>,
}

impl TransactionDataset {
    /// Build the dataset, dropping every row that fails validation.
    ///
    /// Error isolation is per row: a bad cell skips that row only, never the
    /// table. A header missing one of the expected columns therefore fails
    /// every row the same way and yields an empty dataset rather than an
    /// error.
    pub fn from_table(table: &RawTable) -> Self {
        let Some(header) = table.header() else {
            return Self::default();
        };
        let index = HeaderIndex::new(header);
        let rows = table
            .rows()
            .iter()
            .filter_map(|row| parse_row(&index, row).ok())
            .collect();
        Self { rows }
    }
}

fn parse_row(index: &HeaderIndex, row: &[String]) -> Result<TransactionRecord, RowError> {
    let date = parse_date(index.cell(row, COL_DATE)?)?;
    let amount = parse_amount(index.cell(row, COL_AMOUNT)?)?;
    let account = index.cell(row, COL_ACCOUNT)?.trim();
    if account.is_empty() {
        return Err(RowError::EmptyAccount);
    }
    Ok(TransactionRecord {
        date,
        amount,
        account: account.to_string(),
    })
}

/// Parse an ISO `YYYY-MM-DD` date cell, falling back to the `M/D/YYYY` form
/// some spreadsheet locales export.
pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, RowError> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(raw, "%m/%d/%Y"))
        .map_err(|_| RowError::BadDate(raw.to_string()))
}

/// Parse an amount cell, tolerating thousands separators. The result must
/// be finite.
pub(crate) fn parse_amount(raw: &str) -> Result<f64, RowError> {
    raw.trim()
        .replace(',', "")
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite())
        .ok_or_else(|| RowError::BadAmount(raw.to_string()))
}
