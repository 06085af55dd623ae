//! The account → category mapping dataset and its inverse relation.

use std::collections::{BTreeMap, BTreeSet};

use crate::error::RowError;
use crate::table::{HeaderIndex, RawTable};

const COL_ACCOUNT: &str = "ACCT";
const COL_CATEGORIES: &str = "CAT";

/// One validated mapping row: an account and its category labels.
///
/// The source cell is a comma-separated list; labels are trimmed and blanks
/// dropped before the set forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRecord {
    pub account: String,
    pub categories: BTreeSet<String>,
}

/// Both derived relations over the category sheet.
///
/// `account_categories` keeps the last row seen per account, while
/// `category_accounts` unions every valid row — including rows a later
/// duplicate superseded. The asymmetry matches the observed source data and
/// is preserved rather than merged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryDataset {
    pub account_categories: BTreeMap<String, BTreeSet<String>>,
    pub category_accounts: BTreeMap<String, BTreeSet<String>>,
}

impl CategoryDataset {
    /// Build both relations, dropping rows that fail validation (same
    /// per-row isolation as the transaction parser).
    pub fn from_table(table: &RawTable) -> Self {
        let Some(header) = table.header() else {
            return Self::default();
        };
        let index = HeaderIndex::new(header);
        let records: Vec<CategoryRecord> = table
            .rows()
            .iter()
            .filter_map(|row| parse_row(&index, row).ok())
            .collect();

        let mut dataset = Self::default();
        for record in &records {
            for category in &record.categories {
                dataset
                    .category_accounts
                    .entry(category.clone())
                    .or_default()
                    .insert(record.account.clone());
            }
        }
        for record in records {
            dataset
                .account_categories
                .insert(record.account, record.categories);
        }
        dataset
    }

    /// Accounts carrying `label`. A label absent from the sheet is an empty
    /// set, never an error.
    pub fn accounts_for(&self, label: &str) -> &BTreeSet<String> {
        static EMPTY: BTreeSet<String> = BTreeSet::new();
        self.category_accounts.get(label).unwrap_or(&EMPTY)
    }
}

fn parse_row(index: &HeaderIndex, row: &[String]) -> Result<CategoryRecord, RowError> {
    let account = index.cell(row, COL_ACCOUNT)?.trim();
    if account.is_empty() {
        return Err(RowError::EmptyAccount);
    }
    let categories: BTreeSet<String> = index
        .cell(row, COL_CATEGORIES)?
        .split(',')
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .map(str::to_string)
        .collect();
    if categories.is_empty() {
        return Err(RowError::NoCategories);
    }
    Ok(CategoryRecord {
        account: account.to_string(),
        categories,
    })
}
