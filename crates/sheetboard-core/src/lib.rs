//! Dataset derivation pipeline for the sheetboard finance dashboard.
//!
//! Raw spreadsheet ranges come in through [`source::TableSource`]; the row
//! parsers in [`transactions`] and [`categories`] turn them into validated
//! datasets, dropping malformed rows one at a time; the [`summary`] engine
//! turns the pair plus an as-of date into the year-to-date view. Everything
//! here is pure and synchronous except [`source::refresh`], which only
//! orchestrates the two concurrent range fetches.

pub mod categories;
pub mod error;
pub mod filter;
pub mod fmt;
pub mod source;
pub mod summary;
pub mod table;
pub mod transactions;

pub use categories::{CategoryDataset, CategoryRecord};
pub use error::{RowError, SourceError};
pub use filter::{FilterPatch, LedgerFilter};
pub use source::{Datasets, SheetRanges, TableSource, refresh};
pub use summary::{SummaryDataset, SummaryKind, SummaryRow};
pub use table::RawTable;
pub use transactions::{TransactionDataset, TransactionRecord};
