//! The consumed spreadsheet interface and the fetch cycle.

use chrono::NaiveDate;

use crate::categories::CategoryDataset;
use crate::error::SourceError;
use crate::summary::SummaryDataset;
use crate::table::RawTable;
use crate::transactions::TransactionDataset;

/// Conventional range names in the source spreadsheet.
pub const TRANSACTIONS_RANGE: &str = "BAL";
pub const CATEGORIES_RANGE: &str = "CATX";

/// A provider of raw ranges from one spreadsheet.
///
/// Implementations live outside the pipeline (HTTP client, demo data, test
/// fakes); the pipeline only ever reads whole tables through this seam.
pub trait TableSource {
    fn fetch_table(&self, range: &str) -> impl Future<Output = Result<RawTable, SourceError>>;
}

/// The pair of ranges one refresh reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetRanges {
    pub transactions: String,
    pub categories: String,
}

impl Default for SheetRanges {
    fn default() -> Self {
        Self {
            transactions: TRANSACTIONS_RANGE.to_string(),
            categories: CATEGORIES_RANGE.to_string(),
        }
    }
}

/// Everything one fetch cycle produces. Immutable once built; a refresh
/// replaces the whole bundle rather than updating it.
#[derive(Debug, Clone, PartialEq)]
pub struct Datasets {
    pub transactions: TransactionDataset,
    pub categories: CategoryDataset,
    pub summary: SummaryDataset,
}

/// Run one fetch-and-summarize cycle.
///
/// Both ranges are fetched concurrently and both outcomes are awaited — a
/// failure on one side neither cancels nor masks the other fetch. The
/// summary engine (pure, non-suspending) runs only once both tables have
/// arrived; on failure the captured error propagates untouched and no
/// partial dataset is returned.
pub async fn refresh<S: TableSource>(
    source: &S,
    ranges: &SheetRanges,
    as_of: NaiveDate,
) -> Result<Datasets, SourceError> {
    let (transactions_table, categories_table) = futures::join!(
        source.fetch_table(&ranges.transactions),
        source.fetch_table(&ranges.categories),
    );

    let (transactions_table, categories_table) = match (transactions_table, categories_table) {
        (Ok(transactions), Ok(categories)) => (transactions, categories),
        (Err(err), _) | (_, Err(err)) => return Err(err),
    };

    let transactions = TransactionDataset::from_table(&transactions_table);
    let categories = CategoryDataset::from_table(&categories_table);
    let summary = SummaryDataset::build(&transactions, &categories, as_of);

    Ok(Datasets {
        transactions,
        categories,
        summary,
    })
}
