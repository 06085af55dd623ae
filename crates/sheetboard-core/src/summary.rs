//! The summary engine: from validated datasets to the year-to-date view.
//!
//! Pure and synchronous; runs to completion once both source datasets are
//! in hand. Ordering is deterministic throughout: transactions sort by
//! (account ascending, date descending) with a stable tie-break, and the
//! category maps iterate in label order, so identical inputs always produce
//! identical output.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};

use crate::categories::CategoryDataset;
use crate::transactions::{TransactionDataset, TransactionRecord};

/// The fixed category labels the dashboard groups by. Matching is exact and
/// case-sensitive: a sheet that says `Sport` fills no bucket.
pub const CATEGORY_EXPENSE: &str = "expense";
pub const CATEGORY_INCOME: &str = "income";
pub const CATEGORY_MEDICAL: &str = "medical";
pub const CATEGORY_SPORT: &str = "sport";
pub const CATEGORY_UTILITIES: &str = "utilities";

/// Section order of the summary view, income first, general expenses last.
pub const SECTION_ORDER: [&str; 5] = [
    CATEGORY_INCOME,
    CATEGORY_UTILITIES,
    CATEGORY_MEDICAL,
    CATEGORY_SPORT,
    CATEGORY_EXPENSE,
];

/// What a summary row stands for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SummaryKind {
    /// One account's own totals.
    #[default]
    Account,
    /// Rollup over one named category (`MEDICAL`, `SPORT`, `UTILITIES`).
    Total,
    /// Grand rollup (`ALL EXPENSES`, `ALL INCOME`).
    All,
}

impl SummaryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Account => "none",
            Self::Total => "total",
            Self::All => "all",
        }
    }
}

impl std::fmt::Display for SummaryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the summary view: a single account's totals or a synthetic
/// rollup. Exactly one of `label` / `account` is set, and rollups never
/// carry last-transaction fields.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    pub label: Option<String>,
    pub account: Option<String>,
    pub year_to_date_total: f64,
    pub prev_year_total: f64,
    pub last_date: Option<NaiveDate>,
    pub last_amount: Option<f64>,
    pub kind: SummaryKind,
}

impl SummaryRow {
    /// Display name: the account for account rows, the label for rollups.
    pub fn name(&self) -> &str {
        self.account
            .as_deref()
            .or(self.label.as_deref())
            .unwrap_or("")
    }
}

/// The derived summary: per-account rows plus the category groupings.
///
/// `category_summary[CATEGORY_EXPENSE]` holds only the *other* expenses
/// (tagged `expense` but none of medical/sport/utilities), while
/// `category_total_summary[CATEGORY_EXPENSE]` rolls up every expense-tagged
/// account regardless.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryDataset {
    pub rows: Vec<SummaryRow>,
    pub category_summary: BTreeMap<&'static str, Vec<SummaryRow>>,
    pub category_total_summary: BTreeMap<&'static str, SummaryRow>,
}

impl SummaryDataset {
    /// Derive the summary as of `as_of`.
    ///
    /// The window spans all of the previous calendar year plus the current
    /// year up to `as_of`, inclusive on both ends.
    pub fn build(
        transactions: &TransactionDataset,
        categories: &CategoryDataset,
        as_of: NaiveDate,
    ) -> Self {
        let interval_start = NaiveDate::from_ymd_opt(as_of.year() - 1, 1, 1).unwrap();

        let mut kept: Vec<&TransactionRecord> = transactions
            .rows
            .iter()
            .filter(|row| interval_start <= row.date && row.date <= as_of)
            .collect();

        // Descending date within an account puts the most recent transaction
        // at the head of each group; the sort is stable, so equal
        // (account, date) pairs keep sheet order.
        kept.sort_by(|a, b| a.account.cmp(&b.account).then_with(|| b.date.cmp(&a.date)));

        let mut rows = Vec::new();
        let mut start = 0;
        while start < kept.len() {
            let account = &kept[start].account;
            let mut end = start + 1;
            while end < kept.len() && kept[end].account == *account {
                end += 1;
            }
            rows.push(account_summary(
                &kept[start..end],
                as_of.year(),
                interval_start.year(),
            ));
            start = end;
        }

        let (category_summary, category_total_summary) = categorize(&rows, categories);

        Self {
            rows,
            category_summary,
            category_total_summary,
        }
    }
}

fn account_summary(group: &[&TransactionRecord], ytd_year: i32, prev_year: i32) -> SummaryRow {
    let total_for = |year: i32| -> f64 {
        group
            .iter()
            .filter(|row| row.date.year() == year)
            .map(|row| row.amount)
            .sum()
    };
    let latest = group[0];
    SummaryRow {
        label: None,
        account: Some(latest.account.clone()),
        year_to_date_total: total_for(ytd_year),
        prev_year_total: total_for(prev_year),
        last_date: Some(latest.date),
        last_amount: Some(latest.amount),
        kind: SummaryKind::Account,
    }
}

fn categorize(
    rows: &[SummaryRow],
    categories: &CategoryDataset,
) -> (
    BTreeMap<&'static str, Vec<SummaryRow>>,
    BTreeMap<&'static str, SummaryRow>,
) {
    let in_category = |row: &SummaryRow, label: &str| {
        row.account
            .as_deref()
            .is_some_and(|account| categories.accounts_for(label).contains(account))
    };
    let members = |label: &'static str| -> Vec<SummaryRow> {
        rows.iter()
            .filter(|row| in_category(row, label))
            .cloned()
            .collect()
    };

    let expense_rows = members(CATEGORY_EXPENSE);
    let income_rows = members(CATEGORY_INCOME);
    let medical_rows = members(CATEGORY_MEDICAL);
    let sport_rows = members(CATEGORY_SPORT);
    let utilities_rows = members(CATEGORY_UTILITIES);

    // The expense section lists only accounts that land in no named bucket,
    // so nothing shows twice within it; the ALL EXPENSES rollup still spans
    // every expense-tagged account.
    let other_expense_rows: Vec<SummaryRow> = expense_rows
        .iter()
        .filter(|row| {
            !in_category(row, CATEGORY_MEDICAL)
                && !in_category(row, CATEGORY_SPORT)
                && !in_category(row, CATEGORY_UTILITIES)
        })
        .cloned()
        .collect();

    let category_total_summary = BTreeMap::from([
        (
            CATEGORY_EXPENSE,
            rollup("ALL EXPENSES", SummaryKind::All, &expense_rows),
        ),
        (
            CATEGORY_INCOME,
            rollup("ALL INCOME", SummaryKind::All, &income_rows),
        ),
        (
            CATEGORY_MEDICAL,
            rollup("MEDICAL", SummaryKind::Total, &medical_rows),
        ),
        (
            CATEGORY_SPORT,
            rollup("SPORT", SummaryKind::Total, &sport_rows),
        ),
        (
            CATEGORY_UTILITIES,
            rollup("UTILITIES", SummaryKind::Total, &utilities_rows),
        ),
    ]);

    let category_summary = BTreeMap::from([
        (CATEGORY_EXPENSE, other_expense_rows),
        (CATEGORY_INCOME, income_rows),
        (CATEGORY_MEDICAL, medical_rows),
        (CATEGORY_SPORT, sport_rows),
        (CATEGORY_UTILITIES, utilities_rows),
    ]);

    (category_summary, category_total_summary)
}

fn rollup(label: &str, kind: SummaryKind, members: &[SummaryRow]) -> SummaryRow {
    SummaryRow {
        label: Some(label.to_string()),
        account: None,
        year_to_date_total: members.iter().map(|row| row.year_to_date_total).sum(),
        prev_year_total: members.iter().map(|row| row.prev_year_total).sum(),
        last_date: None,
        last_amount: None,
        kind,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::RawTable;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn transactions(rows: &[(&str, f64, &str)]) -> TransactionDataset {
        TransactionDataset {
            rows: rows
                .iter()
                .map(|(day, amount, account)| TransactionRecord {
                    date: NaiveDate::parse_from_str(day, "%Y-%m-%d").unwrap(),
                    amount: *amount,
                    account: account.to_string(),
                })
                .collect(),
        }
    }

    fn categories(rows: &[(&str, &str)]) -> CategoryDataset {
        let mut values = vec![vec!["ACCT".to_string(), "CAT".to_string()]];
        for (account, labels) in rows {
            values.push(vec![account.to_string(), labels.to_string()]);
        }
        CategoryDataset::from_table(&RawTable::new(values))
    }

    fn account_row<'a>(summary: &'a SummaryDataset, account: &str) -> &'a SummaryRow {
        summary
            .rows
            .iter()
            .find(|row| row.account.as_deref() == Some(account))
            .unwrap()
    }

    #[test]
    fn interval_spans_previous_year_through_as_of() {
        let summary = SummaryDataset::build(
            &transactions(&[
                ("2023-01-15", 100.0, "A"),
                ("2022-06-01", 50.0, "A"),
                ("2021-01-01", 10.0, "A"),
            ]),
            &categories(&[("A", "expense")]),
            date(2023, 6, 1),
        );
        let a = account_row(&summary, "A");
        assert_eq!(a.year_to_date_total, 100.0);
        assert_eq!(a.prev_year_total, 50.0);
        assert_eq!(a.last_date, Some(date(2023, 1, 15)));
        assert_eq!(a.last_amount, Some(100.0));
    }

    #[test]
    fn interval_bounds_are_inclusive() {
        let summary = SummaryDataset::build(
            &transactions(&[
                ("2022-01-01", 1.0, "A"),
                ("2023-06-01", 2.0, "A"),
                ("2021-12-31", 4.0, "A"),
                ("2023-06-02", 8.0, "A"),
            ]),
            &CategoryDataset::default(),
            date(2023, 6, 1),
        );
        let a = account_row(&summary, "A");
        assert_eq!(a.prev_year_total, 1.0);
        assert_eq!(a.year_to_date_total, 2.0);
    }

    #[test]
    fn last_transaction_is_the_group_maximum_date() {
        let summary = SummaryDataset::build(
            &transactions(&[
                ("2023-02-01", 5.0, "B"),
                ("2023-03-10", 7.0, "B"),
                ("2022-11-30", 9.0, "B"),
            ]),
            &CategoryDataset::default(),
            date(2023, 6, 1),
        );
        let b = account_row(&summary, "B");
        assert_eq!(b.last_date, Some(date(2023, 3, 10)));
        assert_eq!(b.last_amount, Some(7.0));
    }

    #[test]
    fn rows_come_out_in_account_order() {
        let summary = SummaryDataset::build(
            &transactions(&[
                ("2023-01-01", 1.0, "zeta"),
                ("2023-01-02", 1.0, "alpha"),
                ("2023-01-03", 1.0, "mid"),
            ]),
            &CategoryDataset::default(),
            date(2023, 6, 1),
        );
        let accounts: Vec<&str> = summary.rows.iter().map(|row| row.name()).collect();
        assert_eq!(accounts, ["alpha", "mid", "zeta"]);
    }

    #[test]
    fn all_expenses_rollup_covers_every_expense_tagged_account() {
        let summary = SummaryDataset::build(
            &transactions(&[
                ("2023-01-01", -10.0, "rent"),
                ("2023-01-02", -20.0, "dentist"),
                ("2022-03-01", -5.0, "rent"),
            ]),
            &categories(&[("rent", "expense"), ("dentist", "expense, medical")]),
            date(2023, 6, 1),
        );
        let all = &summary.category_total_summary[CATEGORY_EXPENSE];
        assert_eq!(all.label.as_deref(), Some("ALL EXPENSES"));
        assert_eq!(all.kind, SummaryKind::All);
        assert_eq!(all.year_to_date_total, -30.0);
        assert_eq!(all.prev_year_total, -5.0);
        assert_eq!(all.last_date, None);
        assert_eq!(all.last_amount, None);
    }

    #[test]
    fn medical_accounts_leave_other_expenses_but_not_the_rollup() {
        let summary = SummaryDataset::build(
            &transactions(&[
                ("2023-01-01", -10.0, "rent"),
                ("2023-01-02", -20.0, "dentist"),
            ]),
            &categories(&[("rent", "expense"), ("dentist", "expense, medical")]),
            date(2023, 6, 1),
        );
        let other: Vec<&str> = summary.category_summary[CATEGORY_EXPENSE]
            .iter()
            .map(|row| row.name())
            .collect();
        assert_eq!(other, ["rent"]);
        let medical: Vec<&str> = summary.category_summary[CATEGORY_MEDICAL]
            .iter()
            .map(|row| row.name())
            .collect();
        assert_eq!(medical, ["dentist"]);
        assert_eq!(
            summary.category_total_summary[CATEGORY_EXPENSE].year_to_date_total,
            -30.0
        );
        assert_eq!(
            summary.category_total_summary[CATEGORY_MEDICAL].year_to_date_total,
            -20.0
        );
        assert_eq!(
            summary.category_total_summary[CATEGORY_MEDICAL].kind,
            SummaryKind::Total
        );
    }

    #[test]
    fn missing_category_yields_an_empty_bucket_and_zero_rollup() {
        let summary = SummaryDataset::build(
            &transactions(&[("2023-01-01", -10.0, "rent")]),
            &categories(&[("rent", "expense")]),
            date(2023, 6, 1),
        );
        assert!(summary.category_summary[CATEGORY_SPORT].is_empty());
        let sport = &summary.category_total_summary[CATEGORY_SPORT];
        assert_eq!(sport.year_to_date_total, 0.0);
        assert_eq!(sport.prev_year_total, 0.0);
        assert_eq!(sport.label.as_deref(), Some("SPORT"));
    }

    #[test]
    fn label_matching_is_case_sensitive() {
        let summary = SummaryDataset::build(
            &transactions(&[("2023-01-01", -10.0, "gym")]),
            &categories(&[("gym", "Sport")]),
            date(2023, 6, 1),
        );
        assert!(summary.category_summary[CATEGORY_SPORT].is_empty());
    }

    #[test]
    fn rebuilding_from_the_same_inputs_is_identical() {
        let txs = transactions(&[
            ("2023-01-15", 100.0, "A"),
            ("2022-06-01", 50.0, "A"),
            ("2023-02-01", -3.0, "B"),
        ]);
        let cats = categories(&[("A", "income"), ("B", "expense, sport")]);
        let first = SummaryDataset::build(&txs, &cats, date(2023, 6, 1));
        let second = SummaryDataset::build(&txs, &cats, date(2023, 6, 1));
        assert_eq!(first, second);
    }

    #[test]
    fn empty_inputs_produce_an_empty_summary_not_an_error() {
        let summary = SummaryDataset::build(
            &TransactionDataset::default(),
            &CategoryDataset::default(),
            date(2023, 6, 1),
        );
        assert!(summary.rows.is_empty());
        for section in SECTION_ORDER {
            assert!(summary.category_summary[section].is_empty());
            assert_eq!(summary.category_total_summary[section].year_to_date_total, 0.0);
        }
    }
}
