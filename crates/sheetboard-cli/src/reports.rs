//! Console and CSV rendering of the two dashboard views.
//!
//! The summary view lists each category section's member accounts followed
//! by that section's rollup row; the ledger view lists raw transactions
//! through the active filter. Neither view computes anything — they paint
//! what the pipeline derived.

use std::path::Path;

use anyhow::Result;
use csv::Writer;

use sheetboard_core::filter::LedgerFilter;
use sheetboard_core::fmt;
use sheetboard_core::summary::{SECTION_ORDER, SummaryDataset, SummaryRow};
use sheetboard_core::transactions::TransactionDataset;

// ── Summary view ────────────────────────────────────────────────────────────

/// Section rows in display order: members first, rollup last.
fn section_rows<'a>(summary: &'a SummaryDataset, section: &str) -> Vec<&'a SummaryRow> {
    let mut rows: Vec<&SummaryRow> = summary
        .category_summary
        .get(section)
        .map(|members| members.iter().collect())
        .unwrap_or_default();
    if let Some(total) = summary.category_total_summary.get(section) {
        rows.push(total);
    }
    rows
}

pub fn print_summary(summary: &SummaryDataset) {
    println!(
        "{:<16} {:>10} {:>10} {:>10} {:>10}",
        "ACCT", "YTD", "PYT", "LDT", "LAM"
    );
    for section in SECTION_ORDER {
        for row in section_rows(summary, section) {
            println!(
                "{:<16} {:>10} {:>10} {:>10} {:>10}",
                row.name(),
                fmt::amount(row.year_to_date_total),
                fmt::amount(row.prev_year_total),
                row.last_date.map(fmt::short_day).unwrap_or_default(),
                row.last_amount.map(fmt::amount).unwrap_or_default(),
            );
        }
        println!();
    }
}

pub fn write_summary_csv(summary: &SummaryDataset, path: &Path) -> Result<()> {
    let mut wtr = Writer::from_path(path)?;
    wtr.write_record(["ACCT", "YTD", "PYT", "LDT", "LAM", "KIND"])?;
    for section in SECTION_ORDER {
        for row in section_rows(summary, section) {
            wtr.write_record([
                row.name(),
                &fmt::amount(row.year_to_date_total),
                &fmt::amount(row.prev_year_total),
                &row.last_date.map(fmt::day).unwrap_or_default(),
                &row.last_amount.map(fmt::amount).unwrap_or_default(),
                row.kind.as_str(),
            ])?;
        }
    }
    wtr.flush()?;
    Ok(())
}

// ── Ledger view ─────────────────────────────────────────────────────────────

pub fn print_ledger(transactions: &TransactionDataset, filter: &LedgerFilter) {
    if !filter.is_empty() {
        let active: Vec<String> = [
            filter.account.as_ref().map(|a| format!("account={a}")),
            filter.month.as_ref().map(|m| format!("month={m}")),
        ]
        .into_iter()
        .flatten()
        .collect();
        println!("[filter] {}", active.join(" "));
    }
    println!("{:<12} {:>10} {}", "DT", "AMNT", "ACCT");
    for row in transactions.rows.iter().filter(|row| filter.matches(row)) {
        println!(
            "{:<12} {:>10} {}",
            fmt::day(row.date),
            fmt::amount(row.amount),
            row.account
        );
    }
}

pub fn write_ledger_csv(
    transactions: &TransactionDataset,
    filter: &LedgerFilter,
    path: &Path,
) -> Result<()> {
    let mut wtr = Writer::from_path(path)?;
    wtr.write_record(["DT", "AMNT", "ACCT"])?;
    for row in transactions.rows.iter().filter(|row| filter.matches(row)) {
        wtr.write_record([&fmt::day(row.date), &fmt::amount(row.amount), &row.account])?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use sheetboard_core::categories::CategoryDataset;
    use sheetboard_core::filter::FilterPatch;
    use sheetboard_core::table::RawTable;
    use sheetboard_core::transactions::TransactionRecord;

    fn dataset() -> TransactionDataset {
        TransactionDataset {
            rows: vec![
                TransactionRecord {
                    date: NaiveDate::from_ymd_opt(2023, 4, 3).unwrap(),
                    amount: -950.0,
                    account: "rent".to_string(),
                },
                TransactionRecord {
                    date: NaiveDate::from_ymd_opt(2023, 5, 1).unwrap(),
                    amount: 2600.0,
                    account: "salary".to_string(),
                },
            ],
        }
    }

    #[test]
    fn ledger_csv_respects_the_filter() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ledger.csv");
        let filter = LedgerFilter::default().toggle([FilterPatch::account("rent")]);
        write_ledger_csv(&dataset(), &filter, &path).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("2023-04-03,-950,rent"));
        assert!(!content.contains("salary"));
    }

    #[test]
    fn summary_csv_lists_members_before_their_rollup() {
        let transactions = dataset();
        let categories = CategoryDataset::from_table(&RawTable::new(vec![
            vec!["ACCT".to_string(), "CAT".to_string()],
            vec!["rent".to_string(), "expense".to_string()],
            vec!["salary".to_string(), "income".to_string()],
        ]));
        let summary = sheetboard_core::summary::SummaryDataset::build(
            &transactions,
            &categories,
            NaiveDate::from_ymd_opt(2023, 6, 1).unwrap(),
        );

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("summary.csv");
        write_summary_csv(&summary, &path).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();

        let salary = lines.iter().position(|l| l.starts_with("salary,")).unwrap();
        let all_income = lines.iter().position(|l| l.starts_with("ALL INCOME,")).unwrap();
        let rent = lines.iter().position(|l| l.starts_with("rent,")).unwrap();
        let all_expenses = lines.iter().position(|l| l.starts_with("ALL EXPENSES,")).unwrap();

        // income section first, expense section last, rollup after members
        assert!(salary < all_income);
        assert!(rent < all_expenses);
        assert!(all_income < rent);
        assert!(content.contains("ALL INCOME,2600,0,,,all"));
    }
}
