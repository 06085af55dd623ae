//! Built-in demo data so every command runs without credentials.
//!
//! Synthesizes two years of plausible household rows around the reference
//! date, plus a few malformed rows of the kind real exports contain — the
//! parser is expected to drop those silently.

use chrono::{Datelike, NaiveDate};

use sheetboard_core::error::SourceError;
use sheetboard_core::source::{CATEGORIES_RANGE, TRANSACTIONS_RANGE, TableSource};
use sheetboard_core::table::RawTable;

pub struct DemoSource {
    transactions: RawTable,
    categories: RawTable,
}

impl DemoSource {
    pub fn new(as_of: NaiveDate) -> Self {
        Self {
            transactions: demo_transactions(as_of),
            categories: demo_categories(),
        }
    }
}

impl TableSource for DemoSource {
    async fn fetch_table(&self, range: &str) -> Result<RawTable, SourceError> {
        match range {
            TRANSACTIONS_RANGE => Ok(self.transactions.clone()),
            CATEGORIES_RANGE => Ok(self.categories.clone()),
            other => Err(SourceError::Transport(format!("demo has no range {other}"))),
        }
    }
}

fn demo_categories() -> RawTable {
    let rows = [
        ("salary", "income"),
        ("rent", "expense"),
        ("groceries", "expense"),
        ("electricity", "expense, utilities"),
        ("water", "expense, utilities"),
        ("gym", "expense, sport"),
        ("dentist", "expense, medical"),
        ("pharmacy", "expense, medical"),
    ];
    let mut values = vec![vec!["ACCT".to_string(), "CAT".to_string()]];
    for (account, labels) in rows {
        values.push(vec![account.to_string(), labels.to_string()]);
    }
    RawTable::new(values)
}

fn demo_transactions(as_of: NaiveDate) -> RawTable {
    let mut values = vec![vec![
        "DT".to_string(),
        "AMNT".to_string(),
        "ACCT".to_string(),
    ]];

    // (day of month, amount, account) — one entry per month unless gated below
    let schedule: [(u32, f64, &str); 8] = [
        (1, 2600.0, "salary"),
        (3, -950.0, "rent"),
        (5, -45.0, "gym"),
        (8, -85.0, "groceries"),
        (12, -60.0, "electricity"),
        (14, -28.0, "water"),
        (18, -25.0, "pharmacy"),
        (22, -110.0, "groceries"),
    ];

    let mut months: Vec<(i32, u32)> = (1..=12).map(|m| (as_of.year() - 1, m)).collect();
    months.extend((1..=as_of.month()).map(|m| (as_of.year(), m)));

    for (year, month) in months {
        for (day, amount, account) in schedule {
            // Pharmacy only every other month, so the buckets differ in size.
            if account == "pharmacy" && month % 2 != 0 {
                continue;
            }
            let date = NaiveDate::from_ymd_opt(year, month, day).unwrap();
            if date > as_of {
                continue;
            }
            values.push(vec![
                date.format("%Y-%m-%d").to_string(),
                format!("{amount}"),
                account.to_string(),
            ]);
        }
        // Twice-yearly dental checkups.
        if month == 3 || month == 9 {
            let date = NaiveDate::from_ymd_opt(year, month, 16).unwrap();
            if date <= as_of {
                values.push(vec![
                    date.format("%Y-%m-%d").to_string(),
                    "-120".to_string(),
                    "dentist".to_string(),
                ]);
            }
        }
    }

    // The kind of noise a real export carries; the parser must skip these.
    values.push(vec!["pending".to_string(), "-10".to_string(), "rent".to_string()]);
    values.push(vec![
        format!("{}-01-05", as_of.year()),
        "n/a".to_string(),
        "rent".to_string(),
    ]);
    values.push(vec![
        format!("{}-01-06", as_of.year()),
        "-10".to_string(),
        "   ".to_string(),
    ]);

    RawTable::new(values)
}
