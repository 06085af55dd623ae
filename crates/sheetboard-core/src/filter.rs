//! The account/month ledger filter.

use crate::fmt;
use crate::transactions::TransactionRecord;

/// A partial filter offered to [`LedgerFilter::toggle`], typically carrying
/// the field a click on one ledger cell selects.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterPatch {
    pub account: Option<String>,
    pub month: Option<String>,
}

impl FilterPatch {
    pub fn account(value: impl Into<String>) -> Self {
        Self {
            account: Some(value.into()),
            ..Self::default()
        }
    }

    pub fn month(value: impl Into<String>) -> Self {
        Self {
            month: Some(value.into()),
            ..Self::default()
        }
    }
}

/// The active ledger filter: a toggle-only value object over a fixed field
/// set.
///
/// Offering a value for a field that is already set clears the field,
/// whatever the offered value — selecting the same filter twice returns to
/// the unfiltered view. Values are never validated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LedgerFilter {
    pub account: Option<String>,
    pub month: Option<String>,
}

impl LedgerFilter {
    pub fn toggle(mut self, patches: impl IntoIterator<Item = FilterPatch>) -> Self {
        for patch in patches {
            if let Some(account) = patch.account {
                self.account = match self.account {
                    None => Some(account),
                    Some(_) => None,
                };
            }
            if let Some(month) = patch.month {
                self.month = match self.month {
                    None => Some(month),
                    Some(_) => None,
                };
            }
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.account.is_none() && self.month.is_none()
    }

    /// Does a transaction pass the active filter? Months compare by
    /// `YYYY-MM` key.
    pub fn matches(&self, record: &TransactionRecord) -> bool {
        let account_ok = self
            .account
            .as_deref()
            .is_none_or(|account| account == record.account);
        let month_ok = self
            .month
            .as_deref()
            .is_none_or(|month| month == fmt::month(record.date));
        account_ok && month_ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn toggling_the_same_field_twice_clears_it() {
        let filter = LedgerFilter::default()
            .toggle([FilterPatch::account("A")])
            .toggle([FilterPatch::account("A")]);
        assert!(filter.is_empty());
    }

    #[test]
    fn a_set_field_clears_even_for_a_different_value() {
        let filter = LedgerFilter::default()
            .toggle([FilterPatch::account("A")])
            .toggle([FilterPatch::account("B")]);
        assert_eq!(filter.account, None);
    }

    #[test]
    fn fields_toggle_independently() {
        let filter = LedgerFilter::default()
            .toggle([FilterPatch::account("A")])
            .toggle([FilterPatch::month("2023-04")]);
        assert_eq!(filter.account.as_deref(), Some("A"));
        assert_eq!(filter.month.as_deref(), Some("2023-04"));

        let filter = filter.toggle([FilterPatch::account("A")]);
        assert_eq!(filter.account, None);
        assert_eq!(filter.month.as_deref(), Some("2023-04"));
    }

    #[test]
    fn multiple_patches_apply_in_order() {
        let filter =
            LedgerFilter::default().toggle([FilterPatch::account("A"), FilterPatch::month("2023-04")]);
        assert_eq!(filter.account.as_deref(), Some("A"));
        assert_eq!(filter.month.as_deref(), Some("2023-04"));
    }

    #[test]
    fn matches_by_account_and_month_key() {
        let record = TransactionRecord {
            date: NaiveDate::from_ymd_opt(2023, 4, 12).unwrap(),
            amount: -10.0,
            account: "rent".to_string(),
        };
        assert!(LedgerFilter::default().matches(&record));
        assert!(LedgerFilter::default().toggle([FilterPatch::account("rent")]).matches(&record));
        assert!(!LedgerFilter::default().toggle([FilterPatch::account("gym")]).matches(&record));
        assert!(LedgerFilter::default().toggle([FilterPatch::month("2023-04")]).matches(&record));
        assert!(!LedgerFilter::default().toggle([FilterPatch::month("2023-05")]).matches(&record));
    }
}
