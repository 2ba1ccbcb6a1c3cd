//! Fee-payment records.
//!
//! `FeesPaid` is free-form text ("yes", "no", an amount); nothing here
//! interprets it. `ID` is meant to be a member ID but is never checked
//! against the member table.

use serde::{Deserialize, Serialize};

use super::member::MemberId;
use super::table::{Record, Table};

/// Value written by the monthly reset.
pub const FEES_UNPAID: &str = "no";

/// One fee-payment event, one row of `fees_data.csv`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeRecord {
    #[serde(rename = "ID")]
    pub id: MemberId,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "FeesPaid")]
    pub fees_paid: String,
}

impl FeeRecord {
    pub fn new(id: MemberId, name: impl Into<String>, fees_paid: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            fees_paid: fees_paid.into(),
        }
    }
}

impl Record for FeeRecord {
    const HEADER: &'static [&'static str] = &["ID", "Name", "FeesPaid"];
    const TABLE_NAME: &'static str = "fees";

    fn cells(&self) -> Vec<String> {
        vec![self.id.to_string(), self.name.clone(), self.fees_paid.clone()]
    }
}

impl Table<FeeRecord> {
    /// Set `FeesPaid` on every row with `id`. Returns rows touched.
    pub fn set_fees_paid(&mut self, id: MemberId, fees_paid: &str) -> usize {
        self.update_where(|r| r.id == id, |r| r.fees_paid = fees_paid.to_string())
    }

    /// Mark every row unpaid.
    pub fn reset_fees(&mut self) -> usize {
        self.update_all(|r| r.fees_paid = FEES_UNPAID.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ledger() -> Table<FeeRecord> {
        Table::from_rows(vec![
            FeeRecord::new(1, "Alice", "yes"),
            FeeRecord::new(2, "Bob", "40"),
            FeeRecord::new(1, "Alice", "yes"),
        ])
    }

    #[test]
    fn test_set_fees_paid_scope() {
        let mut table = ledger();
        assert_eq!(table.set_fees_paid(1, "no"), 2);
        let paid: Vec<&str> = table.rows().iter().map(|r| r.fees_paid.as_str()).collect();
        assert_eq!(paid, vec!["no", "40", "no"]);
    }

    #[test]
    fn test_reset_fees_is_idempotent() {
        let mut once = ledger();
        once.reset_fees();
        let mut twice = once.clone();
        twice.reset_fees();
        assert_eq!(once, twice);
        assert!(once.rows().iter().all(|r| r.fees_paid == FEES_UNPAID));
    }

    #[test]
    fn test_reset_fees_on_empty_table() {
        let mut table: Table<FeeRecord> = Table::empty();
        assert_eq!(table.reset_fees(), 0);
    }
}
