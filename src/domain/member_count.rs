//! Member-count snapshots: the log behind the growth chart.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::error::{RosterError, RosterResult};
use super::table::{Record, Table};

/// Only accepted date layout.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One (date, count) snapshot, one row of `member_count.csv`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberCount {
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    #[serde(rename = "MemberCount")]
    pub member_count: i64,
}

impl MemberCount {
    pub const fn new(date: NaiveDate, member_count: i64) -> Self {
        Self { date, member_count }
    }

    /// Parse a user-entered date strictly as `YYYY-MM-DD`.
    ///
    /// Out-of-range fields ("2024-13-40"), surrounding whitespace and
    /// trailing text are rejected.
    pub fn parse_date(input: &str) -> RosterResult<NaiveDate> {
        let invalid = || RosterError::InvalidDateFormat {
            input: input.to_string(),
        };
        // chrono skips leading blanks before numeric fields.
        if input.trim() != input {
            return Err(invalid());
        }
        NaiveDate::parse_from_str(input, DATE_FORMAT).map_err(|_| invalid())
    }
}

impl Record for MemberCount {
    const HEADER: &'static [&'static str] = &["Date", "MemberCount"];
    const TABLE_NAME: &'static str = "member_count";

    fn cells(&self) -> Vec<String> {
        vec![
            self.date.format(DATE_FORMAT).to_string(),
            self.member_count.to_string(),
        ]
    }
}

impl Table<MemberCount> {
    /// Chart points in log order: (date label, count).
    pub fn series(&self) -> Vec<(String, i64)> {
        self.rows()
            .iter()
            .map(|r| (r.date.format(DATE_FORMAT).to_string(), r.member_count))
            .collect()
    }
}
