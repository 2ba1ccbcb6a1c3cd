//! Member records and the operations the roster runs over them.

use serde::{Deserialize, Serialize};

use super::table::{Record, Table};

/// Member identifier. Not unique: two rows may share an ID.
pub type MemberId = i64;

/// One gym member, one row of `gym_data.csv`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    #[serde(rename = "MemberID")]
    pub member_id: MemberId,
    #[serde(rename = "Name")]
    pub name: String,
    /// Unchecked; any integer is accepted.
    #[serde(rename = "Age")]
    pub age: i64,
    #[serde(rename = "MobileNumber")]
    pub mobile_number: String,
    #[serde(rename = "Membership_Type")]
    pub membership_type: String,
}

impl Member {
    pub fn new(
        member_id: MemberId,
        name: impl Into<String>,
        age: i64,
        mobile_number: impl Into<String>,
        membership_type: impl Into<String>,
    ) -> Self {
        Self {
            member_id,
            name: name.into(),
            age,
            mobile_number: mobile_number.into(),
            membership_type: membership_type.into(),
        }
    }

    /// Case-insensitive, unanchored substring match on the name.
    ///
    /// An empty query matches every member.
    pub fn name_contains(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(&query.to_lowercase())
    }
}

impl Record for Member {
    const HEADER: &'static [&'static str] =
        &["MemberID", "Name", "Age", "MobileNumber", "Membership_Type"];
    const TABLE_NAME: &'static str = "members";

    fn cells(&self) -> Vec<String> {
        vec![
            self.member_id.to_string(),
            self.name.clone(),
            self.age.to_string(),
            self.mobile_number.clone(),
            self.membership_type.clone(),
        ]
    }
}

impl Table<Member> {
    /// Members whose name contains `query`, ignoring case.
    pub fn find_by_name(&self, query: &str) -> Vec<Member> {
        self.select(|m| m.name_contains(query))
    }

    /// Set the membership type on every row with `member_id`.
    pub fn set_membership_type(&mut self, member_id: MemberId, membership_type: &str) -> usize {
        self.update_where(
            |m| m.member_id == member_id,
            |m| m.membership_type = membership_type.to_string(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Table<Member> {
        Table::from_rows(vec![
            Member::new(1, "Anna", 28, "555-0101", "Gold"),
            Member::new(2, "Dana", 35, "555-0102", "Silver"),
            Member::new(3, "Bob", 41, "555-0103", "Gold"),
        ])
    }

    #[test]
    fn test_find_by_name_is_unanchored_and_case_insensitive() {
        let names: Vec<String> = roster()
            .find_by_name("AN")
            .into_iter()
            .map(|m| m.name)
            .collect();
        assert_eq!(names, vec!["Anna", "Dana"]);
    }

    #[test]
    fn test_find_by_name_miss() {
        assert!(roster().find_by_name("zed").is_empty());
    }

    #[test]
    fn test_set_membership_type_updates_duplicates() {
        let mut table = roster();
        table.append(Member::new(3, "Bobby", 12, "555-0104", "Junior"));

        assert_eq!(table.set_membership_type(3, "Platinum"), 2);
        assert_eq!(table.rows()[2].membership_type, "Platinum");
        assert_eq!(table.rows()[3].membership_type, "Platinum");
        assert_eq!(table.rows()[0].membership_type, "Gold");
    }

    #[test]
    fn test_set_membership_type_unknown_id() {
        let mut table = roster();
        assert_eq!(table.set_membership_type(99, "Platinum"), 0);
        assert_eq!(table, roster());
    }

    #[test]
    fn test_cells_follow_header() {
        let member = Member::new(7, "Alice", 30, "555", "Gold");
        assert_eq!(member.cells().len(), Member::HEADER.len());
        assert_eq!(member.cells()[4], "Gold");
    }
}
