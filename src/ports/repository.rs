//! Repository Port - Roster Table Persistence Interface
//!
//! Defines the trait the use cases need from storage: whole-table
//! load and whole-table save for each of the three roster tables.
//! Every call is independent; implementations must not cache rows
//! between calls.

use async_trait::async_trait;

use crate::domain::{FeeRecord, Member, MemberCount, Table};

/// Trait for roster table storage providers.
///
/// `load_*` on a table that has never been saved returns an empty
/// table rather than an error. `save_*` replaces the stored table
/// wholesale, header included.
#[async_trait]
pub trait RosterRepository: Send + Sync + 'static {
  /// Load the full member table.
  async fn load_members(&self) -> anyhow::Result<Table<Member>>;

  /// Replace the member table.
  async fn save_members(&self, table: &Table<Member>) -> anyhow::Result<()>;

  /// Load the full fee table.
  async fn load_fees(&self) -> anyhow::Result<Table<FeeRecord>>;

  /// Replace the fee table.
  async fn save_fees(&self, table: &Table<FeeRecord>) -> anyhow::Result<()>;

  /// Load the member-count log.
  async fn load_member_counts(&self) -> anyhow::Result<Table<MemberCount>>;

  /// Replace the member-count log.
  async fn save_member_counts(&self, table: &Table<MemberCount>) -> anyhow::Result<()>;

  /// Check that the backing store is usable (directory writable).
  async fn is_healthy(&self) -> bool;
}
