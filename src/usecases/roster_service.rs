//! Roster Service - Member, Fee and Member-Count Operations
//!
//! Every operation is one independent round trip:
//! - load the whole table through the repository port
//! - edit it in memory
//! - save the whole table back (mutations only)
//!
//! Nothing is cached between calls. Keyed updates touch every
//! matching row and skip the save when nothing matched, so a miss
//! leaves the stored table untouched.

use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::domain::{
  ChartOptions, FeeRecord, Member, MemberCount, MemberId, RosterResult, Table,
  render_line_chart,
};
use crate::ports::RosterRepository;

/// Runs roster operations against a repository.
pub struct RosterService<R: RosterRepository> {
  /// Persistence port.
  repo: Arc<R>,
  /// Layout for the member-count chart.
  chart: ChartOptions,
}

impl<R: RosterRepository> RosterService<R> {
  /// Create a new service with the default chart layout.
  pub fn new(repo: Arc<R>) -> Self {
    Self::with_chart(repo, ChartOptions::default())
  }

  pub fn with_chart(repo: Arc<R>, chart: ChartOptions) -> Self {
    Self { repo, chart }
  }

  // ── Members ─────────────────────────────────────────────

  /// Append a member. Duplicate IDs are allowed.
  ///
  /// Returns the member count after the append.
  #[instrument(skip(self, member), fields(member_id = member.member_id))]
  pub async fn add_member(&self, member: Member) -> RosterResult<usize> {
    let mut table = self.repo.load_members().await?;
    table.append(member);
    self.repo.save_members(&table).await?;

    info!(rows = table.len(), "Member added");
    Ok(table.len())
  }

  /// The full member table.
  pub async fn members(&self) -> RosterResult<Table<Member>> {
    Ok(self.repo.load_members().await?)
  }

  /// Members whose name contains `query`, case-insensitively.
  #[instrument(skip(self))]
  pub async fn find_member_by_name(&self, query: &str) -> RosterResult<Vec<Member>> {
    let matches = self.repo.load_members().await?.find_by_name(query);
    debug!(matches = matches.len(), "Name search complete");
    Ok(matches)
  }

  /// Set the membership type on every member with `member_id`.
  ///
  /// Returns rows updated; zero means nothing was written.
  #[instrument(skip(self))]
  pub async fn change_membership_type_by_id(
    &self,
    member_id: MemberId,
    membership_type: &str,
  ) -> RosterResult<usize> {
    let mut table = self.repo.load_members().await?;
    let updated = table.set_membership_type(member_id, membership_type);

    if updated == 0 {
      debug!("No member with this ID");
      return Ok(0);
    }

    self.repo.save_members(&table).await?;
    info!(updated, "Membership type changed");
    Ok(updated)
  }

  // ── Fees ────────────────────────────────────────────────

  /// Append a fee-payment record. The ID is not checked against
  /// the member table.
  #[instrument(skip(self, record), fields(id = record.id))]
  pub async fn add_fees_record(&self, record: FeeRecord) -> RosterResult<usize> {
    let mut table = self.repo.load_fees().await?;
    table.append(record);
    self.repo.save_fees(&table).await?;

    info!(rows = table.len(), "Fee record added");
    Ok(table.len())
  }

  /// The full fee table.
  pub async fn fee_records(&self) -> RosterResult<Table<FeeRecord>> {
    Ok(self.repo.load_fees().await?)
  }

  /// Set `FeesPaid` on every record with `id`.
  ///
  /// Returns rows updated; zero means nothing was written.
  #[instrument(skip(self))]
  pub async fn change_fees_by_id(&self, id: MemberId, fees_paid: &str) -> RosterResult<usize> {
    let mut table = self.repo.load_fees().await?;
    let updated = table.set_fees_paid(id, fees_paid);

    if updated == 0 {
      debug!("No fee record with this ID");
      return Ok(0);
    }

    self.repo.save_fees(&table).await?;
    info!(updated, "Fees changed");
    Ok(updated)
  }

  /// Mark every fee record unpaid ("no"). Always saves.
  #[instrument(skip(self))]
  pub async fn set_all_fees_to_no(&self) -> RosterResult<usize> {
    let mut table = self.repo.load_fees().await?;
    let updated = table.reset_fees();
    self.repo.save_fees(&table).await?;

    info!(updated, "All fees reset");
    Ok(updated)
  }

  // ── Member-count log ────────────────────────────────────

  /// Validate `date_text` and append a snapshot.
  ///
  /// An invalid date fails with `InvalidDateFormat` before anything
  /// is loaded or written.
  #[instrument(skip(self))]
  pub async fn save_member_count(
    &self,
    date_text: &str,
    member_count: i64,
  ) -> RosterResult<MemberCount> {
    let date = MemberCount::parse_date(date_text)?;
    let record = MemberCount::new(date, member_count);
    self.record_member_count(record.clone()).await?;
    Ok(record)
  }

  /// Append an already-validated snapshot.
  #[instrument(skip(self, record), fields(date = %record.date, count = record.member_count))]
  pub async fn record_member_count(&self, record: MemberCount) -> RosterResult<usize> {
    let mut table = self.repo.load_member_counts().await?;
    table.append(record);
    self.repo.save_member_counts(&table).await?;

    info!(rows = table.len(), "Member count saved");
    Ok(table.len())
  }

  /// The full member-count log.
  pub async fn member_counts(&self) -> RosterResult<Table<MemberCount>> {
    Ok(self.repo.load_member_counts().await?)
  }

  /// Render the member-count chart, or `None` if the log is empty.
  #[instrument(skip(self))]
  pub async fn create_members_graph(&self) -> RosterResult<Option<String>> {
    let table = self.repo.load_member_counts().await?;
    Ok(render_line_chart(&table.series(), &self.chart))
  }
}
