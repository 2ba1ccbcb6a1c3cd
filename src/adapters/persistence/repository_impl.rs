//! Repository Implementation - CSV Adapter for the Repository Port
//!
//! Wraps one `CsvTableFile` per roster table into a single struct that
//! implements `RosterRepository`. The use cases only know the trait,
//! never about files or CSV.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use tokio::fs;
use tracing::warn;

use super::csv_table::CsvTableFile;
use crate::config::StorageConfig;
use crate::domain::{FeeRecord, Member, MemberCount, Table};
use crate::ports::RosterRepository;

/// CSV-backed roster repository rooted at a data directory.
pub struct CsvRepository {
    /// Directory holding the three table files.
    data_dir: PathBuf,
    members: CsvTableFile<Member>,
    fees: CsvTableFile<FeeRecord>,
    member_counts: CsvTableFile<MemberCount>,
}

impl CsvRepository {
    /// Create a repository from explicit file names inside `data_dir`.
    pub fn new(
        data_dir: impl Into<PathBuf>,
        members_file: &str,
        fees_file: &str,
        member_count_file: &str,
    ) -> Self {
        let data_dir = data_dir.into();
        Self {
            members: CsvTableFile::new(data_dir.join(members_file)),
            fees: CsvTableFile::new(data_dir.join(fees_file)),
            member_counts: CsvTableFile::new(data_dir.join(member_count_file)),
            data_dir,
        }
    }

    /// Create a repository from the storage section of the config.
    ///
    /// Creates the data directory if it doesn't exist. The table files
    /// themselves are only created on first save.
    pub async fn from_config(config: &StorageConfig) -> Result<Self> {
        fs::create_dir_all(&config.data_dir)
            .await
            .with_context(|| format!("Failed to create data directory {}", config.data_dir))?;

        Ok(Self::new(
            &config.data_dir,
            &config.members_file,
            &config.fees_file,
            &config.member_count_file,
        ))
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[async_trait]
impl RosterRepository for CsvRepository {
    async fn load_members(&self) -> Result<Table<Member>> {
        self.members.load().await
    }

    async fn save_members(&self, table: &Table<Member>) -> Result<()> {
        self.members.save(table).await
    }

    async fn load_fees(&self) -> Result<Table<FeeRecord>> {
        self.fees.load().await
    }

    async fn save_fees(&self, table: &Table<FeeRecord>) -> Result<()> {
        self.fees.save(table).await
    }

    async fn load_member_counts(&self) -> Result<Table<MemberCount>> {
        self.member_counts.load().await
    }

    async fn save_member_counts(&self, table: &Table<MemberCount>) -> Result<()> {
        self.member_counts.save(table).await
    }

    async fn is_healthy(&self) -> bool {
        let probe = self.data_dir.join(".health_check");
        let result = fs::write(&probe, b"ok").await;
        let _ = fs::remove_file(&probe).await;
        if let Err(e) = &result {
            warn!(dir = %self.data_dir.display(), error = %e, "Data directory not writable");
        }
        result.is_ok()
    }
}
