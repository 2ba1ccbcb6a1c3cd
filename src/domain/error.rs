//! Roster errors surfaced to the menu layer.
//!
//! Adapters work in `anyhow::Result` and attach context; by the time an
//! error reaches a use case it is folded into `RosterError::Storage`.
//! The other variants are user-input failures the menu can recover from.

use thiserror::Error;

/// A convenience `Result` for roster operations.
pub type RosterResult<T> = Result<T, RosterError>;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum RosterError {
    /// A member-count date did not parse as `YYYY-MM-DD`.
    #[error("Invalid date format: {input:?}. Please use the format (YYYY-MM-DD).")]
    InvalidDateFormat { input: String },

    /// A typed field (ID, age, count) was not a whole number.
    #[error("Invalid {field}: {input:?} is not a whole number.")]
    Parse { field: &'static str, input: String },

    /// Reading or writing a backing table failed.
    #[error("Storage error: {0:#}")]
    Storage(#[from] anyhow::Error),
}

impl RosterError {
    /// Whether the menu can report this error and keep running.
    pub const fn is_user_input(&self) -> bool {
        matches!(self, Self::InvalidDateFormat { .. } | Self::Parse { .. })
    }
}

/// Parse a whole number typed into a prompt.
///
/// Surrounding whitespace is ignored; anything else that is not an
/// integer yields `RosterError::Parse` naming the field.
pub fn parse_integer(field: &'static str, input: &str) -> RosterResult<i64> {
    input.trim().parse().map_err(|_| RosterError::Parse {
        field,
        input: input.to_string(),
    })
}
