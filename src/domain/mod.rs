//! Domain layer - Roster records and the operations over them.
//!
//! Pure in-memory logic: the three record kinds, the generic `Table`
//! they live in, user-input parsing, and the text chart renderer.
//! No file or terminal I/O here (hexagonal architecture inner ring).

pub mod chart;
pub mod error;
pub mod fee;
pub mod member;
pub mod member_count;
pub mod table;

// Re-export core types for convenience
pub use chart::{ChartOptions, render_line_chart};
pub use error::{RosterError, RosterResult, parse_integer};
pub use fee::{FEES_UNPAID, FeeRecord};
pub use member::{Member, MemberId};
pub use member_count::MemberCount;
pub use table::{Record, Table};
