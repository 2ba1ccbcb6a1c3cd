//! Use Cases Layer - Application Business Logic
//!
//! Orchestrates domain logic with port interfaces to implement
//! the roster's workflows.
//!
//! Use cases:
//! - `RosterService`: member, fee and member-count operations
//! - `MenuSession`: the interactive numbered menu

pub mod menu_session;
pub mod roster_service;

pub use menu_session::MenuSession;
pub use roster_service::RosterService;
