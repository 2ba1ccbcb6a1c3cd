//! Ports Layer - Hexagonal Architecture Boundaries
//!
//! Defines the interfaces (traits) that the usecases layer requires
//! from the outside world. Adapters implement these traits.
//!
//! Port categories:
//! - `RosterRepository`: whole-table persistence for members, fees
//!   and the member-count log

pub mod repository;

pub use repository::RosterRepository;
