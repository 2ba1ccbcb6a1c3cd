//! Adapters Layer - Hexagonal Architecture Outer Ring
//!
//! Implements the port traits defined in `crate::ports` with concrete
//! file and terminal I/O. Each sub-module groups adapters by
//! infrastructure concern.
//!
//! Adapter categories:
//! - `console`: menu prompting and table rendering
//! - `persistence`: CSV table files

pub mod console;
pub mod persistence;
