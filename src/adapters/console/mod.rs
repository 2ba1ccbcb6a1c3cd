//! Console Adapters - Terminal Input and Output
//!
//! Prompting, menu parsing and table rendering for the menu loop.
//! Everything is generic over async readers/writers so sessions can
//! be driven from stdin/stdout or from in-memory buffers.

pub mod menu;
pub mod prompt;
pub mod render;

pub use menu::{CHOICE_PROMPT, MenuChoice, menu_text};
pub use prompt::Prompter;
pub use render::render_rows;
