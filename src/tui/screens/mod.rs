//! TUI screen implementations.

pub mod entry;
pub mod help;

pub use entry::{EntryState, draw_entry};
pub use help::{HelpState, draw_help};
