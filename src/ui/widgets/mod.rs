// src/ui/widgets/mod.rs
//! Custom widgets for the picker UI.

pub mod file_list;
pub mod header;
pub mod preview;

// Re-export widget rendering functions
pub use file_list::render_file_list;
pub use header::{render_header, render_status};
pub use preview::{render_preview, thumbnail_area};
