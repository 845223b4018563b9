// src/browse/mod.rs
//! Browse module - navigation state machine, listing pipeline and the
//! result contract towards the host.

pub mod engine;
pub mod path;
pub mod pipeline;
pub mod sink;

// Re-export commonly used types
pub use engine::{BrowseEngine, EngineSettings, ReadMode, Snapshot};
pub use path::NavPath;
pub use pipeline::{build_items, collate, DisplayItem};
pub use sink::{BrowseResult, CallbackSink, PickerOptions, ResultSink};
