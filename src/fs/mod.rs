// src/fs/mod.rs
//! Filesystem module - directory reading and name-based classification.

pub mod detection;
pub mod reader;

// Re-export commonly used types
pub use detection::{classify, EntryClass, ImageFormat};
pub use reader::{DirectoryReader, LocalReader};

/// One filesystem object as returned by a directory read.
///
/// A fresh set is produced by every read; entries are never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Base name, no separators
    pub name: String,
    /// Fully qualified location
    pub absolute_path: String,
    pub is_directory: bool,
}

impl Entry {
    /// Create a directory entry.
    pub fn directory(name: impl Into<String>, absolute_path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            absolute_path: absolute_path.into(),
            is_directory: true,
        }
    }

    /// Create a file entry.
    pub fn file(name: impl Into<String>, absolute_path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            absolute_path: absolute_path.into(),
            is_directory: false,
        }
    }
}
