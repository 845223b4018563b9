// src/fs/reader.rs
//! Directory listing capability and its local filesystem implementation.

use std::{fs, path::Path};

use log::trace;

use super::Entry;
use crate::errors::ReadError;

/// Lists the raw entries of a directory.
///
/// No ordering is guaranteed; callers sort for themselves.
pub trait DirectoryReader: Send + Sync {
    fn list(&self, path: &str) -> Result<Vec<Entry>, ReadError>;
}

/// Reader backed by `std::fs`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalReader;

impl LocalReader {
    pub fn new() -> Self {
        Self
    }
}

impl DirectoryReader for LocalReader {
    fn list(&self, path: &str) -> Result<Vec<Entry>, ReadError> {
        let dir = Path::new(path);
        let meta = fs::metadata(dir).map_err(|e| ReadError::from_io(path, &e))?;
        if !meta.is_dir() {
            return Err(ReadError::NotADirectory(path.to_string()));
        }

        let base = path.trim_end_matches('/');
        let entries = fs::read_dir(dir)
            .map_err(|e| ReadError::from_io(path, &e))?
            .filter_map(Result::ok)
            .filter_map(|e| {
                // A lossy name would not lead back to the file
                let Ok(name) = e.file_name().into_string() else {
                    trace!("skipping non-UTF-8 name {:?} in {}", e.file_name(), path);
                    return None;
                };
                let file_type = e.file_type().ok()?;
                // Symlinks count as whatever they point to; dangling ones are files
                let is_directory = if file_type.is_symlink() {
                    fs::metadata(e.path()).map(|m| m.is_dir()).unwrap_or(false)
                } else {
                    file_type.is_dir()
                };
                let absolute_path = format!("{}/{}", base, name);
                Some(Entry {
                    name,
                    absolute_path,
                    is_directory,
                })
            })
            .collect::<Vec<_>>();

        trace!("listed {} entries in {}", entries.len(), path);
        Ok(entries)
    }
}
