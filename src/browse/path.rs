// src/browse/path.rs
//! Root-bounded navigation path kept as an ordered list of segments.

use crate::errors::{BrowseError, EngineResult};

/// Current location expressed as segments below a fixed root.
///
/// The string form is only a projection; ascend/descend work on segments so
/// trailing separators and root detection never need string surgery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavPath {
    root: String,
    segments: Vec<String>,
}

impl NavPath {
    /// Create a path positioned at `root`.
    pub fn new(root: &str) -> EngineResult<Self> {
        if !root.starts_with('/') {
            return Err(BrowseError::InvalidConfig(format!(
                "root must be an absolute path, got {:?}",
                root
            )));
        }
        let segments = split(root).map_err(BrowseError::InvalidConfig)?;
        Ok(Self {
            root: join("", &segments),
            segments: Vec::new(),
        })
    }

    /// Create a path positioned at `location`, which must be `root` or below it.
    pub fn at(root: &str, location: &str) -> EngineResult<Self> {
        let mut path = Self::new(root)?;
        let relative = path
            .relative(location)
            .map_err(BrowseError::InvalidConfig)?;
        path.segments = relative;
        Ok(path)
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Move to `location`, which must lie at or below the root.
    pub fn set(&mut self, location: &str) -> EngineResult<()> {
        self.segments = self
            .relative(location)
            .map_err(BrowseError::InvalidOperation)?;
        Ok(())
    }

    /// Drop the last segment. Returns false when already at the root.
    pub fn pop(&mut self) -> bool {
        self.segments.pop().is_some()
    }

    /// Last segment, `None` at the root.
    pub fn leaf(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// Full string form of the current location.
    pub fn as_string(&self) -> String {
        if self.segments.is_empty() {
            return self.root.clone();
        }
        let base = if self.root == "/" { "" } else { self.root.as_str() };
        join(base, &self.segments)
    }

    fn relative(&self, location: &str) -> Result<Vec<String>, String> {
        if !location.starts_with('/') {
            return Err(format!("{:?} is not an absolute path", location));
        }
        let root = split(&self.root)?;
        let target = split(location)?;
        if target.len() < root.len() || target[..root.len()] != root[..] {
            return Err(format!("{:?} is not under root {:?}", location, self.root));
        }
        Ok(target[root.len()..].to_vec())
    }
}

fn split(path: &str) -> Result<Vec<String>, String> {
    let mut out = Vec::new();
    for seg in path.split('/') {
        match seg {
            "" | "." => {}
            ".." => return Err(format!("{:?} contains a parent reference", path)),
            s => out.push(s.to_string()),
        }
    }
    Ok(out)
}

fn join(base: &str, segments: &[String]) -> String {
    if segments.is_empty() && base.is_empty() {
        return "/".to_string();
    }
    let mut s = base.to_string();
    for seg in segments {
        s.push('/');
        s.push_str(seg);
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_is_normalized() {
        let p = NavPath::new("/sdcard/").unwrap();
        assert_eq!(p.root(), "/sdcard");
        assert_eq!(p.as_string(), "/sdcard");
        assert!(p.is_root());

        let p = NavPath::new("//sdcard/./DCIM").unwrap();
        assert_eq!(p.root(), "/sdcard/DCIM");
    }

    #[test]
    fn test_filesystem_root() {
        let mut p = NavPath::new("/").unwrap();
        assert_eq!(p.as_string(), "/");
        p.set("/home/user").unwrap();
        assert_eq!(p.as_string(), "/home/user");
        assert!(p.pop());
        assert!(p.pop());
        assert_eq!(p.as_string(), "/");
        assert!(!p.pop());
    }

    #[test]
    fn test_at_requires_descendant() {
        assert!(NavPath::at("/sdcard", "/sdcard/DCIM").is_ok());
        assert!(NavPath::at("/sdcard", "/sdcard").is_ok());
        assert!(matches!(
            NavPath::at("/sdcard", "/other"),
            Err(BrowseError::InvalidConfig(_))
        ));
        // Prefix match on a whole segment only
        assert!(matches!(
            NavPath::at("/sdcard", "/sdcard2"),
            Err(BrowseError::InvalidConfig(_))
        ));
        assert!(matches!(
            NavPath::at("/sdcard", "/sdcard/../etc"),
            Err(BrowseError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_relative_root_rejected() {
        assert!(matches!(
            NavPath::new("sdcard"),
            Err(BrowseError::InvalidConfig(_))
        ));
        assert!(matches!(NavPath::new(""), Err(BrowseError::InvalidConfig(_))));
    }

    #[test]
    fn test_pop_never_goes_above_root() {
        let mut p = NavPath::at("/sdcard", "/sdcard/a/b").unwrap();
        assert_eq!(p.leaf(), Some("b"));
        assert!(p.pop());
        assert_eq!(p.as_string(), "/sdcard/a");
        assert!(p.pop());
        assert_eq!(p.as_string(), "/sdcard");
        assert!(!p.pop());
        assert_eq!(p.as_string(), "/sdcard");
        assert_eq!(p.leaf(), None);
    }

    #[test]
    fn test_set_outside_root_is_invalid_operation() {
        let mut p = NavPath::new("/sdcard").unwrap();
        assert!(matches!(
            p.set("/etc"),
            Err(BrowseError::InvalidOperation(_))
        ));
        assert!(p.is_root());
    }
}
