// src/browse/pipeline.rs
//! Filter and sort raw entries into the list the user sees.

use std::cmp::Ordering;

use crate::fs::{classify, Entry, ImageFormat};

/// Entry that survived filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    pub name: String,
    pub absolute_path: String,
    pub is_directory: bool,
}

impl DisplayItem {
    /// Image format for files, `None` for directories.
    pub fn format(&self) -> Option<ImageFormat> {
        if self.is_directory {
            None
        } else {
            ImageFormat::from_name(&self.name)
        }
    }
}

impl From<&Entry> for DisplayItem {
    fn from(e: &Entry) -> Self {
        Self {
            name: e.name.clone(),
            absolute_path: e.absolute_path.clone(),
            is_directory: e.is_directory,
        }
    }
}

/// Hidden names and non-image files are dropped; directories come first,
/// each group ordered by [`collate`]. Never fails, empty in gives empty out.
pub fn build_items(entries: &[Entry]) -> Vec<DisplayItem> {
    let mut items: Vec<DisplayItem> = entries
        .iter()
        .filter(|e| classify(e).is_listed())
        .map(DisplayItem::from)
        .collect();
    // sort_by is stable, equal names keep their read order
    items.sort_by(|a, b| {
        b.is_directory
            .cmp(&a.is_directory)
            .then_with(|| collate(&a.name, &b.name))
    });
    items
}

/// Name ordering: case-insensitive first, raw code points to break ties.
pub fn collate(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(items: &[DisplayItem]) -> Vec<&str> {
        items.iter().map(|i| i.name.as_str()).collect()
    }

    fn file(name: &str) -> Entry {
        Entry::file(name, format!("/sdcard/{}", name))
    }

    fn dir(name: &str) -> Entry {
        Entry::directory(name, format!("/sdcard/{}", name))
    }

    #[test]
    fn test_mixed_listing() {
        let entries = vec![
            file(".hidden.png"),
            dir("Photos"),
            file("b.jpg"),
            file("a.PNG"),
            file("doc.txt"),
        ];
        assert_eq!(names(&build_items(&entries)), vec!["Photos", "a.PNG", "b.jpg"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(build_items(&[]).is_empty());
    }

    #[test]
    fn test_directories_precede_files() {
        let entries = vec![
            file("a.jpg"),
            dir("zeta"),
            file("B.bmp"),
            dir("Alpha"),
            dir("Photos.jpg"),
        ];
        let items = build_items(&entries);
        assert_eq!(
            names(&items),
            vec!["Alpha", "Photos.jpg", "zeta", "a.jpg", "B.bmp"]
        );
        let first_file = items.iter().position(|i| !i.is_directory).unwrap();
        assert!(items[..first_file].iter().all(|i| i.is_directory));
        assert!(items[first_file..].iter().all(|i| !i.is_directory));
    }

    #[test]
    fn test_output_never_contains_filtered_names() {
        let entries = vec![
            file(".a.png"),
            dir(".git"),
            file("x.gif"),
            file("y.JPEG"),
            file("README"),
            dir("music"),
        ];
        for item in build_items(&entries) {
            assert!(!item.name.starts_with('.'));
            assert!(item.is_directory || item.format().is_some());
        }
    }

    #[test]
    fn test_collation_is_case_insensitive_with_tiebreak() {
        assert_eq!(collate("apple", "Banana"), Ordering::Less);
        assert_eq!(collate("A.png", "a.png"), Ordering::Less);
        assert_eq!(collate("a.png", "a.png"), Ordering::Equal);

        let entries = vec![file("b.png"), file("a.png"), file("A.png"), file("B.png")];
        assert_eq!(
            names(&build_items(&entries)),
            vec!["A.png", "a.png", "B.png", "b.png"]
        );
    }

    #[test]
    fn test_format_of_items() {
        let items = build_items(&[dir("Photos.jpg"), file("c.jpeg")]);
        assert_eq!(items[0].format(), None);
        assert_eq!(items[1].format(), Some(ImageFormat::Jpeg));
    }
}
