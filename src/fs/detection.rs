// src/fs/detection.rs
//! Name-based classification of directory entries.
//!
//! The picker never looks inside a file: whether something is listed depends
//! only on its name and on whether it is a directory.

use std::path::Path;

use super::Entry;

/// Image formats the picker can hand back to the host.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ImageFormat {
    Jpeg,
    Png,
    Bmp,
}

impl ImageFormat {
    /// Look up a format from a file extension, ignoring ASCII case.
    pub fn from_extension(ext: &str) -> Option<Self> {
        let ext = ext.to_ascii_lowercase();
        match ext.as_str() {
            "jpg" | "jpeg" => Some(ImageFormat::Jpeg),
            "png" => Some(ImageFormat::Png),
            "bmp" => Some(ImageFormat::Bmp),
            _ => None,
        }
    }

    /// Format of a file name, if its extension is supported.
    pub fn from_name(name: &str) -> Option<Self> {
        Path::new(name)
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }
}

/// What the picker makes of one entry.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum EntryClass {
    /// Name starts with `.`; never shown.
    Hidden,
    /// Traversable folder.
    Directory,
    /// Selectable image.
    Image(ImageFormat),
    /// Any other file.
    Unsupported,
}

impl EntryClass {
    /// Whether entries of this class survive the filter.
    pub fn is_listed(self) -> bool {
        matches!(self, EntryClass::Directory | EntryClass::Image(_))
    }
}

/// Classify an entry. Hidden names win over everything, then directory-ness,
/// then the extension.
pub fn classify(entry: &Entry) -> EntryClass {
    if entry.name.starts_with('.') {
        return EntryClass::Hidden;
    }
    if entry.is_directory {
        return EntryClass::Directory;
    }
    match ImageFormat::from_name(&entry.name) {
        Some(format) => EntryClass::Image(format),
        None => EntryClass::Unsupported,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str) -> Entry {
        Entry::file(name, format!("/r/{}", name))
    }

    fn dir(name: &str) -> Entry {
        Entry::directory(name, format!("/r/{}", name))
    }

    #[test]
    fn test_extensions_ignore_case() {
        assert_eq!(classify(&file("a.PNG")), EntryClass::Image(ImageFormat::Png));
        assert_eq!(classify(&file("b.JpEg")), EntryClass::Image(ImageFormat::Jpeg));
        assert_eq!(classify(&file("c.jpg")), EntryClass::Image(ImageFormat::Jpeg));
        assert_eq!(classify(&file("d.bmp")), EntryClass::Image(ImageFormat::Bmp));
    }

    #[test]
    fn test_unsupported_files() {
        assert_eq!(classify(&file("doc.txt")), EntryClass::Unsupported);
        assert_eq!(classify(&file("png")), EntryClass::Unsupported);
        assert_eq!(classify(&file("photo.png.txt")), EntryClass::Unsupported);
        assert_eq!(classify(&file("anim.gif")), EntryClass::Unsupported);
    }

    #[test]
    fn test_hidden_wins() {
        assert_eq!(classify(&file(".hidden.png")), EntryClass::Hidden);
        assert_eq!(classify(&dir(".thumbnails")), EntryClass::Hidden);
    }

    #[test]
    fn test_directory_named_like_image_is_a_directory() {
        assert_eq!(classify(&dir("Photos.jpg")), EntryClass::Directory);
        assert_eq!(classify(&dir("notes.txt")), EntryClass::Directory);
    }
}
