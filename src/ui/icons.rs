// src/ui/icons.rs
//! Icon mappings for listed items.

use crate::browse::DisplayItem;

/// Get the appropriate icon for a folder or image item.
pub fn icon_for_item(item: &DisplayItem) -> &'static str {
    if item.is_directory {
        "\u{f07b}" // folder icon
    } else {
        "\u{f1c5}"
    }
}
