// src/ui/layout.rs
//! Layout computation for the UI panels.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Visibility state for optional panes.
#[derive(Debug, Clone, Copy)]
pub struct PaneVisibility {
    pub preview: bool,
}

impl Default for PaneVisibility {
    fn default() -> Self {
        Self { preview: true }
    }
}

impl PaneVisibility {
    pub fn toggle_preview(&mut self) {
        self.preview = !self.preview;
    }
}

/// Computed layout areas for rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComputedLayout {
    /// Back button, folder title, close hint
    pub header: Rect,
    pub list: Rect,
    /// Thumbnail pane (if visible)
    pub preview: Option<Rect>,
    /// One-line status bar
    pub status: Rect,
}

/// Compute the layout based on total area and pane visibility.
pub fn compute_layout(area: Rect, visibility: &PaneVisibility) -> ComputedLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);

    let (list, preview) = if visibility.preview {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(rows[1]);
        (cols[0], Some(cols[1]))
    } else {
        (rows[1], None)
    };

    ComputedLayout {
        header: rows[0],
        list,
        preview,
        status: rows[2],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_with_preview() {
        let area = Rect::new(0, 0, 100, 30);
        let layout = compute_layout(area, &PaneVisibility::default());
        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.status.height, 1);
        assert_eq!(layout.status.y, 29);
        let preview = layout.preview.unwrap();
        assert_eq!(layout.list.width + preview.width, 100);
        assert_eq!(layout.list.height, 26);
    }

    #[test]
    fn test_layout_without_preview() {
        let area = Rect::new(0, 0, 80, 24);
        let mut visibility = PaneVisibility::default();
        visibility.toggle_preview();
        let layout = compute_layout(area, &visibility);
        assert!(layout.preview.is_none());
        assert_eq!(layout.list.width, 80);
    }
}
