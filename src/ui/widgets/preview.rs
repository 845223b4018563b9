// src/ui/widgets/preview.rs
//! Thumbnail preview of the highlighted image.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use ratatui_image::{protocol::Protocol, Image};

/// Square area inside the preview block, centered vertically.
pub fn thumbnail_area(area: Rect) -> Rect {
    let inner = Block::default().borders(Borders::ALL).inner(area);
    let side = inner.width.min(inner.height);
    let offset_y = inner.y + (inner.height - side) / 2;
    Rect::new(inner.x, offset_y, inner.width, side)
}

/// Text shown in place of the thumbnail.
fn placeholder(caption: Option<&str>, failed: bool) -> &'static str {
    match (caption, failed) {
        (None, _) => "",
        (Some(_), true) => "No preview",
        (Some(_), false) => "Loading…",
    }
}

/// Render the preview panel. `proto` must have been built for
/// [`thumbnail_area`] of the same `area`; `failed` means the highlighted
/// image could not be decoded.
pub fn render_preview(
    f: &mut Frame<'_>,
    area: Rect,
    caption: Option<&str>,
    proto: Option<&Protocol>,
    failed: bool,
) {
    let title = caption.unwrap_or("Preview");
    f.render_widget(Block::default().borders(Borders::ALL).title(title), area);

    match proto {
        Some(proto) => f.render_widget(Image::new(proto), thumbnail_area(area)),
        None => {
            let hint = placeholder(caption, failed);
            f.render_widget(
                Paragraph::new(hint)
                    .style(Style::default().fg(Color::DarkGray))
                    .wrap(Wrap { trim: true }),
                Block::default().borders(Borders::ALL).inner(area),
            );
        }
    }
}
