// src/ui/widgets/file_list.rs
//! Folder and image list widget.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::browse::DisplayItem;
use crate::ui::icons::icon_for_item;

/// MIME label shown next to images, `-` for folders.
pub fn kind_label(item: &DisplayItem) -> String {
    if item.is_directory {
        return "-".to_string();
    }
    mime_guess::from_path(&item.name)
        .first_raw()
        .unwrap_or("-")
        .to_string()
}

/// Render the listing of the current folder.
pub fn render_file_list(
    f: &mut Frame<'_>,
    area: Rect,
    items: &[DisplayItem],
    loading: bool,
    state: &mut ListState,
) {
    let block = Block::default().borders(Borders::ALL).title("Files");

    if items.is_empty() {
        let msg = if loading { "Loading…" } else { "No folders or images here" };
        f.render_widget(
            Paragraph::new(msg)
                .style(Style::default().fg(Color::DarkGray))
                .block(block),
            area,
        );
        return;
    }

    let rows: Vec<ListItem> = items
        .iter()
        .map(|item| {
            let name_style = if item.is_directory {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(vec![
                Span::raw(format!("{} ", icon_for_item(item))),
                Span::styled(format!("{:<30} ", item.name), name_style),
                Span::styled(kind_label(item), Style::default().fg(Color::DarkGray)),
            ]))
        })
        .collect();

    let list = List::new(rows)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol(">> ");

    f.render_stateful_widget(list, area, state);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_label() {
        let image = DisplayItem {
            name: "a.PNG".into(),
            absolute_path: "/r/a.PNG".into(),
            is_directory: false,
        };
        assert_eq!(kind_label(&image), "image/png");

        let folder = DisplayItem {
            name: "Photos.jpg".into(),
            absolute_path: "/r/Photos.jpg".into(),
            is_directory: true,
        };
        assert_eq!(kind_label(&folder), "-");
    }
}
