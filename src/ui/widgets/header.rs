// src/ui/widgets/header.rs
//! Title bar and status line.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::browse::Snapshot;

/// Render the back button, the folder title and the close hint.
pub fn render_header(f: &mut Frame<'_>, area: Rect, view: &Snapshot) {
    f.render_widget(Block::default().borders(Borders::ALL), area);

    let inner = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([
            Constraint::Length(10),
            Constraint::Min(1),
            Constraint::Length(5),
        ])
        .split(area);

    // Greyed out at the root, where going back does nothing
    let back_style = if view.can_ascend {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    f.render_widget(Paragraph::new(Span::styled("◀ Back", back_style)), inner[0]);

    f.render_widget(
        Paragraph::new(Span::styled(
            view.title.to_uppercase(),
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        inner[1],
    );

    f.render_widget(
        Paragraph::new(Span::styled("✕", Style::default().add_modifier(Modifier::BOLD)))
            .alignment(Alignment::Right),
        inner[2],
    );
}

/// Render the status line: read error, loading marker or key hints.
pub fn render_status(f: &mut Frame<'_>, area: Rect, view: &Snapshot, message: Option<&str>) {
    let line = if let Some(err) = &view.last_error {
        Line::from(vec![
            Span::styled(" ⚠ ", Style::default().fg(Color::Yellow)),
            Span::styled(err.to_string(), Style::default().fg(Color::Yellow)),
            Span::styled(
                "  (showing previous listing)",
                Style::default().fg(Color::DarkGray),
            ),
        ])
    } else if view.loading {
        Line::from(Span::styled(
            format!(" Reading {}…", view.current_path),
            Style::default().fg(Color::Cyan),
        ))
    } else if let Some(msg) = message {
        Line::from(Span::styled(format!(" {}", msg), Style::default().fg(Color::Red)))
    } else {
        Line::from(Span::styled(
            format!(
                " {}  ·  ⏎ open  ⌫ back  r refresh  p preview  q cancel",
                view.current_path
            ),
            Style::default().fg(Color::DarkGray),
        ))
    };
    f.render_widget(Paragraph::new(line), area);
}
