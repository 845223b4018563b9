// src/app/state.rs
//! Application state management.

use std::sync::mpsc::Receiver;

use log::debug;
use ratatui::{layout::Rect, widgets::ListState, Frame};
use ratatui_image::{picker::Picker, protocol::Protocol, Resize};

use super::thumbnail::ThumbnailLoader;
use crate::{
    browse::{BrowseEngine, DisplayItem, Snapshot},
    errors::BrowseError,
    ui::{
        keybindings::{key_to_action, NavigationAction},
        layout::{compute_layout, PaneVisibility},
        widgets::{render_file_list, render_header, render_preview, render_status, thumbnail_area},
    },
};

use crossterm::event::KeyEvent;

/// Main application state. The engine owns the session; the app only keeps
/// the cursor and whatever the last snapshot said.
pub struct App {
    engine: BrowseEngine,
    snapshots: Receiver<Snapshot>,
    /// Last published engine state
    pub view: Snapshot,
    /// List widget state
    pub state: ListState,
    /// Currently highlighted index
    pub selected: usize,
    pub visibility: PaneVisibility,
    /// Last rejected operation, cleared on the next key
    pub message: Option<String>,
    /// Name to highlight once the pending listing lands
    focus: Option<String>,

    picker: Picker,
    thumbnails: ThumbnailLoader,
    /// Protocol built for (path, area)
    preview: Option<(String, Rect, Protocol)>,
}

impl App {
    /// Create a new application instance around a live session.
    pub fn new(mut engine: BrowseEngine, picker: Picker, visibility: PaneVisibility) -> Self {
        let snapshots = engine.subscribe();
        let view = engine.snapshot();
        let mut state = ListState::default();
        state.select(Some(0));

        let mut app = Self {
            engine,
            snapshots,
            view,
            state,
            selected: 0,
            visibility,
            message: None,
            focus: None,
            picker,
            thumbnails: ThumbnailLoader::new(),
            preview: None,
        };
        app.sync_thumbnail();
        app
    }

    /// Whether the session has produced its result.
    pub fn is_done(&self) -> bool {
        self.engine.is_terminated()
    }

    pub fn highlighted(&self) -> Option<&DisplayItem> {
        self.view.items.get(self.selected)
    }

    /// Handle a key event and return true if the app should quit.
    pub fn on_key(&mut self, key: KeyEvent) -> bool {
        self.message = None;

        let outcome = match key_to_action(&key) {
            NavigationAction::Down => {
                if self.selected + 1 < self.view.items.len() {
                    self.selected += 1;
                }
                Ok(())
            }
            NavigationAction::Up => {
                self.selected = self.selected.saturating_sub(1);
                Ok(())
            }
            NavigationAction::First => {
                self.selected = 0;
                Ok(())
            }
            NavigationAction::Last => {
                self.selected = self.view.items.len().saturating_sub(1);
                Ok(())
            }
            // The list on screen may belong to the folder being left
            NavigationAction::Open if self.view.loading => Err(BrowseError::Busy),
            NavigationAction::Open => match self.highlighted().cloned() {
                Some(item) if item.is_directory => self.engine.descend(&item),
                Some(item) => self.engine.select(&item).map(|_| ()),
                None => Ok(()),
            },
            NavigationAction::Back => self.engine.ascend(),
            NavigationAction::Refresh => self.engine.refresh(),
            NavigationAction::Cancel => self.engine.cancel().map(|_| ()),
            NavigationAction::TogglePreview => {
                self.visibility.toggle_preview();
                Ok(())
            }
            NavigationAction::None => Ok(()),
        };

        match outcome {
            Ok(()) => {}
            // Double taps while a read is in flight
            Err(BrowseError::Busy) => debug!("ignoring key while loading"),
            Err(e) => {
                debug!("rejected: {}", e);
                self.message = Some(e.to_string());
            }
        }

        self.tick();
        self.is_done()
    }

    /// Pull in finished reads, new snapshots and decoded thumbnails.
    pub fn tick(&mut self) {
        self.engine.poll_reads();
        while let Ok(next) = self.snapshots.try_recv() {
            self.apply_snapshot(next);
        }
        self.sync_thumbnail();
        self.thumbnails.poll();
        self.state.select(Some(self.selected));
    }

    fn apply_snapshot(&mut self, next: Snapshot) {
        if next.current_path != self.view.current_path {
            // Coming back up: highlight the folder we left
            self.focus = left_child(&self.view.current_path, &next.current_path);
            self.selected = 0;
        } else if self.focus.is_none() && !next.loading {
            // Same folder re-read: stay on the same name
            self.focus = self.highlighted().map(|i| i.name.clone());
        }
        if !next.loading
            && let Some(name) = self.focus.take()
            && let Some(pos) = next.items.iter().position(|i| i.name == name)
        {
            self.selected = pos;
        }
        self.view = next;
        self.selected = self.selected.min(self.view.items.len().saturating_sub(1));
    }

    fn sync_thumbnail(&mut self) {
        let wanted = if self.visibility.preview {
            self.highlighted()
                .filter(|i| !i.is_directory)
                .map(|i| i.absolute_path.clone())
        } else {
            None
        };
        match wanted {
            Some(path) => self.thumbnails.request(&path),
            None => self.thumbnails.clear(),
        }
    }

    /// Draw the application UI.
    pub fn draw(&mut self, f: &mut Frame<'_>) {
        let layout = compute_layout(f.area(), &self.visibility);

        render_header(f, layout.header, &self.view);
        render_file_list(
            f,
            layout.list,
            &self.view.items,
            self.view.loading,
            &mut self.state,
        );
        if let Some(area) = layout.preview {
            self.update_preview(area);
            let caption = self
                .highlighted()
                .filter(|i| !i.is_directory)
                .map(|i| i.name.as_str());
            let proto = self.preview.as_ref().map(|(_, _, p)| p);
            render_preview(f, area, caption, proto, self.thumbnails.failed());
        }
        render_status(f, layout.status, &self.view, self.message.as_deref());
    }

    fn update_preview(&mut self, area: Rect) {
        let Some(thumb) = self.thumbnails.current() else {
            self.preview = None;
            return;
        };
        if let Some((path, built_for, _)) = &self.preview
            && *path == thumb.path
            && *built_for == area
        {
            return;
        }

        let target = thumbnail_area(area);
        let proto_size = Rect::new(0, 0, target.width, target.height);
        self.preview = match self
            .picker
            .new_protocol(thumb.image.clone(), proto_size, Resize::Fit(None))
        {
            Ok(proto) => Some((thumb.path.clone(), area, proto)),
            Err(e) => {
                debug!("cannot render {}: {:?}", thumb.path, e);
                None
            }
        };
    }
}

/// Name of the child of `parent` on the way down to `from`, if `from` lies
/// below `parent`.
fn left_child(from: &str, parent: &str) -> Option<String> {
    from.strip_prefix(parent.trim_end_matches('/'))
        .and_then(|rest| rest.strip_prefix('/'))
        .and_then(|rest| rest.split('/').next())
        .filter(|name| !name.is_empty())
        .map(str::to_string)
}
