// src/browse/sink.rs
//! Outbound contract towards the host that opened the picker.

/// Terminal outcome of a browsing session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseResult {
    Selected(String),
    Cancelled,
}

/// Receives the session result. The engine calls exactly one method, once.
pub trait ResultSink: Send {
    fn deliver_selected(&mut self, path: &str);
    fn deliver_cancelled(&mut self);
}

/// Construction parameters recognized by [`BrowseEngine::open`].
///
/// [`BrowseEngine::open`]: super::BrowseEngine::open
pub struct PickerOptions {
    pub on_select: Box<dyn FnMut(&str) + Send>,
    pub on_close: Box<dyn FnMut() + Send>,
    /// Defaults to the root when unset
    pub initial_directory: Option<String>,
}

impl PickerOptions {
    pub fn new(
        on_select: impl FnMut(&str) + Send + 'static,
        on_close: impl FnMut() + Send + 'static,
    ) -> Self {
        Self {
            on_select: Box::new(on_select),
            on_close: Box::new(on_close),
            initial_directory: None,
        }
    }

    pub fn initial_directory(mut self, dir: impl Into<String>) -> Self {
        self.initial_directory = Some(dir.into());
        self
    }

    /// Split into the callback sink and the initial directory.
    pub fn into_parts(self) -> (CallbackSink, Option<String>) {
        (
            CallbackSink {
                on_select: self.on_select,
                on_close: self.on_close,
            },
            self.initial_directory,
        )
    }
}

/// Sink forwarding to a pair of closures.
pub struct CallbackSink {
    on_select: Box<dyn FnMut(&str) + Send>,
    on_close: Box<dyn FnMut() + Send>,
}

impl ResultSink for CallbackSink {
    fn deliver_selected(&mut self, path: &str) {
        (self.on_select)(path)
    }

    fn deliver_cancelled(&mut self) {
        (self.on_close)()
    }
}
