// src/browse/engine.rs
//! Browsing session state machine.
//!
//! A [`BrowseEngine`] owns one session: the root-bounded location, the last
//! listing shown to the user, the last read error and the terminal result.
//! Directory reads either run inline or on a short-lived background thread;
//! at most one navigation read is in flight per session.

use std::{
    sync::{
        mpsc::{self, Receiver, Sender},
        Arc,
    },
    thread,
    time::{Duration, Instant},
};

use log::{debug, info, warn};

use super::{
    path::NavPath,
    pipeline::{build_items, DisplayItem},
    sink::{BrowseResult, PickerOptions, ResultSink},
};
use crate::{
    errors::{BrowseError, EngineResult, ReadError},
    fs::{DirectoryReader, Entry},
};

/// Where directory reads run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReadMode {
    /// Block the calling operation until the read lands.
    #[default]
    Inline,
    /// Spawn a reader thread; results are picked up by [`BrowseEngine::poll_reads`].
    Background,
}

/// Tunables that do not change session semantics.
#[derive(Debug, Clone)]
pub struct EngineSettings {
    pub read_mode: ReadMode,
    /// Title shown while at the root
    pub root_label: String,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            read_mode: ReadMode::Inline,
            root_label: "Storage".to_string(),
        }
    }
}

/// Immutable view of the engine, published after every state change.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub current_path: String,
    pub title: String,
    pub items: Arc<[DisplayItem]>,
    pub last_error: Option<ReadError>,
    /// A read for `current_path` has not landed yet
    pub loading: bool,
    pub can_ascend: bool,
}

#[derive(Debug)]
enum Phase {
    Browsing,
    Terminated(BrowseResult),
}

struct ReadCompletion {
    generation: u64,
    path: String,
    outcome: Result<Vec<Entry>, ReadError>,
}

pub struct BrowseEngine {
    reader: Arc<dyn DirectoryReader>,
    sink: Box<dyn ResultSink>,
    settings: EngineSettings,

    path: NavPath,
    items: Arc<[DisplayItem]>,
    last_error: Option<ReadError>,
    phase: Phase,

    /// Sequence number of the latest issued read
    generation: u64,
    in_flight: Option<u64>,
    done_tx: Sender<ReadCompletion>,
    done_rx: Receiver<ReadCompletion>,

    subscribers: Vec<Sender<Snapshot>>,
}

impl BrowseEngine {
    /// Start a session at `initial_directory` with inline reads.
    pub fn initialize(
        reader: Arc<dyn DirectoryReader>,
        sink: Box<dyn ResultSink>,
        root: &str,
        initial_directory: &str,
    ) -> EngineResult<Self> {
        Self::with_settings(reader, sink, root, initial_directory, EngineSettings::default())
    }

    /// Start a session from host-supplied options; the initial directory
    /// defaults to the root.
    pub fn open(
        reader: Arc<dyn DirectoryReader>,
        root: &str,
        options: PickerOptions,
        settings: EngineSettings,
    ) -> EngineResult<Self> {
        let (sink, initial) = options.into_parts();
        let initial = initial.unwrap_or_else(|| root.to_string());
        Self::with_settings(reader, Box::new(sink), root, &initial, settings)
    }

    /// Start a session. Fails with `InvalidConfig` when `initial_directory`
    /// is not `root` or below it. A failing first read is not fatal.
    pub fn with_settings(
        reader: Arc<dyn DirectoryReader>,
        sink: Box<dyn ResultSink>,
        root: &str,
        initial_directory: &str,
        settings: EngineSettings,
    ) -> EngineResult<Self> {
        let path = NavPath::at(root, initial_directory)?;
        let (done_tx, done_rx) = mpsc::channel();
        info!(
            "browse session at {} (root {}, {:?} reads)",
            path.as_string(),
            path.root(),
            settings.read_mode
        );

        let mut engine = Self {
            reader,
            sink,
            settings,
            path,
            items: Arc::from(Vec::new()),
            last_error: None,
            phase: Phase::Browsing,
            generation: 0,
            in_flight: None,
            done_tx,
            done_rx,
            subscribers: Vec::new(),
        };
        engine.start_read();
        Ok(engine)
    }

    // ── Queries ────────────────────────────────────────────────────────────

    pub fn current_path(&self) -> String {
        self.path.as_string()
    }

    pub fn items(&self) -> &[DisplayItem] {
        &self.items
    }

    pub fn last_error(&self) -> Option<&ReadError> {
        self.last_error.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn is_terminated(&self) -> bool {
        matches!(self.phase, Phase::Terminated(_))
    }

    /// The terminal result, once the session has ended.
    pub fn result(&self) -> Option<&BrowseResult> {
        match &self.phase {
            Phase::Terminated(r) => Some(r),
            Phase::Browsing => None,
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            current_path: self.path.as_string(),
            title: self
                .path
                .leaf()
                .unwrap_or(self.settings.root_label.as_str())
                .to_string(),
            items: Arc::clone(&self.items),
            last_error: self.last_error.clone(),
            loading: self.in_flight.is_some(),
            can_ascend: !self.path.is_root(),
        }
    }

    /// Receive a snapshot now and after every later state change. The
    /// channel disconnects when the session ends.
    pub fn subscribe(&mut self) -> Receiver<Snapshot> {
        let (tx, rx) = mpsc::channel();
        if !self.is_terminated() {
            let _ = tx.send(self.snapshot());
            self.subscribers.push(tx);
        }
        rx
    }

    // ── Navigation ─────────────────────────────────────────────────────────

    /// Re-read the current directory. A refresh supersedes a read still in
    /// flight; the older result is discarded when it lands.
    pub fn refresh(&mut self) -> EngineResult<()> {
        self.ensure_browsing()?;
        self.start_read();
        Ok(())
    }

    /// Enter a directory item.
    pub fn descend(&mut self, item: &DisplayItem) -> EngineResult<()> {
        self.ensure_browsing()?;
        if !item.is_directory {
            return Err(BrowseError::InvalidOperation(format!(
                "cannot descend into file {}",
                item.absolute_path
            )));
        }
        self.ensure_idle()?;
        self.path.set(&item.absolute_path)?;
        debug!("descend to {}", item.absolute_path);
        self.start_read();
        Ok(())
    }

    /// Go to the parent directory; a no-op at the root.
    pub fn ascend(&mut self) -> EngineResult<()> {
        self.ensure_browsing()?;
        if self.path.is_root() {
            return Ok(());
        }
        self.ensure_idle()?;
        self.path.pop();
        debug!("ascend to {}", self.path.as_string());
        self.start_read();
        Ok(())
    }

    /// Pick an image and end the session.
    pub fn select(&mut self, item: &DisplayItem) -> EngineResult<BrowseResult> {
        self.ensure_browsing()?;
        if item.is_directory {
            return Err(BrowseError::InvalidOperation(format!(
                "directories are not selectable: {}",
                item.absolute_path
            )));
        }
        self.sink.deliver_selected(&item.absolute_path);
        Ok(self.terminate(BrowseResult::Selected(item.absolute_path.clone())))
    }

    /// End the session without a selection. Allowed while a read is in flight.
    pub fn cancel(&mut self) -> EngineResult<BrowseResult> {
        self.ensure_browsing()?;
        self.sink.deliver_cancelled();
        Ok(self.terminate(BrowseResult::Cancelled))
    }

    // ── Background reads ───────────────────────────────────────────────────

    /// Apply finished background reads. Returns true if the state changed.
    pub fn poll_reads(&mut self) -> bool {
        let mut changed = false;
        while let Ok(done) = self.done_rx.try_recv() {
            changed |= self.apply_read(done);
        }
        changed
    }

    /// Block until no read is in flight or `timeout` elapses. Returns true
    /// when idle.
    pub fn wait_idle(&mut self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        while self.in_flight.is_some() {
            let left = deadline.saturating_duration_since(Instant::now());
            match self.done_rx.recv_timeout(left) {
                Ok(done) => {
                    self.apply_read(done);
                }
                Err(_) => return false,
            }
        }
        true
    }

    // ── Internals ──────────────────────────────────────────────────────────

    fn ensure_browsing(&self) -> EngineResult<()> {
        match self.phase {
            Phase::Browsing => Ok(()),
            Phase::Terminated(_) => Err(BrowseError::SessionClosed),
        }
    }

    fn ensure_idle(&self) -> EngineResult<()> {
        match self.in_flight {
            Some(_) => Err(BrowseError::Busy),
            None => Ok(()),
        }
    }

    fn start_read(&mut self) {
        self.generation += 1;
        let generation = self.generation;
        let path = self.path.as_string();

        match self.settings.read_mode {
            ReadMode::Inline => {
                let outcome = self.reader.list(&path);
                self.apply_read(ReadCompletion {
                    generation,
                    path,
                    outcome,
                });
            }
            ReadMode::Background => {
                self.in_flight = Some(generation);
                self.publish();

                let reader = Arc::clone(&self.reader);
                let tx = self.done_tx.clone();
                thread::spawn(move || {
                    let outcome = reader.list(&path);
                    // Receiver is gone once the engine is dropped
                    let _ = tx.send(ReadCompletion {
                        generation,
                        path,
                        outcome,
                    });
                });
            }
        }
    }

    fn apply_read(&mut self, done: ReadCompletion) -> bool {
        if self.is_terminated() {
            debug!("session closed, dropping read of {}", done.path);
            return false;
        }
        if done.generation != self.generation {
            debug!(
                "dropping stale read #{} of {} (latest #{})",
                done.generation, done.path, self.generation
            );
            return false;
        }

        self.in_flight = None;
        match done.outcome {
            Ok(entries) => {
                self.items = Arc::from(build_items(&entries));
                self.last_error = None;
                debug!("{}: {} items", done.path, self.items.len());
            }
            Err(e) => {
                // Keep the previous listing so the user can navigate away
                warn!("read of {} failed: {}", done.path, e);
                self.last_error = Some(e);
            }
        }
        self.publish();
        true
    }

    fn terminate(&mut self, result: BrowseResult) -> BrowseResult {
        info!("browse session ended: {:?}", result);
        self.in_flight = None;
        self.phase = Phase::Terminated(result.clone());
        // Dropping the senders disconnects every subscriber
        self.subscribers.clear();
        result
    }

    fn publish(&mut self) {
        if self.subscribers.is_empty() {
            return;
        }
        let snap = self.snapshot();
        self.subscribers.retain(|tx| tx.send(snap.clone()).is_ok());
    }
}
