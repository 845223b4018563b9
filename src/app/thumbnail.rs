// src/app/thumbnail.rs
//! Background thumbnail decoding for the preview pane.

use std::{
    sync::mpsc::{self, Receiver, Sender},
    thread,
};

use anyhow::{Context, Result};
use image::DynamicImage;
use log::{debug, warn};

/// Longest side of a decoded thumbnail, in pixels.
pub const THUMBNAIL_MAX: u32 = 512;

/// A decoded thumbnail together with the file it came from.
#[derive(Debug, Clone)]
pub struct Thumbnail {
    pub path: String,
    pub image: DynamicImage,
}

/// Decode `path` and shrink it to fit [`THUMBNAIL_MAX`].
pub fn load_thumbnail(path: &str) -> Result<DynamicImage> {
    let img = image::open(path).with_context(|| format!("decoding {}", path))?;
    Ok(img.thumbnail(THUMBNAIL_MAX, THUMBNAIL_MAX))
}

type Decoded = (String, Result<DynamicImage>);

/// Decodes thumbnails on a single worker thread.
///
/// Requests queue up while a decode runs; the worker skips to the newest one
/// before starting the next decode, so scrolling through a folder never has
/// more than one image in memory being decoded.
pub struct ThumbnailLoader {
    req_tx: Sender<String>,
    done_rx: Receiver<Decoded>,
    wanted: Option<String>,
    current: Option<Thumbnail>,
    /// Path whose decode failed
    failed: Option<String>,
}

impl Default for ThumbnailLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ThumbnailLoader {
    pub fn new() -> Self {
        Self::with_decoder(load_thumbnail)
    }

    /// Loader running `decode` instead of [`load_thumbnail`].
    pub fn with_decoder<F>(decode: F) -> Self
    where
        F: Fn(&str) -> Result<DynamicImage> + Send + 'static,
    {
        let (req_tx, req_rx) = mpsc::channel::<String>();
        let (done_tx, done_rx) = mpsc::channel();

        thread::spawn(move || {
            // Ends when the loader (and its sender) is dropped
            while let Ok(first) = req_rx.recv() {
                let path = req_rx.try_iter().last().unwrap_or(first);
                let result = decode(&path);
                if done_tx.send((path, result)).is_err() {
                    break;
                }
            }
        });

        Self {
            req_tx,
            done_rx,
            wanted: None,
            current: None,
            failed: None,
        }
    }

    /// Ask for the thumbnail of `path`. Repeated requests are free.
    pub fn request(&mut self, path: &str) {
        if self.wanted.as_deref() == Some(path) {
            return;
        }
        self.wanted = Some(path.to_string());
        if self.current.as_ref().is_some_and(|t| t.path == path)
            || self.failed.as_deref() == Some(path)
        {
            return;
        }
        if self.req_tx.send(path.to_string()).is_err() {
            warn!("thumbnail worker is gone, no preview for {}", path);
        }
    }

    /// Nothing to preview.
    pub fn clear(&mut self) {
        self.wanted = None;
    }

    /// Collect finished decodes. Returns true if what the preview should show
    /// changed.
    pub fn poll(&mut self) -> bool {
        let mut changed = false;
        while let Ok((path, result)) = self.done_rx.try_recv() {
            if self.wanted.as_deref() != Some(path.as_str()) {
                debug!("dropping thumbnail of {}, no longer highlighted", path);
                continue;
            }
            match result {
                Ok(image) => {
                    self.current = Some(Thumbnail { path, image });
                }
                Err(e) => {
                    warn!("no thumbnail: {:#}", e);
                    self.failed = Some(path);
                }
            }
            changed = true;
        }
        changed
    }

    /// Thumbnail of the highlighted image, once decoded.
    pub fn current(&self) -> Option<&Thumbnail> {
        self.current
            .as_ref()
            .filter(|t| self.wanted.as_deref() == Some(t.path.as_str()))
    }

    /// Whether the highlighted image could not be decoded.
    pub fn failed(&self) -> bool {
        self.wanted.is_some() && self.failed == self.wanted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgb};
    use std::{
        sync::{
            atomic::{AtomicUsize, Ordering},
            Arc, Mutex,
        },
        time::{Duration, Instant},
    };
    use tempfile::tempdir;

    fn wait_for(loader: &mut ThumbnailLoader) -> bool {
        let deadline = Instant::now() + Duration::from_secs(5);
        while Instant::now() < deadline {
            if loader.poll() {
                return true;
            }
            thread::sleep(Duration::from_millis(10));
        }
        false
    }

    #[test]
    fn test_thumbnail_is_bounded() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("wide.png");
        ImageBuffer::from_pixel(1024, 256, Rgb([200u8, 10, 10]))
            .save(&path)
            .unwrap();

        let img = load_thumbnail(&path.to_string_lossy()).unwrap();
        assert_eq!(img.width(), THUMBNAIL_MAX);
        assert_eq!(img.height(), 128);
    }

    #[test]
    fn test_loader_delivers_requested_image() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("a.bmp");
        ImageBuffer::from_pixel(8, 8, Rgb([0u8, 0, 0])).save(&path).unwrap();
        let path = path.to_string_lossy().into_owned();

        let mut loader = ThumbnailLoader::new();
        loader.request(&path);
        assert!(wait_for(&mut loader));
        assert_eq!(loader.current().map(|t| t.path.as_str()), Some(path.as_str()));
        assert!(!loader.failed());

        loader.clear();
        assert!(loader.current().is_none());
    }

    #[test]
    fn test_broken_file_is_reported_as_failed() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("broken.jpg");
        std::fs::write(&path, b"not a jpeg").unwrap();
        let path = path.to_string_lossy().into_owned();
        assert!(load_thumbnail(&path).is_err());

        let mut loader = ThumbnailLoader::new();
        loader.request(&path);
        assert!(wait_for(&mut loader));
        assert!(loader.current().is_none());
        assert!(loader.failed());

        loader.clear();
        assert!(!loader.failed());
        // Coming back to it does not decode again
        loader.request(&path);
        assert!(loader.failed());
    }

    #[test]
    fn test_rapid_requests_decode_one_at_a_time() {
        let (started_tx, started_rx) = mpsc::channel::<String>();
        let (gate_tx, gate_rx) = mpsc::channel::<()>();
        let gate_rx = Mutex::new(gate_rx);
        let active = Arc::new(AtomicUsize::new(0));
        let peak = Arc::new(AtomicUsize::new(0));
        let (active_in, peak_in) = (active.clone(), peak.clone());

        let mut loader = ThumbnailLoader::with_decoder(move |path| {
            let now = active_in.fetch_add(1, Ordering::SeqCst) + 1;
            peak_in.fetch_max(now, Ordering::SeqCst);
            started_tx.send(path.to_string()).unwrap();
            let _ = gate_rx.lock().unwrap().recv();
            active_in.fetch_sub(1, Ordering::SeqCst);
            Ok(DynamicImage::new_rgb8(1, 1))
        });

        loader.request("/r/0.png");
        let first = started_rx.recv_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(first, "/r/0.png");

        // Scroll through the rest while the first decode is stuck
        for i in 1..40 {
            loader.request(&format!("/r/{}.png", i));
        }
        gate_tx.send(()).unwrap();
        let second = started_rx.recv_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(second, "/r/39.png");
        gate_tx.send(()).unwrap();

        assert!(wait_for(&mut loader));
        assert_eq!(
            loader.current().map(|t| t.path.as_str()),
            Some("/r/39.png")
        );
        assert!(started_rx.try_recv().is_err());
        assert_eq!(peak.load(Ordering::SeqCst), 1);
    }
}
