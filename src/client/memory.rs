//! In-memory photo source

use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;

use crate::error::{PagerError, Result};
use crate::model::Photo;

use super::PhotoSource;

/// Photo source over a collection held in memory
///
/// Failures can be injected for either call to exercise the gallery's
/// error paths.
pub struct MemorySource {
    photos: Mutex<Vec<Photo>>,
    fetch_error: Mutex<Option<String>>,
    delete_error: Mutex<Option<String>>,
    fetch_count: AtomicUsize,
}

impl MemorySource {
    pub fn new(photos: Vec<Photo>) -> Self {
        Self {
            photos: Mutex::new(photos),
            fetch_error: Mutex::new(None),
            delete_error: Mutex::new(None),
            fetch_count: AtomicUsize::new(0),
        }
    }

    /// Source whose fetches always fail with `message`
    pub fn failing(message: impl Into<String>) -> Self {
        let source = Self::new(Vec::new());
        source.fail_fetches(message);
        source
    }

    /// Make subsequent fetches fail
    pub fn fail_fetches(&self, message: impl Into<String>) {
        *self.fetch_error.lock() = Some(message.into());
    }

    /// Make subsequent deletes fail
    pub fn fail_deletes(&self, message: impl Into<String>) {
        *self.delete_error.lock() = Some(message.into());
    }

    /// Number of fetches attempted so far
    pub fn fetch_count(&self) -> usize {
        self.fetch_count.load(Ordering::SeqCst)
    }

    /// Current contents
    pub fn photos(&self) -> Vec<Photo> {
        self.photos.lock().clone()
    }
}

impl PhotoSource for MemorySource {
    fn fetch_photos(&self) -> Result<Vec<Photo>> {
        self.fetch_count.fetch_add(1, Ordering::SeqCst);
        if let Some(message) = self.fetch_error.lock().clone() {
            return Err(PagerError::Fetch(message));
        }
        Ok(self.photos.lock().clone())
    }

    fn delete_photo(&self, id: u64) -> Result<()> {
        if let Some(message) = self.delete_error.lock().clone() {
            return Err(PagerError::Fetch(message));
        }
        self.photos.lock().retain(|p| p.id != id);
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
