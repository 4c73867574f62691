//! Photo source trait

use crate::error::Result;
use crate::model::Photo;

/// Backend able to list and delete photos
///
/// Implementations are shared across the worker thread spawned by
/// `Gallery::spawn_load`, hence `Send + Sync`.
pub trait PhotoSource: Send + Sync {
    /// Fetch the whole collection, in source order
    fn fetch_photos(&self) -> Result<Vec<Photo>>;

    /// Delete one photo; unknown ids are not an error
    fn delete_photo(&self, id: u64) -> Result<()>;

    /// Short label for logs
    fn describe(&self) -> String;
}
