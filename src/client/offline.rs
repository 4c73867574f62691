//! Snapshot-backed photo source
//!
//! Serves the last fetched collection from disk. Deletes rewrite the
//! snapshot so they survive between CLI invocations.

use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use crate::error::{PagerError, Result};
use crate::model::Photo;
use crate::snapshot::{Snapshot, SnapshotReader, SnapshotWriter};

use super::PhotoSource;

/// Offline photo source over a snapshot file
pub struct SnapshotSource {
    path: PathBuf,

    /// Serializes read-modify-write on delete
    write_lock: Mutex<()>,
}

impl SnapshotSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Source over `{data_dir}/photos.snap`
    pub fn in_dir(data_dir: &Path) -> Self {
        Self::new(Snapshot::path_in(data_dir))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Snapshot> {
        SnapshotReader::read_optional(&self.path)?.ok_or_else(|| {
            PagerError::Fetch(format!(
                "No snapshot at {}; fetch the collection online first",
                self.path.display()
            ))
        })
    }
}

impl PhotoSource for SnapshotSource {
    fn fetch_photos(&self) -> Result<Vec<Photo>> {
        Ok(self.load()?.photos)
    }

    fn delete_photo(&self, id: u64) -> Result<()> {
        let _guard = self.write_lock.lock();

        let mut snapshot = self.load()?;
        let before = snapshot.photos.len();
        snapshot.photos.retain(|p| p.id != id);
        if snapshot.photos.len() != before {
            SnapshotWriter::write(&self.path, &snapshot)?;
        }
        Ok(())
    }

    fn describe(&self) -> String {
        format!("snapshot:{}", self.path.display())
    }
}
