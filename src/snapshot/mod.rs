//! Snapshot Module
//!
//! Local copy of the last fetched collection, for browsing without the API.
//!
//! ## Responsibilities
//! - Persist a fetched collection atomically (temp file + rename)
//! - CRC32 checksum over the payload for corruption detection
//! - Reject truncated files and foreign/unknown versions
//!
//! ## File Format
//! ```text
//! ┌───────────┬─────────────┬────────────────┬─────────┬─────────┬─────────┐
//! │ MAGIC (4) │ VERSION (2) │ FETCHED_AT (8) │ CRC (4) │ Len (4) │ Data    │
//! └───────────┴─────────────┴────────────────┴─────────┴─────────┴─────────┘
//! ```
//! All integers little-endian. `Data` is the bincode encoding of the
//! photo list.

mod writer;
mod reader;

pub use writer::SnapshotWriter;
pub use reader::SnapshotReader;

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::model::Photo;

/// File magic
pub const MAGIC: &[u8; 4] = b"PPSN";

/// Current format version
pub const VERSION: u16 = 1;

/// magic (4) + version (2) + fetched_at (8) + crc (4) + len (4)
pub const HEADER_SIZE: usize = 22;

/// File name inside the data directory
pub const SNAPSHOT_FILENAME: &str = "photos.snap";

/// A collection plus the time it was fetched
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// Unix millis
    pub fetched_at: u64,

    pub photos: Vec<Photo>,
}

impl Snapshot {
    /// Wrap a freshly fetched collection, stamped with the current time
    pub fn now(photos: Vec<Photo>) -> Self {
        let fetched_at = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        Self { fetched_at, photos }
    }

    /// Snapshot location for a data directory
    pub fn path_in(data_dir: &Path) -> PathBuf {
        data_dir.join(SNAPSHOT_FILENAME)
    }
}
