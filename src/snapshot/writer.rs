//! Snapshot Writer
//!
//! Encodes a snapshot and replaces the file on disk.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use bytes::{BufMut, BytesMut};

use crate::error::{PagerError, Result};

use super::{Snapshot, HEADER_SIZE, MAGIC, VERSION};

/// Writes snapshot files
pub struct SnapshotWriter;

impl SnapshotWriter {
    /// Encode a snapshot into a complete frame
    pub fn encode(snapshot: &Snapshot) -> Result<BytesMut> {
        let payload = bincode::serialize(&snapshot.photos)?;
        let len = u32::try_from(payload.len()).map_err(|_| {
            PagerError::Serialization(format!(
                "Snapshot payload too large: {} bytes",
                payload.len()
            ))
        })?;

        let mut hasher = crc32fast::Hasher::new();
        hasher.update(&payload);
        let crc = hasher.finalize();

        let mut frame = BytesMut::with_capacity(HEADER_SIZE + payload.len());
        frame.put_slice(MAGIC);
        frame.put_u16_le(VERSION);
        frame.put_u64_le(snapshot.fetched_at);
        frame.put_u32_le(crc);
        frame.put_u32_le(len);
        frame.put_slice(&payload);

        Ok(frame)
    }

    /// Write `snapshot` to `path`, returning the number of bytes written
    ///
    /// The frame goes to a sibling temp file which is synced and renamed over
    /// the target, so readers never see a half-written snapshot.
    pub fn write(path: &Path, snapshot: &Snapshot) -> Result<u64> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let frame = Self::encode(snapshot)?;
        let tmp_path = path.with_extension("snap.tmp");

        if let Err(e) = Self::replace(&tmp_path, path, &frame) {
            let _ = fs::remove_file(&tmp_path);
            return Err(e.into());
        }

        tracing::debug!(
            "Wrote snapshot of {} photos ({} bytes) to {}",
            snapshot.photos.len(),
            frame.len(),
            path.display()
        );

        Ok(frame.len() as u64)
    }

    fn replace(tmp_path: &Path, path: &Path, frame: &[u8]) -> std::io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(tmp_path)?;
        file.write_all(frame)?;
        file.sync_all()?;
        drop(file);
        fs::rename(tmp_path, path)
    }
}
