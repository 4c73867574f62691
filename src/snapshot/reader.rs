//! Snapshot Reader
//!
//! Loads and verifies snapshot files.

use std::fs;
use std::path::Path;

use bytes::Buf;

use crate::error::{PagerError, Result};
use crate::model::Photo;

use super::{Snapshot, HEADER_SIZE, MAGIC, VERSION};

/// Reads snapshot files
pub struct SnapshotReader;

impl SnapshotReader {
    /// Read and verify the snapshot at `path`
    pub fn read(path: &Path) -> Result<Snapshot> {
        let bytes = fs::read(path)?;
        Self::decode(&bytes)
    }

    /// Read the snapshot at `path` if one exists
    pub fn read_optional(path: &Path) -> Result<Option<Snapshot>> {
        if !path.exists() {
            return Ok(None);
        }
        Self::read(path).map(Some)
    }

    /// Decode a complete frame
    pub fn decode(bytes: &[u8]) -> Result<Snapshot> {
        if bytes.len() < HEADER_SIZE {
            return Err(PagerError::SnapshotCorruption(format!(
                "Incomplete header: expected {} bytes, got {}",
                HEADER_SIZE,
                bytes.len()
            )));
        }

        let mut buf = bytes;

        let mut magic = [0u8; 4];
        buf.copy_to_slice(&mut magic);
        if &magic != MAGIC {
            return Err(PagerError::SnapshotCorruption(
                "Bad magic, not a snapshot file".to_string(),
            ));
        }

        let version = buf.get_u16_le();
        if version != VERSION {
            return Err(PagerError::SnapshotCorruption(format!(
                "Unsupported snapshot version: {}",
                version
            )));
        }

        let fetched_at = buf.get_u64_le();
        let expected_crc = buf.get_u32_le();
        let len = buf.get_u32_le() as usize;

        if buf.remaining() != len {
            return Err(PagerError::SnapshotCorruption(format!(
                "Payload length mismatch: header says {}, file has {}",
                len,
                buf.remaining()
            )));
        }

        let payload = &buf[..len];
        let actual_crc = crc32fast::hash(payload);
        if actual_crc != expected_crc {
            return Err(PagerError::SnapshotCorruption(format!(
                "CRC mismatch: expected {:08x}, got {:08x}",
                expected_crc, actual_crc
            )));
        }

        let photos: Vec<Photo> = bincode::deserialize(payload)?;
        Ok(Snapshot { fetched_at, photos })
    }
}
