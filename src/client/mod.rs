//! Client Module
//!
//! Where photo collections come from.
//!
//! ## Architecture
//! - `PhotoSource`: the seam the gallery talks to
//! - `HttpPhotoSource`: the REST API (blocking reqwest)
//! - `SnapshotSource`: the on-disk snapshot, for offline browsing
//! - `MemorySource`: an in-process collection, for tests and demos

mod source;
mod http;
mod offline;
mod memory;

pub use source::PhotoSource;
pub use http::HttpPhotoSource;
pub use offline::SnapshotSource;
pub use memory::MemorySource;
