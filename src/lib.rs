//! # photopager
//!
//! A photo collection browser core with:
//! - REST fetch of a `/photos` collection (GET, DELETE)
//! - Client-side pagination through pure reducers
//! - Stable sorting by album or title, album/title filters
//! - Stale-response protection for overlapping fetches
//! - Checksummed offline snapshots
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    View layer / CLI                          │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ actions / view()
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                       Gallery                                │
//! │        (Loading -> Ready | Failed, generation counter)       │
//! └──────────┬──────────────────────────────────┬───────────────┘
//!            │                                  │
//!            ▼                                  ▼
//!   ┌─────────────────┐                ┌─────────────────┐
//!   │   Pagination    │                │  PhotoSource    │
//!   │   (reducers)    │                │ HTTP / Snapshot │
//!   └─────────────────┘                └────────┬────────┘
//!                                               │
//!                                               ▼
//!                                      ┌─────────────────┐
//!                                      │ Protocol / Snap │
//!                                      │  (JSON / CRC)   │
//!                                      └─────────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod model;
pub mod pagination;
pub mod protocol;
pub mod snapshot;
pub mod client;
pub mod gallery;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{PagerError, Result};
pub use config::Config;
pub use model::{Filter, Photo, SortKey};
pub use pagination::PaginationState;
pub use gallery::{Gallery, GalleryView, LoadOutcome, Phase};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of photopager
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
