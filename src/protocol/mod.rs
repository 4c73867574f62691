//! Protocol Module
//!
//! The REST surface of the photos API and its JSON codec.
//!
//! ## Requests
//! ```text
//! ┌──────────┬──────────────────┬──────────────────────────────┐
//! │ Method   │ Path             │ Body                         │
//! ├──────────┼──────────────────┼──────────────────────────────┤
//! │ GET      │ /photos          │ -                            │
//! │ DELETE   │ /photos/{id}     │ -                            │
//! └──────────┴──────────────────┴──────────────────────────────┘
//! ```
//!
//! ### Collection Body
//! ```text
//! [ { "id": 1, "albumId": 1, "title": "...",
//!     "url": "...", "thumbnailUrl": "..." }, ... ]
//! ```
//!
//! ### Status Classes
//! - 2xx: OK
//! - 404: NOT_FOUND
//! - anything else: ERROR

mod request;
mod response;
mod codec;

pub use request::{Method, Request};
pub use response::Status;
pub use codec::{check_body_size, decode_photos, decode_photos_value, encode_photos, MAX_BODY_SIZE};
