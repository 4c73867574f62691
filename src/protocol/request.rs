//! Request definitions
//!
//! Represents calls made against the photos API.

/// HTTP methods used by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Delete => "DELETE",
        }
    }
}

/// A call against the photos API
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// Fetch the whole collection
    ListPhotos,

    /// Delete one photo (the demo API does not persist this)
    DeletePhoto { id: u64 },
}

impl Request {
    /// Resource collection segment
    pub const PHOTOS_PATH: &'static str = "/photos";

    /// Get the request method
    pub fn method(&self) -> Method {
        match self {
            Request::ListPhotos => Method::Get,
            Request::DeletePhoto { .. } => Method::Delete,
        }
    }

    /// Path relative to the API root
    pub fn path(&self) -> String {
        match self {
            Request::ListPhotos => Self::PHOTOS_PATH.to_string(),
            Request::DeletePhoto { id } => format!("{}/{}", Self::PHOTOS_PATH, id),
        }
    }

    /// Absolute URL under `base_url` (trailing slashes ignored)
    pub fn url(&self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.path())
    }
}
