//! Response definitions
//!
//! Classifies HTTP status codes returned by the API.

/// Response status classes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok,
    NotFound,
    Error,
}

impl Status {
    /// Classify a raw HTTP status code
    pub fn from_code(code: u16) -> Self {
        match code {
            200..=299 => Status::Ok,
            404 => Status::NotFound,
            _ => Status::Error,
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Status::Ok)
    }
}
