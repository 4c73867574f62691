//! Protocol codec
//!
//! Encoding and decoding of the photo collection body.
//!
//! The top level must be a JSON array. Anything else (object, string,
//! number, null) is rejected as `InvalidInput` before any element is looked
//! at; a malformed element inside an array is a `Serialization` error.

use serde::Deserialize;
use serde_json::Value;

use crate::error::{PagerError, Result};
use crate::model::Photo;

/// Maximum accepted body size (32 MB)
pub const MAX_BODY_SIZE: usize = 32 * 1024 * 1024;

/// Encode a collection as a JSON array
pub fn encode_photos(photos: &[Photo]) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(photos)?)
}

/// Reject a body longer than `MAX_BODY_SIZE`
pub fn check_body_size(len: u64) -> Result<()> {
    if len > MAX_BODY_SIZE as u64 {
        return Err(PagerError::InvalidInput(format!(
            "Body too large: {} bytes (max {})",
            len, MAX_BODY_SIZE
        )));
    }
    Ok(())
}

/// Decode a collection from a raw response body
pub fn decode_photos(bytes: &[u8]) -> Result<Vec<Photo>> {
    check_body_size(bytes.len() as u64)?;

    let value: Value = serde_json::from_slice(bytes)?;
    decode_photos_value(&value)
}

/// Decode a collection from an already parsed document
pub fn decode_photos_value(value: &Value) -> Result<Vec<Photo>> {
    let elements = value.as_array().ok_or_else(|| {
        PagerError::InvalidInput(format!(
            "Expected an array of photos, got {}",
            json_kind(value)
        ))
    })?;

    elements
        .iter()
        .enumerate()
        .map(|(index, element)| {
            Photo::deserialize(element).map_err(|e| {
                PagerError::Serialization(format!("photo at index {}: {}", index, e))
            })
        })
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
