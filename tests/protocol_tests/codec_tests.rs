//! Codec Tests
//!
//! Tests for request routing and collection body decoding.

use photopager::model::Photo;
use photopager::protocol::{
    decode_photos, decode_photos_value, encode_photos, Method, Request, Status, MAX_BODY_SIZE,
};
use photopager::PagerError;
use serde_json::json;

// =============================================================================
// Request Tests
// =============================================================================

#[test]
fn test_list_request() {
    let req = Request::ListPhotos;
    assert_eq!(req.method(), Method::Get);
    assert_eq!(req.path(), "/photos");
    assert_eq!(
        req.url("http://jsonplaceholder.typicode.com"),
        "http://jsonplaceholder.typicode.com/photos"
    );
}

#[test]
fn test_delete_request() {
    let req = Request::DeletePhoto { id: 42 };
    assert_eq!(req.method(), Method::Delete);
    assert_eq!(req.method().as_str(), "DELETE");
    assert_eq!(req.path(), "/photos/42");
}

#[test]
fn test_url_ignores_trailing_slash() {
    let req = Request::DeletePhoto { id: 7 };
    assert_eq!(req.url("http://api.test/v1/"), "http://api.test/v1/photos/7");
}

// =============================================================================
// Status Tests
// =============================================================================

#[test]
fn test_status_classes() {
    assert_eq!(Status::from_code(200), Status::Ok);
    assert_eq!(Status::from_code(204), Status::Ok);
    assert_eq!(Status::from_code(404), Status::NotFound);
    assert_eq!(Status::from_code(500), Status::Error);
    assert_eq!(Status::from_code(301), Status::Error);
    assert!(Status::from_code(201).is_ok());
    assert!(!Status::from_code(403).is_ok());
}

// =============================================================================
// Body Decoding Tests
// =============================================================================

#[test]
fn test_decode_camel_case_fields() {
    let body = br#"[
        {
            "albumId": 1,
            "id": 1,
            "title": "accusamus beatae ad facilis cum similique qui sunt",
            "url": "https://via.placeholder.com/600/92c952",
            "thumbnailUrl": "https://via.placeholder.com/150/92c952"
        }
    ]"#;

    let photos = decode_photos(body).unwrap();
    assert_eq!(photos.len(), 1);
    assert_eq!(photos[0].album_id, 1);
    assert_eq!(photos[0].thumbnail_url, "https://via.placeholder.com/150/92c952");
}

#[test]
fn test_decode_empty_array() {
    assert!(decode_photos(b"[]").unwrap().is_empty());
}

#[test]
fn test_decode_object_is_invalid_input() {
    let result = decode_photos(br#"{"photos": []}"#);
    assert!(matches!(result, Err(PagerError::InvalidInput(_))));
}

#[test]
fn test_decode_malformed_json_is_serialization_error() {
    let result = decode_photos(b"[{\"id\": 1,");
    assert!(matches!(result, Err(PagerError::Serialization(_))));
}

#[test]
fn test_decode_bad_element_reports_index() {
    let value = json!([
        { "id": 1, "albumId": 1, "title": "ok", "url": "u", "thumbnailUrl": "t" },
        { "id": "two", "albumId": 1, "title": "bad", "url": "u", "thumbnailUrl": "t" }
    ]);
    match decode_photos_value(&value) {
        Err(PagerError::Serialization(message)) => assert!(message.contains("index 1")),
        other => panic!("Expected serialization error, got {:?}", other),
    }
}

#[test]
fn test_decode_oversized_body() {
    let body = vec![b' '; MAX_BODY_SIZE + 1];
    assert!(matches!(decode_photos(&body), Err(PagerError::InvalidInput(_))));
}

#[test]
fn test_encoded_body_uses_wire_field_names() {
    let encoded = encode_photos(&[Photo::new(3, 9, "x")]).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&encoded).unwrap();

    assert_eq!(value[0]["albumId"], 9);
    assert!(value[0].get("thumbnailUrl").is_some());
    assert_eq!(decode_photos(&encoded).unwrap(), vec![Photo::new(3, 9, "x")]);
}
