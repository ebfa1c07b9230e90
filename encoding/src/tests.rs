//! Tests for the Base64 transport type.

use super::*;

#[test]
fn test_base64_decode_valid() {
    let data = Base64Data::decode("aGVsbG8gd29ybGQ=").unwrap();
    assert_eq!(data.as_bytes(), b"hello world");
}

#[test]
fn test_base64_decode_empty() {
    let data = Base64Data::decode("").unwrap();
    assert!(data.is_empty());
    assert_eq!(data.len(), 0);
}

#[test]
fn test_base64_decode_invalid() {
    assert!(Base64Data::decode("not valid base64!!!").is_err());
}

#[test]
fn test_base64_encode_decode_round_trip() {
    let data = Base64Data::from(b"raw pcm samples".as_slice());
    let text = data.encode();
    assert_eq!(Base64Data::decode(&text).unwrap(), data);
}

#[test]
fn test_base64_display() {
    let data = Base64Data::from(b"hello".as_slice());
    assert_eq!(data.to_string(), "aGVsbG8=");
}

#[test]
fn test_base64_marshal_json() {
    let data = Base64Data::from(b"hello world".as_slice());
    let json = serde_json::to_string(&data).unwrap();
    assert_eq!(json, r#""aGVsbG8gd29ybGQ=""#);
}

#[test]
fn test_base64_unmarshal_json_valid() {
    let data: Base64Data = serde_json::from_str(r#""aGVsbG8gd29ybGQ=""#).unwrap();
    assert_eq!(data.as_bytes(), b"hello world");
}

#[test]
fn test_base64_unmarshal_json_null() {
    let data: Base64Data = serde_json::from_str("null").unwrap();
    assert!(data.is_empty());
}

#[test]
fn test_base64_unmarshal_json_invalid_type() {
    let result: Result<Base64Data, _> = serde_json::from_str("123");
    assert!(result.is_err());
}

#[test]
fn test_base64_json_round_trip() {
    let original = Base64Data::from(vec![0u8, 1, 2, 255]);
    let json = serde_json::to_string(&original).unwrap();
    let restored: Base64Data = serde_json::from_str(&json).unwrap();
    assert_eq!(original, restored);
}

#[test]
fn test_base64_into_bytes() {
    let data = Base64Data::new(vec![1, 2, 3]);
    let bytes: Vec<u8> = data.into_bytes();
    assert_eq!(bytes, vec![1, 2, 3]);
}

#[test]
fn test_base64_deref_slice() {
    let data = Base64Data::from(vec![10u8, 20, 30]);
    assert_eq!(&data[..2], &[10, 20]);
    assert_eq!(data.as_ref(), &[10, 20, 30]);
}
