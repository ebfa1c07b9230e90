//! Transport encoding for audio sources.
//!
//! Raw PCM chunks travel as text: standard Base64 strings, either
//! standing alone or embedded in JSON/YAML request documents.
//! [`Base64Data`] is the byte buffer type that carries that encoding.
//!
//! # Example
//!
//! ```rust
//! use wavcast_encoding::Base64Data;
//!
//! let chunk = Base64Data::decode("AAAA").unwrap();
//! assert_eq!(chunk.len(), 3);
//!
//! // Serializes to base64 text in JSON
//! let data = Base64Data::from(b"hello world".as_slice());
//! let json = serde_json::to_string(&data).unwrap();
//! assert_eq!(json, r#""aGVsbG8gd29ybGQ=""#);
//! ```

mod base64_data;

pub use base64_data::Base64Data;

#[cfg(test)]
mod tests;
