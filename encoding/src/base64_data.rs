//! Standard Base64 byte buffer.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::Deref;

/// A byte buffer that travels as standard Base64 text.
///
/// Audio sources arrive in this encoding; [`decode`](Base64Data::decode)
/// is the single point where transport text becomes raw PCM bytes. In
/// JSON and YAML the buffer serializes to its Base64 string form, and a
/// missing or null value deserializes as empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Base64Data(Vec<u8>);

impl Base64Data {
    /// Wraps already-decoded bytes.
    pub fn new(data: Vec<u8>) -> Self {
        Self(data)
    }

    /// Creates an empty buffer.
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// Decodes standard Base64 text.
    pub fn decode(s: &str) -> Result<Self, base64::DecodeError> {
        Ok(Self(STANDARD.decode(s)?))
    }

    /// Encodes the bytes as Base64 text.
    pub fn encode(&self) -> String {
        STANDARD.encode(&self.0)
    }

    /// Returns the decoded bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Consumes self and returns the decoded bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    /// Returns true if the buffer holds no bytes.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the decoded length in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for Base64Data {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.encode())
    }
}

impl Serialize for Base64Data {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.encode())
    }
}

impl<'de> Deserialize<'de> for Base64Data {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct Base64Visitor;

        impl<'de> serde::de::Visitor<'de> for Base64Visitor {
            type Value = Base64Data;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a base64-encoded string")
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Self::Value, E> {
                Base64Data::decode(v).map_err(serde::de::Error::custom)
            }

            fn visit_unit<E: serde::de::Error>(self) -> Result<Self::Value, E> {
                Ok(Base64Data::empty())
            }

            fn visit_none<E: serde::de::Error>(self) -> Result<Self::Value, E> {
                Ok(Base64Data::empty())
            }
        }

        deserializer.deserialize_any(Base64Visitor)
    }
}

impl Deref for Base64Data {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<[u8]> for Base64Data {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for Base64Data {
    fn from(data: Vec<u8>) -> Self {
        Self(data)
    }
}

impl From<&[u8]> for Base64Data {
    fn from(data: &[u8]) -> Self {
        Self(data.to_vec())
    }
}

impl From<Base64Data> for Vec<u8> {
    fn from(data: Base64Data) -> Self {
        data.0
    }
}
