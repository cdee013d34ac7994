//! Post identifier - a 12-byte token written as 24 hex characters.

use std::fmt;
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use uuid::Uuid;

use crate::error::IdError;

/// Unique identifier of a stored post.
///
/// Layout matches a document-store object id: 4 bytes of big-endian
/// seconds since the epoch followed by 8 bytes of entropy. Only the
/// textual form (24 lowercase hex characters) crosses the HTTP boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PostId([u8; 12]);

impl PostId {
    /// Number of raw bytes in an identifier.
    pub const BYTES: usize = 12;

    pub fn from_bytes(bytes: [u8; 12]) -> Self {
        Self(bytes)
    }

    pub fn bytes(&self) -> [u8; 12] {
        self.0
    }

    /// Generate a fresh identifier for stores that do not assign their own.
    pub fn generate() -> Self {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs() as u32)
            .unwrap_or_default();

        let mut bytes = [0u8; 12];
        bytes[..4].copy_from_slice(&secs.to_be_bytes());
        bytes[4..].copy_from_slice(&Uuid::new_v4().as_bytes()[..8]);
        Self(bytes)
    }

    /// Parse the 24-character hex form.
    pub fn parse(s: &str) -> Result<Self, IdError> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != Self::BYTES * 2 {
            return Err(IdError::Length(chars.len()));
        }

        let mut bytes = [0u8; 12];
        for (slot, pair) in bytes.iter_mut().zip(chars.chunks(2)) {
            *slot = (hex_value(pair[0])? << 4) | hex_value(pair[1])?;
        }
        Ok(Self(bytes))
    }

    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{b:02x}")).collect()
    }
}

fn hex_value(c: char) -> Result<u8, IdError> {
    c.to_digit(16)
        .map(|d| d as u8)
        .ok_or(IdError::InvalidChar(c))
}

impl FromStr for PostId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for PostId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PostId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_mixed_case_hex() {
        let id = PostId::parse("507F1F77bcf86cd799439011").unwrap();
        assert_eq!(id.to_hex(), "507f1f77bcf86cd799439011");
        assert_eq!(id.bytes()[0], 0x50);
        assert_eq!(id.bytes()[11], 0x11);
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        assert_eq!(PostId::parse("not-a-valid-id"), Err(IdError::Length(14)));
        assert_eq!(PostId::parse(""), Err(IdError::Length(0)));
        assert!(PostId::parse("507f1f77bcf86cd7994390110").is_err());
    }

    #[test]
    fn test_parse_rejects_non_hex() {
        assert_eq!(
            PostId::parse("507f1f77bcf86cd79943901z"),
            Err(IdError::InvalidChar('z'))
        );
        // 24 chars, but multi-byte characters must not slip through
        assert!(PostId::parse("ééééééééééééééééééééééé1").is_err());
    }

    #[test]
    fn test_generate_is_unique_and_round_trips() {
        let a = PostId::generate();
        let b = PostId::generate();
        assert_ne!(a, b);
        assert_eq!(PostId::parse(&a.to_string()).unwrap(), a);
    }

    #[test]
    fn test_serializes_as_hex_string() {
        let id = PostId::parse("507f1f77bcf86cd799439011").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"507f1f77bcf86cd799439011\"");

        let err = serde_json::from_str::<PostId>("\"nope\"");
        assert!(err.is_err());
    }
}
