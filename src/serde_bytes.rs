//! Serde helpers for byte strings
//!
//! Key and signature material crosses the library boundary as hex strings;
//! these modules plug into `#[serde(with = ...)]` field attributes.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Serialize/deserialize `Vec<u8>` as a hex string
pub mod hex_vec {
    use super::*;

    pub fn serialize<S>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&hex::encode(bytes))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        hex::decode(&s).map_err(serde::de::Error::custom)
    }
}
