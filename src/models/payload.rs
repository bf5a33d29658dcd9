// SPDX-License-Identifier: MIT

//! Serde helpers for base64-encoded binary payloads.
//!
//! Absent payloads serialize as `null` (never as an empty string or empty
//! array), so absence is unambiguous in the snapshot document.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Deserializer, Serializer};

/// `Option<Vec<u8>>` as a base64 string or `null`.
pub mod base64_opt {
    use super::*;

    pub fn serialize<S>(value: &Option<Vec<u8>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(bytes) => serializer.serialize_some(&STANDARD.encode(bytes)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Vec<u8>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let encoded: Option<String> = Option::deserialize(deserializer)?;
        encoded
            .map(|s| STANDARD.decode(s).map_err(serde::de::Error::custom))
            .transpose()
    }
}

/// `Option<Vec<Vec<u8>>>` as an array of base64 strings or `null`.
pub mod base64_seq_opt {
    use super::*;

    pub fn serialize<S>(value: &Option<Vec<Vec<u8>>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(items) => {
                let encoded: Vec<String> = items.iter().map(|b| STANDARD.encode(b)).collect();
                serializer.serialize_some(&encoded)
            }
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Vec<Vec<u8>>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let encoded: Option<Vec<String>> = Option::deserialize(deserializer)?;
        encoded
            .map(|items| {
                items
                    .into_iter()
                    .map(|s| STANDARD.decode(s).map_err(serde::de::Error::custom))
                    .collect()
            })
            .transpose()
    }
}
