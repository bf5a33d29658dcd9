// SPDX-License-Identifier: MIT

//! The portable snapshot document.
//!
//! Field names and nesting mirror the JSON layout that shipped with the
//! original app, so snapshots remain interchangeable across versions:
//! camelCase keys, RFC 3339 timestamps, binary payloads as base64 strings
//! (`null` when absent).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::payload;

/// Top-level snapshot document: manifest plus the exported trips.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupPackage {
    /// When the snapshot was produced
    pub exported_at: DateTime<Utc>,
    /// Version of the producing application
    pub app_version: String,
    /// Declared trip count; equals `trips.len()` at encode time but is not
    /// re-validated on decode, so consumers must not trust it
    pub total_trips: usize,
    /// Trips in export order (order is not significant on import)
    pub trips: Vec<TripRecord>,
}

/// One exported trip: metadata, destinations, and a per-record manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripRecord {
    pub trip: TripInfo,
    pub destinations: Vec<DestinationRecord>,
    pub export_date: DateTime<Utc>,
    pub app_version: String,
}

/// Flattened trip metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripInfo {
    pub name: String,
    pub desc: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    #[serde(default, with = "payload::base64_opt")]
    pub cover_photo_data: Option<Vec<u8>>,
}

/// Flattened destination with inline binary payloads.
///
/// `photo_datas` and `photo_thumbnail_datas` are parallel, index-aligned
/// arrays. A length mismatch is not rejected here; the importer pairs them
/// up leniently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DestinationRecord {
    pub name: String,
    pub country: String,
    pub province: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub visit_date: DateTime<Utc>,
    pub notes: String,
    #[serde(default, with = "payload::base64_opt")]
    pub photo_data: Option<Vec<u8>>,
    #[serde(default, with = "payload::base64_opt")]
    pub photo_thumbnail_data: Option<Vec<u8>>,
    #[serde(default, with = "payload::base64_seq_opt")]
    pub photo_datas: Option<Vec<Vec<u8>>>,
    #[serde(default, with = "payload::base64_seq_opt")]
    pub photo_thumbnail_datas: Option<Vec<Vec<u8>>>,
    #[serde(default, with = "payload::base64_opt")]
    pub video_data: Option<Vec<u8>>,
    pub category: String,
    pub is_favorite: bool,
}
