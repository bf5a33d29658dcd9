// SPDX-License-Identifier: MIT

//! Store-side trip and destination entities.
//!
//! These are the records the external store persists. The snapshot wire
//! format lives in [`crate::models::package`]; projection between the two is
//! handled by the service layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A trip aggregate with its ordered destinations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    /// Store entity ID
    pub id: Uuid,
    /// Display name (non-empty)
    pub name: String,
    /// Free-form description (may be empty)
    pub desc: String,
    /// Trip start date
    pub start_date: DateTime<Utc>,
    /// Trip end date (no ordering constraint against start_date at this layer)
    pub end_date: DateTime<Utc>,
    /// Cover image bytes
    pub cover_photo_data: Option<Vec<u8>>,
    /// Destinations in display order
    pub destinations: Vec<Destination>,
}

impl Trip {
    pub fn destination_count(&self) -> usize {
        self.destinations.len()
    }
}

/// A visited place within a trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Destination {
    /// Store entity ID
    pub id: Uuid,
    pub name: String,
    pub country: String,
    /// Province/state; empty string means "not recorded"
    pub province: String,
    /// Latitude in degrees (not range-validated here)
    pub latitude: f64,
    /// Longitude in degrees (not range-validated here)
    pub longitude: f64,
    pub visit_date: DateTime<Utc>,
    /// Notes (may be empty)
    pub notes: String,
    /// Legacy single photo
    pub photo_data: Option<Vec<u8>>,
    /// Legacy single photo thumbnail
    pub photo_thumbnail_data: Option<Vec<u8>>,
    /// Multi-photo collection; each image paired with its thumbnail
    pub photos: Vec<DestinationPhoto>,
    /// Video clip
    pub video_data: Option<Vec<u8>>,
    /// Free-form classification ("domestic", "international", ...)
    pub category: String,
    pub is_favorite: bool,
}

/// One photo in a destination's multi-photo collection.
///
/// The snapshot wire format stores images and thumbnails as two parallel,
/// index-aligned arrays; internally each image carries its own thumbnail so
/// alignment cannot drift. The thumbnail stays optional because imported
/// snapshots may carry fewer thumbnails than images.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DestinationPhoto {
    pub image: Vec<u8>,
    pub thumbnail: Option<Vec<u8>>,
}

impl DestinationPhoto {
    pub fn new(image: Vec<u8>, thumbnail: Option<Vec<u8>>) -> Self {
        Self { image, thumbnail }
    }
}
