// SPDX-License-Identifier: MIT

use std::sync::Once;

use chrono::{DateTime, Duration, TimeZone, Utc};
use tempfile::TempDir;
use trailbook_backup::{
    BackupEngine, Config, Destination, DestinationPhoto, MemoryStore, Trip,
};
use uuid::Uuid;

static TRACING: Once = Once::new();

/// Route the crate's tracing output through a test subscriber, once per
/// test binary. Filtered by RUST_LOG as usual.
#[allow(dead_code)]
pub fn init_tracing() {
    TRACING.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .init();
    });
}

/// Create an engine over a fresh in-memory store, writing snapshots into a
/// temporary directory. The `TempDir` must be kept alive for the test.
#[allow(dead_code)]
pub fn test_engine() -> (BackupEngine<MemoryStore>, TempDir) {
    init_tracing();
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = Config {
        app_version: "1.0.0-test".to_string(),
        export_dir: dir.path().to_path_buf(),
    };
    (BackupEngine::new(MemoryStore::new(), config), dir)
}

#[allow(dead_code)]
pub fn trip_start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 7, 1, 0, 0, 0).unwrap()
}

/// A destination with every payload kind populated.
#[allow(dead_code)]
pub fn full_destination(name: &str, day: i64) -> Destination {
    Destination {
        id: Uuid::new_v4(),
        name: name.to_string(),
        country: "Switzerland".to_string(),
        province: "Valais".to_string(),
        latitude: 46.0207,
        longitude: 7.7491,
        visit_date: trip_start() + Duration::days(day),
        notes: format!("Notes for {name}"),
        photo_data: Some(vec![0xFF, 0xD8, 0xFF]),
        photo_thumbnail_data: Some(vec![0xFF, 0xD8]),
        photos: vec![
            DestinationPhoto::new(vec![1, 2, 3], Some(vec![1])),
            DestinationPhoto::new(vec![4, 5, 6], Some(vec![4])),
        ],
        video_data: Some(vec![0x00, 0x00, 0x01]),
        category: "international".to_string(),
        is_favorite: true,
    }
}

/// A destination with no binary payloads and no province.
#[allow(dead_code)]
pub fn bare_destination(name: &str, day: i64) -> Destination {
    Destination {
        id: Uuid::new_v4(),
        name: name.to_string(),
        country: "Japan".to_string(),
        province: String::new(),
        latitude: 35.0116,
        longitude: 135.7681,
        visit_date: trip_start() + Duration::days(day),
        notes: String::new(),
        photo_data: None,
        photo_thumbnail_data: None,
        photos: vec![],
        video_data: None,
        category: "domestic".to_string(),
        is_favorite: false,
    }
}

#[allow(dead_code)]
pub fn trip(name: &str, destinations: Vec<Destination>) -> Trip {
    Trip {
        id: Uuid::new_v4(),
        name: name.to_string(),
        desc: format!("Description of {name}"),
        start_date: trip_start(),
        end_date: trip_start() + Duration::days(14),
        cover_photo_data: Some(vec![0xCA, 0xFE]),
        destinations,
    }
}

/// Field-for-field trip comparison, ignoring the store-assigned entity IDs.
#[allow(dead_code)]
pub fn assert_trips_equivalent(actual: &Trip, expected: &Trip) {
    assert_eq!(actual.name, expected.name);
    assert_eq!(actual.desc, expected.desc);
    assert_eq!(actual.start_date, expected.start_date);
    assert_eq!(actual.end_date, expected.end_date);
    assert_eq!(actual.cover_photo_data, expected.cover_photo_data);
    assert_eq!(actual.destinations.len(), expected.destinations.len());

    for (a, e) in actual.destinations.iter().zip(&expected.destinations) {
        assert_eq!(a.name, e.name);
        assert_eq!(a.country, e.country);
        assert_eq!(a.province, e.province);
        assert_eq!(a.latitude, e.latitude);
        assert_eq!(a.longitude, e.longitude);
        assert_eq!(a.visit_date, e.visit_date);
        assert_eq!(a.notes, e.notes);
        assert_eq!(a.photo_data, e.photo_data);
        assert_eq!(a.photo_thumbnail_data, e.photo_thumbnail_data);
        assert_eq!(a.photos, e.photos);
        assert_eq!(a.video_data, e.video_data);
        assert_eq!(a.category, e.category);
        assert_eq!(a.is_favorite, e.is_favorite);
    }
}
