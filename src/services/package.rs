// SPDX-License-Identifier: MIT

//! Snapshot document encoding and decoding.
//!
//! Encoding is deterministic: field order follows the struct declarations
//! and the manifest timestamp is injected by the caller, so identical input
//! produces identical bytes. Output is pretty-printed UTF-8 JSON for human
//! inspection (serde_json never escapes slashes).

use chrono::{DateTime, Utc};

use crate::error::{BackupError, Result};
use crate::models::{BackupPackage, TripRecord};

/// Serialize trip records plus a manifest into snapshot bytes.
pub fn encode(
    trips: Vec<TripRecord>,
    app_version: &str,
    exported_at: DateTime<Utc>,
) -> Result<Vec<u8>> {
    let package = BackupPackage {
        exported_at,
        app_version: app_version.to_string(),
        total_trips: trips.len(),
        trips,
    };

    serde_json::to_vec_pretty(&package).map_err(|e| BackupError::WriteFailed(e.to_string()))
}

/// Parse snapshot bytes into a package.
///
/// Structural validation only: a package with zero trips decodes fine, and
/// `totalTrips` is not checked against the actual list length.
pub fn decode(bytes: &[u8]) -> Result<BackupPackage> {
    serde_json::from_slice(bytes).map_err(|e| BackupError::DecodeFailed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TripInfo;
    use chrono::TimeZone;

    fn record(name: &str) -> TripRecord {
        TripRecord {
            trip: TripInfo {
                name: name.to_string(),
                desc: String::new(),
                start_date: Utc.with_ymd_and_hms(2025, 7, 1, 0, 0, 0).unwrap(),
                end_date: Utc.with_ymd_and_hms(2025, 7, 14, 0, 0, 0).unwrap(),
                cover_photo_data: None,
            },
            destinations: vec![],
            export_date: Utc.with_ymd_and_hms(2025, 8, 1, 12, 0, 0).unwrap(),
            app_version: "1.0.0".to_string(),
        }
    }

    #[test]
    fn test_encode_is_deterministic() {
        let exported_at = Utc.with_ymd_and_hms(2025, 8, 1, 12, 0, 0).unwrap();
        let a = encode(vec![record("Alps 2025")], "1.0.0", exported_at).unwrap();
        let b = encode(vec![record("Alps 2025")], "1.0.0", exported_at).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_encode_sets_total_trips() {
        let bytes = encode(
            vec![record("A"), record("B")],
            "1.0.0",
            Utc::now(),
        )
        .unwrap();

        let package = decode(&bytes).unwrap();
        assert_eq!(package.total_trips, 2);
        assert_eq!(package.trips.len(), 2);
    }

    #[test]
    fn test_decode_accepts_empty_trip_list() {
        let bytes = encode(vec![], "1.0.0", Utc::now()).unwrap();
        let package = decode(&bytes).unwrap();
        assert!(package.trips.is_empty());
    }

    #[test]
    fn test_decode_does_not_revalidate_total_trips() {
        let json = r#"{
            "exportedAt": "2025-08-01T12:00:00Z",
            "appVersion": "1.0.0",
            "totalTrips": 42,
            "trips": []
        }"#;

        let package = decode(json.as_bytes()).unwrap();
        assert_eq!(package.total_trips, 42);
        assert!(package.trips.is_empty());
    }

    #[test]
    fn test_decode_rejects_missing_trips_key() {
        let json = r#"{"exportedAt": "2025-08-01T12:00:00Z", "appVersion": "1.0.0", "totalTrips": 0}"#;
        let result = decode(json.as_bytes());
        assert!(matches!(result, Err(BackupError::DecodeFailed(_))));
    }

    #[test]
    fn test_decode_rejects_non_json() {
        let result = decode(b"not a snapshot");
        assert!(matches!(result, Err(BackupError::DecodeFailed(_))));
    }

    #[test]
    fn test_output_is_pretty_printed() {
        let bytes = encode(vec![record("Alps 2025")], "1.0.0", Utc::now()).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.contains("\n  \"exportedAt\""));
    }
}
