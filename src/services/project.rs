// SPDX-License-Identifier: MIT

//! Projection between store entities and snapshot records.
//!
//! `project_trip` flattens a trip aggregate into a fully self-contained
//! export record (every field a value copy, payloads inline);
//! `materialize_trip` rebuilds store entities from an imported record with
//! fresh IDs. Both are pure transformations.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::models::{Destination, DestinationPhoto, DestinationRecord, Trip, TripInfo, TripRecord};

/// Project one trip aggregate into an export record.
///
/// Destinations keep the order they carry on the trip; callers pre-sort
/// (typically by visit date ascending). Empty province strings and empty
/// photo collections are normalized to absent so absence is unambiguous in
/// the snapshot.
pub fn project_trip(trip: &Trip, export_date: DateTime<Utc>, app_version: &str) -> TripRecord {
    TripRecord {
        trip: TripInfo {
            name: trip.name.clone(),
            desc: trip.desc.clone(),
            start_date: trip.start_date,
            end_date: trip.end_date,
            cover_photo_data: trip.cover_photo_data.clone(),
        },
        destinations: trip.destinations.iter().map(project_destination).collect(),
        export_date,
        app_version: app_version.to_string(),
    }
}

fn project_destination(destination: &Destination) -> DestinationRecord {
    let (photo_datas, photo_thumbnail_datas) = flatten_photos(&destination.photos);

    DestinationRecord {
        name: destination.name.clone(),
        country: destination.country.clone(),
        province: if destination.province.is_empty() {
            None
        } else {
            Some(destination.province.clone())
        },
        latitude: destination.latitude,
        longitude: destination.longitude,
        visit_date: destination.visit_date,
        notes: destination.notes.clone(),
        photo_data: destination.photo_data.clone(),
        photo_thumbnail_data: destination.photo_thumbnail_data.clone(),
        photo_datas,
        photo_thumbnail_datas,
        video_data: destination.video_data.clone(),
        category: destination.category.clone(),
        is_favorite: destination.is_favorite,
    }
}

/// Flatten the internal (image, thumbnail) pairs into the snapshot's two
/// parallel arrays.
///
/// The thumbnail array is emitted only when every photo carries one;
/// otherwise index alignment could not be represented, so the thumbnails are
/// dropped and regenerated by the app after import.
fn flatten_photos(photos: &[DestinationPhoto]) -> (Option<Vec<Vec<u8>>>, Option<Vec<Vec<u8>>>) {
    if photos.is_empty() {
        return (None, None);
    }

    let images: Vec<Vec<u8>> = photos.iter().map(|p| p.image.clone()).collect();
    let thumbnails: Option<Vec<Vec<u8>>> = photos
        .iter()
        .map(|p| p.thumbnail.clone())
        .collect::<Option<Vec<_>>>();

    (Some(images), thumbnails)
}

/// Rebuild a store trip from an imported record.
///
/// Entity IDs are freshly generated; the snapshot carries none. Destination
/// order is preserved. The parallel photo arrays are paired up leniently:
/// images beyond the thumbnail count keep no thumbnail, and surplus
/// thumbnails are dropped.
pub fn materialize_trip(record: TripRecord) -> Trip {
    Trip {
        id: Uuid::new_v4(),
        name: record.trip.name,
        desc: record.trip.desc,
        start_date: record.trip.start_date,
        end_date: record.trip.end_date,
        cover_photo_data: record.trip.cover_photo_data,
        destinations: record
            .destinations
            .into_iter()
            .map(materialize_destination)
            .collect(),
    }
}

fn materialize_destination(record: DestinationRecord) -> Destination {
    let images = record.photo_datas.unwrap_or_default();
    let mut thumbnails = record
        .photo_thumbnail_datas
        .unwrap_or_default()
        .into_iter()
        .map(Some)
        .collect::<Vec<_>>();
    thumbnails.resize(images.len(), None);

    let photos = images
        .into_iter()
        .zip(thumbnails)
        .map(|(image, thumbnail)| DestinationPhoto { image, thumbnail })
        .collect();

    Destination {
        id: Uuid::new_v4(),
        name: record.name,
        country: record.country,
        province: record.province.unwrap_or_default(),
        latitude: record.latitude,
        longitude: record.longitude,
        visit_date: record.visit_date,
        notes: record.notes,
        photo_data: record.photo_data,
        photo_thumbnail_data: record.photo_thumbnail_data,
        photos,
        video_data: record.video_data,
        category: record.category,
        is_favorite: record.is_favorite,
    }
}
