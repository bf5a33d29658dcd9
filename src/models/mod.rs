// SPDX-License-Identifier: MIT

//! Data models: store-side entities and the portable snapshot document.

pub mod package;
pub mod payload;
pub mod summary;
pub mod trip;

pub use package::{BackupPackage, DestinationRecord, TripInfo, TripRecord};
pub use summary::ImportSummary;
pub use trip::{Destination, DestinationPhoto, Trip};
