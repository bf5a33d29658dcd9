// SPDX-License-Identifier: MIT

//! Trailbook backup: local backup and migration engine for a travel journal.
//!
//! This crate serializes a user's entire trip/destination history (including
//! embedded photo and video payloads) into a single portable snapshot file,
//! and merges such snapshots back into a live store while skipping duplicates
//! and isolating per-trip failures.

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod store;

pub use config::Config;
pub use error::{BackupError, Result};
pub use models::{BackupPackage, Destination, DestinationPhoto, ImportSummary, Trip};
pub use services::{AccessBroker, BackupEngine, OpenAccess};
pub use store::{MemoryStore, StoreError, TripStore};
