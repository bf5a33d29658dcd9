// SPDX-License-Identifier: MIT

//! The backup engine.
//!
//! Handles the two core workflows:
//! 1. Export: point-in-time read of the store, projection to export records,
//!    deterministic encoding, atomic write to a scratch file.
//! 2. Import: read + decode a snapshot, then merge trips into the store one
//!    at a time, skipping duplicates and isolating per-trip failures.

use std::path::{Path, PathBuf};

use anyhow::anyhow;
use chrono::Utc;
use uuid::Uuid;

use crate::config::Config;
use crate::error::{BackupError, Result};
use crate::models::{ImportSummary, TripRecord};
use crate::services::snapshot::{self, AccessBroker};
use crate::services::{package, project};
use crate::store::{StoreError, TripStore};

/// Stateless backup and migration engine over a store handle.
pub struct BackupEngine<S: TripStore> {
    store: S,
    config: Config,
}

enum MergeOutcome {
    Inserted,
    Duplicate,
}

impl<S: TripStore> BackupEngine<S> {
    pub fn new(store: S, config: Config) -> Self {
        Self { store, config }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Export every trip in the store into one snapshot file.
    ///
    /// Returns the path of the written file. Fails with
    /// [`BackupError::NoTripsToExport`] when the store is empty and
    /// [`BackupError::WriteFailed`] when the snapshot cannot be encoded or
    /// written; no partial export succeeds.
    pub async fn export_all(&self) -> Result<PathBuf> {
        let mut trips = self
            .store
            .list_trips()
            .await
            .map_err(|e| BackupError::Internal(anyhow!(e)))?;

        if trips.is_empty() {
            return Err(BackupError::NoTripsToExport);
        }

        for trip in &mut trips {
            trip.destinations.sort_by_key(|d| d.visit_date);
        }

        let now = Utc::now();
        let records: Vec<TripRecord> = trips
            .iter()
            .map(|trip| project::project_trip(trip, now, &self.config.app_version))
            .collect();

        let bytes = package::encode(records, &self.config.app_version, now)?;
        let file_name = snapshot::backup_file_name(now);
        let path = snapshot::write_snapshot(&bytes, &self.config.export_dir, &file_name).await?;

        let destination_total: usize = trips.iter().map(|t| t.destination_count()).sum();
        tracing::info!(
            trips = trips.len(),
            destinations = destination_total,
            path = %path.display(),
            "Exported backup snapshot"
        );

        Ok(path)
    }

    /// Export a single trip as a shareable one-trip snapshot.
    ///
    /// The file is named after the trip, so a recipient can tell shares
    /// apart; it uses the same package format as a full backup and imports
    /// through the same path.
    pub async fn export_trip(&self, trip_id: Uuid) -> Result<PathBuf> {
        let mut trip = self
            .store
            .get_trip(trip_id)
            .await
            .map_err(|e| BackupError::Internal(anyhow!(e)))?
            .ok_or_else(|| BackupError::Internal(anyhow!("Trip {trip_id} not found in store")))?;

        trip.destinations.sort_by_key(|d| d.visit_date);

        let now = Utc::now();
        let record = project::project_trip(&trip, now, &self.config.app_version);
        let bytes = package::encode(vec![record], &self.config.app_version, now)?;
        let file_name = format!("{}_Trailbook.json", sanitize_file_stem(&trip.name));
        let path = snapshot::write_snapshot(&bytes, &self.config.export_dir, &file_name).await?;

        tracing::info!(trip = %trip.name, path = %path.display(), "Exported trip snapshot");

        Ok(path)
    }

    /// Import a snapshot from a user-chosen file.
    pub async fn import_from_path<B: AccessBroker>(
        &self,
        broker: &B,
        path: &Path,
    ) -> Result<ImportSummary> {
        let bytes = snapshot::read_snapshot(broker, path).await?;
        self.import_from_bytes(&bytes).await
    }

    /// Import a snapshot from raw bytes.
    ///
    /// Trips are merged strictly one at a time in document order. A trip
    /// that fails to insert is recorded in the summary and processing
    /// continues; one bad record must not cost the user the rest of a valid
    /// snapshot. A package with zero trips is rejected upfront as
    /// [`BackupError::EmptyPackage`] before the store is touched.
    pub async fn import_from_bytes(&self, bytes: &[u8]) -> Result<ImportSummary> {
        let package = package::decode(bytes)?;

        if package.trips.is_empty() {
            return Err(BackupError::EmptyPackage);
        }

        tracing::info!(trips = package.trips.len(), "Importing backup snapshot");

        let mut summary = ImportSummary::default();
        for record in package.trips {
            let trip_name = record.trip.name.clone();
            match self.merge_trip(record).await {
                Ok(MergeOutcome::Inserted) => summary.imported_count += 1,
                Ok(MergeOutcome::Duplicate) => {
                    tracing::debug!(trip = %trip_name, "Duplicate trip skipped");
                    summary.duplicate_count += 1;
                }
                Err(e) => {
                    tracing::warn!(trip = %trip_name, error = %e, "Trip import failed");
                    summary
                        .failed_messages
                        .push(format!("Trip \"{trip_name}\": {e}"));
                }
            }
        }

        tracing::info!(
            imported = summary.imported_count,
            duplicates = summary.duplicate_count,
            failed = summary.failed_messages.len(),
            "Import complete"
        );

        Ok(summary)
    }

    /// Whether the file at `path` reads and decodes as a snapshot.
    pub async fn validate_snapshot<B: AccessBroker>(&self, broker: &B, path: &Path) -> bool {
        match snapshot::read_snapshot(broker, path).await {
            Ok(bytes) => package::decode(&bytes).is_ok(),
            Err(_) => false,
        }
    }

    /// Merge one trip record into the store.
    ///
    /// A trip is a duplicate iff the store already holds a trip with the
    /// same name, start date, and end date; re-importing an unchanged
    /// snapshot is therefore idempotent.
    async fn merge_trip(&self, record: TripRecord) -> std::result::Result<MergeOutcome, StoreError> {
        let exists = self
            .store
            .contains_trip(
                &record.trip.name,
                record.trip.start_date,
                record.trip.end_date,
            )
            .await?;

        if exists {
            return Ok(MergeOutcome::Duplicate);
        }

        let trip = project::materialize_trip(record);
        self.store.insert_trip(trip).await?;

        Ok(MergeOutcome::Inserted)
    }
}

/// Trip names go into file names; strip the characters that are unsafe there.
fn sanitize_file_stem(name: &str) -> String {
    name.replace(['/', '\\', ':'], "-")
}
