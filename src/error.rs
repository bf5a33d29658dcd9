// SPDX-License-Identifier: MIT

//! Typed errors for export and import operations.

/// Operation-level error for the backup engine.
///
/// Per-trip faults during a merge import are *not* represented here; they are
/// recovered locally and reported through [`crate::models::ImportSummary`].
#[derive(Debug, thiserror::Error)]
pub enum BackupError {
    /// The store holds no trips, so there is nothing to export.
    #[error("No trips to export")]
    NoTripsToExport,

    /// The snapshot file could not be written to the scratch directory.
    #[error("Failed to write snapshot: {0}")]
    WriteFailed(String),

    /// The decoded package contains zero trips.
    #[error("Backup package contains no trips")]
    EmptyPackage,

    /// The snapshot file could not be read.
    #[error("Failed to read snapshot: {0}")]
    ReadFailed(String),

    /// Scoped read permission for the snapshot file was refused.
    #[error("Read access to the snapshot file was denied")]
    AccessDenied,

    /// The bytes are not a well-formed snapshot document.
    #[error("Failed to decode snapshot: {0}")]
    DecodeFailed(String),

    /// Unexpected fault outside the backup taxonomy.
    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, BackupError>;
