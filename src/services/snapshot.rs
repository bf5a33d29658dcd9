// SPDX-License-Identifier: MIT

//! Snapshot file writer and reader.
//!
//! Writing is all-or-nothing: bytes land in a temporary file that is renamed
//! into place, so no partial snapshot is ever observable. Reading a
//! user-chosen file is bracketed by a scoped-access grant obtained from an
//! [`AccessBroker`]; the grant is released on every exit path when it drops.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use crate::error::{BackupError, Result};

/// Prefix of exported backup file names.
pub const FILE_PREFIX: &str = "Trailbook_Backup";

/// Grants scoped read access to files the user picked from outside the
/// app's own storage area.
///
/// `acquire` returns an RAII grant; dropping the grant releases the access.
/// Refusal maps to [`BackupError::AccessDenied`].
pub trait AccessBroker {
    type Grant;

    fn acquire(&self, path: &Path) -> Result<Self::Grant>;
}

/// Broker for environments without scoped file permissions; always grants.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenAccess;

impl AccessBroker for OpenAccess {
    type Grant = ();

    fn acquire(&self, _path: &Path) -> Result<()> {
        Ok(())
    }
}

/// File name for a full backup: fixed prefix plus a colon-free ISO-8601
/// timestamp, so repeated exports in one session never collide.
pub fn backup_file_name(now: DateTime<Utc>) -> String {
    let timestamp = now
        .format("%Y-%m-%dT%H:%M:%S%.3f")
        .to_string()
        .replace(':', "-");
    format!("{FILE_PREFIX}_{timestamp}.json")
}

/// Write snapshot bytes to `dir/file_name` atomically.
///
/// The bytes go to a sibling temporary file first and are renamed into
/// place, so a crash mid-write leaves no truncated snapshot behind.
pub async fn write_snapshot(bytes: &[u8], dir: &Path, file_name: &str) -> Result<PathBuf> {
    let path = dir.join(file_name);
    let tmp_path = dir.join(format!("{file_name}.tmp"));

    tokio::fs::write(&tmp_path, bytes)
        .await
        .map_err(|e| BackupError::WriteFailed(e.to_string()))?;

    if let Err(e) = tokio::fs::rename(&tmp_path, &path).await {
        let _ = tokio::fs::remove_file(&tmp_path).await;
        return Err(BackupError::WriteFailed(e.to_string()));
    }

    tracing::debug!(path = %path.display(), bytes = bytes.len(), "Snapshot written");

    Ok(path)
}

/// Read the full content of a user-chosen snapshot file under a scoped
/// access grant.
pub async fn read_snapshot<B: AccessBroker>(broker: &B, path: &Path) -> Result<Vec<u8>> {
    let _grant = broker.acquire(path)?;

    match tokio::fs::read(path).await {
        Ok(bytes) => Ok(bytes),
        Err(e) if e.kind() == ErrorKind::PermissionDenied => Err(BackupError::AccessDenied),
        Err(e) => Err(BackupError::ReadFailed(e.to_string())),
    }
    // _grant drops here, releasing the scoped access on every exit path
}
