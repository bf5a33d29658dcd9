// SPDX-License-Identifier: MIT

//! Services module - export/import business logic.

pub mod backup;
pub mod package;
pub mod project;
pub mod snapshot;

pub use backup::BackupEngine;
pub use snapshot::{AccessBroker, OpenAccess};
