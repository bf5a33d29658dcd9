// SPDX-License-Identifier: MIT

//! Storage layer: the store interface the engine consumes.
//!
//! The durable store is an external collaborator; the engine only needs the
//! handful of operations below. [`MemoryStore`] is the bundled in-memory
//! implementation used by tests and by embedders without a durable backend.

pub mod memory;

pub use memory::MemoryStore;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::models::Trip;

/// Store-level error.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A record violated a store constraint (e.g. empty required field).
    #[error("Constraint violation: {0}")]
    Constraint(String),

    /// The storage backend failed.
    #[error("Storage error: {0}")]
    Backend(String),
}

/// Operations the backup engine needs from the persistent trip store.
///
/// `insert_trip` must be atomic over the trip, its destinations, and their
/// binary payloads: after a failed insert the store must not contain any
/// part of the trip. The store is also expected to serialize concurrent
/// writes; the engine performs no locking of its own.
#[allow(async_fn_in_trait)]
pub trait TripStore {
    /// Fetch all trips with their destinations pre-loaded.
    async fn list_trips(&self) -> Result<Vec<Trip>, StoreError>;

    /// Fetch one trip by ID.
    async fn get_trip(&self, id: Uuid) -> Result<Option<Trip>, StoreError>;

    /// Whether a trip with this name and date range already exists.
    async fn contains_trip(
        &self,
        name: &str,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
    ) -> Result<bool, StoreError>;

    /// Insert a trip aggregate atomically.
    async fn insert_trip(&self, trip: Trip) -> Result<(), StoreError>;

    /// Delete a trip and everything it owns. Returns whether it existed.
    async fn delete_trip(&self, id: Uuid) -> Result<bool, StoreError>;
}
