// SPDX-License-Identifier: MIT

//! In-memory trip store.
//!
//! Backed by a concurrent map keyed by trip ID. A trip aggregate occupies a
//! single map entry, so inserting or deleting it is naturally atomic. The
//! constraints a durable backend would enforce (non-empty names) are checked
//! here too, so merge-import failure handling can be exercised against it.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use uuid::Uuid;

use crate::models::Trip;
use crate::store::{StoreError, TripStore};

/// In-memory implementation of [`TripStore`].
#[derive(Clone, Default)]
pub struct MemoryStore {
    trips: Arc<DashMap<Uuid, Trip>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of trips currently stored.
    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    fn check_constraints(trip: &Trip) -> Result<(), StoreError> {
        if trip.name.trim().is_empty() {
            return Err(StoreError::Constraint(
                "Trip name must not be empty".to_string(),
            ));
        }
        for destination in &trip.destinations {
            if destination.name.trim().is_empty() {
                return Err(StoreError::Constraint(
                    "Destination name must not be empty".to_string(),
                ));
            }
            if destination.country.trim().is_empty() {
                return Err(StoreError::Constraint(format!(
                    "Destination \"{}\" has no country",
                    destination.name
                )));
            }
        }
        Ok(())
    }
}

impl TripStore for MemoryStore {
    async fn list_trips(&self) -> Result<Vec<Trip>, StoreError> {
        let mut trips: Vec<Trip> = self.trips.iter().map(|entry| entry.value().clone()).collect();
        // DashMap iteration order is unstable; present trips in a stable order.
        trips.sort_by(|a, b| a.start_date.cmp(&b.start_date).then(a.name.cmp(&b.name)));
        Ok(trips)
    }

    async fn get_trip(&self, id: Uuid) -> Result<Option<Trip>, StoreError> {
        Ok(self.trips.get(&id).map(|entry| entry.value().clone()))
    }

    async fn contains_trip(
        &self,
        name: &str,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
    ) -> Result<bool, StoreError> {
        Ok(self.trips.iter().any(|entry| {
            let trip = entry.value();
            trip.name == name && trip.start_date == start_date && trip.end_date == end_date
        }))
    }

    async fn insert_trip(&self, trip: Trip) -> Result<(), StoreError> {
        Self::check_constraints(&trip)?;

        if self.trips.contains_key(&trip.id) {
            return Err(StoreError::Constraint(format!(
                "Trip {} already exists",
                trip.id
            )));
        }

        self.trips.insert(trip.id, trip);
        Ok(())
    }

    async fn delete_trip(&self, id: Uuid) -> Result<bool, StoreError> {
        Ok(self.trips.remove(&id).is_some())
    }
}
