use std::path::PathBuf;

use crate::domain::Flight;
use crate::errors::ServiceError;
use crate::repository::FlightRepository;
use crate::storage::json_array_store::JsonArrayStore;

pub const DELETE_NOT_FOUND: &str = "flight to delete not found";
pub const UPDATE_NOT_FOUND: &str = "flight to update not found";

/// Flights collection, persisted as one JSON array rewritten on every change.
#[derive(Clone)]
pub struct FlightStore {
    store: JsonArrayStore<Flight>,
}

impl FlightStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { store: JsonArrayStore::new(path) }
    }

    /// List all flights as stored.
    pub async fn list(&self) -> Result<Vec<Flight>, ServiceError> {
        self.store.read().await
    }

    /// Append a flight; no validation and no duplicate check.
    pub async fn create(&self, flight: Flight) -> Result<Flight, ServiceError> {
        self.store
            .modify(|flights| {
                // 不做任何校验，num 重复也照样追加
                flights.push(flight.clone());
                Ok(())
            })
            .await?;
        Ok(flight)
    }

    /// Replace the first record whose `num` matches. The replacement is stored
    /// as given, even when its own `num` differs.
    pub async fn update(&self, num: &str, flight: Flight) -> Result<Flight, ServiceError> {
        self.store
            .modify(|flights| {
                let slot = flights
                    .iter_mut()
                    .find(|f| f.matches(num))
                    .ok_or_else(|| ServiceError::NotFound(UPDATE_NOT_FOUND.into()))?;
                *slot = flight.clone();
                Ok(())
            })
            .await?;
        Ok(flight)
    }

    /// Remove every record whose `num` matches; returns how many were removed.
    /// The file is only rewritten when something was removed.
    pub async fn delete(&self, num: &str) -> Result<usize, ServiceError> {
        self.store
            .modify(|flights| {
                let before = flights.len();
                flights.retain(|f| !f.matches(num));
                match before - flights.len() {
                    0 => Err(ServiceError::NotFound(DELETE_NOT_FOUND.into())),
                    removed => Ok(removed),
                }
            })
            .await
    }
}

#[async_trait::async_trait]
impl FlightRepository for FlightStore {
    async fn list(&self) -> Result<Vec<Flight>, ServiceError> { self.list().await }
    async fn create(&self, flight: Flight) -> Result<Flight, ServiceError> { self.create(flight).await }
    async fn update(&self, num: &str, flight: Flight) -> Result<Flight, ServiceError> { self.update(num, flight).await }
    async fn delete(&self, num: &str) -> Result<usize, ServiceError> { self.delete(num).await }
}
