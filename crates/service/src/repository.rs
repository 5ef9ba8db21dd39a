use async_trait::async_trait;
use serde_json::Value;

use crate::domain::{City, Flight, NewCity};
use crate::errors::ServiceError;

/// Trait abstraction over the flights collection.
#[async_trait]
pub trait FlightRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Flight>, ServiceError>;
    async fn create(&self, flight: Flight) -> Result<Flight, ServiceError>;
    async fn update(&self, num: &str, flight: Flight) -> Result<Flight, ServiceError>;
    async fn delete(&self, num: &str) -> Result<usize, ServiceError>;
}

/// Trait abstraction over the cities collection. Listing returns the stored
/// records as they are on disk.
#[async_trait]
pub trait CityRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Value>, ServiceError>;
    async fn create(&self, input: NewCity) -> Result<City, ServiceError>;
}
