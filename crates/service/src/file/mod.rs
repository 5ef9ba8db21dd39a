//! File-backed collection stores.

pub mod cities;
pub mod flights;

use std::sync::Arc;

use configs::StorageConfig;

use crate::repository::{CityRepository, FlightRepository};
use cities::CityStore;
use flights::FlightStore;

/// Both collections, bound to the file locations from configuration.
#[derive(Clone)]
pub struct Collections {
    pub flights: Arc<dyn FlightRepository>,
    pub cities: Arc<dyn CityRepository>,
}

impl Collections {
    pub fn from_config(cfg: &StorageConfig) -> Self {
        Self {
            flights: Arc::new(FlightStore::new(cfg.flights_path())),
            cities: Arc::new(CityStore::new(cfg.cities_path())),
        }
    }
}
