use std::sync::Arc;

use service::file::Collections;
use service::repository::{CityRepository, FlightRepository};

#[derive(Clone)]
pub struct ServerState {
    pub flights: Arc<dyn FlightRepository>,
    pub cities: Arc<dyn CityRepository>,
}

impl From<Collections> for ServerState {
    fn from(c: Collections) -> Self {
        Self { flights: c.flights, cities: c.cities }
    }
}
