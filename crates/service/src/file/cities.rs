use std::path::PathBuf;

use serde_json::Value;
use tracing::debug;

use crate::domain::{City, NewCity};
use crate::errors::ServiceError;
use crate::repository::CityRepository;
use crate::storage::json_array_store::JsonArrayStore;

pub const ALREADY_EXISTS: &str = "city already exists";

/// Cities collection. Stored records are kept as raw JSON so listing and
/// rewriting never drop fields; only new records are built from [`City`].
#[derive(Clone)]
pub struct CityStore {
    store: JsonArrayStore<Value>,
}

impl CityStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { store: JsonArrayStore::new(path) }
    }

    pub async fn list(&self) -> Result<Vec<Value>, ServiceError> {
        self.store.read().await
    }

    /// Append a city unless one with the same name exists.
    pub async fn create(&self, input: NewCity) -> Result<City, ServiceError> {
        let city = input.into_city();
        if city.weight.is_none() {
            debug!(name = %city.name, "city weight has no leading integer, storing null");
        }
        let record = serde_json::json!({"name": city.name, "weight": city.weight});
        self.store
            .modify(|cities| {
                // 名称相同即视为重复，不比较权重
                if cities.iter().any(|c| c.get("name").and_then(Value::as_str) == Some(city.name.as_str())) {
                    return Err(ServiceError::Conflict(ALREADY_EXISTS.into()));
                }
                cities.push(record);
                Ok(())
            })
            .await?;
        Ok(city)
    }
}

#[async_trait::async_trait]
impl CityRepository for CityStore {
    async fn list(&self) -> Result<Vec<Value>, ServiceError> { self.list().await }
    async fn create(&self, input: NewCity) -> Result<City, ServiceError> { self.create(input).await }
}
