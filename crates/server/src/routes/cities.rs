use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};
use service::domain::NewCity;
use tracing::info;

use crate::errors::ApiError;
use crate::state::ServerState;

/// List every stored city record verbatim.
pub async fn list_cities(State(state): State<ServerState>) -> Result<Json<Vec<Value>>, ApiError> {
    info!("list cities");
    Ok(Json(state.cities.list().await?))
}

/// Add a city; a duplicate name is rejected with 409.
pub async fn create_city(
    State(state): State<ServerState>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    info!(name = ?body.get("name"), weight = ?body.get("weight"), "create city");
    let input = NewCity::from_body(&body)?;
    let city = state.cities.create(input).await?;
    Ok((StatusCode::CREATED, Json(json!({"message": "city added", "city": city}))))
}
