use axum::{extract::{Path, State}, http::StatusCode, Json};
use serde_json::{json, Value};
use service::domain::Flight;
use tracing::info;

use crate::errors::ApiError;
use crate::state::ServerState;

/// List every stored flight.
pub async fn list_flights(State(state): State<ServerState>) -> Result<Json<Vec<Flight>>, ApiError> {
    info!("list flights");
    Ok(Json(state.flights.list().await?))
}

/// Append a flight as submitted.
pub async fn create_flight(
    State(state): State<ServerState>,
    Json(flight): Json<Flight>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    info!(num = ?flight.num(), "create flight");
    let flight = state.flights.create(flight).await?;
    Ok((StatusCode::CREATED, Json(json!({"message": "flight added", "flight": flight}))))
}

/// Delete every flight sharing `num`.
pub async fn delete_flight(
    State(state): State<ServerState>,
    Path(num): Path<String>,
) -> Result<Json<Value>, ApiError> {
    info!(%num, "delete flight");
    let removed = state.flights.delete(&num).await?;
    info!(%num, removed, "flight records removed");
    Ok(Json(json!({"message": format!("flight {num} deleted")})))
}

/// Replace the first flight matching `num`.
pub async fn update_flight(
    State(state): State<ServerState>,
    Path(num): Path<String>,
    Json(flight): Json<Flight>,
) -> Result<Json<Value>, ApiError> {
    info!(%num, new_num = ?flight.num(), "update flight");
    let flight = state.flights.update(&num, flight).await?;
    Ok(Json(json!({"message": "flight updated", "flight": flight})))
}
