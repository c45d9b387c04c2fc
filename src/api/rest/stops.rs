use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::routing::{get, patch, post};
use axum::Json;
use axum::Router;
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::stop::{DeliveryStop, GeoPoint, StopStatus};
use crate::state::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/stops", post(create_stop).get(list_stops))
        .route("/stops/:id", get(get_stop))
        .route("/stops/:id/status", patch(update_stop_status))
}

#[derive(Deserialize)]
pub struct CreateStopRequest {
    pub customer_name: String,
    pub address: String,
    pub amount: f64,
    pub position: GeoPoint,
    pub scheduled_for: NaiveDate,
}

#[derive(Deserialize)]
pub struct StopFilter {
    pub date: Option<NaiveDate>,
    pub status: Option<StopStatus>,
}

#[derive(Deserialize)]
pub struct UpdateStatusRequest {
    pub status: StopStatus,
}

async fn create_stop(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateStopRequest>,
) -> Result<Json<DeliveryStop>, AppError> {
    if payload.customer_name.trim().is_empty() {
        return Err(AppError::BadRequest(
            "customer_name cannot be empty".to_string(),
        ));
    }

    if !(-90.0..=90.0).contains(&payload.position.lat) {
        return Err(AppError::BadRequest(
            "latitude must be within [-90, 90]".to_string(),
        ));
    }

    if !(-180.0..=180.0).contains(&payload.position.lng) {
        return Err(AppError::BadRequest(
            "longitude must be within [-180, 180]".to_string(),
        ));
    }

    let now = Utc::now();
    let stop = DeliveryStop {
        id: Uuid::new_v4(),
        customer_name: payload.customer_name,
        address: payload.address,
        amount: payload.amount,
        position: payload.position,
        status: StopStatus::Pending,
        scheduled_for: payload.scheduled_for,
        created_at: now,
        updated_at: now,
    };

    state.stops.insert(stop.id, stop.clone());
    state.metrics.delivery_stops.set(state.stops.len() as i64);
    let _ = state.stop_events_tx.send(stop.clone());

    Ok(Json(stop))
}

async fn list_stops(
    State(state): State<Arc<AppState>>,
    Query(filter): Query<StopFilter>,
) -> Json<Vec<DeliveryStop>> {
    let stops = state
        .stops
        .iter()
        .filter(|entry| {
            let stop = entry.value();
            filter.date.is_none_or(|date| stop.scheduled_for == date)
                && filter.status.is_none_or(|status| stop.status == status)
        })
        .map(|entry| entry.value().clone())
        .collect();

    Json(stops)
}

async fn get_stop(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<DeliveryStop>, AppError> {
    let stop = state
        .stops
        .get(&id)
        .ok_or_else(|| AppError::NotFound(format!("stop {} not found", id)))?;

    Ok(Json(stop.value().clone()))
}

async fn update_stop_status(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateStatusRequest>,
) -> Result<Json<DeliveryStop>, AppError> {
    let updated = {
        let mut stop = state
            .stops
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("stop {} not found", id)))?;

        stop.status = payload.status;
        stop.updated_at = Utc::now();
        stop.clone()
    };

    state
        .metrics
        .status_updates_total
        .with_label_values(&[&format!("{:?}", updated.status)])
        .inc();
    let _ = state.stop_events_tx.send(updated.clone());

    Ok(Json(updated))
}
