use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use serde_json::Value;

use crate::core::error::{ApiFailure, AppError};
use crate::features::orders::dto::OrderCreatedResponse;
use crate::server::AppState;

pub const FETCH_ORDERS_FAILED: &str = "Error Code 500. Could not fetch orders";
pub const INSERT_ORDER_FAILED: &str = "Error Code 500. Could not insert order";
pub const ORDER_CREATED: &str = "Your order was successfully created";

pub async fn handle_list_orders(
    State(state): State<AppState>,
) -> Result<Json<Vec<Value>>, ApiFailure> {
    let orders = state
        .orders
        .list_orders()
        .await
        .map_err(|err| ApiFailure::new(FETCH_ORDERS_FAILED, err))?;

    Ok(Json(orders))
}

pub async fn handle_create_order(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<OrderCreatedResponse>), ApiFailure> {
    let Json(payload) = payload.map_err(|rejection| {
        ApiFailure::new(
            INSERT_ORDER_FAILED,
            AppError::invalid_document(rejection.body_text()),
        )
    })?;

    let order_id = state
        .orders
        .create_order(payload)
        .await
        .map_err(|err| ApiFailure::new(INSERT_ORDER_FAILED, err))?;

    Ok((
        StatusCode::CREATED,
        Json(OrderCreatedResponse {
            message: ORDER_CREATED.to_string(),
            order_id,
        }),
    ))
}
