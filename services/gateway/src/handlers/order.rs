use crate::error::AppError;
use crate::models::{CancelOrderResponse, SubmitOrderRequest, SubmitOrderResponse};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use types::errors::EngineError;
use types::ids::OrderId;

pub async fn submit_order(
    State(state): State<AppState>,
    Json(payload): Json<SubmitOrderRequest>,
) -> Result<Json<SubmitOrderResponse>, AppError> {
    let result = state.engine.submit_order(
        &payload.symbol,
        payload.side,
        payload.order_type,
        &payload.quantity,
        payload.price.as_deref(),
    )?;

    Ok(Json(SubmitOrderResponse {
        order_id: result.order_id,
        status: result.status,
        executions: result.executions,
    }))
}

pub async fn cancel_order(
    State(state): State<AppState>,
    Path((symbol, order_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let order_id = OrderId::parse(&order_id)
        .ok_or_else(|| AppError::BadRequest(format!("malformed order id: {:?}", order_id)))?;

    match state.engine.cancel_order(&symbol, &order_id) {
        Ok(remaining) => Ok((
            StatusCode::OK,
            Json(CancelOrderResponse {
                status: "cancelled",
                remaining: Some(remaining),
            }),
        )),
        // Absent targets get the protocol shape, not an error envelope.
        Err(EngineError::NotFound { .. }) => Ok((
            StatusCode::NOT_FOUND,
            Json(CancelOrderResponse {
                status: "not_found",
                remaining: None,
            }),
        )),
        Err(err) => Err(err.into()),
    }
}
