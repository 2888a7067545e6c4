use crate::error::AppError;
use crate::models::{BboResponse, DepthResponse};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};

pub async fn get_bbo(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
) -> Result<Json<BboResponse>, AppError> {
    let (best_bid, best_ask) = state.engine.best_bid_ask(&symbol);
    Ok(Json(BboResponse {
        symbol,
        best_bid,
        best_ask,
    }))
}

pub async fn get_depth(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
) -> Result<Json<DepthResponse>, AppError> {
    let snapshot = state.engine.snapshot(&symbol);
    Ok(Json(DepthResponse {
        symbol,
        bids: snapshot.bids,
        asks: snapshot.asks,
    }))
}
