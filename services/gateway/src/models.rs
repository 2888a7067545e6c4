//! Wire DTOs for the REST endpoints
//!
//! Quantities and prices travel as decimal strings; the engine
//! validates them and owns the error messages.

use matching_engine::events::DepthLevel;
use serde::{Deserialize, Serialize};
use types::ids::OrderId;
use types::order::{OrderStatus, OrderType, Side};
use types::trade::Trade;

#[derive(Debug, Clone, Deserialize)]
pub struct SubmitOrderRequest {
    pub symbol: String,
    pub order_type: OrderType,
    pub side: Side,
    pub quantity: String,
    /// Required unless order_type is market
    pub price: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SubmitOrderResponse {
    pub order_id: OrderId,
    pub status: OrderStatus,
    pub executions: Vec<Trade>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CancelOrderResponse {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remaining: Option<types::numeric::Quantity>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BboResponse {
    pub symbol: String,
    pub best_bid: Option<types::numeric::Price>,
    pub best_ask: Option<types::numeric::Price>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DepthResponse {
    pub symbol: String,
    pub bids: Vec<DepthLevel>,
    pub asks: Vec<DepthLevel>,
}
