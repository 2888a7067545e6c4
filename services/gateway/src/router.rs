use crate::handlers::{market_data, order, ws};
use crate::state::AppState;
use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/orders", post(order::submit_order))
        .route("/orders/{symbol}/{order_id}", delete(order::cancel_order))
        .route("/bbo/{symbol}", get(market_data::get_bbo))
        .route("/depth/{symbol}", get(market_data::get_depth));

    Router::new()
        .nest("/v1", api_routes)
        .route("/ws/trades", get(ws::trades_ws))
        .route("/ws/market-data", get(ws::market_data_ws))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
