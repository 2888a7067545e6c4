use matching_engine::MatchingEngine;
use std::sync::Arc;

/// Shared application state: the engine handle, passed explicitly to
/// every handler
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<MatchingEngine>,
}

impl AppState {
    pub fn new(engine: Arc<MatchingEngine>) -> Self {
        Self { engine }
    }
}
