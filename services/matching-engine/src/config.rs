//! Engine configuration
//!
//! Plain values only; the boundary adapter owns environment parsing.

/// Tunables for a [`crate::MatchingEngine`]
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Price levels per side in depth events and snapshots
    pub depth_levels: usize,
    /// Per-subscriber event buffer capacity
    pub event_capacity: usize,
    /// Cap on resting orders per symbol; None = unbounded
    pub max_resting_orders: Option<usize>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            depth_levels: 10,
            event_capacity: 1024,
            max_resting_orders: None,
        }
    }
}
