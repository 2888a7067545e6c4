//! Gateway configuration
//!
//! Loaded from environment variables with sensible defaults, so the
//! service runs out of the box in development.

use matching_engine::EngineConfig;
use std::env;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Listen address, e.g. "0.0.0.0:8080"
    pub bind_addr: String,

    /// Price levels per side in depth events and snapshots
    pub depth_levels: usize,

    /// Per-subscriber event buffer capacity
    pub event_capacity: usize,

    /// Cap on resting orders per symbol (unset = unbounded)
    pub max_resting_orders: Option<usize>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            bind_addr: env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string()),
            depth_levels: env::var("DEPTH_LEVELS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .unwrap_or(10),
            event_capacity: env::var("EVENT_CAPACITY")
                .unwrap_or_else(|_| "1024".to_string())
                .parse()
                .unwrap_or(1024),
            max_resting_orders: env::var("MAX_RESTING_ORDERS")
                .ok()
                .and_then(|raw| raw.parse().ok()),
        })
    }

    /// Engine tunables derived from this configuration
    pub fn engine(&self) -> EngineConfig {
        EngineConfig {
            depth_levels: self.depth_levels,
            event_capacity: self.event_capacity,
            max_resting_orders: self.max_resting_orders,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8080".to_string(),
            depth_levels: 10,
            event_capacity: 1024,
            max_resting_orders: None,
        }
    }
}
