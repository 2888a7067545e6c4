//! Market data event and snapshot types
//!
//! The event stream carries only positive facts: trades, depth changes
//! and BBO changes. Rejections and errors stay on the synchronous call
//! path.

use serde::{Deserialize, Serialize};
use types::ids::Symbol;
use types::numeric::{Price, Quantity};

/// One aggregated book level; serializes as `["50000", "1.5"]`
pub type DepthLevel = (Price, Quantity);

/// Events on the market-data topic
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MarketDataEvent {
    /// Best bid/offer moved on at least one side
    Bbo {
        symbol: Symbol,
        best_bid: Option<Price>,
        best_ask: Option<Price>,
    },
    /// Top-N depth after a mutation that touched at least one level
    Depth {
        symbol: Symbol,
        bids: Vec<DepthLevel>,
        asks: Vec<DepthLevel>,
    },
}

/// Point-in-time view of one symbol's book
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketDataSnapshot {
    pub symbol: Symbol,
    pub best_bid: Option<Price>,
    pub best_ask: Option<Price>,
    /// Best-first (descending price)
    pub bids: Vec<DepthLevel>,
    /// Best-first (ascending price)
    pub asks: Vec<DepthLevel>,
}

impl MarketDataSnapshot {
    /// An empty book for a symbol that has never traded
    pub fn empty(symbol: Symbol) -> Self {
        Self {
            symbol,
            best_bid: None,
            best_ask: None,
            bids: Vec::new(),
            asks: Vec::new(),
        }
    }
}
