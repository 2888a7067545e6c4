//! Event broadcast
//!
//! Two topics: `trades` and `market-data`. Each subscriber reads from a
//! bounded ring; a subscriber that falls more than the capacity behind
//! loses the oldest events and observes `Lagged`. Sending never blocks
//! and never awaits, so the matching path stays synchronous.

use tokio::sync::broadcast;
use types::trade::Trade;

use crate::events::MarketDataEvent;

/// Broadcast fan-out for trades and market data
#[derive(Debug)]
pub struct EventPublisher {
    trades: broadcast::Sender<Trade>,
    market_data: broadcast::Sender<MarketDataEvent>,
}

impl EventPublisher {
    /// Create a publisher whose subscribers buffer up to `capacity`
    /// events each
    pub fn new(capacity: usize) -> Self {
        let (trades, _) = broadcast::channel(capacity);
        let (market_data, _) = broadcast::channel(capacity);
        Self {
            trades,
            market_data,
        }
    }

    /// Publish a trade; a send with no subscribers is a no-op
    pub fn publish_trade(&self, trade: Trade) {
        let _ = self.trades.send(trade);
    }

    /// Publish a market-data event; a send with no subscribers is a no-op
    pub fn publish_market_data(&self, event: MarketDataEvent) {
        let _ = self.market_data.send(event);
    }

    /// Subscribe to the trade stream
    pub fn subscribe_trades(&self) -> broadcast::Receiver<Trade> {
        self.trades.subscribe()
    }

    /// Subscribe to the market-data stream
    pub fn subscribe_market_data(&self) -> broadcast::Receiver<MarketDataEvent> {
        self.market_data.subscribe()
    }
}
