//! Engine facade
//!
//! Routes per-symbol calls to the right order book under the
//! single-mutator discipline: the registry is read-mostly, each book
//! sits behind its own lock, and events for a call are published while
//! that lock is held so subscribers observe per-symbol total order.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};
use std::time::{SystemTime, UNIX_EPOCH};

use tracing::{debug, info};
use types::errors::EngineError;
use types::ids::{OrderId, Symbol};
use types::numeric::{Price, Quantity};
use types::order::{OrderType, Side};

use crate::book::order_book::{AcceptResult, OrderBook};
use crate::config::EngineConfig;
use crate::events::{MarketDataEvent, MarketDataSnapshot};
use crate::publisher::EventPublisher;

/// The matching venue: one order book per symbol
///
/// Shared by reference between boundary adapters; all methods take
/// `&self`.
pub struct MatchingEngine {
    books: RwLock<HashMap<Symbol, Arc<Mutex<OrderBook>>>>,
    publisher: EventPublisher,
    config: EngineConfig,
}

impl MatchingEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            books: RwLock::new(HashMap::new()),
            publisher: EventPublisher::new(config.event_capacity),
            config,
        }
    }

    /// Submit an order
    ///
    /// Quantity and price arrive as the user's decimal strings and are
    /// validated here; everything after validation runs under the
    /// symbol's mutation right. The acknowledgment is returned after
    /// the call's events have been published.
    pub fn submit_order(
        &self,
        symbol: &str,
        side: Side,
        order_type: OrderType,
        quantity: &str,
        price: Option<&str>,
    ) -> Result<AcceptResult, EngineError> {
        if symbol.trim().is_empty() {
            return Err(EngineError::BadRequest("empty symbol".to_string()));
        }
        let quantity = Quantity::parse(quantity)?;
        let limit_price = match (order_type.requires_price(), price) {
            (true, Some(raw)) => Some(Price::parse(raw)?),
            (true, None) => {
                return Err(EngineError::BadRequest(format!(
                    "price required for {} orders",
                    order_type
                )))
            }
            // Market orders ignore any price supplied.
            (false, _) => None,
        };

        let book = self.book(symbol);
        let mut book = book.lock().expect("order book lock poisoned");

        let bbo_before = book.best_bid_ask();
        let submission = book.submit(side, order_type, limit_price, quantity, unix_nanos())?;

        for trade in &submission.result.executions {
            self.publisher.publish_trade(trade.clone());
        }
        if submission.book_changed {
            self.publish_book_state(&book, bbo_before);
        }

        debug!(
            symbol,
            %side,
            %order_type,
            status = ?submission.result.status,
            fills = submission.result.executions.len(),
            "order submitted"
        );
        Ok(submission.result)
    }

    /// Cancel a resting order, returning the quantity still open at
    /// cancel time
    pub fn cancel_order(&self, symbol: &str, order_id: &OrderId) -> Result<Quantity, EngineError> {
        // Cancels never create a book for an unknown symbol.
        let Some(book) = self.existing_book(symbol) else {
            return Err(EngineError::NotFound {
                order_id: order_id.to_string(),
            });
        };
        let mut book = book.lock().expect("order book lock poisoned");

        let bbo_before = book.best_bid_ask();
        match book.cancel(order_id) {
            Some(remaining) => {
                self.publish_book_state(&book, bbo_before);
                debug!(symbol, %order_id, %remaining, "order cancelled");
                Ok(remaining)
            }
            None => Err(EngineError::NotFound {
                order_id: order_id.to_string(),
            }),
        }
    }

    /// Best bid and offer; both absent for a symbol that has no book
    pub fn best_bid_ask(&self, symbol: &str) -> (Option<Price>, Option<Price>) {
        match self.existing_book(symbol) {
            Some(book) => book.lock().expect("order book lock poisoned").best_bid_ask(),
            None => (None, None),
        }
    }

    /// Top-N market data snapshot
    pub fn snapshot(&self, symbol: &str) -> MarketDataSnapshot {
        match self.existing_book(symbol) {
            Some(book) => book
                .lock()
                .expect("order book lock poisoned")
                .snapshot(self.config.depth_levels),
            None => MarketDataSnapshot::empty(Symbol::new(symbol)),
        }
    }

    /// Subscribe to the trade stream
    pub fn subscribe_trades(&self) -> tokio::sync::broadcast::Receiver<types::trade::Trade> {
        self.publisher.subscribe_trades()
    }

    /// Subscribe to the market-data stream (BBO and depth events)
    pub fn subscribe_market_data(&self) -> tokio::sync::broadcast::Receiver<MarketDataEvent> {
        self.publisher.subscribe_market_data()
    }

    /// Depth always, BBO only when a side's best moved
    fn publish_book_state(&self, book: &OrderBook, bbo_before: (Option<Price>, Option<Price>)) {
        let snapshot = book.snapshot(self.config.depth_levels);
        self.publisher.publish_market_data(MarketDataEvent::Depth {
            symbol: snapshot.symbol.clone(),
            bids: snapshot.bids,
            asks: snapshot.asks,
        });

        let bbo_after = (snapshot.best_bid, snapshot.best_ask);
        if bbo_after != bbo_before {
            self.publisher.publish_market_data(MarketDataEvent::Bbo {
                symbol: snapshot.symbol,
                best_bid: bbo_after.0,
                best_ask: bbo_after.1,
            });
        }
    }

    /// Get the symbol's book, creating it on first submission
    fn book(&self, symbol: &str) -> Arc<Mutex<OrderBook>> {
        if let Some(book) = self.existing_book(symbol) {
            return book;
        }

        let mut books = self.books.write().expect("book registry lock poisoned");
        // Double-checked: another submitter may have won the race.
        books
            .entry(Symbol::new(symbol))
            .or_insert_with(|| {
                info!(symbol, "creating order book");
                Arc::new(Mutex::new(OrderBook::new(
                    Symbol::new(symbol),
                    self.config.max_resting_orders,
                )))
            })
            .clone()
    }

    fn existing_book(&self, symbol: &str) -> Option<Arc<Mutex<OrderBook>>> {
        self.books
            .read()
            .expect("book registry lock poisoned")
            .get(symbol)
            .cloned()
    }
}

impl Default for MatchingEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

/// Wall time in Unix nanoseconds
fn unix_nanos() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock before Unix epoch")
        .as_nanos() as i64
}
