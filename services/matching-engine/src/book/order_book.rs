//! Per-symbol order book
//!
//! Owns both side books and the order id index, and is the sole mutator
//! during matching. Callers hold the symbol's mutation right (the
//! engine serializes access per symbol), so everything here is plain
//! single-threaded code.

use std::collections::HashMap;

use types::errors::EngineError;
use types::ids::{OrderId, Symbol};
use types::numeric::{Price, Quantity};
use types::order::{Order, OrderStatus, OrderType, Side};
use types::trade::Trade;

use crate::events::MarketDataSnapshot;
use crate::matching::{crossing, MatchExecutor};

use super::ask_book::AskBook;
use super::bid_book::BidBook;

/// Where a resting order lives, for direct cancel access
#[derive(Debug, Clone, Copy)]
struct OrderLocation {
    side: Side,
    price: Price,
    sequence: u64,
}

/// Synchronous acknowledgment of a submission
#[derive(Debug, Clone, PartialEq)]
pub struct AcceptResult {
    pub order_id: OrderId,
    pub status: OrderStatus,
    pub executions: Vec<Trade>,
}

/// A submission's acknowledgment plus what it did to the book
#[derive(Debug, Clone)]
pub struct Submission {
    pub result: AcceptResult,
    /// Whether any price level changed (trades happened or a residual
    /// rested); drives depth event emission
    pub book_changed: bool,
}

/// Order book for a single symbol
#[derive(Debug)]
pub struct OrderBook {
    symbol: Symbol,
    bids: BidBook,
    asks: AskBook,
    /// order_id → location of the resting order
    order_index: HashMap<OrderId, OrderLocation>,
    /// Sum of remaining over all resting orders
    open_interest: Quantity,
    /// Next acceptance sequence; assigned in call arrival order
    next_sequence: u64,
    executor: MatchExecutor,
    /// Cap on resting orders; None = unbounded
    max_resting_orders: Option<usize>,
}

impl OrderBook {
    pub fn new(symbol: Symbol, max_resting_orders: Option<usize>) -> Self {
        Self {
            symbol,
            bids: BidBook::new(),
            asks: AskBook::new(),
            order_index: HashMap::new(),
            open_interest: Quantity::zero(),
            next_sequence: 1,
            executor: MatchExecutor::new(),
            max_resting_orders,
        }
    }

    pub fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    /// Submit an order: match what crosses, then apply the order type's
    /// residual policy.
    ///
    /// Pre-checks (fill-or-kill scan, market liquidity check, resting
    /// cap) run before any mutation, so a failed submission leaves the
    /// book untouched.
    pub fn submit(
        &mut self,
        side: Side,
        order_type: OrderType,
        limit_price: Option<Price>,
        quantity: Quantity,
        timestamp: i64,
    ) -> Result<Submission, EngineError> {
        if order_type.requires_price() && limit_price.is_none() {
            return Err(EngineError::BadRequest(format!(
                "price required for {} orders",
                order_type
            )));
        }

        if order_type.rests() {
            if let Some(cap) = self.max_resting_orders {
                if self.order_index.len() >= cap {
                    return Err(EngineError::Overloaded {
                        symbol: self.symbol.to_string(),
                        cap,
                    });
                }
            }
        }

        match order_type {
            OrderType::Fok => {
                let limit = limit_price.expect("priced order types are validated above");
                let crossable = match side {
                    Side::Buy => self.asks.crossable_quantity(limit, quantity),
                    Side::Sell => self.bids.crossable_quantity(limit, quantity),
                };
                if crossable < quantity {
                    // Kill without side effects: no sequence consumed,
                    // no trade, no depth change.
                    return Ok(Submission {
                        result: AcceptResult {
                            order_id: OrderId::new(),
                            status: OrderStatus::Rejected,
                            executions: Vec::new(),
                        },
                        book_changed: false,
                    });
                }
            }
            OrderType::Market => {
                let opposite_empty = match side {
                    Side::Buy => self.asks.is_empty(),
                    Side::Sell => self.bids.is_empty(),
                };
                if opposite_empty {
                    return Err(EngineError::Rejected(format!(
                        "no {} liquidity for market order",
                        side.opposite()
                    )));
                }
            }
            OrderType::Limit | OrderType::Ioc => {}
        }

        let sequence = self.next_sequence;
        self.next_sequence += 1;

        let mut taker = Order::new(
            OrderId::new(),
            self.symbol.clone(),
            side,
            order_type,
            limit_price,
            quantity,
            sequence,
            timestamp,
        );

        let mut executions = Vec::new();
        match side {
            Side::Buy => self.match_against_asks(&mut taker, &mut executions),
            Side::Sell => self.match_against_bids(&mut taker, &mut executions),
        }

        debug_assert!(
            order_type != OrderType::Fok || taker.is_filled(),
            "fill-or-kill executes exactly the pre-scanned quantity"
        );

        let mut rested = false;
        if !taker.is_filled() && order_type.rests() {
            self.rest(&taker);
            rested = true;
        }

        let status = if taker.is_filled() {
            OrderStatus::Filled
        } else if taker.has_fills() {
            OrderStatus::PartiallyFilled
        } else if rested {
            OrderStatus::Accepted
        } else {
            // IOC that crossed nothing; the remainder is cancelled.
            OrderStatus::Cancelled
        };

        let book_changed = !executions.is_empty() || rested;
        Ok(Submission {
            result: AcceptResult {
                order_id: taker.order_id,
                status,
                executions,
            },
            book_changed,
        })
    }

    /// Cancel a resting order, returning its remaining quantity
    pub fn cancel(&mut self, order_id: &OrderId) -> Option<Quantity> {
        let location = self.order_index.remove(order_id)?;
        let entry = match location.side {
            Side::Buy => self.bids.remove(location.price, location.sequence),
            Side::Sell => self.asks.remove(location.price, location.sequence),
        };
        // The index never points at a dead order.
        let entry = entry.expect("order index resolves to a live resting order");
        self.open_interest = self.open_interest - entry.remaining;
        Some(entry.remaining)
    }

    /// Current best bid and best ask
    pub fn best_bid_ask(&self) -> (Option<Price>, Option<Price>) {
        (self.bids.best_price(), self.asks.best_price())
    }

    /// Top-N market data snapshot
    pub fn snapshot(&self, depth: usize) -> MarketDataSnapshot {
        MarketDataSnapshot {
            symbol: self.symbol.clone(),
            best_bid: self.bids.best_price(),
            best_ask: self.asks.best_price(),
            bids: self.bids.depth(depth),
            asks: self.asks.depth(depth),
        }
    }

    /// Sum of remaining over all resting orders
    pub fn open_interest(&self) -> Quantity {
        self.open_interest
    }

    /// Number of resting orders
    pub fn resting_order_count(&self) -> usize {
        self.order_index.len()
    }

    /// Walk the ask side, best price first, FIFO within each level
    fn match_against_asks(&mut self, taker: &mut Order, executions: &mut Vec<Trade>) {
        while !taker.is_filled() {
            let Some((price, level)) = self.asks.best_level_mut() else {
                break;
            };
            if !crossing::buy_crosses(taker.limit_price, price) {
                break;
            }
            let Some((_, entry)) = level.peek_head() else {
                break;
            };
            let maker_id = entry.order_id;
            let maker_remaining = entry.remaining;

            let fill = taker.remaining_quantity.min(maker_remaining);
            executions.push(self.executor.execute(
                self.symbol.clone(),
                maker_id,
                taker.order_id,
                taker.side,
                price,
                fill,
                taker.timestamp,
            ));
            taker.fill(fill);
            self.open_interest = self.open_interest - fill;

            if fill == maker_remaining {
                level.pop_head();
                self.order_index.remove(&maker_id);
                self.asks.erase_if_empty(price);
            } else {
                level.fill_head(fill);
            }
        }
    }

    /// Walk the bid side, best price first, FIFO within each level
    fn match_against_bids(&mut self, taker: &mut Order, executions: &mut Vec<Trade>) {
        while !taker.is_filled() {
            let Some((price, level)) = self.bids.best_level_mut() else {
                break;
            };
            if !crossing::sell_crosses(taker.limit_price, price) {
                break;
            }
            let Some((_, entry)) = level.peek_head() else {
                break;
            };
            let maker_id = entry.order_id;
            let maker_remaining = entry.remaining;

            let fill = taker.remaining_quantity.min(maker_remaining);
            executions.push(self.executor.execute(
                self.symbol.clone(),
                maker_id,
                taker.order_id,
                taker.side,
                price,
                fill,
                taker.timestamp,
            ));
            taker.fill(fill);
            self.open_interest = self.open_interest - fill;

            if fill == maker_remaining {
                level.pop_head();
                self.order_index.remove(&maker_id);
                self.bids.erase_if_empty(price);
            } else {
                level.fill_head(fill);
            }
        }
    }

    /// Rest a limit residual at its limit price
    fn rest(&mut self, order: &Order) {
        let price = order
            .limit_price
            .expect("only priced orders rest in the book");
        match order.side {
            Side::Buy => self.bids.insert_or_append(
                price,
                order.sequence,
                order.order_id,
                order.remaining_quantity,
            ),
            Side::Sell => self.asks.insert_or_append(
                price,
                order.sequence,
                order.order_id,
                order.remaining_quantity,
            ),
        }
        self.order_index.insert(
            order.order_id,
            OrderLocation {
                side: order.side,
                price,
                sequence: order.sequence,
            },
        );
        self.open_interest = self.open_interest + order.remaining_quantity;
    }
}
