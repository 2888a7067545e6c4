//! Matching engine
//!
//! Per-symbol limit order books with price-time priority matching for
//! limit, market, IOC and FOK orders. Submissions are acknowledged
//! synchronously; trades, depth and BBO changes fan out over a
//! non-blocking broadcast publisher.
//!
//! **Key invariants:**
//! - Price-time priority strictly enforced (best price, then FIFO by
//!   acceptance sequence)
//! - Trades print at the maker's limit price
//! - The book is never crossed at rest
//! - Conservation of quantity across fills, rests and cancels

pub mod book;
pub mod config;
pub mod engine;
pub mod events;
pub mod matching;
pub mod publisher;

pub use book::order_book::{AcceptResult, OrderBook};
pub use config::EngineConfig;
pub use engine::MatchingEngine;
pub use events::{MarketDataEvent, MarketDataSnapshot};
pub use publisher::EventPublisher;
