//! Matching module
//!
//! Crossing predicates and trade formation.

pub mod crossing;
pub mod executor;

pub use executor::MatchExecutor;
