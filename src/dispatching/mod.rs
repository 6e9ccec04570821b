//! Dispatching rules and rule engine for train ordering.
//!
//! Provides priority-based dispatching rules and a composable rule engine
//! that orders trains before recommendations are assigned.
//!
//! # Usage
//!
//! ```
//! use rail_throughput::dispatching::{rules, RuleEngine};
//! use rail_throughput::models::{Priority, Train};
//!
//! let engine = RuleEngine::new()
//!     .with_rule(rules::HighestPriority)
//!     .with_tie_breaker(rules::LeastDelay);
//!
//! let trains = vec![
//!     Train::new("freight", Priority::Freight),
//!     Train::new("express", Priority::MailExpress).with_delay(4),
//! ];
//! let order = engine.sort_indices(&trains);
//! assert_eq!(trains[order[0]].id, "express");
//! ```
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4
//! - Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

mod engine;
pub mod rules;

pub use engine::RuleEngine;

use crate::models::Train;
use std::fmt::Debug;

/// Score returned by a dispatching rule.
///
/// Lower scores = dispatched first.
pub type RuleScore = f64;

/// A dispatching rule that evaluates how soon a train should run.
///
/// # Score Convention
/// **Lower score = higher precedence.** Rules return smaller values
/// for trains that should be processed first.
pub trait DispatchingRule: Send + Sync + Debug {
    /// Rule name (e.g., "PRIO", "LDLY").
    fn name(&self) -> &'static str;

    /// Evaluates the precedence of a train.
    fn evaluate(&self, train: &Train) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
