//! Built-in dispatching rules.
//!
//! # Categories
//!
//! - **Class-based**: PRIO
//! - **Punctuality**: LDLY
//!
//! # Score Convention
//! All rules return lower scores for trains that should run first.

use super::{DispatchingRule, RuleScore};
use crate::models::Train;

// ======================== Class-based rules ========================

/// Highest traffic class first.
///
/// Scores by the integer priority class, so class 1 (premium) is
/// dispatched before class 5 (freight).
#[derive(Debug, Clone, Copy)]
pub struct HighestPriority;

impl DispatchingRule for HighestPriority {
    fn name(&self) -> &'static str {
        "PRIO"
    }

    fn evaluate(&self, train: &Train) -> RuleScore {
        train.priority.class() as f64
    }

    fn description(&self) -> &'static str {
        "Highest Traffic Class"
    }
}

// ======================== Punctuality rules ========================

/// Least delay first.
///
/// Among otherwise equal trains, the one closest to its path runs first.
/// A train with no reported delay counts as on time.
#[derive(Debug, Clone, Copy)]
pub struct LeastDelay;

impl DispatchingRule for LeastDelay {
    fn name(&self) -> &'static str {
        "LDLY"
    }

    fn evaluate(&self, train: &Train) -> RuleScore {
        train.delay_min() as f64
    }

    fn description(&self) -> &'static str {
        "Least Current Delay"
    }
}
