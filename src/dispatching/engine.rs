//! Rule engine for multi-criteria dispatching.
//!
//! Applies rules in sequence: the first rule decides, later rules only
//! break ties left by earlier ones.
//!
//! # Reference
//! Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

use std::cmp::Ordering;
use std::sync::Arc;

use super::{DispatchingRule, RuleScore};
use crate::models::Train;

/// A composable rule engine for train ordering.
///
/// Sorting is stable: trains tied on every rule keep their input order,
/// so identical inputs always produce identical orderings.
///
/// # Example
/// ```
/// use rail_throughput::dispatching::{rules, RuleEngine};
///
/// let engine = RuleEngine::new()
///     .with_rule(rules::HighestPriority)
///     .with_tie_breaker(rules::LeastDelay);
/// assert_eq!(engine.rule_names(), vec!["PRIO", "LDLY"]);
/// ```
#[derive(Clone)]
pub struct RuleEngine {
    rules: Vec<Arc<dyn DispatchingRule>>,
    epsilon: f64,
}

impl RuleEngine {
    /// Creates an empty rule engine.
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            epsilon: 1e-9,
        }
    }

    /// The priority-major, delay-minor ordering used by the optimizer.
    pub fn dispatch_order() -> Self {
        Self::new()
            .with_rule(super::rules::HighestPriority)
            .with_tie_breaker(super::rules::LeastDelay)
    }

    /// Adds a primary rule.
    pub fn with_rule<R: DispatchingRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Adds a tie-breaking rule, consulted only when all earlier rules tie.
    pub fn with_tie_breaker<R: DispatchingRule + 'static>(self, rule: R) -> Self {
        self.with_rule(rule)
    }

    /// Names of the configured rules, in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Sorts trains by precedence (first to dispatch first).
    ///
    /// Returns indices into the original train slice.
    pub fn sort_indices(&self, trains: &[Train]) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..trains.len()).collect();
        // `sort_by` is stable; ties keep input order.
        indices.sort_by(|&a, &b| self.compare(&trains[a], &trains[b]));
        indices
    }

    /// Returns trains in dispatch order.
    pub fn sort<'a>(&self, trains: &'a [Train]) -> Vec<&'a Train> {
        self.sort_indices(trains)
            .into_iter()
            .map(|i| &trains[i])
            .collect()
    }

    /// Returns the index of the train to dispatch first.
    pub fn select_best(&self, trains: &[Train]) -> Option<usize> {
        self.sort_indices(trains).first().copied()
    }

    /// Evaluates a single train and returns scores from each rule.
    pub fn evaluate(&self, train: &Train) -> Vec<RuleScore> {
        self.rules.iter().map(|r| r.evaluate(train)).collect()
    }

    fn compare(&self, a: &Train, b: &Train) -> Ordering {
        for rule in &self.rules {
            let score_a = rule.evaluate(a);
            let score_b = rule.evaluate(b);

            if (score_a - score_b).abs() > self.epsilon {
                return score_a.partial_cmp(&score_b).unwrap_or(Ordering::Equal);
            }
        }
        Ordering::Equal
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field("rules", &self.rule_names())
            .finish()
    }
}
