//! Deterministic heuristic optimizer.
//!
//! # Algorithm
//!
//! 1. Order trains by class (1 first), then by current delay (least first).
//! 2. Walk the ordered list; for each train pick the first matching action:
//!    - delayed train of class ≤ 2 → `PRIORITY_CLEARANCE`, recover 3 min
//!    - class ≥ 4 past the first three trains → `HOLD_5_MIN`, +5 min
//!    - freight in a run of more than three trains → `HOLD_5_MIN`, +8 min
//!    - otherwise `PROCEED`
//! 3. Score every train from its original class and delay.
//! 4. Throughput = rounded mean of the train scores (0 for an empty run).
//!
//! The freight rule never stacks on the hold rule: a freight train past
//! the protected head is already held for 5 minutes and stops there.
//!
//! # Complexity
//! O(n log n) for the sort, O(n) for classification.

use log::{debug, trace, warn};

use super::policy::{DispatchPolicy, OptimizationPolicy};
use super::score::train_score;
use crate::dispatching::RuleEngine;
use crate::error::OptimizeError;
use crate::models::{Action, OptimizationResult, Priority, Recommendation, Train};
use crate::validation::validate_trains;

/// Position of a train within the dispatch order of one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueuePosition {
    /// 0-based index in dispatch order.
    pub index: usize,
    /// Number of trains in the run.
    pub run_len: usize,
}

/// Chooses the action for one train and its projected delay.
///
/// Rules are checked in order and the first match wins.
///
/// Hold penalties saturate at `u32::MAX`: a train already that late keeps
/// `u32::MAX` as its projected delay.
pub fn classify(train: &Train, position: QueuePosition, policy: &DispatchPolicy) -> (Action, u32) {
    let class = train.priority.class();
    let delay = train.delay_min();

    if class <= policy.clearance_max_priority && delay > 0 {
        (
            Action::PriorityClearance,
            delay.saturating_sub(policy.clearance_recovery_min),
        )
    } else if class >= policy.hold_min_priority && position.index >= policy.protected_head {
        (Action::Hold5Min, delay.saturating_add(policy.hold_penalty_min))
    } else if train.priority == Priority::Freight && position.run_len > policy.congestion_threshold {
        (
            Action::Hold5Min,
            delay.saturating_add(policy.freight_hold_penalty_min),
        )
    } else {
        (Action::Proceed, delay)
    }
}

/// Rounded mean of the train scores; 0 when there are none.
pub(crate) fn mean_score(total: u64, count: usize) -> u32 {
    if count == 0 {
        return 0;
    }
    (total as f64 / count as f64).round() as u32
}

/// Synchronous, fully deterministic optimizer.
///
/// # Example
///
/// ```
/// use rail_throughput::optimizer::HeuristicOptimizer;
/// use rail_throughput::models::{Action, Priority, Train};
///
/// let trains = vec![Train::new("12301", Priority::Premium).with_delay(10)];
/// let result = HeuristicOptimizer::new().optimize(&trains).unwrap();
/// assert_eq!(result.recommendations[0].action, Action::PriorityClearance);
/// assert_eq!(result.recommendations[0].expected_delay_min, 7);
/// ```
#[derive(Debug, Clone)]
pub struct HeuristicOptimizer {
    policy: OptimizationPolicy,
    engine: RuleEngine,
}

impl HeuristicOptimizer {
    /// Creates an optimizer with the default policy.
    pub fn new() -> Self {
        Self::with_policy(OptimizationPolicy::default())
    }

    /// Creates an optimizer with a custom policy.
    pub fn with_policy(policy: OptimizationPolicy) -> Self {
        Self {
            policy,
            engine: RuleEngine::dispatch_order(),
        }
    }

    pub fn policy(&self) -> &OptimizationPolicy {
        &self.policy
    }

    /// Computes recommendations for every train.
    ///
    /// Recommendations come back in dispatch order, not input order.
    ///
    /// # Errors
    /// `OptimizeError::InvalidInput` when train IDs are blank or repeated.
    pub fn optimize(&self, trains: &[Train]) -> Result<OptimizationResult, OptimizeError> {
        validate_trains(trains)?;

        if trains.is_empty() {
            warn!("heuristic run on an empty train list; returning zero throughput");
            return Ok(OptimizationResult::default());
        }

        let ordered = self.engine.sort(trains);
        let run_len = ordered.len();
        let mut recommendations = Vec::with_capacity(run_len);
        let mut total_score: u64 = 0;

        for (index, train) in ordered.into_iter().enumerate() {
            let score = train_score(train, &self.policy.scoring);
            let (action, expected_delay_min) =
                classify(train, QueuePosition { index, run_len }, &self.policy.dispatch);

            trace!(
                "#{index} {} {}: {action} delay {}→{expected_delay_min} score {score}",
                train.id,
                train.priority,
                train.delay_min()
            );

            total_score += score as u64;
            recommendations.push(Recommendation {
                train_id: train.id.clone(),
                train_name: train.display_name(),
                action,
                expected_delay_min,
                train_score: score,
            });
        }

        let throughput_score = mean_score(total_score, run_len);
        debug!("heuristic run over {run_len} trains: throughput {throughput_score}");

        Ok(OptimizationResult {
            recommendations,
            throughput_score,
        })
    }
}

impl Default for HeuristicOptimizer {
    fn default() -> Self {
        Self::new()
    }
}
