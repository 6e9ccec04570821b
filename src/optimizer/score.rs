//! Per-train desirability score.

use super::policy::ScoringWeights;
use crate::models::Train;

/// Number of priority levels counted from below class 5, so that
/// class 1 weighs 5 steps and class 5 weighs 1 step.
const PRIORITY_LEVELS: i64 = 6;

/// Scores a train from its class and current delay.
///
/// ```text
/// score = max(0, (6 - class) * priority_step - delay * delay_penalty_per_min)
/// ```
///
/// Class spacing dominates: only a large delay on a high-class train drops
/// it below an on-time train of a lower class.
pub fn train_score(train: &Train, weights: &ScoringWeights) -> u32 {
    let priority_weight =
        (PRIORITY_LEVELS - train.priority.class() as i64) * weights.priority_step as i64;
    let delay_penalty = train.delay_min() as i64 * weights.delay_penalty_per_min as i64;
    (priority_weight - delay_penalty).clamp(0, u32::MAX as i64) as u32
}
