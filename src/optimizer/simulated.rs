//! Simulated-AI optimizer.
//!
//! Wraps the heuristic optimizer with an artificial processing latency and a
//! per-recommendation perturbation. No additional modeling takes place: the
//! output is the heuristic result, jittered for presentation.
//!
//! # Algorithm
//!
//! 1. Sleep for `latency_ms` (500 ms by default).
//! 2. Run the heuristic optimizer.
//! 3. For each recommendation draw `f ∈ [-0.1, 0.1]`:
//!    - `expected_delay = max(0, round(delay * (1 + f)))`
//!    - `train_score = round(score * (1 + f * 0.5))`
//! 4. `throughput = round(base_throughput * 1.1)`, independent of step 3.

use std::time::Duration;

use log::debug;

use super::heuristic::HeuristicOptimizer;
use super::jitter::JitterSource;
use super::policy::{OptimizationPolicy, SimulationProfile};
use crate::error::OptimizeError;
use crate::models::{OptimizationResult, Train};

/// Applies the simulated-AI perturbation to a heuristic result.
///
/// Each recommendation consumes exactly one factor from `jitter`.
pub fn apply_jitter<J: JitterSource + ?Sized>(
    base: OptimizationResult,
    profile: &SimulationProfile,
    jitter: &mut J,
) -> OptimizationResult {
    let recommendations = base
        .recommendations
        .into_iter()
        .map(|mut rec| {
            let factor = jitter.next_factor(profile.jitter_bound);
            rec.expected_delay_min = scale(rec.expected_delay_min, 1.0 + factor);
            rec.train_score = scale(rec.train_score, 1.0 + factor * profile.score_jitter_scale);
            rec
        })
        .collect();

    OptimizationResult {
        recommendations,
        throughput_score: scale(base.throughput_score, profile.throughput_boost),
    }
}

fn scale(value: u32, multiplier: f64) -> u32 {
    (value as f64 * multiplier).round().clamp(0.0, u32::MAX as f64) as u32
}

/// Asynchronous optimizer with simulated latency and jitter.
#[derive(Debug, Clone, Default)]
pub struct SimulatedAiOptimizer {
    base: HeuristicOptimizer,
}

impl SimulatedAiOptimizer {
    /// Creates an optimizer with the default policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an optimizer with a custom policy.
    pub fn with_policy(policy: OptimizationPolicy) -> Self {
        Self {
            base: HeuristicOptimizer::with_policy(policy),
        }
    }

    pub fn policy(&self) -> &OptimizationPolicy {
        self.base.policy()
    }

    /// Runs the heuristic behind the configured latency and perturbs its output.
    ///
    /// The latency always elapses in full before any work is done.
    ///
    /// # Errors
    /// Propagates any error of the heuristic run.
    pub async fn optimize<J: JitterSource + ?Sized>(
        &self,
        trains: &[Train],
        jitter: &mut J,
    ) -> Result<OptimizationResult, OptimizeError> {
        let profile = &self.policy().simulation;
        tokio::time::sleep(Duration::from_millis(profile.latency_ms)).await;

        let base = self.base.optimize(trains)?;
        let base_throughput = base.throughput_score;
        let result = apply_jitter(base, profile, jitter);
        debug!(
            "simulated-AI run over {} trains: throughput {base_throughput} → {}",
            result.recommendations.len(),
            result.throughput_score
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Action, Priority};
    use crate::optimizer::jitter::{FixedJitter, RandomJitter};
    use crate::registry::TrainRegistry;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use tokio::time::Instant;

    fn base_result() -> OptimizationResult {
        HeuristicOptimizer::new()
            .optimize(TrainRegistry::sample().trains())
            .unwrap()
    }

    #[test]
    fn test_apply_jitter_upper_bound() {
        let base = base_result();
        let result = apply_jitter(
            base.clone(),
            &SimulationProfile::default(),
            &mut FixedJitter::constant(0.1),
        );

        // base delays 0, 0, 2, 5, 20; base scores 100, 76, 70, 40, 0
        let delays: Vec<u32> = result.recommendations.iter().map(|r| r.expected_delay_min).collect();
        assert_eq!(delays, vec![0, 0, 2, 6, 22]);
        let scores: Vec<u32> = result.recommendations.iter().map(|r| r.train_score).collect();
        assert_eq!(scores, vec![105, 80, 74, 42, 0]);
        assert_eq!(result.throughput_score, 63);
    }

    #[test]
    fn test_apply_jitter_lower_bound() {
        let result = apply_jitter(
            base_result(),
            &SimulationProfile::default(),
            &mut FixedJitter::constant(-0.1),
        );
        let delays: Vec<u32> = result.recommendations.iter().map(|r| r.expected_delay_min).collect();
        assert_eq!(delays, vec![0, 0, 2, 5, 18]);
        let scores: Vec<u32> = result.recommendations.iter().map(|r| r.train_score).collect();
        assert_eq!(scores, vec![95, 72, 67, 38, 0]);
        assert_eq!(result.throughput_score, 63);
    }

    #[test]
    fn test_apply_jitter_keeps_order_and_actions() {
        let base = base_result();
        let result = apply_jitter(
            base.clone(),
            &SimulationProfile::default(),
            &mut FixedJitter::new(vec![0.03, -0.07, 0.1]),
        );
        assert_eq!(result.recommendations.len(), base.recommendations.len());
        for (b, r) in base.recommendations.iter().zip(&result.recommendations) {
            assert_eq!(b.train_id, r.train_id);
            assert_eq!(b.train_name, r.train_name);
            assert_eq!(b.action, r.action);
        }
    }

    #[test]
    fn test_apply_jitter_empty() {
        let result = apply_jitter(
            OptimizationResult::default(),
            &SimulationProfile::default(),
            &mut FixedJitter::constant(0.1),
        );
        assert!(result.is_empty());
        assert_eq!(result.throughput_score, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_latency_elapses_before_result() {
        let optimizer = SimulatedAiOptimizer::new();
        let trains = TrainRegistry::sample().trains().to_vec();

        let started = Instant::now();
        let result = optimizer
            .optimize(&trains, &mut FixedJitter::constant(0.0))
            .await
            .unwrap();
        assert!(started.elapsed() >= Duration::from_millis(500));

        // zero jitter leaves the heuristic output intact except the boost
        let base = base_result();
        assert_eq!(result.recommendations, base.recommendations);
        assert_eq!(result.throughput_score, 63);
    }

    #[tokio::test(start_paused = true)]
    async fn test_bounds_hold_for_random_jitter() {
        let optimizer = SimulatedAiOptimizer::new();
        let trains = TrainRegistry::sample().trains().to_vec();
        let base = base_result();
        let mut jitter = RandomJitter(SmallRng::seed_from_u64(2024));

        for _ in 0..200 {
            let result = optimizer.optimize(&trains, &mut jitter).await.unwrap();
            assert_eq!(result.throughput_score, 63);
            for (b, r) in base.recommendations.iter().zip(&result.recommendations) {
                let lo = (b.expected_delay_min as f64 * 0.9).round() as u32;
                let hi = (b.expected_delay_min as f64 * 1.1).round() as u32;
                assert!(r.expected_delay_min >= lo && r.expected_delay_min <= hi);
                let lo = (b.train_score as f64 * 0.95).round() as u32;
                let hi = (b.train_score as f64 * 1.05).round() as u32;
                assert!(r.train_score >= lo && r.train_score <= hi);
            }
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_repeated_runs_vary() {
        let optimizer = SimulatedAiOptimizer::new();
        let trains = TrainRegistry::sample().trains().to_vec();
        let mut jitter = RandomJitter(SmallRng::seed_from_u64(99));

        let mut distinct_scores = std::collections::HashSet::new();
        for _ in 0..100 {
            let result = optimizer.optimize(&trains, &mut jitter).await.unwrap();
            distinct_scores.insert(result.recommendations[0].train_score);
        }
        // 100 * (1 ± 0.05) spans 95..=105
        assert!(distinct_scores.len() > 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_heuristic_error_propagates() {
        let trains = vec![
            Train::new("dup", Priority::Premium),
            Train::new("dup", Priority::Freight),
        ];
        let err = SimulatedAiOptimizer::new()
            .optimize(&trains, &mut FixedJitter::constant(0.0))
            .await
            .unwrap_err();
        assert!(matches!(err, OptimizeError::InvalidInput(_)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_single_train_clearance() {
        let trains = vec![Train::new("A", Priority::Premium).with_delay(10)];
        let result = SimulatedAiOptimizer::new()
            .optimize(&trains, &mut FixedJitter::constant(0.1))
            .await
            .unwrap();
        let rec = &result.recommendations[0];
        assert_eq!(rec.action, Action::PriorityClearance);
        // round(7 * 1.1) = 8, round(80 * 1.05) = 84
        assert_eq!(rec.expected_delay_min, 8);
        assert_eq!(rec.train_score, 84);
        // base 80 → round(88.0)
        assert_eq!(result.throughput_score, 88);
    }
}
