//! Optimizer configuration.
//!
//! Every constant the optimizer uses lives here. `OptimizationPolicy::default()`
//! reproduces the standard control-room behavior; deserializing a partial
//! document fills the remaining fields with those defaults.

use serde::{Deserialize, Serialize};

/// Weights of the per-train desirability score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    /// Points per priority level above the lowest class.
    /// Class 1 scores `5 * priority_step`, class 5 scores `priority_step`.
    pub priority_step: u32,
    /// Points subtracted per minute of current delay.
    pub delay_penalty_per_min: u32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            priority_step: 20,
            delay_penalty_per_min: 2,
        }
    }
}

/// Thresholds and penalties of the action classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DispatchPolicy {
    /// Delayed trains of this class or better get priority clearance.
    pub clearance_max_priority: u8,
    /// Minutes recovered by a priority clearance.
    pub clearance_recovery_min: u32,
    /// Trains of this class or worse may be held.
    pub hold_min_priority: u8,
    /// Number of trains at the head of the dispatch order that are never held.
    pub protected_head: usize,
    /// Minutes added by a hold.
    pub hold_penalty_min: u32,
    /// Freight is held once the run has more trains than this.
    pub congestion_threshold: usize,
    /// Minutes added when freight is held for congestion.
    pub freight_hold_penalty_min: u32,
}

impl Default for DispatchPolicy {
    fn default() -> Self {
        Self {
            clearance_max_priority: 2,
            clearance_recovery_min: 3,
            hold_min_priority: 4,
            protected_head: 3,
            hold_penalty_min: 5,
            congestion_threshold: 3,
            freight_hold_penalty_min: 8,
        }
    }
}

/// Presentation profile of the simulated-AI mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationProfile {
    /// Artificial processing latency (ms).
    pub latency_ms: u64,
    /// Per-recommendation jitter is drawn from `[-jitter_bound, jitter_bound]`.
    pub jitter_bound: f64,
    /// Fraction of the jitter applied to train scores.
    pub score_jitter_scale: f64,
    /// Multiplier applied to the base throughput score.
    pub throughput_boost: f64,
}

impl Default for SimulationProfile {
    fn default() -> Self {
        Self {
            latency_ms: 500,
            jitter_bound: 0.1,
            score_jitter_scale: 0.5,
            throughput_boost: 1.1,
        }
    }
}

/// Complete optimizer configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizationPolicy {
    pub scoring: ScoringWeights,
    pub dispatch: DispatchPolicy,
    pub simulation: SimulationProfile,
}

impl OptimizationPolicy {
    /// Creates the default policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the scoring weights.
    pub fn with_scoring(mut self, scoring: ScoringWeights) -> Self {
        self.scoring = scoring;
        self
    }

    /// Replaces the dispatch thresholds.
    pub fn with_dispatch(mut self, dispatch: DispatchPolicy) -> Self {
        self.dispatch = dispatch;
        self
    }

    /// Replaces the simulated-AI profile.
    pub fn with_simulation(mut self, simulation: SimulationProfile) -> Self {
        self.simulation = simulation;
        self
    }

    /// Sets the simulated processing latency.
    pub fn with_latency_ms(mut self, latency_ms: u64) -> Self {
        self.simulation.latency_ms = latency_ms;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let policy = OptimizationPolicy::default();
        assert_eq!(policy.scoring.priority_step, 20);
        assert_eq!(policy.scoring.delay_penalty_per_min, 2);
        assert_eq!(policy.dispatch.clearance_recovery_min, 3);
        assert_eq!(policy.dispatch.hold_penalty_min, 5);
        assert_eq!(policy.dispatch.freight_hold_penalty_min, 8);
        assert_eq!(policy.simulation.latency_ms, 500);
        assert!((policy.simulation.throughput_boost - 1.1).abs() < 1e-12);
    }

    #[test]
    fn test_partial_document_uses_defaults() {
        let json = r#"{ "simulation": { "latency_ms": 0 }, "dispatch": { "hold_penalty_min": 10 } }"#;
        let policy: OptimizationPolicy = serde_json::from_str(json).unwrap();
        assert_eq!(policy.simulation.latency_ms, 0);
        assert!((policy.simulation.jitter_bound - 0.1).abs() < 1e-12);
        assert_eq!(policy.dispatch.hold_penalty_min, 10);
        assert_eq!(policy.dispatch.protected_head, 3);
        assert_eq!(policy.scoring, ScoringWeights::default());
    }

    #[test]
    fn test_builder() {
        let policy = OptimizationPolicy::new().with_latency_ms(50).with_scoring(ScoringWeights {
            priority_step: 10,
            delay_penalty_per_min: 1,
        });
        assert_eq!(policy.simulation.latency_ms, 50);
        assert_eq!(policy.scoring.priority_step, 10);
    }
}
