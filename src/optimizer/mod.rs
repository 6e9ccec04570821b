//! Train scoring and recommendation optimizer.
//!
//! Two modes share one output shape:
//!
//! - **Heuristic**: deterministic, synchronous. Orders trains, scores them,
//!   and assigns `PROCEED`, `HOLD_5_MIN` or `PRIORITY_CLEARANCE`.
//! - **Simulated AI**: the heuristic result behind a fixed latency, with
//!   random per-train jitter and a boosted throughput score.
//!
//! # Usage
//!
//! ```no_run
//! use rail_throughput::optimizer::{optimize_schedule, OptimizationMode};
//! use rail_throughput::registry::TrainRegistry;
//!
//! # async fn run() -> Result<(), rail_throughput::OptimizeError> {
//! let registry = TrainRegistry::sample();
//! let mode: OptimizationMode = "Simulated AI".parse()?;
//! let result = optimize_schedule(registry.trains(), mode).await?;
//! println!("throughput {}", result.throughput_score);
//! # Ok(())
//! # }
//! ```

mod heuristic;
mod jitter;
mod policy;
mod score;
mod simulated;
mod summary;

pub use heuristic::{classify, HeuristicOptimizer, QueuePosition};
pub use jitter::{FixedJitter, JitterSource, RandomJitter};
pub use policy::{DispatchPolicy, OptimizationPolicy, ScoringWeights, SimulationProfile};
pub use score::train_score;
pub use simulated::{apply_jitter, SimulatedAiOptimizer};
pub use summary::{OptimizationSummary, ThroughputStatus, OPTIMAL_THROUGHPUT};

use std::fmt;
use std::str::FromStr;

use log::debug;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::error::OptimizeError;
use crate::models::{OptimizationResult, Train};

/// Optimization mode selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OptimizationMode {
    #[default]
    #[serde(rename = "Heuristic")]
    Heuristic,
    #[serde(rename = "Simulated AI")]
    SimulatedAi,
}

impl OptimizationMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Heuristic => "Heuristic",
            Self::SimulatedAi => "Simulated AI",
        }
    }
}

impl FromStr for OptimizationMode {
    type Err = OptimizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Heuristic" => Ok(Self::Heuristic),
            "Simulated AI" => Ok(Self::SimulatedAi),
            other => Err(OptimizeError::UnknownMode(other.to_string())),
        }
    }
}

impl fmt::Display for OptimizationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Single entry point dispatching to the heuristic or simulated-AI optimizer.
#[derive(Debug, Clone, Default)]
pub struct Optimizer {
    policy: OptimizationPolicy,
}

impl Optimizer {
    /// Creates a facade with the default policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a facade with a custom policy.
    pub fn with_policy(policy: OptimizationPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &OptimizationPolicy {
        &self.policy
    }

    /// Runs one optimization, drawing simulated-AI jitter from an OS-seeded generator.
    pub async fn optimize(
        &self,
        trains: &[Train],
        mode: OptimizationMode,
    ) -> Result<OptimizationResult, OptimizeError> {
        let mut jitter = RandomJitter(SmallRng::from_os_rng());
        self.optimize_with_jitter(trains, mode, &mut jitter).await
    }

    /// Runs one optimization with an explicit jitter source.
    ///
    /// The heuristic mode never suspends and ignores `jitter`.
    pub async fn optimize_with_jitter<J: JitterSource + ?Sized>(
        &self,
        trains: &[Train],
        mode: OptimizationMode,
        jitter: &mut J,
    ) -> Result<OptimizationResult, OptimizeError> {
        debug!("optimizing {} trains in {mode} mode", trains.len());
        match mode {
            OptimizationMode::Heuristic => {
                HeuristicOptimizer::with_policy(self.policy.clone()).optimize(trains)
            }
            OptimizationMode::SimulatedAi => {
                SimulatedAiOptimizer::with_policy(self.policy.clone())
                    .optimize(trains, jitter)
                    .await
            }
        }
    }
}

/// Optimizes a train list with the default policy.
pub async fn optimize_schedule(
    trains: &[Train],
    mode: OptimizationMode,
) -> Result<OptimizationResult, OptimizeError> {
    Optimizer::new().optimize(trains, mode).await
}
