//! Run quality metrics (KPIs).
//!
//! Summarizes one optimization result against its input trains.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Action counts | Recommendations per action |
//! | Current delay | Sum of input delays |
//! | Expected delay | Sum of projected delays |
//! | Net delay change | Expected − current |
//! | Average train score | Mean of train scores |
//! | Status | Band of the throughput score |

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::models::{Action, OptimizationResult, Train};

/// Throughput band considered optimal.
pub const OPTIMAL_THROUGHPUT: RangeInclusive<u32> = 85..=95;

/// Qualitative band of a throughput score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThroughputStatus {
    /// 85 and above.
    Excellent,
    /// 70 to 84.
    Good,
    /// Below 70.
    NeedsOptimization,
}

impl ThroughputStatus {
    pub fn from_score(score: u32) -> Self {
        match score {
            85.. => Self::Excellent,
            70..=84 => Self::Good,
            _ => Self::NeedsOptimization,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::NeedsOptimization => "Needs Optimization",
        }
    }
}

/// Run performance indicators.
///
/// All delays are in minutes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationSummary {
    pub proceed_count: usize,
    pub hold_count: usize,
    pub clearance_count: usize,
    /// Sum of current delays of the trains that received a recommendation.
    pub total_current_delay_min: u64,
    /// Sum of projected delays.
    pub total_expected_delay_min: u64,
    /// Expected minus current delay; negative when time is recovered.
    pub net_delay_change_min: i64,
    /// Mean train score (0.0 for an empty run).
    pub avg_train_score: f64,
    pub throughput_score: u32,
    pub status: ThroughputStatus,
}

impl OptimizationSummary {
    /// Computes KPIs from a result and its input trains.
    ///
    /// # Arguments
    /// * `result` - The optimization output.
    /// * `trains` - The input trains (for current delays).
    pub fn calculate(result: &OptimizationResult, trains: &[Train]) -> Self {
        let mut total_current: u64 = 0;
        let mut total_expected: u64 = 0;
        let mut total_score: u64 = 0;

        for rec in &result.recommendations {
            total_expected += rec.expected_delay_min as u64;
            total_score += rec.train_score as u64;
            if let Some(train) = trains.iter().find(|t| t.id == rec.train_id) {
                total_current += train.delay_min() as u64;
            }
        }

        let count = result.recommendations.len();
        let avg_train_score = if count == 0 {
            0.0
        } else {
            total_score as f64 / count as f64
        };

        Self {
            proceed_count: result.count_action(Action::Proceed),
            hold_count: result.count_action(Action::Hold5Min),
            clearance_count: result.count_action(Action::PriorityClearance),
            total_current_delay_min: total_current,
            total_expected_delay_min: total_expected,
            net_delay_change_min: total_expected as i64 - total_current as i64,
            avg_train_score,
            throughput_score: result.throughput_score,
            status: ThroughputStatus::from_score(result.throughput_score),
        }
    }

    /// Whether throughput falls inside the optimal band.
    pub fn is_optimal(&self) -> bool {
        OPTIMAL_THROUGHPUT.contains(&self.throughput_score)
    }
}
