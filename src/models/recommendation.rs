//! Optimizer output: per-train recommendations and the run result.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Recommended dispatch action for one train.
///
/// A classification computed fresh on each run, not a state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Run as scheduled.
    #[serde(rename = "PROCEED")]
    Proceed,
    /// Hold at the current signal to let higher classes clear.
    #[serde(rename = "HOLD_5_MIN")]
    Hold5Min,
    /// Clear the path ahead to recover lost time.
    #[serde(rename = "PRIORITY_CLEARANCE")]
    PriorityClearance,
}

/// How urgently a controller should act on a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Urgency {
    Normal,
    Medium,
    High,
}

impl Urgency {
    /// Urgency as a 0..=100 gauge value.
    pub fn percent(self) -> u8 {
        match self {
            Urgency::Normal => 30,
            Urgency::Medium => 60,
            Urgency::High => 90,
        }
    }
}

impl Action {
    /// Wire code (`"HOLD_5_MIN"`).
    pub fn code(self) -> &'static str {
        match self {
            Action::Proceed => "PROCEED",
            Action::Hold5Min => "HOLD_5_MIN",
            Action::PriorityClearance => "PRIORITY_CLEARANCE",
        }
    }

    /// Human-readable label (`"HOLD 5 MIN"`).
    pub fn label(self) -> &'static str {
        match self {
            Action::Proceed => "PROCEED",
            Action::Hold5Min => "HOLD 5 MIN",
            Action::PriorityClearance => "PRIORITY CLEARANCE",
        }
    }

    pub fn urgency(self) -> Urgency {
        match self {
            Action::Proceed => Urgency::Normal,
            Action::Hold5Min => Urgency::Medium,
            Action::PriorityClearance => Urgency::High,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.code())
    }
}

/// Recommendation for a single train.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Train identifier.
    pub train_id: String,
    /// `"{number} {name}"` of the train.
    pub train_name: String,
    /// Recommended action.
    pub action: Action,
    /// Projected delay after the action is applied (minutes).
    pub expected_delay_min: u32,
    /// Desirability score of the train for this run.
    pub train_score: u32,
}

/// Result of one optimization run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OptimizationResult {
    /// One recommendation per input train, in dispatch order.
    pub recommendations: Vec<Recommendation>,
    /// Network efficiency summary for the run.
    pub throughput_score: u32,
}

impl OptimizationResult {
    /// Looks up the recommendation for a train.
    pub fn recommendation_for(&self, train_id: &str) -> Option<&Recommendation> {
        self.recommendations.iter().find(|r| r.train_id == train_id)
    }

    /// Number of recommendations with the given action.
    pub fn count_action(&self, action: Action) -> usize {
        self.recommendations
            .iter()
            .filter(|r| r.action == action)
            .count()
    }

    /// Whether the run produced no recommendations.
    pub fn is_empty(&self) -> bool {
        self.recommendations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(id: &str, action: Action) -> Recommendation {
        Recommendation {
            train_id: id.into(),
            train_name: format!("{id} Test"),
            action,
            expected_delay_min: 0,
            train_score: 50,
        }
    }

    #[test]
    fn test_action_wire_names() {
        assert_eq!(
            serde_json::to_string(&Action::Hold5Min).unwrap(),
            "\"HOLD_5_MIN\""
        );
        let a: Action = serde_json::from_str("\"PRIORITY_CLEARANCE\"").unwrap();
        assert_eq!(a, Action::PriorityClearance);
        assert_eq!(Action::Proceed.to_string(), "PROCEED");
    }

    #[test]
    fn test_action_urgency() {
        assert_eq!(Action::PriorityClearance.urgency(), Urgency::High);
        assert_eq!(Action::Hold5Min.urgency().percent(), 60);
        assert_eq!(Action::Proceed.urgency().percent(), 30);
        assert_eq!(Action::Hold5Min.label(), "HOLD 5 MIN");
    }

    #[test]
    fn test_result_queries() {
        let result = OptimizationResult {
            recommendations: vec![
                rec("A", Action::Proceed),
                rec("B", Action::Hold5Min),
                rec("C", Action::Hold5Min),
            ],
            throughput_score: 70,
        };
        assert_eq!(result.count_action(Action::Hold5Min), 2);
        assert_eq!(result.recommendation_for("A").unwrap().action, Action::Proceed);
        assert!(result.recommendation_for("Z").is_none());
        assert!(!result.is_empty());
        assert!(OptimizationResult::default().is_empty());
    }
}
