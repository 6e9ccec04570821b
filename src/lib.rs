//! Section throughput optimizer for railway traffic control.
//!
//! Orders the trains of a controlled section, scores them, and recommends
//! a dispatch action for each: proceed, hold, or priority clearance.
//! Rendering, live positioning and persistence belong to the consumer.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Train`, `Priority`, `Station`,
//!   `NetworkSection`, `Action`, `Recommendation`, `OptimizationResult`
//! - **`dispatching`**: Dispatching rules and the rule engine that orders trains
//! - **`optimizer`**: Scoring, heuristic and simulated-AI optimizers, the
//!   mode facade, configuration, and run KPIs
//! - **`registry`**: The fixed network dataset handed to the optimizer
//! - **`validation`**: Input integrity checks (duplicate IDs, unknown stations)
//!
//! # Example
//!
//! ```
//! use rail_throughput::optimizer::HeuristicOptimizer;
//! use rail_throughput::registry::TrainRegistry;
//!
//! let registry = TrainRegistry::sample();
//! let result = HeuristicOptimizer::new().optimize(registry.trains()).unwrap();
//! assert_eq!(result.recommendations.len(), 5);
//! assert_eq!(result.throughput_score, 57);
//! ```
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4
//! - Hansen & Pachl (2014), "Railway Timetabling & Operations", Ch. 10

pub mod dispatching;
mod error;
pub mod models;
pub mod optimizer;
pub mod registry;
pub mod validation;

pub use error::OptimizeError;
