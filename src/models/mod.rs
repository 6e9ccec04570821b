//! Railway traffic-control domain models.
//!
//! Provides the input records the optimizer reads (trains, stations,
//! sections) and the output it produces (recommendations).
//!
//! # Domain Mappings
//!
//! | rail-throughput | Dispatching term |
//! |-----------------|------------------|
//! | Train | Job |
//! | Priority | Job weight class |
//! | Recommendation | Dispatch decision |
//! | OptimizationResult | Dispatch plan |

mod network;
mod recommendation;
mod train;

pub use network::{NetworkSection, Station};
pub use recommendation::{Action, OptimizationResult, Recommendation, Urgency};
pub use train::{coach_label, Priority, Train};
