//! Telemetry → risk score → risk tier.

mod engine;
mod scorer;

pub use engine::{Classifier, RiskLevel};
pub use scorer::RiskScorer;
