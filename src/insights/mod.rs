//! Manufacturing RCA/CAPA feedback returned to OEM quality teams.

use crate::risk::RiskLevel;

const HIGH: &str = "Frequent high-risk alerts indicate issues in cooling system and vibration damping. Recommend CAPA on those components.";
const MEDIUM: &str = "Medium risk suggests early signs of wear. Suggest preventive checks on engine & suspension in next service cycle.";
const LOW: &str = "Low risk. Use data to validate existing design robustness and update reliability KPIs.";

#[derive(Debug, Clone, Copy, Default)]
pub struct FeedbackComposer;

impl FeedbackComposer {
    pub fn new() -> Self {
        Self
    }

    pub fn feedback(&self, level: RiskLevel) -> &'static str {
        match level {
            RiskLevel::High => HIGH,
            RiskLevel::Medium => MEDIUM,
            RiskLevel::Low => LOW,
        }
    }
}
