//! Customer-facing notification text, one template per risk tier.

use crate::risk::RiskLevel;

#[derive(Debug, Clone, Copy, Default)]
pub struct MessageComposer;

impl MessageComposer {
    pub fn new() -> Self {
        Self
    }

    pub fn compose(&self, owner: &str, level: RiskLevel) -> String {
        match level {
            RiskLevel::High => format!(
                "Hello {owner}, our system has detected a HIGH risk issue. Please visit service immediately."
            ),
            RiskLevel::Medium => format!(
                "Hello {owner}, your vehicle shows a MEDIUM level risk. We recommend scheduling service soon."
            ),
            RiskLevel::Low => format!(
                "Hello {owner}, your vehicle is in good condition. No urgent action is required."
            ),
        }
    }
}
