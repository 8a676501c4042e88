//! Maps a risk score onto Low / Medium / High using configurable cutoffs.

use crate::config::RiskConfig;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered tiers: `Low < Medium < High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Lower bound of each tier is inclusive: exactly `high_threshold` is High.
    pub fn from_score(score: f64, config: &RiskConfig) -> Self {
        if score >= config.high_threshold {
            RiskLevel::High
        } else if score >= config.medium_threshold {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }

    pub fn diagnosis(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low Failure Likelihood",
            RiskLevel::Medium => "Medium Failure Likelihood",
            RiskLevel::High => "High Failure Likelihood",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            RiskLevel::Low => "🟢",
            RiskLevel::Medium => "🟡",
            RiskLevel::High => "🔴",
        }
    }

    /// Medium and High warrant a service visit.
    pub fn requires_service(&self) -> bool {
        matches!(self, RiskLevel::Medium | RiskLevel::High)
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default)]
pub struct Classifier {
    config: RiskConfig,
}

impl Classifier {
    pub fn new(config: RiskConfig) -> Self {
        Self { config }
    }

    pub fn classify(&self, score: f64) -> RiskLevel {
        RiskLevel::from_score(score, &self.config)
    }

    pub fn config(&self) -> &RiskConfig {
        &self.config
    }
}
