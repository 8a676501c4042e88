//! Additive threshold scoring over engine temperature, vibration and service age.

use crate::config::ScoringConfig;
use crate::telemetry::VehicleReading;

#[derive(Debug, Clone, Default)]
pub struct RiskScorer {
    config: ScoringConfig,
}

impl RiskScorer {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    /// Sum of the weights of every triggered condition, capped at 1.0.
    /// Weights are non-negative so no lower clamp is needed.
    pub fn score(&self, temperature: f64, vibration: f64, days_since_service: i64) -> f64 {
        let c = &self.config;
        let mut risk = 0.0;
        if temperature > c.temperature_threshold {
            risk += c.temperature_weight;
        }
        if vibration > c.vibration_threshold {
            risk += c.vibration_weight;
        }
        if days_since_service > c.service_days_threshold {
            risk += c.service_weight;
        }
        f64::min(risk, 1.0)
    }

    pub fn score_reading(&self, reading: &VehicleReading) -> f64 {
        self.score(
            reading.temperature,
            reading.vibration,
            reading.days_since_service,
        )
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }
}
