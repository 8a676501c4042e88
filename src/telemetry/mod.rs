//! Vehicle telemetry records as supplied by callers.
//! Display-only fields ride along but never reach the scoring stages.

mod validate;

pub use validate::record_id;

use serde::{Deserialize, Serialize};

/// One vehicle's readings, validated and immutable for a pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleReading {
    pub id: String,
    pub owner: String,
    /// Engine temperature in °C
    pub temperature: f64,
    /// Unitless vibration index
    pub vibration: f64,
    pub days_since_service: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub odometer_km: Option<i64>,
}

impl VehicleReading {
    pub fn new(
        id: impl Into<String>,
        owner: impl Into<String>,
        temperature: f64,
        vibration: f64,
        days_since_service: i64,
    ) -> Self {
        Self {
            id: id.into(),
            owner: owner.into(),
            temperature,
            vibration,
            days_since_service,
            model: None,
            odometer_km: None,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_odometer(mut self, km: i64) -> Self {
        self.odometer_km = Some(km);
        self
    }
}
