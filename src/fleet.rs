//! Caller-side fleet source: built-in sample vehicles or a JSON array of records.
//! Records stay loosely typed until a pipeline run validates them.

use crate::config::AutosenseConfig;
use crate::error::FleetError;
use crate::risk::{Classifier, RiskLevel, RiskScorer};
use crate::telemetry::{record_id, VehicleReading};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::path::Path;

#[derive(Debug, Clone, Default)]
pub struct Fleet {
    records: Vec<Value>,
}

/// Dashboard row: tier per vehicle without running the full pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FleetEntry {
    pub id: String,
    pub owner: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    pub risk_level: RiskLevel,
    pub risk_icon: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FleetOverview {
    pub total: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    pub vehicles: Vec<FleetEntry>,
}

impl Fleet {
    pub fn new(records: Vec<Value>) -> Self {
        Self { records }
    }

    /// Three demo vehicles: one high-risk, one healthy, one overdue for service.
    pub fn sample() -> Self {
        Self::new(vec![
            json!({"id": "VH-101", "owner": "Rahul", "model": "Hero Xpulse 200", "temp": 98, "vibration": 0.8, "last_service": 210, "odometer": 28500}),
            json!({"id": "VH-102", "owner": "Ananya", "model": "Mahindra XUV700", "temp": 90, "vibration": 0.4, "last_service": 120, "odometer": 15000}),
            json!({"id": "VH-103", "owner": "Kunal", "model": "Hero Splendor", "temp": 93, "vibration": 0.6, "last_service": 300, "odometer": 42000}),
        ])
    }

    /// File must hold a JSON array of vehicle records.
    pub fn load(path: &Path) -> Result<Self, FleetError> {
        let data = std::fs::read_to_string(path).map_err(|source| FleetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let records: Vec<Value> =
            serde_json::from_str(&data).map_err(|source| FleetError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self::new(records))
    }

    pub fn from_config(config: &AutosenseConfig) -> Result<Self, FleetError> {
        match &config.fleet_path {
            Some(path) => Self::load(path),
            None => Ok(Self::sample()),
        }
    }

    pub fn records(&self) -> &[Value] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn find(&self, id: &str) -> Result<&Value, FleetError> {
        self.records
            .iter()
            .find(|r| record_id(r) == Some(id))
            .ok_or_else(|| FleetError::UnknownVehicle(id.to_string()))
    }

    /// Tier counts across the fleet. Any invalid record fails the whole overview.
    pub fn overview(
        &self,
        scorer: &RiskScorer,
        classifier: &Classifier,
    ) -> Result<FleetOverview, FleetError> {
        let mut out = FleetOverview::default();
        for (i, record) in self.records.iter().enumerate() {
            let reading =
                VehicleReading::from_record(record).map_err(|source| FleetError::InvalidRecord {
                    id: record_id(record)
                        .map(String::from)
                        .unwrap_or_else(|| format!("#{i}")),
                    source,
                })?;
            let level = classifier.classify(scorer.score_reading(&reading));
            match level {
                RiskLevel::High => out.high += 1,
                RiskLevel::Medium => out.medium += 1,
                RiskLevel::Low => out.low += 1,
            }
            out.vehicles.push(FleetEntry {
                id: reading.id,
                owner: reading.owner,
                model: reading.model,
                risk_level: level,
                risk_icon: level.icon().to_string(),
            });
        }
        out.total = out.vehicles.len();
        Ok(out)
    }
}
