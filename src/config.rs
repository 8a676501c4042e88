//! Pipeline configuration. Every section defaults to the built-in demo constants.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AutosenseConfig {
    /// Telemetry trigger thresholds and their score weights
    pub scoring: ScoringConfig,
    /// Risk tier cutoffs
    pub risk: RiskConfig,
    /// Slot recommendation catalog
    pub scheduling: SchedulingConfig,
    /// Logging
    pub log: LogConfig,
    /// JSON fleet file; the built-in sample fleet is used when absent
    pub fleet_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Engine temperature strictly above this triggers (degrees)
    pub temperature_threshold: f64,
    pub temperature_weight: f64,
    /// Vibration index strictly above this triggers
    pub vibration_threshold: f64,
    pub vibration_weight: f64,
    /// Days since last service strictly above this triggers
    pub service_days_threshold: i64,
    pub service_weight: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskConfig {
    /// Score at or above this is high risk (0.0–1.0)
    pub high_threshold: f64,
    /// Score at or above this is medium risk
    pub medium_threshold: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulingConfig {
    /// Candidate dates are today+1 ..= today+horizon_days
    pub horizon_days: u32,
    pub time_windows: Vec<String>,
    pub service_centers: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub json: bool,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            temperature_threshold: 95.0,
            temperature_weight: 0.4,
            vibration_threshold: 0.7,
            vibration_weight: 0.3,
            service_days_threshold: 180,
            service_weight: 0.3,
        }
    }
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            high_threshold: 0.66,
            medium_threshold: 0.33,
        }
    }
}

impl Default for SchedulingConfig {
    fn default() -> Self {
        Self {
            horizon_days: 5,
            time_windows: vec![
                "09:00–11:00".to_string(),
                "11:00–13:00".to_string(),
                "14:00–16:00".to_string(),
            ],
            service_centers: vec![
                "Hero Service Center".to_string(),
                "Mahindra AutoCare".to_string(),
                "Express Auto Hub".to_string(),
            ],
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl AutosenseConfig {
    /// Load from JSON file if present and valid; otherwise return default
    pub fn load(path: &Path) -> Self {
        if path.exists() {
            if let Ok(c) = Self::try_load(path) {
                return c;
            }
        }
        Self::default()
    }

    /// Load and validate, reporting why a file was rejected.
    pub fn try_load(path: &Path) -> Result<Self, ConfigError> {
        let data = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: AutosenseConfig =
            serde_json::from_str(&data).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let r = &self.risk;
        if !(0.0..=1.0).contains(&r.medium_threshold)
            || !(0.0..=1.0).contains(&r.high_threshold)
            || r.medium_threshold > r.high_threshold
        {
            return Err(ConfigError::Invalid(format!(
                "risk cutoffs must satisfy 0 <= medium ({}) <= high ({}) <= 1",
                r.medium_threshold, r.high_threshold
            )));
        }

        let s = &self.scoring;
        for (name, w) in [
            ("temperature_weight", s.temperature_weight),
            ("vibration_weight", s.vibration_weight),
            ("service_weight", s.service_weight),
        ] {
            if !w.is_finite() || w < 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "scoring.{name} must be a non-negative number, got {w}"
                )));
            }
        }

        let sch = &self.scheduling;
        if sch.horizon_days == 0 {
            return Err(ConfigError::Invalid(
                "scheduling.horizon_days must be at least 1".to_string(),
            ));
        }
        if sch.time_windows.is_empty() {
            return Err(ConfigError::Invalid(
                "scheduling.time_windows must not be empty".to_string(),
            ));
        }
        if sch.service_centers.is_empty() {
            return Err(ConfigError::Invalid(
                "scheduling.service_centers must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
