//! Service slot suggestion: advisory appointments drawn from a fixed catalog.
//!
//! - [`source`] — injectable uniform-choice randomness
//! - [`slot`] — randomized slot recommender used by the orchestrator
//! - [`manual`] — manual booking confirmation (never calls the orchestrator)

mod manual;
mod slot;
mod source;

pub use manual::{BookingConfirmation, ManualBookingRequest};
pub use slot::SlotRecommender;
pub use source::{choose, ChoiceSource, ScriptedSource, SeededSource, EntropySource};

use crate::config::SchedulingConfig;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Suggested appointment. Not a reservation; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceBooking {
    pub date: NaiveDate,
    pub time_window: String,
    pub service_center: String,
}

impl fmt::Display for ServiceBooking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {} at {}",
            self.date, self.time_window, self.service_center
        )
    }
}

/// The fixed time windows and service centers offered to customers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceCatalog {
    pub time_windows: Vec<String>,
    pub service_centers: Vec<String>,
}

impl ServiceCatalog {
    pub fn from_config(config: &SchedulingConfig) -> Self {
        Self {
            time_windows: config.time_windows.clone(),
            service_centers: config.service_centers.clone(),
        }
    }

    pub fn has_window(&self, window: &str) -> bool {
        self.time_windows.iter().any(|w| w == window)
    }

    pub fn has_center(&self, center: &str) -> bool {
        self.service_centers.iter().any(|c| c == center)
    }
}

impl Default for ServiceCatalog {
    fn default() -> Self {
        Self::from_config(&SchedulingConfig::default())
    }
}
