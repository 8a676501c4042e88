//! Randomized slot recommender: date, time window and center drawn independently.

use super::source::{choose, ChoiceSource, EntropySource};
use super::{ServiceBooking, ServiceCatalog};
use crate::config::SchedulingConfig;
use crate::error::SchedulingError;
use chrono::{Days, Local, NaiveDate};
use std::sync::Mutex;
use tracing::debug;

pub struct SlotRecommender {
    catalog: ServiceCatalog,
    horizon_days: u32,
    source: Mutex<Box<dyn ChoiceSource>>,
}

impl SlotRecommender {
    /// Recommender backed by an OS-entropy-seeded RNG.
    pub fn new(config: &SchedulingConfig) -> Self {
        Self::with_source(config, EntropySource::default())
    }

    pub fn with_source(config: &SchedulingConfig, source: impl ChoiceSource + 'static) -> Self {
        Self {
            catalog: ServiceCatalog::from_config(config),
            horizon_days: config.horizon_days,
            source: Mutex::new(Box::new(source)),
        }
    }

    pub fn catalog(&self) -> &ServiceCatalog {
        &self.catalog
    }

    /// today+1 ..= today+horizon_days
    pub fn candidate_dates(&self, today: NaiveDate) -> Result<Vec<NaiveDate>, SchedulingError> {
        (1..=self.horizon_days)
            .map(|offset| {
                today
                    .checked_add_days(Days::new(u64::from(offset)))
                    .ok_or(SchedulingError::DateOverflow(offset))
            })
            .collect()
    }

    /// Suggest a slot relative to the local calendar date.
    pub fn suggest_slot(&self) -> Result<ServiceBooking, SchedulingError> {
        self.suggest_slot_on(Local::now().date_naive())
    }

    pub fn suggest_slot_on(&self, today: NaiveDate) -> Result<ServiceBooking, SchedulingError> {
        let dates = self.candidate_dates(today)?;
        let mut source = self
            .source
            .lock()
            .map_err(|_| SchedulingError::LockPoisoned)?;

        let date = *choose(&mut **source, &dates, "date")?;
        let time_window = choose(&mut **source, &self.catalog.time_windows, "time window")?;
        let service_center =
            choose(&mut **source, &self.catalog.service_centers, "service center")?;

        let booking = ServiceBooking {
            date,
            time_window: time_window.clone(),
            service_center: service_center.clone(),
        };
        debug!(%booking, "slot suggested");
        Ok(booking)
    }
}
