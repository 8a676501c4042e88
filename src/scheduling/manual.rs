//! Manual booking: the customer picks date, window and center; we only check them against the catalog.

use super::{ServiceBooking, ServiceCatalog};
use crate::error::BookingError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManualBookingRequest {
    pub vehicle_id: String,
    pub date: NaiveDate,
    pub time_window: String,
    pub service_center: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingConfirmation {
    pub confirmation_id: String,
    pub vehicle_id: String,
    pub booking: ServiceBooking,
}

impl ManualBookingRequest {
    /// Accepts only catalog entries and dates strictly after `today`.
    pub fn confirm(
        &self,
        catalog: &ServiceCatalog,
        today: NaiveDate,
    ) -> Result<BookingConfirmation, BookingError> {
        if self.date <= today {
            return Err(BookingError::DateNotInFuture {
                date: self.date,
                today,
            });
        }
        if !catalog.has_window(&self.time_window) {
            return Err(BookingError::UnknownWindow(self.time_window.clone()));
        }
        if !catalog.has_center(&self.service_center) {
            return Err(BookingError::UnknownCenter(self.service_center.clone()));
        }
        Ok(BookingConfirmation {
            confirmation_id: Uuid::new_v4().to_string(),
            vehicle_id: self.vehicle_id.clone(),
            booking: ServiceBooking {
                date: self.date,
                time_window: self.time_window.clone(),
                service_center: self.service_center.clone(),
            },
        })
    }
}

impl fmt::Display for BookingConfirmation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Booking Confirmed for {} on {} at {} – {}",
            self.vehicle_id,
            self.booking.date,
            self.booking.time_window,
            self.booking.service_center
        )
    }
}
