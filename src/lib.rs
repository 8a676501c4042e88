//! AutoSense — agentic predictive maintenance pipeline for vehicle telemetry.
//!
//! Modular structure:
//! - [`telemetry`] — Vehicle readings and record validation
//! - [`risk`] — Threshold risk scoring and tier classification
//! - [`messaging`] — Customer notification text
//! - [`scheduling`] — Randomized service slot suggestion and manual booking
//! - [`insights`] — Manufacturing RCA/CAPA feedback
//! - [`orchestrator`] — Per-vehicle pipeline and report assembly
//! - [`fleet`] — Sample fleet, fleet file loading and overview
//! - [`logging`] — Structured logging

pub mod config;
pub mod error;
pub mod telemetry;
pub mod risk;
pub mod messaging;
pub mod scheduling;
pub mod insights;
pub mod orchestrator;
pub mod fleet;
pub mod logging;

pub use config::AutosenseConfig;
pub use error::{PipelineError, ValidationError, SchedulingError};
pub use telemetry::VehicleReading;
pub use risk::{Classifier, RiskLevel, RiskScorer};
pub use messaging::MessageComposer;
pub use scheduling::{ChoiceSource, ServiceBooking, SlotRecommender};
pub use insights::FeedbackComposer;
pub use orchestrator::{MaintenanceReport, Orchestrator};
pub use fleet::Fleet;
pub use logging::StructuredLogger;
