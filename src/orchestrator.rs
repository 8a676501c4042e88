//! Per-vehicle pipeline: score → classify → message / feedback → optional slot → report.
//! Stages are built once and injected; nothing is global.

use crate::config::AutosenseConfig;
use crate::error::PipelineError;
use crate::insights::FeedbackComposer;
use crate::messaging::MessageComposer;
use crate::risk::{Classifier, RiskLevel, RiskScorer};
use crate::scheduling::{ChoiceSource, ServiceBooking, SlotRecommender};
use crate::telemetry::VehicleReading;
use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, info_span};
use uuid::Uuid;

/// Combined result for one vehicle. `booking.is_some() == should_book`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceReport {
    pub report_id: String,
    pub vehicle_id: String,
    pub generated_at: DateTime<Utc>,
    /// Risk as a percentage, rounded to one decimal
    pub risk_score: f64,
    pub risk_level: RiskLevel,
    pub risk_icon: String,
    pub diagnosis: String,
    pub customer_message: String,
    pub should_book: bool,
    pub booking: Option<ServiceBooking>,
    pub rca_feedback: String,
}

/// 0.0–1.0 → percent with one decimal place.
pub fn score_to_percent(score: f64) -> f64 {
    (score * 1000.0).round() / 10.0
}

pub struct Orchestrator {
    scorer: RiskScorer,
    classifier: Classifier,
    messages: MessageComposer,
    scheduler: SlotRecommender,
    insights: FeedbackComposer,
}

impl Orchestrator {
    pub fn new(
        scorer: RiskScorer,
        classifier: Classifier,
        messages: MessageComposer,
        scheduler: SlotRecommender,
        insights: FeedbackComposer,
    ) -> Self {
        Self {
            scorer,
            classifier,
            messages,
            scheduler,
            insights,
        }
    }

    /// Default wiring, slot draws from an OS-entropy-seeded RNG.
    pub fn from_config(config: &AutosenseConfig) -> Self {
        Self::new(
            RiskScorer::new(config.scoring.clone()),
            Classifier::new(config.risk.clone()),
            MessageComposer::new(),
            SlotRecommender::new(&config.scheduling),
            FeedbackComposer::new(),
        )
    }

    pub fn with_source(config: &AutosenseConfig, source: impl ChoiceSource + 'static) -> Self {
        Self::new(
            RiskScorer::new(config.scoring.clone()),
            Classifier::new(config.risk.clone()),
            MessageComposer::new(),
            SlotRecommender::with_source(&config.scheduling, source),
            FeedbackComposer::new(),
        )
    }

    pub fn scorer(&self) -> &RiskScorer {
        &self.scorer
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    pub fn scheduler(&self) -> &SlotRecommender {
        &self.scheduler
    }

    /// Validate a raw record, then run it.
    pub fn run_for_record(
        &self,
        record: &serde_json::Value,
    ) -> Result<MaintenanceReport, PipelineError> {
        self.run_for_record_on(record, Local::now().date_naive())
    }

    pub fn run_for_record_on(
        &self,
        record: &serde_json::Value,
        today: NaiveDate,
    ) -> Result<MaintenanceReport, PipelineError> {
        let reading = VehicleReading::from_record(record)?;
        self.run_for_vehicle_on(&reading, today)
    }

    pub fn run_for_vehicle(
        &self,
        reading: &VehicleReading,
    ) -> Result<MaintenanceReport, PipelineError> {
        self.run_for_vehicle_on(reading, Local::now().date_naive())
    }

    /// Full pipeline with `today` as the reference date for slot suggestions.
    pub fn run_for_vehicle_on(
        &self,
        reading: &VehicleReading,
        today: NaiveDate,
    ) -> Result<MaintenanceReport, PipelineError> {
        let span = info_span!("run_for_vehicle", vehicle_id = %reading.id);
        let _guard = span.enter();

        reading.validate()?;

        let score = self.scorer.score_reading(reading);
        let level = self.classifier.classify(score);
        debug!(score, level = %level, "risk classified");

        let customer_message = self.messages.compose(&reading.owner, level);

        let should_book = level.requires_service();
        let booking = if should_book {
            Some(self.scheduler.suggest_slot_on(today)?)
        } else {
            None
        };

        let rca_feedback = self.insights.feedback(level).to_string();

        let report = MaintenanceReport {
            report_id: Uuid::new_v4().to_string(),
            vehicle_id: reading.id.clone(),
            generated_at: Utc::now(),
            risk_score: score_to_percent(score),
            risk_level: level,
            risk_icon: level.icon().to_string(),
            diagnosis: level.diagnosis().to_string(),
            customer_message,
            should_book,
            booking,
            rca_feedback,
        };
        info!(
            report_id = %report.report_id,
            risk_score = report.risk_score,
            risk_level = %level,
            should_book,
            "maintenance report ready"
        );
        Ok(report)
    }
}
