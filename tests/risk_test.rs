//! Scoring, classification and the fixed-text stages.

use autosense::{
    config::{RiskConfig, ScoringConfig},
    insights::FeedbackComposer,
    messaging::MessageComposer,
    risk::{Classifier, RiskLevel, RiskScorer},
};

#[test]
fn no_trigger_means_zero_and_low() {
    let scorer = RiskScorer::default();
    let classifier = Classifier::default();
    for temp in [-20.0, 0.0, 60.0, 95.0] {
        for vib in [0.0, 0.35, 0.7] {
            for days in [0, 90, 180] {
                let s = scorer.score(temp, vib, days);
                assert_eq!(s, 0.0, "temp={temp} vib={vib} days={days}");
                assert_eq!(classifier.classify(s), RiskLevel::Low);
            }
        }
    }
}

#[test]
fn triggers_are_strict_and_capped() {
    let scorer = RiskScorer::default();
    assert_eq!(scorer.score(95.0, 0.7, 180), 0.0);
    assert_eq!(scorer.score(95.01, 0.0, 0), 0.4);
    assert_eq!(scorer.score(0.0, 0.71, 0), 0.3);
    assert_eq!(scorer.score(0.0, 0.0, 181), 0.3);
    assert_eq!(scorer.score(200.0, 5.0, 10_000), 1.0);

    for temp in [90.0, 96.0, 150.0] {
        for vib in [0.0, 0.8, 3.0] {
            for days in [-5, 200, 1000] {
                let s = scorer.score(temp, vib, days);
                assert!((0.0..=1.0).contains(&s));
            }
        }
    }
}

#[test]
fn heavy_weights_are_clamped_to_one() {
    let scorer = RiskScorer::new(ScoringConfig {
        temperature_weight: 0.9,
        vibration_weight: 0.9,
        service_weight: 0.9,
        ..ScoringConfig::default()
    });
    assert_eq!(scorer.score(100.0, 1.0, 365), 1.0);
    assert_eq!(scorer.score(100.0, 0.0, 0), 0.9);
}

#[test]
fn classifier_boundaries_are_inclusive_low_side() {
    let c = Classifier::default();
    assert_eq!(c.classify(0.0), RiskLevel::Low);
    assert_eq!(c.classify(0.3), RiskLevel::Low);
    assert_eq!(c.classify(0.3299), RiskLevel::Low);
    assert_eq!(c.classify(0.33), RiskLevel::Medium);
    assert_eq!(c.classify(0.6), RiskLevel::Medium);
    assert_eq!(c.classify(0.6599), RiskLevel::Medium);
    assert_eq!(c.classify(0.66), RiskLevel::High);
    assert_eq!(c.classify(1.0), RiskLevel::High);
}

#[test]
fn classifier_is_monotonic() {
    let c = Classifier::default();
    let mut prev = RiskLevel::Low;
    for i in 0..=1000 {
        let level = c.classify(i as f64 / 1000.0);
        assert!(level >= prev, "tier dropped at {i}");
        prev = level;
    }
    assert_eq!(prev, RiskLevel::High);
}

#[test]
fn custom_cutoffs() {
    let c = Classifier::new(RiskConfig {
        high_threshold: 0.9,
        medium_threshold: 0.5,
    });
    assert_eq!(c.classify(0.7), RiskLevel::Medium);
    assert_eq!(c.classify(0.9), RiskLevel::High);
    assert_eq!(c.classify(0.49), RiskLevel::Low);
}

#[test]
fn level_presentation() {
    assert!(RiskLevel::Low < RiskLevel::Medium && RiskLevel::Medium < RiskLevel::High);
    assert!(!RiskLevel::Low.requires_service());
    assert!(RiskLevel::Medium.requires_service());
    assert!(RiskLevel::High.requires_service());
    assert_eq!(RiskLevel::Medium.to_string(), "Medium");
    assert_eq!(RiskLevel::Medium.diagnosis(), "Medium Failure Likelihood");
    assert_eq!(RiskLevel::High.icon(), "🔴");
}

#[test]
fn messages_per_tier() {
    let m = MessageComposer::new();
    assert_eq!(
        m.compose("Rahul", RiskLevel::High),
        "Hello Rahul, our system has detected a HIGH risk issue. Please visit service immediately."
    );
    assert_eq!(
        m.compose("Kunal", RiskLevel::Medium),
        "Hello Kunal, your vehicle shows a MEDIUM level risk. We recommend scheduling service soon."
    );
    assert_eq!(
        m.compose("Ananya", RiskLevel::Low),
        "Hello Ananya, your vehicle is in good condition. No urgent action is required."
    );
    // Plain interpolation, no escaping
    assert!(m.compose("<b>O'Neil</b>", RiskLevel::Low).contains("<b>O'Neil</b>"));
}

#[test]
fn feedback_per_tier_is_stable() {
    let f = FeedbackComposer::new();
    assert!(f.feedback(RiskLevel::High).contains("Recommend CAPA"));
    assert!(f.feedback(RiskLevel::Medium).contains("engine & suspension"));
    assert!(f.feedback(RiskLevel::Low).contains("reliability KPIs"));
    assert_eq!(f.feedback(RiskLevel::High), f.feedback(RiskLevel::High));
    assert_ne!(f.feedback(RiskLevel::High), f.feedback(RiskLevel::Medium));
}

#[test]
fn pure_stages_repeat_identically() {
    let scorer = RiskScorer::default();
    let classifier = Classifier::default();
    let messages = MessageComposer::new();
    let cases = [
        ("Rahul", 98.0, 0.8, 210, RiskLevel::High),
        ("Ananya", 90.0, 0.4, 120, RiskLevel::Low),
        ("Kunal", 93.0, 0.6, 300, RiskLevel::Low),
        ("Meera", 96.0, 0.0, 0, RiskLevel::Medium),
    ];
    for (owner, temp, vib, days, expected) in cases {
        let first = scorer.score(temp, vib, days);
        let second = scorer.score(temp, vib, days);
        assert_eq!(first, second, "{owner}");

        let level = classifier.classify(first);
        assert_eq!(level, classifier.classify(second));
        assert_eq!(level, expected, "{owner}");

        assert_eq!(messages.compose(owner, level), messages.compose(owner, level));
    }
}
