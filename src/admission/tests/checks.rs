use super::common::*;
use crate::admission::checks::{
    check_credential_format, check_expiry, check_qualification, check_training,
};
use crate::admission::domain::{CheckEvidence, DateField, Severity};

#[test]
fn ordinary_trade_without_credential_passes_expiry() {
    let outcome = check_expiry(&ordinary("P-001"), &config(), today());
    assert!(outcome.passed);
    assert_eq!(outcome.severity, Severity::Ok);
}

#[test]
fn special_worker_without_credential_is_blocked() {
    let mut person = special("P-002", "welder", "welder operating permit", 90);
    person.credential_type = None;
    person.credential_expiry = None;

    let outcome = check_expiry(&person, &config(), today());
    assert!(!outcome.passed);
    assert_eq!(outcome.severity, Severity::Critical);
    assert!(outcome.message.contains("missing required credential"));
}

#[test]
fn malformed_expiry_date_degrades_to_data_error() {
    let mut person = special("P-003", "welder", "welder operating permit", 90);
    person.credential_expiry = Some(DateField::Malformed("2025-13-40".to_string()));

    let outcome = check_expiry(&person, &config(), today());
    assert!(!outcome.passed);
    assert_eq!(outcome.severity, Severity::Error);
    assert!(outcome.message.contains("2025-13-40"));
}

#[test]
fn expiry_tier_boundaries() {
    let cases = [
        (-1, Severity::Critical, false),
        (0, Severity::Critical, false),
        (7, Severity::Critical, false),
        (8, Severity::Warning, true),
        (30, Severity::Warning, true),
        (31, Severity::Ok, true),
    ];

    for (days_out, severity, passed) in cases {
        let person = special("P-004", "electrician", "electrician operating permit", days_out);
        let outcome = check_expiry(&person, &config(), today());
        assert_eq!(outcome.severity, severity, "at {days_out} days");
        assert_eq!(outcome.passed, passed, "at {days_out} days");
        assert_eq!(outcome.evidence, CheckEvidence::DaysUntilExpiry(days_out));
    }
}

#[test]
fn expired_message_counts_days_since() {
    let person = special("P-005", "welder", "welder operating permit", -12);
    let outcome = check_expiry(&person, &config(), today());
    assert!(outcome.message.contains("expired 12 days ago"));
}

#[test]
fn urgent_and_advisory_messages_are_distinct() {
    let urgent = check_expiry(
        &special("P-006", "welder", "welder operating permit", 3),
        &config(),
        today(),
    );
    let advisory = check_expiry(
        &special("P-006", "welder", "welder operating permit", 20),
        &config(),
        today(),
    );
    assert!(urgent.message.contains("(urgent)"));
    assert!(advisory.message.contains("(advisory)"));
}

#[test]
fn format_check_skipped_without_credential() {
    let outcome = check_credential_format(&ordinary("P-010"));
    assert!(outcome.passed);
    assert_eq!(outcome.severity, Severity::Ok);
}

#[test]
fn format_check_skipped_when_number_pending() {
    let mut person = special("P-011", "welder", "welder operating permit", 90);
    person.credential_number = None;
    let outcome = check_credential_format(&person);
    assert!(outcome.passed);
}

#[test]
fn format_check_accepts_well_formed_number() {
    let person = special("P-012", "welder", "welder operating permit", 90);
    let outcome = check_credential_format(&person);
    assert!(outcome.passed);
}

#[test]
fn format_check_rejects_short_or_unlettered_numbers() {
    for bad in ["AB12345", "12345678", "A1234567"] {
        let mut person = special("P-013", "welder", "welder operating permit", 90);
        person.credential_number = Some(bad.to_string());
        let outcome = check_credential_format(&person);
        assert!(!outcome.passed, "number {bad:?} should be rejected");
        assert_eq!(outcome.severity, Severity::Critical);
    }
}

#[test]
fn training_passes_when_trained_and_scored() {
    let outcome = check_training(&ordinary("P-020"), &config());
    assert!(outcome.passed);
    assert_eq!(outcome.severity, Severity::Ok);
}

#[test]
fn training_flags_missing_record_and_low_score_together() {
    let mut person = ordinary("P-021");
    person.training_date = None;
    person.training_score = 55;

    let outcome = check_training(&person, &config());
    assert!(!outcome.passed);
    assert_eq!(outcome.severity, Severity::Warning);
    assert!(outcome.message.contains("no onboarding training on record"));
    assert!(outcome.message.contains("score 55 below minimum 80"));
}

#[test]
fn training_threshold_is_configurable() {
    let mut config = config();
    config.min_training_score = 60;
    let mut person = ordinary("P-022");
    person.training_score = 65;

    let outcome = check_training(&person, &config);
    assert!(outcome.passed);
}

#[test]
fn qualification_skipped_for_ordinary_trades() {
    let outcome = check_qualification(&ordinary("P-030"), &config());
    assert!(outcome.passed);
}

#[test]
fn qualification_rejects_generic_label_for_special_worker() {
    let person = special("P-031", "welder", "safety induction certificate", 90);
    let outcome = check_qualification(&person, &config());
    assert!(!outcome.passed);
    assert_eq!(outcome.severity, Severity::Critical);
    assert!(outcome.message.contains("welder"));
}

#[test]
fn lenient_mode_accepts_any_non_generic_label() {
    let person = special("P-032", "welder", "electrician operating permit", 90);
    let outcome = check_qualification(&person, &config());
    assert!(outcome.passed);
}

#[test]
fn strict_mode_requires_a_label_from_the_trade_table() {
    let config = strict_engine().config().clone();

    let mismatched = special("P-033", "welder", "electrician operating permit", 90);
    let outcome = check_qualification(&mismatched, &config);
    assert!(!outcome.passed);
    assert_eq!(outcome.severity, Severity::Critical);

    let matched = special("P-034", "welder", "welder operating permit", 90);
    let outcome = check_qualification(&matched, &config);
    assert!(outcome.passed);
}

#[test]
fn strict_mode_falls_back_to_lenient_for_unlisted_trades() {
    let config = strict_engine().config().clone();
    let person = special("P-035", "boiler operator", "boiler operating permit", 90);
    let outcome = check_qualification(&person, &config);
    assert!(outcome.passed);
}
