use chrono::{Duration, NaiveDate};

use crate::admission::blacklist::BlacklistIndex;
use crate::admission::config::{AdmissionConfig, QualificationMode};
use crate::admission::domain::{BlacklistEntry, DateField, Person, PresenceStatus};
use crate::admission::evaluation::AdmissionEngine;

/// Fixed evaluation date so expiry-tier assertions are deterministic.
pub(super) fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 2).expect("valid date")
}

pub(super) fn ordinary(id: &str) -> Person {
    Person {
        identity_number: id.to_string(),
        name: format!("Worker {id}"),
        contact: "555-0100".to_string(),
        employer: "Northside Industrial Services".to_string(),
        work_type: "laborer".to_string(),
        work_category: "general".to_string(),
        employment_phase: "active".to_string(),
        credential_type: None,
        credential_number: None,
        credential_issued: None,
        credential_expiry: None,
        issuing_authority: None,
        special_worker: false,
        training_date: Some(today() - Duration::days(30)),
        training_score: 90,
        site_entry: Some(today() - Duration::days(10)),
        site_exit: None,
        presence: PresenceStatus::OnSite,
    }
}

/// Special-trade worker holding a credential expiring `days_out` days from
/// the fixed evaluation date.
pub(super) fn special(id: &str, work_type: &str, label: &str, days_out: i64) -> Person {
    Person {
        work_type: work_type.to_string(),
        work_category: "regulated".to_string(),
        credential_type: Some(label.to_string()),
        credential_number: Some("AB1234567".to_string()),
        credential_issued: Some(today() - Duration::days(365)),
        credential_expiry: Some(DateField::On(today() + Duration::days(days_out))),
        issuing_authority: Some("Provincial Safety Board".to_string()),
        special_worker: true,
        training_score: 95,
        ..ordinary(id)
    }
}

pub(super) fn config() -> AdmissionConfig {
    AdmissionConfig::default()
}

pub(super) fn engine() -> AdmissionEngine {
    AdmissionEngine::new(config())
}

pub(super) fn strict_engine() -> AdmissionEngine {
    let mut config = config();
    config.qualification_mode = QualificationMode::Strict;
    AdmissionEngine::new(config)
}

pub(super) fn index_of(ids: &[&str]) -> BlacklistIndex {
    BlacklistIndex::from_entries(ids.iter().map(|id| BlacklistEntry {
        identity_number: id.to_string(),
        reason: "forged credentials".to_string(),
        banned_until: None,
    }))
}
