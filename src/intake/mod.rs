//! CSV readers for the externally produced roster and blacklist exports.
//!
//! Intake is deliberately lenient about cell contents: a malformed expiry
//! date is preserved as [`DateField::Malformed`] so the engine can surface a
//! data-quality outcome for that person instead of the whole file aborting.
//! Structural problems (missing file, wrong column shape) are hard errors.

use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::admission::{BlacklistEntry, DateField, Person, PresenceStatus};

#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    #[error("failed to open {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed record in {path}: {source}")]
    Csv {
        path: String,
        #[source]
        source: csv::Error,
    },
}

#[derive(Debug, Deserialize)]
struct RosterRow {
    identity_number: String,
    name: String,
    #[serde(default)]
    contact: String,
    #[serde(default)]
    employer: String,
    work_type: String,
    #[serde(default)]
    work_category: String,
    #[serde(default)]
    employment_phase: String,
    #[serde(default)]
    credential_type: String,
    #[serde(default)]
    credential_number: String,
    #[serde(default)]
    credential_issued: String,
    #[serde(default)]
    credential_expiry: String,
    #[serde(default)]
    issuing_authority: String,
    special_worker: bool,
    #[serde(default)]
    training_date: String,
    // Option so a blank score cell reads as zero instead of a parse error.
    #[serde(default)]
    training_score: Option<u32>,
    #[serde(default)]
    site_entry: String,
    #[serde(default)]
    site_exit: String,
    #[serde(default)]
    presence: String,
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("pending") {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

impl From<RosterRow> for Person {
    fn from(row: RosterRow) -> Self {
        let credential_expiry = non_blank(row.credential_expiry).map(|raw| DateField::parse(&raw));
        let presence = if row.presence.trim().eq_ignore_ascii_case("departed") {
            PresenceStatus::Departed
        } else {
            PresenceStatus::OnSite
        };

        Person {
            identity_number: row.identity_number.trim().to_string(),
            name: row.name.trim().to_string(),
            contact: row.contact.trim().to_string(),
            employer: row.employer.trim().to_string(),
            work_type: row.work_type.trim().to_string(),
            work_category: row.work_category.trim().to_string(),
            employment_phase: row.employment_phase.trim().to_string(),
            credential_type: non_blank(row.credential_type),
            credential_number: non_blank(row.credential_number),
            credential_issued: parse_date(&row.credential_issued),
            credential_expiry,
            issuing_authority: non_blank(row.issuing_authority),
            special_worker: row.special_worker,
            training_date: parse_date(&row.training_date),
            training_score: row.training_score.unwrap_or(0),
            site_entry: parse_date(&row.site_entry),
            site_exit: parse_date(&row.site_exit),
            presence,
        }
    }
}

fn open(path: &Path) -> Result<csv::Reader<std::fs::File>, IntakeError> {
    let file = std::fs::File::open(path).map_err(|source| IntakeError::Io {
        path: path.display().to_string(),
        source,
    })?;
    Ok(csv::Reader::from_reader(file))
}

/// Read the contractor roster export.
pub fn read_roster(path: &Path) -> Result<Vec<Person>, IntakeError> {
    let mut reader = open(path)?;
    let mut persons = Vec::new();
    for record in reader.deserialize::<RosterRow>() {
        let row = record.map_err(|source| IntakeError::Csv {
            path: path.display().to_string(),
            source,
        })?;
        persons.push(Person::from(row));
    }
    Ok(persons)
}

#[derive(Debug, Deserialize)]
struct BlacklistRow {
    identity_number: String,
    #[serde(default)]
    reason: String,
    #[serde(default)]
    banned_until: String,
}

/// Read the denylist export. Only the identity number is consumed by the
/// engine; reason and ban expiry ride along for operator context.
pub fn read_blacklist(path: &Path) -> Result<Vec<BlacklistEntry>, IntakeError> {
    let mut reader = open(path)?;
    let mut entries = Vec::new();
    for record in reader.deserialize::<BlacklistRow>() {
        let row = record.map_err(|source| IntakeError::Csv {
            path: path.display().to_string(),
            source,
        })?;
        entries.push(BlacklistEntry {
            identity_number: row.identity_number.trim().to_string(),
            reason: row.reason.trim().to_string(),
            banned_until: parse_date(&row.banned_until),
        });
    }
    Ok(entries)
}
