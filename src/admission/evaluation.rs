use chrono::{NaiveDate, Utc};

use super::blacklist::BlacklistIndex;
use super::checks;
use super::config::AdmissionConfig;
use super::domain::{AdmissionResult, Person, PersonDecision};

/// Stateless aggregator applying every policy gate to one person.
///
/// A decision is a pure function of the person, the blacklist snapshot, the
/// config, and the evaluation date; the engine holds no mutable state and is
/// safe to share across batch workers.
pub struct AdmissionEngine {
    config: AdmissionConfig,
}

impl AdmissionEngine {
    pub fn new(config: AdmissionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AdmissionConfig {
        &self.config
    }

    /// Evaluate against the current UTC date.
    pub fn evaluate(&self, person: &Person, index: &BlacklistIndex) -> PersonDecision {
        self.evaluate_on(person, index, Utc::now().date_naive())
    }

    /// Evaluate against an explicit date, keeping expiry tiers deterministic.
    ///
    /// Gates run in fixed order: blacklist, expiry, format, training,
    /// qualification. A denylist hit is evaluated first and is never
    /// overridden by any later gate.
    pub fn evaluate_on(
        &self,
        person: &Person,
        index: &BlacklistIndex,
        today: NaiveDate,
    ) -> PersonDecision {
        let outcomes = vec![
            checks::check_blacklist(person, index),
            checks::check_expiry(person, &self.config, today),
            checks::check_credential_format(person),
            checks::check_training(person, &self.config),
            checks::check_qualification(person, &self.config),
        ];

        let overall = if outcomes.iter().all(|outcome| outcome.passed) {
            AdmissionResult::Pass
        } else {
            AdmissionResult::Fail
        };

        PersonDecision {
            identity_number: person.identity_number.clone(),
            name: person.name.clone(),
            outcomes,
            overall,
            decided_at: Utc::now(),
        }
    }
}
