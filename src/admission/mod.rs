//! Admission eligibility policy engine.
//!
//! Composes the independent gates (denylist membership, certificate
//! lifecycle, credential format, onboarding training, trade qualification)
//! into one decision per person, and fans the aggregator out over large
//! rosters deterministically.

pub(crate) mod checks;
pub mod batch;
pub mod blacklist;
pub mod config;
pub mod domain;
pub mod evaluation;

#[cfg(test)]
mod tests;

pub use batch::{BatchError, BatchEvaluator, BatchOutcome, CancelFlag};
pub use blacklist::BlacklistIndex;
pub use config::{AdmissionConfig, QualificationMode};
pub use domain::{
    AdmissionResult, BatchReport, BlacklistEntry, CheckEvidence, CheckKind, CheckOutcome,
    DateField, Person, PersonDecision, PresenceStatus, Severity,
};
pub use evaluation::AdmissionEngine;
