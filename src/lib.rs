//! Admission eligibility engine for restricted industrial sites.
//!
//! Given a person's identity, credentials, training record, and work
//! assignment, the engine decides whether that person may be granted
//! physical access and surfaces the per-check evidence behind the decision.
//! Persistence and report rendering are external collaborators; this crate
//! owns the policy core and the batch machinery around it.

pub mod admission;
pub mod config;
pub mod error;
pub mod intake;
pub mod telemetry;

pub use admission::{
    AdmissionConfig, AdmissionEngine, AdmissionResult, BatchEvaluator, BatchOutcome, BatchReport,
    BlacklistEntry, BlacklistIndex, CancelFlag, CheckKind, CheckOutcome, Person, PersonDecision,
    Severity,
};
