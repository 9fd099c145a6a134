use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Date slot that survives intake even when the source value is garbage.
///
/// Spreadsheet exports routinely carry typos in expiry columns; dropping the
/// raw text at intake would make it impossible to surface a data-quality
/// outcome later, so the malformed form is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DateField {
    On(NaiveDate),
    Malformed(String),
}

impl DateField {
    /// Parse an ISO `YYYY-MM-DD` value, preserving the raw text on failure.
    pub fn parse(raw: &str) -> Self {
        match NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d") {
            Ok(date) => DateField::On(date),
            Err(_) => DateField::Malformed(raw.trim().to_string()),
        }
    }

    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            DateField::On(date) => Some(*date),
            DateField::Malformed(_) => None,
        }
    }
}

/// Whether a person is currently inside the site perimeter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PresenceStatus {
    OnSite,
    Departed,
}

impl PresenceStatus {
    pub const fn label(self) -> &'static str {
        match self {
            PresenceStatus::OnSite => "on_site",
            PresenceStatus::Departed => "departed",
        }
    }
}

/// Immutable contractor record as produced by intake. The engine never
/// mutates a person; decisions are separate values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub identity_number: String,
    pub name: String,
    pub contact: String,
    pub employer: String,
    pub work_type: String,
    pub work_category: String,
    pub employment_phase: String,
    pub credential_type: Option<String>,
    pub credential_number: Option<String>,
    pub credential_issued: Option<NaiveDate>,
    pub credential_expiry: Option<DateField>,
    pub issuing_authority: Option<String>,
    pub special_worker: bool,
    pub training_date: Option<NaiveDate>,
    pub training_score: u32,
    pub site_entry: Option<NaiveDate>,
    pub site_exit: Option<NaiveDate>,
    pub presence: PresenceStatus,
}

impl Person {
    /// Credential label with blank values normalized away.
    pub fn credential_label(&self) -> Option<&str> {
        self.credential_type
            .as_deref()
            .map(str::trim)
            .filter(|label| !label.is_empty())
    }

    /// Credential number with blank values normalized away.
    pub fn credential_no(&self) -> Option<&str> {
        self.credential_number
            .as_deref()
            .map(str::trim)
            .filter(|number| !number.is_empty())
    }
}

/// Row from the externally maintained denylist. Only the identity number is
/// consumed by the engine; the rest is operator context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlacklistEntry {
    pub identity_number: String,
    pub reason: String,
    /// `None` means the ban is unbounded.
    pub banned_until: Option<NaiveDate>,
}

/// The individual policy gates, in the order they are evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CheckKind {
    Blacklist,
    CredentialExpiry,
    CredentialFormat,
    Training,
    Qualification,
}

impl CheckKind {
    pub const fn label(self) -> &'static str {
        match self {
            CheckKind::Blacklist => "blacklist",
            CheckKind::CredentialExpiry => "credential_expiry",
            CheckKind::CredentialFormat => "credential_format",
            CheckKind::Training => "training",
            CheckKind::Qualification => "qualification",
        }
    }
}

/// Closed severity scale. `Error` marks a data-quality problem so triage can
/// tell "bad input" apart from "policy violation".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    Ok,
    Warning,
    Error,
    Critical,
}

/// Check-specific payload attached to an outcome for downstream alerting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CheckEvidence {
    None,
    Membership { listed: bool },
    DaysUntilExpiry(i64),
    CredentialNumber(String),
    Training { has_record: bool, score: u32 },
    CredentialLabel { work_type: String, credential_type: Option<String> },
}

/// Result of one policy gate for one person.
///
/// Constructors enforce the severity invariants: `Critical` and `Error`
/// imply a failed check, `Ok` implies a passed one. `Warning` carries its
/// own pass flag (admit-with-caution vs. correctable failure).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckOutcome {
    pub kind: CheckKind,
    pub passed: bool,
    pub severity: Severity,
    pub message: String,
    pub evidence: CheckEvidence,
}

impl CheckOutcome {
    pub fn ok(kind: CheckKind, message: impl Into<String>, evidence: CheckEvidence) -> Self {
        Self {
            kind,
            passed: true,
            severity: Severity::Ok,
            message: message.into(),
            evidence,
        }
    }

    pub fn warning(
        kind: CheckKind,
        passed: bool,
        message: impl Into<String>,
        evidence: CheckEvidence,
    ) -> Self {
        Self {
            kind,
            passed,
            severity: Severity::Warning,
            message: message.into(),
            evidence,
        }
    }

    pub fn critical(kind: CheckKind, message: impl Into<String>, evidence: CheckEvidence) -> Self {
        Self {
            kind,
            passed: false,
            severity: Severity::Critical,
            message: message.into(),
            evidence,
        }
    }

    pub fn data_error(kind: CheckKind, message: impl Into<String>, evidence: CheckEvidence) -> Self {
        Self {
            kind,
            passed: false,
            severity: Severity::Error,
            message: message.into(),
            evidence,
        }
    }
}

/// Overall admission verdict for one person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AdmissionResult {
    Pass,
    Fail,
}

impl AdmissionResult {
    pub const fn label(self) -> &'static str {
        match self {
            AdmissionResult::Pass => "PASS",
            AdmissionResult::Fail => "FAIL",
        }
    }
}

/// One person's decision with the full per-check evidence trail. Created
/// fresh per evaluation and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonDecision {
    pub identity_number: String,
    pub name: String,
    /// Fixed order: blacklist, expiry, format, training, qualification.
    pub outcomes: Vec<CheckOutcome>,
    pub overall: AdmissionResult,
    pub decided_at: DateTime<Utc>,
}

impl PersonDecision {
    pub fn outcome(&self, kind: CheckKind) -> Option<&CheckOutcome> {
        self.outcomes.iter().find(|outcome| outcome.kind == kind)
    }

    /// Outcomes that block admission outright.
    pub fn critical_issues(&self) -> Vec<&CheckOutcome> {
        self.outcomes
            .iter()
            .filter(|outcome| outcome.severity == Severity::Critical && !outcome.passed)
            .collect()
    }

    /// Advisory outcomes surfaced for monitoring.
    pub fn warnings(&self) -> Vec<&CheckOutcome> {
        self.outcomes
            .iter()
            .filter(|outcome| outcome.severity == Severity::Warning)
            .collect()
    }
}

/// Aggregate counters accumulated over one batch invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchReport {
    pub total: usize,
    pub pass_count: usize,
    pub fail_count: usize,
    pub blacklist_hits: usize,
    pub expired_credentials: usize,
    pub incomplete_training: usize,
    pub qualification_mismatches: usize,
    pub data_errors: usize,
    pub warning_count: usize,
    /// Set when the batch was cancelled before every record was evaluated.
    pub incomplete: bool,
}

impl BatchReport {
    pub fn absorb(&mut self, decision: &PersonDecision) {
        self.total += 1;
        match decision.overall {
            AdmissionResult::Pass => self.pass_count += 1,
            AdmissionResult::Fail => self.fail_count += 1,
        }

        for outcome in &decision.outcomes {
            if outcome.severity == Severity::Warning {
                self.warning_count += 1;
            }
            if outcome.severity == Severity::Error {
                self.data_errors += 1;
            }
            if outcome.passed {
                continue;
            }
            match outcome.kind {
                CheckKind::Blacklist => self.blacklist_hits += 1,
                CheckKind::CredentialExpiry => self.expired_credentials += 1,
                CheckKind::Training => self.incomplete_training += 1,
                CheckKind::Qualification => self.qualification_mismatches += 1,
                CheckKind::CredentialFormat => {}
            }
        }
    }
}
