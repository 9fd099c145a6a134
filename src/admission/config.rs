use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// How strictly a special worker's credential label must match their trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QualificationMode {
    /// Any label outside the generic/onboarding set counts as a match.
    Lenient,
    /// The label must appear in the accepted set for the declared work type.
    Strict,
}

/// Policy thresholds and tables driving the admission checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdmissionConfig {
    /// Minimum passing score for onboarding training.
    pub min_training_score: u32,
    /// Credentials expiring within this many days block entry outright.
    pub expiry_urgent_days: i64,
    /// Credentials expiring within this many days admit with a flag.
    pub expiry_warning_days: i64,
    /// Onboarding-only labels that never satisfy a regulated-trade role.
    pub generic_credential_labels: BTreeSet<String>,
    pub qualification_mode: QualificationMode,
    /// Accepted credential labels per regulated work type, consulted in
    /// `Strict` mode. A trade missing from the table falls back to lenient
    /// matching.
    pub special_work_credentials: BTreeMap<String, BTreeSet<String>>,
}

impl Default for AdmissionConfig {
    fn default() -> Self {
        let generic_credential_labels = [
            "safety induction certificate",
            "site safety orientation",
            "health certificate",
        ]
        .into_iter()
        .map(str::to_string)
        .collect();

        let special_work_credentials = [
            (
                "electrician",
                vec!["electrician operating permit", "special operations certificate"],
            ),
            (
                "welder",
                vec!["welder operating permit", "special operations certificate"],
            ),
            (
                "scaffolder",
                vec!["scaffolder permit", "work-at-height certificate"],
            ),
            (
                "crane operator",
                vec!["lifting machinery permit", "special operations certificate"],
            ),
            (
                "forklift driver",
                vec!["forklift licence", "special operations certificate"],
            ),
            (
                "rigger",
                vec!["lifting signaller certificate", "construction special operations certificate"],
            ),
        ]
        .into_iter()
        .map(|(trade, labels)| {
            (
                trade.to_string(),
                labels.into_iter().map(str::to_string).collect(),
            )
        })
        .collect();

        Self {
            min_training_score: 80,
            expiry_urgent_days: 7,
            expiry_warning_days: 30,
            generic_credential_labels,
            qualification_mode: QualificationMode::Lenient,
            special_work_credentials,
        }
    }
}

impl AdmissionConfig {
    pub fn is_generic_label(&self, label: &str) -> bool {
        self.generic_credential_labels.contains(label)
    }

    pub fn accepted_credentials(&self, work_type: &str) -> Option<&BTreeSet<String>> {
        self.special_work_credentials.get(work_type)
    }
}
