//! Pure per-gate rules. Each function maps one person's fields to a single
//! [`CheckOutcome`]; nothing here touches shared state, so the aggregator can
//! fan these out across workers freely.

use chrono::NaiveDate;

use super::blacklist::BlacklistIndex;
use super::config::{AdmissionConfig, QualificationMode};
use super::domain::{CheckEvidence, CheckKind, CheckOutcome, DateField, Person};

pub(crate) fn check_blacklist(person: &Person, index: &BlacklistIndex) -> CheckOutcome {
    let listed = index.contains(&person.identity_number);
    let evidence = CheckEvidence::Membership { listed };

    if listed {
        CheckOutcome::critical(
            CheckKind::Blacklist,
            "identity number is on the denylist, entry refused",
            evidence,
        )
    } else {
        CheckOutcome::ok(CheckKind::Blacklist, "not on the denylist", evidence)
    }
}

/// Certificate lifecycle check: missing, malformed, expired, urgent,
/// advisory, or valid. First match wins, in that order.
pub(crate) fn check_expiry(
    person: &Person,
    config: &AdmissionConfig,
    today: NaiveDate,
) -> CheckOutcome {
    let kind = CheckKind::CredentialExpiry;

    let field = match (person.credential_label(), person.credential_expiry.as_ref()) {
        (Some(_), Some(field)) => field,
        _ => {
            return if person.special_worker {
                CheckOutcome::critical(
                    kind,
                    "missing required credential for regulated work",
                    CheckEvidence::None,
                )
            } else {
                CheckOutcome::ok(
                    kind,
                    "ordinary trade, no regulated credential required",
                    CheckEvidence::None,
                )
            };
        }
    };

    let expiry = match field {
        DateField::On(date) => *date,
        DateField::Malformed(raw) => {
            return CheckOutcome::data_error(
                kind,
                format!("unparseable expiry date '{raw}'"),
                CheckEvidence::None,
            );
        }
    };

    let days = (expiry - today).num_days();
    let evidence = CheckEvidence::DaysUntilExpiry(days);

    if days < 0 {
        CheckOutcome::critical(kind, format!("expired {} days ago", -days), evidence)
    } else if days <= config.expiry_urgent_days {
        CheckOutcome::critical(kind, format!("expires in {days} days (urgent)"), evidence)
    } else if days <= config.expiry_warning_days {
        // Still admitted, but flagged for renewal follow-up.
        CheckOutcome::warning(kind, true, format!("expires in {days} days (advisory)"), evidence)
    } else {
        CheckOutcome::ok(kind, format!("valid, {days} days remaining"), evidence)
    }
}

/// Shallow well-formedness check on the credential number. Real registry
/// verification is an external concern; this only catches obvious capture
/// mistakes. Skipped when no regulated credential is on file.
pub(crate) fn check_credential_format(person: &Person) -> CheckOutcome {
    let kind = CheckKind::CredentialFormat;

    if person.credential_label().is_none() {
        return CheckOutcome::ok(
            kind,
            "no regulated credential on file, format check skipped",
            CheckEvidence::None,
        );
    }

    let number = match person.credential_no() {
        Some(number) => number,
        None => {
            return CheckOutcome::ok(
                kind,
                "credential number pending issue, format check skipped",
                CheckEvidence::None,
            );
        }
    };

    let evidence = CheckEvidence::CredentialNumber(number.to_string());
    let well_formed =
        number.len() >= 8 && number.chars().take(2).filter(|c| c.is_ascii_alphabetic()).count() == 2;

    if well_formed {
        CheckOutcome::ok(kind, "credential number format is valid", evidence)
    } else {
        CheckOutcome::critical(kind, "credential number format is invalid", evidence)
    }
}

/// Training gaps are correctable, so a failure here is a warning rather than
/// a hard block. Every failing condition is spelled out in one message.
pub(crate) fn check_training(person: &Person, config: &AdmissionConfig) -> CheckOutcome {
    let kind = CheckKind::Training;
    let has_record = person.training_date.is_some();
    let evidence = CheckEvidence::Training {
        has_record,
        score: person.training_score,
    };

    let mut issues = Vec::new();
    if !has_record {
        issues.push("no onboarding training on record".to_string());
    }
    if person.training_score < config.min_training_score {
        issues.push(format!(
            "training score {} below minimum {}",
            person.training_score, config.min_training_score
        ));
    }

    if issues.is_empty() {
        CheckOutcome::ok(kind, "onboarding training complete", evidence)
    } else {
        CheckOutcome::warning(kind, false, issues.join("; "), evidence)
    }
}

pub(crate) fn check_qualification(person: &Person, config: &AdmissionConfig) -> CheckOutcome {
    let kind = CheckKind::Qualification;
    let evidence = CheckEvidence::CredentialLabel {
        work_type: person.work_type.clone(),
        credential_type: person.credential_label().map(str::to_string),
    };

    if !person.special_worker {
        return CheckOutcome::ok(
            kind,
            "ordinary trade, no regulated credential match required",
            evidence,
        );
    }

    let label = match person.credential_label() {
        Some(label) if !config.is_generic_label(label) => label,
        _ => {
            return CheckOutcome::critical(
                kind,
                format!("{} requires a regulated operating credential", person.work_type),
                evidence,
            );
        }
    };

    if config.qualification_mode == QualificationMode::Strict {
        if let Some(accepted) = config.accepted_credentials(&person.work_type) {
            if !accepted.contains(label) {
                return CheckOutcome::critical(
                    kind,
                    format!("'{label}' is not accepted for {}", person.work_type),
                    evidence,
                );
            }
        }
    }

    CheckOutcome::ok(kind, "credential matches regulated role", evidence)
}
