//! Error types: validation outcomes and contract violations.

use thiserror::Error;

use crate::policy::PolicyIdentity;

/// Why a password failed a policy.
///
/// These are expected outcomes of validation, not faults. The message text
/// here is policy-agnostic; messages that include policy parameters such as
/// the length threshold belong to the reporting layer.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureReason {
    #[error("password is too short")]
    InsufficientLength,
    #[error("password has no uppercase letter")]
    MissingUppercase,
    #[error("password has no lowercase letter")]
    MissingLowercase,
    #[error("password has no digit")]
    MissingDigit,
    #[error("password has no special character")]
    MissingSpecialCharacter,
    #[error("password keyword is missing or has the wrong casing")]
    KeywordConstraintViolated,
}

/// A failed evaluation: the first violated check and the policy that ran it.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{policy}: {reason}")]
pub struct Rejection {
    pub policy: PolicyIdentity,
    pub reason: FailureReason,
}

impl Rejection {
    pub fn new(policy: PolicyIdentity, reason: FailureReason) -> Self {
        Self { policy, reason }
    }
}

/// Misuse of the API, reported separately from validation failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PolicyError {
    #[error("Unknown password policy: {0}")]
    UnknownPolicy(String),
    #[error("Keyword check requires a non-empty keyword")]
    EmptyKeyword,
}
