//! Password policies - named, ordered compositions of predicates.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use secrecy::SecretString;

use crate::error::{FailureReason, PolicyError};
use crate::predicates::{
    Keyword, SPECIAL_CHARACTERS, check_has_digit, check_has_lowercase, check_has_special_char,
    check_has_uppercase, check_keyword, check_min_length,
};

/// One predicate application, with its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    MinLength(usize),
    Uppercase,
    Lowercase,
    Digit,
    SpecialCharacter,
    Keyword(Keyword),
}

impl Check {
    /// Builds a keyword check, rejecting an empty keyword.
    pub fn keyword(keyword: &'static str) -> Result<Self, PolicyError> {
        Keyword::new(keyword).map(Check::Keyword)
    }

    /// Stable name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Check::MinLength(_) => "min_length",
            Check::Uppercase => "uppercase",
            Check::Lowercase => "lowercase",
            Check::Digit => "digit",
            Check::SpecialCharacter => "special_character",
            Check::Keyword(_) => "keyword",
        }
    }

    pub fn apply(&self, password: &SecretString) -> Result<(), FailureReason> {
        match *self {
            Check::MinLength(threshold) => check_min_length(password, threshold),
            Check::Uppercase => check_has_uppercase(password),
            Check::Lowercase => check_has_lowercase(password),
            Check::Digit => check_has_digit(password),
            Check::SpecialCharacter => check_has_special_char(password, SPECIAL_CHARACTERS),
            Check::Keyword(keyword) => check_keyword(password, keyword),
        }
    }
}

/// Name and length threshold of a policy, readable by reporters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PolicyIdentity {
    pub name: &'static str,
    pub min_length: usize,
}

impl fmt::Display for PolicyIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// A fixed password rule.
///
/// Implementors supply a name, a length threshold and the ordered checks to
/// run. `evaluate` runs the checks in order and stops at the first failure,
/// so the reported reason depends only on the password and the check order.
pub trait Policy: Send + Sync {
    fn name(&self) -> &'static str;

    fn min_length(&self) -> usize;

    fn checks(&self) -> Cow<'_, [Check]>;

    fn identity(&self) -> PolicyIdentity {
        PolicyIdentity {
            name: self.name(),
            min_length: self.min_length(),
        }
    }

    fn evaluate(&self, password: &SecretString) -> Result<(), FailureReason> {
        for check in self.checks().iter() {
            if let Err(reason) = check.apply(password) {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    policy = self.name(),
                    check = check.name(),
                    "password check failed: {:?}",
                    reason
                );
                return Err(reason);
            }
        }
        Ok(())
    }
}

const GANIMEDES_MIN_LENGTH: usize = 8;

const GANIMEDES_CHECKS: &[Check] = &[
    Check::MinLength(GANIMEDES_MIN_LENGTH),
    Check::Uppercase,
    Check::Lowercase,
    Check::Digit,
    Check::SpecialCharacter,
];

const CALISTO_MIN_LENGTH: usize = 6;

const CALISTO_CHECKS: &[Check] = &[
    Check::MinLength(CALISTO_MIN_LENGTH),
    Check::Digit,
    Check::Keyword(Keyword::literal("calisto")),
];

/// Length over 8, upper and lower case letters, a digit and a special character.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ganimedes;

impl Ganimedes {
    pub fn new() -> Self {
        Self
    }
}

impl Policy for Ganimedes {
    fn name(&self) -> &'static str {
        "Ganimedes"
    }

    fn min_length(&self) -> usize {
        GANIMEDES_MIN_LENGTH
    }

    fn checks(&self) -> Cow<'_, [Check]> {
        Cow::Borrowed(GANIMEDES_CHECKS)
    }
}

/// Length over 6, a digit and the word "calisto" with mixed casing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Calisto;

impl Calisto {
    pub fn new() -> Self {
        Self
    }
}

impl Policy for Calisto {
    fn name(&self) -> &'static str {
        "Calisto"
    }

    fn min_length(&self) -> usize {
        CALISTO_MIN_LENGTH
    }

    fn checks(&self) -> Cow<'_, [Check]> {
        Cow::Borrowed(CALISTO_CHECKS)
    }
}

/// Supported policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolicyKind {
    Ganimedes,
    Calisto,
}

impl PolicyKind {
    pub const ALL: [PolicyKind; 2] = [PolicyKind::Ganimedes, PolicyKind::Calisto];

    pub fn name(&self) -> &'static str {
        match self {
            PolicyKind::Ganimedes => "Ganimedes",
            PolicyKind::Calisto => "Calisto",
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PolicyKind {
    type Err = PolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        PolicyKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| PolicyError::UnknownPolicy(wanted.to_string()))
    }
}

/// Creates a fresh policy of the given kind.
pub fn new_policy(kind: PolicyKind) -> Box<dyn Policy> {
    match kind {
        PolicyKind::Ganimedes => Box::new(Ganimedes::new()),
        PolicyKind::Calisto => Box::new(Calisto::new()),
    }
}
