//! Human-readable messages for validation outcomes.

use crate::error::FailureReason;
use crate::policy::PolicyIdentity;
use crate::validator::Outcome;

/// Returns the message for `reason` as reported by `policy`.
///
/// `InsufficientLength` includes the policy's own threshold.
pub fn failure_message(policy: PolicyIdentity, reason: FailureReason) -> String {
    match reason {
        FailureReason::InsufficientLength => format!(
            "Password must be longer than {} characters",
            policy.min_length
        ),
        FailureReason::MissingUppercase => {
            "Password must contain at least one uppercase letter".to_string()
        }
        FailureReason::MissingLowercase => {
            "Password must contain at least one lowercase letter".to_string()
        }
        FailureReason::MissingDigit => "Password must contain at least one number".to_string(),
        FailureReason::MissingSpecialCharacter => {
            "Password must contain at least one special character (@, _, #, $ or %)".to_string()
        }
        FailureReason::KeywordConstraintViolated => {
            "The word calisto must be written with at least two uppercase letters, but not all of them"
                .to_string()
        }
    }
}

/// Renders one outcome line for the given policy.
///
/// `policy` supplies the name and threshold for both branches; the
/// rejection only contributes its reason.
pub fn render_outcome(policy: PolicyIdentity, outcome: &Outcome) -> String {
    match outcome {
        Ok(()) => format!("Password is valid for {}", policy.name),
        Err(rejection) => format!(
            "Error: {}: {}",
            policy.name,
            failure_message(policy, rejection.reason)
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Rejection;

    const GANIMEDES: PolicyIdentity = PolicyIdentity {
        name: "Ganimedes",
        min_length: 8,
    };
    const CALISTO: PolicyIdentity = PolicyIdentity {
        name: "Calisto",
        min_length: 6,
    };

    #[test]
    fn test_length_message_uses_threshold() {
        assert_eq!(
            failure_message(GANIMEDES, FailureReason::InsufficientLength),
            "Password must be longer than 8 characters"
        );
        assert_eq!(
            failure_message(CALISTO, FailureReason::InsufficientLength),
            "Password must be longer than 6 characters"
        );
    }

    #[test]
    fn test_other_messages_ignore_policy() {
        for reason in [
            FailureReason::MissingUppercase,
            FailureReason::MissingLowercase,
            FailureReason::MissingDigit,
            FailureReason::MissingSpecialCharacter,
            FailureReason::KeywordConstraintViolated,
        ] {
            assert_eq!(
                failure_message(GANIMEDES, reason),
                failure_message(CALISTO, reason)
            );
        }
    }

    #[test]
    fn test_render_valid() {
        assert_eq!(
            render_outcome(CALISTO, &Ok(())),
            "Password is valid for Calisto"
        );
    }

    #[test]
    fn test_render_rejection() {
        let outcome = Err(Rejection::new(GANIMEDES, FailureReason::MissingDigit));
        assert_eq!(
            render_outcome(GANIMEDES, &outcome),
            "Error: Ganimedes: Password must contain at least one number"
        );
    }

    #[test]
    fn test_render_rejection_uses_given_policy() {
        let outcome = Err(Rejection::new(GANIMEDES, FailureReason::InsufficientLength));
        assert_eq!(
            render_outcome(CALISTO, &outcome),
            "Error: Calisto: Password must be longer than 6 characters"
        );
    }
}
