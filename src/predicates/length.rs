//! Length predicate - checks password minimum length.

use secrecy::{ExposeSecret, SecretString};
use super::PredicateResult;
use crate::error::FailureReason;

/// Checks that the password is strictly longer than `threshold`.
///
/// Length is counted in characters, not bytes. A password whose length
/// equals `threshold` is rejected.
///
/// # Returns
/// - `Err(FailureReason::InsufficientLength)` if password is too short
/// - `Ok(())` if password has sufficient length
pub fn check_min_length(password: &SecretString, threshold: usize) -> PredicateResult {
    if password.expose_secret().chars().count() <= threshold {
        return Err(FailureReason::InsufficientLength);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_length_too_short() {
        let pwd = SecretString::new("corta".to_string().into());
        assert_eq!(
            check_min_length(&pwd, 6),
            Err(FailureReason::InsufficientLength)
        );
    }

    #[test]
    fn test_min_length_exactly_threshold_is_rejected() {
        let pwd = SecretString::new("12345678".to_string().into());
        assert_eq!(
            check_min_length(&pwd, 8),
            Err(FailureReason::InsufficientLength)
        );
    }

    #[test]
    fn test_min_length_one_over_threshold() {
        let pwd = SecretString::new("123456789".to_string().into());
        assert_eq!(check_min_length(&pwd, 8), Ok(()));
    }

    #[test]
    fn test_min_length_counts_chars_not_bytes() {
        // 7 chars, 14 bytes
        let pwd = SecretString::new("ñññññññ".to_string().into());
        assert_eq!(
            check_min_length(&pwd, 8),
            Err(FailureReason::InsufficientLength)
        );
        assert_eq!(check_min_length(&pwd, 6), Ok(()));
    }

    #[test]
    fn test_min_length_empty() {
        let pwd = SecretString::new("".to_string().into());
        assert_eq!(
            check_min_length(&pwd, 0),
            Err(FailureReason::InsufficientLength)
        );
    }
}
