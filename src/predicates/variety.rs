//! Character variety predicates - uppercase, lowercase, digits, special chars.

use std::sync::LazyLock;

use regex::Regex;
use secrecy::{ExposeSecret, SecretString};
use super::PredicateResult;
use crate::error::FailureReason;

/// Any Unicode decimal digit (general category Nd), not only `0-9`.
static DECIMAL_DIGIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\p{Nd}").expect("decimal digit pattern is valid"));

/// Characters accepted by the special character check.
pub const SPECIAL_CHARACTERS: &[char] = &['@', '_', '#', '$', '%'];

/// Fails with `MissingUppercase` unless some character is uppercase.
pub fn check_has_uppercase(password: &SecretString) -> PredicateResult {
    if !password.expose_secret().chars().any(|c| c.is_uppercase()) {
        return Err(FailureReason::MissingUppercase);
    }
    Ok(())
}

/// Fails with `MissingLowercase` unless some character is lowercase.
pub fn check_has_lowercase(password: &SecretString) -> PredicateResult {
    if !password.expose_secret().chars().any(|c| c.is_lowercase()) {
        return Err(FailureReason::MissingLowercase);
    }
    Ok(())
}

/// Fails with `MissingDigit` unless some character is a decimal digit.
///
/// Digits from any script count, e.g. Arabic-Indic `٣` or Devanagari `७`.
pub fn check_has_digit(password: &SecretString) -> PredicateResult {
    if !DECIMAL_DIGIT.is_match(password.expose_secret()) {
        return Err(FailureReason::MissingDigit);
    }
    Ok(())
}

/// Fails with `MissingSpecialCharacter` unless some character is in `set`.
pub fn check_has_special_char(password: &SecretString, set: &[char]) -> PredicateResult {
    if !password.expose_secret().chars().any(|c| set.contains(&c)) {
        return Err(FailureReason::MissingSpecialCharacter);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_uppercase_missing() {
        assert_eq!(
            check_has_uppercase(&secret("lowercase123!")),
            Err(FailureReason::MissingUppercase)
        );
    }

    #[test]
    fn test_uppercase_non_ascii() {
        assert_eq!(check_has_uppercase(&secret("ñÑ")), Ok(()));
    }

    #[test]
    fn test_lowercase_missing() {
        assert_eq!(
            check_has_lowercase(&secret("UPPERCASE123!")),
            Err(FailureReason::MissingLowercase)
        );
        assert_eq!(check_has_lowercase(&secret("UPPERa")), Ok(()));
    }

    #[test]
    fn test_digit_missing() {
        assert_eq!(
            check_has_digit(&secret("NoNumbers!")),
            Err(FailureReason::MissingDigit)
        );
        assert_eq!(check_has_digit(&secret("One1")), Ok(()));
    }

    #[test]
    fn test_digit_non_ascii() {
        assert_eq!(check_has_digit(&secret("Abcdefgh٣@")), Ok(()));
        assert_eq!(check_has_digit(&secret("ab७")), Ok(()));
        // Numeric but not a decimal digit
        assert_eq!(
            check_has_digit(&secret("half½Ⅻ")),
            Err(FailureReason::MissingDigit)
        );
    }

    #[test]
    fn test_special_only_from_set() {
        assert_eq!(
            check_has_special_char(&secret("Bang!Star*"), SPECIAL_CHARACTERS),
            Err(FailureReason::MissingSpecialCharacter)
        );
        for c in SPECIAL_CHARACTERS {
            let pwd = secret(&format!("abc{c}"));
            assert_eq!(check_has_special_char(&pwd, SPECIAL_CHARACTERS), Ok(()));
        }
    }

    #[test]
    fn test_empty_password_fails_every_class() {
        let pwd = secret("");
        assert!(check_has_uppercase(&pwd).is_err());
        assert!(check_has_lowercase(&pwd).is_err());
        assert!(check_has_digit(&pwd).is_err());
        assert!(check_has_special_char(&pwd, SPECIAL_CHARACTERS).is_err());
    }
}
