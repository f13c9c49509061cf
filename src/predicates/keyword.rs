//! Keyword predicate - requires an embedded keyword with mixed casing.

use secrecy::{ExposeSecret, SecretString};
use super::PredicateResult;
use crate::error::{FailureReason, PolicyError};

const MIN_UPPERCASE: usize = 2;

/// A non-empty keyword for [`check_keyword`].
///
/// The only public way to build one is [`Keyword::new`], which rejects an
/// empty word with [`PolicyError::EmptyKeyword`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Keyword(&'static str);

impl Keyword {
    pub fn new(word: &'static str) -> Result<Self, PolicyError> {
        if word.is_empty() {
            return Err(PolicyError::EmptyKeyword);
        }
        Ok(Self(word))
    }

    /// Const constructor for compiled-in policies. Fails to compile when
    /// evaluated in a const context with an empty word.
    pub(crate) const fn literal(word: &'static str) -> Self {
        assert!(!word.is_empty(), "keyword must not be empty");
        Self(word)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

/// Checks that `keyword` appears in the password with mixed casing.
///
/// The first case-insensitive occurrence of `keyword` is located, then the
/// uppercase letters inside that span are counted using the password's own
/// casing. The span must hold at least two uppercase letters and must not be
/// entirely uppercase.
///
/// # Returns
/// - `Err(FailureReason::KeywordConstraintViolated)` if the keyword is
///   absent or its casing is out of range
/// - `Ok(())` otherwise
pub fn check_keyword(password: &SecretString, keyword: Keyword) -> PredicateResult {
    let chars: Vec<char> = password.expose_secret().chars().collect();
    let needle: Vec<char> = keyword.as_str().chars().collect();

    let span = find_case_insensitive(&chars, &needle)
        .ok_or(FailureReason::KeywordConstraintViolated)?;

    let uppercase = span.iter().filter(|c| c.is_uppercase()).count();
    if uppercase < MIN_UPPERCASE || uppercase == needle.len() {
        return Err(FailureReason::KeywordConstraintViolated);
    }
    Ok(())
}

/// Returns the first window of `haystack` matching `needle` ignoring case.
fn find_case_insensitive<'a>(haystack: &'a [char], needle: &[char]) -> Option<&'a [char]> {
    if needle.len() > haystack.len() {
        return None;
    }
    haystack.windows(needle.len()).find(|window| {
        window
            .iter()
            .zip(needle)
            .all(|(a, b)| a.to_lowercase().eq(b.to_lowercase()))
    })
}
