//! Password predicates
//!
//! Each predicate checks one property of a password and yields the
//! matching [`FailureReason`] when it does not hold.

mod keyword;
mod length;
mod variety;

pub use keyword::{Keyword, check_keyword};
pub use length::check_min_length;
pub use variety::{
    SPECIAL_CHARACTERS, check_has_digit, check_has_lowercase, check_has_special_char,
    check_has_uppercase,
};

use crate::error::FailureReason;

/// Result type for predicate functions.
/// - `Ok(())` - Predicate holds
/// - `Err(reason)` - Predicate failed with reason
pub type PredicateResult = Result<(), FailureReason>;
