//! Password policy validation library
//!
//! This library validates passwords against fixed, named policies. Each
//! policy is an ordered list of checks; evaluation stops at the first
//! failing check and reports its [`FailureReason`].
//!
//! # Features
//!
//! - `async` (default): Enables sending outcomes over a channel with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Policies
//!
//! - `Ganimedes`: longer than 8 characters, with uppercase, lowercase, a digit
//!   and one of `@ _ # $ %`
//! - `Calisto`: longer than 6 characters, with a digit and the word
//!   "calisto" written with at least two (but not all) letters uppercase
//!
//! # Example
//!
//! ```rust
//! use pwd_rules::{FailureReason, PolicyKind, Validator};
//! use secrecy::SecretString;
//!
//! let validator = Validator::for_kind(PolicyKind::Ganimedes);
//!
//! let password = SecretString::new("Ab1@cAliStO".to_string().into());
//! assert!(validator.evaluate(&password).is_ok());
//!
//! let password = SecretString::new("abc123456".to_string().into());
//! let rejection = validator.evaluate(&password).unwrap_err();
//! assert_eq!(rejection.reason, FailureReason::MissingUppercase);
//! println!("{}", rejection);
//! ```

// Internal modules
mod error;
mod policy;
mod validator;

pub mod predicates;
pub mod report;

// Public API
pub use error::{FailureReason, PolicyError, Rejection};
pub use policy::{Calisto, Check, Ganimedes, Policy, PolicyIdentity, PolicyKind, new_policy};
pub use predicates::Keyword;
pub use validator::{Outcome, Validator};

#[cfg(feature = "async")]
pub use validator::evaluate_tx;
