//! Validator - binds one policy and evaluates passwords against it.

use secrecy::SecretString;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::error::Rejection;
use crate::policy::{Policy, PolicyIdentity, PolicyKind, new_policy};

/// Outcome of a single evaluation.
pub type Outcome = Result<(), Rejection>;

/// Runs one bound policy.
///
/// Callers depend on the validator instead of the concrete policy type.
pub struct Validator {
    policy: Box<dyn Policy>,
}

impl Validator {
    pub fn new(policy: Box<dyn Policy>) -> Self {
        Self { policy }
    }

    /// Binds a fresh policy of the given kind.
    pub fn for_kind(kind: PolicyKind) -> Self {
        Self::new(new_policy(kind))
    }

    pub fn policy(&self) -> &dyn Policy {
        self.policy.as_ref()
    }

    pub fn identity(&self) -> PolicyIdentity {
        self.policy.identity()
    }

    /// Evaluates the password against the bound policy.
    ///
    /// # Returns
    /// `Ok(())` if every check passes, otherwise a [`Rejection`] carrying
    /// the first failing reason and the policy identity.
    pub fn evaluate(&self, password: &SecretString) -> Outcome {
        self.policy
            .evaluate(password)
            .map_err(|reason| Rejection::new(self.policy.identity(), reason))
    }
}

impl std::fmt::Debug for Validator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Validator")
            .field("policy", &self.policy.identity())
            .finish()
    }
}

/// Async version that sends the outcome via channel.
///
/// Nothing is sent if `token` is cancelled before evaluation starts.
#[cfg(feature = "async")]
pub async fn evaluate_tx(
    validator: &Validator,
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<Outcome>,
) {
    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::info!(policy = validator.identity().name, "evaluation cancelled");
        return;
    }

    #[cfg(feature = "tracing")]
    tracing::info!(policy = validator.identity().name, "evaluation is about to start...");

    let outcome = validator.evaluate(password);

    if let Err(e) = tx.send(outcome).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password validation outcome: {}", e);
        #[cfg(not(feature = "tracing"))]
        let _ = e;
    }
}
