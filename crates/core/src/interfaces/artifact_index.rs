//! Remote artifact lookup interface
//!
//! Abstracts the service that maps a compiled artifact name to the source
//! location it was built from, so resolution can be exercised without a
//! network.

use async_trait::async_trait;

use super::Notifier;

/// Trait for looking up where a compiled artifact's sources live.
#[async_trait]
pub trait ArtifactIndex: Send + Sync {
    /// Return the artifact's source path relative to a configured root, or
    /// `None` when it cannot be determined. Failures are reported through
    /// `notifier`, never returned.
    async fn locate(&self, artifact: &str, notifier: &dyn Notifier) -> Option<String>;
}
