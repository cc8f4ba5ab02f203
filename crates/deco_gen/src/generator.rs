//! Text-generation collaborator trait.

use async_trait::async_trait;

use crate::contract::GenerationRequest;
use crate::error::GenResult;

/// External text-generation service.
///
/// Implementations call out to a generative backend; timeouts and
/// cancellation live behind this trait, never in the core. The rest of the
/// workspace stays synchronous.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Produce a candidate document honoring the request's word contract.
    async fn generate(&self, request: &GenerationRequest) -> GenResult<String>;
}
