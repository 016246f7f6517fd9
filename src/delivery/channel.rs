use async_trait::async_trait;

use super::error::DeliveryError;
use super::payload::FormPayload;

/// Acknowledgement returned by a successful delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    /// Opaque status text from the delivery service. Display only.
    pub status: String,
}

/// A channel that can deliver one booking request.
///
/// Exactly one outbound call per [`send`](Self::send) invocation: no
/// internal retry, no persistence of the payload. Implementations are
/// substituted with deterministic doubles in tests.
#[async_trait]
pub trait DeliveryChannel: Send + Sync {
    /// Delivers the payload, resolving once the attempt settles.
    async fn send(&self, payload: &FormPayload) -> Result<Receipt, DeliveryError>;
}
