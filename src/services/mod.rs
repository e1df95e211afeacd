pub mod messaging;
pub mod registry;
pub mod setup;

use crate::{errors::ValidationError, whatsapp::SendResult};
use async_trait::async_trait;

/// Operations a host adapter wires into its own dispatch mechanism
#[async_trait]
pub trait MessagingService: Send + Sync {
    fn list_operations(&self) -> &'static [&'static str];

    /// Validates `params` and performs the named operation. Only input
    /// validation fails; send failures come back inside [`SendResult`].
    async fn invoke(
        &self,
        operation: &str,
        params: &serde_json::Value,
    ) -> Result<SendResult, ValidationError>;
}
