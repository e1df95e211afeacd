//! # Dispatcher
//!
//! Executes a built request exactly once and classifies the outcome. Failures
//! are logged and returned as [`SendResult::Failed`], never raised.

use super::{client::HttpTransport, schemas::GatewayRequest};
use crate::{errors::DispatchError, models::send_request::SendKind};
use log::{error, info};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq)]
pub enum SendResult {
    /// Provider accepted the message; carries its response payload
    Sent(serde_json::Value),
    Failed(DispatchError),
}

impl SendResult {
    pub fn is_success(&self) -> bool {
        matches!(self, SendResult::Sent(_))
    }
}

#[derive(Clone)]
pub struct Dispatcher {
    transport: Arc<dyn HttpTransport>,
}

impl Dispatcher {
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self { transport }
    }

    pub async fn dispatch(&self, kind: SendKind, request: &GatewayRequest) -> SendResult {
        let response = match self.transport.execute(request).await {
            Ok(response) => response,
            Err(e) => {
                error!("Error sending {kind}: {e}");
                return SendResult::Failed(DispatchError::Connect(e.to_string()));
            }
        };

        if response.status != 200 {
            error!(
                "Failed to send {kind}: status={} body={}",
                response.status, response.body
            );
            return SendResult::Failed(DispatchError::Api {
                status: response.status,
                body: response.body,
            });
        }

        match serde_json::from_str::<serde_json::Value>(&response.body) {
            Ok(payload) => {
                info!("{kind} sent successfully: {payload}");
                SendResult::Sent(payload)
            }
            Err(e) => {
                error!("Error reading {kind} response: {e}");
                SendResult::Failed(DispatchError::InvalidPayload(e.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::TransportError;
    use crate::whatsapp::{
        client::MockHttpTransport,
        schemas::{RequestBody, TransportResponse},
    };
    use serde_json::json;

    fn request() -> GatewayRequest {
        GatewayRequest::post(
            "http://gateway/send/text".into(),
            RequestBody::Json(json!({"recipient": "1"})),
        )
    }

    fn dispatcher_returning(
        result: Result<TransportResponse, TransportError>,
    ) -> Dispatcher {
        let mut mock_transport = MockHttpTransport::new();
        mock_transport
            .expect_execute()
            .times(1)
            .returning(move |_| result.clone());

        Dispatcher::new(Arc::new(mock_transport))
    }

    #[tokio::test]
    async fn test_ok_status_with_json_is_success() {
        let dispatcher = dispatcher_returning(Ok(TransportResponse {
            status: 200,
            body: r#"{"status":200,"message":"WhatsApp chat has been queued for sending!"}"#.into(),
        }));

        let result = dispatcher.dispatch(SendKind::Text, &request()).await;

        assert_eq!(
            result,
            SendResult::Sent(json!({
                "status": 200,
                "message": "WhatsApp chat has been queued for sending!"
            }))
        );
    }

    #[tokio::test]
    async fn test_error_status_carries_status_and_body() {
        for status in [201, 400, 401, 500, 503] {
            let dispatcher = dispatcher_returning(Ok(TransportResponse {
                status,
                body: "nope".into(),
            }));

            let result = dispatcher.dispatch(SendKind::Media, &request()).await;

            assert_eq!(
                result,
                SendResult::Failed(DispatchError::Api {
                    status,
                    body: "nope".into()
                })
            );
        }
    }

    #[tokio::test]
    async fn test_network_failure_is_reported_not_raised() {
        let dispatcher =
            dispatcher_returning(Err(TransportError("connection refused".into())));

        let result = dispatcher.dispatch(SendKind::Document, &request()).await;

        assert_eq!(
            result,
            SendResult::Failed(DispatchError::Connect("connection refused".into()))
        );
        assert!(!result.is_success());
    }

    #[tokio::test]
    async fn test_ok_status_with_garbage_body_fails() {
        let dispatcher = dispatcher_returning(Ok(TransportResponse {
            status: 200,
            body: "<html>".into(),
        }));

        let result = dispatcher.dispatch(SendKind::Text, &request()).await;

        assert!(matches!(result, SendResult::Failed(DispatchError::InvalidPayload(_))));
    }
}
