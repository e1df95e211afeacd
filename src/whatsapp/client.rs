//! # ConvoChat HTTP Client
//!
//! The single seam where requests described by [`GatewayRequest`] turn into
//! network I/O. The reqwest implementation backs production use; tests swap in
//! the generated `MockHttpTransport`.

use super::schemas::{GatewayRequest, HttpMethod, RequestBody, TransportResponse};
use crate::errors::TransportError;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Executes one request. Only network-level failures are errors; any HTTP
    /// status comes back as a [`TransportResponse`].
    async fn execute(&self, request: &GatewayRequest) -> Result<TransportResponse, TransportError>;
}

/// HTTP client for the gateway and the hosted ConvoChat API
pub struct ReqwestTransport {
    /// HTTP client for making API requests
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Creates a client that keeps no idle connections, so every call opens
    /// and releases its own connection.
    pub fn new() -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .pool_max_idle_per_host(0)
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(&self, request: &GatewayRequest) -> Result<TransportResponse, TransportError> {
        let mut builder = match request.method {
            HttpMethod::Get => self.client.get(&request.url),
            HttpMethod::Post => self.client.post(&request.url),
        };

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }

        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        builder = match &request.body {
            RequestBody::Empty => builder,
            RequestBody::Json(payload) => builder.json(payload),
            RequestBody::Form(fields) => {
                let form = fields
                    .iter()
                    .fold(reqwest::multipart::Form::new(), |form, (name, value)| {
                        form.text(name.clone(), value.clone())
                    });
                builder.multipart(form)
            }
        };

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();

        Ok(TransportResponse { status, body })
    }
}
