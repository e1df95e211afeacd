//! # Gateway Wire Schemas
//!
//! Transport-neutral descriptions of the requests sent to the ConvoChat API and
//! of the responses read back from it.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

/// Encoding of an outgoing request body
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    /// No body, used by GET lookups
    Empty,
    /// `application/json` payload (local gateway)
    Json(serde_json::Value),
    /// `multipart/form-data` fields, in order (hosted API)
    Form(Vec<(String, String)>),
}

impl RequestBody {
    /// Looks up a form field or a top-level json key rendered as text
    pub fn field(&self, name: &str) -> Option<String> {
        match self {
            RequestBody::Empty => None,
            RequestBody::Json(value) => value.get(name).map(|v| match v {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            }),
            RequestBody::Form(fields) => fields
                .iter()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.clone()),
        }
    }
}

/// Full description of one HTTP call, built before any I/O happens
#[derive(Debug, Clone, PartialEq)]
pub struct GatewayRequest {
    pub method: HttpMethod,
    pub url: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub body: RequestBody,
}

impl GatewayRequest {
    pub fn post(url: String, body: RequestBody) -> Self {
        Self {
            method: HttpMethod::Post,
            url,
            query: vec![],
            headers: vec![],
            body,
        }
    }

    pub fn get(url: String, query: Vec<(String, String)>) -> Self {
        Self {
            method: HttpMethod::Get,
            url,
            query,
            headers: vec![],
            body: RequestBody::Empty,
        }
    }

    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Raw response handed back by a transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    /// Body as text, empty when it could not be read
    pub body: String,
}

/// Envelope of `GET /get/wa.accounts`
#[derive(Debug, Deserialize, Serialize)]
pub struct AccountsResponse {
    pub status: Option<i64>,
    pub message: Option<String>,
    pub data: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_body_field_lookup() {
        let json_body = RequestBody::Json(json!({"recipient": "155", "priority": 2}));
        assert_eq!(json_body.field("recipient").as_deref(), Some("155"));
        assert_eq!(json_body.field("priority").as_deref(), Some("2"));

        let form_body = RequestBody::Form(vec![("type".into(), "text".into())]);
        assert_eq!(form_body.field("type").as_deref(), Some("text"));
        assert_eq!(form_body.field("secret"), None);
    }

    #[test]
    fn test_accounts_response_deserialization() {
        let json = r#"{"status":403,"message":"Invalid API secret!","data":false}"#;
        let rsp: AccountsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(rsp.status, Some(403));
        assert_eq!(rsp.data, Some(json!(false)));
    }
}
