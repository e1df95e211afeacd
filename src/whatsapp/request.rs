//! # Request Builder
//!
//! Maps a validated [`SendRequest`] onto the wire shape expected by the
//! configured credential type. Pure: no I/O happens here.
//!
//! | Connection                | Endpoint                       | Body      | Auth              |
//! |---------------------------|--------------------------------|-----------|-------------------|
//! | `Gateway`                 | `http://host:port/send/{kind}` | json      | none              |
//! | `ApiKeyAccountId`         | `API_BASE_URL/send/{kind}`     | multipart | headers           |
//! | `ApiKeyWhatsAppAccount`   | `API_BASE_URL/send/whatsapp`   | multipart | `secret`/`account` fields |

use super::schemas::{GatewayRequest, RequestBody};
use crate::{
    consts,
    models::{connection::ConnectionConfig, send_request::SendRequest},
};
use serde_json::{Map, Value};

#[derive(Debug, Clone)]
pub struct RequestBuilder {
    api_base_url: String,
}

impl Default for RequestBuilder {
    fn default() -> Self {
        Self::new(consts::API_BASE_URL)
    }
}

impl RequestBuilder {
    pub fn new(api_base_url: &str) -> Self {
        Self {
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build(&self, connection: &ConnectionConfig, request: &SendRequest) -> GatewayRequest {
        let base_url = connection.base_url(&self.api_base_url);
        let kind = request.kind();

        match connection {
            ConnectionConfig::Gateway { .. } => {
                GatewayRequest::post(format!("{base_url}/send/{kind}"), json_body(request))
            }
            ConnectionConfig::ApiKeyAccountId {
                api_key,
                account_id,
            } => GatewayRequest::post(format!("{base_url}/send/{kind}"), form_body(request))
                .with_header(consts::HEADER_API_KEY, api_key)
                .with_header(consts::HEADER_ACCOUNT_ID, account_id),
            ConnectionConfig::ApiKeyWhatsAppAccount {
                api_key,
                whatsapp_account,
            } => {
                let mut fields = vec![
                    ("secret".to_string(), api_key.clone()),
                    ("account".to_string(), whatsapp_account.clone()),
                    (consts::ATTR_RECIPIENT.to_string(), request.recipient().to_string()),
                    ("type".to_string(), kind.to_string()),
                ];
                fields.extend(
                    request
                        .content_fields()
                        .into_iter()
                        .map(|(key, value)| (key.to_string(), value)),
                );
                fields.push((
                    consts::ATTR_PRIORITY.to_string(),
                    request.priority().to_string(),
                ));

                GatewayRequest::post(format!("{base_url}/send/whatsapp"), RequestBody::Form(fields))
            }
        }
    }
}

/// Local gateway payload, priority kept as an integer
fn json_body(request: &SendRequest) -> RequestBody {
    let mut payload = Map::new();
    payload.insert(
        consts::ATTR_RECIPIENT.into(),
        Value::String(request.recipient().to_string()),
    );
    for (key, value) in request.content_fields() {
        payload.insert(key.into(), Value::String(value));
    }
    payload.insert(
        consts::ATTR_PRIORITY.into(),
        Value::from(request.priority().as_u8()),
    );

    RequestBody::Json(Value::Object(payload))
}

/// Hosted API payload, every value stringified
fn form_body(request: &SendRequest) -> RequestBody {
    let mut fields = vec![(
        consts::ATTR_RECIPIENT.to_string(),
        request.recipient().to_string(),
    )];
    fields.extend(
        request
            .content_fields()
            .into_iter()
            .map(|(key, value)| (key.to_string(), value)),
    );
    fields.push((
        consts::ATTR_PRIORITY.to_string(),
        request.priority().to_string(),
    ));

    RequestBody::Form(fields)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::send_request::{
        DocumentMessage, DocumentType, MediaMessage, MediaType, Priority, TextMessage,
    };
    use crate::whatsapp::schemas::HttpMethod;
    use serde_json::json;

    fn text_request() -> SendRequest {
        SendRequest::Text(TextMessage {
            recipient: "15551234567".into(),
            message: "hi".into(),
            priority: Priority::Normal,
        })
    }

    fn media_request() -> SendRequest {
        SendRequest::Media(MediaMessage {
            recipient: "15551234567".into(),
            media_url: "https://cdn.example/cat.png".into(),
            media_type: MediaType::Image,
            caption: "look".into(),
            priority: Priority::High,
        })
    }

    fn document_request() -> SendRequest {
        SendRequest::Document(DocumentMessage {
            recipient: "15551234567".into(),
            document_url: "https://cdn.example/invoice.pdf".into(),
            document_name: "invoice.pdf".into(),
            document_type: DocumentType::Pdf,
            caption: String::new(),
            priority: Priority::Normal,
        })
    }

    fn form(fields: &[(&str, &str)]) -> RequestBody {
        RequestBody::Form(
            fields
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_gateway_text_is_json() {
        let connection = ConnectionConfig::Gateway {
            host: "10.0.0.2".into(),
            port: 8099,
        };
        let built = RequestBuilder::default().build(&connection, &text_request());

        assert_eq!(built.method, HttpMethod::Post);
        assert_eq!(built.url, "http://10.0.0.2:8099/send/text");
        assert!(built.headers.is_empty());
        assert_eq!(
            built.body,
            RequestBody::Json(json!({"recipient": "15551234567", "message": "hi", "priority": 2}))
        );
    }

    #[test]
    fn test_gateway_media_and_document_use_message_for_caption() {
        let connection = ConnectionConfig::gateway(None, None);
        let builder = RequestBuilder::default();

        let media = builder.build(&connection, &media_request());
        assert_eq!(media.url, "http://172.30.33.5:8099/send/media");
        assert_eq!(
            media.body,
            RequestBody::Json(json!({
                "recipient": "15551234567",
                "media_url": "https://cdn.example/cat.png",
                "media_type": "image",
                "message": "look",
                "priority": 1
            }))
        );

        let document = builder.build(&connection, &document_request());
        assert_eq!(document.url, "http://172.30.33.5:8099/send/document");
        assert_eq!(
            document.body,
            RequestBody::Json(json!({
                "recipient": "15551234567",
                "document_url": "https://cdn.example/invoice.pdf",
                "document_name": "invoice.pdf",
                "document_type": "pdf",
                "message": "",
                "priority": 2
            }))
        );
    }

    #[test]
    fn test_account_id_variant_uses_headers_and_form() {
        let connection = ConnectionConfig::ApiKeyAccountId {
            api_key: "K".into(),
            account_id: "7".into(),
        };
        let built = RequestBuilder::default().build(&connection, &media_request());

        assert_eq!(built.url, "https://sms.convo.chat/api/send/media");
        assert_eq!(built.header("X-API-Key"), Some("K"));
        assert_eq!(built.header("X-Account-Id"), Some("7"));
        assert_eq!(
            built.body,
            form(&[
                ("recipient", "15551234567"),
                ("media_url", "https://cdn.example/cat.png"),
                ("media_type", "image"),
                ("message", "look"),
                ("priority", "1"),
            ])
        );
    }

    #[test]
    fn test_whatsapp_account_variant_single_endpoint() {
        let connection = ConnectionConfig::ApiKeyWhatsAppAccount {
            api_key: "K".into(),
            whatsapp_account: "ACC1".into(),
        };
        let builder = RequestBuilder::default();

        let text = builder.build(&connection, &text_request());
        assert_eq!(text.url, "https://sms.convo.chat/api/send/whatsapp");
        assert!(text.headers.is_empty());
        assert_eq!(
            text.body,
            form(&[
                ("secret", "K"),
                ("account", "ACC1"),
                ("recipient", "15551234567"),
                ("type", "text"),
                ("message", "hi"),
                ("priority", "2"),
            ])
        );

        let document = builder.build(&connection, &document_request());
        assert_eq!(document.url, "https://sms.convo.chat/api/send/whatsapp");
        assert_eq!(document.body.field("type").as_deref(), Some("document"));
        assert_eq!(document.body.field("document_name").as_deref(), Some("invoice.pdf"));
        assert_eq!(document.body.field("document_type").as_deref(), Some("pdf"));
    }

    #[test]
    fn test_every_required_field_present_for_all_variants() {
        let connections = [
            ConnectionConfig::gateway(None, None),
            ConnectionConfig::ApiKeyAccountId {
                api_key: "K".into(),
                account_id: "7".into(),
            },
            ConnectionConfig::ApiKeyWhatsAppAccount {
                api_key: "K".into(),
                whatsapp_account: "ACC1".into(),
            },
        ];
        let cases = [
            (text_request(), vec!["recipient", "message", "priority"]),
            (
                media_request(),
                vec!["recipient", "media_url", "media_type", "message", "priority"],
            ),
            (
                document_request(),
                vec![
                    "recipient",
                    "document_url",
                    "document_name",
                    "document_type",
                    "message",
                    "priority",
                ],
            ),
        ];

        for connection in &connections {
            for (request, required) in &cases {
                let built = RequestBuilder::default().build(connection, request);
                for field in required {
                    assert!(
                        built.body.field(field).is_some(),
                        "{field} missing for {connection:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_custom_base_url_is_trimmed() {
        let connection = ConnectionConfig::ApiKeyAccountId {
            api_key: "K".into(),
            account_id: "7".into(),
        };
        let built = RequestBuilder::new("http://localhost:9000/api/").build(&connection, &text_request());
        assert_eq!(built.url, "http://localhost:9000/api/send/text");
    }
}
