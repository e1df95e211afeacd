use crate::{
    consts,
    errors::ValidationError,
    models::{
        connection::ConnectionConfig,
        send_request::{
            DocumentMessage, DocumentType, MediaMessage, MediaType, Priority, SendRequest,
            TextMessage,
        },
    },
    services::MessagingService,
    whatsapp::{SendResult, dispatcher::Dispatcher, request::RequestBuilder},
};
use async_trait::async_trait;
use log::{debug, error, info};
use serde_json::{Map, Value};

/// Operation names every messaging service exposes
pub const OPERATIONS: [&str; 3] = [
    consts::SERVICE_SEND_TEXT,
    consts::SERVICE_SEND_MEDIA,
    consts::SERVICE_SEND_DOCUMENT,
];

const TEXT_KEYS: [&str; 3] = [
    consts::ATTR_RECIPIENT,
    consts::ATTR_MESSAGE,
    consts::ATTR_PRIORITY,
];

const MEDIA_KEYS: [&str; 5] = [
    consts::ATTR_RECIPIENT,
    consts::ATTR_MEDIA_URL,
    consts::ATTR_MEDIA_TYPE,
    consts::ATTR_CAPTION,
    consts::ATTR_PRIORITY,
];

const DOCUMENT_KEYS: [&str; 6] = [
    consts::ATTR_RECIPIENT,
    consts::ATTR_DOCUMENT_URL,
    consts::ATTR_DOCUMENT_NAME,
    consts::ATTR_DOCUMENT_TYPE,
    consts::ATTR_CAPTION,
    consts::ATTR_PRIORITY,
];

/// Send operations bound to one configured connection
#[derive(Clone)]
pub struct WhatsAppService {
    connection: ConnectionConfig,
    builder: RequestBuilder,
    dispatcher: Dispatcher,
}

impl WhatsAppService {
    pub fn new(connection: ConnectionConfig, builder: RequestBuilder, dispatcher: Dispatcher) -> Self {
        Self {
            connection,
            builder,
            dispatcher,
        }
    }

    /// Builds and dispatches an already validated request
    pub async fn send(&self, request: &SendRequest) -> SendResult {
        let gateway_request = self.builder.build(&self.connection, request);
        debug!(
            "{} via {:?} to {}",
            request.kind().service_name(),
            self.connection,
            gateway_request.url
        );
        self.dispatcher.dispatch(request.kind(), &gateway_request).await
    }

    pub async fn send_text(&self, params: &Value) -> Result<SendResult, ValidationError> {
        self.invoke(consts::SERVICE_SEND_TEXT, params).await
    }

    pub async fn send_media(&self, params: &Value) -> Result<SendResult, ValidationError> {
        self.invoke(consts::SERVICE_SEND_MEDIA, params).await
    }

    pub async fn send_document(&self, params: &Value) -> Result<SendResult, ValidationError> {
        self.invoke(consts::SERVICE_SEND_DOCUMENT, params).await
    }
}

#[async_trait]
impl MessagingService for WhatsAppService {
    fn list_operations(&self) -> &'static [&'static str] {
        &OPERATIONS
    }

    async fn invoke(&self, operation: &str, params: &Value) -> Result<SendResult, ValidationError> {
        let request = parse_request(operation, params).inspect_err(|e| {
            error!("Rejected {operation} call: {e}");
        })?;

        let result = self.send(&request).await;
        if result.is_success() {
            info!("{operation} to {} completed", request.recipient());
        }

        Ok(result)
    }
}

/// Validates service call data against the schema of `operation`
pub fn parse_request(operation: &str, params: &Value) -> Result<SendRequest, ValidationError> {
    let empty = Map::new();
    let data = match params {
        Value::Object(map) => map,
        Value::Null => &empty,
        _ => return Err(ValidationError::new("data", "expected a mapping")),
    };

    match operation {
        consts::SERVICE_SEND_TEXT => {
            reject_extra_keys(data, &TEXT_KEYS)?;
            Ok(SendRequest::Text(TextMessage {
                recipient: recipient(data)?,
                message: required_string(data, consts::ATTR_MESSAGE)?,
                priority: Priority::from_param(data.get(consts::ATTR_PRIORITY))?,
            }))
        }
        consts::SERVICE_SEND_MEDIA => {
            reject_extra_keys(data, &MEDIA_KEYS)?;
            Ok(SendRequest::Media(MediaMessage {
                recipient: recipient(data)?,
                media_url: required_string(data, consts::ATTR_MEDIA_URL)?,
                media_type: required_string(data, consts::ATTR_MEDIA_TYPE)?
                    .parse::<MediaType>()?,
                caption: optional_string(data, consts::ATTR_CAPTION)?,
                priority: Priority::from_param(data.get(consts::ATTR_PRIORITY))?,
            }))
        }
        consts::SERVICE_SEND_DOCUMENT => {
            reject_extra_keys(data, &DOCUMENT_KEYS)?;
            Ok(SendRequest::Document(DocumentMessage {
                recipient: recipient(data)?,
                document_url: required_string(data, consts::ATTR_DOCUMENT_URL)?,
                document_name: required_string(data, consts::ATTR_DOCUMENT_NAME)?,
                document_type: required_string(data, consts::ATTR_DOCUMENT_TYPE)?
                    .parse::<DocumentType>()?,
                caption: optional_string(data, consts::ATTR_CAPTION)?,
                priority: Priority::from_param(data.get(consts::ATTR_PRIORITY))?,
            }))
        }
        other => Err(ValidationError::new(
            "operation",
            format!("unknown operation {other:?}"),
        )),
    }
}

fn reject_extra_keys(data: &Map<String, Value>, allowed: &[&str]) -> Result<(), ValidationError> {
    match data.keys().find(|key| !allowed.contains(&key.as_str())) {
        Some(key) => Err(ValidationError::new(key, "extra keys not allowed")),
        None => Ok(()),
    }
}

fn recipient(data: &Map<String, Value>) -> Result<String, ValidationError> {
    let value = required_string(data, consts::ATTR_RECIPIENT)?;
    if value.trim().is_empty() {
        return Err(ValidationError::new(consts::ATTR_RECIPIENT, "must not be empty"));
    }
    Ok(value)
}

fn required_string(data: &Map<String, Value>, field: &str) -> Result<String, ValidationError> {
    match data.get(field) {
        None | Some(Value::Null) => Err(ValidationError::required(field)),
        Some(value) => coerce_string(field, value),
    }
}

fn optional_string(data: &Map<String, Value>, field: &str) -> Result<String, ValidationError> {
    match data.get(field) {
        None | Some(Value::Null) => Ok(String::new()),
        Some(value) => coerce_string(field, value),
    }
}

/// Scalars are accepted as text, collections are not
fn coerce_string(field: &str, value: &Value) -> Result<String, ValidationError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        _ => Err(ValidationError::new(field, "expected a string")),
    }
}
