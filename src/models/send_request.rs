use crate::{consts, errors::ValidationError};
use derive_more::Display;
use std::str::FromStr;

#[derive(Debug, Display, Clone, Copy, Default, PartialEq, Eq)]
pub enum Priority {
    #[display("1")]
    High,
    #[default]
    #[display("2")]
    Normal,
}

impl Priority {
    pub fn as_u8(&self) -> u8 {
        match self {
            Priority::High => 1,
            Priority::Normal => 2,
        }
    }

    /// Missing and null values fall back to [`Priority::Normal`].
    pub fn from_param(value: Option<&serde_json::Value>) -> Result<Self, ValidationError> {
        match value {
            None | Some(serde_json::Value::Null) => Ok(Priority::Normal),
            Some(v) => match v.as_f64() {
                Some(n) if n == 1.0 => Ok(Priority::High),
                Some(n) if n == 2.0 => Ok(Priority::Normal),
                _ => Err(ValidationError::new(
                    consts::ATTR_PRIORITY,
                    format!("value must be one of [1, 2], got {v}"),
                )),
            },
        }
    }
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    #[display("image")]
    Image,
    #[display("video")]
    Video,
    #[display("audio")]
    Audio,
}

impl FromStr for MediaType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "image" => Ok(MediaType::Image),
            "video" => Ok(MediaType::Video),
            "audio" => Ok(MediaType::Audio),
            other => Err(ValidationError::new(
                consts::ATTR_MEDIA_TYPE,
                format!(
                    "value must be one of {:?}, got {other:?}",
                    consts::ACCEPTED_MEDIA_TYPES
                ),
            )),
        }
    }
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum DocumentType {
    #[display("pdf")]
    Pdf,
    #[display("doc")]
    Doc,
    #[display("docx")]
    Docx,
    #[display("xls")]
    Xls,
    #[display("xlsx")]
    Xlsx,
    #[display("txt")]
    Txt,
}

impl FromStr for DocumentType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pdf" => Ok(DocumentType::Pdf),
            "doc" => Ok(DocumentType::Doc),
            "docx" => Ok(DocumentType::Docx),
            "xls" => Ok(DocumentType::Xls),
            "xlsx" => Ok(DocumentType::Xlsx),
            "txt" => Ok(DocumentType::Txt),
            other => Err(ValidationError::new(
                consts::ATTR_DOCUMENT_TYPE,
                format!(
                    "value must be one of {:?}, got {other:?}",
                    consts::ACCEPTED_DOCUMENT_TYPES
                ),
            )),
        }
    }
}

/// Which of the three send operations a request targets
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum SendKind {
    #[display("text")]
    Text,
    #[display("media")]
    Media,
    #[display("document")]
    Document,
}

impl SendKind {
    pub fn service_name(&self) -> &'static str {
        match self {
            SendKind::Text => consts::SERVICE_SEND_TEXT,
            SendKind::Media => consts::SERVICE_SEND_MEDIA,
            SendKind::Document => consts::SERVICE_SEND_DOCUMENT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextMessage {
    pub recipient: String,
    pub message: String,
    pub priority: Priority,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaMessage {
    pub recipient: String,
    pub media_url: String,
    pub media_type: MediaType,
    pub caption: String,
    pub priority: Priority,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentMessage {
    pub recipient: String,
    pub document_url: String,
    pub document_name: String,
    pub document_type: DocumentType,
    pub caption: String,
    pub priority: Priority,
}

/// A validated send operation. Only built through the validating constructors
/// of the service façade or by hand in typed callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendRequest {
    Text(TextMessage),
    Media(MediaMessage),
    Document(DocumentMessage),
}

impl SendRequest {
    pub fn kind(&self) -> SendKind {
        match self {
            SendRequest::Text(_) => SendKind::Text,
            SendRequest::Media(_) => SendKind::Media,
            SendRequest::Document(_) => SendKind::Document,
        }
    }

    pub fn recipient(&self) -> &str {
        match self {
            SendRequest::Text(m) => &m.recipient,
            SendRequest::Media(m) => &m.recipient,
            SendRequest::Document(m) => &m.recipient,
        }
    }

    pub fn priority(&self) -> Priority {
        match self {
            SendRequest::Text(m) => m.priority,
            SendRequest::Media(m) => m.priority,
            SendRequest::Document(m) => m.priority,
        }
    }

    /// Operation specific fields, in wire order, without recipient and priority.
    /// Media and document captions travel under the `message` key.
    pub fn content_fields(&self) -> Vec<(&'static str, String)> {
        match self {
            SendRequest::Text(m) => vec![(consts::ATTR_MESSAGE, m.message.clone())],
            SendRequest::Media(m) => vec![
                (consts::ATTR_MEDIA_URL, m.media_url.clone()),
                (consts::ATTR_MEDIA_TYPE, m.media_type.to_string()),
                (consts::ATTR_MESSAGE, m.caption.clone()),
            ],
            SendRequest::Document(m) => vec![
                (consts::ATTR_DOCUMENT_URL, m.document_url.clone()),
                (consts::ATTR_DOCUMENT_NAME, m.document_name.clone()),
                (consts::ATTR_DOCUMENT_TYPE, m.document_type.to_string()),
                (consts::ATTR_MESSAGE, m.caption.clone()),
            ],
        }
    }
}
