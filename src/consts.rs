pub const ENTRY_TITLE: &str = "ConvoChat WhatsApp";

/// ConvoChat hosted API
pub const API_BASE_URL: &str = "https://sms.convo.chat/api";
pub const ACCOUNTS_LIST_LIMIT: u32 = 100;

/// Local gateway add-on defaults
pub const DEFAULT_GATEWAY_HOST: &str = "172.30.33.5";
pub const DEFAULT_GATEWAY_PORT: u16 = 8099;
pub const GATEWAY_SCHEME: &str = "http";

pub const HEADER_API_KEY: &str = "X-API-Key";
pub const HEADER_ACCOUNT_ID: &str = "X-Account-Id";

pub const SERVICE_SEND_TEXT: &str = "send_text";
pub const SERVICE_SEND_MEDIA: &str = "send_media";
pub const SERVICE_SEND_DOCUMENT: &str = "send_document";

pub const ATTR_RECIPIENT: &str = "recipient";
pub const ATTR_MESSAGE: &str = "message";
pub const ATTR_CAPTION: &str = "caption";
pub const ATTR_PRIORITY: &str = "priority";
pub const ATTR_MEDIA_URL: &str = "media_url";
pub const ATTR_MEDIA_TYPE: &str = "media_type";
pub const ATTR_DOCUMENT_URL: &str = "document_url";
pub const ATTR_DOCUMENT_NAME: &str = "document_name";
pub const ATTR_DOCUMENT_TYPE: &str = "document_type";

pub const ACCEPTED_MEDIA_TYPES: [&str; 3] = ["image", "video", "audio"];
pub const ACCEPTED_DOCUMENT_TYPES: [&str; 6] = ["pdf", "doc", "docx", "xls", "xlsx", "txt"];
