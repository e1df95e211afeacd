use crate::consts;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Resolved credentials of one configured instance.
///
/// Each variant maps to one wire encoding of the gateway API, see
/// [`crate::whatsapp::request::RequestBuilder`].
#[derive(Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "auth", rename_all = "snake_case")]
pub enum ConnectionConfig {
    /// Local gateway add-on reached over plain http
    Gateway { host: String, port: u16 },
    /// Hosted API, credentials in `X-API-Key` / `X-Account-Id` headers
    ApiKeyAccountId { api_key: String, account_id: String },
    /// Hosted API, credentials in the form body, account picked at setup
    ApiKeyWhatsAppAccount {
        api_key: String,
        whatsapp_account: String,
    },
}

impl ConnectionConfig {
    pub fn gateway(host: Option<String>, port: Option<u16>) -> Self {
        ConnectionConfig::Gateway {
            host: host.unwrap_or_else(|| consts::DEFAULT_GATEWAY_HOST.to_string()),
            port: port.unwrap_or(consts::DEFAULT_GATEWAY_PORT),
        }
    }

    pub fn base_url(&self, api_base_url: &str) -> String {
        match self {
            ConnectionConfig::Gateway { host, port } => {
                format!("{scheme}://{host}:{port}", scheme = consts::GATEWAY_SCHEME)
            }
            _ => api_base_url.trim_end_matches('/').to_string(),
        }
    }
}

// api keys must never reach the logs
impl fmt::Debug for ConnectionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConnectionConfig::Gateway { host, port } => f
                .debug_struct("Gateway")
                .field("host", host)
                .field("port", port)
                .finish(),
            ConnectionConfig::ApiKeyAccountId { account_id, .. } => f
                .debug_struct("ApiKeyAccountId")
                .field("api_key", &"***")
                .field("account_id", account_id)
                .finish(),
            ConnectionConfig::ApiKeyWhatsAppAccount {
                whatsapp_account, ..
            } => f
                .debug_struct("ApiKeyWhatsAppAccount")
                .field("api_key", &"***")
                .field("whatsapp_account", whatsapp_account)
                .finish(),
        }
    }
}

/// Host-persisted record of one configured instance
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ConfigEntry {
    pub entry_id: Uuid,
    pub title: String,
    pub connection: ConnectionConfig,
    pub created_at: DateTime<Utc>,
}

impl ConfigEntry {
    pub fn new(title: impl Into<String>, connection: ConnectionConfig) -> Self {
        Self {
            entry_id: Uuid::new_v4(),
            title: title.into(),
            connection,
            created_at: Utc::now(),
        }
    }
}
