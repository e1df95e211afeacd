//! Environment configuration for the `convochat` host adapter.
//!
//! # Security Notes
//! - `CONVOCHAT_API_KEY` is sensitive and is never logged
//! - Which credential variables are required depends on `CONVOCHAT_AUTH_MODE`

use crate::models::connection::ConnectionConfig;
use anyhow::{Context, anyhow};
use envconfig::Envconfig;
use log::LevelFilter;
use std::str::FromStr;

#[derive(Envconfig, Clone)]
pub struct AppConfig {
    /// Credential type of the instance
    /// Values: "gateway", "account_id", "whatsapp_account"
    #[envconfig(default = "whatsapp_account")]
    pub convochat_auth_mode: String,

    /// Hosted API root, overridable for staging
    #[envconfig(default = "https://sms.convo.chat/api")]
    pub convochat_api_base_url: String,

    /// 🔒 SENSITIVE: ConvoChat api key
    pub convochat_api_key: Option<String>,

    /// Account id sent in the `X-Account-Id` header ("account_id" mode)
    pub convochat_account_id: Option<String>,

    /// Selected WhatsApp account unique id ("whatsapp_account" mode)
    pub convochat_whatsapp_account: Option<String>,

    /// Local gateway host ("gateway" mode), defaults to the add-on address
    pub convochat_gateway_host: Option<String>,

    /// Local gateway port ("gateway" mode)
    pub convochat_gateway_port: Option<u16>,

    #[envconfig(default = "info")]
    pub convochat_log_level: String,
}

impl AppConfig {
    pub fn load() -> anyhow::Result<Self> {
        AppConfig::init_from_env().context("failed to load convochat configuration")
    }

    pub fn log_level(&self) -> anyhow::Result<LevelFilter> {
        LevelFilter::from_str(&self.convochat_log_level)
            .map_err(|_| anyhow!("invalid CONVOCHAT_LOG_LEVEL: {}", self.convochat_log_level))
    }

    pub fn api_key(&self) -> anyhow::Result<String> {
        required(&self.convochat_api_key, "CONVOCHAT_API_KEY")
    }

    /// Resolves the credentials for the configured auth mode
    pub fn connection_config(&self) -> anyhow::Result<ConnectionConfig> {
        match self.convochat_auth_mode.to_lowercase().as_str() {
            "gateway" => Ok(ConnectionConfig::gateway(
                self.convochat_gateway_host.clone(),
                self.convochat_gateway_port,
            )),
            "account_id" => Ok(ConnectionConfig::ApiKeyAccountId {
                api_key: self.api_key()?,
                account_id: required(&self.convochat_account_id, "CONVOCHAT_ACCOUNT_ID")?,
            }),
            "whatsapp_account" => Ok(ConnectionConfig::ApiKeyWhatsAppAccount {
                api_key: self.api_key()?,
                whatsapp_account: required(
                    &self.convochat_whatsapp_account,
                    "CONVOCHAT_WHATSAPP_ACCOUNT",
                )?,
            }),
            other => Err(anyhow!("unknown CONVOCHAT_AUTH_MODE: {other}")),
        }
    }
}

fn required(value: &Option<String>, name: &str) -> anyhow::Result<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .ok_or_else(|| anyhow!("{name} must be set"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> AppConfig {
        let vars = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<_, _>>();
        AppConfig::init_from_hashmap(&vars).unwrap()
    }

    #[test]
    fn test_defaults_to_whatsapp_account_mode() {
        let config = config_from(&[
            ("CONVOCHAT_API_KEY", "K"),
            ("CONVOCHAT_WHATSAPP_ACCOUNT", "ACC1"),
        ]);

        assert_eq!(config.convochat_api_base_url, "https://sms.convo.chat/api");
        assert_eq!(config.log_level().unwrap(), LevelFilter::Info);
        assert_eq!(
            config.connection_config().unwrap(),
            ConnectionConfig::ApiKeyWhatsAppAccount {
                api_key: "K".into(),
                whatsapp_account: "ACC1".into()
            }
        );
    }

    #[test]
    fn test_gateway_mode_uses_defaults() {
        let config = config_from(&[("CONVOCHAT_AUTH_MODE", "gateway")]);
        assert_eq!(
            config.connection_config().unwrap(),
            ConnectionConfig::gateway(None, None)
        );
    }

    #[test]
    fn test_missing_credentials_name_the_variable() {
        let config = config_from(&[
            ("CONVOCHAT_AUTH_MODE", "account_id"),
            ("CONVOCHAT_API_KEY", "K"),
        ]);
        let err = config.connection_config().unwrap_err();
        assert!(err.to_string().contains("CONVOCHAT_ACCOUNT_ID"));

        let config = config_from(&[("CONVOCHAT_AUTH_MODE", "carrier_pigeon")]);
        assert!(config.connection_config().is_err());
    }
}
