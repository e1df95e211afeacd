//! Interactive setup of a ConvoChat WhatsApp entry.
//!
//! Rendering the forms is up to the host; these steps only validate what the
//! forms collect and produce the [`ConfigEntry`] to persist.

use crate::{
    consts,
    errors::SetupError,
    models::{
        account::Account,
        connection::{ConfigEntry, ConnectionConfig},
    },
    whatsapp::accounts::AccountResolver,
};
use log::info;

/// Local gateway setup, blank fields fall back to the add-on defaults
pub fn gateway_entry(host: Option<String>, port: Option<u16>) -> ConfigEntry {
    let host = host.filter(|h| !h.trim().is_empty());
    ConfigEntry::new(consts::ENTRY_TITLE, ConnectionConfig::gateway(host, port))
}

/// Options step for gateway entries: blank fields keep the current values
pub fn gateway_options(
    current: &ConnectionConfig,
    host: Option<String>,
    port: Option<u16>,
) -> ConnectionConfig {
    let (current_host, current_port) = match current {
        ConnectionConfig::Gateway { host, port } => (Some(host.clone()), Some(*port)),
        _ => (None, None),
    };

    ConnectionConfig::gateway(
        host.filter(|h| !h.trim().is_empty()).or(current_host),
        port.or(current_port),
    )
}

/// Hosted API setup with header credentials
pub fn account_id_entry(api_key: &str, account_id: &str) -> Result<ConfigEntry, SetupError> {
    Ok(ConfigEntry::new(
        consts::ENTRY_TITLE,
        ConnectionConfig::ApiKeyAccountId {
            api_key: non_empty("api_key", api_key)?,
            account_id: non_empty("account_id", account_id)?,
        },
    ))
}

/// Two-step setup: submit an api key, then pick one of its WhatsApp accounts.
pub struct AccountSetupFlow {
    resolver: AccountResolver,
    api_key: Option<String>,
    accounts: Vec<Account>,
}

impl AccountSetupFlow {
    pub fn new(resolver: AccountResolver) -> Self {
        Self {
            resolver,
            api_key: None,
            accounts: vec![],
        }
    }

    /// First step. On success the discovered accounts are offered for selection.
    pub async fn submit_api_key(&mut self, api_key: &str) -> Result<&[Account], SetupError> {
        let api_key = non_empty("api_key", api_key)?;
        let accounts = self.resolver.list_accounts(&api_key).await?;

        self.api_key = Some(api_key);
        self.accounts = accounts;

        Ok(&self.accounts)
    }

    /// Selection choices as `(unique, label)`, in discovery order
    pub fn choices(&self) -> Vec<(String, String)> {
        self.accounts
            .iter()
            .map(|account| (account.unique_id.clone(), account.label()))
            .collect()
    }

    /// Second step
    pub fn select_account(&self, unique_id: &str) -> Result<ConfigEntry, SetupError> {
        let api_key = self
            .api_key
            .clone()
            .ok_or_else(|| SetupError::MissingField("api_key".into()))?;

        let account = self
            .accounts
            .iter()
            .find(|account| account.unique_id == unique_id)
            .ok_or_else(|| SetupError::InvalidAccount(unique_id.to_string()))?;

        info!("Selected WhatsApp account {}", account.label());

        Ok(ConfigEntry::new(
            format!("{} - {}", consts::ENTRY_TITLE, account.label()),
            ConnectionConfig::ApiKeyWhatsAppAccount {
                api_key,
                whatsapp_account: account.unique_id.clone(),
            },
        ))
    }
}

fn non_empty(field: &str, value: &str) -> Result<String, SetupError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(SetupError::MissingField(field.to_string()));
    }
    Ok(value.to_string())
}
