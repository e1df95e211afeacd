//! # Account Resolver
//!
//! Lists the WhatsApp sender accounts linked to an api key. Runs once during
//! setup so the user can pick the account messages are sent from.

use super::{
    client::HttpTransport,
    schemas::{AccountsResponse, GatewayRequest},
};
use crate::{consts, errors::SetupError, models::account::Account};
use log::{error, info, warn};
use serde_json::Value;
use std::sync::Arc;

pub struct AccountResolver {
    transport: Arc<dyn HttpTransport>,
    api_base_url: String,
}

impl AccountResolver {
    pub fn new(transport: Arc<dyn HttpTransport>, api_base_url: &str) -> Self {
        Self {
            transport,
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn accounts_request(&self, api_key: &str) -> GatewayRequest {
        GatewayRequest::get(
            format!("{}/get/wa.accounts", self.api_base_url),
            vec![
                ("secret".to_string(), api_key.to_string()),
                ("limit".to_string(), consts::ACCOUNTS_LIST_LIMIT.to_string()),
            ],
        )
    }

    /// Fetches the accounts, in the order the API lists them
    pub async fn list_accounts(&self, api_key: &str) -> Result<Vec<Account>, SetupError> {
        let request = self.accounts_request(api_key);

        let response = self.transport.execute(&request).await.map_err(|e| {
            error!("Error connecting to ConvoChat API: {e}");
            SetupError::Unknown(e.to_string())
        })?;

        if response.status != 200 {
            error!("ConvoChat API returned status {}", response.status);
            return Err(SetupError::CannotConnect);
        }

        let envelope: AccountsResponse = serde_json::from_str(&response.body).map_err(|e| {
            error!("Unexpected accounts response: {e}");
            SetupError::Unknown(e.to_string())
        })?;

        if envelope.status != Some(200) {
            warn!(
                "Accounts lookup rejected: {}",
                envelope.message.as_deref().unwrap_or("no message")
            );
            return Err(SetupError::InvalidAuth);
        }

        let entries = match envelope.data {
            Some(Value::Array(entries)) => entries,
            _ => return Err(SetupError::InvalidAuth),
        };

        if entries.is_empty() {
            return Err(SetupError::NoAccounts);
        }

        let accounts = entries
            .iter()
            .map(parse_account)
            .collect::<Result<Vec<_>, _>>()?;

        info!("Found {} WhatsApp accounts", accounts.len());

        Ok(accounts)
    }
}

fn parse_account(entry: &Value) -> Result<Account, SetupError> {
    Ok(Account {
        unique_id: text_field(entry, "unique")?,
        display_name: text_field(entry, "name")?,
        phone_number: text_field(entry, "phone")?,
    })
}

/// Reads a string or number field as text
fn text_field(entry: &Value, name: &str) -> Result<String, SetupError> {
    match entry.get(name) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(Value::Number(n)) => Ok(n.to_string()),
        _ => Err(SetupError::Unknown(format!(
            "account entry is missing `{name}`"
        ))),
    }
}
