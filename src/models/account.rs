use serde::{Deserialize, Serialize};

/// WhatsApp sender account linked to an api key
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Account {
    #[serde(rename = "unique")]
    pub unique_id: String,
    #[serde(rename = "name")]
    pub display_name: String,
    #[serde(rename = "phone")]
    pub phone_number: String,
}

impl Account {
    /// Label shown in the account selection step
    pub fn label(&self) -> String {
        format!("{} ({})", self.display_name, self.phone_number)
    }
}
