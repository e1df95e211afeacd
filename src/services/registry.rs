//! Configured instances keyed by entry id.
//!
//! Owned by whatever process hosts the integration; each entry keeps its own
//! connection and never shares it with another entry.

use super::messaging::WhatsAppService;
use crate::{
    models::connection::{ConfigEntry, ConnectionConfig},
    whatsapp::{client::HttpTransport, dispatcher::Dispatcher, request::RequestBuilder},
};
use log::info;
use std::{collections::HashMap, sync::Arc};
use uuid::Uuid;

pub struct InstanceRegistry {
    entries: HashMap<Uuid, ConfigEntry>,
    transport: Arc<dyn HttpTransport>,
    builder: RequestBuilder,
}

impl InstanceRegistry {
    pub fn new(transport: Arc<dyn HttpTransport>, builder: RequestBuilder) -> Self {
        Self {
            entries: HashMap::new(),
            transport,
            builder,
        }
    }

    /// Sets up an entry and returns its id
    pub fn add(&mut self, entry: ConfigEntry) -> Uuid {
        let entry_id = entry.entry_id;
        info!("ConvoChat WhatsApp entry {entry_id} ({}) set up", entry.title);
        self.entries.insert(entry_id, entry);
        entry_id
    }

    pub fn get(&self, entry_id: &Uuid) -> Option<&ConfigEntry> {
        self.entries.get(entry_id)
    }

    /// Replaces the connection of an existing entry, as an options flow does.
    /// Returns `false` when the entry is unknown.
    pub fn update(&mut self, entry_id: &Uuid, connection: ConnectionConfig) -> bool {
        match self.entries.get_mut(entry_id) {
            Some(entry) => {
                info!("ConvoChat WhatsApp entry {entry_id} reconfigured");
                entry.connection = connection;
                true
            }
            None => false,
        }
    }

    /// Unloads an entry
    pub fn remove(&mut self, entry_id: &Uuid) -> Option<ConfigEntry> {
        let removed = self.entries.remove(entry_id);
        if removed.is_some() {
            info!("ConvoChat WhatsApp entry {entry_id} unloaded");
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Send operations bound to one entry's connection
    pub fn service(&self, entry_id: &Uuid) -> Option<WhatsAppService> {
        self.entries.get(entry_id).map(|entry| {
            WhatsAppService::new(
                entry.connection.clone(),
                self.builder.clone(),
                Dispatcher::new(self.transport.clone()),
            )
        })
    }
}
