//! # ConvoChat WhatsApp
//!
//! Sends WhatsApp text, media and document messages through the ConvoChat
//! gateway. A validated service call becomes exactly one HTTP request whose
//! shape depends on the configured credentials:
//!
//! - a local gateway `{host, port}` taking json,
//! - the hosted API with `X-API-Key` / `X-Account-Id` headers,
//! - the hosted API with the api key and a WhatsApp account chosen at setup.
//!
//! [`services::messaging::WhatsAppService`] is the entry point for callers,
//! [`services::setup`] covers the interactive setup steps.

pub mod config;
pub mod consts;
pub mod errors;
pub mod logger;
pub mod models;
pub mod services;
pub mod whatsapp;
