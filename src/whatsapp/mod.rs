//! ConvoChat WhatsApp gateway integration
//!
//! ## Submodules
//!
//! - [`schemas`] - Transport-neutral request/response descriptions
//! - [`client`] - HTTP transport trait and its reqwest implementation
//! - [`request`] - Builds the per-credential wire shape of a send
//! - [`dispatcher`] - Executes a send once and classifies the response
//! - [`accounts`] - Lists the WhatsApp accounts of an api key during setup

pub mod accounts;
pub mod client;
pub mod dispatcher;
pub mod request;
pub mod schemas;

pub use dispatcher::SendResult;
