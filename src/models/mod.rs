pub mod account;
pub mod connection;
pub mod send_request;
