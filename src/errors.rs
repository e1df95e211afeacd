use derive_more::{Display, Error};

/// Rejected service call input. No request leaves the process when this is raised.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
#[display("invalid value for `{field}`: {reason}")]
pub struct ValidationError {
    pub field: String,
    pub reason: String,
}

impl ValidationError {
    pub fn new(field: &str, reason: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            reason: reason.into(),
        }
    }

    pub fn required(field: &str) -> Self {
        Self::new(field, "required key not provided")
    }
}

/// Failure of a single outbound send.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum DispatchError {
    #[display("could not reach the gateway: {_0}")]
    Connect(#[error(not(source))] String),
    #[display("gateway returned status {status}: {body}")]
    Api { status: u16, body: String },
    #[display("gateway returned an unreadable payload: {_0}")]
    InvalidPayload(#[error(not(source))] String),
}

/// Network-level failure reported by an [`crate::whatsapp::client::HttpTransport`].
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
#[display("{_0}")]
pub struct TransportError(#[error(not(source))] pub String);

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        Self(err.to_string())
    }
}

/// Errors surfaced to the interactive setup form.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum SetupError {
    #[display("the api key was rejected")]
    InvalidAuth,
    #[display("no whatsapp accounts are linked to this api key")]
    NoAccounts,
    #[display("cannot connect to the convochat api")]
    CannotConnect,
    #[display("unexpected error: {_0}")]
    Unknown(#[error(not(source))] String),
    #[display("selected account is not in the discovered list: {_0}")]
    InvalidAccount(#[error(not(source))] String),
    #[display("required field missing: {_0}")]
    MissingField(#[error(not(source))] String),
}

impl SetupError {
    /// Error code shown by the setup form
    pub fn code(&self) -> &'static str {
        match self {
            SetupError::InvalidAuth => "invalid_auth",
            SetupError::NoAccounts => "no_accounts",
            SetupError::CannotConnect => "cannot_connect",
            SetupError::Unknown(_) => "unknown",
            SetupError::InvalidAccount(_) => "invalid_account",
            SetupError::MissingField(_) => "missing_field",
        }
    }
}
