use std::io;

use derive_more::Display;
use validator::ValidationErrors;

/// All failures the admin client surfaces. Remote failures collapse to a
/// single network-shaped kind; no structured server error body is parsed.
#[derive(Debug, Display)]
pub enum AdminError {
    #[display("Request failed: {_0}")]
    Network(String),

    #[display("Server responded {status} for {path}")]
    Status { status: u16, path: String },

    #[display("Could not decode response: {_0}")]
    Decode(String),

    #[display("Validation failed: {_0}")]
    Validation(String),

    #[display("File error: {_0}")]
    File(String),

    #[display("Configuration error: {_0}")]
    Config(String),
}

impl std::error::Error for AdminError {}

impl AdminError {
    /// True for transport failures and non-2xx responses, the only kind a
    /// form surfaces to the user.
    pub fn is_network(&self) -> bool {
        matches!(self, AdminError::Network(_) | AdminError::Status { .. })
    }
}

impl From<reqwest::Error> for AdminError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            AdminError::Status {
                status: status.as_u16(),
                path: err.url().map(|u| u.path().to_string()).unwrap_or_default(),
            }
        } else if err.is_decode() {
            AdminError::Decode(err.to_string())
        } else {
            AdminError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for AdminError {
    fn from(err: serde_json::Error) -> Self {
        AdminError::Decode(err.to_string())
    }
}

impl From<ValidationErrors> for AdminError {
    fn from(err: ValidationErrors) -> Self {
        AdminError::Validation(err.to_string())
    }
}

impl From<io::Error> for AdminError {
    fn from(err: io::Error) -> Self {
        AdminError::File(err.to_string())
    }
}

impl From<config::ConfigError> for AdminError {
    fn from(err: config::ConfigError) -> Self {
        AdminError::Config(err.to_string())
    }
}

impl From<anyhow::Error> for AdminError {
    fn from(err: anyhow::Error) -> Self {
        AdminError::Network(err.to_string())
    }
}
