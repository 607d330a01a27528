use axum::http::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Missing required parameters: {0}")]
    MissingInput(String),

    #[error("{message}")]
    Upstream { status: u16, message: String },

    #[error("Invalid response from upstream API (non-JSON): {0}")]
    ProtocolViolation(String),

    #[error("Multipart error: {0}")]
    Multipart(#[from] axum::extract::multipart::MultipartError),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Address parse error: {0}")]
    AddrParse(#[from] std::net::AddrParseError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn missing_input(fields: impl Into<String>) -> Self {
        Self::MissingInput(fields.into())
    }

    pub fn upstream(status: StatusCode, message: impl Into<String>) -> Self {
        Self::Upstream {
            status: status.as_u16(),
            message: message.into(),
        }
    }

    pub fn protocol_violation(preview: impl Into<String>) -> Self {
        Self::ProtocolViolation(preview.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// HTTP status the caller receives for this error. Upstream errors keep
    /// the status the inference service answered with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingInput(_) | Self::Multipart(_) => StatusCode::BAD_REQUEST,
            Self::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            Self::ProtocolViolation(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message placed in the `error` field of the response body. Unexpected
    /// internal failures collapse to a generic message; their detail only
    /// goes to the logs.
    pub fn public_message(&self) -> String {
        match self {
            Self::Config(_)
            | Self::MissingInput(_)
            | Self::Upstream { .. }
            | Self::ProtocolViolation(_)
            | Self::Multipart(_) => self.to_string(),
            _ => "An unknown error occurred".to_string(),
        }
    }
}
