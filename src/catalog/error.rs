use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Invalid content_type: {0}.")]
    InvalidContentType(String),

    #[error("could not obtain access token: {0}")]
    Token(String),

    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP status {status}")]
    Remote { status: StatusCode, body: String },

    #[error("response is not valid JSON: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
        body: String,
    },
}

impl CatalogError {
    /// Raw response text, when the remote service answered at all.
    pub fn response_text(&self) -> Option<&str> {
        match self {
            CatalogError::Remote { body, .. } | CatalogError::Decode { body, .. } => Some(body),
            _ => None,
        }
    }
}
