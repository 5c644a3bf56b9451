//! # maplet-request
//!
//! Request URL normalization for maplet map clients.
//!
//! Styles, sprites and glyphs may be referenced with the short-hand
//! `mapabc:` scheme. This crate rewrites those references into concrete
//! endpoints on the configured API origin, injects the access token, and
//! gives the embedding application a hook to rewrite every outgoing request
//! before the fetch layer issues it.
//!
//! Nothing here performs I/O; every operation is a synchronous computation
//! over its inputs and the current configuration.

pub mod core;
pub mod prelude;
pub mod request;
pub mod traits;
pub use crate::core::constants;

// Re-export public API
pub use crate::core::config::{ApiConfig, SharedConfig};

pub use request::{
    manager::RequestManager,
    types::{CredentialsMode, RequestParameters, ResourceType},
    url::{format_url, is_mapabc_url, parse_url, UrlObject},
};

pub use traits::{ConfigProvider, RequestTransform};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, RequestError>;

/// Errors raised while normalizing request URLs or loading configuration
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    #[error("Unable to parse URL \"{url}\"")]
    Parse { url: String },

    #[error("An API access token is required to use Mapabc GL. {}", constants::ACCESS_TOKEN_HELP)]
    MissingAccessToken,

    #[error(
        "Use a public access token (pk.*) with Mapabc GL, not a secret access token (sk.*). {}",
        constants::ACCESS_TOKEN_HELP
    )]
    InvalidTokenType,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Error type alias for convenience
pub type Error = RequestError;
