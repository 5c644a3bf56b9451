//! Prelude module for common maplet-request types and traits
//!
//! This module re-exports the most commonly used types, traits, and functions
//! for easy importing with `use maplet_request::prelude::*;`

pub use crate::core::config::{ApiConfig, SharedConfig};

pub use crate::request::{
    manager::{RequestManager, SecureParam},
    types::{CredentialsMode, RequestParameters, ResourceType},
    url::{format_url, is_mapabc_url, parse_url, UrlObject},
};

pub use crate::traits::{ConfigProvider, RequestTransform};

pub use crate::{Error as RequestError, Result};

pub use std::sync::Arc;
