//! Deployment configuration for the request layer
//!
//! [`ApiConfig`] mirrors the settings a map deployment ships with. It can be
//! built in code, loaded from JSON, or wrapped in a [`SharedConfig`] when the
//! host needs to change it while a [`RequestManager`](crate::RequestManager)
//! is live.

use std::path::Path;
use std::sync::{Arc, RwLock, RwLockReadGuard};

use serde::{Deserialize, Serialize};

use crate::core::constants;
use crate::traits::ConfigProvider;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub api_url: String,
    pub require_access_token: bool,
    pub access_token: Option<String>,
    pub feedback_url: String,
    pub max_parallel_image_requests: usize,
    pub debug: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_url: constants::DEFAULT_API_URL.to_string(),
            require_access_token: true,
            access_token: None,
            feedback_url: constants::DEFAULT_FEEDBACK_URL.to_string(),
            max_parallel_image_requests: constants::DEFAULT_MAX_PARALLEL_IMAGE_REQUESTS,
            debug: false,
        }
    }
}

impl ApiConfig {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            ..Self::default()
        }
    }

    /// Parse a configuration document. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&contents)
    }

    /// Reject settings the request layer cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.api_url.trim().is_empty() {
            return Err(crate::Error::Config("api_url must not be empty".to_string()));
        }
        if self.max_parallel_image_requests == 0 {
            return Err(crate::Error::Config(
                "max_parallel_image_requests must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    pub fn with_require_access_token(mut self, required: bool) -> Self {
        self.require_access_token = required;
        self
    }

    pub fn with_feedback_url(mut self, url: impl Into<String>) -> Self {
        self.feedback_url = url.into();
        self
    }

    pub fn with_max_parallel_image_requests(mut self, max: usize) -> Self {
        self.max_parallel_image_requests = max;
        self
    }

    /// Telemetry endpoint paired with the configured API origin.
    ///
    /// Derived from `api_url` on every call so it tracks configuration changes.
    pub fn events_url(&self) -> Option<&'static str> {
        if self.api_url.is_empty() {
            return None;
        }
        constants::EVENTS_ENDPOINTS
            .iter()
            .find(|(origin, _)| self.api_url.starts_with(*origin))
            .map(|(_, events)| *events)
    }
}

impl ConfigProvider for ApiConfig {
    fn api_url(&self) -> String {
        self.api_url.clone()
    }

    fn require_access_token(&self) -> bool {
        self.require_access_token
    }

    fn access_token(&self) -> Option<String> {
        self.access_token.clone()
    }
}

/// Mutable configuration handle shared between the host and request managers.
///
/// Clones share the same underlying configuration.
#[derive(Debug, Clone, Default)]
pub struct SharedConfig {
    inner: Arc<RwLock<ApiConfig>>,
}

impl SharedConfig {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            inner: Arc::new(RwLock::new(config)),
        }
    }

    /// Copy of the configuration as it is right now
    pub fn snapshot(&self) -> ApiConfig {
        self.read().clone()
    }

    /// Apply a change; subsequent calls through any clone observe it.
    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(&mut ApiConfig),
    {
        let mut guard = self
            .inner
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&mut *guard);
    }

    pub fn events_url(&self) -> Option<&'static str> {
        self.read().events_url()
    }

    fn read(&self) -> RwLockReadGuard<'_, ApiConfig> {
        self.inner
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl From<ApiConfig> for SharedConfig {
    fn from(config: ApiConfig) -> Self {
        Self::new(config)
    }
}

impl ConfigProvider for SharedConfig {
    fn api_url(&self) -> String {
        self.read().api_url.clone()
    }

    fn require_access_token(&self) -> bool {
        self.read().require_access_token
    }

    fn access_token(&self) -> Option<String> {
        self.read().access_token.clone()
    }
}
