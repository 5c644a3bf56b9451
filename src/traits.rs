//! Capabilities the embedding application plugs into the request layer
//!
//! Both traits are consulted synchronously on every call and never cached,
//! so a host that swaps its configuration or hook between calls sees the
//! change on the next normalization.

use std::sync::Arc;

use crate::request::types::{RequestParameters, ResourceType};

/// Read access to the deployment configuration.
///
/// Implementations must return the current value on every call; the request
/// manager relies on this to observe configuration changes made between
/// calls.
pub trait ConfigProvider: Send + Sync {
    /// Base API origin, e.g. `https://api.mapabc.com`
    fn api_url(&self) -> String;

    /// Whether normalized API URLs must carry an access token
    fn require_access_token(&self) -> bool;

    /// Globally configured access token, if any
    fn access_token(&self) -> Option<String>;
}

impl<T: ConfigProvider + ?Sized> ConfigProvider for Arc<T> {
    fn api_url(&self) -> String {
        (**self).api_url()
    }

    fn require_access_token(&self) -> bool {
        (**self).require_access_token()
    }

    fn access_token(&self) -> Option<String> {
        (**self).access_token()
    }
}

/// Host hook that may rewrite or sign any outgoing request.
///
/// Returning `None` leaves the request untouched.
pub trait RequestTransform: Send + Sync {
    fn transform(&self, url: &str, resource_type: ResourceType) -> Option<RequestParameters>;
}

impl<F> RequestTransform for F
where
    F: Fn(&str, ResourceType) -> Option<RequestParameters> + Send + Sync,
{
    fn transform(&self, url: &str, resource_type: ResourceType) -> Option<RequestParameters> {
        self(url, resource_type)
    }
}
