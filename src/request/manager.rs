//! Turns `mapabc:` resource references into concrete API requests

use std::fmt;
use std::sync::Arc;

use crate::core::constants::{
    ACCESS_TOKEN_KEY, ADD_SOURCE_KEY, ADD_SOURCE_PARAM, FONTSTACK_PARAM, GLYPHS_ENDPOINT,
    RANGE_PARAM, SECRET_TOKEN_PREFIX, SECURE_PARAM, SOURCE_TYPE_KEY, SOURCE_TYPE_PARAM,
    SPRITE_ENDPOINT, STYLE_ENDPOINT,
};
use crate::request::types::{RequestParameters, ResourceType};
use crate::request::url::{is_mapabc_url, parse_url, UrlObject};
use crate::traits::{ConfigProvider, RequestTransform};
use crate::{RequestError, Result};

/// How API-URL composition treats a literal `secure` query parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecureParam {
    /// Drop it when the API origin is plain `http` (styles and sprites)
    StripOnHttp,
    /// Leave it in place whatever the origin (glyphs)
    Keep,
}

/// Normalizes resource URLs and routes every request through the host hook.
///
/// One manager lives for the duration of a map session. Configuration is read
/// through the provider on every call and never cached here.
pub struct RequestManager {
    config: Arc<dyn ConfigProvider>,
    transform_request_fn: Option<Box<dyn RequestTransform>>,
    custom_access_token: Option<String>,
}

impl RequestManager {
    pub fn new(config: Arc<dyn ConfigProvider>) -> Self {
        Self {
            config,
            transform_request_fn: None,
            custom_access_token: None,
        }
    }

    /// Register the host transform hook at construction
    pub fn with_transform_request<T>(mut self, transform: T) -> Self
    where
        T: RequestTransform + 'static,
    {
        self.transform_request_fn = Some(Box::new(transform));
        self
    }

    /// Token used for this map instance in place of the per-call argument
    pub fn with_custom_access_token(mut self, token: impl Into<String>) -> Self {
        self.custom_access_token = Some(token.into());
        self
    }

    pub fn set_transform_request<T>(&mut self, transform: T)
    where
        T: RequestTransform + 'static,
    {
        self.transform_request_fn = Some(Box::new(transform));
    }

    pub fn clear_transform_request(&mut self) {
        self.transform_request_fn = None;
    }

    pub fn has_transform_request(&self) -> bool {
        self.transform_request_fn.is_some()
    }

    pub fn custom_access_token(&self) -> Option<&str> {
        self.custom_access_token.as_deref()
    }

    /// Let the host rewrite a request; falls back to `{url}` when there is no
    /// hook or the hook declines.
    pub fn transform_request(&self, url: &str, resource_type: ResourceType) -> RequestParameters {
        self.transform_request_fn
            .as_ref()
            .and_then(|transform| transform.transform(url, resource_type))
            .unwrap_or_else(|| RequestParameters::new(url))
    }

    /// Rewrite a `mapabc:` style reference to the style endpoint.
    ///
    /// Other URLs are returned unchanged.
    pub fn normalize_style_url(&self, url: &str, access_token: Option<&str>) -> Result<String> {
        if !is_mapabc_url(url) {
            return Ok(url.to_string());
        }

        let mut url_object = parse_url(url)?;
        let name = strip_slashes(&url_object.path);
        url_object.params.push(format!("n={name}"));

        // Containment, not key equality: any parameter mentioning the flag
        // suppresses the default.
        if !url_object.has_param_containing(ADD_SOURCE_KEY) {
            url_object.params.push(ADD_SOURCE_PARAM.to_string());
        }
        if !url_object.has_param_containing(SOURCE_TYPE_KEY) {
            url_object.params.push(SOURCE_TYPE_PARAM.to_string());
        }

        url_object.path = STYLE_ENDPOINT.to_string();

        #[cfg(feature = "debug")]
        log::debug!("style {} resolved to {}", url, STYLE_ENDPOINT);

        self.make_api_url(url_object, self.request_token(access_token))
    }

    /// Build the URL of a sprite sheet (`format` is e.g. `@2x`, `extension`
    /// is `.png` or `.json`).
    pub fn normalize_sprite_url(
        &self,
        url: &str,
        format: &str,
        extension: &str,
        access_token: Option<&str>,
    ) -> Result<String> {
        let mut url_object = parse_url(url)?;
        if !is_mapabc_url(url) {
            url_object.path.push_str(format);
            url_object.path.push_str(extension);
            return Ok(url_object.to_string());
        }

        let name = strip_slashes(&url_object.path);
        let extension = extension.replace('.', "");
        url_object.params.push(format!("n={name}{format}"));
        url_object.params.push(format!("e={extension}"));
        url_object.path = SPRITE_ENDPOINT.to_string();

        #[cfg(feature = "debug")]
        log::debug!("sprite {} ({}{}) resolved to {}", url, format, extension, SPRITE_ENDPOINT);

        self.make_api_url(url_object, self.request_token(access_token))
    }

    /// Rewrite a `mapabc:` glyphs reference to the font endpoint.
    ///
    /// `{fontstack}` and `{range}` are left for the fetch layer to fill in.
    pub fn normalize_glyphs_url(&self, url: &str, access_token: Option<&str>) -> Result<String> {
        if !is_mapabc_url(url) {
            return Ok(url.to_string());
        }

        let mut url_object = parse_url(url)?;
        url_object.path = GLYPHS_ENDPOINT.to_string();
        url_object.params.push(FONTSTACK_PARAM.to_string());
        url_object.params.push(RANGE_PARAM.to_string());

        #[cfg(feature = "debug")]
        log::debug!("glyphs {} resolved to {}", url, GLYPHS_ENDPOINT);

        self.make_font_api_url(url_object, self.request_token(access_token))
    }

    /// Point a partially built style/sprite URL at the API origin and attach
    /// the access token. A `secure` flag is dropped on plain `http` origins.
    pub fn make_api_url(&self, url: UrlObject, access_token: Option<&str>) -> Result<String> {
        self.compose_api_url(url, access_token, SecureParam::StripOnHttp)
    }

    /// Same as [`make_api_url`](Self::make_api_url) but never touches `secure`.
    pub fn make_font_api_url(&self, url: UrlObject, access_token: Option<&str>) -> Result<String> {
        self.compose_api_url(url, access_token, SecureParam::Keep)
    }

    pub fn compose_api_url(
        &self,
        mut url: UrlObject,
        access_token: Option<&str>,
        secure: SecureParam,
    ) -> Result<String> {
        let api_url = parse_url(&self.config.api_url())?;
        url.protocol = api_url.protocol;
        url.authority = api_url.authority;

        if secure == SecureParam::StripOnHttp && url.protocol == "http" {
            url.remove_param(SECURE_PARAM);
        }

        if api_url.path != "/" {
            url.path = format!("{}{}", api_url.path, url.path);
        }

        if !self.config.require_access_token() {
            return Ok(url.to_string());
        }

        let token = non_empty(access_token)
            .or_else(|| non_empty(self.custom_access_token.as_deref()))
            .map(str::to_string)
            .or_else(|| self.config.access_token().filter(|t| !t.is_empty()))
            .ok_or(RequestError::MissingAccessToken)?;

        if token.starts_with(SECRET_TOKEN_PREFIX) {
            return Err(RequestError::InvalidTokenType);
        }

        url.set_param(ACCESS_TOKEN_KEY, &token);
        Ok(url.to_string())
    }

    /// The instance token wins over the per-call argument.
    fn request_token<'a>(&'a self, access_token: Option<&'a str>) -> Option<&'a str> {
        non_empty(self.custom_access_token.as_deref()).or_else(|| non_empty(access_token))
    }
}

impl fmt::Debug for RequestManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestManager")
            .field("has_transform_request", &self.has_transform_request())
            .field("has_custom_access_token", &self.custom_access_token.is_some())
            .finish()
    }
}

fn strip_slashes(path: &str) -> String {
    path.replace('/', "")
}

fn non_empty(token: Option<&str>) -> Option<&str> {
    token.filter(|t| !t.is_empty())
}
