//! Value types exchanged with the fetch layer and the host transform hook

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// What a request URL logically refers to.
///
/// The request layer never interprets this; it is handed unchanged to the
/// host transform hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ResourceType {
    #[default]
    Unknown,
    Style,
    Source,
    Tile,
    Glyphs,
    SpriteImage,
    #[serde(rename = "spriteJSON")]
    SpriteJson,
    Image,
}

impl ResourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Style => "style",
            Self::Source => "source",
            Self::Tile => "tile",
            Self::Glyphs => "glyphs",
            Self::SpriteImage => "spriteImage",
            Self::SpriteJson => "spriteJSON",
            Self::Image => "image",
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Credentials policy for cross-origin requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CredentialsMode {
    SameOrigin,
    Include,
}

/// Everything the fetch layer needs to issue a request.
///
/// Produced either directly from a URL or by the host transform hook; the
/// request manager does not keep a copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestParameters {
    pub url: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub headers: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credentials: Option<CredentialsMode>,
}

impl RequestParameters {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            headers: BTreeMap::new(),
            credentials: None,
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn with_credentials(mut self, mode: CredentialsMode) -> Self {
        self.credentials = Some(mode);
        self
    }
}

impl From<&str> for RequestParameters {
    fn from(url: &str) -> Self {
        Self::new(url)
    }
}

impl From<String> for RequestParameters {
    fn from(url: String) -> Self {
        Self::new(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_type_names() {
        assert_eq!(ResourceType::default(), ResourceType::Unknown);
        assert_eq!(ResourceType::SpriteJson.to_string(), "spriteJSON");
        assert_eq!(ResourceType::SpriteImage.to_string(), "spriteImage");

        let json = serde_json::to_string(&ResourceType::SpriteJson).unwrap();
        assert_eq!(json, "\"spriteJSON\"");
        let parsed: ResourceType = serde_json::from_str("\"glyphs\"").unwrap();
        assert_eq!(parsed, ResourceType::Glyphs);
    }

    #[test]
    fn test_request_parameters_builder() {
        let params = RequestParameters::new("https://api.mapabc.com/webglapi/styles")
            .with_header("Authorization", "Bearer pk.abc")
            .with_credentials(CredentialsMode::Include);

        assert_eq!(params.url, "https://api.mapabc.com/webglapi/styles");
        assert_eq!(
            params.headers.get("Authorization").map(String::as_str),
            Some("Bearer pk.abc")
        );
        assert_eq!(params.credentials, Some(CredentialsMode::Include));
    }

    #[test]
    fn test_plain_parameters_serialize_url_only() {
        let params = RequestParameters::from("https://example.com/a.json");
        let json = serde_json::to_string(&params).unwrap();
        assert_eq!(json, r#"{"url":"https://example.com/a.json"}"#);

        let with_mode = params.with_credentials(CredentialsMode::SameOrigin);
        let json = serde_json::to_string(&with_mode).unwrap();
        assert!(json.contains(r#""credentials":"same-origin""#));
    }
}
