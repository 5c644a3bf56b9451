//! Minimal URL model used for request rewriting
//!
//! Query parameters are kept as raw `key=value` strings in their original
//! order. Nothing is decoded or re-encoded, so duplicate keys and the exact
//! parameter order the API expects survive a parse/format round trip.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::constants::MAPABC_SCHEME;
use crate::{RequestError, Result};

/// `scheme://authority[/path][?query]`
static URL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\w+)://([^/?]*)(/[^?]*)?\??(.+)?$").expect("URL pattern is valid")
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlObject {
    pub protocol: String,
    pub authority: String,
    /// Always starts with `/`
    pub path: String,
    pub params: Vec<String>,
}

impl UrlObject {
    /// Remove the first parameter equal to `param`, returning whether one was found
    pub fn remove_param(&mut self, param: &str) -> bool {
        match self.params.iter().position(|p| p == param) {
            Some(index) => {
                self.params.remove(index);
                true
            }
            None => false,
        }
    }

    /// Whether any parameter contains `needle` anywhere in its text
    pub fn has_param_containing(&self, needle: &str) -> bool {
        self.params.iter().any(|p| p.contains(needle))
    }

    /// Drop every `key` / `key=...` parameter and append `key=value`
    pub fn set_param(&mut self, key: &str, value: &str) {
        self.params.retain(|p| param_key(p) != key);
        self.params.push(format!("{key}={value}"));
    }
}

fn param_key(param: &str) -> &str {
    param.split_once('=').map_or(param, |(key, _)| key)
}

impl FromStr for UrlObject {
    type Err = RequestError;

    fn from_str(url: &str) -> Result<Self> {
        let caps = URL_RE.captures(url).ok_or_else(|| RequestError::Parse {
            url: url.to_string(),
        })?;

        Ok(Self {
            protocol: caps[1].to_string(),
            authority: caps[2].to_string(),
            path: caps.get(3).map_or("/", |m| m.as_str()).to_string(),
            params: caps
                .get(4)
                .map(|m| m.as_str().split('&').map(str::to_string).collect())
                .unwrap_or_default(),
        })
    }
}

impl fmt::Display for UrlObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}{}", self.protocol, self.authority, self.path)?;
        if !self.params.is_empty() {
            write!(f, "?{}", self.params.join("&"))?;
        }
        Ok(())
    }
}

pub fn parse_url(url: &str) -> Result<UrlObject> {
    url.parse()
}

pub fn format_url(url: &UrlObject) -> String {
    url.to_string()
}

/// Whether `url` uses the short-hand `mapabc:` scheme
pub fn is_mapabc_url(url: &str) -> bool {
    url.starts_with(MAPABC_SCHEME)
}
