//! Caller-supplied header specifications.

use std::collections::HashMap;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Caller-supplied headers: either a JSON object still in text form, or a
/// native string map. These are the only two accepted shapes.
///
/// The untagged serde form mirrors that duality for callers who keep header
/// specs in config: a JSON string deserializes to [`HeaderSpec::Json`], a
/// JSON object to [`HeaderSpec::Map`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HeaderSpec {
    /// A JSON object of string keys to string values, serialized as text.
    /// The empty string sets nothing.
    Json(String),
    /// A ready string-to-string mapping.
    Map(HashMap<String, String>),
}

impl HeaderSpec {
    /// A spec that sets no headers.
    pub fn none() -> Self {
        Self::Json(String::new())
    }
}

impl Default for HeaderSpec {
    fn default() -> Self {
        Self::none()
    }
}

impl From<&str> for HeaderSpec {
    fn from(raw: &str) -> Self {
        Self::Json(raw.to_string())
    }
}

impl From<String> for HeaderSpec {
    fn from(raw: String) -> Self {
        Self::Json(raw)
    }
}

impl From<HashMap<String, String>> for HeaderSpec {
    fn from(map: HashMap<String, String>) -> Self {
        Self::Map(map)
    }
}

/// Turn a spec into wire headers.
///
/// Keys and values are trimmed; empty keys are skipped; `Content-Length`
/// is skipped so the transport computes it. Setting a key overwrites any
/// earlier value for it.
pub(crate) fn build_headers(spec: &HeaderSpec) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();

    let decoded: HashMap<String, String>;
    let pairs = match spec {
        HeaderSpec::Json(raw) => {
            if raw.is_empty() {
                return Ok(headers);
            }
            decoded = serde_json::from_str(raw).map_err(Error::header_json)?;
            &decoded
        }
        HeaderSpec::Map(map) => map,
    };

    for (key, value) in pairs {
        if key.is_empty() {
            continue;
        }
        let key = key.trim();
        let value = value.trim();
        if key == "Content-Length" {
            continue;
        }

        let name = HeaderName::try_from(key).map_err(|_| Error::header_invalid(key))?;
        let value = HeaderValue::try_from(value).map_err(|_| Error::header_invalid(key))?;
        headers.insert(name, value);
    }

    Ok(headers)
}
