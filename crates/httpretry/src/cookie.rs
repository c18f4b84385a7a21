//! Cookie pass-through.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One cookie, carried verbatim: attached to the outgoing request and read
/// back from the response without inspection. Attributes on response
/// cookies (`Path`, `HttpOnly`, ...) are dropped; only the pair survives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cookie {
    /// Cookie name.
    pub name: String,
    /// Cookie value.
    pub value: String,
}

impl Cookie {
    /// Create a cookie from a name/value pair.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for Cookie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.value)
    }
}

/// The `Cookie` request header line: pairs joined with `"; "`, or `None`
/// when there is nothing to send.
pub(crate) fn request_line(cookies: &[Cookie]) -> Option<String> {
    if cookies.is_empty() {
        return None;
    }

    let line = cookies
        .iter()
        .map(Cookie::to_string)
        .collect::<Vec<_>>()
        .join("; ");
    Some(line)
}
