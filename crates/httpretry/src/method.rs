//! Request methods.

use std::fmt;

/// The eight request methods the helper accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
    Head,
    Options,
    Trace,
    Connect,
}

impl Method {
    /// Parse the exact uppercase verb. Matching is case-sensitive
    /// (`"get"` is not a method); anything unrecognized becomes the
    /// invalid-method error at dispatch time.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "GET" => Some(Self::Get),
            "POST" => Some(Self::Post),
            "PUT" => Some(Self::Put),
            "DELETE" => Some(Self::Delete),
            "HEAD" => Some(Self::Head),
            "OPTIONS" => Some(Self::Options),
            "TRACE" => Some(Self::Trace),
            "CONNECT" => Some(Self::Connect),
            _ => None,
        }
    }

    /// The verb as it appears on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
            Self::Head => "HEAD",
            Self::Options => "OPTIONS",
            Self::Trace => "TRACE",
            Self::Connect => "CONNECT",
        }
    }

    /// Whether `params` rides in the URL query string (GET/HEAD) rather
    /// than the request body.
    pub fn params_in_query(&self) -> bool {
        matches!(self, Self::Get | Self::Head)
    }

    /// The wire method type the transport expects.
    pub(crate) fn to_reqwest(self) -> reqwest::Method {
        match self {
            Self::Get => reqwest::Method::GET,
            Self::Post => reqwest::Method::POST,
            Self::Put => reqwest::Method::PUT,
            Self::Delete => reqwest::Method::DELETE,
            Self::Head => reqwest::Method::HEAD,
            Self::Options => reqwest::Method::OPTIONS,
            Self::Trace => reqwest::Method::TRACE,
            Self::Connect => reqwest::Method::CONNECT,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Method; 8] = [
        Method::Get,
        Method::Post,
        Method::Put,
        Method::Delete,
        Method::Head,
        Method::Options,
        Method::Trace,
        Method::Connect,
    ];

    #[test]
    fn test_parse_all_verbs() {
        for method in ALL {
            assert_eq!(Method::parse(method.as_str()), Some(method));
        }
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert_eq!(Method::parse("PATCH"), None);
        assert_eq!(Method::parse("get"), None);
        assert_eq!(Method::parse(""), None);
        assert_eq!(Method::parse("GET "), None);
    }

    #[test]
    fn test_display_matches_wire_form() {
        assert_eq!(Method::Get.to_string(), "GET");
        assert_eq!(Method::Connect.to_string(), "CONNECT");
    }

    #[test]
    fn test_params_in_query_only_for_get_and_head() {
        for method in ALL {
            let expected = matches!(method, Method::Get | Method::Head);
            assert_eq!(method.params_in_query(), expected, "{method}");
        }
    }
}
