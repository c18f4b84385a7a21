//! Client configuration and the request entry points.

use std::time::Duration;

use reqwest::header::{HeaderValue, ACCEPT_ENCODING, CONNECTION, COOKIE};
use reqwest::ClientBuilder;

use crate::cookie::{self, Cookie};
use crate::error::{Error, Result};
use crate::header::{self, HeaderSpec};
use crate::method::Method;
use crate::response::{self, Response};
use crate::retry::retry;

/// Wall-clock budget for one attempt, covering the whole round trip.
/// Fixed by contract, not configurable.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Extra attempts the retried entry points make after a failure.
pub const DEFAULT_RETRIES: u32 = 3;

/// Client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Extra attempts after a failed one. Every failure kind consumes an
    /// attempt, transient or not.
    pub retries: u32,
    /// User agent string. A caller's header spec overrides it per request.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            retries: DEFAULT_RETRIES,
            user_agent: format!("httpretry/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Build the underlying transport client: 60-second round-trip budget and
/// the idle pool disabled, so every call handshakes fresh instead of
/// risking a stale kept-alive connection.
pub fn build_client(config: &ClientConfig) -> Result<reqwest::Client> {
    ClientBuilder::new()
        .timeout(REQUEST_TIMEOUT)
        .pool_max_idle_per_host(0)
        .user_agent(&config.user_agent)
        .build()
        .map_err(Error::Transport)
}

/// A request helper carrying its configuration.
///
/// Holds no per-call state; one value can serve any number of concurrent
/// callers without locking.
#[derive(Debug, Clone)]
pub struct Client {
    inner: reqwest::Client,
    retries: u32,
}

impl Client {
    /// Create a client with default configuration.
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a client with custom configuration.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let inner = build_client(&config)?;
        Ok(Self {
            inner,
            retries: config.retries,
        })
    }

    /// Retried request; returns the body text only.
    pub async fn request(
        &self,
        method: &str,
        url: &str,
        params: &str,
        headers: &HeaderSpec,
    ) -> Result<String> {
        let response = self
            .request_with_cookies(method, url, params, headers, &[])
            .await?;
        Ok(response.body)
    }

    /// Retried request with cookies attached; returns body and response
    /// cookies.
    pub async fn request_with_cookies(
        &self,
        method: &str,
        url: &str,
        params: &str,
        headers: &HeaderSpec,
        cookies: &[Cookie],
    ) -> Result<Response> {
        retry(self.retries, || {
            self.dispatch(method, url, params, headers, cookies)
        })
        .await
    }

    /// One attempt, no retry.
    ///
    /// For GET and HEAD, non-empty `params` is appended to the URL as a
    /// query string (`&` if the URL already has one, `?` otherwise); for
    /// every other verb `params` is the literal request body and the URL
    /// is used unmodified.
    pub async fn dispatch(
        &self,
        method: &str,
        url: &str,
        params: &str,
        headers: &HeaderSpec,
        cookies: &[Cookie],
    ) -> Result<Response> {
        let method =
            Method::parse(method).ok_or_else(|| Error::InvalidMethod(method.to_string()))?;

        let request_url = if method.params_in_query() {
            with_query(url, params)
        } else {
            url.to_string()
        };

        tracing::debug!("dispatching {} {}", method, request_url);

        let mut builder = self.inner.request(method.to_reqwest(), request_url.as_str());
        if !method.params_in_query() {
            builder = builder.body(params.to_string());
        }

        let mut header_map = header::build_headers(headers)?;
        // Raw body bytes back, and no kept-alive connection; both override
        // whatever the caller supplied.
        header_map.insert(ACCEPT_ENCODING, HeaderValue::from_static(""));
        header_map.insert(CONNECTION, HeaderValue::from_static("close"));
        if let Some(line) = cookie::request_line(cookies) {
            // A spec may already carry a Cookie header; the pass-through
            // cookies attach after it.
            let line = match header_map.get(COOKIE).and_then(|v| v.to_str().ok()) {
                Some(existing) if !existing.is_empty() => format!("{existing}; {line}"),
                _ => line,
            };
            let value =
                HeaderValue::try_from(line).map_err(|_| Error::header_invalid("Cookie"))?;
            header_map.insert(COOKIE, value);
        }
        let builder = builder.headers(header_map);

        let wire_response = builder.send().await.map_err(Error::Transport)?;
        tracing::debug!(
            "{} {} returned {}",
            method,
            request_url,
            wire_response.status()
        );

        response::drain(wire_response).await
    }
}

/// Append `params` to `url` as a query string, with `&` if the URL already
/// carries one and `?` otherwise. Empty `params` leaves the URL untouched.
fn with_query(url: &str, params: &str) -> String {
    if params.is_empty() {
        url.to_string()
    } else if url.contains('?') {
        format!("{url}&{params}")
    } else {
        format!("{url}?{params}")
    }
}

/// Retried request with default configuration; returns the body text only.
///
/// Builds a fresh client per call, so nothing is shared across
/// invocations.
pub async fn request(method: &str, url: &str, params: &str, headers: &HeaderSpec) -> Result<String> {
    Client::new()?.request(method, url, params, headers).await
}

/// Retried request with default configuration and cookies attached.
pub async fn request_with_cookies(
    method: &str,
    url: &str,
    params: &str,
    headers: &HeaderSpec,
    cookies: &[Cookie],
) -> Result<Response> {
    Client::new()?
        .request_with_cookies(method, url, params, headers, cookies)
        .await
}

/// Single attempt with default configuration, no retry.
pub async fn dispatch(
    method: &str,
    url: &str,
    params: &str,
    headers: &HeaderSpec,
    cookies: &[Cookie],
) -> Result<Response> {
    Client::new()?
        .dispatch(method, url, params, headers, cookies)
        .await
}
