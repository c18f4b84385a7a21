//! Response draining.

use crate::cookie::Cookie;
use crate::error::{Error, Result};

/// What a completed call returns: the body as text plus every cookie the
/// server set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// Entire response body, decoded lossily as UTF-8. Raw bytes, since
    /// content-encoding negotiation is suppressed on the request.
    pub body: String,
    /// Cookies from the response's `Set-Cookie` headers, in arrival order.
    pub cookies: Vec<Cookie>,
}

/// Drain a wire response into an owned [`Response`].
///
/// Cookies are captured before the body is read; a failure while draining
/// the body is an [`Error::BodyRead`] and nothing is returned.
pub(crate) async fn drain(response: reqwest::Response) -> Result<Response> {
    let cookies = response
        .cookies()
        .map(|c| Cookie::new(c.name(), c.value()))
        .collect();

    let bytes = response.bytes().await.map_err(Error::BodyRead)?;
    let body = String::from_utf8_lossy(&bytes).into_owned();

    Ok(Response { body, cookies })
}
