//! Retried one-shot HTTP request helper.
//!
//! Each call issues a request, waits for the full response body, and
//! retries immediately on failure up to a bounded number of extra
//! attempts. Callers hand over a verb, a URL, a parameter string and a
//! header spec; they get back the body text, plus response cookies via
//! the cookie-aware entry point. Response status is reported, never
//! interpreted: a 500 with a body is a successful call.
//!
//! ```no_run
//! use httpretry::HeaderSpec;
//!
//! # async fn run() -> httpretry::Result<()> {
//! let body = httpretry::request(
//!     "GET",
//!     "https://example.com/search",
//!     "q=rust",
//!     &HeaderSpec::from(r#"{"X-Trace": "abc"}"#),
//! )
//! .await?;
//! println!("{body}");
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod cookie;
pub mod error;
pub mod header;
pub mod method;
pub mod response;
mod retry;

pub use client::{
    build_client, dispatch, request, request_with_cookies, Client, ClientConfig, DEFAULT_RETRIES,
    REQUEST_TIMEOUT,
};
pub use cookie::Cookie;
pub use error::{Error, Result};
pub use header::HeaderSpec;
pub use method::Method;
pub use response::Response;
