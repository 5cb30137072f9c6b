//! HTTP GET boundary used by share-link resolution.
//!
//! The resolver only depends on [`Fetcher`]; [`CurlFetcher`] is the libcurl
//! implementation. A fetch is a single blocking call bounded by a timeout:
//! callers in async code should run it on a blocking thread.

mod classify;
mod curl_fetcher;

use std::time::Duration;

use thiserror::Error;

pub use classify::classify_curl_error;
pub use curl_fetcher::CurlFetcher;

/// Errors from a single fetch. None of them are retried.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("timed out after {0:?}")]
    Timeout(Duration),
    #[error("connection failed: {0}")]
    Connection(#[source] curl::Error),
    #[error("too many redirects (limit {0})")]
    TooManyRedirects(u32),
    #[error(transparent)]
    Curl(#[from] curl::Error),
}

/// What a completed GET produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedPage {
    /// URL after all redirects were followed.
    pub final_url: String,
    /// Status of the last response in the chain.
    pub status: u32,
    /// Body decoded as UTF-8 (lossy).
    pub body: String,
    /// The body hit the size cap and holds only its first bytes.
    pub truncated: bool,
}

/// GET with redirect following, custom headers and a bounded timeout.
pub trait Fetcher: Send + Sync {
    fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError>;
}
