//! libcurl-backed [`Fetcher`].

use std::str;

use super::{classify_curl_error, FetchError, FetchedPage, Fetcher};
use crate::config::HttpConfig;

/// Performs a GET with the `curl` crate's Easy handle.
///
/// Follows redirects (up to `max_redirects`), sends a browser user agent and
/// aborts after `timeout_secs`. The body is read up to `max_body_bytes`; a
/// longer body is cut there and the page is still returned.
/// Runs in the current thread.
#[derive(Debug, Clone, Default)]
pub struct CurlFetcher {
    config: HttpConfig,
}

impl CurlFetcher {
    pub fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &HttpConfig {
        &self.config
    }
}

impl Fetcher for CurlFetcher {
    fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError> {
        let cfg = &self.config;
        let limit = cfg.max_body_bytes;
        let mut body: Vec<u8> = Vec::new();
        let mut truncated = false;

        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.get(true)?;
        easy.follow_location(true)?;
        easy.max_redirections(cfg.max_redirects)?;
        easy.useragent(&cfg.user_agent)?;
        easy.connect_timeout(cfg.connect_timeout())?;
        easy.timeout(cfg.timeout())?;
        // Empty string = every encoding libcurl was built with.
        easy.accept_encoding("")?;

        let mut list = curl::easy::List::new();
        list.append("Accept: text/html,application/xhtml+xml;q=0.9,*/*;q=0.8")?;
        list.append("Accept-Language: en-US,en;q=0.9")?;
        easy.http_headers(list)?;

        let outcome = {
            let mut transfer = easy.transfer();
            transfer.header_function(|data| {
                if let Some((name, value)) = str::from_utf8(data).ok().and_then(|l| l.split_once(':')) {
                    if name.trim().eq_ignore_ascii_case("location") {
                        tracing::trace!("redirect -> {}", value.trim());
                    }
                }
                true
            })?;
            transfer.write_function(|data| {
                let room = limit.saturating_sub(body.len());
                if data.len() > room {
                    body.extend_from_slice(&data[..room]);
                    truncated = true;
                    return Ok(0); // abort transfer; the final URL is already known
                }
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()
        };

        match outcome {
            Err(_) if truncated => {
                tracing::debug!(url, limit, "body cap reached, keeping the first bytes");
            }
            Err(e) => return Err(classify_curl_error(e, cfg.timeout(), cfg.max_redirects)),
            Ok(()) => {}
        }

        let status = easy.response_code()?;
        let final_url = easy
            .effective_url()?
            .map(str::to_string)
            .unwrap_or_else(|| url.to_string());

        tracing::debug!(url, %final_url, status, bytes = body.len(), truncated, "fetched");

        Ok(FetchedPage {
            final_url,
            status,
            body: String::from_utf8_lossy(&body).into_owned(),
            truncated,
        })
    }
}
