//! Cleaning entry points.
//!
//! `parse → detect share link → resolve` or
//! `parse → path transform → policy filter → serialize`.
//!
//! Every entry point returns a URL string. Input that does not parse is
//! returned unchanged, and resolution failures degrade to the original link
//! without its query.

use std::sync::Arc;

use url::Url;

use crate::config::ShareCleanConfig;
use crate::fetch::{CurlFetcher, Fetcher};
use crate::filter;
use crate::resolver::{self, Platform, ShareLinkResolver};
use crate::rules::{self, WILDCARD};
use crate::transform::{PathTransform, Transformed};

/// Behaviour toggles for a cleaning operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CleanOptions {
    /// Resolve share links over the network (async/blocking entry points only).
    pub resolve_short_links: bool,
    /// Drop the `#fragment`.
    pub strip_fragment: bool,
}

impl Default for CleanOptions {
    fn default() -> Self {
        Self {
            resolve_short_links: true,
            strip_fragment: false,
        }
    }
}

impl From<&ShareCleanConfig> for CleanOptions {
    fn from(cfg: &ShareCleanConfig) -> Self {
        Self {
            resolve_short_links: cfg.resolve_short_links,
            strip_fragment: cfg.strip_fragment,
        }
    }
}

/// Cleans without any network access, using default options.
pub fn clean_sync(input: &str) -> String {
    clean_sync_with(input, &CleanOptions::default())
}

/// Cleans without any network access. Share links are treated like any other
/// URL on their host.
pub fn clean_sync_with(input: &str, options: &CleanOptions) -> String {
    match Url::parse(input) {
        Ok(url) => clean_parsed(url, options).into(),
        Err(e) => {
            tracing::debug!(input, "not a URL, returned unchanged: {}", e);
            input.to_string()
        }
    }
}

/// Path transform, then policy filter.
pub(crate) fn clean_parsed(mut url: Url, options: &CleanOptions) -> Url {
    let policy = rules::lookup_url(&url);
    let transformed = policy
        .path_transform
        .map(|t| t.apply(&mut url))
        .unwrap_or(Transformed::NotApplied);
    if transformed == Transformed::NotApplied {
        filter::apply(&mut url, policy);
    }
    if options.strip_fragment {
        url.set_fragment(None);
    }
    url
}

/// Cleans a URL a `platform` share link resolved to.
///
/// Only the platform transform and the generic tracking list run; host
/// keep-lists are skipped so content ids like `story_fbid` survive. Targets
/// that left the platform's hosts get the normal pipeline.
pub(crate) fn clean_resolved(mut url: Url, platform: Platform, options: &CleanOptions) -> Url {
    if !platform.owns(&url) {
        return clean_parsed(url, options);
    }
    let transform = match platform {
        Platform::Facebook => PathTransform::Social,
        Platform::TikTok => PathTransform::ShortVideo,
    };
    if transform.apply(&mut url) == Transformed::NotApplied {
        filter::apply(&mut url, &WILDCARD);
    }
    if options.strip_fragment {
        url.set_fragment(None);
    }
    url
}

/// Full cleaner: share-link resolution plus the synchronous pipeline.
#[derive(Debug, Clone)]
pub struct Cleaner {
    resolver: ShareLinkResolver,
    options: CleanOptions,
}

impl Cleaner {
    pub fn new(fetcher: Arc<dyn Fetcher>, options: CleanOptions) -> Self {
        Self {
            resolver: ShareLinkResolver::new(fetcher),
            options,
        }
    }

    /// Cleaner backed by libcurl with the configured HTTP settings.
    pub fn from_config(cfg: &ShareCleanConfig) -> Self {
        Self::new(Arc::new(CurlFetcher::new(cfg.http.clone())), cfg.into())
    }

    pub fn options(&self) -> &CleanOptions {
        &self.options
    }

    /// Cleans `input`, resolving share links when enabled. Blocks for at most
    /// one fetch timeout.
    pub fn clean(&self, input: &str) -> String {
        let url = match Url::parse(input) {
            Ok(url) => url,
            Err(e) => {
                tracing::debug!(input, "not a URL, returned unchanged: {}", e);
                return input.to_string();
            }
        };

        if self.options.resolve_short_links {
            if let Some(link) = resolver::detect(&url) {
                return self
                    .resolver
                    .resolve(&link, &url, &self.options)
                    .into_string();
            }
        }

        clean_parsed(url, &self.options).into()
    }

    /// Same as [`clean_sync_with`] using this cleaner's options.
    pub fn clean_sync(&self, input: &str) -> String {
        clean_sync_with(input, &self.options)
    }

    /// [`Cleaner::clean`] on tokio's blocking pool.
    pub async fn clean_async(self: Arc<Self>, input: String) -> String {
        let fallback = input.clone();
        match tokio::task::spawn_blocking(move || self.clean(&input)).await {
            Ok(cleaned) => cleaned,
            Err(e) => {
                tracing::warn!(input = %fallback, "clean task failed: {}", e);
                fallback
            }
        }
    }
}
