//! Share-link resolution.
//!
//! A detected share link is fetched once (redirects followed, bounded by the
//! fetcher's timeout). Then the strategies in [`strategy::STRATEGIES`] run in
//! order: the redirect target if it left the share shape, then `og:url`,
//! `rel=canonical` and the embedded `redirect_url` marker from the body. The
//! winner is cleaned with the platform's own rules (path transform, platform
//! and generic tracking params, host normalization). If nothing wins, or the
//! fetch fails, the original link is returned with its query stripped.
//!
//! Resolution never fails from the caller's point of view.

mod detect;
mod extract;
mod strategy;

use std::sync::Arc;

use url::Url;

use crate::cleaner::{self, CleanOptions};
use crate::fetch::Fetcher;
use crate::filter;

pub use detect::{detect, Platform, ShareKind, ShareLink};

use strategy::{Attempt, STRATEGIES};

/// Outcome of resolving a share link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedUrl {
    /// The redirect chain left the share shape; holds the cleaned target.
    Redirected(Url),
    /// Found in the page markup; holds the cleaned URL.
    Extracted(Url),
    /// Nothing usable; the original link without its query.
    Fallback(String),
}

impl ResolvedUrl {
    /// Best-effort result: the original link with the query removed.
    pub fn fallback(original: &Url) -> Self {
        let mut url = original.clone();
        filter::strip_query(&mut url);
        ResolvedUrl::Fallback(url.into())
    }

    pub fn as_str(&self) -> &str {
        match self {
            ResolvedUrl::Redirected(u) | ResolvedUrl::Extracted(u) => u.as_str(),
            ResolvedUrl::Fallback(s) => s,
        }
    }

    pub fn into_string(self) -> String {
        match self {
            ResolvedUrl::Redirected(u) | ResolvedUrl::Extracted(u) => u.into(),
            ResolvedUrl::Fallback(s) => s,
        }
    }

    fn cleaned(self, platform: Platform, options: &CleanOptions) -> Self {
        let clean = |u| cleaner::clean_resolved(u, platform, options);
        match self {
            ResolvedUrl::Redirected(u) => ResolvedUrl::Redirected(clean(u)),
            ResolvedUrl::Extracted(u) => ResolvedUrl::Extracted(clean(u)),
            fallback @ ResolvedUrl::Fallback(_) => fallback,
        }
    }
}

/// Resolves share links through a [`Fetcher`].
#[derive(Clone)]
pub struct ShareLinkResolver {
    fetcher: Arc<dyn Fetcher>,
}

impl ShareLinkResolver {
    pub fn new(fetcher: Arc<dyn Fetcher>) -> Self {
        Self { fetcher }
    }

    /// Resolves `original` (already classified as `link`) to a cleaned URL.
    pub fn resolve(&self, link: &ShareLink, original: &Url, options: &CleanOptions) -> ResolvedUrl {
        tracing::debug!(
            platform = %link.platform,
            kind = %link.kind,
            share_id = %link.share_id,
            "resolving share link"
        );

        let page = match self.fetcher.fetch(original.as_str()) {
            Ok(page) => page,
            Err(e) => {
                tracing::warn!(url = %original, "share link fetch failed: {}", e);
                return ResolvedUrl::fallback(original);
            }
        };
        if !(200..300).contains(&page.status) {
            tracing::debug!(status = page.status, final_url = %page.final_url, "non-2xx response");
        }

        let attempt = Attempt::new(link, original, &page);
        for (name, strategy) in STRATEGIES {
            if let Some(found) = strategy(&attempt) {
                let resolved = found.cleaned(link.platform, options);
                tracing::info!(strategy = *name, url = %original, resolved = resolved.as_str(), "share link resolved");
                return resolved;
            }
        }

        tracing::info!(url = %original, final_url = %page.final_url, "no canonical URL found; using fallback");
        ResolvedUrl::fallback(original)
    }
}

impl std::fmt::Debug for ShareLinkResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShareLinkResolver").finish_non_exhaustive()
    }
}
