//! Per-platform structural rewrites.
//!
//! A transform runs before parameter filtering. When it reports
//! [`Transformed::Applied`] the URL is already in its final canonical form and
//! the caller must skip the parameter filter; [`Transformed::NotApplied`] means
//! the URL may still have been normalized (host, platform tracking params) and
//! filtering continues as usual.

mod marketplace;
mod short_video;
mod social;

use std::fmt;

use url::Url;

/// Structural rewrite attached to a host policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathTransform {
    /// `/<name>-i.<shop>.<product>` → `/product/<shop>/<product>`.
    Marketplace,
    /// Expanded reel/watch/photo share links → minimal canonical form.
    Social,
    /// Short-video host normalization and platform tracking-param removal.
    ShortVideo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transformed {
    Applied,
    NotApplied,
}

impl PathTransform {
    pub fn apply(self, url: &mut Url) -> Transformed {
        let outcome = match self {
            PathTransform::Marketplace => marketplace::apply(url),
            PathTransform::Social => social::apply(url),
            PathTransform::ShortVideo => short_video::apply(url),
        };
        tracing::debug!(transform = %self, ?outcome, "path transform");
        outcome
    }
}

impl fmt::Display for PathTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PathTransform::Marketplace => "marketplace",
            PathTransform::Social => "social",
            PathTransform::ShortVideo => "short-video",
        })
    }
}

/// Moves `url` onto `host` over https on the default port.
///
/// Only used for hosts we already recognize, so the setters cannot fail on
/// scheme or host validity; any error is logged and the URL left as is.
pub(crate) fn canonicalize_origin(url: &mut Url, host: &str) {
    if url.scheme() != "https" && url.set_scheme("https").is_err() {
        tracing::warn!(url = %url, "could not switch scheme to https");
    }
    if let Err(e) = url.set_host(Some(host)) {
        tracing::warn!(url = %url, host, "could not set host: {}", e);
    }
    if url.port().is_some() && url.set_port(None).is_err() {
        tracing::warn!(url = %url, "could not clear port");
    }
}
