//! Social platform links that were already expanded from a share link.
//!
//! Handles:
//! - `/reel/<id>/?fs=e&rdid=...` → `https://www.facebook.com/reel/<id>/`
//! - `/watch/?v=<id>&...` → `https://www.facebook.com/watch/?v=<id>`
//! - `/photo/?fbid=<id>&...` → `https://www.facebook.com/photo/?fbid=<id>`

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use super::{canonicalize_origin, Transformed};
use crate::filter;

pub(crate) const CANONICAL_HOST: &str = "www.facebook.com";

/// Share-sheet parameters appended to expanded links.
const TRACKING_PARAMS: &[&str] = &[
    "fs",
    "rdid",
    "share_url",
    "mibextid",
    "__cft__",
    "__tn__",
    "refsrc",
    "_rdr",
];

static REEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^/reel/(\d+)/?$").expect("REEL regex should compile"));

pub(super) fn apply(url: &mut Url) -> Transformed {
    if let Some(id) = REEL.captures(url.path()).map(|c| c[1].to_string()) {
        canonicalize_origin(url, CANONICAL_HOST);
        url.set_path(&format!("/reel/{id}/"));
        url.set_query(None);
        return Transformed::Applied;
    }

    for (dir, key) in [("watch", "v"), ("photo", "fbid")] {
        if !is_directory(url.path(), dir) {
            continue;
        }
        // An empty id (`?v=`) names no content, so the URL falls through to
        // tracking-param removal instead (DESIGN.md, decision 4).
        if let Some(id) = filter::first_value(url, key).filter(|v| !v.is_empty()) {
            canonicalize_origin(url, CANONICAL_HOST);
            url.set_path(&format!("/{dir}/"));
            filter::replace_query(url, vec![(key.to_string(), id)]);
            return Transformed::Applied;
        }
    }

    let removed = filter::remove_where(url, |name| TRACKING_PARAMS.contains(&name));
    canonicalize_origin(url, CANONICAL_HOST);
    tracing::trace!(removed, "social link had no canonical shape");
    Transformed::NotApplied
}

/// Matches `/<name>` and `/<name>/`.
fn is_directory(path: &str, name: &str) -> bool {
    path.strip_prefix('/')
        .map(|p| p.strip_suffix('/').unwrap_or(p) == name)
        .unwrap_or(false)
}
