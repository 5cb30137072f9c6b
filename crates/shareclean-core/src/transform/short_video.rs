//! Short-video platform links: host normalization and share tracking params.

use url::Url;

use super::{canonicalize_origin, Transformed};
use crate::filter;

pub(crate) const CANONICAL_HOST: &str = "www.tiktok.com";

const TRACKING_PARAMS: &[&str] = &[
    "_r",
    "_t",
    "_d",
    "is_from_webapp",
    "sender_device",
    "web_id",
    "refer",
    "is_copy_url",
    "is_share_url",
    "share_item_id",
    "share_app_id",
    "checksum",
    "sec_uid",
    "sec_user_id",
];

/// Never produces a final form on its own; the host policy still runs.
pub(super) fn apply(url: &mut Url) -> Transformed {
    if url.host_str() == Some("tiktok.com") {
        canonicalize_origin(url, CANONICAL_HOST);
    }
    filter::remove_where(url, |name| TRACKING_PARAMS.contains(&name));
    Transformed::NotApplied
}
