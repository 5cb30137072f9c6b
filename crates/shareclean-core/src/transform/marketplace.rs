//! Marketplace product links: long SEO path to short product path.

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use super::Transformed;

static LONG_FORM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-i\.(\d+)\.(\d+)").expect("LONG_FORM regex should compile"));

/// Rewrites `/<product-name>-i.<shopId>.<productId>` to
/// `/product/<shopId>/<productId>` and drops the query.
pub(super) fn apply(url: &mut Url) -> Transformed {
    let Some(caps) = LONG_FORM.captures(url.path()) else {
        return Transformed::NotApplied;
    };
    let path = format!("/product/{}/{}", &caps[1], &caps[2]);
    url.set_path(&path);
    url.set_query(None);
    Transformed::Applied
}
