//! Ordered special-case predicates for hosts that need more than an exact match.

use url::form_urlencoded;

use super::Policy;

pub(super) struct SpecialCase {
    pub name: &'static str,
    pub matches: fn(host: &str, path: &str, query: Option<&str>) -> bool,
    pub policy: Policy,
}

pub(super) static SPECIAL_CASES: &[SpecialCase] = &[SpecialCase {
    name: "tmall-storefront",
    matches: is_tmall_storefront,
    policy: Policy::keep("*.tmall.com", &[]),
}];

/// Tmall storefront pages live on per-shop subdomains; product pages
/// (`detail.tmall.com`) are matched exactly before we get here.
fn is_tmall_storefront(host: &str, path: &str, query: Option<&str>) -> bool {
    if host != "tmall.com" && !host.ends_with(".tmall.com") {
        return false;
    }
    path.contains("/shop/") || has_query_key(query, "user_number_id")
}

fn has_query_key(query: Option<&str>, key: &str) -> bool {
    query
        .map(|q| form_urlencoded::parse(q.as_bytes()).any(|(k, _)| k == key))
        .unwrap_or(false)
}
