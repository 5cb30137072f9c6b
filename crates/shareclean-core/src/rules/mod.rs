//! Per-host cleaning policies.
//!
//! Every cleaning operation runs under exactly one [`Policy`]:
//! - the entry whose host matches the URL host exactly, or
//! - the first special-case predicate that claims the URL, or
//! - the wildcard policy.
//!
//! The table is `&'static` data; nothing here is mutated at runtime.

mod special;
mod table;

use std::fmt;

use url::Url;

use crate::transform::PathTransform;

pub use table::{builtin, WILDCARD};

/// How a policy treats the query string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamMode {
    /// Keep only the listed parameters; an empty list strips the whole query.
    KeepList,
    /// Remove the listed parameters (and the wildcard list on top).
    DenyList,
}

/// Cleaning rule for one host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Policy {
    pub host: &'static str,
    pub mode: ParamMode,
    pub params: &'static [&'static str],
    /// Structural rewrite run before parameter filtering.
    pub path_transform: Option<PathTransform>,
}

impl Policy {
    pub const fn keep(host: &'static str, params: &'static [&'static str]) -> Self {
        Self {
            host,
            mode: ParamMode::KeepList,
            params,
            path_transform: None,
        }
    }

    pub const fn deny(host: &'static str, params: &'static [&'static str]) -> Self {
        Self {
            host,
            mode: ParamMode::DenyList,
            params,
            path_transform: None,
        }
    }

    pub const fn with_transform(mut self, transform: PathTransform) -> Self {
        self.path_transform = Some(transform);
        self
    }

    pub fn is_wildcard(&self) -> bool {
        self.host == WILDCARD.host
    }

    /// True if `name` is listed by this policy (exact, case-sensitive).
    pub fn lists(&self, name: &str) -> bool {
        self.params.iter().any(|p| *p == name)
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mode = match self.mode {
            ParamMode::KeepList => "keep",
            ParamMode::DenyList => "deny",
        };
        write!(f, "{} {} [{}]", self.host, mode, self.params.join(", "))?;
        if let Some(t) = self.path_transform {
            write!(f, " +{}", t)?;
        }
        Ok(())
    }
}

/// Selects the policy for a host, path and raw query string.
pub fn lookup(host: &str, path: &str, query: Option<&str>) -> &'static Policy {
    if let Some(policy) = table::HOST_RULES.iter().find(|p| p.host == host) {
        return policy;
    }
    special::SPECIAL_CASES
        .iter()
        .find(|case| (case.matches)(host, path, query))
        .map(|case| {
            tracing::debug!(case = case.name, host, "special-case policy selected");
            &case.policy
        })
        .unwrap_or(&WILDCARD)
}

/// [`lookup`] for a parsed URL. URLs without a host get the wildcard policy.
pub fn lookup_url(url: &Url) -> &'static Policy {
    match url.host_str() {
        Some(host) => lookup(host, url.path(), url.query()),
        None => &WILDCARD,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_host_wins() {
        let p = lookup("item.taobao.com", "/item.htm", Some("id=1"));
        assert_eq!(p.mode, ParamMode::KeepList);
        assert_eq!(p.params, &["id"]);
    }

    #[test]
    fn unknown_host_falls_back_to_wildcard() {
        let p = lookup("example.org", "/", None);
        assert!(p.is_wildcard());
        assert_eq!(p.mode, ParamMode::DenyList);
        assert!(p.lists("utm_source"));
    }

    #[test]
    fn host_match_is_exact() {
        // A subdomain of a listed host is not the listed host.
        assert!(lookup("music.youtube.com", "/watch", Some("v=1")).is_wildcard());
        assert!(!lookup("www.youtube.com", "/watch", Some("v=1")).is_wildcard());
    }

    #[test]
    fn tmall_storefront_by_path() {
        let p = lookup("shop123.tmall.com", "/shop/view_shop.htm", None);
        assert_eq!(p.mode, ParamMode::KeepList);
        assert!(p.params.is_empty());
    }

    #[test]
    fn tmall_storefront_by_query_key() {
        let p = lookup("xyz.tmall.com", "/", Some("user_number_id=42&spm=a"));
        assert_eq!(p.mode, ParamMode::KeepList);
        assert!(p.params.is_empty());
    }

    #[test]
    fn tmall_other_pages_use_wildcard() {
        assert!(lookup("list.tmall.com", "/search_product.htm", Some("q=x")).is_wildcard());
    }

    #[test]
    fn tmall_detail_is_exact_rule() {
        let p = lookup("detail.tmall.com", "/item.htm", Some("id=9"));
        assert_eq!(p.host, "detail.tmall.com");
        assert_eq!(p.params, &["id"]);
    }

    #[test]
    fn transform_hosts_carry_transform() {
        assert_eq!(
            lookup("shopee.tw", "/", None).path_transform,
            Some(PathTransform::Marketplace)
        );
        assert_eq!(
            lookup("m.facebook.com", "/", None).path_transform,
            Some(PathTransform::Social)
        );
        assert_eq!(lookup("x.com", "/", None).path_transform, None);
    }

    #[test]
    fn lookup_url_without_host() {
        let url = Url::parse("mailto:someone@example.com").unwrap();
        assert!(lookup_url(&url).is_wildcard());
    }

    #[test]
    fn display_lists_mode_and_params() {
        let p = lookup("www.youtube.com", "/", None);
        assert_eq!(p.to_string(), "www.youtube.com keep [v, t]");
        let fb = lookup("facebook.com", "/", None);
        assert_eq!(fb.to_string(), "facebook.com keep [fbid] +social");
    }
}
