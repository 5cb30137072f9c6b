//! Query-parameter filtering under a host [`Policy`].
//!
//! - Keep-list: a fresh query is built from the listed names, in list order,
//!   taking the first value of each. Repeated parameters collapse to one value.
//! - Deny-list: listed names are removed, then the wildcard list is removed on
//!   top (skipped when the policy *is* the wildcard).
//!
//! Names match exactly and case-sensitively. An empty result removes the query
//! entirely rather than leaving a bare `?`.

mod query;

use url::Url;

use crate::rules::{ParamMode, Policy, WILDCARD};

pub(crate) use query::{first_value, replace_query};

/// Applies `policy` to the query of `url`.
pub fn apply(url: &mut Url, policy: &Policy) {
    match policy.mode {
        ParamMode::KeepList => keep_only(url, policy.params),
        ParamMode::DenyList => {
            let also_wildcard = !policy.is_wildcard();
            let removed = remove_where(url, |name| {
                policy.lists(name) || (also_wildcard && WILDCARD.lists(name))
            });
            tracing::trace!(host = policy.host, removed, "deny-list applied");
        }
    }
}

/// Rebuilds the query from `names` only.
pub(crate) fn keep_only(url: &mut Url, names: &[&str]) {
    let pairs = query::pairs(url);
    let kept: Vec<(String, String)> = names
        .iter()
        .filter_map(|name| {
            pairs
                .iter()
                .find(|(k, _)| k == *name)
                .map(|(k, v)| (k.clone(), v.clone()))
        })
        .collect();
    replace_query(url, kept);
}

/// Removes every parameter whose name satisfies `pred`. Returns how many were
/// removed; the query is left byte-for-byte untouched when nothing matches.
pub(crate) fn remove_where(url: &mut Url, pred: impl Fn(&str) -> bool) -> usize {
    let pairs = query::pairs(url);
    let before = pairs.len();
    let kept: Vec<(String, String)> = pairs.into_iter().filter(|(k, _)| !pred(k)).collect();
    let removed = before - kept.len();
    if removed > 0 {
        replace_query(url, kept);
    }
    removed
}

/// Drops the query string. Used for best-effort fallbacks.
pub fn strip_query(url: &mut Url) {
    url.set_query(None);
}
