//! Ordered resolution strategies. The first one that yields a URL wins.

use std::cell::OnceCell;

use scraper::Html;
use url::Url;

use super::extract;
use super::{ResolvedUrl, ShareLink};
use crate::fetch::FetchedPage;

/// One fetched share link, as seen by the strategies.
pub(super) struct Attempt<'a> {
    pub link: &'a ShareLink,
    pub page: &'a FetchedPage,
    /// Where the redirect chain ended, if it parses.
    pub final_url: Option<Url>,
    /// Base for relative URLs found in markup.
    base: Url,
    document: OnceCell<Html>,
}

impl<'a> Attempt<'a> {
    pub fn new(link: &'a ShareLink, original: &Url, page: &'a FetchedPage) -> Self {
        let final_url = Url::parse(&page.final_url).ok();
        let base = final_url.clone().unwrap_or_else(|| original.clone());
        Self {
            link,
            page,
            final_url,
            base,
            document: OnceCell::new(),
        }
    }

    /// Parsed lazily; redirect success never touches the markup.
    fn document(&self) -> &Html {
        self.document
            .get_or_init(|| Html::parse_document(&self.page.body))
    }

    fn join(&self, found: String) -> Option<Url> {
        match self.base.join(&found) {
            Ok(url) => Some(url),
            Err(e) => {
                tracing::debug!(found, "extracted URL does not parse: {}", e);
                None
            }
        }
    }
}

pub(super) type Strategy = fn(&Attempt<'_>) -> Option<ResolvedUrl>;

pub(super) const STRATEGIES: &[(&str, Strategy)] = &[
    ("redirect", redirect_target),
    ("og:url", og_url),
    ("canonical", canonical_link),
    ("redirect_url marker", embedded_redirect),
];

fn redirect_target(attempt: &Attempt<'_>) -> Option<ResolvedUrl> {
    attempt
        .final_url
        .as_ref()
        .filter(|u| attempt.link.platform.has_left_share_shape(u))
        .map(|u| ResolvedUrl::Redirected(u.clone()))
}

fn og_url(attempt: &Attempt<'_>) -> Option<ResolvedUrl> {
    extract::og_url(attempt.document())
        .and_then(|s| attempt.join(s))
        .map(ResolvedUrl::Extracted)
}

fn canonical_link(attempt: &Attempt<'_>) -> Option<ResolvedUrl> {
    extract::canonical_link(attempt.document())
        .and_then(|s| attempt.join(s))
        .map(ResolvedUrl::Extracted)
}

fn embedded_redirect(attempt: &Attempt<'_>) -> Option<ResolvedUrl> {
    extract::embedded_redirect(&attempt.page.body)
        .and_then(|s| attempt.join(s))
        .map(ResolvedUrl::Extracted)
}
