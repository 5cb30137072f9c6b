//! `shareclean rules` – list the host table or explain one URL.

use anyhow::{Context, Result};
use shareclean_core::rules::{self, Policy};
use url::Url;

pub fn run_rules(url: Option<&str>) -> Result<()> {
    match url {
        Some(raw) => {
            let url = Url::parse(raw).with_context(|| format!("not a URL: {}", raw))?;
            println!("{}", describe(&url));
        }
        None => {
            for policy in rules::builtin() {
                println!("{}", policy);
            }
            println!("{}", rules::WILDCARD);
        }
    }
    Ok(())
}

/// One line: the matched policy, and whether the URL is a share link.
pub(crate) fn describe(url: &Url) -> String {
    let policy: &Policy = rules::lookup_url(url);
    match shareclean_core::resolver::detect(url) {
        Some(link) => format!("{} (share link: {} {})", policy, link.platform, link.kind),
        None => policy.to_string(),
    }
}
