//! `shareclean clean` – clean URLs from arguments or stdin.

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use anyhow::{Context, Result};
use shareclean_core::config::ShareCleanConfig;
use shareclean_core::fetch::CurlFetcher;
use shareclean_core::{CleanOptions, Cleaner};

#[derive(Debug, Default)]
pub struct CleanArgs {
    pub urls: Vec<String>,
    pub offline: bool,
    pub strip_fragment: bool,
}

/// Config values, overridden by flags. `--offline` only disables resolution
/// and `--strip-fragment` only enables stripping.
pub(crate) fn effective_options(cfg: &ShareCleanConfig, args: &CleanArgs) -> CleanOptions {
    let mut options = CleanOptions::from(cfg);
    if args.offline {
        options.resolve_short_links = false;
    }
    if args.strip_fragment {
        options.strip_fragment = true;
    }
    options
}

pub async fn run_clean(cfg: &ShareCleanConfig, args: CleanArgs) -> Result<()> {
    let options = effective_options(cfg, &args);
    let inputs = if args.urls.is_empty() {
        read_stdin_lines()?
    } else {
        args.urls
    };

    let fetcher = Arc::new(CurlFetcher::new(cfg.http.clone()));
    let cleaner = Arc::new(Cleaner::new(fetcher, options));
    tracing::debug!(count = inputs.len(), ?options, "cleaning");

    // Resolve concurrently, print in input order.
    let handles: Vec<_> = inputs
        .into_iter()
        .map(|input| tokio::spawn(Arc::clone(&cleaner).clean_async(input)))
        .collect();

    let mut out = io::stdout().lock();
    for handle in handles {
        let cleaned = handle.await.context("clean task panicked")?;
        writeln!(out, "{}", cleaned)?;
    }
    out.flush()?;
    Ok(())
}

fn read_stdin_lines() -> Result<Vec<String>> {
    let mut urls = Vec::new();
    for line in io::stdin().lock().lines() {
        let line = line.context("read stdin")?;
        let line = line.trim();
        if !line.is_empty() {
            urls.push(line.to_string());
        }
    }
    Ok(urls)
}
