//! Tests for `clean` parsing and flag handling.

use super::parse;
use crate::cli::commands::{effective_options, CleanArgs};
use crate::cli::CliCommand;
use shareclean_core::config::ShareCleanConfig;

#[test]
fn cli_parse_clean_urls() {
    match parse(&["shareclean", "clean", "https://a.com/?x=1", "https://b.com/"]) {
        CliCommand::Clean {
            urls,
            offline,
            strip_fragment,
        } => {
            assert_eq!(urls, vec!["https://a.com/?x=1", "https://b.com/"]);
            assert!(!offline);
            assert!(!strip_fragment);
        }
        _ => panic!("expected Clean"),
    }
}

#[test]
fn cli_parse_clean_no_urls_reads_stdin() {
    match parse(&["shareclean", "clean"]) {
        CliCommand::Clean { urls, .. } => assert!(urls.is_empty()),
        _ => panic!("expected Clean"),
    }
}

#[test]
fn cli_parse_clean_flags() {
    match parse(&[
        "shareclean",
        "clean",
        "--offline",
        "--strip-fragment",
        "https://a.com/",
    ]) {
        CliCommand::Clean {
            urls,
            offline,
            strip_fragment,
        } => {
            assert_eq!(urls, vec!["https://a.com/"]);
            assert!(offline);
            assert!(strip_fragment);
        }
        _ => panic!("expected Clean"),
    }
}

#[test]
fn flags_override_config() {
    let cfg = ShareCleanConfig::default();
    let options = effective_options(&cfg, &CleanArgs::default());
    assert!(options.resolve_short_links);
    assert!(!options.strip_fragment);

    let args = CleanArgs {
        offline: true,
        strip_fragment: true,
        ..CleanArgs::default()
    };
    let options = effective_options(&cfg, &args);
    assert!(!options.resolve_short_links);
    assert!(options.strip_fragment);
}

#[test]
fn absent_flags_keep_config_values() {
    let cfg = ShareCleanConfig {
        resolve_short_links: false,
        strip_fragment: true,
        ..ShareCleanConfig::default()
    };
    let options = effective_options(&cfg, &CleanArgs::default());
    assert!(!options.resolve_short_links);
    assert!(options.strip_fragment);
}
