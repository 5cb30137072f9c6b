//! Canonical-URL extraction from fetched page markup.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{Html, Selector};

/// `"redirect_url":"..."` inside inline script / JSON blobs; the value is a
/// JSON string body, so escaped quotes are allowed.
static EMBEDDED_REDIRECT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""redirect_url":"((?:[^"\\]|\\.)*)""#)
        .expect("EMBEDDED_REDIRECT regex should compile")
});

/// `<meta property="og:url" content="...">` (some pages use `name=`).
pub(super) fn og_url(document: &Html) -> Option<String> {
    first_attr(
        document,
        r#"meta[property="og:url"], meta[name="og:url"]"#,
        "content",
    )
}

/// `<link rel="canonical" href="...">`.
pub(super) fn canonical_link(document: &Html) -> Option<String> {
    first_attr(document, r#"link[rel~="canonical"]"#, "href")
}

/// Platform redirect marker embedded in inline script content.
pub(super) fn embedded_redirect(body: &str) -> Option<String> {
    let caps = EMBEDDED_REDIRECT.captures(body)?;
    let value = unescape_json_string(&caps[1]);
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

fn first_attr(document: &Html, selector: &str, attr: &str) -> Option<String> {
    let Ok(selector) = Selector::parse(selector) else {
        tracing::warn!(selector, "invalid selector");
        return None;
    };
    document
        .select(&selector)
        .filter_map(|el| el.value().attr(attr))
        .map(str::trim)
        .find(|v| !v.is_empty())
        .map(str::to_string)
}

/// Decodes backslash escapes (`\/`, `\u0026`, ...). Input that is not a valid
/// JSON string body just has its backslashes dropped.
fn unescape_json_string(raw: &str) -> String {
    serde_json::from_str::<String>(&format!("\"{raw}\""))
        .unwrap_or_else(|_| raw.replace('\\', ""))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(html: &str) -> Html {
        Html::parse_document(html)
    }

    #[test]
    fn og_url_from_meta_property() {
        let d = doc(
            r#"<html><head><meta property="og:url" content="https://www.facebook.com/reel/5/"></head></html>"#,
        );
        assert_eq!(og_url(&d).as_deref(), Some("https://www.facebook.com/reel/5/"));
    }

    #[test]
    fn og_url_attribute_order_and_entities() {
        let d = doc(
            r#"<meta content="https://example.com/a?x=1&amp;y=2" property="og:url">"#,
        );
        assert_eq!(og_url(&d).as_deref(), Some("https://example.com/a?x=1&y=2"));
    }

    #[test]
    fn og_url_skips_empty_content() {
        let d = doc(r#"<meta property="og:url" content="  "><meta property="og:url" content="https://e.com/">"#);
        assert_eq!(og_url(&d).as_deref(), Some("https://e.com/"));
    }

    #[test]
    fn canonical_from_link() {
        let d = doc(r#"<head><link rel="canonical" href="https://www.facebook.com/watch/?v=1"></head>"#);
        assert_eq!(canonical_link(&d).as_deref(), Some("https://www.facebook.com/watch/?v=1"));
        assert!(og_url(&d).is_none());
    }

    #[test]
    fn canonical_rel_token_list() {
        let d = doc(r#"<link rel="alternate canonical" href="/p/1">"#);
        assert_eq!(canonical_link(&d).as_deref(), Some("/p/1"));
    }

    #[test]
    fn embedded_redirect_unescapes() {
        let body = r#"<script>{"foo":1,"redirect_url":"https:\/\/www.facebook.com\/reel\/42\/?a=1&b=2"}</script>"#;
        assert_eq!(
            embedded_redirect(body).as_deref(),
            Some("https://www.facebook.com/reel/42/?a=1&b=2")
        );
    }

    #[test]
    fn embedded_redirect_invalid_escape_drops_backslashes() {
        let body = r#""redirect_url":"https:\/\/e.com\/x\q""#;
        assert_eq!(embedded_redirect(body).as_deref(), Some("https://e.com/xq"));
    }

    #[test]
    fn embedded_redirect_unicode_escape() {
        let body = "\"redirect_url\":\"https:\\/\\/e.com\\/p?a=1\\u0026b=2\"";
        assert_eq!(embedded_redirect(body).as_deref(), Some("https://e.com/p?a=1&b=2"));
    }

    #[test]
    fn embedded_redirect_empty_is_none() {
        assert!(embedded_redirect(r#""redirect_url":"""#).is_none());
        assert!(embedded_redirect("<html></html>").is_none());
    }
}
