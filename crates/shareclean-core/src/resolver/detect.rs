//! Share-link shape detection.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use url::Url;

const FACEBOOK_HOSTS: &[&str] = &["www.facebook.com", "facebook.com", "m.facebook.com"];
const TIKTOK_SHORT_HOSTS: &[&str] = &["vt.tiktok.com", "vm.tiktok.com"];
const TIKTOK_HOSTS: &[&str] = &["www.tiktok.com", "tiktok.com"];

static FACEBOOK_SHARE_PATH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^/share/([rpv])/([a-zA-Z0-9]+)/?$")
        .expect("FACEBOOK_SHARE_PATH regex should compile")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Facebook,
    TikTok,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareKind {
    Reel,
    Post,
    Video,
    /// Dedicated short-link domain; the kind is only known after resolving.
    Short,
}

/// A URL recognized as a share link. Built during classification and consumed
/// by the resolver right away.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareLink {
    pub platform: Platform,
    pub kind: ShareKind,
    pub share_id: String,
}

impl Platform {
    /// True if `url` is on one of this platform's main (non-short) hosts.
    pub fn owns(self, url: &Url) -> bool {
        let hosts = match self {
            Platform::Facebook => FACEBOOK_HOSTS,
            Platform::TikTok => TIKTOK_HOSTS,
        };
        url.host_str().map(|h| hosts.contains(&h)).unwrap_or(false)
    }

    /// True once a resolved URL no longer looks like this platform's share link.
    pub fn has_left_share_shape(self, url: &Url) -> bool {
        match self {
            Platform::Facebook => !url.path().contains("/share/"),
            Platform::TikTok => self.owns(url),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Platform::Facebook => "facebook",
            Platform::TikTok => "tiktok",
        })
    }
}

impl fmt::Display for ShareKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ShareKind::Reel => "reel",
            ShareKind::Post => "post",
            ShareKind::Video => "video",
            ShareKind::Short => "short",
        })
    }
}

/// Classifies `url` against the known share-link shapes.
pub fn detect(url: &Url) -> Option<ShareLink> {
    let host = url.host_str()?;

    if FACEBOOK_HOSTS.contains(&host) {
        let caps = FACEBOOK_SHARE_PATH.captures(url.path())?;
        let kind = match &caps[1] {
            "r" => ShareKind::Reel,
            "p" => ShareKind::Post,
            _ => ShareKind::Video,
        };
        return Some(ShareLink {
            platform: Platform::Facebook,
            kind,
            share_id: caps[2].to_string(),
        });
    }

    if TIKTOK_SHORT_HOSTS.contains(&host) {
        let share_id = url
            .path_segments()
            .and_then(|mut segs| segs.find(|s| !s.is_empty()))
            .unwrap_or_default()
            .to_string();
        return Some(ShareLink {
            platform: Platform::TikTok,
            kind: ShareKind::Short,
            share_id,
        });
    }

    None
}
