//! Built-in host table.

use super::Policy;
use crate::transform::PathTransform;

/// Generic tracking parameters removed from every deny-list URL.
pub static WILDCARD: Policy = Policy::deny(
    "*",
    &[
        // analytics / UTM
        "utm_source",
        "utm_medium",
        "utm_campaign",
        "utm_term",
        "utm_content",
        "_ga",
        "_gl",
        "ga_source",
        "ga_medium",
        "ga_campaign",
        "ga_term",
        "ga_content",
        // ad click IDs
        "fbclid",
        "_fbc",
        "_fbp",
        "gclid",
        "gclsrc",
        "_gcl_aw",
        "gad_source",
        "gad_campaignid",
        "gbraid",
        "wbraid",
        "dclid",
        "msclkid",
        "ttclid",
        "ScCid",
        "li_fat_id",
        // email marketing
        "mc_cid",
        "mc_eid",
        "emci",
        "emdi",
        "ceid",
        // social share markers
        "share",
        "share_id",
        "shared",
        "socialref",
        "hootPostID",
        "__s",
        // referral and recommender noise
        "ref",
        "referer",
        "referrer",
        "source",
        "sourceid",
        "rsid",
        "spm",
        "scm",
        "pvid",
        "pos",
        "abbucket",
        "algo_expid",
        "algo_pvid",
        "btsid",
        "ws_ab_test",
    ],
);

const NONE: &[&str] = &[];
const YOUTUBE: &[&str] = &["v", "t"];
const FACEBOOK: &[&str] = &["fbid"];
const TWITTER: &[&str] = &["s", "t", "src"];
const TIKTOK: &[&str] = &["is_from_webapp", "sender_device", "web_id"];
const LINKEDIN: &[&str] = &["trackingId"];
const PINTEREST: &[&str] = &["mt", "source_app_id"];
const REDDIT: &[&str] = &["share_id", "context"];
const AMAZON: &[&str] = &["keywords", "qid", "sr"];
const EBAY: &[&str] = &["hash", "item"];
const ALIEXPRESS: &[&str] = &["srcSns", "spreadType", "bizType", "social_params"];
const DOUYIN: &[&str] = &["modal_id"];

pub(super) static HOST_RULES: &[Policy] = &[
    Policy::keep("item.taobao.com", &["id"]),
    Policy::keep("detail.tmall.com", &["id"]),
    Policy::keep("www.instagram.com", NONE),
    Policy::keep("instagram.com", NONE),
    Policy::keep("www.youtube.com", YOUTUBE),
    Policy::keep("youtube.com", YOUTUBE),
    Policy::keep("youtu.be", &["t"]),
    Policy::keep("www.facebook.com", FACEBOOK).with_transform(PathTransform::Social),
    Policy::keep("facebook.com", FACEBOOK).with_transform(PathTransform::Social),
    Policy::keep("m.facebook.com", FACEBOOK).with_transform(PathTransform::Social),
    Policy::deny("twitter.com", TWITTER),
    Policy::deny("x.com", TWITTER),
    Policy::deny("www.tiktok.com", TIKTOK).with_transform(PathTransform::ShortVideo),
    Policy::deny("tiktok.com", TIKTOK).with_transform(PathTransform::ShortVideo),
    Policy::keep("www.linkedin.com", LINKEDIN),
    Policy::keep("linkedin.com", LINKEDIN),
    Policy::deny("www.pinterest.com", PINTEREST),
    Policy::deny("pinterest.com", PINTEREST),
    Policy::deny("www.reddit.com", REDDIT),
    Policy::deny("reddit.com", REDDIT),
    Policy::keep("www.amazon.com", AMAZON),
    Policy::keep("amazon.com", AMAZON),
    Policy::keep("www.ebay.com", EBAY),
    Policy::keep("ebay.com", EBAY),
    Policy::deny("www.aliexpress.com", ALIEXPRESS),
    Policy::deny("aliexpress.com", ALIEXPRESS),
    Policy::keep("www.bilibili.com", NONE),
    Policy::keep("bilibili.com", NONE),
    Policy::keep("www.threads.com", NONE),
    Policy::keep("threads.com", NONE),
    Policy::keep("www.threads.net", NONE),
    Policy::keep("threads.net", NONE),
    Policy::keep("sora.chatgpt.com", NONE),
    Policy::keep("www.douyin.com", DOUYIN),
    Policy::keep("douyin.com", DOUYIN),
    Policy::keep("www.tw.coupang.com", NONE),
    Policy::keep("tw.coupang.com", NONE),
    Policy::keep("shopee.tw", NONE).with_transform(PathTransform::Marketplace),
];

/// All host-specific rules, in table order (wildcard excluded).
pub fn builtin() -> &'static [Policy] {
    HOST_RULES
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn hosts_are_unique() {
        let mut seen = HashSet::new();
        for p in HOST_RULES {
            assert!(seen.insert(p.host), "duplicate host rule: {}", p.host);
        }
    }

    #[test]
    fn hosts_are_lowercase() {
        // Url::host_str() is lowercase, so a mixed-case entry could never match.
        for p in HOST_RULES {
            assert_eq!(p.host, p.host.to_ascii_lowercase());
        }
    }

    #[test]
    fn wildcard_is_not_in_host_table() {
        assert!(HOST_RULES.iter().all(|p| p.host != WILDCARD.host));
    }
}
