//! Share message and social share links for a calculator page.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use rust_decimal_macros::dec;
use thiserror::Error;
use url::Url;

use crate::format_percentage;

pub const BRAND_NAME: &str = "Somewhere.com";
pub const BRAND_TAGLINE: &str = "Global Hiring Calculator";

pub const CTA_HEADLINE: &str = "🚀 Ready to Turn These Savings Into Reality?";
pub const CTA_BODY: &str = "Join 500+ SaaS companies that have cut hiring costs by 60-80% while scaling their teams globally";
pub const CTA_FOOTNOTE: &str = "See who we can place for you this week →";
pub const FOOTER_NOTE: &str = "© 2024 Somewhere.com. Empowering global hiring.";

const TWITTER_INTENT_URL: &str = "https://twitter.com/intent/tweet";
const LINKEDIN_SHARE_URL: &str = "https://www.linkedin.com/sharing/share-offsite/";
const TWITTER_TEXT: &str = "🚀 Just discovered I could save 60-80% on hiring costs with global talent! Check out this calculator from @SomewhereTeam";

/// Bytes left unescaped by JavaScript's `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShareError {
    #[error("invalid page URL '{url}': {reason}")]
    InvalidPageUrl { url: String, reason: String },

    #[error("unsupported URL scheme '{0}', expected http or https")]
    UnsupportedScheme(String),

    #[error("cannot build share link '{url}': {reason}")]
    InvalidShareLink { url: String, reason: String },
}

/// Share text and links for the page the calculator is published on.
/// Links are built once, when the page URL is validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareLinks {
    page_url: Url,
    twitter_url: Url,
    linkedin_url: Url,
}

impl ShareLinks {
    /// # Example
    ///
    /// ```
    /// use salary_core::share::ShareLinks;
    ///
    /// let links = ShareLinks::new("https://somewhere.com/calculator").unwrap();
    /// assert_eq!(
    ///     links.linkedin_url().as_str(),
    ///     "https://www.linkedin.com/sharing/share-offsite/?url=https%3A%2F%2Fsomewhere.com%2Fcalculator"
    /// );
    /// assert!(ShareLinks::new("ftp://somewhere.com").is_err());
    /// ```
    pub fn new(page_url: &str) -> Result<Self, ShareError> {
        let page_url = Url::parse(page_url).map_err(|e| ShareError::InvalidPageUrl {
            url: page_url.to_string(),
            reason: e.to_string(),
        })?;
        if !matches!(page_url.scheme(), "http" | "https") {
            return Err(ShareError::UnsupportedScheme(page_url.scheme().to_string()));
        }

        let twitter_url = build_url(
            TWITTER_INTENT_URL,
            &[("text", TWITTER_TEXT), ("url", page_url.as_str())],
        )?;
        let linkedin_url = build_url(LINKEDIN_SHARE_URL, &[("url", page_url.as_str())])?;

        Ok(Self {
            page_url,
            twitter_url,
            linkedin_url,
        })
    }

    pub fn page_url(&self) -> &Url {
        &self.page_url
    }

    /// Text placed on the clipboard by "Copy Link".
    pub fn share_text(&self) -> String {
        format!(
            "Check out this salary calculator from {BRAND_NAME}! I could save {} on hiring costs: {}",
            format_percentage(dec!(0.6)),
            self.page_url
        )
    }

    pub fn twitter_url(&self) -> &Url {
        &self.twitter_url
    }

    pub fn linkedin_url(&self) -> &Url {
        &self.linkedin_url
    }
}

/// Appends `params` to `base`, escaping values the way `encodeURIComponent` does.
fn build_url(
    base: &str,
    params: &[(&str, &str)],
) -> Result<Url, ShareError> {
    let query = params
        .iter()
        .map(|(key, value)| format!("{key}={}", utf8_percent_encode(value, URI_COMPONENT)))
        .collect::<Vec<_>>()
        .join("&");
    let url = format!("{base}?{query}");
    Url::parse(&url).map_err(|e| ShareError::InvalidShareLink {
        url,
        reason: e.to_string(),
    })
}
