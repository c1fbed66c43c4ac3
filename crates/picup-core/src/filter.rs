//! Upload eligibility: domain blacklist and protocol rules.

use std::fmt;

/// Outcome of the eligibility check for one url.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Eligibility {
    /// Should be uploaded.
    Upload,
    /// Host matches a blacklisted domain.
    Blacklisted,
    /// Empty, localhost, or `file://` url.
    NotUploadable,
}

impl Eligibility {
    pub fn should_upload(self) -> bool {
        matches!(self, Eligibility::Upload)
    }
}

impl fmt::Display for Eligibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Eligibility::Upload => write!(f, "upload"),
            Eligibility::Blacklisted => write!(f, "blacklisted"),
            Eligibility::NotUploadable => write!(f, "not uploadable"),
        }
    }
}

/// Blacklist check first, then the uploadability check.
pub fn check(url: &str, blacklist: &[String]) -> Eligibility {
    if is_blacklisted(url, blacklist) {
        Eligibility::Blacklisted
    } else if !is_uploadable_image(url) {
        Eligibility::NotUploadable
    } else {
        Eligibility::Upload
    }
}

/// True if `url`'s host equals a blacklisted domain or is a subdomain of one.
///
/// Non-http urls are local paths and never blacklisted. A url that fails to
/// parse is treated the same way.
pub fn is_blacklisted(url: &str, blacklist: &[String]) -> bool {
    if blacklist.is_empty() || !url.starts_with("http") {
        return false;
    }

    let parsed = match url::Url::parse(url) {
        Ok(u) => u,
        Err(e) => {
            tracing::debug!(url, error = %e, "invalid URL, skipping blacklist check");
            return false;
        }
    };
    let Some(host) = parsed.host_str() else {
        return false;
    };

    blacklist
        .iter()
        .filter(|domain| !domain.is_empty())
        .any(|domain| host_matches(host, domain))
}

fn host_matches(host: &str, domain: &str) -> bool {
    host == domain
        || host
            .strip_suffix(domain)
            .is_some_and(|prefix| prefix.ends_with('.'))
}

/// True if `url` points at something that needs uploading.
///
/// Local paths are uploaded, as is any remote http(s) url except localhost.
/// `file://` urls are never uploaded; the check runs before the local-path
/// rule since a `file://` url has no http prefix.
pub fn is_uploadable_image(url: &str) -> bool {
    if url.is_empty() || url.starts_with("file://") {
        return false;
    }
    if !url.starts_with("http") {
        return true;
    }
    if url.starts_with("http://localhost") || url.starts_with("https://localhost") {
        return false;
    }
    true
}
