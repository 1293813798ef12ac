//! Domain extraction against the Public Suffix List.
//!
//! A URL only has a domain when its host ends in a recognized public suffix
//! with a registrable label in front of it. Anything else (bare words, IP
//! literals, unparseable input) yields `None`.

use std::borrow::Cow;

use tldextract::{TldExtractor, TldOption};
use tracing::trace;
use url::{Host, Url};

/// Prefix a scheme when the URL has none we recognize.
///
/// Protocol-relative URLs (`//host/...`) keep their authority and only gain
/// `https:`; everything that does not start with `http://` or `https://` gets
/// `https://` in front, even when it carries some other scheme.
pub fn fix_protocol(url: &str) -> Cow<'_, str> {
    if url.starts_with("http://") || url.starts_with("https://") {
        Cow::Borrowed(url)
    } else if url.starts_with("//") {
        Cow::Owned(format!("https:{}", url))
    } else {
        Cow::Owned(format!("https://{}", url))
    }
}

/// Network location of a URL: the text between `//` and the first `/`, `?`
/// or `#`. Userinfo, port and the original letter case are preserved.
pub fn split_netloc(url: &str) -> Option<&str> {
    let start = url.find("//")? + 2;
    let rest = &url[start..];
    let end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    Some(&rest[..end])
}

/// Resolves the domain of a URL using a bundled Public Suffix List snapshot.
pub struct DomainExtractor {
    tld: TldExtractor,
}

impl DomainExtractor {
    /// Build an extractor from the bundled suffix list (ICANN and private
    /// sections). No network access is performed.
    pub fn new() -> Self {
        let tld = TldOption::default().private_domains(true).build();
        Self { tld }
    }

    /// Domain of `url`, or `None` if it has no recognized public suffix.
    pub fn extract(&self, url: &str) -> Option<String> {
        let fixed = fix_protocol(url);

        let parsed = match Url::parse(&fixed) {
            Ok(parsed) => parsed,
            Err(e) => {
                trace!(url = %url, error = %e, "URL did not parse, no domain");
                return None;
            }
        };

        // IP literals never carry a public suffix
        let host = match parsed.host() {
            Some(Host::Domain(host)) => host.to_string(),
            _ => return None,
        };

        // A trailing dot leaves an empty last label, which is never a suffix
        if host.ends_with('.') {
            trace!(host = %host, "host ends with an empty label, no domain");
            return None;
        }

        let result = match self.tld.extract(&format!("https://{}/", host)) {
            Ok(result) => result,
            Err(e) => {
                trace!(host = %host, error = ?e, "suffix lookup failed, no domain");
                return None;
            }
        };

        let registrable = result.domain.as_deref().is_some_and(|d| !d.is_empty());
        let suffix = result.suffix.as_deref().is_some_and(|s| !s.is_empty());
        if !registrable || !suffix {
            trace!(host = %host, "host has no recognized public suffix");
            return None;
        }

        split_netloc(&fixed)
            .filter(|netloc| !netloc.is_empty())
            .map(str::to_string)
    }
}

impl Default for DomainExtractor {
    fn default() -> Self {
        Self::new()
    }
}
