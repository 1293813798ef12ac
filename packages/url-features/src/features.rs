//! Lexical URL features.
//!
//! Every feature is a count or a 0/1 flag computed directly from the raw URL
//! string (plus its domain, when one is recognized). The set of features is
//! closed: the classifier was trained on exactly these names.

use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::domain::DomainExtractor;

/// One named feature of the trained model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Feature {
    UrlLen,
    DomainLen,
    Https,
    Letters,
    Digits,
    At,
    Hash,
    Dollar,
    Percent,
    Plus,
    Dash,
    Star,
    Equals,
    Dot,
    Question,
    Bang,
    DoubleSlash,
    Comma,
    UrlShortened,
    ContainsIpAddress,
}

impl Feature {
    pub const COUNT: usize = 20;

    /// All features in the order the extractor produces them.
    pub const ALL: [Feature; Feature::COUNT] = [
        Feature::UrlLen,
        Feature::DomainLen,
        Feature::Https,
        Feature::Letters,
        Feature::Digits,
        Feature::At,
        Feature::Hash,
        Feature::Dollar,
        Feature::Percent,
        Feature::Plus,
        Feature::Dash,
        Feature::Star,
        Feature::Equals,
        Feature::Dot,
        Feature::Question,
        Feature::Bang,
        Feature::DoubleSlash,
        Feature::Comma,
        Feature::UrlShortened,
        Feature::ContainsIpAddress,
    ];

    /// Name used in the trained feature-order artifact.
    pub fn name(self) -> &'static str {
        match self {
            Feature::UrlLen => "url_len",
            Feature::DomainLen => "domain_len",
            Feature::Https => "https",
            Feature::Letters => "letters",
            Feature::Digits => "digits",
            Feature::At => "@",
            Feature::Hash => "#",
            Feature::Dollar => "$",
            Feature::Percent => "%",
            Feature::Plus => "+",
            Feature::Dash => "-",
            Feature::Star => "*",
            Feature::Equals => "=",
            Feature::Dot => ".",
            Feature::Question => "?",
            Feature::Bang => "!",
            Feature::DoubleSlash => "//",
            Feature::Comma => "comma",
            Feature::UrlShortened => "url_shortened",
            Feature::ContainsIpAddress => "contains_ip_address",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|f| f.name() == name)
    }

    /// Literal counted by this feature, for the special-character counters.
    pub fn literal(self) -> Option<&'static str> {
        match self {
            Feature::At => Some("@"),
            Feature::Hash => Some("#"),
            Feature::Dollar => Some("$"),
            Feature::Percent => Some("%"),
            Feature::Plus => Some("+"),
            Feature::Dash => Some("-"),
            Feature::Star => Some("*"),
            Feature::Equals => Some("="),
            Feature::Dot => Some("."),
            Feature::Question => Some("?"),
            Feature::Bang => Some("!"),
            Feature::DoubleSlash => Some("//"),
            Feature::Comma => Some(","),
            _ => None,
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Known URL-shortener hostnames. Matched exactly against the domain.
pub const URL_SHORTENERS: &[&str] = &[
    "bit.ly", "goo.gl", "shorte.st", "go2l.ink", "x.co", "ow.ly", "t.co", "tinyurl", "tr.im",
    "is.gd", "cli.gs", "yfrog.com", "migre.me", "ff.im", "tiny.cc", "url4.eu", "twit.ac",
    "su.pr", "twurl.nl", "snipurl.com", "short.to", "BudURL.com", "ping.fm", "post.ly",
    "Just.as", "bkite.com", "snipr.com", "fic.kr", "loopt.us", "doiop.com", "short.ie", "kl.am",
    "wp.me", "rubyurl.com", "om.ly", "to.ly", "bit.do", "lnkd.in", "db.tt", "qr.ae", "adf.ly",
    "bitly.com", "cur.lv", "tinyurl.com", "ity.im", "q.gs", "po.st", "bc.vc", "twitthis.com",
    "u.to", "j.mp", "buzurl.com", "cutt.us", "u.bb", "yourls.org", "prettylinkpro.com",
    "scrnch.me", "filoops.info", "vzturl.com", "qr.net", "1url.com", "tweez.me", "v.gd",
    "link.zip.net", "xurl.es", "x.gd",
];

lazy_static! {
    // Dotted quad followed by a path separator, decimal or hex octets
    static ref IP_LITERAL_REGEX: Regex = Regex::new(
        r"(?x)
        (?:(?:[01]?\d\d?|2[0-4]\d|25[0-5])\.){3}(?:[01]?\d\d?|2[0-4]\d|25[0-5])/
        |
        (?:0x[0-9a-fA-F]{1,2}\.){3}0x[0-9a-fA-F]{1,2}/
        "
    ).unwrap();
}

/// Feature values for one URL, indexed by [`Feature`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Features {
    values: [usize; Feature::COUNT],
}

impl Features {
    pub fn get(&self, feature: Feature) -> usize {
        self.values[feature.index()]
    }

    fn set(&mut self, feature: Feature, value: usize) {
        self.values[feature.index()] = value;
    }

    /// `(feature, value)` pairs in extractor order.
    pub fn iter(&self) -> impl Iterator<Item = (Feature, usize)> + '_ {
        Feature::ALL.iter().map(move |&f| (f, self.get(f)))
    }
}

impl Serialize for Features {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Feature::COUNT))?;
        for (feature, value) in self.iter() {
            map.serialize_entry(feature.name(), &value)?;
        }
        map.end()
    }
}

/// Maps raw URL strings to [`Features`].
#[derive(Default)]
pub struct FeatureExtractor {
    domains: DomainExtractor,
}

impl FeatureExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compute every feature for `url`. Never fails: inputs without a
    /// recognizable domain degrade to zeroed domain features.
    pub fn extract(&self, url: &str) -> Features {
        let domain = self.domains.extract(url);

        let mut features = Features {
            values: [0; Feature::COUNT],
        };
        features.set(Feature::UrlLen, url_len(url));
        features.set(Feature::DomainLen, domain.as_deref().map_or(0, url_len));
        features.set(Feature::Https, is_https(url) as usize);
        features.set(Feature::Letters, count_letters(url));
        features.set(Feature::Digits, count_digits(url));
        for feature in Feature::ALL {
            if let Some(literal) = feature.literal() {
                features.set(feature, url.matches(literal).count());
            }
        }
        features.set(Feature::UrlShortened, is_shortened(domain.as_deref()) as usize);
        features.set(Feature::ContainsIpAddress, contains_ip_address(url) as usize);

        tracing::debug!(url = %url, domain = ?domain, "extracted URL features");
        features
    }
}

/// Length in characters, not bytes.
pub fn url_len(s: &str) -> usize {
    s.chars().count()
}

/// Scheme of a URL: the text before the first `:`, if it is a syntactically
/// valid scheme (an ASCII letter followed by letters, digits, `+`, `-`, `.`).
pub fn scheme_of(url: &str) -> Option<&str> {
    let (scheme, _) = url.split_once(':')?;
    let mut chars = scheme.chars();
    let first = chars.next()?;
    if !first.is_ascii_alphabetic() {
        return None;
    }
    if chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.')) {
        Some(scheme)
    } else {
        None
    }
}

/// Scheme is exactly `https` (case-sensitive).
pub fn is_https(url: &str) -> bool {
    scheme_of(url) == Some("https")
}

pub fn count_letters(url: &str) -> usize {
    url.chars().filter(|c| c.is_alphabetic()).count()
}

/// Han characters with a numeric value. `char::is_numeric` only covers the
/// Nd, Nl and No categories, which leaves these out.
const HAN_NUMERALS: &[char] = &[
    '零', '一', '二', '三', '四', '五', '六', '七', '八', '九', '十', '百', '千', '万', '萬',
    '億', '兆',
];

/// Numeric characters, including Han numerals.
pub fn count_digits(url: &str) -> usize {
    url.chars()
        .filter(|c| c.is_numeric() || HAN_NUMERALS.contains(c))
        .count()
}

pub fn is_shortened(domain: Option<&str>) -> bool {
    domain.is_some_and(|d| URL_SHORTENERS.contains(&d))
}

/// Dotted-quad IPv4 literal immediately followed by `/`.
pub fn contains_ip_address(url: &str) -> bool {
    IP_LITERAL_REGEX.is_match(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_names_round_trip() {
        for feature in Feature::ALL {
            assert_eq!(Feature::from_name(feature.name()), Some(feature));
        }
        assert_eq!(Feature::from_name("nope"), None);
    }

    #[test]
    fn test_all_is_in_index_order() {
        for (i, feature) in Feature::ALL.iter().enumerate() {
            assert_eq!(feature.index(), i);
        }
    }

    #[test]
    fn test_scheme_of() {
        assert_eq!(scheme_of("https://a.com"), Some("https"));
        assert_eq!(scheme_of("svn+ssh://a"), Some("svn+ssh"));
        assert_eq!(scheme_of("a.com:8080/x"), Some("a.com"));
        assert_eq!(scheme_of("1http://a"), None);
        assert_eq!(scheme_of("://a"), None);
        assert_eq!(scheme_of("no colon"), None);
    }

    #[test]
    fn test_is_https() {
        assert!(is_https("https://example.com"));
        assert!(is_https("https:example"));
        assert!(!is_https("http://example.com"));
        assert!(!is_https("HTTPS://example.com"));
        assert!(!is_https("example.com/https://"));
    }

    #[test]
    fn test_counts() {
        let url = "http://ex-am.ple.com/a?b=1&c=22#!";
        assert_eq!(count_letters(url), 17);
        assert_eq!(count_digits(url), 3);
        assert_eq!(url.matches("//").count(), 1);
    }

    #[test]
    fn test_count_digits_includes_han_numerals() {
        assert_eq!(count_digits("http://五.com/"), 1);
        assert_eq!(count_digits("一二三 ½ ٣"), 5);
        assert_eq!(count_digits("http://example.com/"), 0);
    }

    #[test]
    fn test_double_slash_counts_non_overlapping() {
        let features = FeatureExtractor::new().extract("http:///x");
        assert_eq!(features.get(Feature::DoubleSlash), 1);
    }

    #[test]
    fn test_is_shortened() {
        assert!(is_shortened(Some("bit.ly")));
        assert!(is_shortened(Some("x.gd")));
        assert!(!is_shortened(Some("www.bit.ly")));
        assert!(!is_shortened(Some("BIT.LY")));
        assert!(!is_shortened(None));
    }

    #[test]
    fn test_contains_ip_address() {
        assert!(contains_ip_address("http://192.168.1.1/login"));
        assert!(contains_ip_address("http://0x7f.0x0.0x0.0x1/admin"));
        assert!(!contains_ip_address("http://192.168.1.1"));
        assert!(!contains_ip_address("http://example.com/1.2.3"));
    }

    #[test]
    fn test_extract_shortener_url() {
        let features = FeatureExtractor::new().extract("http://bit.ly/abc123");
        assert_eq!(features.get(Feature::UrlLen), 20);
        assert_eq!(features.get(Feature::DomainLen), 6);
        assert_eq!(features.get(Feature::Https), 0);
        assert_eq!(features.get(Feature::UrlShortened), 1);
        assert_eq!(features.get(Feature::ContainsIpAddress), 0);
        assert_eq!(features.get(Feature::Dot), 1);
        assert_eq!(features.get(Feature::DoubleSlash), 1);
        assert_eq!(features.get(Feature::Digits), 3);
    }

    #[test]
    fn test_extract_bare_word() {
        let features = FeatureExtractor::new().extract("hello");
        assert_eq!(features.get(Feature::UrlLen), 5);
        assert_eq!(features.get(Feature::DomainLen), 0);
        assert_eq!(features.get(Feature::UrlShortened), 0);
        assert_eq!(features.get(Feature::Letters), 5);
    }

    #[test]
    fn test_serialize_as_named_map() {
        let features = FeatureExtractor::new().extract("https://example.com");
        let json = serde_json::to_value(&features).unwrap();
        assert_eq!(json["https"], 1);
        assert_eq!(json["url_len"], 19);
        assert_eq!(json["comma"], 0);
        assert_eq!(json.as_object().unwrap().len(), Feature::COUNT);
    }
}
