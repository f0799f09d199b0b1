use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use url::Url;

use crate::extractor::PageAnalysis;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        };
        f.write_str(label)
    }
}

/// What the host name alone says about the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DomainLanguage {
    Chinese,
    NonChinese,
}

impl DomainLanguage {
    /// `.cn` anywhere in the host means Chinese, `.jp` means not. Plain
    /// substring checks, so `.com.cn` and `.cnn.com` both count.
    pub fn from_url(url: &Url) -> Option<Self> {
        let host = url.host_str()?.to_lowercase();
        if host.contains(".cn") {
            Some(Self::Chinese)
        } else if host.contains(".jp") {
            Some(Self::NonChinese)
        } else {
            None
        }
    }

    pub fn suffix(self) -> &'static str {
        match self {
            Self::Chinese => ".cn",
            Self::NonChinese => ".jp",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChineseIndicators {
    pub chars_count: usize,
    pub cities_count: usize,
    pub surnames_count: usize,
}

impl From<&PageAnalysis> for ChineseIndicators {
    fn from(analysis: &PageAnalysis) -> Self {
        Self {
            chars_count: analysis.chinese_chars.len(),
            cities_count: analysis.chinese_cities.len(),
            surnames_count: analysis.chinese_surnames.len(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub reason: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chinese_indicators: Option<ChineseIndicators>,
}

/// Verdict for one site plus the evidence behind it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub url: String,
    pub is_chinese: bool,
    pub confidence: Confidence,
    pub domain_check: Option<DomainLanguage>,
    pub main_page: Option<PageAnalysis>,
    /// Only subpages that showed a Chinese signal, keyed by path segment.
    pub subpages: BTreeMap<String, PageAnalysis>,
    pub summary: Summary,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn domain(url: &str) -> Option<DomainLanguage> {
        DomainLanguage::from_url(&Url::parse(url).unwrap())
    }

    #[test]
    fn test_domain_suffixes() {
        assert_eq!(domain("https://example.cn"), Some(DomainLanguage::Chinese));
        assert_eq!(domain("https://shop.example.com.cn/x"), Some(DomainLanguage::Chinese));
        assert_eq!(domain("https://example.jp"), Some(DomainLanguage::NonChinese));
        assert_eq!(domain("https://example.com"), None);
        assert_eq!(domain("http://127.0.0.1:8080/"), None);
    }

    #[test]
    fn test_domain_check_is_substring_based() {
        assert_eq!(domain("https://edition.cnn.com"), Some(DomainLanguage::Chinese));
        assert_eq!(domain("https://jpmorgan.com"), None);
    }

    #[test]
    fn test_serialized_labels() {
        assert_eq!(serde_json::to_value(Confidence::Medium).unwrap(), "medium");
        assert_eq!(
            serde_json::to_value(DomainLanguage::NonChinese).unwrap(),
            "non-chinese"
        );
        assert_eq!(Confidence::High.to_string(), "high");
    }
}
