use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::extractor::lexical::LexicalFindings;

/// Everything the markup analysis learned about one page.
///
/// Sets and maps are ordered so that the same page always serializes to the
/// same bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageAnalysis {
    pub chinese_chars: BTreeSet<char>,
    pub chinese_cities: BTreeSet<String>,
    pub chinese_surnames: BTreeSet<String>,
    pub meta_info: BTreeMap<String, String>,
    pub external_links: ExternalLinks,
    pub comments_chinese: CommentFindings,
    /// Derived from visible text only; comment findings never set it.
    pub has_chinese: bool,
}

impl PageAnalysis {
    pub fn new(
        visible: LexicalFindings,
        meta_info: BTreeMap<String, String>,
        external_links: ExternalLinks,
        comments_chinese: CommentFindings,
    ) -> Self {
        let has_chinese = visible.has_signal();
        Self {
            chinese_chars: visible.chars,
            chinese_cities: visible.cities,
            chinese_surnames: visible.surnames,
            meta_info,
            external_links,
            comments_chinese,
            has_chinese,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkCategory {
    ProfessionalNetwork,
    CodeHosting,
    SocialNetwork,
    Other,
}

impl LinkCategory {
    /// Buckets a lowercase host. Links back to `base_host` yield `None`;
    /// the platform checks win even on a platform's own pages.
    pub fn for_host(host: &str, base_host: Option<&str>) -> Option<Self> {
        if host.contains("linkedin.com") {
            Some(Self::ProfessionalNetwork)
        } else if host.contains("github.com") {
            Some(Self::CodeHosting)
        } else if host.contains("x.com") || host.contains("twitter.com") {
            Some(Self::SocialNetwork)
        } else if !host.is_empty() && Some(host) != base_host {
            Some(Self::Other)
        } else {
            None
        }
    }
}

/// Outbound links in document order, grouped by platform.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalLinks {
    pub professional_network: Vec<String>,
    pub code_hosting: Vec<String>,
    pub social_network: Vec<String>,
    pub other: Vec<String>,
}

impl ExternalLinks {
    pub fn push(&mut self, category: LinkCategory, url: String) {
        match category {
            LinkCategory::ProfessionalNetwork => self.professional_network.push(url),
            LinkCategory::CodeHosting => self.code_hosting.push(url),
            LinkCategory::SocialNetwork => self.social_network.push(url),
            LinkCategory::Other => self.other.push(url),
        }
    }

    pub fn len(&self) -> usize {
        self.professional_network.len()
            + self.code_hosting.len()
            + self.social_network.len()
            + self.other.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Chinese characters found inside comments, by where the comment lived.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentFindings {
    pub markup: BTreeSet<char>,
    pub script: BTreeSet<char>,
    pub style: BTreeSet<char>,
}

impl CommentFindings {
    pub fn is_empty(&self) -> bool {
        self.markup.is_empty() && self.script.is_empty() && self.style.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_hosts() {
        let base = Some("example.com");
        assert_eq!(
            LinkCategory::for_host("www.linkedin.com", base),
            Some(LinkCategory::ProfessionalNetwork)
        );
        assert_eq!(
            LinkCategory::for_host("github.com", base),
            Some(LinkCategory::CodeHosting)
        );
        assert_eq!(
            LinkCategory::for_host("twitter.com", base),
            Some(LinkCategory::SocialNetwork)
        );
        assert_eq!(
            LinkCategory::for_host("x.com", base),
            Some(LinkCategory::SocialNetwork)
        );
        assert_eq!(
            LinkCategory::for_host("docs.rs", base),
            Some(LinkCategory::Other)
        );
    }

    #[test]
    fn test_same_host_is_dropped() {
        assert_eq!(LinkCategory::for_host("example.com", Some("example.com")), None);
        assert_eq!(LinkCategory::for_host("", Some("example.com")), None);
    }

    #[test]
    fn test_platform_wins_over_same_host() {
        assert_eq!(
            LinkCategory::for_host("github.com", Some("github.com")),
            Some(LinkCategory::CodeHosting)
        );
    }

    #[test]
    fn test_serialized_field_names() {
        let analysis = PageAnalysis::default();
        let value = serde_json::to_value(&analysis).unwrap();
        assert!(value["external_links"]["code_hosting"].is_array());
        assert!(value["comments_chinese"]["script"].is_array());
        assert_eq!(value["has_chinese"], false);
    }
}
