use std::collections::BTreeMap;

use crate::classifier::model::{
    ChineseIndicators, ClassificationResult, Confidence, DomainLanguage, Summary,
};
use crate::extractor::PageAnalysis;

pub const REASON_UNREACHABLE: &str = "page unreachable";
pub const REASON_MAIN_PAGE: &str = "main page contains Chinese content";
pub const REASON_NOTHING_FOUND: &str = "no Chinese content found on main or subpages";

/// The stage that ended a classification run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Host suffix decided without any fetch.
    DomainShortcut(DomainLanguage),
    /// The main page could not be fetched (or the URL never parsed).
    Unreachable,
    /// The main page itself carries a Chinese signal.
    MainPage(PageAnalysis),
    /// Main page was clean; `matches` holds subpages with a signal.
    Subpages {
        main: PageAnalysis,
        matches: BTreeMap<String, PageAnalysis>,
    },
}

impl Outcome {
    /// Only a shortcut carries a domain verdict; every later stage is
    /// reached because the host said nothing.
    pub fn domain_check(&self) -> Option<DomainLanguage> {
        match self {
            Self::DomainShortcut(language) => Some(*language),
            _ => None,
        }
    }

    pub fn into_result(self, url: impl Into<String>) -> ClassificationResult {
        let url = url.into();
        let domain_check = self.domain_check();

        match self {
            Self::DomainShortcut(language) => ClassificationResult {
                url,
                is_chinese: language == DomainLanguage::Chinese,
                confidence: Confidence::High,
                domain_check,
                main_page: None,
                subpages: BTreeMap::new(),
                summary: Summary {
                    reason: format!("domain suffix {}", language.suffix()),
                    chinese_indicators: None,
                },
            },
            // Low stays only here: nothing was learned about the site.
            Self::Unreachable => ClassificationResult {
                url,
                is_chinese: false,
                confidence: Confidence::Low,
                domain_check,
                main_page: None,
                subpages: BTreeMap::new(),
                summary: Summary {
                    reason: REASON_UNREACHABLE.to_string(),
                    chinese_indicators: None,
                },
            },
            Self::MainPage(main) => ClassificationResult {
                url,
                is_chinese: true,
                confidence: Confidence::High,
                domain_check,
                summary: Summary {
                    reason: REASON_MAIN_PAGE.to_string(),
                    chinese_indicators: Some(ChineseIndicators::from(&main)),
                },
                main_page: Some(main),
                subpages: BTreeMap::new(),
            },
            Self::Subpages { main, matches } => {
                let is_chinese = !matches.is_empty();
                let reason = if is_chinese {
                    let names = matches.keys().map(String::as_str).collect::<Vec<_>>();
                    format!("Chinese content found on subpages: {}", names.join(", "))
                } else {
                    REASON_NOTHING_FOUND.to_string()
                };

                ClassificationResult {
                    url,
                    is_chinese,
                    confidence: Confidence::Medium,
                    domain_check,
                    main_page: Some(main),
                    subpages: matches,
                    summary: Summary {
                        reason,
                        chinese_indicators: None,
                    },
                }
            }
        }
    }
}
