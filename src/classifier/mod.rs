//! Site-level verdicts.
//!
//! A run moves strictly forward through four stages and stops at the first
//! one that decides:
//!
//! 1. host suffix (`.cn` / `.jp`), no network access
//! 2. main page fetch; unreachable ends the run with low confidence
//! 3. main page analysis; any Chinese signal ends the run
//! 4. every configured subpage is fetched and analyzed, in order
//!
//! A subpage that fails to fetch is skipped and looks exactly like a subpage
//! without Chinese content.

pub mod model;
pub mod outcome;

pub use model::{ChineseIndicators, ClassificationResult, Confidence, DomainLanguage, Summary};
pub use outcome::Outcome;

use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};
use url::Url;

use crate::extractor::{self, PageAnalysis};
use crate::fetcher::PageSource;
use crate::reference::ReferenceData;

pub struct SiteClassifier<S> {
    source: S,
    reference: Arc<ReferenceData>,
}

impl<S: PageSource> SiteClassifier<S> {
    pub fn new(source: S, reference: impl Into<Arc<ReferenceData>>) -> Self {
        Self {
            source,
            reference: reference.into(),
        }
    }

    #[instrument(skip(self))]
    pub async fn classify(&self, url: &str) -> ClassificationResult {
        let outcome = match Url::parse(url) {
            Ok(parsed) => self.run(&parsed).await,
            Err(err) => {
                warn!(error = %err, "url could not be parsed");
                Outcome::Unreachable
            }
        };

        let result = outcome.into_result(url);
        info!(
            is_chinese = result.is_chinese,
            confidence = %result.confidence,
            reason = %result.summary.reason,
            "classification complete"
        );
        result
    }

    async fn run(&self, url: &Url) -> Outcome {
        if let Some(language) = DomainLanguage::from_url(url) {
            debug!(suffix = language.suffix(), "decided by domain suffix");
            return Outcome::DomainShortcut(language);
        }

        let Some(html) = self.source.retrieve(url).await else {
            return Outcome::Unreachable;
        };

        let main = extractor::analyze(&html, url, &self.reference);
        if main.has_chinese {
            return Outcome::MainPage(main);
        }

        debug!("main page has no Chinese signal, probing subpages");
        let matches = self.probe_subpages(url).await;
        Outcome::Subpages { main, matches }
    }

    /// Fetches every configured subpage, keeping the ones with a signal.
    async fn probe_subpages(&self, base: &Url) -> BTreeMap<String, PageAnalysis> {
        let mut matches = BTreeMap::new();

        for segment in &self.reference.subpages {
            let subpage_url = match base.join(segment) {
                Ok(url) => url,
                Err(err) => {
                    warn!(segment = %segment, error = %err, "invalid subpage segment");
                    continue;
                }
            };

            let Some(html) = self.source.retrieve(&subpage_url).await else {
                continue;
            };

            let analysis = extractor::analyze(&html, &subpage_url, &self.reference);
            if analysis.has_chinese {
                info!(segment = %segment, "Chinese content found on subpage");
                matches.insert(segment.clone(), analysis);
            }
        }

        matches
    }
}
