pub mod lexical;
pub mod markup;
pub mod model;
pub mod script;

#[cfg(test)]
mod tests;

pub use model::{CommentFindings, ExternalLinks, LinkCategory, PageAnalysis};
pub use script::is_chinese_char;

use scraper::Html;
use tracing::debug;
use url::Url;

use crate::reference::ReferenceData;

/// Analyzes one page of (possibly malformed) HTML fetched from `base_url`.
pub fn analyze(html: &str, base_url: &Url, reference: &ReferenceData) -> PageAnalysis {
    let document = Html::parse_document(html);

    // 1. Chinese signals in visible text
    let visible = lexical::scan(&markup::visible_text(&document), reference);

    // 2. Metadata and outbound links
    let meta_info = markup::meta_info(&document, reference);
    let external_links = markup::external_links(&document, base_url);

    // 3. Chinese text hidden in comments
    let comments = markup::comment_findings(&document);

    let analysis = PageAnalysis::new(visible, meta_info, external_links, comments);
    debug!(
        url = %base_url,
        chars = analysis.chinese_chars.len(),
        cities = analysis.chinese_cities.len(),
        surnames = analysis.chinese_surnames.len(),
        links = analysis.external_links.len(),
        has_chinese = analysis.has_chinese,
        "page analyzed"
    );
    analysis
}
