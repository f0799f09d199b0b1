use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{Html, Selector};
use std::collections::{BTreeMap, BTreeSet};
use url::Url;

use crate::extractor::model::{CommentFindings, ExternalLinks, LinkCategory};
use crate::extractor::script::chinese_chars;
use crate::reference::ReferenceData;

static META_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("meta").unwrap());
static ANCHOR_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("a[href]").unwrap());
static SCRIPT_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("script").unwrap());
static STYLE_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("style").unwrap());

// Pattern based, not a lexer: delimiters inside string literals match too.
static LINE_COMMENT_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"//.*").unwrap());
static BLOCK_COMMENT_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)/\*.*?\*/").unwrap());

/// Concatenated text nodes, skipping anything nested in `<script>` or `<style>`.
pub fn visible_text(document: &Html) -> String {
    let mut text = String::new();

    for node in document.tree.root().descendants() {
        let Some(chunk) = node.value().as_text() else {
            continue;
        };
        let hidden = node.ancestors().any(|ancestor| {
            ancestor
                .value()
                .as_element()
                .is_some_and(|element| matches!(element.name(), "script" | "style"))
        });
        if !hidden {
            text.push_str(chunk);
        }
    }

    text
}

/// `<meta>` name/property → content, for the configured useful names only.
pub fn meta_info(document: &Html, reference: &ReferenceData) -> BTreeMap<String, String> {
    let mut meta = BTreeMap::new();

    for element in document.select(&META_SELECTOR) {
        let attrs = element.value();
        let name = attrs
            .attr("name")
            .filter(|name| !name.is_empty())
            .or_else(|| attrs.attr("property"));

        let (Some(name), Some(content)) = (name, attrs.attr("content")) else {
            continue;
        };
        if name.is_empty() || content.is_empty() {
            continue;
        }

        let key = name.to_lowercase();
        if reference.is_useful_meta(&key) {
            meta.insert(key, content.to_string());
        }
    }

    meta
}

pub fn external_links(document: &Html, base_url: &Url) -> ExternalLinks {
    let base_host = base_url.host_str().map(str::to_lowercase);
    let mut links = ExternalLinks::default();

    for element in document.select(&ANCHOR_SELECTOR) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };
        let Ok(resolved) = base_url.join(href.trim()) else {
            continue;
        };
        let Some(host) = resolved.host_str().map(str::to_lowercase) else {
            continue;
        };

        if let Some(category) = LinkCategory::for_host(&host, base_host.as_deref()) {
            links.push(category, resolved.to_string());
        }
    }

    links
}

/// Chinese characters inside HTML comments and inline script/style comments.
pub fn comment_findings(document: &Html) -> CommentFindings {
    let mut findings = CommentFindings::default();

    for node in document.tree.root().descendants() {
        if let Some(comment) = node.value().as_comment() {
            findings.markup.extend(chinese_chars(comment));
        }
    }

    for element in document.select(&SCRIPT_SELECTOR) {
        let source = element.text().collect::<String>();
        findings.script.extend(comment_chars(&source, &LINE_COMMENT_REGEX));
        findings.script.extend(comment_chars(&source, &BLOCK_COMMENT_REGEX));
    }

    for element in document.select(&STYLE_SELECTOR) {
        let source = element.text().collect::<String>();
        findings.style.extend(comment_chars(&source, &BLOCK_COMMENT_REGEX));
    }

    findings
}

fn comment_chars(source: &str, pattern: &Regex) -> BTreeSet<char> {
    pattern
        .find_iter(source)
        .flat_map(|m| chinese_chars(m.as_str()))
        .collect()
}
