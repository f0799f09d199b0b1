use std::collections::BTreeSet;
use std::fs;
use url::Url;

use crate::extractor::analyze;
use crate::reference::ReferenceData;

fn analyze_fixture(name: &str, url: &str) -> crate::extractor::PageAnalysis {
    let html = fs::read_to_string(format!("src/extractor/tests/fixtures/{name}"))
        .expect("Failed to read test fixture");
    analyze(&html, &Url::parse(url).unwrap(), &ReferenceData::default())
}

#[test]
fn test_analyze_chinese_homepage() {
    let analysis = analyze_fixture("chinese_home.html", "https://acme.example/");

    assert!(analysis.has_chinese);
    assert!(analysis.chinese_chars.contains(&'星'));
    assert_eq!(
        analysis.chinese_cities,
        BTreeSet::from(["上海".to_string(), "杭州".to_string(), "深圳".to_string()])
    );
    assert!(analysis.chinese_surnames.contains("陈"));
    assert!(analysis.chinese_surnames.contains("刘"));

    assert_eq!(
        analysis.meta_info.get("og:title").map(String::as_str),
        Some("星河科技")
    );
    assert!(analysis.meta_info.contains_key("keywords"));
    assert!(!analysis.meta_info.contains_key("viewport"));

    assert_eq!(analysis.external_links.code_hosting, vec!["https://github.com/xinghe"]);
    assert_eq!(analysis.external_links.professional_network.len(), 1);
    assert!(analysis.external_links.other.is_empty());

    assert!(analysis.comments_chinese.markup.contains(&'导'));
    assert!(analysis.comments_chinese.style.contains(&'题'));
    assert!(analysis.comments_chinese.script.contains(&'统'));
}

#[test]
fn test_analyze_english_homepage_with_chinese_comments() {
    let analysis = analyze_fixture("english_home.html", "https://acme.example/");

    // Comments are reported but never raise the page signal
    assert!(!analysis.has_chinese);
    assert!(analysis.chinese_chars.is_empty());
    assert_eq!(analysis.comments_chinese.markup, BTreeSet::from(['后', '台', '模', '板']));
    assert_eq!(analysis.comments_chinese.script, BTreeSet::from(['埋', '点']));
    assert!(analysis.comments_chinese.style.is_empty());

    assert_eq!(
        analysis.external_links.social_network,
        vec!["https://twitter.com/acmewidgets"]
    );
    assert_eq!(
        analysis.external_links.other,
        vec!["https://partners.widgets.org/acme"]
    );
    assert_eq!(analysis.meta_info.len(), 2);
}

#[test]
fn test_analyze_kana_only_page() {
    let analysis = analyze_fixture("japanese_home.html", "https://sakura.example/");

    assert!(!analysis.has_chinese);
    assert!(analysis.chinese_chars.is_empty());
    assert_eq!(analysis.external_links.code_hosting.len(), 1);
}

#[test]
fn test_malformed_html() {
    let html = "<html><head><title>壊れ<body><p>Unclosed <div>更多内容<a href='https://github.com/x'";
    let analysis = analyze(
        html,
        &Url::parse("https://example.com/broken").unwrap(),
        &ReferenceData::default(),
    );

    // Should handle malformed HTML gracefully
    assert!(analysis.has_chinese);
    assert!(analysis.chinese_chars.contains(&'更'));
}

#[test]
fn test_empty_document() {
    let analysis = analyze(
        "",
        &Url::parse("https://example.com").unwrap(),
        &ReferenceData::default(),
    );
    assert!(!analysis.has_chinese);
    assert!(analysis.meta_info.is_empty());
    assert!(analysis.external_links.is_empty());
    assert!(analysis.comments_chinese.is_empty());
}

#[test]
fn test_analysis_is_deterministic() {
    let first = analyze_fixture("chinese_home.html", "https://acme.example/");
    let second = analyze_fixture("chinese_home.html", "https://acme.example/");
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[cfg(feature = "fuzz")]
mod fuzz {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_analyze_never_panics(
            html in ".*",
            url in "https://[a-z]+\\.com/[a-z/]*"
        ) {
            let url = Url::parse(&url).unwrap();
            // Should never panic regardless of input
            let _ = analyze(&html, &url, &ReferenceData::default());
        }

        #[test]
        fn test_comment_chars_are_chinese(body in ".*") {
            let html = format!("<!--{body}--><script>//{body}</script>");
            let analysis = analyze(&html, &Url::parse("https://example.com").unwrap(), &ReferenceData::default());
            prop_assert!(analysis.comments_chinese.markup.iter().all(|c| crate::extractor::is_chinese_char(*c)));
            prop_assert!(analysis.comments_chinese.script.iter().all(|c| crate::extractor::is_chinese_char(*c)));
        }
    }
}
