use crate::fetcher::types::{Charset, PageResponse};
use bytes::Bytes;
use encoding_rs::Encoding;
use regex::Regex;
use reqwest::StatusCode;
use std::sync::LazyLock;
use tracing::warn;
use url::Url;

static CHARSET_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)charset\s*=\s*["']?([^"'\s;]+)"#).unwrap());

static META_CHARSET_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)<meta\s+[^>]*?charset\s*=\s*["']?([^"'\s/>]+)"#).unwrap());

static META_HTTP_EQUIV_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta\s+[^>]*?http-equiv\s*=\s*["']?content-type["']?[^>]*?content\s*=\s*["']?[^"'>]*?charset\s*=\s*([^"'\s;/>]+)"#).unwrap()
});

pub fn process_response(
    url_final: Url,
    status: StatusCode,
    content_type: &str,
    body_bytes: Bytes,
) -> PageResponse {
    let charset = detect_charset(content_type, &body_bytes);
    let body_utf8 = decode_to_utf8(&body_bytes, &charset, &url_final);

    PageResponse {
        url_final,
        status,
        body_raw: body_bytes,
        body_utf8,
        charset,
    }
}

fn label_to_charset(regex: &Regex, haystack: &str) -> Option<Charset> {
    let label = regex.captures(haystack)?.get(1)?.as_str().to_lowercase();
    Encoding::for_label(label.as_bytes()).map(Charset::from_encoding)
}

fn detect_charset(content_type: &str, body_bytes: &[u8]) -> Charset {
    // 1. Check Content-Type header for charset
    if let Some(charset) = label_to_charset(&CHARSET_REGEX, content_type) {
        return charset;
    }

    // 2. Check for <meta charset> or <meta http-equiv> in first 4KB
    let search_bytes = &body_bytes[..body_bytes.len().min(4096)];
    let search_str = String::from_utf8_lossy(search_bytes);

    if let Some(charset) = label_to_charset(&META_CHARSET_REGEX, &search_str) {
        return charset;
    }
    if let Some(charset) = label_to_charset(&META_HTTP_EQUIV_REGEX, &search_str) {
        return charset;
    }

    // 3. Use chardet for heuristic detection
    let mut detector = chardetng::EncodingDetector::new();
    detector.feed(search_bytes, search_bytes.len() == body_bytes.len());
    Charset::from_encoding(detector.guess(None, true))
}

/// Malformed sequences become U+FFFD; a page with a few bad bytes is still
/// worth scanning.
fn decode_to_utf8(body_bytes: &[u8], charset: &Charset, url: &Url) -> String {
    let encoding = charset.encoding();
    let (decoded, _encoding, had_errors) = encoding.decode(body_bytes);

    if had_errors {
        warn!(
            url = %url,
            encoding = encoding.name(),
            "body contained malformed sequences, replaced during decode"
        );
    }

    decoded.into_owned()
}
