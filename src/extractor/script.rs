//! Chinese script detection for single code points.

use std::collections::BTreeSet;

/// Returns `true` when `c` belongs to the CJK Unified Ideographs block or
/// one of its extensions A and B.
///
/// Hiragana and Katakana are rejected first so Japanese text never counts
/// as Chinese, even where it sits next to kanji.
pub fn is_chinese_char(c: char) -> bool {
    match c as u32 {
        0x3040..=0x309F | 0x30A0..=0x30FF => false,
        0x4E00..=0x9FFF | 0x3400..=0x4DBF | 0x2_0000..=0x2_A6DF => true,
        _ => false,
    }
}

/// Distinct Chinese characters found in `text`.
pub fn chinese_chars(text: &str) -> BTreeSet<char> {
    text.chars().filter(|c| is_chinese_char(*c)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unified_ideographs_are_chinese() {
        for code in 0x4E00..=0x9FFF {
            let c = char::from_u32(code).unwrap();
            assert!(is_chinese_char(c), "U+{code:04X} should be Chinese");
        }
    }

    #[test]
    fn test_extension_ranges_are_chinese() {
        for code in (0x3400..=0x4DBF).chain(0x2_0000..=0x2_A6DF) {
            let c = char::from_u32(code).unwrap();
            assert!(is_chinese_char(c), "U+{code:04X} should be Chinese");
        }
    }

    #[test]
    fn test_kana_is_never_chinese() {
        for code in (0x3040..=0x309F).chain(0x30A0..=0x30FF) {
            let c = char::from_u32(code).unwrap();
            assert!(!is_chinese_char(c), "U+{code:04X} should not be Chinese");
        }
    }

    #[test]
    fn test_outside_ranges() {
        for c in ['a', 'Z', '1', ' ', 'é', '한', '\u{2A6E0}', '\u{4DC0}'] {
            assert!(!is_chinese_char(c));
        }
    }

    #[test]
    fn test_mixed_text_keeps_only_hanzi() {
        let found = chinese_chars("Hello 世界 123 こんにちは カタカナ");
        assert_eq!(found, BTreeSet::from(['世', '界']));
    }

    #[test]
    fn test_duplicates_collapse() {
        let found = chinese_chars("中中中文文");
        assert_eq!(found.len(), 2);
    }
}
