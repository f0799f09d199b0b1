use std::collections::BTreeSet;

use crate::extractor::script::chinese_chars;
use crate::reference::ReferenceData;

/// Chinese signals found in a block of visible text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LexicalFindings {
    pub chars: BTreeSet<char>,
    pub cities: BTreeSet<String>,
    pub surnames: BTreeSet<String>,
}

impl LexicalFindings {
    pub fn has_signal(&self) -> bool {
        !self.chars.is_empty() || !self.cities.is_empty() || !self.surnames.is_empty()
    }
}

/// Scans `text` for Chinese characters and for any reference city or
/// surname contained in it. Matching is plain substring containment, so a
/// surname inside a longer word still counts.
pub fn scan(text: &str, reference: &ReferenceData) -> LexicalFindings {
    LexicalFindings {
        chars: chinese_chars(text),
        cities: matching(text, &reference.cities),
        surnames: matching(text, &reference.surnames),
    }
}

fn matching(text: &str, candidates: &BTreeSet<String>) -> BTreeSet<String> {
    candidates
        .iter()
        .filter(|candidate| !candidate.is_empty() && text.contains(candidate.as_str()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latin_text_has_no_signal() {
        let findings = scan("Welcome to our company homepage", &ReferenceData::default());
        assert!(!findings.has_signal());
        assert_eq!(findings, LexicalFindings::default());
    }

    #[test]
    fn test_city_and_surname_inside_text() {
        let findings = scan("总部位于深圳，创始人王先生", &ReferenceData::default());
        assert!(findings.cities.contains("深圳"));
        assert!(findings.surnames.contains("王"));
        assert!(findings.chars.contains(&'总'));
        assert!(findings.has_signal());
    }

    #[test]
    fn test_substring_match_inside_longer_word() {
        let findings = scan("乌鲁木齐市", &ReferenceData::default());
        assert_eq!(findings.cities, BTreeSet::from(["乌鲁木齐".to_string()]));
    }

    #[test]
    fn test_alternate_reference_set() {
        let reference = ReferenceData {
            cities: BTreeSet::from(["Beijing".to_string()]),
            surnames: BTreeSet::new(),
            ..ReferenceData::default()
        };
        let findings = scan("Offices in Beijing and Berlin", &reference);
        assert!(findings.chars.is_empty());
        assert_eq!(findings.cities.len(), 1);
        assert!(findings.has_signal());
    }

    #[test]
    fn test_kana_only_text() {
        let findings = scan("こんにちは カタカナ", &ReferenceData::default());
        assert!(!findings.has_signal());
    }
}
