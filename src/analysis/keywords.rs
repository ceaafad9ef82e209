// src/analysis/keywords.rs

use crate::domain::Category;
use regex::{Regex, RegexBuilder};
use std::sync::OnceLock;

/// One entry of the detector table: a case-insensitive pattern that, when
/// present anywhere in a text, contributes its canonical keyword.
#[derive(Debug, Clone, Copy)]
pub struct KeywordDetector {
    pub pattern: &'static str,
    pub keyword: &'static str,
    pub category: Category,
}

const fn detector(pattern: &'static str, keyword: &'static str, category: Category) -> KeywordDetector {
    KeywordDetector {
        pattern,
        keyword,
        category,
    }
}

use Category::{PropertyCharacteristics as Property, SellerMotivation as Seller, TransactionComplexity as Transaction};

pub const KEYWORD_DETECTORS: &[KeywordDetector] = &[
    detector(r"motivated\s+seller", "motivated seller", Seller),
    detector(r"must\s+sell", "must sell", Seller),
    detector(r"price\s+reduced", "price reduced", Seller),
    detector(r"urgent\s+sale", "urgent sale", Seller),
    detector(r"relocat(?:e|ed|es|ing|ion)", "relocating", Seller),
    detector(r"distressed", "distressed", Seller),
    detector(r"quick\s+sale", "quick sale", Seller),
    detector(r"below\s+market\s+value", "below market value", Seller),
    detector(r"deferred\s+maintenance", "deferred maintenance", Transaction),
    detector(r"below\s+market", "below market", Transaction),
    detector(r"complex\s+deal", "complex deal", Transaction),
    detector(r"legal\s+issues", "legal issues", Transaction),
    detector(r"title\s+issues", "title issues", Transaction),
    detector(r"foreclosure", "foreclosure", Transaction),
    detector(r"bankruptcy", "bankruptcy", Transaction),
    detector(r"tenant\s+issues", "tenant issues", Transaction),
    detector(r"value[\s-]add", "value-add", Property),
    detector(r"below\s+market\s+rents", "below market rents", Property),
    detector(r"good\s+location", "good location", Property),
    detector(r"upside\s+potential", "upside potential", Property),
    detector(r"renovation", "renovation opportunity", Property),
    detector(r"development\s+potential", "development potential", Property),
    detector(r"prime\s+location", "prime location", Property),
    detector(r"high\s+demand\s+area", "high demand area", Property),
];

fn compiled() -> &'static [(Regex, KeywordDetector)] {
    static COMPILED: OnceLock<Vec<(Regex, KeywordDetector)>> = OnceLock::new();
    COMPILED.get_or_init(|| {
        KEYWORD_DETECTORS
            .iter()
            .map(|d| {
                let re = RegexBuilder::new(d.pattern)
                    .case_insensitive(true)
                    .build()
                    .expect("keyword detector patterns are static and valid");
                (re, *d)
            })
            .collect()
    })
}

/// Runs every detector over `text`, in table order. Each detector reports
/// at most once, whatever category it is tagged with.
pub fn detect_keywords(text: &str) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    compiled()
        .iter()
        .filter(|(re, _)| re.is_match(text))
        .map(|(_, d)| d.keyword.to_string())
        .collect()
}

/// Category tag of a canonical keyword, if the table knows it.
pub fn keyword_category(keyword: &str) -> Option<Category> {
    KEYWORD_DETECTORS
        .iter()
        .find(|d| d.keyword.eq_ignore_ascii_case(keyword.trim()))
        .map(|d| d.category)
}
