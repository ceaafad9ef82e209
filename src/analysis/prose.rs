// src/analysis/prose.rs

use crate::analysis::resolve::non_empty_str;
use crate::domain::Category;
use regex::{Regex, RegexBuilder};
use serde_json::Value;
use std::sync::OnceLock;

/// Sentence patterns per category, most specific phrase first. Group 1 is
/// the sentence that follows the phrase, up to and including its period.
const SENTENCE_PATTERNS: &[(Category, &str)] = &[
    (Category::SellerMotivation, r"seller\s+motivation[:.]?\s*([^.]+\.)"),
    (Category::SellerMotivation, r"motivation[:.]?\s*([^.]+\.)"),
    (Category::SellerMotivation, r"seller[:.]?\s*([^.]+\.)"),
    (Category::TransactionComplexity, r"transaction\s+complexity[:.]?\s*([^.]+\.)"),
    (Category::TransactionComplexity, r"complexity[:.]?\s*([^.]+\.)"),
    (Category::TransactionComplexity, r"transaction[:.]?\s*([^.]+\.)"),
    (Category::PropertyCharacteristics, r"property\s+characteristics[:.]?\s*([^.]+\.)"),
    (Category::PropertyCharacteristics, r"characteristics[:.]?\s*([^.]+\.)"),
    (Category::PropertyCharacteristics, r"property[:.]?\s*([^.]+\.)"),
];

fn compiled() -> &'static [(Category, Regex)] {
    static COMPILED: OnceLock<Vec<(Category, Regex)>> = OnceLock::new();
    COMPILED.get_or_init(|| {
        SENTENCE_PATTERNS
            .iter()
            .map(|(category, pattern)| {
                let re = RegexBuilder::new(pattern)
                    .case_insensitive(true)
                    .build()
                    .expect("sentence patterns are static and valid");
                (*category, re)
            })
            .collect()
    })
}

/// The free-text analysis, when the response is prose rather than fields:
/// either the whole value is a string or it carries a string `analysis`.
pub fn prose_text(raw: &Value) -> Option<String> {
    match raw {
        Value::String(_) => non_empty_str(raw),
        Value::Object(map) => map.get("analysis").and_then(non_empty_str),
        _ => None,
    }
}

/// First sentence the category's patterns can pull out of `prose`.
pub fn extract_sentence(prose: &str, category: Category) -> Option<String> {
    compiled()
        .iter()
        .filter(|(c, _)| *c == category)
        .find_map(|(_, re)| re.captures(prose))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|s| !s.is_empty())
}
