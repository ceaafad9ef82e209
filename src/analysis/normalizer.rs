// src/analysis/normalizer.rs

use crate::analysis::keywords::detect_keywords;
use crate::analysis::prose::{extract_sentence, prose_text};
use crate::analysis::resolve::{keyword_list, non_empty_str, path, score_of, truthy_number, Resolver};
use crate::analysis::scoring::ScoreWeights;
use crate::domain::{Category, CategoryAnalysis, NormalizedAnalysis};
use serde_json::Value;
use tracing::debug;

/// Folds a model response of unknown shape into a [`NormalizedAnalysis`].
///
/// Never fails: missing or mistyped data degrades to a zero score, the
/// category's default sentence and an empty keyword list.
pub fn normalize(raw: &Value, weights: &ScoreWeights) -> NormalizedAnalysis {
    let seller_motivation = normalize_category(raw, Category::SellerMotivation);
    let transaction_complexity = normalize_category(raw, Category::TransactionComplexity);
    let property_characteristics = normalize_category(raw, Category::PropertyCharacteristics);

    let total_score = match total_resolver().resolve(raw) {
        Some(found) => {
            debug!(source = %found.source, total = found.value, "total score supplied");
            found.value
        }
        None => weights.total(
            seller_motivation.score,
            transaction_complexity.score,
            property_characteristics.score,
        ),
    };

    NormalizedAnalysis {
        seller_motivation,
        transaction_complexity,
        property_characteristics,
        total_score,
        summary: summary_resolver().resolve_value(raw),
    }
}

fn normalize_category(raw: &Value, category: Category) -> CategoryAnalysis {
    let score = match score_resolver(category).resolve(raw) {
        Some(found) => {
            debug!(category = category.snake(), source = %found.source, "score resolved");
            found.value
        }
        None => 0.0,
    };

    let Explanation { text, keywords } = match explanation_resolver(category).resolve(raw) {
        Some(found) => {
            debug!(category = category.snake(), source = %found.source, "explanation resolved");
            found.value
        }
        None => Explanation {
            text: category.default_explanation().to_string(),
            keywords: Vec::new(),
        },
    };

    CategoryAnalysis {
        score,
        explanation: text,
        keywords,
    }
}

/// An explanation and the keywords that belong to it.
#[derive(Debug, Clone, PartialEq)]
pub struct Explanation {
    pub text: String,
    pub keywords: Vec<String>,
}

impl Explanation {
    /// Keywords come from the first explicit list of the same record, else
    /// from scanning the text.
    fn with_lists(text: Option<String>, lists: &[Option<&Value>]) -> Option<Self> {
        let text = text?;
        let keywords = lists
            .iter()
            .flatten()
            .find_map(|list| keyword_list(list))
            .unwrap_or_else(|| detect_keywords(&text));
        Some(Self { text, keywords })
    }

    fn scanned(text: String) -> Self {
        let keywords = detect_keywords(&text);
        Self { text, keywords }
    }
}

/// Score lookups. The nested `scores` object is consulted before flat fields.
pub fn score_resolver(category: Category) -> Resolver<'static, f64> {
    let snake = category.snake();
    let camel = category.camel();
    let flat = format!("{snake}_score");

    Resolver::new()
        .then(format!("scores.{camel}"), move |v| {
            path(v, &["scores", camel]).and_then(score_of)
        })
        .then(format!("scores.{snake}"), move |v| {
            path(v, &["scores", snake]).and_then(score_of)
        })
        .then(flat.clone(), move |v| path(v, &[flat.as_str()]).and_then(truthy_number))
        .then(snake, move |v| path(v, &[snake]).and_then(score_of))
        .then(camel, move |v| path(v, &[camel]).and_then(truthy_number))
}

/// Explanation records in precedence order. Each record carries its own
/// keyword positions; the category default comes after all of them.
pub fn explanation_resolver(category: Category) -> Resolver<'static, Explanation> {
    let snake = category.snake();
    let camel = category.camel();
    let title = category.title();
    let analysis_key = format!("{snake}_analysis");
    let analysis_field = format!("{camel}Explanation");

    Resolver::new()
        .then(analysis_key.clone(), move |v| {
            let record = path(v, &[analysis_key.as_str()])?;
            let text = path(record, &["explanation"])
                .and_then(non_empty_str)
                .or_else(|| non_empty_str(record));
            Explanation::with_lists(text, &[path(record, &["keywords"])])
        })
        .then(format!("scores.{camel}"), move |v| {
            Explanation::with_lists(
                path(v, &["scores", camel, "explanation"]).and_then(non_empty_str),
                &[path(v, &["scores", camel, "keywords"]), path(v, &["keywords", camel])],
            )
        })
        .then(format!("scores.{snake}"), move |v| {
            Explanation::with_lists(
                path(v, &["scores", snake, "explanation"]).and_then(non_empty_str),
                &[path(v, &["scores", snake, "keywords"]), path(v, &["keywords", snake])],
            )
        })
        .then(format!("explanations.{snake}"), move |v| {
            Explanation::with_lists(
                path(v, &["explanations", snake]).and_then(non_empty_str),
                &[path(v, &["keywords", snake])],
            )
        })
        .then(format!("explanations.{camel}"), move |v| {
            Explanation::with_lists(
                path(v, &["explanations", camel]).and_then(non_empty_str),
                &[path(v, &["keywords", camel])],
            )
        })
        .then(format!("analysis.{analysis_field}"), move |v| {
            Explanation::with_lists(
                path(v, &["analysis", analysis_field.as_str()]).and_then(non_empty_str),
                &[path(v, &["keywords", camel])],
            )
        })
        .then("analysis (prose)", move |v| {
            let prose = prose_text(v)?;
            Some(match extract_sentence(&prose, category) {
                Some(sentence) => Explanation::scanned(sentence),
                None => {
                    let keywords = detect_keywords(&prose);
                    Explanation {
                        text: format!("{title}: {prose}"),
                        keywords,
                    }
                }
            })
        })
        .then(snake, move |v| {
            Explanation::with_lists(
                path(v, &[snake, "explanation"]).and_then(non_empty_str),
                &[path(v, &[snake, "keywords"])],
            )
        })
}

pub fn total_resolver() -> Resolver<'static, f64> {
    Resolver::new()
        .then("total_score", |v| path(v, &["total_score"]).and_then(truthy_number))
        .then("totalWeightedScore", |v| {
            path(v, &["totalWeightedScore"]).and_then(truthy_number)
        })
        .then("scores.totalWeightedScore", |v| {
            path(v, &["scores", "totalWeightedScore"]).and_then(truthy_number)
        })
        .then("scores.total_weighted_score", |v| {
            path(v, &["scores", "total_weighted_score"]).and_then(truthy_number)
        })
        .then("totalScore", |v| path(v, &["totalScore"]).and_then(truthy_number))
}

pub fn summary_resolver() -> Resolver<'static, String> {
    Resolver::new()
        .then("summary", |v| path(v, &["summary"]).and_then(non_empty_str))
        .then("analysis", prose_text)
        .then("explanations.overall_analysis", |v| {
            path(v, &["explanations", "overall_analysis"]).and_then(non_empty_str)
        })
        .then("explanations.overallAnalysis", |v| {
            path(v, &["explanations", "overallAnalysis"]).and_then(non_empty_str)
        })
        .then("analysis.overallAnalysis", |v| {
            path(v, &["analysis", "overallAnalysis"]).and_then(non_empty_str)
        })
}
