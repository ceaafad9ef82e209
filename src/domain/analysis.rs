// src/domain/analysis.rs

use crate::analysis::{normalize, ScoreWeights};
use crate::domain::listing::ListingInput;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The three investment-signal categories every analysis is reported under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    SellerMotivation,
    TransactionComplexity,
    PropertyCharacteristics,
}

impl Category {
    pub const ALL: [Category; 3] = [
        Category::SellerMotivation,
        Category::TransactionComplexity,
        Category::PropertyCharacteristics,
    ];

    pub fn snake(self) -> &'static str {
        match self {
            Category::SellerMotivation => "seller_motivation",
            Category::TransactionComplexity => "transaction_complexity",
            Category::PropertyCharacteristics => "property_characteristics",
        }
    }

    pub fn camel(self) -> &'static str {
        match self {
            Category::SellerMotivation => "sellerMotivation",
            Category::TransactionComplexity => "transactionComplexity",
            Category::PropertyCharacteristics => "propertyCharacteristics",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Category::SellerMotivation => "Seller Motivation",
            Category::TransactionComplexity => "Transaction Complexity",
            Category::PropertyCharacteristics => "Property Characteristics",
        }
    }

    /// Explanation used when the response carries nothing usable for this category.
    pub fn default_explanation(self) -> &'static str {
        match self {
            Category::SellerMotivation => "No seller motivation detected in this listing.",
            Category::TransactionComplexity => {
                "No transaction complexity factors detected in this listing."
            }
            Category::PropertyCharacteristics => {
                "No specific property characteristics detected in this listing."
            }
        }
    }

    /// Short description of what the score measures, shown under each section.
    pub fn description(self) -> &'static str {
        match self {
            Category::SellerMotivation => {
                "Reflects price reductions, urgency language and market positioning."
            }
            Category::TransactionComplexity => {
                "Considers property condition, tenant situation, financing and legal considerations."
            }
            Category::PropertyCharacteristics => {
                "Evaluates location quality, building condition, tenant mix and value-add potential."
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryAnalysis {
    pub score: f64,
    pub explanation: String,
    pub keywords: Vec<String>,
}

/// Canonical shape every model response is folded into.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedAnalysis {
    pub seller_motivation: CategoryAnalysis,
    pub transaction_complexity: CategoryAnalysis,
    pub property_characteristics: CategoryAnalysis,
    pub total_score: f64,
    pub summary: Option<String>,
}

impl NormalizedAnalysis {
    pub fn category(&self, category: Category) -> &CategoryAnalysis {
        match category {
            Category::SellerMotivation => &self.seller_motivation,
            Category::TransactionComplexity => &self.transaction_complexity,
            Category::PropertyCharacteristics => &self.property_characteristics,
        }
    }

    pub fn categories(&self) -> impl Iterator<Item = (Category, &CategoryAnalysis)> {
        Category::ALL.into_iter().map(move |c| (c, self.category(c)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    High,
    Medium,
    Low,
}

impl ScoreBand {
    pub fn from_score(score: f64, high_threshold: f64) -> Self {
        if score >= high_threshold {
            ScoreBand::High
        } else if score >= 4.0 {
            ScoreBand::Medium
        } else {
            ScoreBand::Low
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            ScoreBand::High => "score-high",
            ScoreBand::Medium => "score-medium",
            ScoreBand::Low => "score-low",
        }
    }
}

/// Everything the results page and the spreadsheet export need for one listing.
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    pub listing: ListingInput,
    pub analysis: NormalizedAnalysis,
    pub model_used: Option<String>,
    pub models_attempted: Vec<String>,
    /// Response as received, kept so the page can re-submit it for export.
    pub raw: Value,
    pub highlight: bool,
    pub notice: Option<String>,
}

impl AnalysisReport {
    pub fn from_raw(
        listing: ListingInput,
        raw: Value,
        weights: &ScoreWeights,
        highlight_threshold: f64,
    ) -> Self {
        let analysis = normalize(&raw, weights);

        let model_used = raw
            .get("model_used")
            .and_then(Value::as_str)
            .map(str::to_string);

        let models_attempted = raw
            .get("models_attempted")
            .and_then(Value::as_array)
            .map(|models| {
                models
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        let highlight = analysis.total_score >= highlight_threshold;

        Self {
            listing,
            analysis,
            model_used,
            models_attempted,
            raw,
            highlight,
            notice: None,
        }
    }

    pub fn with_notice(mut self, notice: impl Into<String>) -> Self {
        self.notice = Some(notice.into());
        self
    }
}
