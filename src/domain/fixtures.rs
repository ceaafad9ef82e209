// src/domain/fixtures.rs

use crate::domain::listing::ListingInput;
use serde_json::{json, Value};

pub const SAMPLE_MODEL_LABEL: &str = "Sample Analysis";
pub const ERROR_FALLBACK_MODEL_LABEL: &str = "Sample Analysis (Error Fallback)";
pub const NO_MODELS_ATTEMPTED: &str = "No models attempted";

/// Listing used by the "Load sample listing" link.
pub fn sample_listing() -> ListingInput {
    ListingInput {
        name: "Retail Strip Center".into(),
        property_type: "Retail".into(),
        location: "Suburban Location".into(),
        price: "$3,950,000".into(),
        description: "PRICE REDUCED - OWNER MUST SELL! Retail Strip Center in Prime Location

Offering Summary
Sale Price: $3,950,000 (Reduced from $4,200,000)
Building Size: 15,400 SF
Price/SF: $256.49
Lot Size: 1.2 Acres
Year Built: 1985
Occupancy: 78%

Property Overview
Excellent value-add opportunity in a rapidly developing area! This retail strip center is being offered at below market price due to owner's urgent need to liquidate assets. The current owner is relocating out of state and needs a quick closing.

The property shows significant deferred maintenance but has solid bones and excellent upside potential. Current rents are approximately 15% below market, providing immediate upside for a new owner willing to implement a basic renovation program and more active management.

Property Highlights
- Prime corner location with excellent visibility and traffic counts of 25,000+ vehicles per day
- Below market rents with opportunity to increase by 15-20% upon lease renewal
- Value-add opportunity through renovation and repositioning
- Motivated seller - bring all offers!
- Strong tenant mix with national credit tenant as anchor (5-year lease remaining)
- High-growth area with new development nearby
- Potential for additional pad site development"
            .into(),
    }
}

/// Canned response for sample mode and for when every model call fails.
pub fn sample_analysis(model_label: &str, models_attempted: &[&str]) -> Value {
    json!({
        "seller_motivation_score": 8.5,
        "transaction_complexity_score": 6.0,
        "property_characteristics_score": 7.5,
        "total_score": 7.4,
        "model_used": model_label,
        "models_attempted": models_attempted,
        "seller_motivation_analysis": {
            "explanation": "The listing shows clear signs of a motivated seller with explicit mentions of price reduction and needing to sell quickly.",
            "keywords": ["motivated seller", "must sell", "price reduced", "relocating"]
        },
        "transaction_complexity_analysis": {
            "explanation": "The transaction has moderate complexity due to deferred maintenance issues that might require negotiations.",
            "keywords": ["deferred maintenance", "below market"]
        },
        "property_characteristics_analysis": {
            "explanation": "The property shows good value-add potential through renovation and repositioning with below market rents.",
            "keywords": ["value-add", "below market rents", "deferred maintenance"]
        },
        "summary": "This property represents a strong investment opportunity with a motivated seller and clear value-add potential through addressing deferred maintenance and raising below-market rents."
    })
}
