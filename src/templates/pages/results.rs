// templates/pages/results.rs

use crate::domain::{AnalysisReport, Category, ScoreBand};
use crate::templates::{
    components::{analysis_section, card, notice, score_card},
    desktop_layout,
};
use maud::{html, Markup};

pub fn results_page(report: &AnalysisReport, highlight_threshold: f64) -> Markup {
    let analysis = &report.analysis;
    let band = |score: f64| ScoreBand::from_score(score, highlight_threshold);
    let normalized_json = serde_json::to_string_pretty(analysis).unwrap_or_default();

    desktop_layout(
        "Analysis Results",
        html! {
            @if let Some(message) = &report.notice {
                (notice("error", message))
            }

            (listing_header(report))

            @if let Some(model) = &report.model_used {
                div class="notice notice-info" {
                    p { strong { "AI Model Used: " } (model) }
                    @if !report.models_attempted.is_empty() {
                        p { strong { "Models Attempted: " } (report.models_attempted.join(" → ")) }
                    }
                }
            }

            @if report.highlight {
                (notice("info", "Total score meets the highlight threshold: worth a closer look."))
            }

            h2 { "Scores" }
            div class="scores" {
                @for (category, result) in analysis.categories() {
                    (score_card(category.title(), result.score, band(result.score), ""))
                }
                (score_card("TOTAL SCORE", analysis.total_score, band(analysis.total_score), "total"))
            }

            h2 { "Detailed Analysis" }
            @for category in Category::ALL {
                (analysis_section(category, analysis.category(category)))
            }

            @if let Some(summary) = &analysis.summary {
                (card("Investment Recommendation", html! { p { (summary) } }))
            }

            (export_form(report))

            details class="card" {
                summary { "Show Raw JSON" }
                pre { code { (normalized_json) } }
            }

            p { a class="btn btn-secondary" href="/" { "Analyze another listing" } }
        },
    )
}

fn listing_header(report: &AnalysisReport) -> Markup {
    let listing = &report.listing;
    html! {
        section class="card" {
            h2 { (listing.display_name()) }
            p {
                strong { "Type: " } (listing.display_type()) " · "
                strong { "Location: " } (listing.display_location()) " · "
                strong { "Price: " } (listing.display_price())
            }
        }
    }
}

/// Posts the received response back so the export is the same analysis on screen.
fn export_form(report: &AnalysisReport) -> Markup {
    let listing = &report.listing;
    html! {
        form method="post" action="/export" {
            input type="hidden" name="raw" value=(report.raw.to_string());
            input type="hidden" name="name" value=(listing.name);
            input type="hidden" name="property_type" value=(listing.property_type);
            input type="hidden" name="location" value=(listing.location);
            input type="hidden" name="price" value=(listing.price);
            input type="hidden" name="description" value=(listing.description);
            button type="submit" class="btn" { "Download Spreadsheet" }
        }
    }
}
