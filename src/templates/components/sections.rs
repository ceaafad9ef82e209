use crate::analysis::keyword_category;
use crate::domain::{Category, CategoryAnalysis, ScoreBand};
use maud::{html, Markup};

pub fn score_card(title: &str, score: f64, band: ScoreBand, extra_class: &str) -> Markup {
    html! {
        div class={ "score-card " (band.css_class()) " " (extra_class) } {
            h3 { (title) }
            p class="value" { (format!("{score:.1}")) }
            p class="muted" { "out of 10" }
        }
    }
}

/// Keyword chips, tinted by the detector category each keyword belongs to.
pub fn keyword_chips(keywords: &[String]) -> Markup {
    html! {
        @if keywords.is_empty() {
            p class="muted" { "No relevant keywords detected for this category." }
        } @else {
            h4 { "Keywords Detected:" }
            ul class="chips" {
                @for keyword in keywords {
                    @let tint = keyword_category(keyword).map(Category::snake).unwrap_or("other");
                    li class={ "chip chip-" (tint) } { (keyword) }
                }
            }
        }
    }
}

pub fn analysis_section(category: Category, analysis: &CategoryAnalysis) -> Markup {
    html! {
        details class="card" open {
            summary { strong { (category.title()) } }
            p { (analysis.explanation) }
            p class="muted" { (category.description()) }
            (keyword_chips(&analysis.keywords))
        }
    }
}

pub fn notice(kind: &str, message: &str) -> Markup {
    html! {
        div class={ "notice notice-" (kind) } role="status" { (message) }
    }
}
