use maud::{html, Markup};

pub mod card;
pub mod error;
pub mod sections;

pub use card::card;
pub use error::error_page;
pub use sections::{analysis_section, notice, score_card};

pub fn button(label: &str) -> Markup {
    html! {
        button type="submit" class="btn" { (label) }
    }
}
