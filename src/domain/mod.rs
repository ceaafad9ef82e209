pub mod analysis;
pub mod fixtures;
pub mod listing;

pub use analysis::{AnalysisReport, Category, CategoryAnalysis, NormalizedAnalysis, ScoreBand};
pub use listing::ListingInput;
