pub mod keywords;
pub mod normalizer;
pub mod prose;
pub mod resolve;
pub mod scoring;

pub use keywords::keyword_category;
pub use normalizer::normalize;
pub use scoring::ScoreWeights;
