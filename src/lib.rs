// PostPulse: sentiment scoring for blog posts.
// The caller hands over raw post text (title + body) and gets back a score,
// a label and a confidence, plus optional human-readable insight lines.
pub mod engine;
pub mod insights;
pub mod lexicon;
pub mod normalize;

pub use engine::{Label, SentimentEngine, SentimentResult};
pub use insights::get_insights;
pub use lexicon::WeightedLexicon;
pub use normalize::normalize;
