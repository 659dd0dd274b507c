// Human-readable feedback derived from a sentiment result.
// Presentation only; the branch structure (confidence band, label, score
// magnitude) is the contract, the wording is a product concern.
use crate::engine::{Label, SentimentResult};

/// Produce feedback lines for a result: a summary of the label and
/// confidence band, then a tone note picked by label and score magnitude.
/// Always returns exactly two non-empty lines.
pub fn get_insights(result: &SentimentResult) -> Vec<String> {
    let band = confidence_band(result.confidence);
    vec![
        format!("Sentiment: {} (confidence: {})", result.label.title(), band),
        tone_insight(result).to_string(),
    ]
}

fn confidence_band(confidence: f32) -> &'static str {
    if confidence > 0.7 {
        "high"
    } else if confidence > 0.4 {
        "moderate"
    } else {
        "low"
    }
}

fn tone_insight(result: &SentimentResult) -> &'static str {
    match result.label {
        Label::Positive if result.score > 0.5 => {
            "This post has a very positive tone that may engage readers well."
        }
        Label::Positive => "This post has a positive tone that should resonate with readers.",
        Label::Negative if result.score < -0.5 => {
            "This post has a strong negative tone. Consider if this aligns with your intended message."
        }
        Label::Negative => {
            "This post has a negative tone. This might be appropriate for critical or serious topics."
        }
        Label::Neutral => "This post has a neutral tone, which is good for informational content.",
    }
}
