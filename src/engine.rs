// Sentiment scoring engine.
// Two strategies behind one entry point: a weighted-lexicon scorer used when
// a valence lexicon is available, and a word-counting scorer that always
// works. The strategy is resolved once when the engine is built and any
// per-call failure of the weighted scorer falls back to counting, so
// `analyze` never fails and never panics.
use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::lexicon::{WeightedLexicon, NEGATIVE_WORDS, POSITIVE_WORDS};
use crate::normalize::normalize;

/// Inputs shorter than this (after trimming) are not worth analyzing.
pub const MIN_ANALYZABLE_CHARS: usize = 10;

// Label thresholds. The two strategies are tuned separately; the asymmetry
// (0.05 vs 0.01) is intentional, do not unify.
const WEIGHTED_THRESHOLD: f32 = 0.05;
const COUNTING_THRESHOLD: f32 = 0.01;

// VADER-style compound normalization constant.
const NORMALIZATION_ALPHA: f32 = 15.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    Positive,
    Negative,
    Neutral,
}

impl Label {
    fn from_weighted(score: f32) -> Self {
        if score >= WEIGHTED_THRESHOLD {
            Label::Positive
        } else if score <= -WEIGHTED_THRESHOLD {
            Label::Negative
        } else {
            Label::Neutral
        }
    }

    fn from_counting(score: f32) -> Self {
        if score > COUNTING_THRESHOLD {
            Label::Positive
        } else if score < -COUNTING_THRESHOLD {
            Label::Negative
        } else {
            Label::Neutral
        }
    }

    /// Title-case form for presentation ("Positive", "Negative", "Neutral").
    pub fn title(&self) -> &'static str {
        match self {
            Label::Positive => "Positive",
            Label::Negative => "Negative",
            Label::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Label::Positive => "positive",
            Label::Negative => "negative",
            Label::Neutral => "neutral",
        };
        f.write_str(s)
    }
}

/// One analysis outcome. Immutable; the caller owns it after return.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    pub score: f32,
    pub label: Label,
    pub confidence: f32,
}

impl SentimentResult {
    /// The safe default returned for trivial or signal-free input.
    pub fn neutral() -> Self {
        Self {
            score: 0.0,
            label: Label::Neutral,
            confidence: 0.0,
        }
    }
}

#[derive(Debug)]
enum Strategy {
    Weighted(WeightedLexicon),
    Counting,
}

/// The engine resolves its strategy once at construction and is read-only
/// afterwards, so it can be shared freely across threads.
#[derive(Debug)]
pub struct SentimentEngine {
    strategy: Strategy,
}

impl SentimentEngine {
    /// Probe for a weighted lexicon. If none can be loaded the engine uses
    /// the counting strategy for its whole lifetime; the probe is not
    /// retried.
    pub fn new() -> Self {
        match WeightedLexicon::discover() {
            Ok(lexicon) => Self {
                strategy: Strategy::Weighted(lexicon),
            },
            Err(_) => Self::counting(),
        }
    }

    /// Build an engine around an already-loaded lexicon.
    pub fn with_lexicon(lexicon: WeightedLexicon) -> Self {
        Self {
            strategy: Strategy::Weighted(lexicon),
        }
    }

    /// Build an engine that only uses the counting strategy.
    pub fn counting() -> Self {
        Self {
            strategy: Strategy::Counting,
        }
    }

    pub fn is_weighted(&self) -> bool {
        matches!(self.strategy, Strategy::Weighted(_))
    }

    /// Score a piece of text. Trimmed input shorter than
    /// `MIN_ANALYZABLE_CHARS` short-circuits to the neutral default without
    /// touching any strategy.
    pub fn analyze(&self, text: &str) -> SentimentResult {
        if text.trim().chars().count() < MIN_ANALYZABLE_CHARS {
            return SentimentResult::neutral();
        }
        let clean = normalize(text);
        match &self.strategy {
            Strategy::Weighted(lexicon) => {
                analyze_weighted(lexicon, &clean).unwrap_or_else(|_| analyze_counting(&clean))
            }
            Strategy::Counting => analyze_counting(&clean),
        }
    }
}

impl Default for SentimentEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn analyze_weighted(lexicon: &WeightedLexicon, text: &str) -> Result<SentimentResult> {
    if lexicon.is_empty() {
        return Err(anyhow!("weighted lexicon has no entries"));
    }

    let mut sum = 0.0f32;
    for token in text.to_lowercase().split_whitespace() {
        // Lexicon tokens carry no punctuation; strip it for the lookup.
        let word = token.trim_matches(|c: char| !c.is_alphanumeric());
        if word.is_empty() {
            continue;
        }
        if let Some(valence) = lexicon.valence(word) {
            sum += valence;
        }
    }

    let score = (sum / (sum * sum + NORMALIZATION_ALPHA).sqrt()).clamp(-1.0, 1.0);
    Ok(SentimentResult {
        score,
        label: Label::from_weighted(score),
        confidence: score.abs(),
    })
}

fn analyze_counting(text: &str) -> SentimentResult {
    let lowered = text.to_lowercase();
    let words: Vec<&str> = lowered.split_whitespace().collect();
    if words.is_empty() {
        return SentimentResult::neutral();
    }

    // Exact token matches only; a trailing comma on "terrible," means no
    // match, matching the normalization contract.
    let positive = words.iter().filter(|w| POSITIVE_WORDS.contains(**w)).count();
    let negative = words.iter().filter(|w| NEGATIVE_WORDS.contains(**w)).count();
    if positive + negative == 0 {
        return SentimentResult::neutral();
    }

    let total = words.len() as f32;
    let score = (positive as f32 - negative as f32) / total;
    let confidence = ((positive + negative) as f32 / total * 2.0).min(1.0);
    SentimentResult {
        score,
        label: Label::from_counting(score),
        confidence,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_short_circuits() {
        let engine = SentimentEngine::counting();
        for text in ["", "ok", "short", "         ", "awful bad"] {
            assert_eq!(engine.analyze(text), SentimentResult::neutral());
        }
    }

    #[test]
    fn test_counting_positive_scenario() {
        let engine = SentimentEngine::counting();
        let result =
            engine.analyze("This is an absolutely amazing and wonderful product, I love it!");
        assert_eq!(result.label, Label::Positive);
        assert!(result.score > 0.0);
        assert!(result.confidence > 0.0);
        // 3 positive hits out of 11 tokens.
        assert!((result.score - 3.0 / 11.0).abs() < 1e-6);
        assert!((result.confidence - 6.0 / 11.0).abs() < 1e-6);
    }

    #[test]
    fn test_counting_negative_scenario() {
        let engine = SentimentEngine::counting();
        let result = engine.analyze("This is a terrible, horrible, awful experience, I hate it");
        assert_eq!(result.label, Label::Negative);
        assert!(result.score < 0.0);
    }

    #[test]
    fn test_counting_no_sentiment_words() {
        let engine = SentimentEngine::counting();
        let result = engine.analyze("The meeting is scheduled for Tuesday at 3pm in room 204.");
        assert_eq!(result, SentimentResult::neutral());
    }

    #[test]
    fn test_counting_is_deterministic() {
        let engine = SentimentEngine::counting();
        let text = "A great day with a terrible ending, but mostly happy moments.";
        let first = engine.analyze(text);
        for _ in 0..5 {
            assert_eq!(engine.analyze(text), first);
        }
    }

    #[test]
    fn test_counting_duplicates_count_individually() {
        let engine = SentimentEngine::counting();
        let single = engine.analyze("the food here was good honestly");
        let double = engine.analyze("good good food here was honestly");
        assert!(double.score > single.score);
    }

    #[test]
    fn test_confidence_always_in_unit_range() {
        let engine = SentimentEngine::counting();
        let inputs = [
            "",
            "ok",
            "great great great great great",
            "awful awful awful awful awful awful",
            "a perfectly ordinary sentence about nothing in particular",
            "<b>love love hate hate</b> and then some more words",
        ];
        for text in inputs {
            let result = engine.analyze(text);
            assert!((0.0..=1.0).contains(&result.confidence), "input {:?}", text);
            assert!((-1.0..=1.0).contains(&result.score), "input {:?}", text);
        }
    }

    #[test]
    fn test_label_is_function_of_score() {
        // The two strategies keep separate thresholds on purpose: 0.03 is
        // positive under counting rules but neutral under weighted rules.
        assert_eq!(Label::from_counting(0.03), Label::Positive);
        assert_eq!(Label::from_weighted(0.03), Label::Neutral);
        assert_eq!(Label::from_counting(-0.03), Label::Negative);
        assert_eq!(Label::from_weighted(-0.03), Label::Neutral);

        assert_eq!(Label::from_weighted(0.05), Label::Positive);
        assert_eq!(Label::from_weighted(-0.05), Label::Negative);
        assert_eq!(Label::from_counting(0.01), Label::Neutral);
        assert_eq!(Label::from_counting(-0.01), Label::Neutral);
    }

    #[test]
    fn test_weighted_strategy_scoring() {
        let lexicon = WeightedLexicon::from_entries([
            ("amazing".to_string(), 1.9),
            ("terrible".to_string(), -2.1),
        ]);
        let engine = SentimentEngine::with_lexicon(lexicon);
        assert!(engine.is_weighted());

        let result = engine.analyze("this product really is amazing, amazing and amazing again");
        assert_eq!(result.label, Label::Positive);
        assert!(result.score > 0.0 && result.score <= 1.0);
        // Confidence and |score| coincide under the weighted strategy.
        assert_eq!(result.confidence, result.score.abs());

        let result = engine.analyze("what a terrible, terrible mess this turned out to be");
        assert_eq!(result.label, Label::Negative);
        assert_eq!(result.confidence, result.score.abs());
    }

    #[test]
    fn test_weighted_strategy_strips_token_punctuation() {
        let lexicon = WeightedLexicon::from_entries([("amazing".to_string(), 1.9)]);
        let engine = SentimentEngine::with_lexicon(lexicon);
        let result = engine.analyze("honestly this was amazing! truly.");
        assert_eq!(result.label, Label::Positive);
    }

    #[test]
    fn test_weighted_no_hits_is_neutral() {
        let lexicon = WeightedLexicon::from_entries([("amazing".to_string(), 1.9)]);
        let engine = SentimentEngine::with_lexicon(lexicon);
        let result = engine.analyze("the meeting is scheduled for tuesday afternoon");
        assert_eq!(result.label, Label::Neutral);
        assert_eq!(result.score, 0.0);
        assert_eq!(result.confidence, 0.0);
    }

    #[test]
    fn test_weighted_failure_falls_back_to_counting() {
        // An unusable lexicon must not surface an error; the call degrades
        // to the counting strategy.
        let engine = SentimentEngine::with_lexicon(WeightedLexicon::from_entries([]));
        let text = "This is an absolutely amazing and wonderful product, I love it!";
        let expected = SentimentEngine::counting().analyze(text);
        assert_eq!(engine.analyze(text), expected);
    }

    #[test]
    fn test_analyze_strips_markup_before_scoring() {
        let engine = SentimentEngine::counting();
        let result = engine.analyze("<p>What a wonderful and amazing post this is</p>");
        assert_eq!(result.label, Label::Positive);
    }

    #[test]
    fn test_result_serialization() {
        let result = SentimentResult {
            score: 0.25,
            label: Label::Positive,
            confidence: 0.5,
        };
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"positive\""));
        let back: SentimentResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }
}
