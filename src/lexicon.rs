// Lexicon resources for the two scoring strategies.
// The counting strategy uses two fixed word sets; the weighted strategy
// loads a VADER-format valence lexicon from disk once at startup.
use anyhow::{anyhow, Context, Result};
use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

// Positive words for the counting strategy
pub static POSITIVE_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "good", "great", "excellent", "amazing", "wonderful", "fantastic",
        "awesome", "brilliant", "outstanding", "superb", "magnificent",
        "love", "like", "enjoy", "happy", "pleased", "satisfied",
        "beautiful", "perfect", "best", "incredible", "remarkable",
    ]
    .iter()
    .copied()
    .collect()
});

// Negative words for the counting strategy
pub static NEGATIVE_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "bad", "terrible", "awful", "horrible", "disgusting", "hate",
        "dislike", "angry", "sad", "disappointed", "frustrated",
        "worst", "pathetic", "useless", "boring", "annoying",
        "difficult", "problem", "issue", "wrong", "error", "fail",
    ]
    .iter()
    .copied()
    .collect()
});

/// Env var pointing at a weighted lexicon file; checked before the default.
pub const LEXICON_ENV: &str = "POSTPULSE_LEXICON";
/// Default lexicon location, relative to the working directory.
pub const DEFAULT_LEXICON_PATH: &str = "vader_lexicon.txt";

/// Token-to-valence map backing the weighted strategy. Loaded once,
/// read-only afterwards.
#[derive(Debug, Clone)]
pub struct WeightedLexicon {
    valences: HashMap<String, f32>,
}

impl WeightedLexicon {
    /// Parse a VADER-format lexicon: one `token<TAB>valence` pair per line,
    /// extra tab-separated columns ignored. Blank lines, comment lines and
    /// lines with an unparseable valence are skipped.
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("failed to open lexicon at {}", path.display()))?;
        let mut valences = HashMap::new();
        for line in BufReader::new(file).lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let mut cols = line.split('\t');
            let token = match cols.next() {
                Some(t) if !t.is_empty() => t,
                _ => continue,
            };
            let valence = match cols.next().and_then(|v| v.trim().parse::<f32>().ok()) {
                Some(v) => v,
                None => continue,
            };
            valences.insert(token.to_lowercase(), valence);
        }
        if valences.is_empty() {
            return Err(anyhow!(
                "lexicon at {} contained no usable entries",
                path.display()
            ));
        }
        Ok(Self { valences })
    }

    /// Probe the configured locations for a lexicon file. Called once per
    /// engine; a failure here permanently disables the weighted strategy.
    pub fn discover() -> Result<Self> {
        let path =
            std::env::var(LEXICON_ENV).unwrap_or_else(|_| DEFAULT_LEXICON_PATH.to_string());
        Self::load(Path::new(&path))
    }

    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, f32)>,
    {
        Self {
            valences: entries.into_iter().collect(),
        }
    }

    pub fn valence(&self, token: &str) -> Option<f32> {
        self.valences.get(token).copied()
    }

    pub fn len(&self) -> usize {
        self.valences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.valences.is_empty()
    }
}
