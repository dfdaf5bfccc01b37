//! Sentiment lexicon for the rulebook judge.
//!
//! Four weight tables plus a negator set, compiled once and read-only after.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

/// Positive words and their weights
const POSITIVE_WORDS: &[(&str, f64)] = &[
    ("love", 2.0),
    ("like", 1.0),
    ("enjoy", 1.0),
    ("awesome", 2.0),
    ("great", 2.0),
    ("good", 1.0),
    ("fun", 1.0),
    ("fantastic", 2.0),
    ("amazing", 2.0),
    ("happy", 2.0),
    ("tasty", 1.0),
    ("cool", 1.0),
    ("nice", 1.0),
    ("yay", 1.0),
    ("wonderful", 2.0),
    ("delightful", 2.0),
    ("brilliant", 2.0),
    ("sweet", 1.0),
    ("cute", 1.0),
    ("win", 1.0),
];

/// Negative words and their magnitudes (subtracted from the score)
const NEGATIVE_WORDS: &[(&str, f64)] = &[
    ("hate", 2.0),
    ("dislike", 1.0),
    ("awful", 2.0),
    ("bad", 1.0),
    ("boring", 1.0),
    ("terrible", 2.0),
    ("worst", 2.0),
    ("sad", 2.0),
    ("angry", 2.0),
    ("slow", 1.0),
    ("messy", 1.0),
    ("yuck", 1.0),
    ("ugh", 1.0),
    ("annoying", 1.0),
    ("horrible", 2.0),
    ("nasty", 2.0),
    ("ugly", 1.0),
];

const INTENSIFIERS: &[(&str, f64)] = &[
    ("very", 1.5),
    ("super", 1.5),
    ("really", 1.2),
    ("extremely", 1.8),
    ("so", 1.2),
    ("mega", 1.4),
];

const DAMPENERS: &[(&str, f64)] = &[("slightly", 0.6), ("kinda", 0.7), ("somewhat", 0.7)];

/// Negators are matched on the raw token, apostrophes included
const NEGATORS: &[&str] = &[
    "not", "no", "never", "isn't", "wasn't", "don't", "didn't", "can't", "won't", "n't",
];

/// Dampening applied when the previous token is "little" and not itself a dampener
pub const LITTLE_FACTOR: f64 = 0.6;

static SHARED_LEXICON: LazyLock<Lexicon> = LazyLock::new(Lexicon::new);

/// Word tables driving the rulebook
#[derive(Debug, Clone)]
pub struct Lexicon {
    positive: HashMap<&'static str, f64>,
    negative: HashMap<&'static str, f64>,
    intensifiers: HashMap<&'static str, f64>,
    dampeners: HashMap<&'static str, f64>,
    negators: HashSet<&'static str>,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::new()
    }
}

impl Lexicon {
    /// Build the seed lexicon
    pub fn new() -> Self {
        Self {
            positive: POSITIVE_WORDS.iter().copied().collect(),
            negative: NEGATIVE_WORDS.iter().copied().collect(),
            intensifiers: INTENSIFIERS.iter().copied().collect(),
            dampeners: DAMPENERS.iter().copied().collect(),
            negators: NEGATORS.iter().copied().collect(),
        }
    }

    /// Process-wide instance, built on first use
    pub fn shared() -> &'static Lexicon {
        &SHARED_LEXICON
    }

    /// Signed base weight of a token: positive weight minus negative magnitude.
    ///
    /// Apostrophes are stripped before lookup, so `happy'` matches `happy`
    /// while `it's` is looked up as `its`.
    pub fn polarity(&self, token: &str) -> f64 {
        let bare = token.replace('\'', "");
        let mut weight = 0.0;
        if let Some(w) = self.positive.get(bare.as_str()) {
            weight += w;
        }
        if let Some(w) = self.negative.get(bare.as_str()) {
            weight -= w;
        }
        weight
    }

    pub fn intensifier(&self, token: &str) -> Option<f64> {
        self.intensifiers.get(token).copied()
    }

    /// Dampening factor for a token, including the bare "little" fallback
    pub fn dampener(&self, token: &str) -> Option<f64> {
        match self.dampeners.get(token) {
            Some(factor) => Some(*factor),
            None if token == "little" => Some(LITTLE_FACTOR),
            None => None,
        }
    }

    pub fn is_negator(&self, token: &str) -> bool {
        self.negators.contains(token)
    }

    /// Tokens that carry polarity, in input order (duplicates kept)
    pub fn feeling_words(&self, tokens: &[String]) -> Vec<String> {
        tokens
            .iter()
            .filter(|token| self.polarity(token) != 0.0)
            .cloned()
            .collect()
    }
}
