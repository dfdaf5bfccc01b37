//! Rulebook judge: lexicon scoring with intensifiers, dampeners and negation.

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::lexicon::Lexicon;
use super::sentiment::Sentiment;
use super::tokenizer::tokenize;

/// How many tokens back a negator still flips a sentiment word
const NEGATION_WINDOW: usize = 3;

/// Decay applied to an intensifier sitting two tokens back
const DISTANT_INTENSIFIER_DECAY: f64 = 0.9;

/// Result of scoring one sentence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RulebookResult {
    /// Signed sum of every scored token
    pub score: f64,
    pub label: Sentiment,
    /// One entry per scored token, e.g. `NOT happy(-2.00)`
    pub explain: Vec<String>,
}

/// Lexicon-driven scorer borrowing a read-only lexicon
#[derive(Debug, Clone, Copy)]
pub struct Rulebook<'a> {
    lexicon: &'a Lexicon,
}

impl Default for Rulebook<'static> {
    fn default() -> Self {
        Self::new(Lexicon::shared())
    }
}

impl<'a> Rulebook<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    /// Score a sentence
    pub fn score(&self, sentence: &str) -> RulebookResult {
        let tokens = tokenize(sentence);
        let mut score = 0.0;
        let mut explain = Vec::new();

        for (i, token) in tokens.iter().enumerate() {
            let weight = self.lexicon.polarity(token);
            if weight == 0.0 {
                continue;
            }

            let multiplier = self.multiplier_at(&tokens, i);
            let negated = self.is_negated_at(&tokens, i);

            let value = if negated {
                -weight * multiplier
            } else {
                weight * multiplier
            };
            score += value;
            explain.push(explain_entry(token, value, negated));

            trace!(token = %token, value, negated, "Rulebook scored token");
        }

        RulebookResult {
            score,
            label: Sentiment::from_score(score),
            explain,
        }
    }

    /// Combined multiplier from the one- and two-back neighbours of `i`
    fn multiplier_at(&self, tokens: &[String], i: usize) -> f64 {
        let mut multiplier = 1.0;

        if let Some(prev) = i.checked_sub(1).and_then(|j| tokens.get(j)) {
            if let Some(factor) = self.lexicon.intensifier(prev) {
                multiplier *= factor;
            }
            if let Some(factor) = self.lexicon.dampener(prev) {
                multiplier *= factor;
            }
        }

        if let Some(prev2) = i.checked_sub(2).and_then(|j| tokens.get(j)) {
            if let Some(factor) = self.lexicon.intensifier(prev2) {
                multiplier *= factor * DISTANT_INTENSIFIER_DECAY;
            }
        }

        multiplier
    }

    /// True when any of the preceding `NEGATION_WINDOW` tokens is a negator.
    ///
    /// The window ignores clause boundaries.
    fn is_negated_at(&self, tokens: &[String], i: usize) -> bool {
        let start = i.saturating_sub(NEGATION_WINDOW);
        tokens[start..i]
            .iter()
            .rev()
            .any(|token| self.lexicon.is_negator(token))
    }
}

fn explain_entry(token: &str, value: f64, negated: bool) -> String {
    let prefix = if negated { "NOT " } else { "" };
    let sign = if value > 0.0 { "+" } else { "" };
    format!("{}{}({}{:.2})", prefix, token, sign, value)
}

/// Score a sentence against the shared lexicon
pub fn rulebook(sentence: &str) -> RulebookResult {
    Rulebook::default().score(sentence)
}
