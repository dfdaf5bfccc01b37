//! Sentiment Analyzer - runs both judges on a sentence.
//!
//! The rulebook and the Naive Bayes model never talk to each other; the
//! analyzer only places their verdicts side by side.

use chrono::Utc;
use std::time::Instant;
use tracing::debug;

use super::lexicon::Lexicon;
use super::naive_bayes::NaiveBayes;
use super::report::{ComparisonRow, SentimentReport};
use super::rulebook::Rulebook;
use super::tokenizer::tokenize;

/// Pairs a rulebook with a trained model, both borrowed read-only
#[derive(Debug, Clone, Copy)]
pub struct SentimentAnalyzer<'a> {
    lexicon: &'a Lexicon,
    rulebook: Rulebook<'a>,
    model: &'a NaiveBayes,
}

impl Default for SentimentAnalyzer<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentAnalyzer<'static> {
    /// Analyzer over the shared lexicon and the model trained on the seed corpus
    pub fn new() -> Self {
        Self::with_parts(Lexicon::shared(), NaiveBayes::shared())
    }
}

impl<'a> SentimentAnalyzer<'a> {
    pub fn with_parts(lexicon: &'a Lexicon, model: &'a NaiveBayes) -> Self {
        Self {
            lexicon,
            rulebook: Rulebook::new(lexicon),
            model,
        }
    }

    pub fn model(&self) -> &'a NaiveBayes {
        self.model
    }

    /// Run both judges and collect the feeling words
    pub fn analyze(&self, sentence: &str) -> SentimentReport {
        let start = Instant::now();

        let rulebook = self.rulebook.score(sentence);
        let bayes = self.model.predict(sentence);
        let feeling_words = self.lexicon.feeling_words(&tokenize(sentence));
        let agree = rulebook.label == bayes.label;

        debug!(
            rulebook = %rulebook.label,
            bayes = %bayes.label,
            agree,
            "Analyzed sentence"
        );

        SentimentReport {
            sentence: sentence.to_string(),
            rulebook,
            bayes,
            feeling_words,
            agree,
            processing_time_us: start.elapsed().as_micros() as u64,
            timestamp: Utc::now(),
        }
    }

    /// Labels from both judges for each sentence
    pub fn compare<S: AsRef<str>>(&self, sentences: &[S]) -> Vec<ComparisonRow> {
        sentences
            .iter()
            .map(|s| {
                let s = s.as_ref();
                ComparisonRow::new(s, self.rulebook.score(s).label, self.model.predict(s).label)
            })
            .collect()
    }
}
