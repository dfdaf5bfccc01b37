//! Multinomial Naive Bayes judge.
//!
//! Trained once from the seed corpus into per-class word counts and priors.
//! Prediction sums Laplace-smoothed log-likelihoods over every token
//! (repeats included) and reports a softmax distribution for display.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;
use tracing::info;

use super::corpus::TRAINING_EXAMPLES;
use super::sentiment::{ClassScores, Sentiment};
use super::tokenizer::tokenize;

/// Stand-in for a zero prior so `ln` stays finite
const PRIOR_EPSILON: f64 = 1e-9;

static SHARED_MODEL: LazyLock<NaiveBayes> =
    LazyLock::new(|| NaiveBayes::train(TRAINING_EXAMPLES.iter().copied()));

/// Prediction for one sentence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NbResult {
    pub label: Sentiment,
    /// Softmax of `logs`, for display only
    pub probs: ClassScores,
    /// Unnormalized log-posteriors
    pub logs: ClassScores,
    /// Tokens the prediction was computed from
    pub words: Vec<String>,
}

/// Word statistics of one class
#[derive(Debug, Clone, Default)]
struct ClassTable {
    documents: usize,
    word_counts: HashMap<String, usize>,
    total_words: usize,
}

/// Trained, read-only Naive Bayes model
#[derive(Debug, Clone)]
pub struct NaiveBayes {
    priors: ClassScores,
    positive: ClassTable,
    neutral: ClassTable,
    negative: ClassTable,
    /// Token -> number of documents containing it, across all classes
    vocabulary: HashMap<String, usize>,
}

impl NaiveBayes {
    /// Train from labelled sentences
    pub fn train<'a, I>(examples: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, Sentiment)>,
    {
        let mut positive = ClassTable::default();
        let mut neutral = ClassTable::default();
        let mut negative = ClassTable::default();
        let mut vocabulary: HashMap<String, usize> = HashMap::new();

        for (text, label) in examples {
            let table = match label {
                Sentiment::Positive => &mut positive,
                Sentiment::Neutral => &mut neutral,
                Sentiment::Negative => &mut negative,
            };
            table.documents += 1;

            let words = tokenize(text);
            let unique: HashSet<&String> = words.iter().collect();
            for word in unique {
                *vocabulary.entry(word.clone()).or_insert(0) += 1;
            }
            for word in words {
                *table.word_counts.entry(word).or_insert(0) += 1;
                table.total_words += 1;
            }
        }

        let total_docs = positive.documents + neutral.documents + negative.documents;
        let prior = |table: &ClassTable| {
            if total_docs == 0 {
                0.0
            } else {
                table.documents as f64 / total_docs as f64
            }
        };
        let priors = ClassScores {
            pos: prior(&positive),
            neu: prior(&neutral),
            neg: prior(&negative),
        };

        info!(
            documents = total_docs,
            vocabulary = vocabulary.len(),
            "Trained Naive Bayes model"
        );

        Self {
            priors,
            positive,
            neutral,
            negative,
            vocabulary,
        }
    }

    /// Process-wide model trained on the seed corpus, built on first use
    pub fn shared() -> &'static NaiveBayes {
        &SHARED_MODEL
    }

    fn table(&self, class: Sentiment) -> &ClassTable {
        match class {
            Sentiment::Positive => &self.positive,
            Sentiment::Neutral => &self.neutral,
            Sentiment::Negative => &self.negative,
        }
    }

    pub fn priors(&self) -> ClassScores {
        self.priors
    }

    /// |V|: number of distinct training tokens
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Number of training documents containing `word`
    pub fn document_frequency(&self, word: &str) -> usize {
        self.vocabulary.get(word).copied().unwrap_or(0)
    }

    /// Occurrences of `word` across all training documents of `class`
    pub fn word_count(&self, class: Sentiment, word: &str) -> usize {
        self.table(class).word_counts.get(word).copied().unwrap_or(0)
    }

    /// Total token count of `class`
    pub fn total_words(&self, class: Sentiment) -> usize {
        self.table(class).total_words
    }

    pub fn documents(&self, class: Sentiment) -> usize {
        self.table(class).documents
    }

    /// Add-one smoothed P(word | class). Always strictly positive.
    pub fn word_probability(&self, class: Sentiment, word: &str) -> f64 {
        let count = self.word_count(class, word) as f64 + 1.0;
        let denominator = (self.total_words(class) + self.vocabulary_size()) as f64;
        // Empty model: denominator is 0, fall back to a uniform 1
        if denominator == 0.0 {
            return 1.0;
        }
        count / denominator
    }

    /// Unnormalized log-posterior of every class for the given tokens
    pub fn log_posteriors(&self, words: &[String]) -> ClassScores {
        let mut logs = ClassScores::default();
        for class in Sentiment::ALL {
            let prior = self.priors.get(class);
            let prior = if prior > 0.0 { prior } else { PRIOR_EPSILON };

            let log_p = words.iter().fold(prior.ln(), |acc, word| {
                acc + self.word_probability(class, word).ln()
            });
            logs.set(class, log_p);
        }
        logs
    }

    /// Classify a sentence
    pub fn predict(&self, sentence: &str) -> NbResult {
        let words = tokenize(sentence);
        let logs = self.log_posteriors(&words);

        NbResult {
            label: logs.arg_max(),
            probs: logs.softmax(),
            logs,
            words,
        }
    }
}
