//! # Engine Module
//!
//! Two independent sentiment judges over one shared tokenizer.
//!
//! ## Components
//! - `tokenizer`: lowercase word splitting shared by both judges
//! - `lexicon`: fixed word weights, modifiers and negators
//! - `rulebook`: lexicon scorer with negation and intensifier handling
//! - `corpus`: seed training sentences
//! - `naive_bayes`: multinomial Naive Bayes trained once on the corpus
//! - `sentiment`: labels and per-class score triples
//! - `report`: side-by-side output structures
//! - `analyzer`: runs both judges on a sentence
//! - `history`: bounded in-memory record of past analyses

pub mod analyzer;
pub mod corpus;
pub mod history;
pub mod lexicon;
pub mod naive_bayes;
pub mod report;
pub mod rulebook;
pub mod sentiment;
pub mod tokenizer;

pub use analyzer::SentimentAnalyzer;
pub use history::{AnalysisHistory, HistoryEntry};
pub use lexicon::Lexicon;
pub use naive_bayes::{NaiveBayes, NbResult};
pub use report::{score_disagreement_picks, ComparisonRow, SentimentReport};
pub use rulebook::{rulebook, Rulebook, RulebookResult};
pub use sentiment::{ClassScores, Sentiment};
pub use tokenizer::tokenize;
