//! Mood Detective sentiment engine.
//!
//! A lexicon rulebook and a toy Naive Bayes classifier judge the mood of a
//! sentence independently; callers render the two verdicts side by side.

pub mod config;
pub mod engine;
pub mod error;
pub mod logging;

#[cfg(test)]
mod tests;

pub use engine::{rulebook, tokenize, NaiveBayes, Sentiment, SentimentAnalyzer};
pub use error::AppError;
