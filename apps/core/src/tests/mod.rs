//! Test Module
//!
//! Cross-module test suite for the Mood Detective engine.
//!
//! ## Test Categories
//! - `engine_tests`: tokenizer, rulebook and Naive Bayes properties
//! - `analyzer_tests`: side-by-side reports, comparison rows, history
//! - `config_tests`: environment and `.env` loading

pub mod analyzer_tests;
