//! In-memory "try it" history, newest first.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use super::report::SentimentReport;
use super::sentiment::Sentiment;

/// Default number of analyses kept
pub const DEFAULT_HISTORY_CAPACITY: usize = 8;

/// A past analysis, reduced to what the history panel shows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub text: String,
    pub rule_label: Sentiment,
    /// Rulebook score rounded to two decimals
    pub rule_score: f64,
    pub bayes_label: Sentiment,
    pub timestamp: DateTime<Utc>,
}

impl From<&SentimentReport> for HistoryEntry {
    fn from(report: &SentimentReport) -> Self {
        Self {
            text: report.sentence.clone(),
            rule_label: report.rulebook.label,
            rule_score: (report.rulebook.score * 100.0).round() / 100.0,
            bayes_label: report.bayes.label,
            timestamp: report.timestamp,
        }
    }
}

/// Bounded history of analyses
#[derive(Debug, Clone)]
pub struct AnalysisHistory {
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
}

impl Default for AnalysisHistory {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }
}

impl AnalysisHistory {
    /// Creates a history holding at most `capacity` entries (minimum 1)
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Records a report. Blank sentences are ignored.
    ///
    /// Returns `true` when the report was recorded.
    pub fn record(&mut self, report: &SentimentReport) -> bool {
        if report.sentence.trim().is_empty() {
            return false;
        }
        self.entries.push_front(HistoryEntry::from(report));
        self.entries.truncate(self.capacity);
        true
    }

    pub fn entries(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.front()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
