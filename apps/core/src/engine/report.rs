//! Report structures produced by the analyzer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::naive_bayes::NbResult;
use super::rulebook::RulebookResult;
use super::sentiment::Sentiment;

/// Both judges' verdicts on one sentence
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentReport {
    /// Original sentence
    pub sentence: String,

    /// Rulebook verdict with its explanation trace
    pub rulebook: RulebookResult,

    /// Naive Bayes verdict with probabilities
    pub bayes: NbResult,

    /// Tokens carrying lexicon polarity
    pub feeling_words: Vec<String>,

    /// Whether both judges picked the same label
    pub agree: bool,

    /// Processing time in microseconds
    pub processing_time_us: u64,

    /// Timestamp of analysis
    pub timestamp: DateTime<Utc>,
}

impl SentimentReport {
    /// One-line summary for logs and the terminal.
    ///
    /// Percentages are truncated toward zero.
    pub fn summary(&self) -> String {
        format!(
            "Rulebook: {} (score {:.2}) | Bayes: {} (P(pos) {}% · P(neu) {}% · P(neg) {}%) | {}",
            self.rulebook.label,
            self.rulebook.score,
            self.bayes.label,
            percent(self.bayes.probs.pos),
            percent(self.bayes.probs.neu),
            percent(self.bayes.probs.neg),
            if self.agree { "agree" } else { "disagree" }
        )
    }
}

fn percent(probability: f64) -> u32 {
    (probability * 100.0) as u32
}

/// One line of the "do the judges agree?" activity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonRow {
    pub sentence: String,
    pub rulebook: Sentiment,
    pub bayes: Sentiment,
    pub disagree: bool,
}

impl ComparisonRow {
    pub fn new(sentence: impl Into<String>, rulebook: Sentiment, bayes: Sentiment) -> Self {
        Self {
            sentence: sentence.into(),
            rulebook,
            bayes,
            disagree: rulebook != bayes,
        }
    }
}

/// Count rows where the player's "disagree" tick matches the real outcome.
///
/// Rows beyond the end of `picks` count as unticked.
pub fn score_disagreement_picks(rows: &[ComparisonRow], picks: &[bool]) -> usize {
    rows.iter()
        .enumerate()
        .filter(|(i, row)| picks.get(*i).copied().unwrap_or(false) == row.disagree)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comparison_row_disagreement() {
        let row = ComparisonRow::new("x", Sentiment::Neutral, Sentiment::Negative);
        assert!(row.disagree);

        let row = ComparisonRow::new("y", Sentiment::Positive, Sentiment::Positive);
        assert!(!row.disagree);
    }

    #[test]
    fn test_score_picks() {
        let rows = vec![
            ComparisonRow::new("a", Sentiment::Positive, Sentiment::Positive),
            ComparisonRow::new("b", Sentiment::Neutral, Sentiment::Negative),
            ComparisonRow::new("c", Sentiment::Negative, Sentiment::Negative),
        ];

        assert_eq!(score_disagreement_picks(&rows, &[false, true, false]), 3);
        assert_eq!(score_disagreement_picks(&rows, &[true, true, false]), 2);
        // missing picks are unticked
        assert_eq!(score_disagreement_picks(&rows, &[false, true]), 3);
        assert_eq!(score_disagreement_picks(&rows, &[]), 2);
    }

    #[test]
    fn test_percent_truncates() {
        assert_eq!(percent(0.8764), 87);
        assert_eq!(percent(0.0999), 9);
        assert_eq!(percent(1.0), 100);
    }
}
