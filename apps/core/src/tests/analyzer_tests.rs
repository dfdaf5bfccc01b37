//! Analyzer Tests
//!
//! Side-by-side reports, the comparison activity and the try-it history.

use crate::engine::corpus::COMPARISON_SENTENCES;
use crate::engine::{
    score_disagreement_picks, AnalysisHistory, Lexicon, NaiveBayes, Sentiment, SentimentAnalyzer,
    SentimentReport,
};

#[cfg(test)]
mod report_tests {
    use super::*;

    #[test]
    fn test_report_serializes_wire_shape() {
        let analyzer = SentimentAnalyzer::new();
        let report = analyzer.analyze("I love this game it is awesome");

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["rulebook"]["label"], "Positive");
        assert_eq!(json["bayes"]["label"], "Positive");
        assert!(json["bayes"]["probs"]["pos"].is_f64());
        assert!(json["bayes"]["probs"]["neu"].is_f64());
        assert!(json["bayes"]["logs"]["neg"].is_f64());
        assert_eq!(json["bayes"]["words"][0], "i");
        assert_eq!(json["agree"], true);
    }

    #[test]
    fn test_report_round_trips_through_json() {
        let analyzer = SentimentAnalyzer::new();
        let report = analyzer.analyze("I dislike the slow app");

        let json = serde_json::to_string(&report).unwrap();
        let decoded: SentimentReport = serde_json::from_str(&json).unwrap();

        assert_eq!(decoded.rulebook, report.rulebook);
        assert_eq!(decoded.bayes.label, Sentiment::Negative);
        assert_eq!(decoded.feeling_words, vec!["dislike", "slow"]);
    }

    #[test]
    fn test_empty_sentence_report() {
        let analyzer = SentimentAnalyzer::new();
        let report = analyzer.analyze("");

        assert_eq!(report.rulebook.label, Sentiment::Neutral);
        assert!(report.rulebook.explain.is_empty());
        assert!(report.bayes.words.is_empty());
        assert!(report.feeling_words.is_empty());
    }

    #[test]
    fn test_custom_parts() {
        let lexicon = Lexicon::new();
        let model = NaiveBayes::train([
            ("sunny and bright", Sentiment::Positive),
            ("cloudy", Sentiment::Neutral),
            ("stormy and dark", Sentiment::Negative),
        ]);
        let analyzer = SentimentAnalyzer::with_parts(&lexicon, &model);

        let report = analyzer.analyze("stormy");
        assert_eq!(report.bayes.label, Sentiment::Negative);
        assert_eq!(analyzer.model().vocabulary_size(), 6);
    }
}

#[cfg(test)]
mod comparison_tests {
    use super::*;

    #[test]
    fn test_perfect_round() {
        let analyzer = SentimentAnalyzer::new();
        let rows = analyzer.compare(COMPARISON_SENTENCES);
        let picks: Vec<bool> = rows.iter().map(|r| r.disagree).collect();

        assert_eq!(score_disagreement_picks(&rows, &picks), rows.len());
    }

    #[test]
    fn test_all_unticked() {
        let analyzer = SentimentAnalyzer::new();
        let rows = analyzer.compare(COMPARISON_SENTENCES);

        // two of the six lines are real disagreements
        assert_eq!(score_disagreement_picks(&rows, &[]), 4);
    }

    #[test]
    fn test_compare_owned_strings() {
        let analyzer = SentimentAnalyzer::new();
        let sentences = vec!["I feel sad".to_string(), "What a wonderful day".to_string()];

        let rows = analyzer.compare(&sentences);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].bayes, Sentiment::Negative);
        assert_eq!(rows[1].rulebook, Sentiment::Positive);
    }
}

#[cfg(test)]
mod history_tests {
    use super::*;

    #[test]
    fn test_history_keeps_latest_eight() {
        let analyzer = SentimentAnalyzer::new();
        let mut history = AnalysisHistory::default();

        for i in 0..10 {
            history.record(&analyzer.analyze(&format!("sentence number {}", i)));
        }

        assert_eq!(history.len(), 8);
        assert_eq!(history.latest().unwrap().text, "sentence number 9");
        assert_eq!(
            history.entries().last().unwrap().text,
            "sentence number 2"
        );

        history.clear();
        assert!(history.is_empty());
    }
}
