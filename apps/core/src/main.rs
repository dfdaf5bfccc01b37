// Mood Detective demo entry point
// Runs both judges on the sentences given as arguments and prints JSON reports

use anyhow::Context;
use mood_detective_core::config::AppConfig;
use mood_detective_core::engine::corpus::COMPARISON_SENTENCES;
use mood_detective_core::engine::{AnalysisHistory, SentimentAnalyzer};
use mood_detective_core::logging;
use tracing::info;

fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env().context("Failed to load configuration")?;
    logging::init(&config).context("Failed to initialize logging")?;

    let analyzer = SentimentAnalyzer::new();
    let sentences: Vec<String> = std::env::args().skip(1).collect();

    if sentences.is_empty() {
        info!("No sentence given, running the comparison activity");
        let rows = analyzer.compare(COMPARISON_SENTENCES);
        println!(
            "{}",
            serde_json::to_string_pretty(&rows).context("Failed to encode comparison")?
        );
        return Ok(());
    }

    let mut history = AnalysisHistory::with_capacity(config.history_capacity);
    for sentence in &sentences {
        let report = analyzer.analyze(sentence);
        info!("{}", report.summary());
        history.record(&report);
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("Failed to encode report")?
        );
    }

    info!(recorded = history.len(), "Done");
    Ok(())
}
