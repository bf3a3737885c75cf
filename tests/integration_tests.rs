//! Integration tests for the sentiment scoring pipeline

use std::path::PathBuf;
use tweet_sentiment::{
    analyze_corpus, Aggregator, FoldStrategy, Lexicon, LoadError, Polarity, ScoringConfig,
    SentimentError,
};

fn fixture_path(filename: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(filename)
}

#[cfg(test)]
mod tests {
    use super::*;

    const STRATEGIES: [FoldStrategy; 3] =
        [FoldStrategy::Atomic, FoldStrategy::Mutex, FoldStrategy::Channel];

    #[test]
    fn test_scenario_end_to_end() {
        let lexicon = Lexicon::load(fixture_path("lexicon.csv")).expect("lexicon should load");

        for fold in STRATEGIES {
            let aggregator = Aggregator::new(ScoringConfig::default().with_fold(fold));
            let total = aggregator
                .run(&lexicon, fixture_path("scenario.txt"))
                .expect("run should succeed");
            assert!(
                (total - 4.5).abs() < 1e-9,
                "{:?} fold: expected 4.5, got {}",
                fold,
                total
            );
        }
    }

    #[test]
    fn test_analyze_tweets_report() {
        let report = analyze_corpus(
            fixture_path("lexicon.csv"),
            fixture_path("tweets.txt"),
            &ScoringConfig::default().with_workers(4),
        )
        .expect("analysis should succeed");

        assert!((report.total_score - 5.5).abs() < 1e-9, "got {}", report.total_score);
        assert_eq!(report.polarity, Polarity::Positive);

        let meta = &report.metadata;
        assert_eq!(meta.lexicon_entries, 8);
        assert_eq!(meta.record_count, 7);
        assert_eq!(meta.token_count, 29);
        assert_eq!(meta.matched_tokens, 10);
        assert_eq!(meta.workers, 4);
        assert_eq!(meta.fold, FoldStrategy::Atomic);
        assert!(meta.lexicon_source.ends_with("lexicon.csv"));
        assert!(meta.records_source.ends_with("tweets.txt"));
        assert!(meta.processing_time_ms >= 0.0);
    }

    #[test]
    fn test_report_serializes_to_json() {
        let report = analyze_corpus(
            fixture_path("lexicon.csv"),
            fixture_path("scenario.txt"),
            &ScoringConfig::default(),
        )
        .expect("analysis should succeed");

        let json = serde_json::to_value(&report).expect("report should serialize");
        assert_eq!(json["polarity"], "Positive");
        assert_eq!(json["metadata"]["record_count"], 3);
        assert_eq!(json["metadata"]["fold"], "Atomic");
    }

    #[test]
    fn test_empty_record_file() {
        let report = analyze_corpus(
            fixture_path("lexicon.csv"),
            fixture_path("empty.txt"),
            &ScoringConfig::default(),
        )
        .expect("analysis should succeed");

        assert_eq!(report.total_score, 0.0);
        assert_eq!(report.polarity, Polarity::Neutral);
        assert_eq!(report.metadata.record_count, 0);
    }

    #[test]
    fn test_duplicate_lexicon_entries() {
        let lexicon = Lexicon::load(fixture_path("duplicates.csv")).expect("lexicon should load");
        assert_eq!(lexicon.score("a"), 2.0);
        assert_eq!(lexicon.score("b"), 0.5);
        assert_eq!(lexicon.len(), 2);
    }

    #[test]
    fn test_malformed_lexicon_aborts_analysis() {
        let err = analyze_corpus(
            fixture_path("missing_separator.csv"),
            fixture_path("tweets.txt"),
            &ScoringConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            SentimentError::Load(LoadError::MissingSeparator { line_number: 2, .. })
        ));

        let err = Lexicon::load(fixture_path("invalid_score.csv")).unwrap_err();
        match err {
            LoadError::InvalidScore { line_number, value } => {
                assert_eq!(line_number, 2);
                assert_eq!(value, "very");
            }
            other => panic!("expected InvalidScore, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_files() {
        let err = analyze_corpus(
            fixture_path("no_such_lexicon.csv"),
            fixture_path("tweets.txt"),
            &ScoringConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, SentimentError::Load(LoadError::Io { .. })));

        let err = analyze_corpus(
            fixture_path("lexicon.csv"),
            fixture_path("no_such_tweets.txt"),
            &ScoringConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, SentimentError::RecordSource { .. }));
    }

    #[test]
    fn test_permutations_give_same_total() {
        let lexicon = Lexicon::load(fixture_path("lexicon.csv")).expect("lexicon should load");
        let base = [
            "happy days",
            "sad and bad",
            "I love this, great stuff",
            "terrible terrible",
            "neutral words only",
            "Hate. HATE!",
        ];

        // Scores are multiples of 0.5 and sum exactly in any order
        let expected: f64 = base
            .iter()
            .map(|r| tweet_sentiment::scoring::score_record(&lexicon, r).score)
            .sum();

        let mut records: Vec<String> = Vec::new();
        for rotation in 0..base.len() {
            let mut rotated: Vec<&str> = base.to_vec();
            rotated.rotate_left(rotation);
            records.clear();
            for _ in 0..500 {
                records.extend(rotated.iter().map(|s| s.to_string()));
            }
            records.reverse();

            for fold in STRATEGIES {
                let stats = Aggregator::new(ScoringConfig::default().with_fold(fold))
                    .run_records(&lexicon, &records)
                    .expect("run should succeed");
                assert_eq!(stats.total, expected * 500.0, "{:?} fold, rotation {}", fold, rotation);
                assert_eq!(stats.record_count, 3_000);
            }
        }
    }

    #[test]
    fn test_fractional_scores_within_tolerance() {
        let lexicon = Lexicon::from_entries([("up", 0.1), ("down", -0.3)]);
        let records: Vec<String> = (0..10_000)
            .map(|i| if i % 3 == 0 { "down".to_string() } else { "up up".to_string() })
            .collect();
        let sequential: f64 = records
            .iter()
            .map(|r| tweet_sentiment::scoring::score_record(&lexicon, r).score)
            .sum();

        for fold in STRATEGIES {
            let stats = Aggregator::new(ScoringConfig::default().with_fold(fold).with_workers(8))
                .run_records(&lexicon, &records)
                .expect("run should succeed");
            assert!(
                (stats.total - sequential).abs() < 1e-6,
                "{:?} fold: {} vs sequential {}",
                fold,
                stats.total,
                sequential
            );
        }
    }
}
