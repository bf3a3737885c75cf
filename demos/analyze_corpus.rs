//! Example: Score one record file against a lexicon
//!
//! Usage:
//!   cargo run --release --example analyze_corpus -- [--jobs N] [--fold atomic|mutex|channel] [--json] <lexicon> <records>

use std::env;
use tweet_sentiment::{analyze_corpus, FoldStrategy, ScoringConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut args: Vec<String> = env::args().skip(1).collect();

    let mut json = false;
    let mut config = ScoringConfig::default();
    let mut paths: Vec<String> = Vec::new();

    while let Some(a) = args.first().cloned() {
        args.remove(0);
        match a.as_str() {
            "--json" => json = true,
            "--jobs" => {
                let v = args
                    .first()
                    .ok_or("--jobs requires a value")?
                    .parse::<usize>()?;
                args.remove(0);
                config = config.with_workers(v);
            }
            "--fold" => {
                let name = args.first().ok_or("--fold requires a value")?;
                let fold = FoldStrategy::from_name(name)
                    .ok_or_else(|| format!("unknown fold strategy: {}", name))?;
                args.remove(0);
                config = config.with_fold(fold);
            }
            "--help" | "-h" => {
                eprintln!(
                    "Usage: analyze_corpus [--jobs N] [--fold atomic|mutex|channel] [--json] <lexicon> <records>\n\
                     \n\
                     --jobs N   Worker threads (default: rayon global pool)\n\
                     --fold S   Running-total fold strategy (default: atomic)\n\
                     --json     Emit the report as JSON\n"
                );
                return Ok(());
            }
            _ => paths.push(a),
        }
    }

    if paths.len() != 2 {
        eprintln!("ERROR: Provide a lexicon path and a records path. Use --help for usage.");
        std::process::exit(2);
    }

    let report = analyze_corpus(&paths[0], &paths[1], &config)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        let meta = &report.metadata;
        println!("Sentiment Report:");
        println!("  Lexicon: {} ({} entries)", meta.lexicon_source, meta.lexicon_entries);
        println!("  Records: {} ({} records)", meta.records_source, meta.record_count);
        println!("  Overall score: {:.4}", report.total_score);
        println!("  Overall sentiment: {}", report.polarity);
        println!("  Mean per record: {:.4}", report.mean_score());
        println!(
            "  Lexicon coverage: {:.1}% of {} tokens",
            meta.coverage() * 100.0,
            meta.token_count
        );
        println!(
            "  Processing time: {:.2} ms ({} workers, {} fold)",
            meta.processing_time_ms,
            meta.workers,
            meta.fold.name()
        );
    }

    Ok(())
}
