//! Example: Score multiple record files against one lexicon in parallel
//!
//! Usage:
//!   cargo run --release --example analyze_batch -- [--jobs N] [--json] <lexicon> <records1> <records2> ...
//!
//! Notes:
//! - Parallelism is across files; each file's records are also scored on the same rayon pool.
//! - The lexicon is loaded once and shared by reference across all files.
//! - Default workers: (available CPU threads - 1), keeping one core free for the system.

use rayon::prelude::*;
use std::env;
use std::time::Instant;
use tweet_sentiment::{Aggregator, Lexicon, Polarity, ScoringConfig};

fn default_jobs() -> usize {
    let n = std::thread::available_parallelism().map(|v| v.get()).unwrap_or(1);
    std::cmp::max(1, n.saturating_sub(1))
}

fn percentile(mut xs: Vec<f32>, p: f32) -> Option<f32> {
    if xs.is_empty() {
        return None;
    }
    xs.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let idx = ((xs.len() - 1) as f32 * p.clamp(0.0, 1.0)).round() as usize;
    Some(xs[idx.min(xs.len() - 1)])
}

struct ItemOut {
    path: String,
    result: Result<(f64, usize), String>,
    processing_ms: f32,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut args: Vec<String> = env::args().skip(1).collect();

    let mut json = false;
    let mut jobs: Option<usize> = None;
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
                jobs = Some(std::cmp::max(1, v));
            }
            "--help" | "-h" => {
                eprintln!(
                    "Usage: analyze_batch [--jobs N] [--json] <lexicon> <records1> <records2> ...\n\
                     \n\
                     --jobs N   Parallel workers (default: CPU-1)\n\
                     --json     Emit one JSON object per line (JSONL)\n"
                );
                return Ok(());
            }
            _ => paths.push(a),
        }
    }

    if paths.len() < 2 {
        eprintln!("ERROR: Provide a lexicon and at least one records file. Use --help for usage.");
        std::process::exit(2);
    }

    let lexicon_path = paths.remove(0);
    let lexicon = Lexicon::load(&lexicon_path)?;

    let jobs = jobs.unwrap_or_else(default_jobs);
    eprintln!(
        "Batch: {} files, {} lexicon entries, jobs={}",
        paths.len(),
        lexicon.len(),
        jobs
    );

    let t0 = Instant::now();
    let pool = rayon::ThreadPoolBuilder::new().num_threads(jobs).build()?;

    // Files run on `pool`; the aggregator with no dedicated pool reuses it for records
    let aggregator = Aggregator::new(ScoringConfig::default());

    let outs: Vec<ItemOut> = pool.install(|| {
        paths
            .par_iter()
            .map(|path| {
                let started = Instant::now();
                let result = aggregator
                    .run_with_stats(&lexicon, path)
                    .map(|stats| (stats.total, stats.record_count))
                    .map_err(|e| e.to_string());
                ItemOut {
                    path: path.clone(),
                    result,
                    processing_ms: started.elapsed().as_secs_f32() * 1000.0,
                }
            })
            .collect()
    });

    for (idx, o) in outs.iter().enumerate() {
        match (&o.result, json) {
            (Ok((total, records)), true) => println!(
                "{}",
                serde_json::json!({
                    "file": o.path,
                    "total_score": total,
                    "polarity": Polarity::from_score(*total).label(),
                    "records": records,
                    "processing_time_ms": o.processing_ms,
                })
            ),
            (Err(e), true) => println!("{}", serde_json::json!({ "file": o.path, "error": e })),
            (Ok((total, records)), false) => println!(
                "[{}/{}] {}: score={:.4} ({}) records={} time={:.2}ms",
                idx + 1,
                outs.len(),
                o.path,
                total,
                Polarity::from_score(*total),
                records,
                o.processing_ms
            ),
            (Err(e), false) => println!("[{}/{}] {}: ERROR: {}", idx + 1, outs.len(), o.path, e),
        }
    }

    let ok_times: Vec<f32> = outs
        .iter()
        .filter(|o| o.result.is_ok())
        .map(|o| o.processing_ms)
        .collect();
    let wall_ms = t0.elapsed().as_secs_f64() * 1000.0;

    eprintln!("Done: ok={}/{} wall={:.0}ms", ok_times.len(), outs.len(), wall_ms);
    if !ok_times.is_empty() {
        let mean = ok_times.iter().sum::<f32>() / ok_times.len() as f32;
        let p50 = percentile(ok_times.clone(), 0.50).unwrap_or(mean);
        let p90 = percentile(ok_times.clone(), 0.90).unwrap_or(mean);
        eprintln!("processing_time_ms: mean={:.2} p50={:.2} p90={:.2}", mean, p50, p90);
    }

    Ok(())
}
