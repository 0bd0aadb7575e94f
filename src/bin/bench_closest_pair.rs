//! Benchmark planar-closest-pair at large scales.
//!
//! Run with: cargo run --release --features bench --bin bench_closest_pair
//!
//! Usage:
//!   bench_closest_pair              Run default size (100k)
//!   bench_closest_pair 100k 1m 10m  Run multiple sizes
//!   bench_closest_pair --clustered  Use clustered points
//!   bench_closest_pair -n 10        Run 10 iterations (for profiling)
//!   bench_closest_pair --check      Cross-check against the O(n^2) oracle

use clap::Parser;
use planar_closest_pair::{compute_with, validation::validate, ClosestPairConfig, Point2};
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::io::{self, Write};
use std::time::Instant;

fn parse_count(s: &str) -> Result<usize, String> {
    let s = s.to_lowercase();
    let (num_str, multiplier) = if s.ends_with('m') {
        (&s[..s.len() - 1], 1_000_000)
    } else if s.ends_with('k') {
        (&s[..s.len() - 1], 1_000)
    } else {
        (s.as_str(), 1)
    };

    num_str
        .parse::<f64>()
        .map(|n| (n * multiplier as f64) as usize)
        .map_err(|e| format!("Invalid number '{}': {}", s, e))
}

#[derive(Parser)]
#[command(name = "bench_closest_pair")]
#[command(about = "Benchmark planar-closest-pair at various scales")]
struct Args {
    /// Point counts to benchmark (e.g., 100k, 1m, 10M)
    #[arg(value_parser = parse_count)]
    sizes: Vec<usize>,

    /// Random seed
    #[arg(short, long, default_value_t = 12345)]
    seed: u64,

    /// Use clustered points instead of uniform ones
    #[arg(long)]
    clustered: bool,

    /// Cross-check against the O(n^2) oracle (slow, max 50k)
    #[arg(long)]
    check: bool,

    /// Skip the non-finite input scan
    #[arg(long)]
    no_validate: bool,

    /// Number of iterations to run (useful for profiling)
    #[arg(short = 'n', long, default_value_t = 1)]
    repeat: usize,
}

fn uniform_points<R: Rng>(n: usize, rng: &mut R) -> Vec<Point2> {
    (0..n)
        .map(|_| {
            let x: f64 = rng.gen_range(-1e6..1e6);
            let y: f64 = rng.gen_range(-1e6..1e6);
            Point2::new(x, y)
        })
        .collect()
}

fn clustered_points<R: Rng>(n: usize, rng: &mut R) -> Vec<Point2> {
    let num_clusters = (n / 1000).clamp(4, 256);
    let centers: Vec<Point2> = (0..num_clusters)
        .map(|_| {
            let x: f64 = rng.gen_range(-1e6..1e6);
            let y: f64 = rng.gen_range(-1e6..1e6);
            Point2::new(x, y)
        })
        .collect();

    (0..n)
        .map(|i| {
            let c = centers[i % num_clusters];
            let dx: f64 = rng.gen_range(-100.0..100.0);
            let dy: f64 = rng.gen_range(-100.0..100.0);
            Point2::new(c.x + dx, c.y + dy)
        })
        .collect()
}

fn generate_points(n: usize, seed: u64, clustered: bool) -> Vec<Point2> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    if clustered {
        clustered_points(n, &mut rng)
    } else {
        uniform_points(n, &mut rng)
    }
}

fn format_rate(count: usize, ms: f64) -> String {
    if ms <= 0.0 {
        return "N/A".to_string();
    }
    let per_sec = count as f64 / (ms / 1000.0);
    if per_sec >= 1_000_000.0 {
        format!("{:.2}M/s", per_sec / 1_000_000.0)
    } else if per_sec >= 1_000.0 {
        format!("{:.1}k/s", per_sec / 1000.0)
    } else {
        format!("{:.0}/s", per_sec)
    }
}

fn format_num(n: usize) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{}k", n / 1_000)
    } else {
        format!("{}", n)
    }
}

struct BenchResult {
    n: usize,
    time_ms: f64,
    distance: f64,
}

fn run_once(points: &[Point2], config: ClosestPairConfig) -> BenchResult {
    let t0 = Instant::now();
    let pair = compute_with(points, config).expect("closest pair should succeed");
    let time_ms = t0.elapsed().as_secs_f64() * 1000.0;

    BenchResult {
        n: points.len(),
        time_ms,
        distance: pair.distance,
    }
}

fn main() {
    let args = Args::parse();

    println!("planar-closest-pair Benchmark");
    println!("=============================\n");

    let sizes: Vec<usize> = if args.sizes.is_empty() {
        vec![100_000]
    } else {
        args.sizes
    };

    let point_type = if args.clustered { "clustered" } else { "uniform" };

    println!("Configuration:");
    println!("  seed = {}", args.seed);
    println!("  point type = {}", point_type);
    println!(
        "  sizes = {:?}",
        sizes.iter().map(|&n| format_num(n)).collect::<Vec<_>>()
    );
    if args.no_validate {
        println!("  validate_finite = disabled");
    }
    if args.repeat > 1 {
        println!("  repeat = {}", args.repeat);
    }

    let config = ClosestPairConfig {
        validate_finite: !args.no_validate,
    };

    let mut results: Vec<BenchResult> = Vec::new();

    for n in &sizes {
        println!("\n{}", "=".repeat(60));
        println!("Benchmarking n = {}", format_num(*n));
        println!("{}", "=".repeat(60));

        let t_gen = Instant::now();
        let points = generate_points(*n, args.seed, args.clustered);
        let gen_time = t_gen.elapsed().as_secs_f64() * 1000.0;
        println!("Point generation: {:.1}ms", gen_time);

        let mut times: Vec<f64> = Vec::with_capacity(args.repeat);
        let mut last_result: Option<BenchResult> = None;

        for iter in 0..args.repeat {
            if args.repeat > 1 {
                print!("  Iteration {}/{}... ", iter + 1, args.repeat);
                io::stdout().flush().unwrap();
            }

            let result = run_once(&points, config.clone());
            times.push(result.time_ms);

            if args.repeat > 1 {
                println!("{:.1}ms", result.time_ms);
            }

            last_result = Some(result);
        }

        let result = last_result.unwrap();

        println!("\nResults:");
        if args.repeat > 1 {
            let min = times.iter().cloned().fold(f64::INFINITY, f64::min);
            let max = times.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
            let avg = times.iter().sum::<f64>() / times.len() as f64;
            println!("  Min time:      {:>8.1}ms", min);
            println!("  Max time:      {:>8.1}ms", max);
            println!("  Avg time:      {:>8.1}ms", avg);
            println!("  Throughput:    {:>8} (avg)", format_rate(result.n, avg));
        } else {
            println!("  Total time:    {:>8.1}ms", result.time_ms);
            println!(
                "  Throughput:    {:>8}",
                format_rate(result.n, result.time_ms)
            );
        }
        println!("  Min distance:  {:>8.6e}", result.distance);

        if args.check && *n <= 50_000 {
            println!("\nCross-checking against the exhaustive scan...");
            let pair = compute_with(&points, config.clone()).unwrap();
            let t0 = Instant::now();
            let report = validate(&points, &pair);
            let check_time = t0.elapsed().as_secs_f64() * 1000.0;
            println!("  Oracle time:   {:>8.1}ms", check_time);
            println!("  Verdict:       {}", report.summary());
            if !report.is_valid() {
                eprintln!("WARNING: validation failed for n={}: {}", n, report);
            }
        } else if args.check {
            println!("\n  (skipping check for n > 50k - the oracle is quadratic)");
        }

        results.push(result);
    }

    if results.len() > 1 {
        println!("\n\n{}", "=".repeat(60));
        println!("SUMMARY");
        println!("{}", "=".repeat(60));
        println!("{:>10} | {:>10} | {:>12}", "n", "time", "throughput");
        println!("{:-<10}-+-{:-<10}-+-{:-<12}", "", "", "");

        for r in &results {
            println!(
                "{:>10} | {:>9.1}ms | {:>12}",
                format_num(r.n),
                r.time_ms,
                format_rate(r.n, r.time_ms)
            );
        }
    }

    println!("\nBenchmark complete.");
}
