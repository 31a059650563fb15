use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::Command;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "setgraph workspace automation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the criterion benchmarks and write a markdown report
    Bench {
        /// Run quickly (lower sample size/time)
        #[arg(long, default_value_t = false)]
        quick: bool,

        /// Generate report only (skip running benchmarks)
        #[arg(long, default_value_t = false)]
        report_only: bool,
    },
}

const BENCHES: &[&str] = &["graph_benchmark", "clique_benchmark"];
const BASELINE: &str = "setgraph";

/// Subset of criterion's `estimates.json`.
#[derive(Deserialize)]
struct Estimates {
    mean: Estimate,
}

#[derive(Deserialize)]
struct Estimate {
    point_estimate: f64,
}

/// Subset of criterion's `benchmark.json`.
#[derive(Deserialize)]
struct BenchmarkInfo {
    #[serde(default)]
    throughput: Option<serde_json::Value>,
}

struct Measurement {
    mean_ns: f64,
    elements: Option<u64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Bench { quick, report_only } => {
            if !report_only {
                run_benchmarks(quick)?;
            }
            generate_report()?;
        }
    }

    Ok(())
}

fn run_benchmarks(quick: bool) -> Result<()> {
    for bench in BENCHES {
        println!("\n>>> Running {}", bench);
        let start = Instant::now();

        let mut cmd = Command::new("cargo");
        cmd.env("CARGO_INCREMENTAL", "0");
        cmd.args(["bench", "--bench", bench]);

        // Args for the test runner (Criterion) go after --
        cmd.arg("--");
        cmd.arg("--save-baseline").arg(BASELINE);

        if quick {
            cmd.arg("--measurement-time").arg("0.1");
            cmd.arg("--noplot");
            cmd.arg("--sample-size").arg("10");
        }

        let status = cmd
            .status()
            .with_context(|| format!("Failed to run bench {}", bench))?;

        if status.success() {
            println!("Finished {} in {:.2?}", bench, start.elapsed());
        } else {
            eprintln!("Warning: benchmark {} failed", bench);
        }
    }

    Ok(())
}

fn generate_report() -> Result<()> {
    println!("\n>>> Generating Report...");
    let criterion_dir = Path::new("target/criterion");
    if !criterion_dir.exists() {
        eprintln!("No criterion output found at {}", criterion_dir.display());
        return Ok(());
    }

    let mut results = BTreeMap::new();
    collect_results(criterion_dir, criterion_dir, &mut results)?;

    let report_path = Path::new("benchmark_results/report.md");
    if let Some(parent) = report_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(report_path)
        .with_context(|| format!("Failed to create {}", report_path.display()))?;

    writeln!(file, "# setgraph Benchmark Report")?;
    writeln!(file)?;
    writeln!(file, "| Workload | Mean time | Throughput |")?;
    writeln!(file, "|---|---|---|")?;

    for (workload, m) in &results {
        let throughput = match m.elements {
            Some(elements) => format_rate(elements as f64 * 1e9 / m.mean_ns, "elem/s"),
            None => format_rate(1e9 / m.mean_ns, "iter/s"),
        };
        writeln!(file, "| {} | {} | {} |", workload, format_time(m.mean_ns), throughput)?;
    }

    println!("Report written to {}", report_path.display());
    Ok(())
}

/// Walks the criterion output tree. Layout: `<workload...>/<baseline>/estimates.json`.
fn collect_results(root: &Path, dir: &Path, results: &mut BTreeMap<String, Measurement>) -> Result<()> {
    let Ok(entries) = fs::read_dir(dir) else {
        return Ok(());
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_results(root, &path, results)?;
            continue;
        }
        if path.file_name().and_then(|s| s.to_str()) != Some("estimates.json") {
            continue;
        }
        let Some(baseline_dir) = path.parent() else { continue };
        if baseline_dir.file_name().and_then(|s| s.to_str()) != Some(BASELINE) {
            continue;
        }
        let Some(workload_dir) = baseline_dir.parent() else { continue };
        let workload = workload_dir
            .strip_prefix(root)
            .unwrap_or(workload_dir)
            .display()
            .to_string();

        let estimates: Estimates = serde_json::from_str(&fs::read_to_string(&path)?)
            .with_context(|| format!("Malformed {}", path.display()))?;
        if estimates.mean.point_estimate <= 0.0 {
            continue;
        }

        let elements = fs::read_to_string(baseline_dir.join("benchmark.json"))
            .ok()
            .and_then(|content| serde_json::from_str::<BenchmarkInfo>(&content).ok())
            .and_then(|info| info.throughput)
            .and_then(|t| t.get("Elements").and_then(serde_json::Value::as_u64));

        results.insert(
            workload,
            Measurement {
                mean_ns: estimates.mean.point_estimate,
                elements,
            },
        );
    }

    Ok(())
}

fn format_time(ns: f64) -> String {
    if ns > 1_000_000.0 {
        format!("{:.2} ms", ns / 1_000_000.0)
    } else if ns > 1_000.0 {
        format!("{:.2} µs", ns / 1_000.0)
    } else {
        format!("{:.0} ns", ns)
    }
}

fn format_rate(rate: f64, unit: &str) -> String {
    if rate > 1_000_000.0 {
        format!("{:.2}M {}", rate / 1_000_000.0, unit)
    } else if rate > 1_000.0 {
        format!("{:.2}K {}", rate / 1_000.0, unit)
    } else {
        format!("{:.0} {}", rate, unit)
    }
}
