//! Generate the randomized trial schedules for both study cohorts.
//!
//! Runs the generation pipeline once per selected cohort and writes one
//! schedule file each. Both cohorts reseed from the same value so either
//! run can be reproduced on its own.

use std::path::Path;
use std::time::Instant;

use trialgen::config::{cohort_by_name, primary_cohort, supplemental_cohort, CohortConfig};
use trialgen::constants::DEFAULT_SEED;
use trialgen::export::write_schedule;
use trialgen::schedule::generate_schedule;
use trialgen::statistics::{aggregate_statistics, save_statistics};

struct Args {
    seed: u64,
    output_dir: String,
    cohort: Option<String>,
    stats: bool,
}

fn parse_args() -> Args {
    let args: Vec<String> = std::env::args().collect();
    let mut seed = DEFAULT_SEED;
    let mut output_dir = String::from("data/schedules");
    let mut cohort: Option<String> = None;
    let mut stats = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" => {
                i += 1;
                if i < args.len() {
                    seed = args[i].parse().unwrap_or_else(|_| {
                        eprintln!("Invalid --seed value: {}", args[i]);
                        std::process::exit(1);
                    });
                }
            }
            "--output" => {
                i += 1;
                if i < args.len() {
                    output_dir = args[i].clone();
                }
            }
            "--cohort" => {
                i += 1;
                if i < args.len() {
                    cohort = Some(args[i].clone());
                }
            }
            "--stats" => {
                stats = true;
            }
            "--help" | "-h" => {
                println!(
                    "Usage: trialgen-generate [--seed S] [--output DIR] [--cohort NAME] [--stats]"
                );
                println!();
                println!("Options:");
                println!("  --seed S       RNG seed (default: {})", DEFAULT_SEED);
                println!("  --output DIR   Output directory (default: data/schedules)");
                println!("  --cohort NAME  Generate one cohort: primary | supplemental (default: both)");
                println!("  --stats        Also write per-cohort assignment statistics JSON");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!(
                    "Usage: trialgen-generate [--seed S] [--output DIR] [--cohort NAME] [--stats]"
                );
                std::process::exit(1);
            }
        }
        i += 1;
    }

    Args {
        seed,
        output_dir,
        cohort,
        stats,
    }
}

fn main() {
    let args = parse_args();

    let cohorts: Vec<CohortConfig> = match args.cohort.as_deref() {
        None => vec![primary_cohort(), supplemental_cohort()],
        Some(name) => match cohort_by_name(name) {
            Some(cfg) => vec![cfg],
            None => {
                eprintln!("Unknown cohort: '{}'. Available: primary, supplemental", name);
                std::process::exit(1);
            }
        },
    };

    println!("Trial schedule generation (seed={})", args.seed);

    let total_start = Instant::now();
    for cfg in &cohorts {
        let cohort_start = Instant::now();
        let rows = generate_schedule(cfg, args.seed);
        let stats = aggregate_statistics(&rows, cfg.name, args.seed);

        println!();
        println!(
            "Cohort '{}': {} subjects × 16 trials, subjects {}..={}",
            cfg.name,
            stats.num_subjects,
            cfg.first_subject,
            cfg.first_subject + stats.num_subjects as u32 - 1,
        );
        for c in &stats.conditions {
            println!(
                "  cond {}: {:>2} subjects ({}/{}, {:>2} SAME per subject)",
                c.condition, c.num_subjects, c.partner, c.similarity, c.same_trials_per_subject,
            );
        }

        let path = Path::new(&args.output_dir).join(cfg.output_file);
        if let Err(e) = write_schedule(&rows, &path) {
            eprintln!("Failed to write {}: {}", path.display(), e);
            std::process::exit(1);
        }
        println!("  Output:  {} ({} rows)", path.display(), rows.len());

        if args.stats {
            let stats_path = Path::new(&args.output_dir)
                .join(format!("{}_statistics.json", cfg.name));
            save_statistics(&stats, &stats_path.to_string_lossy());
            println!("  Stats:   {}", stats_path.display());
        }

        println!(
            "  Elapsed: {:.1} ms",
            cohort_start.elapsed().as_secs_f64() * 1000.0
        );
    }

    println!(
        "\nTotal: {:.1} ms for {} cohort(s)",
        total_start.elapsed().as_secs_f64() * 1000.0,
        cohorts.len(),
    );
}
