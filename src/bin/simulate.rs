//! Guild balance simulator CLI.
//!
//! Run Monte Carlo playthroughs to analyze idle pacing and quest balance.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                     # Default: 200 runs, full story
//!   cargo run --bin simulate -- -n 50 --story 3  # 50 runs to the third quest
//!   cargo run --bin simulate -- --seed 42        # Reproducible run

use guildhall::build_info;
use guildhall::simulator::{run_simulation, SimConfig};
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();
    let config = parse_args(&args);

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║                GUILDHALL BALANCE SIMULATOR                    ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!(
        "  build {} ({})",
        build_info::BUILD_COMMIT,
        build_info::BUILD_DATE
    );
    println!();
    println!("Configuration:");
    println!("  Runs:           {}", config.num_runs);
    println!("  Day Budget:     {}", config.max_days);
    println!("  Tick Every:     {}s", config.tick_secs);
    println!("  Story Target:   {}", config.target_story);
    println!("  Quests:         {}", config.send_quests);
    println!("  Recruiting:     {}", config.hire_recruits);
    if let Some(seed) = config.seed {
        println!("  Seed:           {}", seed);
    }
    println!();
    println!("Running simulation...");
    println!();

    let report = run_simulation(&config);

    println!("{}", report.to_text());

    // Optionally save JSON report
    if args.iter().any(|a| a == "--json") {
        let json = report.to_json();
        let filename = format!(
            "sim_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        std::fs::write(&filename, json).expect("Failed to write JSON report");
        println!("JSON report saved to: {}", filename);
    }
}

fn parse_args(args: &[String]) -> SimConfig {
    let mut config = SimConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--runs" => {
                if i + 1 < args.len() {
                    config.num_runs = args[i + 1].parse().unwrap_or(200);
                    i += 1;
                }
            }
            "-d" | "--days" => {
                if i + 1 < args.len() {
                    config.max_days = args[i + 1].parse().unwrap_or(14.0);
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "-t" | "--tick" => {
                if i + 1 < args.len() {
                    config.tick_secs = args[i + 1].parse().unwrap_or(5).max(1);
                    i += 1;
                }
            }
            "--story" => {
                if i + 1 < args.len() {
                    if let Ok(steps) = args[i + 1].parse::<u32>() {
                        config.target_story = steps;
                        i += 1;
                    }
                }
            }
            "--no-quests" => {
                config.send_quests = false;
            }
            "--no-recruits" => {
                config.hire_recruits = false;
            }
            "-v" | "--verbose" => {
                config.verbosity = 2;
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "--quick" => {
                config = SimConfig::story_pace_test(2);
            }
            "--economy" => {
                config = SimConfig::economy_test(100);
            }
            _ => {}
        }
        i += 1;
    }

    config
}

fn print_help() {
    println!("Guildhall Balance Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -n, --runs <N>      Number of simulated playthroughs (default: 200)");
    println!("    -d, --days <D>      Simulated day budget per run (default: 14)");
    println!("    -s, --seed <S>      Random seed for reproducibility");
    println!("    -t, --tick <T>      Seconds between ticks (default: 5)");
    println!("    --story <N>         Completed quests that finish a run (default: all)");
    println!("    --no-quests         Manager never sends parties out");
    println!("    --no-recruits       Manager never hires");
    println!("    -v, --verbose       Per-run output");
    println!("    --json              Save JSON report");
    println!("    --quick             Quick pacing check (50 runs to the second quest)");
    println!("    --economy           Job income only (100 runs, 7 days, no quests)");
    println!("    -h, --help          Show this help");
    println!();
    println!("EXAMPLES:");
    println!("    cargo run --bin simulate                     # Default run");
    println!("    cargo run --bin simulate -- -n 50 --story 3  # 50 runs, three quests");
    println!("    cargo run --bin simulate -- --seed 42        # Reproducible");
    println!("    cargo run --bin simulate -- --economy        # Income pacing only");
}
