//! Kuhn poker trainer binary.
//!
//! Usage:
//!   cargo run --release --bin solve_kuhn -- [OPTIONS]
//!
//! Options:
//!   --iterations <N>     Number of hands to simulate (default: 1,000,000)
//!   --seed <N>           Random seed (optional)
//!
//! Set RUST_LOG=debug to see the running average utility during training.

use std::env;

use indicatif::{ProgressBar, ProgressStyle};

use kuhn_cfr::cfr::{CfrConfig, CfrSolver};
use kuhn_cfr::games::kuhn::{card_name, DECK};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    let mut iterations: u64 = 1_000_000;
    let mut seed: Option<u64> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--iterations" | "-i" => {
                i += 1;
                if i < args.len() {
                    iterations = args[i].parse().unwrap_or(iterations);
                }
            }
            "--seed" | "-s" => {
                i += 1;
                if i < args.len() {
                    seed = args[i].parse().ok();
                }
            }
            "--help" | "-h" => {
                print_help();
                return;
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
                print_help();
                return;
            }
        }
        i += 1;
    }

    println!("=================================================");
    println!("  Kuhn Poker CFR+ Trainer");
    println!("=================================================");
    println!();
    println!("Training over {} hands...", iterations);

    let mut config = CfrConfig::default();
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    let mut solver = CfrSolver::new(config);

    let bar = ProgressBar::new(iterations);
    bar.set_style(
        ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len} {msg}")
            .expect("progress template is valid")
            .progress_chars("##-"),
    );

    let callback_interval = (iterations / 100).max(1);
    let stats = solver.train_with_callback(iterations, callback_interval, |stats| {
        bar.set_position(stats.iterations);
        bar.set_message(format!("avg utility {:+.5}", stats.average_utility));
    });
    bar.finish_and_clear();

    println!(
        "Done: {} hands in {:.2}s ({:.0} hands/s), {} info sets",
        stats.iterations, stats.elapsed_seconds, stats.iterations_per_second, stats.info_sets
    );
    println!("Average utility (player 0): {:+.5}", stats.average_utility);

    println!();
    println!("--- Opening strategies (player 0, no actions yet) ---");
    for card in DECK {
        println!();
        println!("Holding the {} ({}/):", card_name(card), card);
        print_strategy(&solver, &format!("{}/", card));
    }

    println!();
    println!("--- Responses to an opening bet (player 1) ---");
    for card in DECK {
        println!();
        println!("Holding the {} ({}/b):", card_name(card), card);
        print_strategy(&solver, &format!("{}/b", card));
    }
}

/// Print one information set's average strategy as percentages.
fn print_strategy(solver: &CfrSolver, info_key: &str) {
    match solver.get_average_strategy(info_key) {
        Some([pass, bet]) => {
            println!("  - PASS (check/fold): {:.2}%", pass * 100.0);
            println!("  - BET  (bet/call):   {:.2}%", bet * 100.0);
        }
        None => {
            println!("  - no strategy learned for {} (never visited)", info_key);
        }
    }
}

fn print_help() {
    println!("Kuhn Poker CFR+ Trainer");
    println!();
    println!("Usage: solve_kuhn [OPTIONS]");
    println!();
    println!("Options:");
    println!("  --iterations, -i <N>   Number of hands to simulate (default: 1,000,000)");
    println!("  --seed, -s <N>         Random seed for reproducible runs");
    println!("  --help, -h             Show this help");
}
