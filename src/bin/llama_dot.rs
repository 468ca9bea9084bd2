//! Developer CLI for the dot product bridge.
//!
//! Usage:
//!   llama-dot dot '[1.0, 2.0]' '[3.0, 4.0]'   # Run the bridge on JSON input
//!   llama-dot verify                          # Check kernel variants agree
//!   llama-dot bench --sizes 1024,4096         # Time kernel variants
//!   llama-dot --list                          # List kernel variants
//!   llama-dot --help                          # Show help

use llama_dot::config::BridgeConfig;
use llama_dot::host::HostValue;
use llama_dot::math::dot_product::bench::{random_inputs, run_all_benchmarks};
use llama_dot::prelude::{Bridge, KernelRegistry};
use llama_dot::tui;
use llama_dot::utils::TimingConfig;
use log::info;
use std::env;
use std::process;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    let mut show_list = false;
    let mut show_help = false;
    let mut sample_sizes: Vec<usize> = vec![64, 256, 1024, 4096, 16384];
    let mut runs: usize = 30;
    let mut seed: u64 = 42;
    let mut positional: Vec<String> = Vec::new();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--list" | "-l" => show_list = true,
            "--help" | "-h" => show_help = true,
            "--sizes" => {
                i += 1;
                if i < args.len() {
                    sample_sizes = args[i]
                        .split(',')
                        .filter_map(|s| s.trim().parse().ok())
                        .collect();
                }
            }
            "--iter" => {
                i += 1;
                if i < args.len() {
                    runs = args[i].parse().unwrap_or(30);
                }
            }
            "--seed" => {
                i += 1;
                if i < args.len() {
                    seed = args[i].parse().unwrap_or(42);
                }
            }
            // JSON arguments such as "-1.0" or "[-1.0]" are positional.
            arg if !arg.starts_with("--") => positional.push(arg.to_string()),
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                process::exit(1);
            }
        }
        i += 1;
    }

    if show_help {
        tui::print_help();
        return;
    }

    if show_list {
        tui::print_available_variants();
        return;
    }

    match positional.first().map(String::as_str) {
        Some("dot") => run_dot(&positional[1..]),
        Some("verify") => run_verify(seed),
        Some("bench") => run_bench(&sample_sizes, runs, seed),
        Some(other) => {
            eprintln!("Unknown command: {}", other);
            process::exit(1);
        }
        None => tui::print_help(),
    }
}

fn run_dot(raw_args: &[String]) {
    let mut values = Vec::with_capacity(raw_args.len());
    for raw in raw_args {
        match serde_json::from_str::<serde_json::Value>(raw) {
            Ok(json) => values.push(HostValue::from(json)),
            Err(e) => {
                eprintln!("Argument {:?} is not valid JSON: {}", raw, e);
                process::exit(1);
            }
        }
    }

    let bridge = match BridgeConfig::from_env().and_then(|config| Bridge::new(&config)) {
        Ok(bridge) => bridge,
        Err(e) => {
            eprintln!("{}: {}", e.host_class(), e);
            process::exit(1);
        }
    };

    match bridge.call(&values) {
        Ok(result) => println!("{}", result),
        Err(e) => {
            eprintln!("{}: {}", e.host_class(), e);
            process::exit(1);
        }
    }
}

fn run_verify(seed: u64) {
    let registry = KernelRegistry::new();
    info!("verifying {} kernel variants", registry.all().len());

    for size in [0, 1, 1023, 100_003] {
        if let Err(e) = registry.verify(size, seed) {
            eprintln!("  ❌ size {}: {}", size, e);
            process::exit(1);
        }
        println!("  ✅ size {}: all variants agree", size);
    }
}

fn run_bench(sizes: &[usize], runs: usize, seed: u64) {
    tui::print_header();

    let config = TimingConfig {
        runs_per_variant: runs.max(1),
        seed,
        ..TimingConfig::default()
    };

    for &size in sizes {
        let (x, w) = random_inputs(size, seed);
        let mut results = run_all_benchmarks(&x, &w, &config);
        // Reference first, then fastest to slowest.
        if results.len() > 1 {
            results[1..].sort_by_key(|r| r.avg_time);
        }
        tui::print_results_table(&results, size);
    }

    println!("Note: Speedup is relative to the 'original' variant.");
}
