//! Text User Interface (TUI) utilities.
//!
//! Handles formatted output for the CLI.

use crate::math::dot_product::{available_variants, C_IMPL_AVAILABLE, REFERENCE_VARIANT};
use crate::utils::VariantResult;
use std::time::Duration;
use terminal_size::{terminal_size, Width};

/// Get the current terminal width, constrained to a reasonable range
fn get_term_width() -> usize {
    if let Some((Width(w), _)) = terminal_size() {
        (w as usize).clamp(40, 200)
    } else {
        80
    }
}

/// Truncate string with ellipsis if it exceeds width (character-wise)
fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let mut result: String = s.chars().take(width.saturating_sub(3)).collect();
        result.push_str("...");
        result
    }
}

/// Name shown in tables; C variants carry the compiler that built them.
fn display_name(name: &str) -> String {
    match (name.starts_with("c-"), super::C_COMPILER_NAME) {
        (true, Some(compiler)) => format!("{} ({})", name, compiler),
        _ => name.to_string(),
    }
}

fn format_duration(d: Duration) -> String {
    let ns = d.as_nanos();
    if ns < 10_000 {
        format!("{} ns", ns)
    } else if ns < 10_000_000 {
        format!("{:.2} µs", ns as f64 / 1e3)
    } else {
        format!("{:.2} ms", ns as f64 / 1e6)
    }
}

/// Print results table for a single vector size.
///
/// The first row is the baseline for speedup and relative error.
pub fn print_results_table(results: &[VariantResult], size: usize) {
    let Some(baseline) = results.first() else {
        return;
    };

    let term_width = get_term_width();
    let variant_col_width = term_width.saturating_sub(64).max(15);
    let table_width = variant_col_width + 58;

    let baseline_time = baseline.avg_time.as_nanos() as f64;
    let baseline_result = baseline.result_sample;

    println!("  Size: {} ({} runs)", size, baseline.runs);
    println!("  {}", "─".repeat(table_width));
    println!(
        "  {:<v_width$} {:>12} {:>12} {:>12} {:>9} {:>10}",
        "Variant",
        "Average",
        "Min",
        "Max",
        "Speedup",
        "Rel. Error",
        v_width = variant_col_width
    );
    println!("  {}", "─".repeat(table_width));

    for result in results {
        let avg_ns = result.avg_time.as_nanos() as f64;
        let speedup = if avg_ns > 0.0 { baseline_time / avg_ns } else { 0.0 };

        let relative_error = match (result.result_sample, baseline_result) {
            (Some(res), Some(base)) => {
                let diff = (res - base).abs();
                if base.abs() > 1e-12 {
                    diff / base.abs()
                } else {
                    diff
                }
            }
            _ => 0.0,
        };

        println!(
            "  {:<v_width$} {:>12} {:>12} {:>12} {:>8.2}x {:>10.2e}",
            truncate(&display_name(&result.name), variant_col_width),
            format_duration(result.avg_time),
            format_duration(result.min_time),
            format_duration(result.max_time),
            speedup,
            relative_error,
            v_width = variant_col_width
        );
    }
    println!();
}

/// Print the application header
pub fn print_header() {
    let term_width = get_term_width().min(80);
    let title = " llama-dot kernel benchmarks ";
    let padding = term_width.saturating_sub(title.len() + 2) / 2;
    let right_padding = term_width.saturating_sub(padding + title.len());

    let border = "═".repeat(term_width);

    println!("╔{}╗", border);
    println!(
        "║{}{}{}║",
        " ".repeat(padding),
        title,
        " ".repeat(right_padding)
    );
    println!("╚{}╝", border);
    println!();
}

/// Print the help message
pub fn print_help() {
    println!("Usage: llama-dot <COMMAND> [OPTIONS]");
    println!();
    println!("Commands:");
    println!("  dot X W        Dot product of two JSON lists of floats");
    println!("  verify         Check every kernel variant against '{}'", REFERENCE_VARIANT);
    println!("  bench          Time every kernel variant");
    println!();
    println!("Options:");
    println!("  --list, -l     List available kernel variants");
    println!("  --help, -h     Show this help message");
    println!("  --sizes SIZES  Comma-separated vector sizes for bench");
    println!("                 (default: 64,256,1024,4096,16384)");
    println!("  --iter N       Samples per variant for bench (default: 30)");
    println!("  --seed N       Seed for the random input vectors (default: 42)");
    println!();
    println!("Environment:");
    println!("  LLAMA_DOT_KERNEL       Kernel variant used by 'dot' (default: original)");
    println!("  LLAMA_DOT_CHUNK_SIZE   Chunk size for the 'chunked' kernel (default: 4096)");
    println!("  RUST_LOG               Log filter, e.g. RUST_LOG=llama_dot=trace");
    println!();
    println!("Examples:");
    println!("  llama-dot dot '[1.0, 2.0, 3.0]' '[4.0, 5.0, 6.0]'");
    println!("  llama-dot bench --sizes 128,512 --seed 12345");
}

/// Print the list of kernel variants available in this build
pub fn print_available_variants() {
    println!("Available kernel variants:");
    println!();
    for variant in available_variants() {
        println!(
            "  {:<20} - {}",
            display_name(variant.name),
            variant.description
        );
    }
    if !C_IMPL_AVAILABLE {
        println!();
        println!("  (C kernel not compiled: no compatible C compiler at build time)");
    }
}
