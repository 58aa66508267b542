use anyhow::Result;
use colored::*;
use flights_pipeline::{CheckOutcome, RunSummary};
use serde_json::json;

pub fn print_run_summary(summary: &RunSummary, format: &str) -> Result<()> {
    match format {
        "json" => println!("{}", serde_json::to_string_pretty(summary)?),
        _ => print_text_summary(summary),
    }
    Ok(())
}

fn print_text_summary(summary: &RunSummary) {
    print_success(&format!("Valid flights: {}", summary.accepted));
    print_info(&format!("JSON written to: {}", summary.output.display()));

    match &summary.diagnostics {
        Some(path) => println!(
            "{} Errors written to: {} ({} rejected)",
            "✗".red().bold(),
            path.display(),
            summary.rejected
        ),
        None => print_success("No invalid lines found."),
    }
}

pub fn print_check_report(outcome: &CheckOutcome, format: &str) -> Result<()> {
    match format {
        "json" => print_json_check(outcome)?,
        _ => print_text_check(outcome),
    }
    Ok(())
}

fn print_text_check(outcome: &CheckOutcome) {
    let result = &outcome.result;

    println!("\n{}", "═".repeat(60));
    println!("{}", "  FLIGHT SCHEDULE CHECK".bold());
    println!("{}", "═".repeat(60));

    if result.is_clean() {
        println!("\n{} {}", "✓".green().bold(), "All rows valid".green().bold());
    } else {
        println!("\n{} {}", "✗".red().bold(), "Invalid rows found".red().bold());
        println!("\n{}", "Diagnostics:".red().bold());
        for diagnostic in &result.diagnostics {
            println!("  {}", diagnostic.to_string().red());
        }
    }

    println!("\n{}", "Summary:".bold());
    println!("  Sources:  {}", outcome.sources.len());
    println!("  Accepted: {}", result.accepted_count());
    println!("  Rejected: {}", result.rejected_count());
    println!("  Skipped:  {}", result.skipped);
    println!("{}", "═".repeat(60));
}

fn print_json_check(outcome: &CheckOutcome) -> Result<()> {
    let result = &outcome.result;
    let output = json!({
        "passed": result.is_clean(),
        "sources": outcome.sources,
        "diagnostics": result.diagnostics,
        "summary": {
            "accepted": result.accepted_count(),
            "rejected": result.rejected_count(),
            "skipped": result.skipped,
        }
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message.green());
}

pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}
