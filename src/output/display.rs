//! Display functions for command results

use colored::Colorize;

use crate::commands::{BuildSummary, FetchSummary};

/// Print the build summary
pub fn print_build_summary(summary: &BuildSummary) {
    println!(
        "{} Wrote {} answers to {}",
        "✓".green().bold(),
        summary.answers_written.to_string().bold(),
        summary.answers_path.display()
    );
    println!(
        "{} Wrote {} allowed words to {}",
        "✓".green().bold(),
        summary.allowed_written.to_string().bold(),
        summary.allowed_path.display()
    );
}

/// Print the fetch summary
pub fn print_fetch_summary(summary: &FetchSummary) {
    println!(
        "{} Wrote {} definitions to {}",
        "✓".green().bold(),
        summary.total.to_string().bold(),
        summary.output_path.display()
    );

    if summary.failed > 0 {
        println!(
            "  {} {} of {} words ended up with an empty definition",
            "!".yellow().bold(),
            summary.failed,
            summary.total
        );
    } else if summary.total > 0 {
        println!(
            "  {} definitions found for all {} words",
            "✓".green(),
            summary.found
        );
    }
}
