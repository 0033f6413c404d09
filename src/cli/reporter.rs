// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! CLI output reporter with colored formatting

use super::runner::CheckResult;
use crate::geometry::{Peak, PeakKind, Polyhedron};
use colored::*;
use std::time::Duration;

/// CLI reporter for formatted output
pub struct Reporter;

impl Reporter {
    /// Report a solid's counts and face breakdown
    pub fn report_solid(title: &str, polyhedron: &Polyhedron) {
        println!("\n{}", "━".repeat(80).bright_black());
        println!("{} {}", format!("{}:", title).bold(), Self::label(polyhedron).cyan());
        println!("{}", "━".repeat(80).bright_black());
        println!(
            "  {} {}",
            "Vertices:".bright_black(),
            polyhedron.num_vertices().to_string().cyan()
        );
        println!(
            "  {} {}",
            "Edges:".bright_black(),
            polyhedron.edges().len().to_string().cyan()
        );
        println!(
            "  {} {}",
            "Faces:".bright_black(),
            polyhedron.num_faces().to_string().cyan()
        );
        for (sides, count) in polyhedron.num_faces_by_sides() {
            println!(
                "    {} {}",
                format!("{}-gons:", sides).bright_black(),
                count
            );
        }
        println!("{}", "━".repeat(80).bright_black());
    }

    /// Report the faces of a solid with their index and side count
    pub fn report_faces(polyhedron: &Polyhedron) {
        println!("\n{}", "Faces:".bold());
        for face in polyhedron.face_list() {
            let c = face.centroid();
            println!(
                "  {:>3} {} {:>2} sides  centroid ({:>7.3}, {:>7.3}, {:>7.3})",
                face.index().to_string().cyan(),
                "│".bright_black(),
                face.num_sides(),
                c.x,
                c.y,
                c.z
            );
        }
    }

    /// Report detected peaks, numbered for `--peak`
    pub fn report_peaks(peaks: &[Peak]) {
        if peaks.is_empty() {
            println!("{}", "No peaks found".yellow());
            return;
        }
        println!("\n{}", "Peaks:".bold());
        for (i, peak) in peaks.iter().enumerate() {
            let root = match peak.kind() {
                PeakKind::Pyramid { apex } => format!("apex vertex {}", apex),
                PeakKind::Cupola { top } | PeakKind::Rotunda { top } => {
                    format!("top face {}", top)
                }
            };
            println!(
                "  {:>3} {} {:<8} {:<16} {} faces, {}-edge boundary",
                i.to_string().cyan(),
                "│".bright_black(),
                peak.kind().name(),
                root,
                peak.faces().len(),
                peak.boundary().len()
            );
        }
    }

    /// Report catalog check results; returns the number of failures
    pub fn report_check(results: &[CheckResult], total: Duration) -> usize {
        println!("\n{}", "━".repeat(80).bright_black());
        let mut failures = 0;
        for result in results {
            if result.passed() {
                println!(
                    "{} {:<40} {}",
                    "✅".green(),
                    result.name,
                    Self::format_duration(result.duration).bright_black()
                );
            } else {
                failures += 1;
                let reason = match &result.validation {
                    Ok(validation) => validation.failures().join(", "),
                    Err(message) => message.clone(),
                };
                println!("{} {:<40} {}", "❌".red(), result.name, reason.red());
            }
        }
        println!("{}", "━".repeat(80).bright_black());

        let summary = format!(
            "{} passed, {} failed in {}",
            results.len() - failures,
            failures,
            Self::format_duration(total)
        );
        if failures == 0 {
            println!("{}", summary.green().bold());
        } else {
            println!("{}", summary.red().bold());
        }
        failures
    }

    /// Report error
    pub fn report_error(message: &str) {
        eprintln!("\n{} {}", "❌ Error:".red().bold(), message);
    }

    /// Report warning
    pub fn report_warning(message: &str) {
        println!("\n{} {}", "⚠️  Warning:".yellow().bold(), message);
    }

    /// Report info
    pub fn report_info(message: &str) {
        println!("{} {}", "ℹ️".bright_blue(), message);
    }

    /// Print success message
    pub fn success(message: &str) {
        println!("{} {}", "✅".green(), message.green());
    }

    fn label(polyhedron: &Polyhedron) -> String {
        polyhedron.name().unwrap_or("(unnamed)").to_string()
    }

    /// Format duration for display
    pub fn format_duration(duration: Duration) -> String {
        let micros = duration.as_micros();

        if micros < 1_000 {
            format!("{}µs", micros)
        } else if micros < 1_000_000 {
            format!("{:.2}ms", micros as f64 / 1_000.0)
        } else {
            format!("{:.2}s", micros as f64 / 1_000_000.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(
            Reporter::format_duration(Duration::from_micros(500)),
            "500µs"
        );
        assert_eq!(
            Reporter::format_duration(Duration::from_millis(5)),
            "5.00ms"
        );
        assert_eq!(Reporter::format_duration(Duration::from_secs(2)), "2.00s");
    }

    #[test]
    fn test_report_check_counts_failures() {
        let results = vec![CheckResult {
            name: "broken",
            validation: Err("Structural error: open".to_string()),
            duration: Duration::from_millis(1),
        }];
        assert_eq!(Reporter::report_check(&results, Duration::from_millis(1)), 1);
    }
}
