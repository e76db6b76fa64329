use anyhow::Result;
use colored::Colorize;
use std::io::Write;
use std::time::Duration;

use super::ScenarioResult;

fn success_rate(results: &[ScenarioResult]) -> f64 {
    let passed = results.iter().filter(|r| r.passed).count();
    let passed = u32::try_from(passed).unwrap_or(u32::MAX);
    let total = u32::try_from(results.len()).unwrap_or(u32::MAX).max(1);
    f64::from(passed) / f64::from(total) * 100.0
}

/// # Errors
///
/// Propagates write failures.
pub fn generate_console_report(
    w: &mut dyn Write,
    results: &[ScenarioResult],
    total_duration: Duration,
) -> Result<()> {
    writeln!(w)?;
    writeln!(w, "{}", "📊 Logic Test Results Summary".bright_cyan().bold())?;
    writeln!(w, "{}", "==============================".cyan())?;

    let total_tests = results.len();
    let passed_tests = results.iter().filter(|r| r.passed).count();
    let failed_tests = total_tests - passed_tests;

    writeln!(w, "Total scenarios: {total_tests}")?;
    writeln!(w, "Passed: {}", passed_tests.to_string().green())?;
    writeln!(w, "Failed: {}", failed_tests.to_string().red())?;
    writeln!(w, "Success rate: {:.1}%", success_rate(results))?;
    writeln!(w, "Total time: {total_duration:?}")?;
    writeln!(w)?;

    for result in results {
        let status = if result.passed {
            "✅ PASS".green()
        } else {
            "❌ FAIL".red()
        };

        writeln!(
            w,
            "{} {} (seed {})",
            status,
            result.scenario_name.bold(),
            result.seed
        )?;
        writeln!(
            w,
            "   Iterations: {}/{} successful",
            result.successful_iterations, result.iterations_run
        )?;
        writeln!(w, "   Average time: {:?}", result.average_duration)?;

        if !result.failures.is_empty() {
            writeln!(w, "   Failures:")?;
            for failure in &result.failures {
                writeln!(w, "     • {}", failure.red())?;
            }
        }
        writeln!(w)?;
    }

    let played: Vec<&ScenarioResult> = results.iter().filter(|r| !r.games.is_empty()).collect();
    if !played.is_empty() {
        writeln!(w, "{}", "🧩 Play Summary".bright_yellow().bold())?;
        writeln!(w, "{}", "===============".yellow())?;
        for result in played {
            writeln!(
                w,
                "{} seed {}: win {:.0}% | attempts {:.1} | symptoms {:.1}",
                result.scenario_name,
                result.seed,
                result.win_rate() * 100.0,
                result.mean_attempts(),
                result.mean_symptoms()
            )?;
        }
    }
    Ok(())
}

/// # Errors
///
/// Propagates serialization and write failures.
pub fn generate_json_report(w: &mut dyn Write, results: &[ScenarioResult]) -> Result<()> {
    let json_output = serde_json::to_string_pretty(results)?;
    writeln!(w, "{json_output}")?;
    Ok(())
}

/// # Errors
///
/// Propagates write failures.
pub fn generate_markdown_report(w: &mut dyn Write, results: &[ScenarioResult]) -> Result<()> {
    writeln!(w, "# ADHD Wordle Logic Test Results\n")?;

    let total_tests = results.len();
    let passed_tests = results.iter().filter(|r| r.passed).count();

    writeln!(w, "## Summary\n")?;
    writeln!(w, "- **Total scenarios**: {total_tests}")?;
    writeln!(w, "- **Passed**: {passed_tests}")?;
    writeln!(w, "- **Failed**: {}", total_tests - passed_tests)?;
    writeln!(w, "- **Success rate**: {:.1}%\n", success_rate(results))?;

    writeln!(w, "## Detailed Results\n")?;

    for result in results {
        let status = if result.passed { "✅" } else { "❌" };

        writeln!(w, "### {status} {} (seed {})\n", result.scenario_name, result.seed)?;
        writeln!(
            w,
            "- **Iterations**: {}/{} successful",
            result.successful_iterations, result.iterations_run
        )?;
        writeln!(w, "- **Average time**: {:?}", result.average_duration)?;
        writeln!(w, "- **Win rate**: {:.0}%", result.win_rate() * 100.0)?;

        if !result.failures.is_empty() {
            writeln!(w, "- **Failures**:")?;
            for failure in &result.failures {
                writeln!(w, "  - {failure}")?;
            }
        }
        writeln!(w)?;
    }
    Ok(())
}

/// One row per played game.
///
/// # Errors
///
/// Propagates write failures.
pub fn generate_csv_report(w: &mut dyn Write, results: &[ScenarioResult]) -> Result<()> {
    writeln!(
        w,
        "scenario,seed,won,attempts,time_secs,ending,symptoms,notifications,forgotten_rows,power_ups,distraction_clicks,lookup_retries,resets"
    )?;
    for result in results {
        for game in &result.games {
            writeln!(
                w,
                "{},{},{},{},{},{},{},{},{},{},{},{},{}",
                result.scenario_name,
                game.seed,
                game.won,
                game.attempts,
                game.time_taken_secs,
                game.ending.as_deref().unwrap_or(""),
                game.total_symptoms(),
                game.notifications,
                game.forgotten_rows,
                game.power_ups_used,
                game.distraction_clicks,
                game.connectivity_retries,
                game.resets
            )?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::player::PlayReport;

    fn sample(passed: bool) -> ScenarioResult {
        ScenarioResult {
            scenario_name: "Smoke Test".to_string(),
            seed: 42,
            passed,
            iterations_run: 2,
            successful_iterations: if passed { 2 } else { 1 },
            failures: if passed {
                Vec::new()
            } else {
                vec!["boom".to_string()]
            },
            average_duration: Duration::from_millis(3),
            performance_data: vec![Duration::from_millis(3)],
            games: vec![PlayReport {
                won: true,
                attempts: 4,
                ending: Some("Solved".into()),
                ..PlayReport::new(42)
            }],
        }
    }

    fn render(f: impl Fn(&mut dyn Write) -> Result<()>) -> String {
        let mut buf: Vec<u8> = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn console_report_lists_failures_and_play_summary() {
        let results = [sample(true), sample(false)];
        let out = render(|w| generate_console_report(w, &results, Duration::from_secs(1)));
        assert!(out.contains("Total scenarios: 2"));
        assert!(out.contains("boom"));
        assert!(out.contains("Play Summary"));
    }

    #[test]
    fn markdown_report_has_sections() {
        let out = render(|w| generate_markdown_report(w, &[sample(true)]));
        assert!(out.contains("# ADHD Wordle Logic Test Results"));
        assert!(out.contains("Win rate**: 100%"));
    }

    #[test]
    fn csv_report_has_one_row_per_game() {
        let out = render(|w| generate_csv_report(w, &[sample(true), sample(true)]));
        assert_eq!(out.lines().count(), 3);
        assert!(out.lines().nth(1).unwrap().starts_with("Smoke Test,42,true,4"));
    }

    #[test]
    fn json_report_round_trips_names() {
        let out = render(|w| generate_json_report(w, &[sample(true)]));
        assert!(out.contains("\"scenario_name\": \"Smoke Test\""));
    }
}
