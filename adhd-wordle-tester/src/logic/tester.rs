use adhd_wordle_game::Session;
use anyhow::Result;
use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

use super::invariants::check_fresh_round;
use super::player::{BotPlayer, PlayReport};
use super::scenarios::ScenarioPlan;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub scenario_name: String,
    pub seed: u64,
    pub passed: bool,
    pub iterations_run: usize,
    pub successful_iterations: usize,
    pub failures: Vec<String>,
    #[serde(with = "duration_serde")]
    pub average_duration: Duration,
    #[serde(with = "duration_vec_serde")]
    pub performance_data: Vec<Duration>,
    #[serde(default)]
    pub games: Vec<PlayReport>,
}

impl ScenarioResult {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        let won = self.games.iter().filter(|g| g.won).count();
        ratio(won, self.games.len())
    }

    #[must_use]
    pub fn mean_attempts(&self) -> f64 {
        let total: usize = self.games.iter().map(|g| g.attempts).sum();
        ratio(total, self.games.len())
    }

    #[must_use]
    pub fn mean_symptoms(&self) -> f64 {
        let total: usize = self.games.iter().map(PlayReport::total_symptoms).sum();
        ratio(total, self.games.len())
    }
}

fn ratio(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    let part = u32::try_from(part).unwrap_or(u32::MAX);
    let whole = u32::try_from(whole).unwrap_or(u32::MAX);
    f64::from(part) / f64::from(whole)
}

pub struct LogicTester {
    verbose: bool,
}

impl LogicTester {
    #[must_use]
    pub const fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    pub async fn run_scenario(
        &self,
        plan: &ScenarioPlan,
        seeds: &[u64],
        iterations: usize,
    ) -> Vec<ScenarioResult> {
        let mut results = Vec::new();

        for &seed in seeds {
            if self.verbose {
                println!(
                    "🧪 Testing scenario: {} (policy: {} seed: {})",
                    plan.name.bright_white(),
                    plan.policy.label(),
                    seed
                );
            }
            results.push(self.run_single_scenario(plan, seed, iterations).await);
        }

        results
    }

    async fn run_single_scenario(
        &self,
        plan: &ScenarioPlan,
        seed: u64,
        iterations: usize,
    ) -> ScenarioResult {
        let mut successes = 0;
        let mut failures = Vec::new();
        let mut performance_data = Vec::new();
        let mut games = Vec::new();

        for i in 0..iterations {
            let start_time = Instant::now();
            let iteration_seed = seed.wrapping_add(u64::try_from(i).unwrap_or(u64::MAX));

            let outcome = run_plan(plan, iteration_seed)
                .await
                .and_then(|report| evaluate_expectations(plan, &report).map(|()| report));
            match outcome {
                Ok(report) => {
                    successes += 1;
                    let duration = start_time.elapsed();
                    performance_data.push(duration);
                    if self.verbose {
                        println!(
                            "  ✅ Iteration {}/{} passed ({duration:?}) attempts:{} won:{} symptoms:{}",
                            i + 1,
                            iterations,
                            report.attempts,
                            report.won,
                            report.total_symptoms()
                        );
                    }
                    games.push(report);
                }
                Err(err) => {
                    let message = format!("Iteration {} (seed {iteration_seed}): {err:#}", i + 1);
                    if self.verbose {
                        println!("  ❌ {}", message.clone().red());
                    }
                    failures.push(message);
                }
            }
        }

        let average_duration = if performance_data.is_empty() {
            Duration::ZERO
        } else {
            performance_data.iter().sum::<Duration>()
                / u32::try_from(performance_data.len()).unwrap_or(1)
        };

        ScenarioResult {
            scenario_name: plan.name.to_string(),
            seed,
            passed: failures.is_empty(),
            iterations_run: iterations,
            successful_iterations: successes,
            failures,
            average_duration,
            performance_data,
            games,
        }
    }
}

/// Play one seeded game per the plan.
///
/// # Errors
///
/// Fails when the plan's tuning is invalid.
pub async fn run_plan(plan: &ScenarioPlan, seed: u64) -> Result<PlayReport> {
    let mut session = Session::from_seed(plan.config.clone(), plan.settings, seed)?;
    let dictionary = plan.network.dictionary();
    let mut bot = BotPlayer::new(plan.policy, seed);
    let mut report = PlayReport::new(seed);

    if let Some(reset_after) = plan.reset_after_ms {
        bot.play(&mut session, &dictionary, reset_after, &mut report)
            .await;
        session.reset();
        report.resets += 1;
        if let Err(violation) = check_fresh_round(&session) {
            report.invariant_failures.push(violation.to_string());
        }
        session.drain_events();
    }
    bot.play(&mut session, &dictionary, plan.limit_ms, &mut report)
        .await;
    log::debug!(
        "seed {seed}: {} after {} attempts in {}s ({} lookups)",
        report.ending.as_deref().unwrap_or("unfinished"),
        report.attempts,
        report.time_taken_secs,
        dictionary.calls()
    );
    Ok(report)
}

fn evaluate_expectations(plan: &ScenarioPlan, report: &PlayReport) -> Result<()> {
    for expectation in &plan.expectations {
        expectation(report)?;
    }
    Ok(())
}

mod duration_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_millis().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = u64::deserialize(deserializer)?;
        Ok(Duration::from_millis(millis))
    }
}

mod duration_vec_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(durations: &[Duration], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let millis: Vec<u128> = durations.iter().map(Duration::as_millis).collect();
        millis.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<Duration>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = Vec::<u64>::deserialize(deserializer)?;
        Ok(millis.into_iter().map(Duration::from_millis).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::scenarios::get_scenario;

    #[tokio::test]
    async fn smoke_plan_passes_for_a_few_seeds() {
        let plan = get_scenario("smoke").unwrap();
        let tester = LogicTester::new(false);
        let results = tester.run_scenario(&plan, &[1, 2], 2).await;
        assert_eq!(results.len(), 2);
        for result in &results {
            assert!(result.passed, "{:?}", result.failures);
            assert_eq!(result.games.len(), 2);
        }
    }

    #[tokio::test]
    async fn reset_plan_records_one_reset() {
        let plan = get_scenario("reset-hygiene").unwrap();
        let report = run_plan(&plan, 9).await.unwrap();
        assert_eq!(report.resets, 1);
        assert!(report.finished);
        assert!(report.invariant_failures.is_empty(), "{:?}", report.invariant_failures);
    }

    #[test]
    fn result_serializes_durations_as_millis() {
        let result = ScenarioResult {
            scenario_name: "Smoke Test".into(),
            seed: 1,
            passed: true,
            iterations_run: 1,
            successful_iterations: 1,
            failures: Vec::new(),
            average_duration: Duration::from_millis(12),
            performance_data: vec![Duration::from_millis(12)],
            games: vec![PlayReport::new(1)],
        };
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"average_duration\":12"));
        let back: ScenarioResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back.average_duration, Duration::from_millis(12));
        assert!((back.win_rate()).abs() < f64::EPSILON);
    }
}
