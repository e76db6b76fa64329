//! Named scenario catalog: tuning, player policy, network and expectations.
use adhd_wordle_game::{GameConfig, Intensity, MAX_ATTEMPTS, PowerUpConfig, Settings};
use anyhow::Result;

use super::network::Network;
use super::player::{PlayReport, PlayerPolicy};

/// Virtual time a single game may take before the runner gives up on it.
pub const DEFAULT_LIMIT_MS: u64 = 420_000;

pub type Expectation = fn(&PlayReport) -> Result<()>;

#[derive(Debug, Clone)]
pub struct ScenarioPlan {
    pub key: &'static str,
    pub name: &'static str,
    pub settings: Settings,
    pub config: GameConfig,
    pub policy: PlayerPolicy,
    pub network: Network,
    /// Play this long, reset, then play the fresh round to the end.
    pub reset_after_ms: Option<u64>,
    pub limit_ms: u64,
    pub expectations: Vec<Expectation>,
}

impl ScenarioPlan {
    #[must_use]
    pub fn new(key: &'static str, name: &'static str) -> Self {
        Self {
            key,
            name,
            settings: Settings::default(),
            config: GameConfig::default(),
            policy: PlayerPolicy::Diligent,
            network: Network::Reliable,
            reset_after_ms: None,
            limit_ms: DEFAULT_LIMIT_MS,
            expectations: vec![finished_cleanly],
        }
    }

    #[must_use]
    pub const fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    #[must_use]
    pub fn with_config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub const fn with_policy(mut self, policy: PlayerPolicy) -> Self {
        self.policy = policy;
        self
    }

    #[must_use]
    pub const fn with_network(mut self, network: Network) -> Self {
        self.network = network;
        self
    }

    #[must_use]
    pub const fn with_reset_after(mut self, ms: u64) -> Self {
        self.reset_after_ms = Some(ms);
        self
    }

    #[must_use]
    pub fn with_expectation(mut self, expectation: Expectation) -> Self {
        self.expectations.push(expectation);
        self
    }

    /// Force every plan in a run to one intensity level.
    #[must_use]
    pub const fn with_intensity(mut self, intensity: Intensity) -> Self {
        self.settings.intensity = intensity;
        self
    }
}

fn finished_cleanly(report: &PlayReport) -> Result<()> {
    anyhow::ensure!(report.finished, "game did not finish within the time limit");
    anyhow::ensure!(
        report.invariant_failures.is_empty(),
        "invariants broken: {}",
        report.invariant_failures.join("; ")
    );
    Ok(())
}

fn consistent_ending(report: &PlayReport) -> Result<()> {
    match report.ending.as_deref() {
        Some("Solved") => anyhow::ensure!(report.won, "solved without the win flag"),
        Some("OutOfAttempts") => {
            anyhow::ensure!(
                !report.won && report.attempts == MAX_ATTEMPTS,
                "ran out after {} attempts",
                report.attempts
            );
        }
        Some("OutOfTime") => anyhow::ensure!(!report.won, "timed out but won"),
        other => anyhow::bail!("unexpected ending {other:?}"),
    }
    Ok(())
}

fn no_symptoms(report: &PlayReport) -> Result<()> {
    anyhow::ensure!(
        report.total_symptoms() == 0 && report.notifications == 0,
        "accommodated game showed {} symptoms and {} notifications",
        report.total_symptoms(),
        report.notifications
    );
    Ok(())
}

fn long_storm_has_symptoms(report: &PlayReport) -> Result<()> {
    if report.time_taken_secs >= 60 {
        anyhow::ensure!(
            report.total_symptoms() > 0,
            "a {}s game at full intensity saw no symptoms",
            report.time_taken_secs
        );
    }
    Ok(())
}

fn power_up_collected(report: &PlayReport) -> Result<()> {
    if report.time_taken_secs >= 32 {
        anyhow::ensure!(
            report.power_ups_used > 0,
            "guaranteed power-up never collected in {}s",
            report.time_taken_secs
        );
    }
    Ok(())
}

fn retried_after_outage(report: &PlayReport) -> Result<()> {
    if report.attempts >= 2 {
        anyhow::ensure!(
            report.connectivity_retries > 0,
            "no lookup failed on a flaky link"
        );
    }
    Ok(())
}

fn reset_happened(report: &PlayReport) -> Result<()> {
    anyhow::ensure!(report.resets == 1, "expected one reset, saw {}", report.resets);
    Ok(())
}

fn accommodated() -> Settings {
    Settings {
        accommodated: true,
        ..Settings::default()
    }
}

fn catalog() -> Vec<ScenarioPlan> {
    vec![
        ScenarioPlan::new("smoke", "Smoke Test").with_expectation(consistent_ending),
        ScenarioPlan::new("calm", "Accommodated Game")
            .with_settings(accommodated())
            .with_expectation(no_symptoms),
        ScenarioPlan::new("storm", "Full Intensity Storm")
            .with_settings(Settings {
                intensity: Intensity::MAX,
                accommodated: false,
            })
            .with_policy(PlayerPolicy::Distractible)
            .with_expectation(consistent_ending)
            .with_expectation(long_storm_has_symptoms),
        ScenarioPlan::new("power-ups", "Guaranteed Power-Ups")
            .with_settings(accommodated())
            .with_config(GameConfig {
                power_ups: PowerUpConfig {
                    spawn_chance: 1.0,
                    ..PowerUpConfig::default()
                },
                ..GameConfig::default()
            })
            .with_expectation(power_up_collected),
        ScenarioPlan::new("flaky-network", "Unreliable Dictionary")
            .with_network(Network::Flaky { fail_every: 2 })
            .with_expectation(retried_after_outage),
        ScenarioPlan::new("reset-hygiene", "Reset Mid-Game")
            .with_settings(Settings {
                intensity: Intensity::MAX,
                accommodated: false,
            })
            .with_reset_after(45_000)
            .with_expectation(reset_happened),
        ScenarioPlan::new("distractible", "Distractible Player")
            .with_policy(PlayerPolicy::Distractible)
            .with_expectation(consistent_ending),
    ]
}

#[must_use]
pub fn get_scenario(name: &str) -> Option<ScenarioPlan> {
    let key = name.to_lowercase();
    catalog().into_iter().find(|plan| plan.key == key)
}

#[must_use]
pub fn list_scenarios() -> Vec<(&'static str, &'static str)> {
    catalog()
        .into_iter()
        .map(|plan| (plan.key, plan.name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_scenario_resolves() {
        for (key, name) in list_scenarios() {
            let plan = get_scenario(key).unwrap();
            assert_eq!(plan.name, name);
            assert!(plan.config.validate().is_ok());
        }
        assert!(get_scenario("SMOKE").is_some());
        assert!(get_scenario("nope").is_none());
    }

    #[test]
    fn unfinished_game_fails_base_expectation() {
        let report = PlayReport::new(1);
        assert!(finished_cleanly(&report).is_err());
    }

    #[test]
    fn ending_must_match_flags() {
        let report = PlayReport {
            finished: true,
            won: false,
            ending: Some("Solved".into()),
            ..PlayReport::default()
        };
        assert!(consistent_ending(&report).is_err());
    }
}
