//! Scripted player that drives a session the way someone at the keyboard
//! would: ponder, deal with whatever popped up, then type a guess.
use std::collections::BTreeMap;

use adhd_wordle_game::{
    AsyncDictionaryValidator, GuessRejection, Session, SessionEvent, Word, WordSource, evaluate,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};

use super::invariants::check_invariants;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerPolicy {
    /// Solves puzzles, ignores the distraction blob, collects power-ups.
    Diligent,
    /// Guesses at puzzles and clicks the blob half the time.
    Distractible,
}

impl PlayerPolicy {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Diligent => "diligent",
            Self::Distractible => "distractible",
        }
    }

    /// Virtual milliseconds spent pondering before each turn.
    const fn think_range_ms(self) -> (u64, u64) {
        match self {
            Self::Diligent => (4_000, 9_000),
            Self::Distractible => (6_000, 14_000),
        }
    }
}

/// What happened during one scripted game.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayReport {
    pub seed: u64,
    pub finished: bool,
    pub won: bool,
    pub attempts: usize,
    pub time_taken_secs: u32,
    pub ending: Option<String>,
    /// Activations per symptom label.
    pub symptoms: BTreeMap<String, usize>,
    pub notifications: usize,
    pub forgotten_rows: usize,
    pub power_ups_used: usize,
    pub distraction_clicks: usize,
    pub puzzles_solved: usize,
    pub puzzles_missed: usize,
    pub connectivity_retries: usize,
    pub resets: usize,
    pub invariant_failures: Vec<String>,
}

impl PlayReport {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn total_symptoms(&self) -> usize {
        self.symptoms.values().sum()
    }

    fn note_violation(&mut self, violation: impl ToString) {
        let message = violation.to_string();
        if !self.invariant_failures.contains(&message) {
            self.invariant_failures.push(message);
        }
    }
}

pub struct BotPlayer {
    policy: PlayerPolicy,
    rng: ChaCha20Rng,
    vocabulary: Vec<Word>,
}

impl BotPlayer {
    #[must_use]
    pub fn new(policy: PlayerPolicy, seed: u64) -> Self {
        Self {
            policy,
            rng: ChaCha20Rng::seed_from_u64(seed ^ 0x5EED_B07),
            vocabulary: WordSource::embedded().safe_candidates().cloned().collect(),
        }
    }

    /// Play until the game ends or `limit_ms` of virtual time passes.
    pub async fn play(
        &mut self,
        session: &mut Session,
        validator: &dyn AsyncDictionaryValidator,
        limit_ms: u64,
        report: &mut PlayReport,
    ) {
        let deadline = session.now_ms().saturating_add(limit_ms);
        while !session.state().is_game_over() && session.now_ms() < deadline {
            let (lo, hi) = self.policy.think_range_ms();
            let think = self.rng.gen_range(lo..=hi).min(deadline - session.now_ms());
            session.advance(think);
            Self::record_events(session, report);
            self.tend_interruptions(session, report);
            Self::record_events(session, report);
            if let Err(violation) = check_invariants(session) {
                report.note_violation(violation);
            }
            if session.state().is_game_over() || session.is_input_blocked() {
                continue;
            }
            self.take_turn(session, validator, report).await;
            Self::record_events(session, report);
            if let Err(violation) = check_invariants(session) {
                report.note_violation(violation);
            }
        }

        let state = session.state();
        report.finished = state.is_game_over();
        report.won = state.is_winner();
        report.attempts = state.guesses().len();
        report.time_taken_secs = session.clock().elapsed_whole_secs();
    }

    fn tend_interruptions(&mut self, session: &mut Session, report: &mut PlayReport) {
        if session.power_ups().available.is_some() {
            match session.activate_power_up() {
                Ok(kind) => {
                    log::debug!("collected {}", kind.label());
                    report.power_ups_used += 1;
                }
                Err(err) => log::debug!("power-up not collected: {err}"),
            }
        }

        let ids: Vec<u64> = session.symptoms().notifications.iter().map(|n| n.id).collect();
        for id in ids {
            if let Err(err) = session.dismiss_notification(id) {
                log::debug!("{err}");
            }
        }

        if let Some(unlock_at_ms) = session.symptoms().hyperfocus.as_ref().map(|h| h.unlock_at_ms)
            && session.now_ms() >= unlock_at_ms
            && let Err(err) = session.dismiss_hyperfocus()
        {
            log::debug!("{err}");
        }

        if let Some(puzzle) = session.symptoms().context_switch.as_ref().map(|t| t.puzzle) {
            let choice = match self.policy {
                PlayerPolicy::Diligent => puzzle.answer,
                PlayerPolicy::Distractible => {
                    puzzle.options[self.rng.gen_range(0..puzzle.options.len())]
                }
            };
            match session.answer_context_switch(choice) {
                Ok(true) => report.puzzles_solved += 1,
                Ok(false) => report.puzzles_missed += 1,
                Err(err) => log::debug!("{err}"),
            }
        }

        if self.policy == PlayerPolicy::Distractible
            && session.symptoms().distraction.is_some()
            && self.rng.gen_bool(0.5)
        {
            match session.click_distraction() {
                Ok(penalty) => {
                    log::debug!("clicked the distraction, lost {penalty}s");
                    report.distraction_clicks += 1;
                }
                Err(err) => log::debug!("{err}"),
            }
        }
    }

    async fn take_turn(
        &mut self,
        session: &mut Session,
        validator: &dyn AsyncDictionaryValidator,
        report: &mut PlayReport,
    ) {
        while !session.state().current_guess().is_empty() {
            if session.backspace().is_err() {
                return;
            }
        }
        let Some(guess) = self.choose_guess(session) else {
            log::warn!("no word left to guess");
            return;
        };
        if let Err(rejection) = session.type_word(guess.as_str()) {
            log::debug!("typing {guess} interrupted: {rejection}");
            return;
        }
        match session.submit_guess_async(validator).await {
            Ok(outcome) => log::debug!(
                "guessed {} (won: {}, over: {})",
                outcome.word,
                outcome.won,
                outcome.game_over
            ),
            Err(GuessRejection::Connectivity { reason }) => {
                log::debug!("lookup failed, will retry: {reason}");
                report.connectivity_retries += 1;
            }
            Err(rejection) => log::debug!("{guess} rejected: {rejection}"),
        }
    }

    /// Random word consistent with every row still on the board.
    fn choose_guess(&mut self, session: &Session) -> Option<Word> {
        let rows: Vec<_> = session.state().rows().collect();
        let consistent: Vec<&Word> = self
            .vocabulary
            .iter()
            .filter(|candidate| {
                rows.iter()
                    .all(|(guess, statuses)| evaluate(guess.as_str(), candidate.as_str()) == **statuses)
            })
            .collect();
        let pool: Vec<&Word> = if consistent.is_empty() {
            self.vocabulary.iter().collect()
        } else {
            consistent
        };
        if pool.is_empty() {
            return None;
        }
        let idx = self.rng.gen_range(0..pool.len());
        pool.get(idx).map(|w| (*w).clone())
    }

    fn record_events(session: &mut Session, report: &mut PlayReport) {
        for event in session.drain_events() {
            match event {
                SessionEvent::SymptomStarted { kind } => {
                    *report.symptoms.entry(kind.label().to_string()).or_default() += 1;
                }
                SessionEvent::NotificationShown { .. } => report.notifications += 1,
                SessionEvent::GuessForgotten { .. } => report.forgotten_rows += 1,
                SessionEvent::GameOver { reason, .. } => {
                    report.ending = Some(format!("{reason:?}"));
                }
                _ => {}
            }
        }
    }
}
