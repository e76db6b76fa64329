use adhd_wordle_game::words::{BANNED, CANDIDATES};
use adhd_wordle_game::{LetterStatus, Session, WordSource, evaluate};
use std::collections::HashMap;

fn letter_counts(word: &str) -> HashMap<char, usize> {
    let mut counts = HashMap::new();
    for c in word.chars() {
        *counts.entry(c).or_insert(0) += 1;
    }
    counts
}

#[test]
fn credited_letters_never_exceed_solution_counts() {
    for solution in CANDIDATES {
        let available = letter_counts(solution);
        for guess in CANDIDATES {
            let statuses = evaluate(guess, solution);
            assert_eq!(statuses.len(), 5);
            let mut credited: HashMap<char, usize> = HashMap::new();
            for (letter, status) in guess.chars().zip(statuses.iter()) {
                if *status != LetterStatus::Absent {
                    *credited.entry(letter).or_insert(0) += 1;
                }
            }
            for (letter, count) in credited {
                assert!(
                    count <= available.get(&letter).copied().unwrap_or(0),
                    "{guess} vs {solution}: {letter} credited {count} times"
                );
            }
        }
    }
}

#[test]
fn letters_missing_from_solution_are_always_absent() {
    for solution in CANDIDATES {
        for guess in CANDIDATES {
            let statuses = evaluate(guess, solution);
            for (letter, status) in guess.chars().zip(statuses.iter()) {
                if !solution.contains(letter) {
                    assert_eq!(*status, LetterStatus::Absent, "{guess} vs {solution}");
                }
            }
        }
    }
}

#[test]
fn exact_match_is_all_correct_for_every_candidate() {
    for word in CANDIDATES {
        assert!(
            evaluate(word, &word.to_lowercase())
                .iter()
                .all(|s| *s == LetterStatus::Correct)
        );
    }
}

#[test]
fn correct_positions_are_exactly_the_matching_positions() {
    for solution in CANDIDATES.iter().take(40) {
        for guess in CANDIDATES {
            let statuses = evaluate(guess, solution);
            for (i, (g, s)) in guess.chars().zip(solution.chars()).enumerate() {
                assert_eq!(statuses[i] == LetterStatus::Correct, g == s);
            }
        }
    }
}

#[test]
fn seeded_sessions_never_target_a_banned_word() {
    for seed in 0..2_000 {
        let session = Session::seeded(seed);
        let target = session.state().target_word().as_str();
        assert!(!BANNED.contains(&target), "seed {seed} picked {target}");
    }
    let source = WordSource::embedded();
    assert_eq!(source.safe_candidates().count(), CANDIDATES.len() - BANNED.len());
}
