//! Fixed text catalogs behind notifications, context-switch puzzles and
//! hyperfocus episodes.
use serde::Serialize;

/// A fake notification the flood and the notification symptom draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NotificationTemplate {
    pub title: &'static str,
    pub body: &'static str,
}

pub const NOTIFICATIONS: [NotificationTemplate; 5] = [
    NotificationTemplate {
        title: "💬 New Message",
        body: "From Alex: \"Hey, you free later?\"",
    },
    NotificationTemplate {
        title: "📸 Social Media",
        body: "Someone tagged you in 3 photos.",
    },
    NotificationTemplate {
        title: "📰 News Alert",
        body: "Breaking: A new study on productivity released.",
    },
    NotificationTemplate {
        title: "📦 Shopping",
        body: "Your package has been shipped!",
    },
    NotificationTemplate {
        title: "📅 Calendar",
        body: "Reminder: Team meeting in 15 minutes.",
    },
];

/// Multiple-choice side task shown during a context switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Puzzle {
    pub question: &'static str,
    pub options: [&'static str; 4],
    pub answer: &'static str,
}

impl Puzzle {
    /// Case-insensitive answer check, ignoring surrounding whitespace.
    #[must_use]
    pub fn is_answer(&self, option: &str) -> bool {
        self.answer.eq_ignore_ascii_case(option.trim())
    }
}

pub const PUZZLES: [Puzzle; 4] = [
    Puzzle {
        question: "What's 7 + 5?",
        options: ["11", "12", "13", "14"],
        answer: "12",
    },
    Puzzle {
        question: "Which is bigger?",
        options: ["Mouse", "Elephant", "Cat", "Dog"],
        answer: "Elephant",
    },
    Puzzle {
        question: "2 × 4 = ?",
        options: ["6", "7", "8", "9"],
        answer: "8",
    },
    Puzzle {
        question: "Pick the color:",
        options: ["Red", "Blue", "Green", "Yellow"],
        answer: "Blue",
    },
];

pub const FUN_FACTS: [&str; 7] = [
    "A group of flamingos is called a 'flamboyance'.",
    "The national animal of Scotland is the unicorn.",
    "Honey never spoils. Archaeologists have found pots of honey in ancient Egyptian tombs that are over 3,000 years old and still perfectly edible.",
    "A single cloud can weigh more than a million pounds.",
    "There are more trees on Earth than stars in the Milky Way galaxy.",
    "Octopuses have three hearts.",
    "Bananas are berries, but strawberries aren't.",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_puzzle_has_exactly_one_answer_option() {
        for puzzle in &PUZZLES {
            let hits = puzzle.options.iter().filter(|o| puzzle.is_answer(o)).count();
            assert_eq!(hits, 1, "{}", puzzle.question);
        }
    }

    #[test]
    fn answer_check_ignores_case_and_padding() {
        assert!(PUZZLES[1].is_answer("  elephant "));
        assert!(!PUZZLES[1].is_answer("Mouse"));
    }
}
