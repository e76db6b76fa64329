//! ADHD Wordle Game Engine
//!
//! Platform-agnostic core for a Wordle variant that injects simulated
//! attention symptoms into play. The crate holds the guess evaluator, the
//! word source, the board state machine and the symptom scheduler, all
//! driven by a virtual millisecond clock the embedder advances.

pub mod challenge;
pub mod clock;
pub mod config;
pub mod constants;
pub mod content;
pub mod dictionary;
pub mod evaluate;
pub mod events;
pub mod numbers;
pub mod powerups;
pub mod rng;
pub mod session;
pub mod state;
pub mod summary;
pub mod symptoms;
pub mod timers;
pub mod word;
pub mod words;

// Re-export commonly used types
pub use clock::{MasterTimer, TickOutcome};
pub use config::{
    ConfigError, DistractionConfig, DurationSpec, GameConfig, Intensity, IntensityError,
    PowerUpConfig, Settings, SymptomConfig, SymptomDurations,
};
pub use constants::{MAX_ATTEMPTS, MAX_INTENSITY, WORD_LENGTH};
#[cfg(feature = "async")]
pub use dictionary::AsyncDictionaryValidator;
pub use dictionary::{DictionaryValidator, Lookup, WordListDictionary};
pub use evaluate::{GuessStatuses, LetterStatus, evaluate, letter_hints};
pub use events::{GameOverReason, SessionEvent, Toast, ToastLevel};
pub use powerups::{PowerUpKind, PowerUpState, TimedPowerUp};
pub use rng::{RandomSource, RngBundle, ScriptedRolls, Stream};
pub use session::{ActionError, CheckOutcome, GuessOutcome, GuessRejection, PendingGuess, Session};
pub use state::GameState;
pub use summary::{GameSummary, share_text};
pub use symptoms::{
    ActiveNotification, ContextSwitchTask, DistractionBlob, HyperfocusEpisode, SymptomKind,
    SymptomState,
};
pub use timers::{Timer, TimerEvent, TimerQueue};
pub use word::{ParseWordError, Word};
pub use words::{WordSource, WordSourceError};
