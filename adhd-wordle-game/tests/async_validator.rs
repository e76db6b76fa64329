#![cfg(feature = "async")]

use adhd_wordle_game::{
    AsyncDictionaryValidator, GameConfig, GuessRejection, Lookup, ScriptedRolls, Session,
    Settings, WordListDictionary, WordSource,
};
use async_trait::async_trait;

fn session() -> Session {
    let words = WordSource::new(["CRANE"], Vec::<&str>::new()).unwrap();
    Session::new(
        GameConfig::default(),
        Settings {
            accommodated: true,
            ..Settings::default()
        },
        words,
        ScriptedRolls::constant(0.99),
    )
    .unwrap()
}

/// Dictionary that yields to the runtime before answering.
struct RemoteDictionary {
    words: WordListDictionary,
    online: bool,
}

#[async_trait]
impl AsyncDictionaryValidator for RemoteDictionary {
    async fn lookup(&self, word: &str) -> Lookup {
        tokio::task::yield_now().await;
        if !self.online {
            return Lookup::Unreachable("connection refused".into());
        }
        AsyncDictionaryValidator::lookup(&self.words, word).await
    }
}

#[tokio::test]
async fn async_lookup_accepts_known_word() {
    let dictionary = RemoteDictionary {
        words: WordListDictionary::new(["crane", "slate"]),
        online: true,
    };
    let mut session = session();
    session.type_word("slate").unwrap();
    let outcome = session.submit_guess_async(&dictionary).await.unwrap();
    assert!(!outcome.won);
    session.type_word("crane").unwrap();
    let outcome = session.submit_guess_async(&dictionary).await.unwrap();
    assert!(outcome.won && outcome.game_over);
}

#[tokio::test]
async fn unreachable_dictionary_keeps_the_row() {
    let dictionary = RemoteDictionary {
        words: WordListDictionary::default(),
        online: false,
    };
    let mut session = session();
    session.type_word("crane").unwrap();
    let err = session.submit_guess_async(&dictionary).await.unwrap_err();
    assert!(matches!(err, GuessRejection::Connectivity { .. }));
    assert_eq!(session.state().current_guess(), "CRANE");
    assert!(session.state().guesses().is_empty());
    assert!(!session.lookup_in_flight());
}

#[tokio::test]
async fn input_waits_for_the_in_flight_lookup() {
    let dictionary = WordListDictionary::new(["crane"]);
    let mut session = session();
    session.type_word("crane").unwrap();
    let pending = session.begin_guess().unwrap();
    assert_eq!(session.backspace(), Err(GuessRejection::Busy));
    assert_eq!(session.begin_guess(), Err(GuessRejection::Busy));

    let verdict = AsyncDictionaryValidator::lookup(&dictionary, &pending.lookup_key()).await;
    let outcome = session.resolve_guess(pending, verdict).unwrap();
    assert!(outcome.won);
}
