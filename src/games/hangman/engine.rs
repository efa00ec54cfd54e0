//! Letter-guessing round engine.
//!
//! A round is played against a fixed [`SecretWord`]. Letters are guessed one
//! at a time; wrong letters cost a life. The round's [`Status`] is never
//! stored: it is derived from the word, the guessed letters and the remaining
//! lives every time it is read.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

/// Lives a round starts with.
pub const MAX_LIVES: u8 = 6;

/// A single uppercase ASCII letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("'{0}' is not a letter A-Z")]
pub struct LetterError(pub char);

impl Letter {
    /// Accepts `A-Z` and `a-z`, normalising to uppercase.
    pub fn new(ch: char) -> Result<Self, LetterError> {
        if ch.is_ascii_alphabetic() {
            Ok(Self(ch.to_ascii_uppercase() as u8))
        } else {
            Err(LetterError(ch))
        }
    }

    /// A through Z, in order.
    pub fn alphabet() -> impl Iterator<Item = Letter> {
        (b'A'..=b'Z').map(Letter)
    }

    pub fn as_char(self) -> char {
        self.0 as char
    }

    fn bit(self) -> u32 {
        1 << (self.0 - b'A')
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Set of letters backed by a 26-bit mask.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LetterSet(u32);

impl LetterSet {
    pub fn new() -> Self {
        Self(0)
    }

    pub fn contains(&self, letter: Letter) -> bool {
        self.0 & letter.bit() != 0
    }

    /// Returns `false` if the letter was already present.
    pub fn insert(&mut self, letter: Letter) -> bool {
        let fresh = !self.contains(letter);
        self.0 |= letter.bit();
        fresh
    }

    pub fn is_subset(&self, other: &LetterSet) -> bool {
        self.0 & !other.0 == 0
    }

    pub fn difference(&self, other: &LetterSet) -> LetterSet {
        LetterSet(self.0 & !other.0)
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Members in alphabetical order.
    pub fn iter(&self) -> impl Iterator<Item = Letter> + '_ {
        Letter::alphabet().filter(move |l| self.contains(*l))
    }
}

impl FromIterator<Letter> for LetterSet {
    fn from_iter<I: IntoIterator<Item = Letter>>(iter: I) -> Self {
        let mut set = LetterSet::new();
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.iter() {
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}

impl From<LetterSet> for String {
    fn from(set: LetterSet) -> Self {
        set.to_string()
    }
}

impl TryFrom<String> for LetterSet {
    type Error = LetterError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.chars().map(Letter::new).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("secret word must not be empty")]
    Empty,
    #[error("secret word has '{ch}' at position {position}; only letters A-Z are allowed")]
    InvalidLetter { ch: char, position: usize },
}

/// Non-empty word made only of letters. Lowercase input is uppercased.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SecretWord(Vec<Letter>);

impl SecretWord {
    pub fn new(word: &str) -> Result<Self, WordError> {
        if word.is_empty() {
            return Err(WordError::Empty);
        }
        word.chars()
            .enumerate()
            .map(|(position, ch)| {
                Letter::new(ch).map_err(|_| WordError::InvalidLetter { ch, position })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(SecretWord)
    }

    pub fn letters(&self) -> &[Letter] {
        &self.0
    }

    /// The distinct letters a player has to find.
    pub fn distinct(&self) -> LetterSet {
        self.0.iter().copied().collect()
    }

    pub fn contains(&self, letter: Letter) -> bool {
        self.0.contains(&letter)
    }
}

impl fmt::Display for SecretWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in &self.0 {
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}

impl std::str::FromStr for SecretWord {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SecretWord::new(s)
    }
}

impl From<SecretWord> for String {
    fn from(word: SecretWord) -> Self {
        word.to_string()
    }
}

impl TryFrom<String> for SecretWord {
    type Error = WordError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        SecretWord::new(&s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Playing,
    Won,
    Lost,
}

impl Status {
    pub fn is_over(self) -> bool {
        !matches!(self, Status::Playing)
    }

    fn derive(word: &SecretWord, guessed: &LetterSet, lives: u8) -> Self {
        if word.distinct().is_subset(guessed) {
            Status::Won
        } else if lives == 0 {
            Status::Lost
        } else {
            Status::Playing
        }
    }
}

/// What a call to [`GuessEngine::guess`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Letter is in the word.
    Hit,
    /// Letter is not in the word; one life spent.
    Miss,
    /// Ignored: letter was guessed before.
    AlreadyGuessed,
    /// Ignored: the round has already been won or lost.
    RoundOver,
}

impl GuessOutcome {
    pub fn is_accepted(self) -> bool {
        matches!(self, GuessOutcome::Hit | GuessOutcome::Miss)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("{lives} lives left but {wrong} wrong guesses; expected {expected}")]
    LivesMismatch { lives: u8, wrong: usize, expected: u8 },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGameState")]
pub struct GameState {
    secret_word: SecretWord,
    guessed_letters: LetterSet,
    remaining_lives: u8,
}

/// Unchecked wire shape of [`GameState`].
#[derive(Deserialize)]
struct RawGameState {
    secret_word: SecretWord,
    guessed_letters: LetterSet,
    remaining_lives: u8,
}

impl TryFrom<RawGameState> for GameState {
    type Error = StateError;

    /// Lives must be exactly what the wrong guesses left over.
    fn try_from(raw: RawGameState) -> Result<Self, Self::Error> {
        let state = GameState {
            secret_word: raw.secret_word,
            guessed_letters: raw.guessed_letters,
            remaining_lives: raw.remaining_lives,
        };
        let wrong = state.wrong_letters().iter().count();
        let expected = usize::from(MAX_LIVES)
            .checked_sub(wrong)
            .and_then(|left| u8::try_from(left).ok());
        match expected {
            Some(expected) if expected == state.remaining_lives => Ok(state),
            _ => Err(StateError::LivesMismatch {
                lives: state.remaining_lives,
                wrong,
                expected: expected.unwrap_or(0),
            }),
        }
    }
}

impl GameState {
    fn fresh(secret_word: SecretWord) -> Self {
        Self {
            secret_word,
            guessed_letters: LetterSet::new(),
            remaining_lives: MAX_LIVES,
        }
    }

    pub fn secret_word(&self) -> &SecretWord {
        &self.secret_word
    }

    pub fn guessed_letters(&self) -> &LetterSet {
        &self.guessed_letters
    }

    pub fn remaining_lives(&self) -> u8 {
        self.remaining_lives
    }

    pub fn status(&self) -> Status {
        Status::derive(&self.secret_word, &self.guessed_letters, self.remaining_lives)
    }

    /// Guessed letters that are not in the word.
    pub fn wrong_letters(&self) -> LetterSet {
        self.guessed_letters.difference(&self.secret_word.distinct())
    }

    /// The word with unfound letters as `_`, space separated: `C _ T`.
    pub fn masked_word(&self) -> String {
        let cells: Vec<String> = self
            .secret_word
            .letters()
            .iter()
            .map(|l| {
                if self.guessed_letters.contains(*l) {
                    l.to_string()
                } else {
                    "_".to_string()
                }
            })
            .collect();
        cells.join(" ")
    }

    /// Whether guessing `letter` now would be accepted.
    pub fn is_available(&self, letter: Letter) -> bool {
        self.status() == Status::Playing && !self.guessed_letters.contains(letter)
    }
}

/// Owns one round and applies guesses to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessEngine {
    state: GameState,
}

impl GuessEngine {
    pub fn initialize(secret_word: SecretWord) -> Self {
        info!(length = secret_word.letters().len(), "round started");
        Self {
            state: GameState::fresh(secret_word),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn guess(&mut self, letter: Letter) -> GuessOutcome {
        if self.state.status().is_over() {
            return GuessOutcome::RoundOver;
        }
        if !self.state.guessed_letters.insert(letter) {
            return GuessOutcome::AlreadyGuessed;
        }

        let outcome = if self.state.secret_word.contains(letter) {
            GuessOutcome::Hit
        } else {
            self.state.remaining_lives = self.state.remaining_lives.saturating_sub(1);
            GuessOutcome::Miss
        };
        debug!(%letter, ?outcome, lives = self.state.remaining_lives, "guess applied");

        match self.state.status() {
            Status::Playing => {}
            status => info!(?status, word = %self.state.secret_word, "round over"),
        }
        outcome
    }

    /// Starts the round over with the same word.
    pub fn reset(&mut self) {
        let word = self.state.secret_word.clone();
        self.state = GameState::fresh(word);
        info!("round reset");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(c: char) -> Letter {
        Letter::new(c).unwrap()
    }

    fn engine(word: &str) -> GuessEngine {
        GuessEngine::initialize(SecretWord::new(word).unwrap())
    }

    #[test]
    fn fresh_round() {
        let e = engine("CAT");
        assert_eq!(e.state().remaining_lives(), MAX_LIVES);
        assert!(e.state().guessed_letters().is_empty());
        assert_eq!(e.state().status(), Status::Playing);
        assert_eq!(e.state().masked_word(), "_ _ _");
    }

    #[test]
    fn cat_scenario() {
        let mut e = engine("CAT");
        assert_eq!(e.guess(letter('C')), GuessOutcome::Hit);
        assert_eq!(e.state().status(), Status::Playing);
        assert_eq!(e.state().remaining_lives(), 6);

        assert_eq!(e.guess(letter('X')), GuessOutcome::Miss);
        assert_eq!(e.state().remaining_lives(), 5);

        assert_eq!(e.guess(letter('A')), GuessOutcome::Hit);
        assert_eq!(e.state().remaining_lives(), 5);
        assert_eq!(e.state().masked_word(), "C A _");

        assert_eq!(e.guess(letter('T')), GuessOutcome::Hit);
        assert_eq!(e.state().status(), Status::Won);
        assert_eq!(e.state().remaining_lives(), 5);
    }

    #[test]
    fn dog_scenario() {
        let mut e = engine("DOG");
        for c in ['Q', 'W', 'E', 'R', 'T'] {
            e.guess(letter(c));
            assert_eq!(e.state().status(), Status::Playing);
        }
        e.guess(letter('Y'));
        assert_eq!(e.state().status(), Status::Lost);
        assert_eq!(e.state().remaining_lives(), 0);

        let before = e.state().clone();
        assert_eq!(e.guess(letter('D')), GuessOutcome::RoundOver);
        assert_eq!(e.state(), &before);
    }

    #[test]
    fn repeated_guess_is_ignored() {
        let mut e = engine("DOG");
        e.guess(letter('Z'));
        let before = e.state().clone();
        assert_eq!(e.guess(letter('Z')), GuessOutcome::AlreadyGuessed);
        assert_eq!(e.state(), &before);
        assert_eq!(e.state().remaining_lives(), 5);
    }

    #[test]
    fn repeated_letters_in_word_count_once() {
        let mut e = engine("BOOK");
        for c in ['B', 'O', 'K'] {
            e.guess(letter(c));
        }
        assert_eq!(e.state().status(), Status::Won);
    }

    #[test]
    fn reset_keeps_word() {
        let mut e = engine("DOG");
        for c in "QWERTY".chars() {
            e.guess(letter(c));
        }
        e.reset();
        assert_eq!(e.state().secret_word().to_string(), "DOG");
        assert_eq!(e.state().remaining_lives(), MAX_LIVES);
        assert!(e.state().guessed_letters().is_empty());
        assert_eq!(e.state().status(), Status::Playing);
    }

    #[test]
    fn wrong_and_available_letters() {
        let mut e = engine("CAT");
        e.guess(letter('C'));
        e.guess(letter('Z'));
        assert_eq!(e.state().wrong_letters().to_string(), "Z");
        assert!(!e.state().is_available(letter('Z')));
        assert!(e.state().is_available(letter('A')));

        e.guess(letter('A'));
        e.guess(letter('T'));
        assert!(!e.state().is_available(letter('B')));
    }

    #[test]
    fn word_validation() {
        assert_eq!(SecretWord::new(""), Err(WordError::Empty));
        assert_eq!(
            SecretWord::new("CA7"),
            Err(WordError::InvalidLetter { ch: '7', position: 2 })
        );
        assert_eq!(SecretWord::new("rust").unwrap().to_string(), "RUST");
    }

    #[test]
    fn letter_set_serializes_as_string() {
        let set: LetterSet = "TAC".chars().map(letter).collect();
        assert_eq!(serde_json::to_string(&set).unwrap(), "\"ACT\"");
        let back: LetterSet = serde_json::from_str("\"act\"").unwrap();
        assert_eq!(back, set);
        assert!(serde_json::from_str::<LetterSet>("\"A1\"").is_err());
    }

    #[test]
    fn state_round_trips_through_json() {
        let mut e = engine("CAT");
        e.guess(letter('C'));
        e.guess(letter('Q'));
        let json = serde_json::to_string(e.state()).unwrap();
        let back: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(&back, e.state());
    }

    #[test]
    fn state_with_impossible_lives_is_rejected() {
        let json = r#"{"secret_word":"CAT","guessed_letters":"","remaining_lives":200}"#;
        assert!(serde_json::from_str::<GameState>(json).is_err());

        let json = r#"{"secret_word":"CAT","guessed_letters":"CXY","remaining_lives":6}"#;
        assert!(serde_json::from_str::<GameState>(json).is_err());

        let json = r#"{"secret_word":"CAT","guessed_letters":"CXY","remaining_lives":4}"#;
        let state: GameState = serde_json::from_str(json).unwrap();
        assert_eq!(state.status(), Status::Playing);
    }
}
