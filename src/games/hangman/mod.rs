//! Hangman game module
pub mod engine;
pub mod game;
pub mod renderer;
pub mod words;

pub use engine::{
    GameState, GuessEngine, GuessOutcome, Letter, LetterSet, SecretWord, StateError, Status,
    MAX_LIVES,
};
pub use game::{seeded_rng, HangmanGame, HangmanInput};
pub use renderer::{HangmanRenderer, JsonRenderer};
pub use words::WordList;
