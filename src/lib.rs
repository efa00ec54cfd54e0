pub mod cli;
pub mod core;
pub mod game_runner;
pub mod games;

// Re-export for convenience
pub use crate::core::game::{Game, RoundOutcome};
pub use crate::games::hangman::{GameState, GuessEngine, GuessOutcome, Letter, SecretWord, Status};
