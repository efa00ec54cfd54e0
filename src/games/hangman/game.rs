use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use crate::core::game::{Game, RoundOutcome};
use super::engine::{GameState, GuessEngine, GuessOutcome, Letter, SecretWord, Status};
use super::words::WordList;

/// Repeatable draws for a seed, OS entropy otherwise.
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HangmanInput {
    Guess(Letter),
    /// Same word, fresh round
    Reset,
    /// Draw another word from the list
    NewWord,
}

/// Game adapter - the engine does the rules, this maps lines to engine calls
pub struct HangmanGame {
    engine: GuessEngine,
    words: WordList,
    rng: StdRng,
}

impl HangmanGame {
    /// Starts with a word drawn from `words`. A seed makes the draws repeatable.
    pub fn new(words: WordList, seed: Option<u64>) -> Self {
        let mut rng = seeded_rng(seed);
        let word = words.choose(&mut rng);
        Self::with_word(word, words, rng)
    }

    /// Starts with a fixed first word; later `new` inputs still draw from `words`.
    pub fn with_word(word: SecretWord, words: WordList, rng: StdRng) -> Self {
        Self {
            engine: GuessEngine::initialize(word),
            words,
            rng,
        }
    }
}

impl Game for HangmanGame {
    type State = GameState;
    type Input = HangmanInput;

    const NAME: &'static str = "Hangman";
    const DESCRIPTION: &'static str = "Guess the word letter by letter";

    fn state(&self) -> &GameState {
        self.engine.state()
    }

    fn handle_input(&mut self, input: HangmanInput) -> String {
        match input {
            HangmanInput::Guess(letter) => {
                let outcome = self.engine.guess(letter);
                let state = self.engine.state();
                match (outcome, state.status()) {
                    (_, Status::Won) if outcome.is_accepted() => {
                        format!("You won with {} lives to spare!", state.remaining_lives())
                    }
                    (_, Status::Lost) if outcome.is_accepted() => {
                        format!("Game over! '{letter}' was your last life.")
                    }
                    (GuessOutcome::Hit, _) => format!("Good guess! '{letter}' is in the word."),
                    (GuessOutcome::Miss, _) => format!("Sorry, '{letter}' is not in the word."),
                    (GuessOutcome::AlreadyGuessed, _) => {
                        format!("Letter '{letter}' already guessed.")
                    }
                    (GuessOutcome::RoundOver, _) => {
                        "The round is over. Type 'new' or 'reset' to play again.".to_string()
                    }
                }
            }
            HangmanInput::Reset => {
                self.engine.reset();
                "Round reset. Same word, fresh lives.".to_string()
            }
            HangmanInput::NewWord => {
                let word = self.words.choose(&mut self.rng);
                debug!(length = word.letters().len(), "drew new word");
                self.engine = GuessEngine::initialize(word);
                "New word chosen. Good luck!".to_string()
            }
        }
    }

    fn parse_line(line: &str) -> Option<HangmanInput> {
        let line = line.trim();
        if line.eq_ignore_ascii_case("reset") {
            return Some(HangmanInput::Reset);
        }
        if line.eq_ignore_ascii_case("new") {
            return Some(HangmanInput::NewWord);
        }
        // First alphabetic character is the guess
        line.chars()
            .find_map(|c| Letter::new(c).ok())
            .map(HangmanInput::Guess)
    }

    fn outcome(&self) -> Option<RoundOutcome> {
        match self.engine.state().status() {
            Status::Playing => None,
            Status::Won => Some(RoundOutcome::Won),
            Status::Lost => Some(RoundOutcome::Lost),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(word: &str) -> HangmanGame {
        HangmanGame::with_word(
            SecretWord::new(word).unwrap(),
            WordList::parse("OTHER\n").unwrap(),
            StdRng::seed_from_u64(1),
        )
    }

    fn guess(c: char) -> HangmanInput {
        HangmanInput::Guess(Letter::new(c).unwrap())
    }

    #[test]
    fn same_seed_same_draws() {
        let words = WordList::builtin().unwrap();
        let a = HangmanGame::new(words.clone(), Some(9));
        let b = HangmanGame::new(words, Some(9));
        assert_eq!(a.state(), b.state());
    }

    #[test]
    fn parse_line_commands_and_letters() {
        assert_eq!(HangmanGame::parse_line("  Reset "), Some(HangmanInput::Reset));
        assert_eq!(HangmanGame::parse_line("NEW"), Some(HangmanInput::NewWord));
        assert_eq!(HangmanGame::parse_line("e"), Some(guess('E')));
        assert_eq!(HangmanGame::parse_line("q"), Some(guess('Q')));
        assert_eq!(HangmanGame::parse_line("1 x"), Some(guess('X')));
        assert_eq!(HangmanGame::parse_line("42"), None);
        assert_eq!(HangmanGame::parse_line(""), None);
    }

    #[test]
    fn messages_follow_outcomes() {
        let mut g = game("CAT");
        assert!(g.handle_input(guess('C')).starts_with("Good guess"));
        assert!(g.handle_input(guess('Z')).starts_with("Sorry"));
        assert!(g.handle_input(guess('Z')).contains("already guessed"));
        g.handle_input(guess('A'));
        assert_eq!(g.handle_input(guess('T')), "You won with 5 lives to spare!");
        assert_eq!(g.outcome(), Some(RoundOutcome::Won));
        assert!(g.handle_input(guess('B')).starts_with("The round is over"));
    }

    #[test]
    fn loss_names_last_letter() {
        let mut g = game("DOG");
        let mut last = String::new();
        for c in "QWERTY".chars() {
            last = g.handle_input(guess(c));
        }
        assert_eq!(last, "Game over! 'Y' was your last life.");
        assert_eq!(g.outcome(), Some(RoundOutcome::Lost));
    }

    #[test]
    fn new_word_comes_from_list() {
        let mut g = game("CAT");
        g.handle_input(guess('Q'));
        g.handle_input(HangmanInput::NewWord);
        assert_eq!(g.state().secret_word().to_string(), "OTHER");
        assert_eq!(g.state().remaining_lives(), 6);
        assert_eq!(g.outcome(), None);
    }

    #[test]
    fn reset_keeps_word() {
        let mut g = game("CAT");
        g.handle_input(guess('Q'));
        g.handle_input(HangmanInput::Reset);
        assert_eq!(g.state().secret_word().to_string(), "CAT");
        assert!(g.state().guessed_letters().is_empty());
    }
}
