use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::{info, Level};

use crate::core::game::Game;
use crate::game_runner::run_session;
use crate::games::hangman::{
    seeded_rng, HangmanGame, HangmanRenderer, JsonRenderer, SecretWord, WordList,
};

#[derive(Parser)]
#[command(name = "hangterm")]
#[command(about = "Guess the word letter by letter in your terminal")]
#[command(version)]
pub struct Cli {
    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Play on stdin/stdout
    Play(PlayConfig),
    /// Print the word list
    Words {
        /// Word list file, one word per line ('#' starts a comment)
        #[arg(short = 'f', long)]
        words_file: Option<PathBuf>,
    },
}

/// Everything a session needs, gathered from flags
#[derive(Args, Debug, Clone, Default)]
pub struct PlayConfig {
    /// Fixed secret word for the first round
    #[arg(short, long)]
    pub word: Option<SecretWord>,

    /// Word list file, one word per line ('#' starts a comment)
    #[arg(short = 'f', long)]
    pub words_file: Option<PathBuf>,

    /// Seed for word selection
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Emit one JSON object per turn instead of text
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    pub fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

fn load_words(path: Option<&PathBuf>) -> Result<WordList> {
    match path {
        Some(path) => WordList::from_file(path),
        None => WordList::builtin(),
    }
}

pub fn run_cli(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Commands::Play(config)) => play(config),
        Some(Commands::Words { words_file }) => {
            let words = load_words(words_file.as_ref())?;
            for word in words.words() {
                println!("{word}");
            }
            Ok(())
        }
        None => play(PlayConfig::default()),
    }
}

pub fn play(config: PlayConfig) -> Result<()> {
    let words = load_words(config.words_file.as_ref())?;
    info!(words = words.len(), seed = ?config.seed, "starting {}", HangmanGame::NAME);

    let mut game = match config.word {
        Some(word) => HangmanGame::with_word(word, words, seeded_rng(config.seed)),
        None => HangmanGame::new(words, config.seed),
    };

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    let summary = if config.json {
        run_session(&mut game, &JsonRenderer, stdin, stdout)
    } else {
        run_session(&mut game, &HangmanRenderer, stdin, stdout)
    }
    .context("session failed")?;

    if !config.json {
        println!("Rounds won: {}, lost: {}", summary.rounds_won, summary.rounds_lost);
    }
    Ok(())
}
