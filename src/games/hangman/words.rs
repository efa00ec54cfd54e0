//! Word lists the secret word is drawn from.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use rand::Rng;

use super::engine::SecretWord;

const BUILTIN: &[&str] = &[
    "FUNCTIONAL",
    "EXAMPLE",
    "RUST",
    "ASYNC",
    "TOKIO",
    "HANGMAN",
    "TERMINAL",
    "NETWORK",
    "SOCKET",
    "COMPILER",
    "BORROW",
    "LIFETIME",
];

/// Never empty: the first word is held apart from the rest.
#[derive(Debug, Clone)]
pub struct WordList {
    first: SecretWord,
    rest: Vec<SecretWord>,
}

impl WordList {
    /// The list compiled into the binary.
    pub fn builtin() -> Result<Self> {
        Self::parse(&BUILTIN.join("\n")).context("built-in word list")
    }

    /// One word per line. Blank lines and `#` comments are skipped.
    pub fn parse(text: &str) -> Result<Self> {
        let mut words = Vec::new();
        for (idx, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let word = SecretWord::new(line).with_context(|| format!("line {}", idx + 1))?;
            words.push(word);
        }

        let mut words = words.into_iter();
        let Some(first) = words.next() else {
            bail!("word list contains no words");
        };
        Ok(Self {
            first,
            rest: words.collect(),
        })
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read word list {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("invalid word list {}", path.display()))
    }

    /// Words in list order.
    pub fn words(&self) -> impl Iterator<Item = &SecretWord> {
        std::iter::once(&self.first).chain(&self.rest)
    }

    pub fn len(&self) -> usize {
        1 + self.rest.len()
    }

    pub fn choose<R: Rng>(&self, rng: &mut R) -> SecretWord {
        match rng.random_range(0..=self.rest.len()) {
            0 => self.first.clone(),
            i => self.rest[i - 1].clone(),
        }
    }
}
