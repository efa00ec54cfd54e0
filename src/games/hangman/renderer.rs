//! Hangman views - plain text for people, JSON lines for programs
use std::io::{self, Write};

use serde::Serialize;

use crate::core::renderer::GameRenderer;
use crate::core::terminal::TerminalContext;
use super::engine::{GameState, Letter, Status, MAX_LIVES};

pub struct HangmanRenderer;

impl GameRenderer<GameState> for HangmanRenderer {
    fn render<W: Write>(
        &self,
        state: &GameState,
        message: &str,
        ctx: &mut TerminalContext<W>,
    ) -> io::Result<()> {
        ctx.print_line("HANGMAN")?;
        ctx.print_line("=======")?;
        ctx.empty_line()?;
        ctx.print_line(&format!("Word:  {}", state.masked_word()))?;
        ctx.print_line(&format!(
            "Lives: {}/{} {}",
            state.remaining_lives(),
            MAX_LIVES,
            "*".repeat(state.remaining_lives() as usize)
        ))?;

        let wrong = state.wrong_letters();
        if !wrong.is_empty() {
            ctx.print_line(&format!("Wrong: {wrong}"))?;
        }

        let available: Vec<String> = Letter::alphabet()
            .filter(|l| state.is_available(*l))
            .map(|l| l.to_string())
            .collect();
        if !available.is_empty() {
            ctx.print_line(&format!("Left:  {}", available.join(" ")))?;
        }

        ctx.empty_line()?;
        if !message.is_empty() {
            ctx.print_line(message)?;
        }

        match state.status() {
            Status::Playing => ctx.print("Guess a letter ('reset', 'new', 'quit' to leave): ")?,
            Status::Won | Status::Lost => {
                ctx.print_line(&format!("The word was {}.", state.secret_word()))?;
                ctx.print("Type 'new' for another word, 'reset' to replay, 'quit' to leave: ")?;
            }
        }
        ctx.flush()
    }
}

/// One JSON object per render
pub struct JsonRenderer;

#[derive(Debug, Serialize)]
struct Snapshot<'a> {
    masked: String,
    guessed: String,
    wrong: String,
    remaining_lives: u8,
    status: Status,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    word: Option<String>,
}

impl GameRenderer<GameState> for JsonRenderer {
    fn render<W: Write>(
        &self,
        state: &GameState,
        message: &str,
        ctx: &mut TerminalContext<W>,
    ) -> io::Result<()> {
        let status = state.status();
        let snapshot = Snapshot {
            masked: state.masked_word(),
            guessed: state.guessed_letters().to_string(),
            wrong: state.wrong_letters().to_string(),
            remaining_lives: state.remaining_lives(),
            status,
            message,
            word: status.is_over().then(|| state.secret_word().to_string()),
        };
        let line = serde_json::to_string(&snapshot).map_err(io::Error::other)?;
        ctx.print_line(&line)?;
        ctx.flush()
    }
}
