//! Session loop that feeds typed lines into a game and renders after each one
use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::core::game::{Game, RoundOutcome};
use crate::core::renderer::GameRenderer;
use crate::core::terminal::TerminalContext;

const HINT: &str = "Type a letter A-Z, 'reset', 'new' or 'quit'.";

/// Lines that end the session. None of these may be a single letter.
const QUIT_COMMANDS: &[&str] = &["quit", ":q"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub rounds_won: u32,
    pub rounds_lost: u32,
    /// Lines that parsed into a game input
    pub inputs: u32,
}

/// Runs until EOF, `quit` or `:q`.
pub fn run_session<G, R, I, W>(
    game: &mut G,
    renderer: &R,
    input: I,
    output: W,
) -> Result<SessionSummary>
where
    G: Game,
    R: GameRenderer<G::State>,
    I: BufRead,
    W: Write,
{
    let mut ctx = TerminalContext::new(output);
    let mut summary = SessionSummary::default();
    let mut message = format!("Welcome to {}! {}", G::NAME, G::DESCRIPTION);

    renderer.render(game.state(), &message, &mut ctx).context("failed to render")?;

    for line in input.lines() {
        let line = line.context("failed to read input")?;
        let trimmed = line.trim();
        if QUIT_COMMANDS.iter().any(|cmd| trimmed.eq_ignore_ascii_case(cmd)) {
            break;
        }

        message = match G::parse_line(trimmed) {
            Some(parsed) => {
                summary.inputs += 1;
                let before = game.outcome();
                let reply = game.handle_input(parsed);
                // Count a round only on the input that ended it
                match (before, game.outcome()) {
                    (None, Some(RoundOutcome::Won)) => summary.rounds_won += 1,
                    (None, Some(RoundOutcome::Lost)) => summary.rounds_lost += 1,
                    _ => {}
                }
                reply
            }
            None => {
                debug!(line = trimmed, "unrecognised input");
                HINT.to_string()
            }
        };

        renderer.render(game.state(), &message, &mut ctx).context("failed to render")?;
    }

    ctx.empty_line().context("failed to write output")?;
    ctx.flush().context("failed to write output")?;
    info!(
        won = summary.rounds_won,
        lost = summary.rounds_lost,
        inputs = summary.inputs,
        "session ended"
    );
    Ok(summary)
}
