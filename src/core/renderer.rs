//! Generic game renderer trait for dependency injection
use std::io::{self, Write};

use crate::core::terminal::TerminalContext;

pub trait GameRenderer<State> {
    /// Render game state plus the last feedback message
    fn render<W: Write>(
        &self,
        state: &State,
        message: &str,
        ctx: &mut TerminalContext<W>,
    ) -> io::Result<()>;
}
