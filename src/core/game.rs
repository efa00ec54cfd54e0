//! Core game interface for turn-based terminal games
/// Main game trait that all line-driven games implement.
/// The session loop owns the I/O; a game only interprets lines and updates its state.
pub trait Game {
    /// State handed to renderers
    type State;

    /// Input parsed from one line of user text
    type Input;

    const NAME: &'static str;
    const DESCRIPTION: &'static str;

    fn state(&self) -> &Self::State;

    /// Apply one input and return a feedback line for the player
    fn handle_input(&mut self, input: Self::Input) -> String;

    /// Game controls its own input parsing - `None` means the line meant nothing
    fn parse_line(line: &str) -> Option<Self::Input>;

    /// Outcome of the current round, if it has one yet
    fn outcome(&self) -> Option<RoundOutcome>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    Won,
    Lost,
}
