//! The run lifecycle, advanced strictly forward except for the implicit
//! jump to an error exit from any state.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Enumerating,
    Scoring,
    Reading,
    Summarizing,
    Rendering,
    Tokenizing,
    Done,
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RunState::Idle => "idle",
            RunState::Enumerating => "enumerating",
            RunState::Scoring => "scoring",
            RunState::Reading => "reading",
            RunState::Summarizing => "summarizing",
            RunState::Rendering => "rendering",
            RunState::Tokenizing => "tokenizing",
            RunState::Done => "done",
        };
        f.write_str(s)
    }
}

impl RunState {
    /// Moves to `next`, logging the transition at info level when `verbose`.
    #[must_use]
    pub fn transition(self, next: RunState, verbose: bool) -> RunState {
        if verbose {
            log::info!("run state: {self} -> {next}");
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transition_returns_the_next_state() {
        let state = RunState::Idle;
        let state = state.transition(RunState::Enumerating, false);
        assert_eq!(state, RunState::Enumerating);
    }

    #[test]
    fn display_uses_lowercase_snake_labels() {
        assert_eq!(RunState::Enumerating.to_string(), "enumerating");
        assert_eq!(RunState::Tokenizing.to_string(), "tokenizing");
    }
}
