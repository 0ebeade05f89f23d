//! This module defines the core data structures and types used throughout the
//! machine engine: tape symbols, head directions, transition actions and rules,
//! execution outcomes, and error types.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// The reserved state name signaling that the machine has stopped.
pub const HALT_STATE: &str = "!";
/// The maximum number of steps [`crate::Machine::run`] executes before giving up.
pub const MAX_RUN_STEPS: usize = 10000;

/// A single tape symbol: one character, or the distinguished blank.
///
/// Every conversion into a `Symbol` keeps at most the first character of its
/// input. An empty input becomes the blank. This is the one place where the
/// engine's "oversized writes are truncated, not rejected" contract lives.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Symbol(Option<char>);

impl Symbol {
    /// The blank symbol. Unset tape cells read as blank by convention.
    pub const BLANK: Symbol = Symbol(None);

    /// Returns `true` if this is the blank symbol.
    pub fn is_blank(&self) -> bool {
        self.0.is_none()
    }

    /// Returns the underlying character, or `None` for the blank.
    pub fn as_char(&self) -> Option<char> {
        self.0
    }
}

impl From<char> for Symbol {
    fn from(ch: char) -> Self {
        Symbol(Some(ch))
    }
}

impl From<Option<char>> for Symbol {
    fn from(ch: Option<char>) -> Self {
        Symbol(ch)
    }
}

impl From<&str> for Symbol {
    /// First character wins; everything past it is dropped. `""` is the blank.
    fn from(s: &str) -> Self {
        Symbol(s.chars().next())
    }
}

impl fmt::Display for Symbol {
    /// Blank renders as a space, matching how tape windows are printed.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.unwrap_or(' '))
    }
}

/// The direction a head moves after a transition is applied.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Move the head one position to the left.
    Left,
    /// Move the head one position to the right.
    Right,
    /// Keep the head in the same position.
    #[default]
    Stay,
}

impl Direction {
    /// The signed head displacement: -1, +1, or 0.
    pub fn offset(self) -> i64 {
        match self {
            Direction::Left => -1,
            Direction::Right => 1,
            Direction::Stay => 0,
        }
    }
}

/// The effect applied when a rule matches.
///
/// Every field is optional in spirit: the default action writes nothing,
/// stays put, keeps the current state, and does not halt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    /// Head movement. Defaults to [`Direction::Stay`].
    pub direction: Direction,
    /// Symbol written at the head, or `None` to leave the cell untouched.
    /// Writing `Some(Symbol::BLANK)` erases the cell.
    pub write: Option<Symbol>,
    /// State to switch to, or `None` to remain in the current state.
    pub next_state: Option<String>,
    /// Explicit halt: the machine stops without applying write or movement.
    pub halt: bool,
}

/// One transition-table entry: a (state, symbol) key and the action applied
/// when the machine reads `symbol` while in `state`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    /// The machine state this rule applies in.
    pub state: String,
    /// The symbol under the head this rule applies to.
    pub symbol: Symbol,
    /// The effect applied on match.
    pub action: Action,
}

impl Rule {
    pub fn new(state: &str, symbol: impl Into<Symbol>, action: Action) -> Self {
        Self {
            state: state.to_string(),
            symbol: symbol.into(),
            action,
        }
    }
}

/// The outcome of a single execution step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The machine applied a transition and can continue.
    Continue,
    /// The machine is halted; either this step halted it or it already was.
    Halted,
}

/// The machine-level execution status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Constructed or just reset; no step taken yet.
    Ready,
    /// At least one step taken and not halted.
    Running,
    /// The current state is the halt marker; further steps are no-ops.
    Halted,
}

/// Errors surfaced by the supplemental APIs (program registry, analysis,
/// codec). The engine itself has no error path: a missing rule is a halt,
/// an oversized symbol is truncated, a missing table key is a boolean.
#[derive(Debug, Error)]
pub enum MachineError {
    /// No built-in program with the requested name exists.
    #[error("Unknown program: {0}")]
    UnknownProgram(String),
    /// A program failed pre-run analysis.
    #[error("Program validation error: {0}")]
    Validation(String),
    /// A program share-string could not be encoded or decoded.
    #[error("Codec error: {0}")]
    Codec(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_truncates_to_first_char() {
        assert_eq!(Symbol::from("abc"), Symbol::from('a'));
        assert_eq!(Symbol::from("x"), Symbol::from('x'));
        assert_eq!(Symbol::from(""), Symbol::BLANK);
    }

    #[test]
    fn test_blank_symbol() {
        assert!(Symbol::BLANK.is_blank());
        assert_eq!(Symbol::BLANK.as_char(), None);
        assert!(!Symbol::from('0').is_blank());
        assert_eq!(Symbol::default(), Symbol::BLANK);
    }

    #[test]
    fn test_symbol_display() {
        assert_eq!(Symbol::from('1').to_string(), "1");
        assert_eq!(Symbol::BLANK.to_string(), " ");
    }

    #[test]
    fn test_direction_offsets() {
        assert_eq!(Direction::Left.offset(), -1);
        assert_eq!(Direction::Right.offset(), 1);
        assert_eq!(Direction::Stay.offset(), 0);
        assert_eq!(Direction::default(), Direction::Stay);
    }

    #[test]
    fn test_default_action_is_inert() {
        let action = Action::default();
        assert_eq!(action.direction, Direction::Stay);
        assert_eq!(action.write, None);
        assert_eq!(action.next_state, None);
        assert!(!action.halt);
    }

    #[test]
    fn test_symbol_serialization() {
        let one = Symbol::from('1');
        let json = serde_json::to_string(&one).unwrap();
        assert_eq!(serde_json::from_str::<Symbol>(&json).unwrap(), one);

        let blank_json = serde_json::to_string(&Symbol::BLANK).unwrap();
        assert_eq!(
            serde_json::from_str::<Symbol>(&blank_json).unwrap(),
            Symbol::BLANK
        );
    }

    #[test]
    fn test_error_display() {
        let error = MachineError::UnknownProgram("missing".to_string());
        let message = format!("{}", error);
        assert!(message.contains("Unknown program"));
        assert!(message.contains("missing"));
    }
}
