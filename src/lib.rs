//! This crate provides a deterministic single-tape machine engine: a
//! bi-infinite tape, a live-editable rule table keyed by (state, symbol), and
//! a stepper that applies one transition per call while firing observable
//! lifecycle hooks. A checkpoint of the configuration, captured on the first
//! step after construction or reset, makes restarts exact.

pub mod analyzer;
pub mod encoder;
pub mod machine;
pub mod programs;
pub mod table;
pub mod tape;
pub mod types;

/// Re-exports the `analyze` function and `AnalysisError` enum from the analyzer module.
pub use analyzer::{analyze, AnalysisError};
/// Re-exports the codec functions from the encoder module.
pub use encoder::{decode, encode};
/// Re-exports the `Machine` controller from the machine module.
pub use machine::Machine;
/// Re-exports the built-in program registry from the programs module.
pub use programs::{by_name, names, Program, PROGRAMS};
/// Re-exports the rule table and its upsert outcome from the table module.
pub use table::{RuleTable, UpsertOutcome};
/// Re-exports the `Tape` from the tape module.
pub use tape::Tape;
/// Re-exports the core data-model types.
pub use types::{
    Action, Direction, MachineError, Rule, Status, Step, Symbol, HALT_STATE, MAX_RUN_STEPS,
};
