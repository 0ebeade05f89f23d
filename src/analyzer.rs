//! This module provides pre-run analysis of programs, catching the mistakes
//! that the engine itself deliberately does not treat as errors: a start
//! state with no rules, transitions into states that silently halt, and
//! rules no execution path can ever reach.

use crate::programs::Program;
use crate::types::{MachineError, HALT_STATE};
use std::collections::HashSet;

/// Problems a program can have before it is ever stepped.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum AnalysisError {
    /// The start state is empty or has no rules, so the first step halts.
    InvalidStartState(String),
    /// Next states that have no rules and are not the halt marker. The
    /// machine halts silently on entering them, which is almost always a
    /// missing rule rather than an intended stop.
    DeadEndStates(Vec<String>),
    /// States that have rules but are unreachable from the start state.
    UnreachableStates(Vec<String>),
}

impl From<AnalysisError> for MachineError {
    fn from(error: AnalysisError) -> Self {
        match error {
            AnalysisError::InvalidStartState(state) => {
                MachineError::Validation(format!("Invalid start state: {}", state))
            }
            AnalysisError::DeadEndStates(states) => MachineError::Validation(format!(
                "Transitions lead to states with no rules: {:?}",
                states
            )),
            AnalysisError::UnreachableStates(states) => {
                MachineError::Validation(format!("Unreachable states detected: {:?}", states))
            }
        }
    }
}

/// Analyzes a program and reports the first problem found.
pub fn analyze(program: &Program) -> Result<(), MachineError> {
    let errors = [check_start_state, check_dead_ends, check_reachability]
        .iter()
        .filter_map(|check| check(program).err())
        .collect::<Vec<_>>();

    match errors.into_iter().next() {
        Some(error) => Err(error.into()),
        None => Ok(()),
    }
}

/// The set of states that own at least one rule.
fn rule_states(program: &Program) -> HashSet<&str> {
    program.rules.iter().map(|r| r.state.as_str()).collect()
}

fn check_start_state(program: &Program) -> Result<(), AnalysisError> {
    if program.start_state.is_empty() || !rule_states(program).contains(program.start_state.as_str())
    {
        return Err(AnalysisError::InvalidStartState(
            program.start_state.clone(),
        ));
    }

    Ok(())
}

fn check_dead_ends(program: &Program) -> Result<(), AnalysisError> {
    let defined = rule_states(program);

    let mut dead_ends: Vec<String> = program
        .rules
        .iter()
        .filter_map(|r| r.action.next_state.as_deref())
        .filter(|next| *next != HALT_STATE && !defined.contains(next))
        .map(str::to_string)
        .collect();

    dead_ends.sort();
    dead_ends.dedup();

    if dead_ends.is_empty() {
        Ok(())
    } else {
        Err(AnalysisError::DeadEndStates(dead_ends))
    }
}

fn check_reachability(program: &Program) -> Result<(), AnalysisError> {
    let mut reachable = HashSet::new();
    let mut frontier = vec![program.start_state.as_str()];

    while let Some(state) = frontier.pop() {
        if !reachable.insert(state) {
            continue;
        }

        for rule in program.rules.iter().filter(|r| r.state == state) {
            // A rule with no next state loops within its own state.
            let next = rule.action.next_state.as_deref().unwrap_or(state);
            if !reachable.contains(next) {
                frontier.push(next);
            }
        }
    }

    let mut unreachable: Vec<String> = rule_states(program)
        .into_iter()
        .filter(|state| !reachable.contains(state))
        .map(str::to_string)
        .collect();

    unreachable.sort();

    if unreachable.is_empty() {
        Ok(())
    } else {
        Err(AnalysisError::UnreachableStates(unreachable))
    }
}
