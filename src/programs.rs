//! Built-in demo programs and the blueprint type they are expressed in.
//!
//! A [`Program`] bundles everything needed to configure a [`Machine`]: the
//! start state, the initial tape run, the head position, and the rule list.
//! The registry holds a few classics that double as executable documentation.

use crate::machine::Machine;
use crate::types::{Action, Direction, MachineError, Rule, Symbol, HALT_STATE};
use serde::{Deserialize, Serialize};

lazy_static::lazy_static! {
    /// The built-in programs, in presentation order.
    pub static ref PROGRAMS: Vec<Program> = vec![
        binary_increment(),
        bit_flipper(),
        busy_beaver_3(),
    ];
}

/// A self-contained machine configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Program {
    /// Display name, unique within the registry.
    pub name: String,
    /// One-line description of what the program computes.
    pub description: String,
    /// The state the machine starts in.
    pub start_state: String,
    /// Initial tape contents, written from index 0.
    pub tape: String,
    /// Initial head position.
    pub head: i64,
    /// The transition rules, in table order.
    pub rules: Vec<Rule>,
}

impl Program {
    /// Builds a ready-to-step machine from this blueprint.
    pub fn machine(&self) -> Machine {
        let mut machine = Machine::new();
        machine.tape_mut().write_run(&self.tape, 0);
        machine.set_state(&self.start_state);
        machine.set_head(self.head);
        for rule in &self.rules {
            machine.upsert_rule(rule.clone());
        }
        machine
    }
}

/// Looks up a built-in program by name.
pub fn by_name(name: &str) -> Result<Program, MachineError> {
    PROGRAMS
        .iter()
        .find(|program| program.name == name)
        .cloned()
        .ok_or_else(|| MachineError::UnknownProgram(name.to_string()))
}

/// The names of all built-in programs, in presentation order.
pub fn names() -> Vec<String> {
    PROGRAMS.iter().map(|program| program.name.clone()).collect()
}

fn rule(state: &str, symbol: impl Into<Symbol>, action: Action) -> Rule {
    Rule::new(state, symbol, action)
}

fn step_to(direction: Direction, write: Option<char>, next: Option<&str>) -> Action {
    Action {
        direction,
        write: write.map(Symbol::from),
        next_state: next.map(str::to_string),
        halt: false,
    }
}

/// Adds one to the binary number on the tape: scan right to the end, then
/// carry back left, flipping trailing ones.
fn binary_increment() -> Program {
    use Direction::{Left, Right};

    Program {
        name: "binary-increment".to_string(),
        description: "Increment the binary number written at index 0".to_string(),
        start_state: "q0".to_string(),
        tape: "1010011".to_string(),
        head: 0,
        rules: vec![
            rule("q0", '0', step_to(Right, None, None)),
            rule("q0", '1', step_to(Right, None, None)),
            rule("q0", Symbol::BLANK, step_to(Left, None, Some("q1"))),
            rule("q1", '0', step_to(Left, Some('1'), Some("q2"))),
            rule("q1", '1', step_to(Left, Some('0'), Some("q1"))),
            rule("q1", Symbol::BLANK, step_to(Right, Some('1'), Some(HALT_STATE))),
            rule("q2", '0', step_to(Left, None, None)),
            rule("q2", '1', step_to(Left, None, None)),
            rule("q2", Symbol::BLANK, step_to(Right, None, Some(HALT_STATE))),
        ],
    }
}

/// Complements every bit, halting on the first blank via the explicit halt
/// flag rather than the halt marker.
fn bit_flipper() -> Program {
    use Direction::Right;

    Program {
        name: "bit-flipper".to_string(),
        description: "Complement every bit of the input".to_string(),
        start_state: "q0".to_string(),
        tape: "1011".to_string(),
        head: 0,
        rules: vec![
            rule("q0", '0', step_to(Right, Some('1'), None)),
            rule("q0", '1', step_to(Right, Some('0'), None)),
            rule(
                "q0",
                Symbol::BLANK,
                Action {
                    halt: true,
                    ..Action::default()
                },
            ),
        ],
    }
}

/// The three-state busy beaver champion. Starts on an all-blank tape and
/// halts after 14 steps with six ones written. Blank and '0' share each
/// state's behavior because the machine writes literal zeros.
fn busy_beaver_3() -> Program {
    use Direction::{Left, Right};

    let mut rules = Vec::new();
    // A: 1RB on 0, halt on 1. B: 0RC on 0, 1RB on 1. C: 1LC on 0, 1LA on 1.
    for zero in [Symbol::BLANK, Symbol::from('0')] {
        rules.push(rule("A", zero, step_to(Right, Some('1'), Some("B"))));
    }
    rules.push(rule(
        "A",
        '1',
        Action {
            halt: true,
            ..Action::default()
        },
    ));
    for zero in [Symbol::BLANK, Symbol::from('0')] {
        rules.push(rule("B", zero, step_to(Right, Some('0'), Some("C"))));
    }
    rules.push(rule("B", '1', step_to(Right, Some('1'), None)));
    for zero in [Symbol::BLANK, Symbol::from('0')] {
        rules.push(rule("C", zero, step_to(Left, Some('1'), None)));
    }
    rules.push(rule("C", '1', step_to(Left, Some('1'), Some("A"))));

    Program {
        name: "busy-beaver-3".to_string(),
        description: "Three-state busy beaver champion on an empty tape".to_string(),
        start_state: "A".to_string(),
        tape: String::new(),
        head: 0,
        rules,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::analyze;
    use crate::types::Step;

    #[test]
    fn test_registry_names() {
        let names = names();
        assert_eq!(names.len(), PROGRAMS.len());
        assert!(names.contains(&"binary-increment".to_string()));
        assert!(names.contains(&"bit-flipper".to_string()));
        assert!(names.contains(&"busy-beaver-3".to_string()));
    }

    #[test]
    fn test_by_name_unknown() {
        let result = by_name("no-such-program");
        assert!(matches!(result, Err(MachineError::UnknownProgram(_))));
    }

    #[test]
    fn test_all_programs_pass_analysis() {
        for program in PROGRAMS.iter() {
            assert!(
                analyze(program).is_ok(),
                "program '{}' failed analysis",
                program.name
            );
        }
    }

    #[test]
    fn test_binary_increment_runs() {
        let mut machine = by_name("binary-increment").unwrap().machine();
        assert_eq!(machine.run(), Step::Halted);
        assert_eq!(machine.tape().text(0, 6), "1010100");
        assert_eq!(machine.state(), HALT_STATE);
    }

    #[test]
    fn test_bit_flipper_runs() {
        let mut machine = by_name("bit-flipper").unwrap().machine();
        assert_eq!(machine.run(), Step::Halted);
        assert_eq!(machine.tape().text(0, 3), "0100");
        // Four writes plus the halt transition on the trailing blank.
        assert_eq!(machine.step_count(), 5);
    }

    #[test]
    fn test_busy_beaver_3_score() {
        let mut machine = by_name("busy-beaver-3").unwrap().machine();
        assert_eq!(machine.run(), Step::Halted);
        assert_eq!(machine.step_count(), 14);
        assert_eq!(machine.tape().text(-1, 4), "111111");
        assert_eq!(machine.state(), HALT_STATE);
    }

    #[test]
    fn test_program_machine_respects_head() {
        let mut program = by_name("bit-flipper").unwrap();
        program.head = 2;
        let machine = program.machine();
        assert_eq!(machine.head(), 2);
        assert_eq!(machine.state(), "q0");
    }
}
