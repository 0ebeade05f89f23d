//! This module defines the [`Machine`] struct, the controller of a single-tape
//! machine. It owns the tape and the rule table, tracks the current
//! configuration (state, head position, step counter), applies one transition
//! per [`Machine::step`] call, and fires the attached lifecycle hooks
//! synchronously as effects happen.

use crate::table::{RuleTable, UpsertOutcome};
use crate::tape::Tape;
use crate::types::{Direction, Rule, Status, Step, Symbol, HALT_STATE, MAX_RUN_STEPS};

/// The five lifecycle callback slots a caller may attach.
///
/// Each slot holds at most one handler; attaching again replaces the previous
/// one. Handlers fire synchronously within the `step`/`reset` call that caused
/// them, and only when present.
#[derive(Default)]
struct Hooks {
    finish: Option<Box<dyn FnMut()>>,
    moved_left: Option<Box<dyn FnMut()>>,
    moved_right: Option<Box<dyn FnMut()>>,
    cell_changed: Option<Box<dyn FnMut(i64)>>,
    state_changed: Option<Box<dyn FnMut(&str)>>,
}

/// A deterministic single-tape machine.
///
/// A fresh machine is `Ready` with an empty state name, head 0, an all-blank
/// tape, and an empty rule table. The caller seeds the tape, sets a start
/// state, fills the table, and then drives execution one [`Machine::step`] at
/// a time. The configuration as it stands at the *first* step becomes the
/// checkpoint that [`Machine::reset`] restores, so edits made between a reset
/// and the next step become the new restart baseline.
///
/// Hooks cannot re-enter the machine they are attached to: `step` takes
/// `&mut self`, so no handler can hold a second reference to it.
pub struct Machine {
    state: String,
    head: i64,
    tape: Tape,
    table: RuleTable,
    step_count: usize,
    start_state: String,
    start_head: i64,
    start_tape: Tape,
    hooks: Hooks,
}

impl Default for Machine {
    fn default() -> Self {
        Self::new()
    }
}

impl Machine {
    /// Creates a machine in the `Ready` configuration.
    pub fn new() -> Self {
        Self {
            state: String::new(),
            head: 0,
            tape: Tape::new(),
            table: RuleTable::new(),
            step_count: 0,
            start_state: String::new(),
            start_head: 0,
            start_tape: Tape::new(),
            hooks: Hooks::default(),
        }
    }

    /// Executes a single transition.
    ///
    /// Once halted this is a complete no-op: no mutation, no hook firing, no
    /// counter change. On the first step since construction or the last
    /// `reset`, the current configuration is captured as the checkpoint
    /// before anything else happens. When no rule matches, or the matching
    /// rule carries the halt flag, the machine fires `finish`, switches to
    /// the halt marker, and leaves tape and head untouched. Otherwise the
    /// rule's write, movement, and state change are applied in that order,
    /// each firing its hook. The step counter increments either way.
    pub fn step(&mut self) -> Step {
        if self.is_halted() {
            return Step::Halted;
        }

        if self.step_count == 0 {
            self.start_tape = self.tape.clone();
            self.start_state = self.state.clone();
            self.start_head = self.head;
        }

        let symbol = self.tape.get(self.head);
        let outcome = match self.table.lookup(&self.state, symbol).cloned() {
            None => {
                self.finish_transition();
                Step::Halted
            }
            Some(action) if action.halt => {
                self.finish_transition();
                Step::Halted
            }
            Some(action) => {
                if let Some(symbol) = action.write {
                    self.tape.set(self.head, symbol);
                    if let Some(hook) = self.hooks.cell_changed.as_mut() {
                        hook(self.head);
                    }
                }

                match action.direction {
                    Direction::Left => {
                        self.head -= 1;
                        if let Some(hook) = self.hooks.moved_left.as_mut() {
                            hook();
                        }
                    }
                    Direction::Right => {
                        self.head += 1;
                        if let Some(hook) = self.hooks.moved_right.as_mut() {
                            hook();
                        }
                    }
                    Direction::Stay => {}
                }

                if let Some(next) = action.next_state {
                    self.state = next;
                    if let Some(hook) = self.hooks.state_changed.as_mut() {
                        hook(&self.state);
                    }
                }

                Step::Continue
            }
        };

        self.step_count += 1;
        outcome
    }

    /// The halt transition: `finish` fires first, then the state switches to
    /// the halt marker and `state_changed` reports it.
    fn finish_transition(&mut self) {
        if let Some(hook) = self.hooks.finish.as_mut() {
            hook();
        }
        self.state = HALT_STATE.to_string();
        if let Some(hook) = self.hooks.state_changed.as_mut() {
            hook(&self.state);
        }
    }

    /// Steps until the machine halts, up to [`MAX_RUN_STEPS`] transitions.
    pub fn run(&mut self) -> Step {
        for _ in 0..MAX_RUN_STEPS {
            match self.step() {
                Step::Continue => continue,
                halted => return halted,
            }
        }

        Step::Continue
    }

    /// Restores state, head, and tape from the checkpoint, zeroes the step
    /// counter, and fires `state_changed` with the restored state. The
    /// checkpoint itself is never mutated. With no steps taken since
    /// construction or the last reset there is nothing to roll back: the
    /// live configuration stays untouched, since it is exactly the baseline
    /// the next step will capture.
    pub fn reset(&mut self) {
        if self.step_count > 0 {
            self.state = self.start_state.clone();
            self.head = self.start_head;
            self.tape = self.start_tape.clone();
            self.step_count = 0;
        }
        if let Some(hook) = self.hooks.state_changed.as_mut() {
            hook(&self.state);
        }
    }

    /// The current state name.
    pub fn state(&self) -> &str {
        &self.state
    }

    /// Sets the current state directly. Takes effect immediately, fires no
    /// hooks, and leaves the step counter alone.
    pub fn set_state(&mut self, state: &str) {
        self.state = state.to_string();
    }

    /// The current head position.
    pub fn head(&self) -> i64 {
        self.head
    }

    /// Moves the head directly. Fires no hooks.
    pub fn set_head(&mut self, head: i64) {
        self.head = head;
    }

    /// The number of steps taken since construction or the last reset.
    pub fn step_count(&self) -> usize {
        self.step_count
    }

    /// Returns `true` once the current state is the halt marker.
    pub fn is_halted(&self) -> bool {
        self.state == HALT_STATE
    }

    /// The machine-level status: `Ready` until the first step, `Running`
    /// while transitions still apply, `Halted` afterwards.
    pub fn status(&self) -> Status {
        if self.is_halted() {
            Status::Halted
        } else if self.step_count > 0 {
            Status::Running
        } else {
            Status::Ready
        }
    }

    /// Read access to the live tape.
    pub fn tape(&self) -> &Tape {
        &self.tape
    }

    /// Write access to the live tape, for interactive editing. Edits made
    /// before the first step become part of the restart checkpoint.
    pub fn tape_mut(&mut self) -> &mut Tape {
        &mut self.tape
    }

    /// Read access to the rule table.
    pub fn rule_table(&self) -> &RuleTable {
        &self.table
    }

    /// Adds a rule or replaces the action of the entry with the same key.
    pub fn upsert_rule(&mut self, rule: Rule) -> UpsertOutcome {
        self.table.upsert(rule)
    }

    /// Removes the rule for (state, symbol); `false` when absent.
    pub fn remove_rule(&mut self, state: &str, symbol: Symbol) -> bool {
        self.table.remove(state, symbol)
    }

    /// A defensive copy of all rules in insertion order.
    pub fn rules(&self) -> Vec<Rule> {
        self.table.rules()
    }

    /// Attaches the handler fired when the machine takes a halt transition.
    pub fn on_finish(&mut self, hook: impl FnMut() + 'static) {
        self.hooks.finish = Some(Box::new(hook));
    }

    /// Attaches the handler fired after the head moves one cell left.
    pub fn on_moved_left(&mut self, hook: impl FnMut() + 'static) {
        self.hooks.moved_left = Some(Box::new(hook));
    }

    /// Attaches the handler fired after the head moves one cell right.
    pub fn on_moved_right(&mut self, hook: impl FnMut() + 'static) {
        self.hooks.moved_right = Some(Box::new(hook));
    }

    /// Attaches the handler fired with the index of a cell a step wrote.
    pub fn on_cell_changed(&mut self, hook: impl FnMut(i64) + 'static) {
        self.hooks.cell_changed = Some(Box::new(hook));
    }

    /// Attaches the handler fired with the new state name whenever a step or
    /// reset changes the current state.
    pub fn on_state_changed(&mut self, hook: impl FnMut(&str) + 'static) {
        self.hooks.state_changed = Some(Box::new(hook));
    }
}
