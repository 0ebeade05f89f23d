//! This module defines the [`RuleTable`], the finite transition table mapping
//! a (state, symbol) pair to the action applied on match. The table keeps
//! rules in insertion order and may be edited at any time, including mid-run.

use crate::types::{Action, Rule, Symbol};
use serde::{Deserialize, Serialize};

/// Outcome of [`RuleTable::upsert`]: callers use it to decide between
/// appending a new row and refreshing an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    /// No entry existed for the key; the rule was inserted.
    Added,
    /// An entry existed; only its action was replaced.
    Updated,
}

/// An ordered transition table with at most one action per (state, symbol)
/// key. Lookups are linear scans; rule tables are small by nature.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleTable {
    rules: Vec<Rule>,
}

impl RuleTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts the rule, or replaces the action of the existing entry with
    /// the same (state, symbol) key. The key itself is never rewritten and
    /// the entry keeps its position.
    pub fn upsert(&mut self, rule: Rule) -> UpsertOutcome {
        match self
            .rules
            .iter_mut()
            .find(|r| r.state == rule.state && r.symbol == rule.symbol)
        {
            Some(existing) => {
                existing.action = rule.action;
                UpsertOutcome::Updated
            }
            None => {
                self.rules.push(rule);
                UpsertOutcome::Added
            }
        }
    }

    /// Removes the entry for (state, symbol) if present. Returns whether a
    /// removal occurred; the order of the remaining entries is unchanged.
    pub fn remove(&mut self, state: &str, symbol: Symbol) -> bool {
        match self
            .rules
            .iter()
            .position(|r| r.state == state && r.symbol == symbol)
        {
            Some(index) => {
                self.rules.remove(index);
                true
            }
            None => false,
        }
    }

    /// Finds the action for an exact (state, symbol) match. `None` is the
    /// normal "no applicable transition" outcome, not a fault.
    pub fn lookup(&self, state: &str, symbol: Symbol) -> Option<&Action> {
        self.rules
            .iter()
            .find(|r| r.state == state && r.symbol == symbol)
            .map(|r| &r.action)
    }

    /// A defensive copy of all rules in insertion order.
    pub fn rules(&self) -> Vec<Rule> {
        self.rules.clone()
    }

    /// Number of entries in the table.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns `true` when the table holds no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
