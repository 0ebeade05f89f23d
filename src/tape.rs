//! This module defines the [`Tape`], a bi-infinite one-dimensional symbol
//! store. Cells are addressable by any `i64` index, default to blank, and are
//! stored sparsely so that far-apart indices never allocate the range between
//! them.

use crate::types::Symbol;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// An unbounded, randomly addressable tape with a blank default.
///
/// Storage is split into two independent sparse halves: non-negative indices
/// live in `right` at their own value, negative indices live in `left` at
/// `|index| + 1`. The mapping is bijective and keeps index 0 on the
/// non-negative side; slots 0 and 1 of the left half are never used.
///
/// Reads never mutate, writes overwrite, and `Clone` produces a fully
/// independent deep copy. Writing the blank symbol removes the cell, so the
/// cell reads as the caller-supplied default again afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tape {
    left: HashMap<u64, char>,
    right: HashMap<u64, char>,
}

/// Storage slot for a negative index.
fn left_slot(index: i64) -> u64 {
    debug_assert!(index < 0);
    index.unsigned_abs() + 1
}

impl Tape {
    /// Creates an all-blank tape.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the cell at `index`, falling back to blank when unset.
    pub fn get(&self, index: i64) -> Symbol {
        self.get_or(index, Symbol::BLANK)
    }

    /// Reads the cell at `index`, falling back to `default` when unset.
    pub fn get_or(&self, index: i64, default: Symbol) -> Symbol {
        let stored = if index < 0 {
            self.left.get(&left_slot(index))
        } else {
            self.right.get(&(index as u64))
        };

        match stored {
            Some(&ch) => Symbol::from(ch),
            None => default,
        }
    }

    /// Writes a symbol at `index`. Accepts anything convertible to a
    /// [`Symbol`], so string input is truncated to its first character.
    /// Writing blank erases the cell.
    pub fn set(&mut self, index: i64, value: impl Into<Symbol>) {
        let symbol = value.into();
        let (half, slot) = if index < 0 {
            (&mut self.left, left_slot(index))
        } else {
            (&mut self.right, index as u64)
        };

        match symbol.as_char() {
            Some(ch) => {
                half.insert(slot, ch);
            }
            None => {
                half.remove(&slot);
            }
        }
    }

    /// Resets the tape to all-blank. Copies taken earlier are unaffected.
    pub fn clear(&mut self) {
        self.left.clear();
        self.right.clear();
    }

    /// Writes each character of `text` into consecutive cells starting at
    /// `start_index`, left to right. Exactly equivalent to repeated `set`
    /// calls; cells outside the run are untouched.
    pub fn write_run(&mut self, text: &str, start_index: i64) {
        for (i, ch) in text.chars().enumerate() {
            self.set(start_index + i as i64, ch);
        }
    }

    /// Returns `true` when no cell holds a symbol.
    pub fn is_empty(&self) -> bool {
        self.left.is_empty() && self.right.is_empty()
    }

    /// The smallest and largest occupied indices, or `None` for an all-blank
    /// tape.
    pub fn bounds(&self) -> Option<(i64, i64)> {
        // Two's-complement negation of the magnitude stays defined at i64::MIN.
        let indices = self
            .left
            .keys()
            .map(|&slot| (slot - 1).wrapping_neg() as i64)
            .chain(self.right.keys().map(|&slot| slot as i64));

        indices.fold(None, |acc, index| match acc {
            None => Some((index, index)),
            Some((min, max)) => Some((min.min(index), max.max(index))),
        })
    }

    /// Renders the inclusive window `[from, to]` as text, blanks as spaces.
    pub fn text(&self, from: i64, to: i64) -> String {
        (from..=to).map(|i| self.get(i).to_string()).collect()
    }
}
