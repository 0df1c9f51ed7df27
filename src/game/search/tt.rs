// src/game/search/tt.rs

use crate::game::evaluation::Score;
use std::collections::HashMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bound {
    Exact,
    Lower,
    Upper,
}

impl Bound {
    /// How a node result relates to its true value, given the window it was
    /// searched with.
    pub fn classify(value: Score, alpha: Score, beta: Score) -> Self {
        if value <= alpha {
            Bound::Upper
        } else if value >= beta {
            Bound::Lower
        } else {
            Bound::Exact
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TtEntry {
    pub value: Score,
    pub depth: u8,
    pub bound: Bound,
}

impl TtEntry {
    pub fn is_exact(&self) -> bool {
        self.bound == Bound::Exact
    }

    /// The stored value, if it settles a node searched to `depth` with the
    /// window `(alpha, beta)`.
    pub fn cutoff(&self, depth: u8, alpha: Score, beta: Score) -> Option<Score> {
        if self.depth < depth {
            return None;
        }
        match self.bound {
            Bound::Exact => Some(self.value),
            Bound::Lower if self.value >= beta => Some(self.value),
            Bound::Upper if self.value <= alpha => Some(self.value),
            _ => None,
        }
    }
}

/// Scores of visited positions keyed by their 64-bit Zobrist hash.
///
/// Writes always replace whatever was stored for the hash. Two positions
/// sharing a hash are treated as the same position.
#[derive(Clone, Debug, Default)]
pub struct TranspositionTable {
    table: HashMap<u64, TtEntry>,
}

impl TranspositionTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn probe(&self, hash: u64) -> Option<&TtEntry> {
        self.table.get(&hash)
    }

    pub fn store(&mut self, hash: u64, entry: TtEntry) {
        self.table.insert(hash, entry);
    }

    pub fn clear(&mut self) {
        self.table.clear();
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}
