use alloc::collections::VecDeque;

use crate::*;

pub const DEFAULT_HISTORY_LIMIT: usize = 100;

/// Bounded stack of board snapshots, oldest evicted first.
#[derive(Clone, Debug, PartialEq)]
pub struct History {
    snapshots: VecDeque<Board>,
    limit: usize,
}

impl History {
    pub fn new(limit: usize) -> Self {
        let limit = limit.max(1);
        Self {
            snapshots: VecDeque::with_capacity(limit.min(DEFAULT_HISTORY_LIMIT)),
            limit,
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Stores a copy of `board`, must be called before the move is applied.
    pub fn snapshot(&mut self, board: &Board) {
        if self.snapshots.len() == self.limit {
            self.snapshots.pop_front();
        }
        self.snapshots.push_back(board.clone());
    }

    pub fn pop(&mut self) -> Option<Board> {
        self.snapshots.pop_back()
    }

    pub fn clear(&mut self) {
        self.snapshots.clear();
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LIMIT)
    }
}
