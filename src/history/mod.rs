//! Bounded log of past evaluations

use std::collections::VecDeque;

use crate::form::Evaluation;

/// Default number of evaluations kept
pub const DEFAULT_MAX_DEPTH: usize = 100;

/// Evaluation history, oldest first
#[derive(Debug, Clone)]
pub struct History {
    entries: VecDeque<Evaluation>,
    /// Maximum number of entries; 0 disables recording
    max_depth: usize,
}

impl History {
    /// Create a history holding at most `max_depth` entries
    pub fn new(max_depth: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(max_depth.min(DEFAULT_MAX_DEPTH)),
            max_depth,
        }
    }

    /// Record an evaluation, evicting the oldest beyond `max_depth`
    pub fn push(&mut self, evaluation: Evaluation) {
        if self.max_depth == 0 {
            return;
        }
        while self.entries.len() >= self.max_depth {
            self.entries.pop_front();
        }
        self.entries.push_back(evaluation);
    }

    /// Most recent evaluation
    pub fn latest(&self) -> Option<&Evaluation> {
        self.entries.back()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Evaluation> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DEPTH)
    }
}
