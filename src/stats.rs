//! Statistics collection for adversarial searches
//!
//! This module provides the counters recorded while the minimax search
//! walks the joint cat/mouse state tree.

use std::time::Duration;

/// Statistics collected during one minimax search
#[derive(Debug, Clone, PartialEq)]
pub struct SearchStatistics {
    /// Tree nodes entered, root included
    pub nodes_visited: u64,

    /// Calls to the evaluation function (depth cutoffs and captures)
    pub evaluations: u64,

    /// Times the remaining siblings were skipped because `beta <= alpha`
    pub cutoffs: u64,

    /// Depth budget the search started with
    pub depth: u32,

    /// Total time spent searching
    pub total_time: Duration,
}

impl SearchStatistics {
    /// Creates a new, empty statistics object
    pub fn new() -> Self {
        SearchStatistics {
            nodes_visited: 0,
            evaluations: 0,
            cutoffs: 0,
            depth: 0,
            total_time: Duration::from_secs(0),
        }
    }

    /// Returns the number of visited nodes per second
    pub fn nodes_per_second(&self) -> f64 {
        if self.total_time.as_secs_f64() <= 0.0 {
            return 0.0;
        }
        self.nodes_visited as f64 / self.total_time.as_secs_f64()
    }

    /// Folds another search's counters into this one
    pub fn merge(&mut self, other: &SearchStatistics) {
        self.nodes_visited += other.nodes_visited;
        self.evaluations += other.evaluations;
        self.cutoffs += other.cutoffs;
        self.depth = self.depth.max(other.depth);
        self.total_time += other.total_time;
    }

    /// Returns a summary of the statistics as a string
    pub fn summary(&self) -> String {
        format!(
            "Minimax Search Statistics:\n\
             - Depth: {}\n\
             - Nodes visited: {}\n\
             - Evaluations: {}\n\
             - Cutoffs: {}\n\
             - Total time: {:.3} ms\n\
             - Nodes per second: {:.1}",
            self.depth,
            self.nodes_visited,
            self.evaluations,
            self.cutoffs,
            self.total_time.as_secs_f64() * 1000.0,
            self.nodes_per_second(),
        )
    }
}

impl Default for SearchStatistics {
    fn default() -> Self {
        Self::new()
    }
}
