//! Adversarial search over the joint (cat, mouse) position
//!
//! A depth-limited minimax with alpha-beta pruning. Either agent can be the
//! maximizing side; the evaluation only looks at the cat-mouse distance and
//! ignores cheese and goal progress.
//!
//! ```
//! use cat_and_mouse::{boards, minimax::Minimax, Agent};
//!
//! let graph = boards::small()?;
//! let mut search = Minimax::new(&graph, 3);
//!
//! // Cat on 4, mouse on 7: the cat jumps straight onto the mouse
//! let result = search.search(4, 7, Agent::Cat, Agent::Cat);
//! assert_eq!(result.best_move, 7);
//! println!("{}", search.get_statistics().summary());
//! # Ok::<(), cat_and_mouse::GameError>(())
//! ```

use std::time::Instant;

use log::trace;

use crate::{
    game_state::Agent,
    graph::{Graph, Node},
    path::bfs_dist,
    stats::SearchStatistics,
    utils::legal_moves,
};

/// Score of a decided position (capture, or no path between the agents)
pub const WIN_SCORE: i32 = 10_000;

/// Result of a minimax search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Minimax value of the root from the maximizing agent's point of view
    pub value: i32,

    /// Node the agent to move at the root should go to
    pub best_move: Node,
}

/// Static evaluation of a position from `max_agent`'s point of view
///
/// - capture: `+WIN_SCORE` for the cat, `-WIN_SCORE` for the mouse
/// - no path between them: `+WIN_SCORE` for the mouse, `-WIN_SCORE` for the cat
/// - otherwise `-d` for the cat and `+d` for the mouse, `d` being the hop distance
pub fn evaluate(graph: &Graph, cat: Node, mouse: Node, max_agent: Agent) -> i32 {
    let sign = match max_agent {
        Agent::Cat => 1,
        Agent::Mouse => -1,
    };

    if cat == mouse {
        return sign * WIN_SCORE;
    }

    match bfs_dist(graph, cat, mouse) {
        None => -sign * WIN_SCORE,
        Some(d) => -sign * i32::try_from(d).unwrap_or(WIN_SCORE),
    }
}

/// Depth-limited alpha-beta searcher bound to one graph
pub struct Minimax<'g> {
    graph: &'g Graph,
    depth: u32,
    statistics: SearchStatistics,
}

impl<'g> Minimax<'g> {
    /// Creates a searcher that looks `depth` plies ahead
    ///
    /// A depth of 0 is valid and simply evaluates the current position.
    pub fn new(graph: &'g Graph, depth: u32) -> Self {
        Minimax {
            graph,
            depth,
            statistics: SearchStatistics::new(),
        }
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Searches from the given joint position with `turn` to move
    ///
    /// Statistics are reset at the start of every call.
    pub fn search(&mut self, cat: Node, mouse: Node, turn: Agent, max_agent: Agent) -> SearchResult {
        let mut statistics = SearchStatistics::new();
        statistics.depth = self.depth;

        let start_time = Instant::now();
        let result = alpha_beta(
            self.graph,
            cat,
            mouse,
            self.depth,
            turn,
            max_agent,
            i32::MIN,
            i32::MAX,
            &mut statistics,
        );
        statistics.total_time = start_time.elapsed();

        trace!(
            "minimax depth={} turn={} max={} cat={} mouse={} -> move={} value={} nodes={} cutoffs={}",
            self.depth,
            turn,
            max_agent,
            cat,
            mouse,
            result.best_move,
            result.value,
            statistics.nodes_visited,
            statistics.cutoffs
        );

        self.statistics = statistics;
        result
    }

    /// Returns the statistics of the last search
    pub fn get_statistics(&self) -> &SearchStatistics {
        &self.statistics
    }
}

/// One-shot search without keeping a searcher around
pub fn minimax(
    graph: &Graph,
    cat: Node,
    mouse: Node,
    depth: u32,
    turn: Agent,
    max_agent: Agent,
) -> SearchResult {
    Minimax::new(graph, depth).search(cat, mouse, turn, max_agent)
}

/// Legal moves with a capture, if any, listed first
///
/// Among moves of equal value the first one wins, so an immediate capture is
/// always preferred to a delayed one.
fn ordered_moves(graph: &Graph, turn: Agent, own: Node, opponent: Node) -> Vec<Node> {
    let mut moves = legal_moves(graph, turn, own, opponent);
    if let Some(index) = moves.iter().position(|&mv| mv == opponent) {
        moves[..=index].rotate_right(1);
    }
    moves
}

#[allow(clippy::too_many_arguments)]
fn alpha_beta(
    graph: &Graph,
    cat: Node,
    mouse: Node,
    depth: u32,
    turn: Agent,
    max_agent: Agent,
    mut alpha: i32,
    mut beta: i32,
    statistics: &mut SearchStatistics,
) -> SearchResult {
    statistics.nodes_visited += 1;

    let own = match turn {
        Agent::Cat => cat,
        Agent::Mouse => mouse,
    };

    if depth == 0 || cat == mouse {
        statistics.evaluations += 1;
        return SearchResult {
            value: evaluate(graph, cat, mouse, max_agent),
            best_move: own,
        };
    }

    let maximizing = turn == max_agent;
    let opponent = match turn {
        Agent::Cat => mouse,
        Agent::Mouse => cat,
    };

    let mut best = SearchResult {
        value: if maximizing { i32::MIN } else { i32::MAX },
        best_move: own,
    };

    for mv in ordered_moves(graph, turn, own, opponent) {
        let (next_cat, next_mouse) = match turn {
            Agent::Cat => (mv, mouse),
            Agent::Mouse => (cat, mv),
        };

        let child = alpha_beta(
            graph,
            next_cat,
            next_mouse,
            depth - 1,
            turn.opponent(),
            max_agent,
            alpha,
            beta,
            statistics,
        );

        if maximizing {
            if child.value > best.value {
                best = SearchResult {
                    value: child.value,
                    best_move: mv,
                };
            }
            alpha = alpha.max(best.value);
        } else {
            if child.value < best.value {
                best = SearchResult {
                    value: child.value,
                    best_move: mv,
                };
            }
            beta = beta.min(best.value);
        }

        if beta <= alpha {
            statistics.cutoffs += 1;
            break;
        }
    }

    best
}
