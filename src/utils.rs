//! Move helpers shared by the strategies and the adversarial search

use crate::game_state::Agent;
use crate::graph::{Graph, Node};

/// Returns the moves available to `agent` standing on `own` with the
/// opponent on `opponent`
///
/// The mouse may not step onto the cat. The cat may step onto the mouse,
/// which is how it captures. When nothing is legal the agent stays put, so
/// the result is never empty.
pub fn legal_moves(graph: &Graph, agent: Agent, own: Node, opponent: Node) -> Vec<Node> {
    let moves: Vec<Node> = match agent {
        Agent::Cat => graph.neighbors(own).to_vec(),
        Agent::Mouse => graph
            .neighbors(own)
            .iter()
            .copied()
            .filter(|&n| n != opponent)
            .collect(),
    };

    if moves.is_empty() {
        vec![own]
    } else {
        moves
    }
}

/// Hop distance used by the distance-scoring strategies
///
/// Unreachable pairs count as `graph.len()`, farther than any real path.
pub fn distance_or_far(graph: &Graph, from: Node, to: Node) -> usize {
    crate::path::bfs_dist(graph, from, to).unwrap_or(graph.len())
}
